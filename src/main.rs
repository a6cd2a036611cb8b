fn main() {
    likhit::app::cli::run();
}
