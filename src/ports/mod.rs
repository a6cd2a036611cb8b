mod text_generator;

pub use text_generator::{MockTextGenerator, TextGenerator};
