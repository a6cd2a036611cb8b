use include_dir::{Dir, include_dir};

static PROMPT_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/prompts");

/// Read a prompt template embedded in the binary.
pub fn read_prompt_template(path: &str) -> Option<String> {
    PROMPT_DIR.get_file(path).and_then(|file| file.contents_utf8()).map(|s| s.to_string())
}
