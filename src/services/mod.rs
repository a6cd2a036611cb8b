pub mod gemini_client;
pub mod input_files;
pub mod prompt_catalog;

pub use gemini_client::HttpGeminiClient;
pub use input_files::load_raw_fields;
pub use prompt_catalog::read_prompt_template;
