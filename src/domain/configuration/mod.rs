pub mod likhit_config;
pub mod parse;

pub use likhit_config::{GenerationApiConfig, LikhitConfig};
pub use parse::parse_config_content;
