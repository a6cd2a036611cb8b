//! Filesystem/environment-backed configuration loading.
//!
//! Pure schema parsing lives in `domain::configuration`.

mod load_config;

pub use load_config::{CONFIG_ENV, DEFAULT_CONFIG_FILE, load_config};
