use crate::domain::{AppError, LikhitConfig};

/// Parse and validate configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<LikhitConfig, AppError> {
    let config: LikhitConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
