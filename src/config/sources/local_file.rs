//! Project-local config file source: config/ai-bridge.toml and config/{env}.toml

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use std::path::Path;

/// Add project-local config files to builder.
/// Precedence: config/ai-bridge.toml (base) then config/{AI_BRIDGE_ENV}.toml (env-specific).
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    base_dir: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let config_dir = base_dir.join("config");
    let env_name = std::env::var("AI_BRIDGE_ENV").unwrap_or_else(|_| "development".to_string());

    let mut builder = builder;

    let base_config_path = config_dir.join("ai-bridge.toml");
    if base_config_path.exists() {
        builder = builder.add_source(File::from(base_config_path).required(false));
    }

    let env_config_path = config_dir.join(format!("{}.toml", env_name));
    if env_config_path.exists() {
        builder = builder.add_source(File::from(env_config_path).required(false));
    }

    Ok(builder)
}
