//! Config loading facade.

use super::merge::builder_with_defaults;
use super::sources::{env, global_file, local_file};
use super::BridgeConfig;
use crate::error::BridgeError;
use config::builder::DefaultState;
use config::{ConfigBuilder, File};
use std::path::Path;
use tracing::debug;

/// Loads [`BridgeConfig`] from layered sources
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a process started in `base_dir`.
    ///
    /// Precedence, lowest first: defaults, user-level file, `config/ai-bridge.toml`,
    /// `config/{AI_BRIDGE_ENV}.toml`, environment.
    pub fn load(base_dir: &Path) -> Result<BridgeConfig, BridgeError> {
        let builder = builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = local_file::add_to_builder(builder, base_dir)?;
        Self::finish(env::add_to_builder(builder)?)
    }

    /// Load configuration from one explicit file; environment still overrides it.
    pub fn load_from_file(path: &Path) -> Result<BridgeConfig, BridgeError> {
        if !path.exists() {
            return Err(BridgeError::ConfigError(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }
        let builder = builder_with_defaults()?.add_source(File::from(path).required(true));
        Self::finish(env::add_to_builder(builder)?)
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<BridgeConfig, BridgeError> {
        let config: BridgeConfig = builder.build()?.try_deserialize()?;
        debug!(
            endpoint_configured = config.backend.configured_endpoint().is_some(),
            "Configuration loaded"
        );
        Ok(config)
    }
}
