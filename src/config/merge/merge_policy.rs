//! Merge rules: defaults, override order, conflict handling.

use crate::config::{default_connect_timeout_secs, default_request_timeout_secs};
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("backend.connect_timeout_secs", default_connect_timeout_secs() as i64)?
        .set_default("backend.request_timeout_secs", default_request_timeout_secs() as i64)
}
