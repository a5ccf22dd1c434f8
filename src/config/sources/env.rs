//! Environment source: `AI_BRIDGE__SECTION__KEY` variables, plus the
//! `AI_BRIDGE_BACKEND_URL` shorthand for the backend endpoint.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

pub const ENDPOINT_SHORTHAND: &str = "AI_BRIDGE_BACKEND_URL";

/// Add environment overrides to builder. The shorthand wins over everything.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    builder
        .add_source(
            Environment::with_prefix("AI_BRIDGE")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .set_override_option("backend.endpoint", std::env::var(ENDPOINT_SHORTHAND).ok())
}
