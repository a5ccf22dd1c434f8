//! Integration tests for the AI bridge

mod config_integration;
mod local_synthesis;
mod presets;
mod resolver_routing;
