//! AI Bridge
//!
//! Routes content generation requests to a configured remote backend or, when
//! none is usable, to a deterministic local engine that synthesizes Portuguese
//! campaign content (speeches, meeting minutes, task plans) from prompt cues.
//!
//! The [`resolver::CapabilityResolver`] makes the routing decision once at
//! construction; callers use the same operations in either mode.

pub mod backend;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod message;
pub mod presets;
pub mod resolver;
pub mod rng;
pub mod session;
pub mod shape;
pub mod synthesis;
pub mod tool;

pub use error::{BackendError, BridgeError};
pub use resolver::{CapabilityResolver, CapabilityState};
