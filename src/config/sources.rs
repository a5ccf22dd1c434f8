//! Configuration sources, lowest precedence first.

pub mod env;
pub mod global_file;
pub mod local_file;
