//! CLI domain: parse, route and output only.
//! No generation logic; the route table dispatches to the resolver and presets.

mod output;
mod parse;
mod route;

pub use output::map_error;
pub use parse::{parse_keyword_list, Cli, Commands};
pub use route::RunContext;
