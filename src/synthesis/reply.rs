//! Degraded-mode conversational reply.

use super::phrases::{LOCAL_REPLY_ADVICE, LOCAL_REPLY_PREAMBLE};
use super::strategy::{collapse_whitespace, truncate_chars};

/// Maximum characters of the user's input echoed back
pub const MAX_ECHO_CHARS: usize = 220;

/// Reply used when no real backend is available. Never fails.
pub fn local_reply(input: &str) -> String {
    format!(
        "{}\n\nRecebi a sua mensagem: \"{}\"\n\n{}",
        LOCAL_REPLY_PREAMBLE,
        echo(input),
        LOCAL_REPLY_ADVICE
    )
}

fn echo(input: &str) -> String {
    // double quotes become single quotes so the echo cannot close its own quoting
    let normalized = collapse_whitespace(input).replace('"', "'");
    let (mut echoed, truncated) = truncate_chars(&normalized, MAX_ECHO_CHARS);
    if truncated {
        echoed.push('…');
    }
    echoed
}
