mod api;
mod block;
mod config;
mod formatter;
mod html;
mod term;

pub use api::{ApiError, Diagnosis, Discussion, Plant, Profile, Reply, Session};
pub use block::{Block, Segment};
pub use config::Config;

/// Format raw message text into a vector of blocks.
pub fn format_message(text: &str) -> Vec<Block> {
    formatter::format_message(text)
}

/// Tokenize a single line into inline segments.
pub fn format_inline(text: &str) -> Vec<Segment> {
    formatter::format_inline(text)
}

/// Render blocks to an HTML fragment.
pub fn blocks_to_html(blocks: &[Block]) -> String {
    html::blocks_to_html(blocks)
}

/// Render blocks to ANSI-styled terminal text.
pub fn blocks_to_ansi(blocks: &[Block]) -> String {
    term::blocks_to_ansi(blocks)
}

/// Convert message text straight to an HTML fragment.
pub fn message_to_html(text: &str) -> String {
    html::blocks_to_html(&format_message(text))
}

/// Convert message text straight to ANSI-styled terminal text.
pub fn message_to_ansi(text: &str) -> String {
    term::blocks_to_ansi(&format_message(text))
}
