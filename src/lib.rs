mod block;
mod config;
mod document;
mod error;
mod escape;
mod html;
mod message;
mod parser;
mod text;

pub use block::{Block, HeadingLevel, LineKind, ListState};
pub use config::{Config, DocumentConfig, StyleConfig};
pub use document::{Document, assemble};
pub use error::{Error, Result};
pub use escape::{Escaped, escape_attr, escape_html};
pub use html::{accumulate, blocks_to_html, close_list, step};
pub use message::Message;
pub use parser::{classify, lines};
pub use text::plain_text;

/// Title used when none is given.
pub const DEFAULT_TITLE: &str = "Meeting Summary";

/// Classify every line of a summary.
pub fn parse(content: &str) -> Vec<LineKind<'_>> {
    parser::parse(content)
}

/// Render a summary into blocks.
pub fn to_blocks(content: &str) -> Vec<Block> {
    accumulate(parse(content))
}

/// Render a summary to a complete HTML email document using default config.
pub fn render(content: &str, title: Option<&str>) -> String {
    render_with_config(content, title, &Config::compiled_default())
}

/// Render a summary to a complete HTML email document with custom config.
pub fn render_with_config(content: &str, title: Option<&str>, config: &Config) -> String {
    let blocks = to_blocks(content);
    tracing::debug!(blocks = blocks.len(), bytes = content.len(), "rendered summary blocks");
    Document::new(title, blocks, config).to_html(config)
}
