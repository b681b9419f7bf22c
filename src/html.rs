use crate::block::{Block, HeadingLevel, LineKind, ListState};
use crate::config::Config;
use crate::escape::escape_attr;

/// Close the list if one is open. Shared by every non-bullet transition and
/// by the end-of-input flush.
pub fn close_list(state: ListState, blocks: &mut Vec<Block>) -> ListState {
    if state == ListState::Open {
        blocks.push(Block::ListClose);
    }
    ListState::Closed
}

/// Apply one classified line to the accumulator and return the next state.
pub fn step(state: ListState, line: LineKind<'_>, blocks: &mut Vec<Block>) -> ListState {
    match line {
        LineKind::Blank => {
            let state = close_list(state, blocks);
            blocks.push(Block::Spacer);
            state
        }
        LineKind::Heading(level, text) => {
            let state = close_list(state, blocks);
            blocks.push(Block::heading(level, text));
            state
        }
        LineKind::Bullet(text) => {
            if state == ListState::Closed {
                blocks.push(Block::ListOpen);
            }
            blocks.push(Block::item(text));
            ListState::Open
        }
        LineKind::Paragraph(text) => {
            let state = close_list(state, blocks);
            blocks.push(Block::paragraph(text));
            state
        }
    }
}

/// Fold classified lines into blocks. Any list still open at the end is closed.
pub fn accumulate<'a, I>(lines: I) -> Vec<Block>
where
    I: IntoIterator<Item = LineKind<'a>>,
{
    let mut blocks = Vec::new();
    let state = lines
        .into_iter()
        .fold(ListState::Closed, |state, line| step(state, line, &mut blocks));
    close_list(state, &mut blocks);
    blocks
}

/// Render blocks to HTML fragments joined by newlines.
pub fn blocks_to_html(blocks: &[Block], config: &Config) -> String {
    let mut out = String::new();
    for (i, block) in blocks.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        emit_block(block, config, &mut out);
    }
    out
}

fn emit_block(block: &Block, config: &Config, out: &mut String) {
    let styles = &config.styles;
    match block {
        Block::Heading { level, text } => {
            let style = match level {
                HeadingLevel::H2 => &styles.h2,
                HeadingLevel::H3 => &styles.h3,
            };
            let tag = level.tag();
            out.push_str(&format!(
                "<{tag} style=\"{}\">{text}</{tag}>",
                escape_attr(style)
            ));
        }
        Block::Paragraph(text) => {
            out.push_str(&format!(
                "<p style=\"{}\">{text}</p>",
                escape_attr(&styles.p)
            ));
        }
        Block::Spacer => {
            out.push_str(&format!(
                "<div style=\"height:{}px\"></div>",
                config.document.spacer_height
            ));
        }
        Block::ListOpen => {
            out.push_str(&format!("<ul style=\"{}\">", escape_attr(&styles.ul)));
        }
        Block::Item(text) => {
            out.push_str(&format!(
                "<li style=\"{}\">{text}</li>",
                escape_attr(&styles.li)
            ));
        }
        Block::ListClose => out.push_str("</ul>"),
    }
}
