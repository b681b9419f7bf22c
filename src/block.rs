use crate::escape::Escaped;

/// The two heading levels summaries may use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    H2,
    H3,
}

impl HeadingLevel {
    pub fn tag(self) -> &'static str {
        match self {
            HeadingLevel::H2 => "h2",
            HeadingLevel::H3 => "h3",
        }
    }
}

/// Structural kind of one trimmed input line, borrowing its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    Heading(HeadingLevel, &'a str),
    Bullet(&'a str),
    Paragraph(&'a str),
}

/// Whether a bullet list is currently open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListState {
    #[default]
    Closed,
    Open,
}

/// HTML fragments emitted by the accumulator, in output order.
///
/// Lists are spread over several fragments (`ListOpen`, one `Item` per
/// bullet, `ListClose`) because they are built incrementally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading { level: HeadingLevel, text: Escaped },
    Paragraph(Escaped),
    Spacer,
    ListOpen,
    Item(Escaped),
    ListClose,
}

impl Block {
    pub fn heading(level: HeadingLevel, raw: &str) -> Self {
        Block::Heading {
            level,
            text: Escaped::new(raw),
        }
    }

    pub fn paragraph(raw: &str) -> Self {
        Block::Paragraph(Escaped::new(raw))
    }

    pub fn item(raw: &str) -> Self {
        Block::Item(Escaped::new(raw))
    }
}
