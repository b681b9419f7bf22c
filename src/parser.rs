use crate::block::{HeadingLevel, LineKind};

/// Split content into trimmed lines. `\r\n` counts as a single boundary.
pub fn lines(content: &str) -> impl Iterator<Item = &str> {
    content.split('\n').map(|line| {
        let line = line.strip_suffix('\r').unwrap_or(line);
        line.trim()
    })
}

/// Classify one trimmed line by its prefix.
///
/// `### ` is checked before `## ` so the longer marker wins. Whitespace
/// after a marker is consumed along with it.
pub fn classify(line: &str) -> LineKind<'_> {
    if line.is_empty() {
        return LineKind::Blank;
    }
    if let Some(rest) = line.strip_prefix("### ") {
        return LineKind::Heading(HeadingLevel::H3, rest.trim_start());
    }
    if let Some(rest) = line.strip_prefix("## ") {
        return LineKind::Heading(HeadingLevel::H2, rest.trim_start());
    }
    if let Some(rest) = line.strip_prefix("* ") {
        return LineKind::Bullet(rest.trim_start());
    }
    LineKind::Paragraph(line)
}

/// Classify every line of `content`.
pub fn parse(content: &str) -> Vec<LineKind<'_>> {
    lines(content).map(classify).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_line() {
        assert_eq!(classify(""), LineKind::Blank);
    }

    #[test]
    fn headings() {
        assert_eq!(classify("## Overview"), LineKind::Heading(HeadingLevel::H2, "Overview"));
        assert_eq!(classify("### Risks"), LineKind::Heading(HeadingLevel::H3, "Risks"));
    }

    #[test]
    fn extra_marker_whitespace_is_consumed() {
        assert_eq!(classify("##   Spaced"), LineKind::Heading(HeadingLevel::H2, "Spaced"));
        assert_eq!(classify("*  item"), LineKind::Bullet("item"));
    }

    #[test]
    fn bullet() {
        assert_eq!(classify("* Ship v2"), LineKind::Bullet("Ship v2"));
    }

    #[test]
    fn markers_need_a_space() {
        assert_eq!(classify("##Overview"), LineKind::Paragraph("##Overview"));
        assert_eq!(classify("*bold*"), LineKind::Paragraph("*bold*"));
        assert_eq!(classify("###"), LineKind::Paragraph("###"));
    }

    #[test]
    fn unsupported_markup_is_a_paragraph() {
        assert_eq!(classify("# Title"), LineKind::Paragraph("# Title"));
        assert_eq!(classify("#### Deep"), LineKind::Paragraph("#### Deep"));
        assert_eq!(classify("- dash"), LineKind::Paragraph("- dash"));
        assert_eq!(classify("1. one"), LineKind::Paragraph("1. one"));
    }

    #[test]
    fn splits_on_lf_and_crlf() {
        let split: Vec<_> = lines("a\r\nb\nc\r\n").collect();
        assert_eq!(split, vec!["a", "b", "c", ""]);
    }

    #[test]
    fn lines_are_trimmed() {
        let split: Vec<_> = lines("  ## Title  \n\t* item").collect();
        assert_eq!(split, vec!["## Title", "* item"]);
    }

    #[test]
    fn empty_content_is_one_blank_line() {
        assert_eq!(parse(""), vec![LineKind::Blank]);
    }
}
