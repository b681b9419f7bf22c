use std::fmt;

/// Append `text` to `out` with `&`, `<` and `>` replaced by named entities.
///
/// Quotes pass through untouched, so the result is only safe inside text
/// nodes. Use [`escape_attr`] for attribute values.
pub fn push_escaped(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}

/// Escape text for embedding in an HTML text node.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    push_escaped(text, &mut out);
    out
}

/// Escape text for embedding in a double-quoted attribute value.
pub fn escape_attr(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Text that has been escaped exactly once.
///
/// The only way to build one is [`Escaped::new`], which runs the escaper, so
/// a block holding an `Escaped` can never carry raw input or be escaped twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Escaped(String);

impl Escaped {
    pub fn new(raw: &str) -> Self {
        Self(escape_html(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Escaped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_markup_characters() {
        assert_eq!(escape_html("a < b && c > d"), "a &lt; b &amp;&amp; c &gt; d");
    }

    #[test]
    fn leaves_quotes_alone() {
        assert_eq!(escape_html(r#"say "hi" it's"#), r#"say "hi" it's"#);
    }

    #[test]
    fn existing_entities_are_escaped_again() {
        assert_eq!(escape_html("&amp;"), "&amp;amp;");
    }

    #[test]
    fn plain_text_is_unchanged() {
        assert_eq!(escape_html("Ship v2 · ünïcode"), "Ship v2 · ünïcode");
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn attr_escapes_quotes() {
        assert_eq!(escape_attr(r#"x" onload="y"#), "x&quot; onload=&quot;y");
        assert_eq!(escape_attr("a<b"), "a&lt;b");
    }

    #[test]
    fn escaped_wraps_escaped_text() {
        let text = Escaped::new("<b>");
        assert_eq!(text.as_str(), "&lt;b&gt;");
        assert_eq!(text.to_string(), "&lt;b&gt;");
    }
}
