//! Table-based HTML wrapper that renders consistently across mail clients.

use crate::block::Block;
use crate::config::Config;
use crate::escape::escape_html;
use crate::html::blocks_to_html;

/// A title plus the blocks rendered under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document<'a> {
    pub title: &'a str,
    pub blocks: Vec<Block>,
}

impl<'a> Document<'a> {
    /// Pair blocks with `title`, falling back to the configured default title.
    pub fn new(title: Option<&'a str>, blocks: Vec<Block>, config: &'a Config) -> Self {
        Self {
            title: config.title_or_default(title),
            blocks,
        }
    }

    /// Produce the complete HTML document.
    pub fn to_html(&self, config: &Config) -> String {
        assemble(&self.blocks, self.title, config)
    }
}

/// Wrap rendered blocks in the mail skeleton. `title` is escaped here and
/// used for both `<title>` and the header banner.
pub fn assemble(blocks: &[Block], title: &str, config: &Config) -> String {
    let title = escape_html(title);
    let footer = escape_html(&config.document.footer);
    let width = config.document.width;
    let content = blocks_to_html(blocks, config);

    format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width,initial-scale=1" />
    <title>{title}</title>
  </head>
  <body style="margin:0;padding:0;background:#f3f4f6">
    <table role="presentation" cellpadding="0" cellspacing="0" width="100%" style="background:#f3f4f6;padding:24px 0">
      <tr>
        <td align="center">
          <table role="presentation" cellpadding="0" cellspacing="0" width="{width}" style="max-width:{width}px;background:#ffffff;border:1px solid #e5e7eb;border-radius:12px;overflow:hidden">
            <tr>
              <td style="padding:16px 20px;background:#0f172a">
                <h1 style="margin:0;font-size:18px;color:#f8fafc">{title}</h1>
              </td>
            </tr>
            <tr>
              <td style="padding:18px 20px">
                {content}
              </td>
            </tr>
            <tr>
              <td style="padding:14px 20px;background:#f8fafc;color:#475569;font-size:12px">
                {footer}
              </td>
            </tr>
          </table>
        </td>
      </tr>
    </table>
  </body>
</html>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_appears_escaped_in_head_and_banner() {
        let config = Config::compiled_default();
        let html = assemble(&[], "Report <x>", &config);
        assert!(html.contains("<title>Report &lt;x&gt;</title>"));
        assert!(html.contains(">Report &lt;x&gt;</h1>"));
        assert!(!html.contains("<x>"));
    }

    #[test]
    fn missing_or_empty_title_uses_default() {
        let config = Config::compiled_default();
        for title in [None, Some("")] {
            let html = Document::new(title, Vec::new(), &config).to_html(&config);
            assert!(html.contains("<title>Meeting Summary</title>"));
            assert!(html.contains(">Meeting Summary</h1>"));
        }
    }

    #[test]
    fn blocks_sit_in_content_row() {
        let config = Config::compiled_default();
        let html = assemble(&[Block::paragraph("hello")], "T", &config);
        let content = html.find(">hello</p>").unwrap();
        let banner = html.find("</h1>").unwrap();
        let footer = html.find("Sent from AI Meeting Summarizer").unwrap();
        assert!(banner < content && content < footer);
    }

    #[test]
    fn width_and_footer_come_from_config() {
        let mut config = Config::compiled_default();
        config.document.width = 600;
        config.document.footer = "Q&A bot".to_string();
        let html = assemble(&[], "T", &config);
        assert!(html.contains(r#"width="600" style="max-width:600px;"#));
        assert!(html.contains("Q&amp;A bot"));
    }

    #[test]
    fn is_a_complete_document() {
        let config = Config::compiled_default();
        let html = assemble(&[], "T", &config);
        assert!(html.starts_with("<!DOCTYPE html>\n<html>"));
        assert!(html.ends_with("</html>"));
    }
}
