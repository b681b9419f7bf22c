use once_cell::sync::Lazy;
use regex::Regex;

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").expect("tag pattern is valid"));

/// Plain-text alternative of a rendered document: every tag removed.
///
/// Entities are left as they are and whitespace from the template is kept;
/// mail clients that show the text part only need it to be readable.
pub fn plain_text(html: &str) -> String {
    TAG.replace_all(html, "").into_owned()
}
