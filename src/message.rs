use serde::Serialize;

use crate::config::Config;
use crate::text::plain_text;

/// Everything the mail sender needs for one summary email.
///
/// Recipients are passed through as given; checking them is the caller's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
    pub text: String,
}

impl Message {
    /// Render `summary` and derive its plain-text part. The subject doubles as
    /// the document title and falls back to the configured default.
    pub fn compose(
        to: Vec<String>,
        subject: Option<&str>,
        summary: &str,
        config: &Config,
    ) -> Self {
        let subject = config.title_or_default(subject).to_string();
        let html = crate::render_with_config(summary, Some(subject.as_str()), config);
        let text = plain_text(&html);
        Self {
            to,
            subject,
            html,
            text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compose_fills_every_part() {
        let config = Config::compiled_default();
        let message = Message::compose(
            vec!["a@example.com".to_string()],
            Some("Retro"),
            "* Ship v2",
            &config,
        );
        assert_eq!(message.to, vec!["a@example.com"]);
        assert_eq!(message.subject, "Retro");
        assert!(message.html.contains("<title>Retro</title>"));
        assert!(message.text.contains("Ship v2"));
        assert!(!message.text.contains('<'));
    }

    #[test]
    fn subject_defaults_to_configured_title() {
        let config = Config::compiled_default();
        let message = Message::compose(Vec::new(), None, "x", &config);
        assert_eq!(message.subject, "Meeting Summary");
    }

    #[test]
    fn serializes_to_json() {
        let config = Config::compiled_default();
        let message = Message::compose(vec!["a@example.com".to_string()], None, "hi", &config);
        let json: serde_json::Value = serde_json::to_value(&message).unwrap();
        assert_eq!(json["to"][0], "a@example.com");
        assert_eq!(json["subject"], "Meeting Summary");
        assert!(json["html"].as_str().unwrap().contains(">hi</p>"));
    }
}
