//! HTML fragments for the chat window. Message bodies go through the formatter.

use crate::core::formatter::format_chat_text;
use crate::domain::model::Citation;

const ASSISTANT_LABEL: &str = "L'Oréal Assistant:";

fn citation_links(citations: &[Citation], extra_style: &str) -> String {
    citations
        .iter()
        .enumerate()
        .map(|(i, c)| {
            format!(
                r#"<a href="{}" target="_blank" style="color: var(--loreal-red); text-decoration: none;{}">[{}] {}</a>"#,
                c.url,
                extra_style,
                i + 1,
                c.title
            )
        })
        .collect::<Vec<_>>()
        .join("<br>")
}

pub fn user_message(text: &str) -> String {
    format!("<strong>You:</strong> {}", format_chat_text(text))
}

pub fn assistant_message(text: &str, citations: &[Citation]) -> String {
    let mut body = format_chat_text(text);

    if !citations.is_empty() {
        body.push_str(&format!(
            r#"<br><br><div style="margin-top: 10px; padding-top: 10px; border-top: 1px solid #ddd; font-size: 0.9em;"><strong>Sources:</strong><br>{}</div>"#,
            citation_links(citations, " font-size: 0.9em;")
        ));
    }

    format!(
        r#"<strong style="color: var(--loreal-red);">{}</strong><br>{}"#,
        ASSISTANT_LABEL, body
    )
}

pub fn routine_panel(text: &str, citations: &[Citation]) -> String {
    let sources = if citations.is_empty() {
        String::new()
    } else {
        format!(
            r#"<div style="margin-top: 15px; padding: 15px; background: #f9f9f9; border-radius: 8px; border-left: 4px solid var(--loreal-gold);"><p style="margin: 0 0 10px 0; font-weight: bold; color: var(--dark-gray);">📖 Sources:</p>{}</div>"#,
            citation_links(citations, "")
        )
    };

    format!(
        concat!(
            r#"<div style="border: 2px solid var(--loreal-red); border-radius: 8px; padding: 20px; background: linear-gradient(135deg, rgba(255, 0, 59, 0.05), rgba(227, 165, 53, 0.05)); margin-bottom: 20px;">"#,
            r#"<h3 style="color: var(--loreal-red); margin-top: 0;">✨ Your Personalized L'Oréal Routine</h3>"#,
            r#"<div style="line-height: 1.6;">{}</div>{}</div>"#,
            r#"<div style="padding: 15px; background: #f9f9f9; border-radius: 8px; border-left: 4px solid var(--loreal-gold);">"#,
            r#"<p style="margin: 0; font-style: italic; color: var(--dark-gray);">"#,
            "💬 Have questions about your routine? Ask me anything about skincare, haircare, makeup, or how to use these products!",
            "</p></div>"
        ),
        format_chat_text(text),
        sources
    )
}

pub fn empty_selection_notice() -> &'static str {
    r#"<p style="color: var(--loreal-red);">Please select some products first!</p>"#
}

pub fn error_message() -> &'static str {
    "<strong>Error:</strong> Sorry, there was an error processing your message. Please try again."
}

pub fn routine_error() -> &'static str {
    r#"<p style="color: var(--loreal-red);">Sorry, there was an error generating your routine. Please try again later.</p>"#
}

#[cfg(test)]
mod tests {
    use super::*;

    fn citations() -> Vec<Citation> {
        vec![
            Citation {
                url: "https://a.example".to_string(),
                title: "First".to_string(),
            },
            Citation {
                url: "https://b.example".to_string(),
                title: "Second".to_string(),
            },
        ]
    }

    #[test]
    fn test_user_message_is_formatted() {
        assert_eq!(
            user_message("**hi**"),
            "<strong>You:</strong> <strong>hi</strong>"
        );
    }

    #[test]
    fn test_assistant_message_without_citations() {
        assert_eq!(
            assistant_message("ok", &[]),
            r#"<strong style="color: var(--loreal-red);">L'Oréal Assistant:</strong><br>ok"#
        );
    }

    #[test]
    fn test_assistant_message_numbers_citations_from_one() {
        let html = assistant_message("ok", &citations());
        assert!(html.contains("<strong>Sources:</strong><br>"));
        assert!(html.contains(r#"href="https://a.example""#));
        assert!(html.contains(">[1] First</a><br><a "));
        assert!(html.contains(">[2] Second</a></div>"));
    }

    #[test]
    fn test_routine_panel_sources_box_is_optional() {
        let plain = routine_panel("**Step 1**", &[]);
        assert!(plain.contains(r#"<div style="line-height: 1.6;"><strong>Step 1</strong></div></div>"#));
        assert!(!plain.contains("Sources:"));

        let cited = routine_panel("text", &citations());
        assert!(cited.contains("📖 Sources:</p>"));
        assert!(cited.contains("[2] Second</a></div></div>"));
    }
}
