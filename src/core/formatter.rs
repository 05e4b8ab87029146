//! Chat text formatter.
//!
//! Converts the small markup dialect used in assistant replies (links, bold,
//! italic, strikethrough, inline code, headers, numbered and bulleted lists,
//! quotes, rules) into inline-styled HTML.
//!
//! The conversion is an ordered list of global regex substitutions. Every rule
//! runs over the output of the previous one, so ordering is part of the
//! observable behavior:
//!
//! - bold runs before italic, otherwise `**` would be eaten as two `*`;
//! - newlines become `<br>` before the list rules run, so list markers only
//!   match at the very start of the text (or after a `\r`) and each rewritten
//!   marker adds another `<br>` on top of the one left by its newline.
//!
//! Line anchors treat both `\n` and `\r` as terminators and `.` never crosses
//! either of them. Output is not sanitized.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

struct Rule {
    name: &'static str,
    pattern: Regex,
    replacement: &'static str,
}

impl Rule {
    fn new(name: &'static str, pattern: &str, replacement: &'static str) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern)
                .unwrap_or_else(|e| panic!("invalid formatter rule '{}': {}", name, e)),
            replacement,
        }
    }

    fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.pattern.replace_all(text, self.replacement)
    }
}

static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        Rule::new(
            "link",
            r"\[([^\]]+)\]\(([^)]+)\)",
            r#"<a href="${2}" target="_blank" style="color: var(--loreal-red); text-decoration: underline;">${1}</a>"#,
        ),
        Rule::new("bold", r"(?R)\*\*(.*?)\*\*", "<strong>${1}</strong>"),
        Rule::new("italic", r"(?R)\*(.*?)\*", "<em>${1}</em>"),
        Rule::new("strikethrough", r"(?R)~~(.*?)~~", "<del>${1}</del>"),
        Rule::new(
            "inline_code",
            r"`([^`]+)`",
            r#"<code style="background: #f5f5f5; padding: 2px 4px; border-radius: 3px; font-family: monospace;">${1}</code>"#,
        ),
        // Largest marker first so `###` never matches as `#`.
        Rule::new(
            "h3",
            r"(?mR)^### (.*)$",
            r#"<h3 style="color: var(--loreal-red); margin: 15px 0 10px 0;">${1}</h3>"#,
        ),
        Rule::new(
            "h2",
            r"(?mR)^## (.*)$",
            r#"<h2 style="color: var(--loreal-red); margin: 20px 0 15px 0;">${1}</h2>"#,
        ),
        Rule::new(
            "h1",
            r"(?mR)^# (.*)$",
            r#"<h1 style="color: var(--loreal-red); margin: 25px 0 20px 0;">${1}</h1>"#,
        ),
        Rule::new("line_break", r"\n", "<br>"),
        Rule::new(
            "numbered",
            r"([0-9]+\.\s)",
            r#"<br><strong style="color: var(--loreal-red);">${1}</strong>"#,
        ),
        Rule::new(
            "bullet",
            r"(?mR)^[-•*]\s",
            r#"<br><span style="color: var(--loreal-gold);">•</span> "#,
        ),
        Rule::new(
            "sub_bullet",
            r"(?mR)^\s+[-•*]\s",
            r#"<br>&nbsp;&nbsp;<span style="color: var(--loreal-gold);">◦</span> "#,
        ),
        Rule::new(
            "blockquote",
            r"(?mR)^>\s(.*)$",
            r#"<blockquote style="border-left: 3px solid var(--loreal-gold); padding-left: 15px; margin: 10px 0; font-style: italic; color: #666;">${1}</blockquote>"#,
        ),
        Rule::new(
            "horizontal_rule",
            r"(?mR)^---$",
            r#"<hr style="border: none; border-top: 2px solid var(--loreal-gold); margin: 20px 0;">"#,
        ),
        Rule::new("collapse_breaks", r"(?:<br>\s*){3,}", "<br><br>"),
    ]
});

/// Formats a chat message as HTML. Never fails; unmatched markup is kept verbatim.
pub fn format_chat_text(text: &str) -> String {
    let mut output = text.to_string();
    for rule in RULES.iter() {
        let replaced = match rule.apply(&output) {
            Cow::Owned(replaced) => replaced,
            Cow::Borrowed(_) => continue,
        };
        tracing::trace!(rule = rule.name, "formatter rule matched");
        output = replaced;
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    const NUMBER_OPEN: &str = r#"<strong style="color: var(--loreal-red);">"#;
    const BULLET: &str = r#"<br><span style="color: var(--loreal-gold);">•</span> "#;
    const SUB_BULLET: &str =
        r#"<br>&nbsp;&nbsp;<span style="color: var(--loreal-gold);">◦</span> "#;

    #[test]
    fn test_plain_text_only_gains_line_breaks() {
        assert_eq!(format_chat_text("hello world"), "hello world");
        assert_eq!(format_chat_text("line one\nline two"), "line one<br>line two");
        assert_eq!(format_chat_text(""), "");
    }

    #[test]
    fn test_bold_wraps_inner_text() {
        assert_eq!(format_chat_text("**bold**"), "<strong>bold</strong>");
    }

    #[test]
    fn test_bold_and_italic_do_not_collide() {
        assert_eq!(
            format_chat_text("*a* and **b**"),
            "<em>a</em> and <strong>b</strong>"
        );
    }

    #[test]
    fn test_link_opens_in_new_tab() {
        assert_eq!(
            format_chat_text("[click](http://x)"),
            r#"<a href="http://x" target="_blank" style="color: var(--loreal-red); text-decoration: underline;">click</a>"#
        );
    }

    #[test]
    fn test_strikethrough_and_inline_code() {
        assert_eq!(format_chat_text("~~gone~~"), "<del>gone</del>");
        let code = format_chat_text("use `retinol` nightly");
        assert!(code.starts_with("use <code style=\"background: #f5f5f5;"));
        assert!(code.ends_with(">retinol</code> nightly"));
    }

    #[test]
    fn test_headers_match_largest_marker_first() {
        assert_eq!(
            format_chat_text("### Title"),
            r#"<h3 style="color: var(--loreal-red); margin: 15px 0 10px 0;">Title</h3>"#
        );
        assert!(format_chat_text("## Sub").starts_with("<h2 "));
        assert!(format_chat_text("# Top").starts_with("<h1 "));
        assert_eq!(format_chat_text("#hashtag"), "#hashtag");
    }

    #[test]
    fn test_headers_apply_on_every_line() {
        let html = format_chat_text("# Morning\ntext\n## Evening");
        assert!(html.contains(">Morning</h1><br>text<br><h2 "));
        assert!(html.ends_with(">Evening</h2>"));
    }

    #[test]
    fn test_runs_of_breaks_collapse_to_two() {
        assert_eq!(format_chat_text("a\n\n\n\nb"), "a<br><br>b");
        assert_eq!(format_chat_text("a\n\nb"), "a<br><br>b");
    }

    #[test]
    fn test_numbered_items_get_an_extra_break() {
        let expected = format!(
            "Steps<br><br>{open}1. </strong>Cleanse<br><br>{open}2. </strong>Tone",
            open = NUMBER_OPEN
        );
        assert_eq!(format_chat_text("Steps\n1. Cleanse\n2. Tone"), expected);
    }

    #[test]
    fn test_numbered_marker_matches_mid_line() {
        let html = format_chat_text("Wait 2. Then rinse");
        assert_eq!(
            html,
            format!("Wait <br>{}2. </strong>Then rinse", NUMBER_OPEN)
        );
        assert_eq!(format_chat_text("version 2.5"), "version 2.5");
    }

    #[test]
    fn test_bullets_only_match_at_start_of_text() {
        assert_eq!(format_chat_text("- serum"), format!("{}serum", BULLET));
        assert_eq!(format_chat_text("• serum"), format!("{}serum", BULLET));
        assert_eq!(format_chat_text("* serum"), format!("{}serum", BULLET));
        // Newlines are already <br> by the time bullets are matched.
        assert_eq!(format_chat_text("intro\n- serum"), "intro<br>- serum");
    }

    #[test]
    fn test_indented_bullet_becomes_sub_bullet() {
        assert_eq!(format_chat_text("  - toner"), format!("{}toner", SUB_BULLET));
    }

    #[test]
    fn test_blockquote_takes_rest_of_text() {
        assert_eq!(
            format_chat_text("> apply gently"),
            r#"<blockquote style="border-left: 3px solid var(--loreal-gold); padding-left: 15px; margin: 10px 0; font-style: italic; color: #666;">apply gently</blockquote>"#
        );
        assert_eq!(format_chat_text("a\n> b"), "a<br>> b");
    }

    #[test]
    fn test_horizontal_rule_only_when_alone() {
        assert_eq!(
            format_chat_text("---"),
            r#"<hr style="border: none; border-top: 2px solid var(--loreal-gold); margin: 20px 0;">"#
        );
        assert_eq!(format_chat_text("a\n---"), "a<br>---");
    }

    #[test]
    fn test_carriage_return_ends_a_line() {
        assert_eq!(
            format_chat_text("### T\r\nx"),
            r#"<h3 style="color: var(--loreal-red); margin: 15px 0 10px 0;">T</h3>"#.to_string()
                + "\r<br>x"
        );
    }

    #[test]
    fn test_unmatched_markup_passes_through() {
        assert_eq!(format_chat_text("[label]("), "[label](");
        assert_eq!(format_chat_text("~~open"), "~~open");
        assert_eq!(format_chat_text("`open"), "`open");
    }
}
