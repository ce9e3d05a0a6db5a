//! Markup fragments shared by the overlay and panel layouts.

use pulldown_cmark::{html, CowStr, Event, Parser, Tag, TagEnd};

/// Render Markdown emphasis (`**bold**`, `*em*`, `` `code` ``) without the
/// surrounding paragraph.
///
/// Only inline emphasis is rendered. Text that parses into any other
/// structure (list items, headings, links, raw HTML) is emitted as escaped
/// literal text, so one item always stays one line of text.
pub fn inline_markdown(text: &str) -> String {
    let events: Vec<Event<'_>> = Parser::new(text)
        .filter(|event| {
            !matches!(
                event,
                Event::Start(Tag::Paragraph) | Event::End(TagEnd::Paragraph)
            )
        })
        .collect();

    let mut out = String::with_capacity(text.len() + 16);
    if events.iter().all(is_inline) {
        html::push_html(&mut out, events.into_iter());
    } else {
        let literal = Event::Text(CowStr::Borrowed(text.trim()));
        html::push_html(&mut out, std::iter::once(literal));
    }
    out.trim_end().to_string()
}

fn is_inline(event: &Event<'_>) -> bool {
    matches!(
        event,
        Event::Text(_)
            | Event::Code(_)
            | Event::SoftBreak
            | Event::HardBreak
            | Event::Start(Tag::Emphasis | Tag::Strong)
            | Event::End(TagEnd::Emphasis | TagEnd::Strong)
    )
}

/// One `tech-tag` badge per technology, order preserved.
pub fn tech_badges(technologies: &[String]) -> String {
    technologies
        .iter()
        .map(|tech| format!("<span class=\"tech-tag\">{}</span>", tech))
        .collect()
}

/// One checked bullet per item, order preserved.
pub fn checked_items(items: &[String]) -> String {
    items
        .iter()
        .map(|item| {
            format!(
                "<li><i class=\"fas fa-check-circle success-icon\"></i> {}</li>",
                inline_markdown(item)
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_markdown_strips_paragraph() {
        assert_eq!(inline_markdown("plain text"), "plain text");
        assert_eq!(
            inline_markdown("Achieved **95%+ precision** overall"),
            "Achieved <strong>95%+ precision</strong> overall"
        );
    }

    #[test]
    fn test_inline_markdown_escapes_markup() {
        assert_eq!(
            inline_markdown("Processed 27K+ records with <3% missing values"),
            "Processed 27K+ records with &lt;3% missing values"
        );
        assert_eq!(inline_markdown("planning & analytics"), "planning &amp; analytics");
    }

    #[test]
    fn test_inline_markdown_keeps_block_markers_literal() {
        assert_eq!(
            inline_markdown("1. Ranked first of 40 teams"),
            "1. Ranked first of 40 teams"
        );
        assert_eq!(inline_markdown("- halved latency"), "- halved latency");
        assert_eq!(inline_markdown("# heading-ish"), "# heading-ish");
        assert_eq!(inline_markdown("> quoted <b>"), "&gt; quoted &lt;b&gt;");
        assert_eq!(inline_markdown("[docs](http://x)"), "[docs](http://x)");
    }

    #[test]
    fn test_badges_preserve_order() {
        let techs = vec!["SQL".to_string(), "Indexing".to_string()];
        assert_eq!(
            tech_badges(&techs),
            "<span class=\"tech-tag\">SQL</span><span class=\"tech-tag\">Indexing</span>"
        );
        assert_eq!(tech_badges(&[]), "");
    }

    #[test]
    fn test_checked_items() {
        let items = vec!["one".to_string(), "**two**".to_string()];
        let html = checked_items(&items);
        assert_eq!(html.matches("<li>").count(), 2);
        assert!(html.find("one").unwrap() < html.find("<strong>two</strong>").unwrap());
    }

    #[test]
    fn test_checked_items_one_bullet_per_item() {
        let items = vec![
            "1. Ranked first of 40 teams".to_string(),
            "- halved latency".to_string(),
            "# heading-ish".to_string(),
        ];
        let html = checked_items(&items);
        assert_eq!(html.matches("<li>").count(), 3);
        for tag in ["<ol>", "<ul>", "<h1>"] {
            assert!(!html.contains(tag), "unexpected {} in {}", tag, html);
        }
        assert!(html.contains("1. Ranked first of 40 teams"));
        assert!(html.contains("- halved latency"));
        assert!(html.contains("# heading-ish"));
    }
}
