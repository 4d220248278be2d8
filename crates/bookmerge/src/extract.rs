//! Anchor extraction from bookmark export HTML.
//!
//! Walks every `<a>` element of a parsed document and yields one entry per
//! anchor that carries both a non-empty `href` and non-empty text content.
//! Parsing is tolerant: malformed input yields fewer (or zero) entries
//! rather than an error.

use scraper::{Html, Selector};

/// One link pulled out of a bookmark export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkEntry {
    /// Display text of the anchor, untrimmed.
    pub label: String,
    /// Target of the anchor's `href` attribute, exactly as written.
    pub url: String,
}

/// Extract all qualifying anchors from `html`, in document order.
///
/// Anchors missing an `href`, with an empty `href`, or with no text content
/// are skipped silently. A fresh parse happens per call.
pub fn extract_links(html: &str) -> Vec<LinkEntry> {
    let document = Html::parse_document(html);
    let mut entries = Vec::new();

    if let Ok(sel) = Selector::parse("a") {
        for el in document.select(&sel) {
            let Some(href) = el.value().attr("href") else {
                continue;
            };
            let label: String = el.text().collect();
            if href.is_empty() || label.is_empty() {
                continue;
            }
            entries.push(LinkEntry {
                label,
                url: href.to_string(),
            });
        }
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_links_basic() {
        let html = r#"
        <html><body>
        <dl>
            <dt><a href="https://a.com">Docs</a></dt>
            <dt><a href="https://b.com">News</a></dt>
        </dl>
        </body></html>
        "#;

        let entries = extract_links(html);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].label, "Docs");
        assert_eq!(entries[0].url, "https://a.com");
        assert_eq!(entries[1].label, "News");
        assert_eq!(entries[1].url, "https://b.com");
    }

    #[test]
    fn test_missing_href_skipped() {
        let html = r#"<a>no target</a><a href="https://x.com">kept</a>"#;

        let entries = extract_links(html);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].url, "https://x.com");
    }

    #[test]
    fn test_empty_href_and_empty_text_skipped() {
        let html = r#"
        <a href="">empty target</a>
        <a href="https://y.com"></a>
        <a href="https://z.com">kept</a>
        "#;

        let entries = extract_links(html);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].url, "https://z.com");
    }

    #[test]
    fn test_document_order_preserved() {
        let html = r#"
        <h3>Work</h3>
        <a href="https://1.example">one</a>
        <div><a href="https://2.example">two</a></div>
        <a href="https://3.example">three</a>
        "#;

        let urls: Vec<String> = extract_links(html).into_iter().map(|e| e.url).collect();
        assert_eq!(
            urls,
            vec!["https://1.example", "https://2.example", "https://3.example"]
        );
    }

    #[test]
    fn test_label_is_untrimmed_text_content() {
        let html = r#"<a href="https://x.com"> spaced <b>bold</b> </a>"#;

        let entries = extract_links(html);
        assert_eq!(entries[0].label, " spaced bold ");
    }

    #[test]
    fn test_malformed_input_degrades_instead_of_failing() {
        // Unclosed tags and stray brackets: the parser recovers and still
        // finds the one complete anchor.
        let html = r#"<dl><dt><a href="https://ok.com">ok</a><dt><a href=""#;

        let entries = extract_links(html);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].url, "https://ok.com");
    }

    #[test]
    fn test_garbage_input_yields_nothing() {
        assert!(extract_links("not markup at all").is_empty());
        assert!(extract_links("").is_empty());
    }

    #[test]
    fn test_entities_decoded_on_parse() {
        let html = r#"<a href="https://x.com/?a=1&amp;b=2">R &amp; D</a>"#;

        let entries = extract_links(html);
        assert_eq!(entries[0].url, "https://x.com/?a=1&b=2");
        assert_eq!(entries[0].label, "R & D");
    }
}
