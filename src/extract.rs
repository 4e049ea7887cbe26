//! HTML view derivation
//!
//! Parses a fetched page once and derives the views the cache stores:
//! title, sanitized visible text, and the ordered link list. Deriving the
//! views at parse time keeps repeated reads identical without holding on to
//! a parsed tree.

use scraper::{ElementRef, Html, Node, Selector};

/// Title substituted when the document has no `<title>` element
pub const NO_TITLE: &str = "No Title Found";

/// Content substituted when the body yields no visible text
pub const NO_BODY_CONTENT: &str = "No Body Content Found";

/// Tags whose subtrees are excluded from visible text
const STRIP_TAGS: [&str; 4] = ["script", "style", "img", "input"];

/// Views derived from a fetched page
#[derive(Debug, Clone)]
pub struct ExtractedPage {
    /// Title element text, or [`NO_TITLE`]
    pub title: String,
    /// Visible body text, or [`NO_BODY_CONTENT`]
    pub content: String,
    /// Raw `href` values of anchors in document order, duplicates preserved
    pub links: Vec<String>,
}

/// Derive all cached views from raw HTML in a single parse
///
/// Malformed HTML is never an error; html5ever builds a best-effort tree.
pub fn extract_page(html: &str) -> ExtractedPage {
    let document = Html::parse_document(html);

    let title = extract_title(&document).unwrap_or_else(|| NO_TITLE.to_string());

    // html5ever always synthesizes a <body>, so a missing body surfaces
    // here as empty extracted text.
    let content = match body_text(&document) {
        Some(text) if !text.is_empty() => text,
        _ => NO_BODY_CONTENT.to_string(),
    };

    ExtractedPage {
        title,
        content,
        links: extract_links(&document),
    }
}

/// Truncate to at most `max` characters with a plain prefix cut
pub fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}

/// Extract the title element text, trimmed
fn extract_title(document: &Html) -> Option<String> {
    let selector = Selector::parse("title").ok()?;
    document
        .select(&selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
}

/// Extract visible text from the body element, if present
fn body_text(document: &Html) -> Option<String> {
    let selector = Selector::parse("body").ok()?;
    let body = document.select(&selector).next()?;
    Some(visible_text(body))
}

/// Collect text nodes under `root` in document order, skipping stripped
/// subtrees; each node is trimmed and whitespace-only nodes are dropped.
fn visible_text(root: ElementRef<'_>) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut stack: Vec<_> = root.children().rev().collect();

    while let Some(node) = stack.pop() {
        match node.value() {
            Node::Element(element) => {
                if !STRIP_TAGS.contains(&element.name()) {
                    stack.extend(node.children().rev());
                }
            }
            Node::Text(text) => {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    lines.push(trimmed.to_string());
                }
            }
            _ => {}
        }
    }

    lines.join("\n")
}

/// Collect non-empty `href` values of all anchors in document order
fn extract_links(document: &Html) -> Vec<String> {
    let mut links = Vec::new();
    if let Ok(selector) = Selector::parse("a") {
        for element in document.select(&selector) {
            if let Some(href) = element.value().attr("href") {
                if !href.is_empty() {
                    links.push(href.to_string());
                }
            }
        }
    }
    links
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_HTML: &str =
        r#"<html><title>Ex</title><body><p>Hi</p><a href="/x">link</a></body></html>"#;

    const SAMPLE_HTML_NOISE: &str = r#"
        <html>
        <head><title>  Noisy Page  </title><style>p { color: red; }</style></head>
        <body>
            <script>console.log("hidden");</script>
            <div>
                <p>Visible paragraph</p>
                <img src="/pic.png" alt="ignored">
                <input type="text" value="ignored">
            </div>
            <p>Closing text</p>
        </body>
        </html>
    "#;

    #[test]
    fn test_extract_scenario_page() {
        let page = extract_page(SAMPLE_HTML);
        assert_eq!(page.title, "Ex");
        assert_eq!(page.content, "Hi\nlink");
        assert_eq!(page.links, vec!["/x".to_string()]);
    }

    #[test]
    fn test_stripped_tags_are_excluded() {
        let page = extract_page(SAMPLE_HTML_NOISE);
        assert_eq!(page.title, "Noisy Page");
        assert_eq!(page.content, "Visible paragraph\nClosing text");
    }

    #[test]
    fn test_nested_text_joined_in_document_order() {
        let html = "<html><body><div><p>one</p><span>two</span></div><p>three</p></body></html>";
        let page = extract_page(html);
        assert_eq!(page.content, "one\ntwo\nthree");
    }

    #[test]
    fn test_text_nodes_are_trimmed() {
        let html = "<html><body><p>  spaced  </p></body></html>";
        let page = extract_page(html);
        assert_eq!(page.content, "spaced");
    }

    #[test]
    fn test_missing_title_substituted() {
        let page = extract_page("<html><body><p>Hi</p></body></html>");
        assert_eq!(page.title, NO_TITLE);
    }

    #[test]
    fn test_empty_body_substituted() {
        let page = extract_page("<html><head><title>Bare</title></head><body></body></html>");
        assert_eq!(page.title, "Bare");
        assert_eq!(page.content, NO_BODY_CONTENT);
        assert!(page.links.is_empty());
    }

    #[test]
    fn test_whitespace_only_body_substituted() {
        let page = extract_page("<html><body>   \n\t  </body></html>");
        assert_eq!(page.content, NO_BODY_CONTENT);
    }

    #[test]
    fn test_links_filtering_and_order() {
        let html = r#"<html><body>
            <a href="/a">first</a>
            <a href="b">second</a>
            <a>no href</a>
            <a href="">empty href</a>
            <a href="/a">duplicate</a>
        </body></html>"#;
        let page = extract_page(html);
        assert_eq!(
            page.links,
            vec!["/a".to_string(), "b".to_string(), "/a".to_string()]
        );
    }

    #[test]
    fn test_truncate_shorter_input_unchanged() {
        assert_eq!(truncate_chars("short", 2000), "short");
    }

    #[test]
    fn test_truncate_is_plain_prefix_cut() {
        let text = "abcdefghij".repeat(10);
        let cut = truncate_chars(&text, 25);
        assert_eq!(cut, "abcdefghijabcdefghijabcde");
    }

    #[test]
    fn test_truncate_counts_characters_not_bytes() {
        let text = "日本語テキスト";
        let cut = truncate_chars(text, 3);
        assert_eq!(cut, "日本語");
    }
}
