//! Visible-text extraction from HTML fragments.
//!
//! [`strip_html`] removes markup and returns the text a reader would see,
//! with whitespace normalized. It is a convenience extractor and not a
//! sanitizer: do not rely on it to make untrusted markup safe.
//!
//! Parsing sits behind the [`TextExtractor`] trait. The default
//! [`HtmlFragmentExtractor`] uses `scraper` (html5ever), which accepts any
//! input; malformed markup degrades to literal text rather than failing.
//! The whitespace pipeline in [`normalize_extracted_text`] runs the same way
//! whichever extractor produced the text.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Node};

static NEWLINE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("Invalid newline run regex"));

static SPACE_AROUND_NEWLINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^\S\n]*\n[^\S\n]*").expect("Invalid newline padding regex")
});

static TAB_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\t+").expect("Invalid tab run regex"));

static SPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" {2,}").expect("Invalid space run regex"));

/// Elements whose text never reaches the output.
const HIDDEN_ELEMENTS: [&str; 2] = ["script", "style"];

/// Turns an HTML fragment into its raw text content.
///
/// Implementations decode entities and drop tags, but leave whitespace as
/// found in the source; [`strip_html_with`] normalizes it afterwards.
/// Implementations must not fail: unparseable input is returned as text.
pub trait TextExtractor {
    /// Extract the concatenated text nodes of `html`.
    fn extract_text(&self, html: &str) -> String;
}

/// Default [`TextExtractor`], backed by the html5ever fragment parser.
///
/// Text inside `<script>` and `<style>` is skipped. Comments and doctypes
/// contribute nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlFragmentExtractor;

impl TextExtractor for HtmlFragmentExtractor {
    fn extract_text(&self, html: &str) -> String {
        let fragment = Html::parse_fragment(html);
        if !fragment.errors.is_empty() {
            log::trace!("html fragment parsed with {} errors", fragment.errors.len());
        }

        let mut text = String::with_capacity(html.len());

        // Explicit stack: deeply nested markup must not exhaust the call stack
        let mut stack: Vec<_> = fragment.root_element().children().rev().collect();
        while let Some(node) = stack.pop() {
            match node.value() {
                Node::Text(t) => text.push_str(t),
                Node::Element(el) if HIDDEN_ELEMENTS.contains(&el.name()) => {}
                Node::Element(_) => stack.extend(node.children().rev()),
                _ => {}
            }
        }

        text
    }
}

/// Strip HTML tags and return normalized visible text.
///
/// # Examples
///
/// ```
/// use textshift_content::html::strip_html;
///
/// assert_eq!(strip_html("<p>Hello <b>World</b></p>"), "Hello World");
/// assert_eq!(strip_html("Fish &amp; Chips"), "Fish & Chips");
/// assert_eq!(strip_html("<p>A</p>\n\n\n\n<p>B</p>"), "A\n\nB");
/// ```
pub fn strip_html(html: impl AsRef<str>) -> String {
    strip_html_with(&HtmlFragmentExtractor, html.as_ref())
}

/// Strip HTML using a caller-supplied extractor.
pub fn strip_html_with<E: TextExtractor + ?Sized>(extractor: &E, html: &str) -> String {
    let raw = extractor.extract_text(html);
    let text = normalize_extracted_text(&raw);
    log::debug!(
        "strip_html: {} bytes of markup -> {} bytes of text",
        html.len(),
        text.len()
    );
    text
}

/// Normalize whitespace in extracted text.
///
/// Applied in order:
/// 1. Three or more consecutive newlines become two
/// 2. Leading and trailing whitespace is trimmed
/// 3. Spaces and tabs touching a newline are removed
/// 4. Each run of tabs becomes one space
/// 5. Each run of two or more spaces becomes one space
///
/// Step 3 runs after step 1, so whitespace-only lines between newlines
/// can still leave three newlines in a row.
pub fn normalize_extracted_text(text: &str) -> String {
    let text = NEWLINE_RUN.replace_all(text, "\n\n");
    let text = SPACE_AROUND_NEWLINE.replace_all(text.trim(), "\n");
    let text = TAB_RUN.replace_all(&text, " ");
    SPACE_RUN.replace_all(&text, " ").into_owned()
}

// ============================================================================
// Tests
// ============================================================================
