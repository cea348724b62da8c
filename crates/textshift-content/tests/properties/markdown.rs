//! Markdown conversion invariants.

use proptest::prelude::*;
use textshift_content::{markdown_to_text, text_to_markdown};

/// Markdown lines with single spaces between words and no backticks or
/// tildes, so no code block can form.
fn codeless_markdown() -> impl Strategy<Value = String> {
    let words = proptest::collection::vec("[a-z#*_>\\-\\[\\]()1.]{1,6}", 1..6)
        .prop_map(|words| words.join(" "));
    let line = prop_oneof![words, Just(String::new())];
    proptest::collection::vec(line, 0..12).prop_map(|lines| lines.join("\n"))
}

proptest! {
    #[test]
    fn test_markdown_to_text_output_is_tidy(md in codeless_markdown()) {
        let text = markdown_to_text(&md);
        prop_assert_eq!(text.trim_end(), text.as_str());
        prop_assert!(!text.starts_with('\n'));
        prop_assert!(!text.contains("\n\n\n"));
        prop_assert!(text.lines().all(|line| line == line.trim_end()));
    }

    #[test]
    fn test_markdown_to_text_is_trimmed(md in "[a-z #*_>`~\\-\\[\\]()\n1.]{0,200}") {
        let text = markdown_to_text(&md);
        prop_assert_eq!(text.trim_end(), text.as_str());
        prop_assert!(!text.starts_with('\n'));
    }

    #[test]
    fn test_text_to_markdown_never_fails(text in any::<String>()) {
        let markdown = text_to_markdown(&text);
        prop_assert!(!markdown.contains("\n\n\n"));
    }

    #[test]
    fn test_bullet_lists_round_trip(
        items in proptest::collection::vec("[a-z][a-z ]{0,10}[a-z]", 1..6),
    ) {
        let text = items
            .iter()
            .map(|item| format!("• {item}"))
            .collect::<Vec<_>>()
            .join("\n");
        prop_assert_eq!(markdown_to_text(&text_to_markdown(&text)), text);
    }

    #[test]
    fn test_plain_lines_round_trip(
        lines in proptest::collection::vec("[a-zA-Z][a-zA-Z0-9 *_`\\[\\]<>#&|~+=-]{0,20}[a-zA-Z]", 1..5),
    ) {
        let text = lines.join("\n");
        prop_assert_eq!(markdown_to_text(&text_to_markdown(&text)), text);
    }
}
