//! HTML stripping invariants.

use proptest::prelude::*;
use textshift_content::strip_html;

/// Fragments built from tags, entities, and whitespace.
fn markup() -> impl Strategy<Value = String> {
    let piece = prop_oneof![
        "[a-zA-Z0-9 ]{0,12}",
        Just("<p>".to_string()),
        Just("</p>".to_string()),
        Just("<b>".to_string()),
        Just("</b>".to_string()),
        Just("<br>".to_string()),
        Just("<script>hidden()</script>".to_string()),
        Just("&amp;".to_string()),
        Just("&lt;".to_string()),
        Just("\n".to_string()),
        Just("\t".to_string()),
        Just("   ".to_string()),
    ];
    proptest::collection::vec(piece, 0..40).prop_map(|pieces| pieces.concat())
}

fn assert_normalized(text: &str) -> Result<(), TestCaseError> {
    prop_assert_eq!(text.trim(), text);
    prop_assert!(!text.contains('\t'));
    prop_assert!(!text.contains("  "));
    prop_assert!(!text.contains(" \n"));
    prop_assert!(!text.contains("\n "));
    Ok(())
}

proptest! {
    #[test]
    fn test_strip_html_output_is_normalized(html in markup()) {
        let text = strip_html(&html);
        assert_normalized(&text)?;
        prop_assert!(!text.contains("hidden()"));
        prop_assert!(!text.contains("<p>"));
    }

    #[test]
    fn test_strip_html_never_fails(html in any::<String>()) {
        let text = strip_html(&html);
        assert_normalized(&text)?;
    }
}
