//! Every transform returns for large inputs without panicking.

use textshift_content::ConversionMode;

/// Input size for every mode.
const TEN_MIB: usize = 10 * 1024 * 1024;

/// Mixed prose, markup, and symbols repeated up to roughly `bytes`.
fn large_input(bytes: usize) -> String {
    let chunk = "Hello, <b>World</b>! myVariableName\t\t--  https://example.com\n\n\n\
                 # Heading\n- item *one*\n<script>x()</script> &amp; 日本語 ß\n";
    chunk.repeat(bytes / chunk.len() + 1)
}

#[test]
fn test_case_and_slug_transforms_handle_ten_mib() {
    let input = large_input(TEN_MIB);
    for mode in [
        ConversionMode::Slugify,
        ConversionMode::SnakeCase,
        ConversionMode::Capitalize,
        ConversionMode::Uppercase,
        ConversionMode::Lowercase,
    ] {
        let output = mode.convert(&input);
        assert!(!output.is_empty(), "{mode} produced nothing");
    }
}

#[test]
fn test_markup_transforms_handle_ten_mib() {
    let input = large_input(TEN_MIB);
    for mode in [
        ConversionMode::StripHtml,
        ConversionMode::MarkdownToText,
        ConversionMode::TextToMarkdown,
    ] {
        let output = mode.convert(&input);
        assert!(!output.is_empty(), "{mode} produced nothing");
    }
}

#[test]
fn test_strip_html_large_output_has_no_tags_from_markup() {
    let input = large_input(TEN_MIB);
    let output = ConversionMode::StripHtml.convert(&input);
    assert!(!output.contains("<b>"));
    assert!(!output.contains("x()"));
    assert!(!output.contains("\n\n\n"));
}
