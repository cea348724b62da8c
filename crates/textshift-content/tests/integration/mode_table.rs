//! Conversion-mode table completeness and consistency.

use textshift_content::{
    ConversionMode, ConversionModes, capitalize, conversion_modes, lookup, markdown_to_text,
    mode_keys, slugify, strip_html, text_to_markdown, to_lower_case, to_snake_case,
    to_upper_case,
};

const DECLARED_KEYS: [&str; 8] = [
    "markdown-to-text",
    "text-to-markdown",
    "slugify",
    "snake-case",
    "capitalize",
    "uppercase",
    "lowercase",
    "strip-html",
];

#[test]
fn test_every_declared_key_has_a_full_descriptor() {
    for key in DECLARED_KEYS {
        assert!(lookup(key).is_some(), "missing descriptor for {key}");
        let descriptor = lookup(key).unwrap();
        for (field, value) in [
            ("label", descriptor.label),
            ("description", descriptor.description),
            ("input_label", descriptor.input_label),
            ("output_label", descriptor.output_label),
            ("input_placeholder", descriptor.input_placeholder),
            ("output_placeholder", descriptor.output_placeholder),
        ] {
            assert!(!value.trim().is_empty(), "{key}: empty {field}");
        }
    }
}

#[test]
fn test_enumeration_is_stable_and_complete() {
    let first: Vec<_> = mode_keys().collect();
    let second: Vec<_> = conversion_modes().map(|(key, _)| key).collect();
    assert_eq!(first, DECLARED_KEYS);
    assert_eq!(second, DECLARED_KEYS);
}

#[test]
fn test_unknown_keys_are_absent() {
    for key in ["", "kebab-case", "SLUGIFY", "strip_html", "markdown"] {
        assert!(lookup(key).is_none(), "{key} should not resolve");
        let err = key.parse::<ConversionMode>().unwrap_err();
        assert!(err.is_not_found());
    }
}

#[test]
fn test_only_markdown_modes_are_bidirectional() {
    let bidirectional: Vec<_> = conversion_modes()
        .filter(|(_, descriptor)| descriptor.bidirectional)
        .map(|(key, _)| key)
        .collect();
    assert_eq!(bidirectional, ["markdown-to-text", "text-to-markdown"]);
}

#[test]
fn test_inverse_agrees_with_bidirectional_flag() {
    for mode in ConversionMode::ALL {
        assert_eq!(
            mode.inverse().is_some(),
            mode.descriptor().bidirectional,
            "{mode}"
        );
        if let Some(inverse) = mode.inverse() {
            assert_eq!(inverse.inverse(), Some(mode));
        }
    }
}

#[test]
fn test_convert_matches_free_functions() {
    let samples = [
        "",
        "Hello, World!",
        "myVariableName",
        "# Title\n\n- **one**\n- two",
        "<p>Hello <b>World</b></p>",
        "Notes\n\n• a\n• b",
    ];
    for input in samples {
        assert_eq!(ConversionMode::MarkdownToText.convert(input), markdown_to_text(input));
        assert_eq!(ConversionMode::TextToMarkdown.convert(input), text_to_markdown(input));
        assert_eq!(ConversionMode::Slugify.convert(input), slugify(input));
        assert_eq!(ConversionMode::SnakeCase.convert(input), to_snake_case(input));
        assert_eq!(ConversionMode::Capitalize.convert(input), capitalize(input));
        assert_eq!(ConversionMode::Uppercase.convert(input), to_upper_case(input));
        assert_eq!(ConversionMode::Lowercase.convert(input), to_lower_case(input));
        assert_eq!(ConversionMode::StripHtml.convert(input), strip_html(input));
    }
}

#[test]
fn test_table_serializes_in_declaration_order() {
    let json = serde_json::to_string(&ConversionModes).unwrap();
    let positions: Vec<_> = DECLARED_KEYS
        .iter()
        .map(|key| json.find(&format!("\"{key}\":")).unwrap())
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_descriptor_serializes_camel_case() {
    let value = serde_json::to_value(lookup("strip-html").unwrap()).unwrap();
    assert_eq!(value["label"], "Strip HTML");
    assert_eq!(value["inputLabel"], "HTML");
    assert_eq!(value["outputLabel"], "Clean Text");
    assert_eq!(
        value["outputPlaceholder"],
        "Clean text without HTML tags will appear here"
    );
    assert_eq!(value["bidirectional"], false);
}

#[test]
fn test_mode_serde_names_match_keys() {
    for mode in ConversionMode::ALL {
        let json = serde_json::to_string(&mode).unwrap();
        assert_eq!(json, format!("\"{}\"", mode.key()));
        let back: ConversionMode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mode);
    }
}

#[test]
fn test_table_is_shareable_across_threads() {
    let handles: Vec<_> = ConversionMode::ALL
        .into_iter()
        .map(|mode| std::thread::spawn(move || (mode, mode.convert("Hello World"))))
        .collect();
    for handle in handles {
        let (mode, output) = handle.join().unwrap();
        assert_eq!(output, mode.convert("Hello World"));
    }
}
