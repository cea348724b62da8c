//! The conversion-mode table.
//!
//! Each [`ConversionMode`] names one user-facing transformation and carries a
//! static [`ConversionModeDescriptor`] with the labels and placeholders a
//! front end shows for it. The table is compile-time data: it is never
//! mutated, needs no initialization, and is safe to share across threads.
//!
//! Enumeration always follows declaration order, which is the order a
//! selector should present the modes in.
//!
//! # Example
//!
//! ```rust
//! use textshift_content::modes::{lookup, mode_keys, ConversionMode};
//!
//! assert_eq!(mode_keys().next(), Some("markdown-to-text"));
//! assert_eq!(lookup("slugify").map(|d| d.label), Some("Slugify"));
//! assert!(lookup("kebab-case").is_none());
//!
//! let mode: ConversionMode = "markdown-to-text".parse().unwrap();
//! assert_eq!(mode.inverse(), Some(ConversionMode::TextToMarkdown));
//! ```

use std::fmt;
use std::str::FromStr;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use textshift_core::{Error, Result};

use crate::{case, html, markdown, slug};

/// Display and configuration metadata for one conversion mode.
///
/// Serializes with the camelCase field names front ends expect
/// (`inputLabel`, `outputPlaceholder`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionModeDescriptor {
    /// Name shown in the mode selector.
    pub label: &'static str,
    /// One-line summary of what the mode does.
    pub description: &'static str,
    /// Caption for the input pane.
    pub input_label: &'static str,
    /// Caption for the output pane.
    pub output_label: &'static str,
    /// Hint text for an empty input pane.
    pub input_placeholder: &'static str,
    /// Hint text for an empty output pane.
    pub output_placeholder: &'static str,
    /// Whether the mode has an inverse the UI can offer.
    pub bidirectional: bool,
}

/// A supported conversion, identified by a stable kebab-case key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConversionMode {
    /// `markdown-to-text`
    MarkdownToText,
    /// `text-to-markdown`
    TextToMarkdown,
    /// `slugify`
    Slugify,
    /// `snake-case`
    SnakeCase,
    /// `capitalize`
    Capitalize,
    /// `uppercase`
    Uppercase,
    /// `lowercase`
    Lowercase,
    /// `strip-html`
    StripHtml,
}

/// Descriptors, indexed by `ConversionMode as usize`.
static DESCRIPTORS: [ConversionModeDescriptor; 8] = [
    ConversionModeDescriptor {
        label: "Markdown → Text",
        description: "Convert Markdown to clean plain text",
        input_label: "Markdown",
        output_label: "Plain Text",
        input_placeholder: "Paste your Markdown, notes, or AI-generated text here...",
        output_placeholder: "Your clean, plain text will appear here.",
        bidirectional: true,
    },
    ConversionModeDescriptor {
        label: "Text → Markdown",
        description: "Convert plain text to formatted Markdown",
        input_label: "Plain Text",
        output_label: "Markdown",
        input_placeholder: "Type or paste your text here...",
        output_placeholder: "Generated Markdown will appear here...",
        bidirectional: true,
    },
    ConversionModeDescriptor {
        label: "Slugify",
        description: "Convert text to URL-friendly slugs",
        input_label: "Text",
        output_label: "URL Slug",
        input_placeholder: "Enter text to convert to URL slug...",
        output_placeholder: "url-friendly-slug-will-appear-here",
        bidirectional: false,
    },
    ConversionModeDescriptor {
        label: "Snake Case",
        description: "Convert text to snake_case format",
        input_label: "Text",
        output_label: "Snake Case",
        input_placeholder: "Enter text to convert to snake_case...",
        output_placeholder: "snake_case_text_will_appear_here",
        bidirectional: false,
    },
    ConversionModeDescriptor {
        label: "Capitalize",
        description: "Capitalize Each Word In Text",
        input_label: "Text",
        output_label: "Capitalized Text",
        input_placeholder: "enter text to capitalize each word...",
        output_placeholder: "Capitalized Text Will Appear Here",
        bidirectional: false,
    },
    ConversionModeDescriptor {
        label: "UPPERCASE",
        description: "Convert text to UPPERCASE",
        input_label: "Text",
        output_label: "UPPERCASE",
        input_placeholder: "enter text to convert to uppercase...",
        output_placeholder: "UPPERCASE TEXT WILL APPEAR HERE",
        bidirectional: false,
    },
    ConversionModeDescriptor {
        label: "lowercase",
        description: "convert text to lowercase",
        input_label: "Text",
        output_label: "lowercase",
        input_placeholder: "ENTER TEXT TO CONVERT TO LOWERCASE...",
        output_placeholder: "lowercase text will appear here",
        bidirectional: false,
    },
    ConversionModeDescriptor {
        label: "Strip HTML",
        description: "Remove HTML tags and extract clean text",
        input_label: "HTML",
        output_label: "Clean Text",
        input_placeholder: "Paste HTML content to strip tags...",
        output_placeholder: "Clean text without HTML tags will appear here",
        bidirectional: false,
    },
];

impl ConversionMode {
    /// Every mode, in declaration order.
    pub const ALL: [ConversionMode; 8] = [
        ConversionMode::MarkdownToText,
        ConversionMode::TextToMarkdown,
        ConversionMode::Slugify,
        ConversionMode::SnakeCase,
        ConversionMode::Capitalize,
        ConversionMode::Uppercase,
        ConversionMode::Lowercase,
        ConversionMode::StripHtml,
    ];

    /// The stable key identifying this mode.
    pub const fn key(self) -> &'static str {
        match self {
            ConversionMode::MarkdownToText => "markdown-to-text",
            ConversionMode::TextToMarkdown => "text-to-markdown",
            ConversionMode::Slugify => "slugify",
            ConversionMode::SnakeCase => "snake-case",
            ConversionMode::Capitalize => "capitalize",
            ConversionMode::Uppercase => "uppercase",
            ConversionMode::Lowercase => "lowercase",
            ConversionMode::StripHtml => "strip-html",
        }
    }

    /// The mode registered under `key`, if any.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.key() == key)
    }

    /// Display and configuration metadata for this mode.
    pub fn descriptor(self) -> &'static ConversionModeDescriptor {
        &DESCRIPTORS[self as usize]
    }

    /// Whether the mode has an inverse.
    pub fn is_bidirectional(self) -> bool {
        self.descriptor().bidirectional
    }

    /// The reverse conversion, for the bidirectional Markdown pair.
    pub fn inverse(self) -> Option<Self> {
        match self {
            ConversionMode::MarkdownToText => Some(ConversionMode::TextToMarkdown),
            ConversionMode::TextToMarkdown => Some(ConversionMode::MarkdownToText),
            _ => None,
        }
    }

    /// Like [`inverse`](Self::inverse), but one-way modes are an error.
    pub fn try_inverse(self) -> Result<Self> {
        self.inverse()
            .ok_or_else(|| Error::not_bidirectional(self.key()))
    }

    /// Run this mode's transform over `input`.
    pub fn convert(self, input: &str) -> String {
        log::debug!("converting {} bytes with mode {}", input.len(), self.key());
        match self {
            ConversionMode::MarkdownToText => markdown::markdown_to_text(input),
            ConversionMode::TextToMarkdown => markdown::text_to_markdown(input),
            ConversionMode::Slugify => slug::slugify(input),
            ConversionMode::SnakeCase => case::to_snake_case(input),
            ConversionMode::Capitalize => case::capitalize(input),
            ConversionMode::Uppercase => case::to_upper_case(input),
            ConversionMode::Lowercase => case::to_lower_case(input),
            ConversionMode::StripHtml => html::strip_html(input),
        }
    }
}

impl fmt::Display for ConversionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ConversionMode {
    type Err = Error;

    fn from_str(key: &str) -> Result<Self> {
        Self::from_key(key).ok_or_else(|| Error::mode_not_found(key))
    }
}

/// Iterate `(key, descriptor)` pairs in declaration order.
pub fn conversion_modes()
-> impl Iterator<Item = (&'static str, &'static ConversionModeDescriptor)> + Clone {
    ConversionMode::ALL
        .into_iter()
        .map(|mode| (mode.key(), mode.descriptor()))
}

/// Iterate mode keys in declaration order.
pub fn mode_keys() -> impl Iterator<Item = &'static str> + Clone {
    ConversionMode::ALL.into_iter().map(ConversionMode::key)
}

/// Look up a descriptor by key; unknown keys yield `None`.
pub fn lookup(key: &str) -> Option<&'static ConversionModeDescriptor> {
    ConversionMode::from_key(key).map(ConversionMode::descriptor)
}

/// The whole table as a serializable key → descriptor map.
///
/// Serializes as an object whose entries follow declaration order.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConversionModes;

impl Serialize for ConversionModes {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(ConversionMode::ALL.len()))?;
        for (key, descriptor) in conversion_modes() {
            map.serialize_entry(key, descriptor)?;
        }
        map.end()
    }
}

// ============================================================================
// Tests
// ============================================================================
