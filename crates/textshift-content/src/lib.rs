//! Text transforms and the conversion-mode table.
//!
//! This crate holds every transformation textshift offers. Each transform is a
//! pure, stateless function from `&str` to a new `String`; none of them fail.
//! The [`modes`] table describes the transforms to a front end that lets a
//! user pick one.
//!
//! # Modules
//!
//! - [`case`]: snake_case, Capitalize Each Word, UPPER and lower case
//! - [`slug`]: URL slugs
//! - [`html`]: visible-text extraction from HTML fragments
//! - [`markdown`]: Markdown ↔ plain text
//! - [`modes`]: the static conversion-mode table and [`ConversionMode`]
//!
//! # Example
//!
//! ```rust
//! use textshift_content::{slugify, to_snake_case, ConversionMode};
//!
//! assert_eq!(slugify("Hello, World!"), "hello-world");
//! assert_eq!(to_snake_case("myVariableName"), "my_variable_name");
//!
//! let mode: ConversionMode = "capitalize".parse().unwrap();
//! assert_eq!(mode.convert("hello world"), "Hello World");
//! ```

pub mod case;
pub mod html;
pub mod markdown;
pub mod modes;
pub mod slug;

// Re-export the transforms at the crate root
pub use case::{capitalize, to_lower_case, to_snake_case, to_upper_case};
pub use html::{
    HtmlFragmentExtractor, TextExtractor, normalize_extracted_text, strip_html, strip_html_with,
};
pub use markdown::{markdown_to_text, text_to_markdown};
pub use modes::{
    ConversionMode, ConversionModeDescriptor, ConversionModes, conversion_modes, lookup, mode_keys,
};
pub use slug::slugify;

pub use textshift_core::{Error, Result};
