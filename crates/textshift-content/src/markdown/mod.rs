//! Markdown ↔ plain text conversion.
//!
//! - [`to_text`]: strip Markdown down to clean, readable plain text
//! - [`from_text`]: infer Markdown structure from plain text layout
//!
//! The two directions back the bidirectional conversion modes and are
//! designed to round-trip simple structured text:
//!
//! ```rust
//! use textshift_content::markdown::{markdown_to_text, text_to_markdown};
//!
//! let text = "Groceries\n\n• milk\n• eggs";
//! let markdown = text_to_markdown(text);
//! assert_eq!(markdown, "# Groceries\n\n- milk\n- eggs");
//! assert_eq!(markdown_to_text(&markdown), text);
//! ```

pub mod from_text;
pub mod to_text;

pub use from_text::text_to_markdown;
pub use to_text::markdown_to_text;
