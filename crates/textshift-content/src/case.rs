//! Case conversion.
//!
//! - [`to_snake_case`]: `myVariableName` → `my_variable_name`
//! - [`capitalize`]: `hello world` → `Hello World`
//! - [`to_upper_case`] / [`to_lower_case`]: full-string Unicode case mapping
//!
//! Case mapping uses the Unicode default tables and ignores locale, so the
//! Turkish dotless i and similar cases are not special-cased.

use crate::slug::is_word_char;

/// Convert text to `snake_case`.
///
/// Runs of non-word characters become word separators, and a camelCase
/// boundary (an ASCII uppercase letter directly after a word character)
/// starts a new word without consuming anything. Every word is lowercased
/// and empty words are dropped before joining with `_`.
///
/// Consecutive capitals split individually: `HTTPServer` becomes
/// `h_t_t_p_server`.
///
/// # Examples
///
/// ```
/// use textshift_content::case::to_snake_case;
///
/// assert_eq!(to_snake_case("myVariableName"), "my_variable_name");
/// assert_eq!(to_snake_case("Hello World!"), "hello_world");
/// assert_eq!(to_snake_case("already_snake"), "already_snake");
/// assert_eq!(to_snake_case(""), "");
/// ```
pub fn to_snake_case(text: impl AsRef<str>) -> String {
    let text = text.as_ref().trim();
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut prev_is_word = false;

    for c in text.chars() {
        if !is_word_char(c) {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_is_word = false;
            continue;
        }

        if c.is_ascii_uppercase() && prev_is_word {
            words.push(std::mem::take(&mut current));
        }
        current.push(c.to_ascii_lowercase());
        prev_is_word = true;
    }

    if !current.is_empty() {
        words.push(current);
    }

    log::debug!("to_snake_case: {} words", words.len());
    words.join("_")
}

/// Capitalize Each Word In Text.
///
/// The whole string is lowercased first, then split on the literal space
/// character only. Tabs and newlines stay inside their word, so
/// `"a\tb"` becomes `"A\tb"`. Empty words between repeated spaces are kept,
/// which preserves the original spacing.
///
/// # Examples
///
/// ```
/// use textshift_content::case::capitalize;
///
/// assert_eq!(capitalize("hello world"), "Hello World");
/// assert_eq!(capitalize("hELLO   wORLD"), "Hello   World");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(text: impl AsRef<str>) -> String {
    text.as_ref()
        .to_lowercase()
        .split(' ')
        .map(capitalize_word)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Uppercase the first character of a word, leaving the rest unchanged.
fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

/// Convert text to UPPERCASE.
pub fn to_upper_case(text: impl AsRef<str>) -> String {
    text.as_ref().to_uppercase()
}

/// Convert text to lowercase.
pub fn to_lower_case(text: impl AsRef<str>) -> String {
    text.as_ref().to_lowercase()
}

// ============================================================================
// Tests
// ============================================================================
