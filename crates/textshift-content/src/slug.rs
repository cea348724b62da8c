//! URL slug generation.
//!
//! Produces lowercase, hyphen-delimited tokens that are safe to drop into a
//! URL path. Only ASCII word characters (`[A-Za-z0-9_]`) survive; everything
//! else is either a separator (whitespace, `-`) or removed outright.

/// Returns true for the characters a slug keeps verbatim.
#[inline]
pub(crate) fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Returns true for the whitespace that separates slug words.
///
/// This is Unicode `White_Space` with two changes: U+FEFF (zero-width
/// no-break space) counts as a space, and U+0085 (next line) does not.
#[inline]
pub(crate) fn is_slug_space(c: char) -> bool {
    c == '\u{feff}' || (c != '\u{85}' && c.is_whitespace())
}

/// Convert text to a URL-friendly slug.
///
/// Performs the following transformations:
/// 1. Converts to lowercase and trims surrounding whitespace
/// 2. Removes every character that is not a word character, whitespace, or `-`
/// 3. Turns each whitespace run into a single hyphen
/// 4. Collapses repeated hyphens into one
/// 5. Strips hyphens from both ends
///
/// Removed characters do not separate words: `"don't"` becomes `"dont"`.
/// The result is empty when nothing survives step 2.
///
/// # Examples
///
/// ```
/// use textshift_content::slug::slugify;
///
/// assert_eq!(slugify("Hello, World!"), "hello-world");
/// assert_eq!(slugify("  multiple   spaces  "), "multiple-spaces");
/// assert_eq!(slugify("--already--slugged--"), "already-slugged");
/// assert_eq!(slugify("snake_case stays"), "snake_case-stays");
/// assert_eq!(slugify("¿¡!?"), "");
/// ```
pub fn slugify(text: impl AsRef<str>) -> String {
    let lowered = text.as_ref().to_lowercase();
    let trimmed = lowered.trim_matches(is_slug_space);

    let mut slug = String::with_capacity(trimmed.len());
    let mut pending_separator = false;

    for c in trimmed.chars() {
        if is_word_char(c) {
            // Leading separators are dropped; interior runs become one hyphen
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c);
        } else if c == '-' || is_slug_space(c) {
            pending_separator = true;
        }
    }

    log::debug!(
        "slugify: {} bytes -> {} bytes",
        text.as_ref().len(),
        slug.len()
    );
    slug
}
