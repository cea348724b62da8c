//! Slug invariants.

use proptest::prelude::*;
use textshift_content::slugify;

proptest! {
    #[test]
    fn test_slug_charset_and_hyphens(s in any::<String>()) {
        let slug = slugify(&s);
        prop_assert!(
            slug.chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-'),
            "unexpected character in {:?}",
            slug
        );
        prop_assert!(!slug.starts_with('-'));
        prop_assert!(!slug.ends_with('-'));
        prop_assert!(!slug.contains("--"));
    }

    #[test]
    fn test_slugify_is_idempotent(s in any::<String>()) {
        let once = slugify(&s);
        prop_assert_eq!(slugify(&once), once);
    }

    #[test]
    fn test_spaced_words_join_with_hyphens(
        words in proptest::collection::vec("[a-z0-9]{1,8}", 1..6),
        gap in "[ \t]{1,3}",
    ) {
        let text = words.join(&gap);
        prop_assert_eq!(slugify(&text), words.join("-"));
    }
}
