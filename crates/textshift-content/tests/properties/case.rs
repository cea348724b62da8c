//! Case conversion invariants.

use proptest::prelude::*;
use textshift_content::{capitalize, to_lower_case, to_snake_case, to_upper_case};

proptest! {
    #[test]
    fn test_snake_case_charset(s in any::<String>()) {
        let snake = to_snake_case(&s);
        prop_assert!(
            snake.chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'),
            "unexpected character in {:?}",
            snake
        );
    }

    #[test]
    fn test_snake_case_of_lower_words(
        words in proptest::collection::vec("[a-z][a-z0-9]{0,7}", 1..6),
    ) {
        prop_assert_eq!(to_snake_case(words.join(" ")), words.join("_"));
    }

    #[test]
    fn test_snake_case_of_camel_words(
        head in "[a-z]{1,8}",
        tail in proptest::collection::vec("[A-Z][a-z]{1,7}", 0..5),
    ) {
        let camel = format!("{head}{}", tail.concat());
        let mut expected = vec![head.clone()];
        expected.extend(tail.iter().map(|w| w.to_lowercase()));
        prop_assert_eq!(to_snake_case(&camel), expected.join("_"));
    }

    #[test]
    fn test_capitalize_is_idempotent(s in "[a-zA-Z0-9 ,.!?'-]{0,64}") {
        let once = capitalize(&s);
        prop_assert_eq!(capitalize(&once), once);
    }

    #[test]
    fn test_capitalize_preserves_spaces(s in any::<String>()) {
        let spaces = s.matches(' ').count();
        prop_assert_eq!(capitalize(&s).matches(' ').count(), spaces);
    }

    #[test]
    fn test_upper_case_is_idempotent(s in any::<String>()) {
        let once = to_upper_case(&s);
        prop_assert_eq!(to_upper_case(&once), once);
    }

    #[test]
    fn test_lower_case_is_idempotent(s in any::<String>()) {
        let once = to_lower_case(&s);
        prop_assert_eq!(to_lower_case(&once), once);
    }
}
