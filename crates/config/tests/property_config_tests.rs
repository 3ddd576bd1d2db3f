//! Property-based tests for key string parsing.
//!
//! Test coverage:
//! - Every single printable character parses to itself with no modifiers.
//! - Modifier order and case never change the parsed result.
//! - `canonical()` is insensitive to ctrl/meta choice and letter case.

use devtoolbox_config::parse_key;
use proptest::prelude::*;

/// Single printable ASCII characters other than the `+` separator.
fn printable_char_strategy() -> impl Strategy<Value = char> {
    prop::char::range('!', '~').prop_filter("separator", |c| *c != '+')
}

/// Subsets of modifier tokens in random order and case.
fn modifier_tokens_strategy() -> impl Strategy<Value = Vec<String>> {
    (
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(ctrl, shift, alt, upper)| {
            let mut tokens = Vec::new();
            if ctrl {
                tokens.push("ctrl");
            }
            if shift {
                tokens.push("shift");
            }
            if alt {
                tokens.push("alt");
            }
            tokens
                .into_iter()
                .map(|t| if upper { t.to_ascii_uppercase() } else { t.to_string() })
                .collect()
        })
        .prop_shuffle()
}

proptest! {
    #[test]
    fn test_single_char_parses_verbatim(c in printable_char_strategy()) {
        let parsed = parse_key(&c.to_string()).unwrap();
        prop_assert_eq!(parsed.key, c.to_string());
        prop_assert!(parsed.modifiers.is_empty());
    }

    #[test]
    fn test_modifier_order_and_case_are_irrelevant(
        tokens in modifier_tokens_strategy(),
        c in prop::char::range('a', 'z'),
    ) {
        let mut forward = tokens.clone();
        forward.push(c.to_string());
        let mut reversed: Vec<String> = tokens.into_iter().rev().collect();
        reversed.push(c.to_string());

        let a = parse_key(&forward.join("+")).unwrap();
        let b = parse_key(&reversed.join(" + ")).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn test_canonical_ignores_mod_spelling_and_case(
        c in prop::char::range('a', 'z'),
        use_meta in any::<bool>(),
    ) {
        let modifier = if use_meta { "Cmd" } else { "Ctrl" };
        let lower = parse_key(&format!("{modifier}+{c}")).unwrap();
        let upper = parse_key(&format!("Mod+{}", c.to_ascii_uppercase())).unwrap();
        prop_assert_eq!(lower.canonical(), upper.canonical());
    }
}
