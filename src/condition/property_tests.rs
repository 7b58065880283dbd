//! Property tests for condition module
//!
//! Property 1: Condition parsing and negation

use proptest::prelude::*;

use crate::condition::ast::{Comparison, Predicate, OR_SEPARATOR};
use crate::condition::parser::parse;

// ═══════════════════════════════════════════════════════════════════════════
// Strategy generators for property tests
// ═══════════════════════════════════════════════════════════════════════════

/// Generate feature names as found in exported trees
fn field_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("device_type".to_string()),
        Just("browser".to_string()),
        Just("os_family".to_string()),
        Just("language".to_string()),
        Just("region".to_string()),
        Just("ad_size".to_string()),
        "[a-z][a-z_]{0,10}",
    ]
}

/// Generate opaque values, including '=' and punctuation
fn value_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[0-9]{1,3}",
        "[a-z]{1,6}",
        "[A-Z]{2}-[0-9]{2}",
        "[0-9]{2,3}x[0-9]{2,3}",
        "[a-z]{1,3}=[a-z0-9;,.]{1,4}",
    ]
}

fn comparison_strategy() -> impl Strategy<Value = Comparison> {
    prop_oneof![Just(Comparison::Equal), Just(Comparison::NotEqual)]
}

fn predicate_strategy() -> impl Strategy<Value = Predicate> {
    (field_strategy(), comparison_strategy(), value_strategy())
        .prop_map(|(field, comparison, value)| Predicate::new(field, comparison, value))
}

fn predicates_strategy() -> impl Strategy<Value = Vec<Predicate>> {
    prop::collection::vec(predicate_strategy(), 1..=4)
}

fn render(predicates: &[Predicate]) -> String {
    predicates
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(OR_SEPARATOR)
}

// ═══════════════════════════════════════════════════════════════════════════
// Property Tests
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    /// Property 1.1: Written predicates parse back in the same order
    #[test]
    fn prop_condition_parses_in_order(predicates in predicates_strategy()) {
        let text = render(&predicates);
        let cond = parse(&text).unwrap();
        prop_assert_eq!(cond.predicates(), predicates.as_slice());
    }

    /// Property 1.2: Display reproduces the source notation
    #[test]
    fn prop_display_matches_source(predicates in predicates_strategy()) {
        let text = render(&predicates);
        let cond = parse(&text).unwrap();
        prop_assert_eq!(cond.to_string(), text);
    }

    /// Property 1.3: Negation has one flipped predicate per source predicate
    #[test]
    fn prop_negation_is_conjunction_of_flipped(predicates in predicates_strategy()) {
        let cond = parse(&render(&predicates)).unwrap();
        let negation: Vec<Predicate> = cond.negation().collect();

        prop_assert_eq!(negation.len(), predicates.len());
        for (negated, original) in negation.iter().zip(&predicates) {
            prop_assert_eq!(&negated.field, &original.field);
            prop_assert_eq!(&negated.value, &original.value);
            prop_assert_eq!(negated.comparison, original.comparison.flipped());
        }
    }

    /// Property 1.4: A predicate always contradicts its own negation
    #[test]
    fn prop_predicate_contradicts_negation(p in predicate_strategy()) {
        prop_assert!(p.contradicts(&p.negated()));
        prop_assert!(!p.contradicts(&p));
    }

    /// Property 1.5: Contradiction is symmetric
    #[test]
    fn prop_contradiction_is_symmetric(a in predicate_strategy(), b in predicate_strategy()) {
        prop_assert_eq!(a.contradicts(&b), b.contradicts(&a));
    }
}
