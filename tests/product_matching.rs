//! Soundness checks for the suite's own comparison logic: price
//! normalization and snapshot matching. No browser required.

use favorites_suite::product::{clean_price, ProductSnapshot};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn cleans_rendered_prices_to_digit_strings() {
    assert_eq!(clean_price("450 ₽"), "450");
    assert_eq!(clean_price("1 299,00 ₽"), "129900");
    assert_eq!(clean_price("1200.00"), "120000");
    assert_eq!(clean_price(""), "");
}

#[test]
fn cyrillic_titles_compare_case_insensitively() {
    let a = ProductSnapshot::new("Краска БЕЛАЯ", "450 ₽");
    let b = ProductSnapshot::new("краска белая", "450");
    assert!(a.matches(&b));
    assert!(b.matches(&a));
}

#[test]
fn surrounding_whitespace_does_not_break_a_match() {
    let a = ProductSnapshot::new("  Грунтовка \n", "450 ₽");
    let b = ProductSnapshot::new("Грунтовка", "450 ₽");
    assert!(a.matches(&b));
}

#[test]
fn different_prices_never_match() {
    let a = ProductSnapshot::new("Грунтовка", "450 ₽");
    let b = ProductSnapshot::new("Грунтовка", "540 ₽");
    assert!(!a.matches(&b));
}

#[test]
fn distinct_price_renderings_collide_after_cleaning() {
    // Documented latent risk: separators and decimals are dropped, not
    // interpreted.
    let a = ProductSnapshot::new("Краска", "1 200,00 ₽");
    let b = ProductSnapshot::new("Краска", "1200.00");
    assert!(a.matches(&b));

    // Without decimals on one side the digit strings differ ("1200" vs
    // "120000"), so there is no collision.
    let c = ProductSnapshot::new("Краска", "1 200 ₽");
    assert!(!c.matches(&b));
}

proptest! {
    #[test]
    fn cleaned_price_is_the_digit_subsequence_of_its_input(raw in ".*") {
        let cleaned = clean_price(&raw);

        prop_assert!(cleaned.chars().all(|c| c.is_ascii_digit()));

        // Every digit of the input survives, in original order.
        let digits: Vec<char> = raw.chars().filter(char::is_ascii_digit).collect();
        prop_assert_eq!(cleaned.chars().collect::<Vec<char>>(), digits);
    }

    #[test]
    fn cleaning_is_idempotent(raw in ".*") {
        let once = clean_price(&raw);
        prop_assert_eq!(clean_price(&once), once.clone());
    }

    #[test]
    fn matching_is_reflexive(title in "\\PC*", price in "[0-9 ,.₽]*") {
        let snapshot = ProductSnapshot::new(title, &price);
        prop_assert!(snapshot.matches(&snapshot));
    }
}
