//! Product identity as read off a rendered page.

/// Reduce a rendered price string to its digit characters.
///
/// Currency symbols, spaces and separators are dropped, not interpreted:
/// `"1 299,00 ₽"` becomes `"129900"`. Comparison downstream is exact on this
/// digit string, so `"1 200,00 ₽"` and `"1200.00"` collide — a latent risk
/// kept as-is.
pub fn clean_price(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// An ephemeral (title, cleaned price) pair captured from one item container.
///
/// Snapshots are compared by value only: titles case-insensitively and
/// whitespace-trimmed, prices exactly on the cleaned digit string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductSnapshot {
    pub title: String,
    pub price: String,
}

impl ProductSnapshot {
    /// Build a snapshot from raw rendered text. Trims the title and cleans
    /// the price.
    pub fn new(title: impl Into<String>, raw_price: &str) -> Self {
        Self {
            title: title.into().trim().to_string(),
            price: clean_price(raw_price),
        }
    }

    /// Whether two snapshots identify the same product.
    pub fn matches(&self, other: &ProductSnapshot) -> bool {
        self.title.trim().to_lowercase() == other.title.trim().to_lowercase()
            && self.price == other.price
    }
}

impl std::fmt::Display for ProductSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.title, self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_price_keeps_digits_in_order() {
        assert_eq!(clean_price("450 ₽"), "450");
        assert_eq!(clean_price("1 299,00 ₽"), "129900");
        assert_eq!(clean_price(""), "");
        assert_eq!(clean_price("руб."), "");
    }

    #[test]
    fn title_match_is_case_insensitive_and_trimmed() {
        let a = ProductSnapshot::new("  Краска БЕЛАЯ ", "450 ₽");
        let b = ProductSnapshot::new("краска белая", "450");
        assert!(a.matches(&b));
        assert!(b.matches(&a));
    }

    #[test]
    fn price_match_is_exact_on_digit_string() {
        let a = ProductSnapshot::new("Грунтовка", "450 ₽");
        let b = ProductSnapshot::new("Грунтовка", "4500 ₽");
        assert!(!a.matches(&b));
    }
}
