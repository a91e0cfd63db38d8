use regex::Regex;

/// What a single OCR line appears to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Price-bearing line naming a purchased item.
    Item,
    /// Price-bearing line naming a tax charge ("tax" or "hst").
    Tax,
    /// Price-bearing line naming the receipt total ("total" or "purchase").
    Total,
    /// No monetary amount found; candidate for store-name matching.
    Unrecognized,
}

/// Keyword-and-pattern classifier for one line of OCR output.
///
/// A line is price-bearing iff it contains an amount of the form
/// `<digits>.<1-2 digits>` anywhere. The tax check runs before the total
/// check, so a line carrying both keywords classifies as [`LineKind::Tax`].
pub struct LineClassifier {
    amount: Regex,
}

const TAX_KEYWORDS: [&str; 2] = ["tax", "hst"];
const TOTAL_KEYWORDS: [&str; 2] = ["total", "purchase"];

impl LineClassifier {
    pub fn new() -> Self {
        Self {
            amount: Regex::new(r"\d+\.\d{1,2}").unwrap(),
        }
    }

    pub fn classify(&self, line: &str) -> LineKind {
        if !self.amount.is_match(line) {
            return LineKind::Unrecognized;
        }

        let lower = line.to_lowercase();
        if TAX_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
            LineKind::Tax
        } else if TOTAL_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
            LineKind::Total
        } else {
            LineKind::Item
        }
    }
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_line() {
        let c = LineClassifier::new();
        assert_eq!(c.classify("MILK 2% 3.50"), LineKind::Item);
        assert_eq!(c.classify("BREAD $2.99"), LineKind::Item);
    }

    #[test]
    fn test_tax_line_case_insensitive() {
        let c = LineClassifier::new();
        assert_eq!(c.classify("TAX 0.45"), LineKind::Tax);
        assert_eq!(c.classify("hst 13% 1.30"), LineKind::Tax);
        assert_eq!(c.classify("Hst 0.26"), LineKind::Tax);
    }

    #[test]
    fn test_total_line_keywords() {
        let c = LineClassifier::new();
        assert_eq!(c.classify("TOTAL 3.95"), LineKind::Total);
        assert_eq!(c.classify("PURCHASE 12.00"), LineKind::Total);
    }

    #[test]
    fn test_tax_wins_over_total() {
        // Both keywords present: tax check runs first.
        let c = LineClassifier::new();
        assert_eq!(c.classify("TOTAL TAX 0.45"), LineKind::Tax);
    }

    #[test]
    fn test_no_amount_is_unrecognized() {
        let c = LineClassifier::new();
        assert_eq!(c.classify("WALMART SUPERCENTER"), LineKind::Unrecognized);
        assert_eq!(c.classify("TOTAL"), LineKind::Unrecognized);
        assert_eq!(c.classify(""), LineKind::Unrecognized);
        // Integer without a decimal point is not a monetary amount here.
        assert_eq!(c.classify("STORE #1234"), LineKind::Unrecognized);
    }

    #[test]
    fn test_amount_requires_one_or_two_decimals() {
        let c = LineClassifier::new();
        assert_eq!(c.classify("ITEM 3.5"), LineKind::Item);
        // "3.501" still contains the substring "3.50", so it is price-bearing.
        assert_eq!(c.classify("ITEM 3.501"), LineKind::Item);
    }
}
