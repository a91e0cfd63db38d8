/// Built-in merchant list used when the caller has no list of their own.
/// Matching is case-insensitive, so casing here is cosmetic.
pub const DEFAULT_STORES: [&str; 12] = [
    "Walmart",
    "Costco",
    "Loblaws",
    "No Frills",
    "Sobeys",
    "Metro",
    "Food Basics",
    "FreshCo",
    "Safeway",
    "Whole Foods",
    "Trader Joe's",
    "Aldi",
];

/// Recovers the store identity from lines that carried no price.
///
/// Each unrecognized line is scanned against the known-merchant list; a list
/// entry whose lowercase form appears as a substring of the lowercased line
/// assigns the store name. The assignment is unconditional, so when several
/// lines match different merchants the last matching line wins. That overwrite
/// is pinned, inherited behavior, not a guarantee worth relying on.
pub struct StoreIdentifier {
    known_stores: Vec<String>,
}

impl StoreIdentifier {
    pub fn new(known_stores: Vec<String>) -> Self {
        Self { known_stores }
    }

    pub fn with_default_stores() -> Self {
        Self::new(DEFAULT_STORES.iter().map(|s| s.to_string()).collect())
    }

    /// Returns the matched merchant name, or an empty string when no
    /// unrecognized line mentions a known merchant.
    pub fn identify<'a, I>(&self, unrecognized_lines: I) -> String
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut store_name = String::new();
        for line in unrecognized_lines {
            let lower = line.to_lowercase();
            // First list entry matching this line; later lines may overwrite.
            for store in &self.known_stores {
                if lower.contains(&store.to_lowercase()) {
                    store_name = store.clone();
                    break;
                }
            }
        }
        store_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identifier() -> StoreIdentifier {
        StoreIdentifier::new(vec!["Walmart".to_string(), "Costco".to_string()])
    }

    #[test]
    fn test_case_insensitive_substring_match() {
        let id = identifier();
        assert_eq!(id.identify(["WALMART SUPERCENTER"]), "Walmart");
        assert_eq!(id.identify(["welcome to walmart #3456"]), "Walmart");
    }

    #[test]
    fn test_no_match_is_empty_string() {
        let id = identifier();
        assert_eq!(id.identify(["SOME CORNER SHOP", "THANK YOU"]), "");
        assert_eq!(id.identify([]), "");
    }

    #[test]
    fn test_last_matching_line_wins() {
        // Unconditional overwrite: a later matching line replaces an earlier
        // match. Pinned so a change here is deliberate, not accidental.
        let id = identifier();
        let lines = ["WALMART SUPERCENTER", "ALSO VISIT COSTCO"];
        assert_eq!(id.identify(lines), "Costco");
    }

    #[test]
    fn test_first_list_entry_wins_within_one_line() {
        let id = identifier();
        assert_eq!(id.identify(["WALMART NEXT TO COSTCO"]), "Walmart");
    }

    #[test]
    fn test_default_store_list_matches() {
        let id = StoreIdentifier::with_default_stores();
        assert_eq!(id.identify(["COSTCO WHOLESALE #123"]), "Costco");
    }
}
