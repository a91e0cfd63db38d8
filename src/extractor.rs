use crate::schema::{ChargeLine, LineItem, DEFAULT_CATEGORY};
use regex::Regex;

/// Parses one price-bearing line into a structured item.
///
/// The line must match `<name> <optional $><amount><up to 2 trailing letters>`
/// end to end; anything else yields `None`, and the caller is expected to keep
/// the empty slot in place rather than drop the line. The price field carries
/// the matched amount substring verbatim, with no reformatting.
pub struct ItemExtractor {
    line: Regex,
    lead_artifact: Regex,
    lead_digits: Regex,
    trail_digits: Regex,
}

impl ItemExtractor {
    pub fn new() -> Self {
        Self {
            line: Regex::new(r"^(.+?)\s+\$?(\d+\.\d{1,2})\s*[A-Za-z]?[A-Za-z]?$").unwrap(),
            // OCR artifact from line-number prefixes, e.g. "A 12 MILK" or "F2 BREAD"
            lead_artifact: Regex::new(r"^[A-Za-z]\s*\d+").unwrap(),
            lead_digits: Regex::new(r"^\d+").unwrap(),
            trail_digits: Regex::new(r"\d+$").unwrap(),
        }
    }

    /// Extracts an item. Quantity is always 1 and category always "grocery":
    /// this extractor does not infer either from text.
    pub fn extract(&self, line: &str) -> Option<LineItem> {
        let caps = self.line.captures(line)?;

        let raw_name = caps.get(1)?.as_str();
        let price = caps.get(2)?.as_str().to_string();

        let name = self.clean_name(raw_name);

        Some(LineItem {
            name,
            price,
            quantity: 1,
            category: DEFAULT_CATEGORY.to_string(),
        })
    }

    /// Extracts a tax or total line: same pattern, quantity and category
    /// fields dropped from the result.
    pub fn extract_charge(&self, line: &str) -> Option<ChargeLine> {
        self.extract(line).map(|item| ChargeLine {
            name: item.name,
            price: item.price,
        })
    }

    fn clean_name(&self, raw: &str) -> String {
        let step1 = self.lead_artifact.replace(raw, "");
        let step2 = self.lead_digits.replace(&step1, "");
        self.trail_digits.replace(&step2, "").to_string()
    }
}

impl Default for ItemExtractor {
    fn default() -> Self {
        Self::new()
    }
}
