use crate::classifier::{LineClassifier, LineKind};
use crate::extractor::ItemExtractor;
use crate::schema::ReceiptDraft;
use crate::store_name::StoreIdentifier;
use log::{debug, info};

/// Turns one block of raw OCR text into a [`ReceiptDraft`].
///
/// Stateless across calls: the same input always produces the same draft. All
/// configuration (the known-merchant list) is supplied at construction; there
/// is no process-wide state. Assembly never fails — the worst malformed input
/// yields a draft with empty buckets and an empty store name.
pub struct ReceiptAssembler {
    classifier: LineClassifier,
    extractor: ItemExtractor,
    identifier: StoreIdentifier,
}

impl ReceiptAssembler {
    pub fn new(known_stores: Vec<String>) -> Self {
        Self {
            classifier: LineClassifier::new(),
            extractor: ItemExtractor::new(),
            identifier: StoreIdentifier::new(known_stores),
        }
    }

    /// Uses the built-in [`DEFAULT_STORES`](crate::store_name::DEFAULT_STORES) list.
    pub fn with_default_stores() -> Self {
        Self {
            classifier: LineClassifier::new(),
            extractor: ItemExtractor::new(),
            identifier: StoreIdentifier::with_default_stores(),
        }
    }

    /// Splits `raw_text` into lines, classifies each, and routes price-bearing
    /// lines into the item/tax/total buckets and the rest into store-name
    /// matching. Failed extractions stay in their bucket as `None` so the
    /// caller can prompt for correction; no lines are trimmed or deduplicated.
    pub fn assemble(&self, raw_text: &str) -> ReceiptDraft {
        let mut draft = ReceiptDraft::default();
        let mut unrecognized: Vec<&str> = Vec::new();

        for line in raw_text.split('\n') {
            match self.classifier.classify(line) {
                LineKind::Tax => draft.tax.push(self.extractor.extract_charge(line)),
                LineKind::Total => draft.total.push(self.extractor.extract_charge(line)),
                LineKind::Item => draft.items.push(self.extractor.extract(line)),
                LineKind::Unrecognized => unrecognized.push(line),
            }
        }

        draft.store_name = self.identifier.identify(unrecognized);

        let failed = draft.items.iter().filter(|i| i.is_none()).count()
            + draft.tax.iter().filter(|t| t.is_none()).count()
            + draft.total.iter().filter(|t| t.is_none()).count();
        info!(
            "Assembled receipt draft: store {:?}, {} items, {} tax lines, {} total lines",
            draft.store_name,
            draft.items.len(),
            draft.tax.len(),
            draft.total.len()
        );
        if failed > 0 {
            debug!("{} price-bearing lines failed extraction and kept placeholders", failed);
        }

        draft
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::LineItem;

    fn assembler() -> ReceiptAssembler {
        ReceiptAssembler::new(vec!["Walmart".to_string()])
    }

    #[test]
    fn test_full_receipt() {
        let text = "MILK 2% 3.50\nTAX 0.45\nTOTAL 3.95\nWALMART SUPERCENTER";
        let draft = assembler().assemble(text);

        assert_eq!(draft.store_name, "Walmart");
        assert_eq!(
            draft.items,
            vec![Some(LineItem {
                name: "MILK 2%".to_string(),
                price: "3.50".to_string(),
                quantity: 1,
                category: "grocery".to_string(),
            })]
        );
        assert_eq!(draft.tax.len(), 1);
        let tax = draft.tax[0].as_ref().unwrap();
        assert_eq!((tax.name.as_str(), tax.price.as_str()), ("TAX", "0.45"));
        let total = draft.total[0].as_ref().unwrap();
        assert_eq!((total.name.as_str(), total.price.as_str()), ("TOTAL", "3.95"));
    }

    #[test]
    fn test_empty_input_yields_empty_draft() {
        let draft = assembler().assemble("");
        assert_eq!(draft, ReceiptDraft::default());
    }

    #[test]
    fn test_failed_extraction_keeps_slot() {
        // "3.50" is price-bearing but has no name fragment, so extraction
        // fails; its position in the items bucket must survive.
        let text = "MILK 3.50\n3.50\nBREAD 2.99";
        let draft = assembler().assemble(text);
        assert_eq!(draft.items.len(), 3);
        assert!(draft.items[0].is_some());
        assert!(draft.items[1].is_none());
        assert!(draft.items[2].is_some());
    }

    #[test]
    fn test_idempotent() {
        let text = "MILK 3.50\nGIBBERISH @@##\nTOTAL 3.50\nWALMART";
        let a = assembler();
        assert_eq!(a.assemble(text), a.assemble(text));
    }

    #[test]
    fn test_unmatched_noise_is_dropped() {
        let text = "THANK YOU FOR SHOPPING\n****\nMILK 3.50";
        let draft = assembler().assemble(text);
        assert_eq!(draft.store_name, "");
        assert_eq!(draft.items.len(), 1);
        assert!(draft.tax.is_empty());
        assert!(draft.total.is_empty());
    }

    #[test]
    fn test_no_blank_line_normalization() {
        // Blank lines route to the store scan, not into any bucket; buckets
        // see exactly the price-bearing lines in order.
        let text = "\n\nMILK 3.50\n\nTOTAL 3.50\n";
        let draft = assembler().assemble(text);
        assert_eq!(draft.items.len(), 1);
        assert_eq!(draft.total.len(), 1);
    }
}
