//! # Receipt Ledger
//!
//! A library for converting noisy OCR text from photographed retail receipts
//! into structured financial records, and answering analytical queries over
//! collections of those records.
//!
//! ## Core Concepts
//!
//! - **Draft**: the parser's best-effort structured view of one receipt —
//!   store name, items, tax and total lines. Failed line extractions stay in
//!   place as empty slots so a caller can prompt for manual correction.
//! - **Receipt**: a confirmed draft persisted for a user, with placeholders
//!   filtered out and prices cast to numbers. Immutable once stored.
//! - **Aggregation**: per-receipt category totals, multi-year monthly
//!   consumption tables, and category-by-year radar series, all recomputed
//!   per query against the storage collaborator.
//!
//! Parsing is heuristic text classification: no spatial layout reasoning, no
//! OCR error correction, no guarantee that every line is extracted. A single
//! garbled line degrades only that line, never the whole receipt.
//!
//! ## Example
//!
//! ```rust
//! use receipt_ledger::*;
//!
//! let assembler = ReceiptAssembler::new(vec!["Walmart".to_string()]);
//! let draft = assembler.assemble("MILK 2% 3.50\nTAX 0.45\nTOTAL 3.95\nWALMART SUPERCENTER");
//!
//! assert_eq!(draft.store_name, "Walmart");
//! assert_eq!(draft.items.len(), 1);
//!
//! let store = MemoryStore::new();
//! let receipt = store
//!     .insert(Receipt::from_draft(draft, "user-1").unwrap())
//!     .unwrap();
//!
//! let engine = AggregationEngine::new(&store);
//! let totals = engine.category_totals("user-1", &receipt.id).unwrap();
//! assert_eq!(totals[0].name, "grocery");
//! assert_eq!(totals[0].value, 3.50);
//! ```

pub mod aggregation;
pub mod assembler;
pub mod classifier;
pub mod error;
pub mod extractor;
pub mod schema;
pub mod storage;
pub mod store_name;
pub mod utils;

pub use aggregation::AggregationEngine;
pub use assembler::ReceiptAssembler;
pub use classifier::{LineClassifier, LineKind};
pub use error::{ReceiptError, Result};
pub use extractor::ItemExtractor;
pub use schema::*;
pub use storage::{MemoryStore, OcrEngine, ReceiptStore};
pub use store_name::{StoreIdentifier, DEFAULT_STORES};
pub use utils::*;

use log::info;

/// Parses one block of OCR text with a one-off assembler.
///
/// Convenience for callers that do not hold a configured
/// [`ReceiptAssembler`]; equivalent to constructing one with `known_stores`
/// and calling [`ReceiptAssembler::assemble`].
pub fn parse_receipt(raw_text: &str, known_stores: &[String]) -> ReceiptDraft {
    ReceiptAssembler::new(known_stores.to_vec()).assemble(raw_text)
}

/// Full upload pipeline: image bytes through the OCR collaborator, then
/// assembly into a draft.
///
/// OCR failure aborts this upload and surfaces to the caller; it is never
/// folded into an empty draft.
pub fn digitize(
    ocr: &dyn OcrEngine,
    image: &[u8],
    known_stores: &[String],
) -> Result<ReceiptDraft> {
    let text = ocr.recognize(image)?;
    info!("OCR produced {} bytes of text", text.len());
    Ok(parse_receipt(&text, known_stores))
}
