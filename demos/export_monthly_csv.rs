//! Parses a few sample OCR receipts, persists them into a `MemoryStore`, and
//! exports the multi-year monthly consumption table as CSV on stdout.
//!
//! Run with: `cargo run --example export_monthly_csv`

use anyhow::Result;
use chrono::{TimeZone, Utc};
use receipt_ledger::*;

const SAMPLES: [(i32, u32, &str); 4] = [
    (
        2023,
        3,
        "WALMART SUPERCENTER\nMILK 2% 3.50\nBREAD 2.99\nTAX 0.45\nTOTAL 6.94",
    ),
    (
        2023,
        11,
        "COSTCO WHOLESALE\nEGGS 12CT 4.50\nCHICKEN 11.20\nTOTAL 15.70",
    ),
    (2024, 3, "WALMART\nYOGURT 750 6.99\nTOTAL 6.99"),
    (2024, 7, "NO FRILLS\nAPPLES 3.25\nHST 0.42\nTOTAL 3.67"),
];

fn main() -> Result<()> {
    let store = MemoryStore::new();
    let assembler = ReceiptAssembler::with_default_stores();

    for (year, month, text) in SAMPLES {
        let draft = assembler.assemble(text);
        let mut receipt = Receipt::from_draft(draft, "demo-user")?;
        receipt.created_at = Utc.with_ymd_and_hms(year, month, 15, 12, 0, 0).unwrap();
        let stored = store.insert(receipt)?;
        println!(
            "# stored {} ({}, {} items)",
            stored.id,
            stored.store_name,
            stored.items.len()
        );
    }

    let engine = AggregationEngine::new(&store);
    let years = [2023, 2024];
    let rows = engine.monthly_totals("demo-user", &years)?;

    let mut writer = csv::Writer::from_writer(std::io::stdout());
    let mut header = vec!["Month".to_string()];
    header.extend(years.iter().map(|y| year_key(*y)));
    writer.write_record(&header)?;

    for row in &rows {
        let mut record = vec![row.name.clone()];
        for year in years {
            let cell = row
                .years
                .get(&year_key(year))
                .map(|v| format!("{:.2}", v))
                .unwrap_or_default();
            record.push(cell);
        }
        writer.write_record(&record)?;
    }
    writer.flush()?;

    Ok(())
}
