use crate::error::{ReceiptError, Result};
use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Category assigned to every extracted item. The extractor does not infer
/// real categories from receipt text; callers may re-tag items before
/// confirming a draft.
pub const DEFAULT_CATEGORY: &str = "grocery";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct LineItem {
    #[serde(rename = "itemName")]
    #[schemars(description = "Item name with leading/trailing OCR digit noise stripped")]
    pub name: String,

    #[schemars(
        description = "Price exactly as matched on the line: one or more digits, a dot, one or two fractional digits"
    )]
    pub price: String,

    #[schemars(description = "Always 1; the extractor does not infer quantities from text")]
    pub quantity: u32,

    #[schemars(description = "Always \"grocery\"; callers may re-tag before persisting")]
    pub category: String,
}

/// A tax or total line. Same shape as an item minus quantity and category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct ChargeLine {
    #[serde(rename = "itemName")]
    pub name: String,
    pub price: String,
}

/// Parser output for one receipt, pre-persistence.
///
/// A `None` slot marks a price-bearing line whose extraction failed. Slots keep
/// their position so a caller can show the draft for manual correction before
/// confirming; they are filtered out when the draft becomes a [`Receipt`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptDraft {
    #[schemars(description = "Matched merchant name, empty if unidentified")]
    pub store_name: String,
    pub items: Vec<Option<LineItem>>,
    pub tax: Vec<Option<ChargeLine>>,
    pub total: Vec<Option<ChargeLine>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct StoredItem {
    #[serde(rename = "itemName")]
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    pub category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct StoredCharge {
    #[serde(rename = "itemName")]
    pub name: String,
    pub price: f64,
}

/// A confirmed, persisted receipt. Immutable once inserted; deleted whole or
/// not at all, never updated in place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    #[schemars(description = "Opaque identifier assigned by the store at insert time")]
    pub id: String,

    #[schemars(description = "Owning user; a reference to an external identity, pre-verified")]
    pub user_id: String,

    pub store_name: String,
    pub items: Vec<StoredItem>,
    pub tax: Vec<StoredCharge>,
    pub total: Vec<StoredCharge>,
    pub created_at: DateTime<Utc>,
}

impl LineItem {
    fn into_stored(self) -> Result<StoredItem> {
        let price = parse_price(&self.name, &self.price)?;
        Ok(StoredItem {
            name: self.name,
            price,
            quantity: self.quantity,
            category: self.category,
        })
    }
}

impl ChargeLine {
    fn into_stored(self) -> Result<StoredCharge> {
        let price = parse_price(&self.name, &self.price)?;
        Ok(StoredCharge {
            name: self.name,
            price,
        })
    }
}

fn parse_price(name: &str, raw: &str) -> Result<f64> {
    raw.parse::<f64>()
        .map_err(|_| ReceiptError::InvalidAmount {
            name: name.to_string(),
            value: raw.to_string(),
        })
}

impl Receipt {
    /// Converts a confirmed draft into a persistable receipt for `user_id`.
    ///
    /// Drops the `None` placeholders left by failed line extractions and casts
    /// prices to numbers. Callers may have edited the draft, so an unparseable
    /// price is an [`ReceiptError::InvalidAmount`] rather than a panic. The id
    /// stays empty until the store assigns one at insert.
    pub fn from_draft(draft: ReceiptDraft, user_id: &str) -> Result<Receipt> {
        let items = draft
            .items
            .into_iter()
            .flatten()
            .map(LineItem::into_stored)
            .collect::<Result<Vec<_>>>()?;
        let tax = draft
            .tax
            .into_iter()
            .flatten()
            .map(ChargeLine::into_stored)
            .collect::<Result<Vec<_>>>()?;
        let total = draft
            .total
            .into_iter()
            .flatten()
            .map(ChargeLine::into_stored)
            .collect::<Result<Vec<_>>>()?;

        Ok(Receipt {
            id: String::new(),
            user_id: user_id.to_string(),
            store_name: draft.store_name,
            items,
            tax,
            total,
            created_at: Utc::now(),
        })
    }
}

/// One category's share of a single receipt, rounded to 2 decimals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct CategorySummary {
    pub name: String,
    pub value: f64,
}

/// One month's row in a multi-year consumption table.
///
/// `years` flattens to dynamic `year_<Y>` keys on the wire. A year/month
/// combination with no receipts is simply absent, never zero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct MonthlyRow {
    #[schemars(description = "Month long name, e.g. \"March\"")]
    pub name: String,

    #[serde(flatten)]
    pub years: BTreeMap<String, f64>,
}

/// One category's spending across the requested years, for radar charts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct RadarRow {
    pub subject: String,

    #[serde(flatten)]
    pub years: BTreeMap<String, f64>,

    #[serde(rename = "fullMark")]
    #[schemars(description = "Maximum single category/year amount across all rows")]
    pub full_mark: f64,
}

/// Distinct calendar year with its receipt count.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
pub struct YearCount {
    pub year: i32,
    pub count: usize,
}
