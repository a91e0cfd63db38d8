use crate::error::{ReceiptError, Result};
use crate::schema::{CategorySummary, MonthlyRow, RadarRow, YearCount};
use crate::storage::ReceiptStore;
use crate::utils::{month_name, round2, year_end, year_key, year_start};
use chrono::Datelike;
use log::debug;
use std::collections::BTreeMap;

/// Read-only analytical queries over one user's persisted receipts.
///
/// All aggregation happens in-process over receipts fetched through the
/// [`ReceiptStore`] trait; the store only needs find/insert. Each query is
/// independent — a failure in one leaves others unaffected. Nothing is ever
/// written back, and summaries are recomputed on every call.
pub struct AggregationEngine<'a, S: ReceiptStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: ReceiptStore + ?Sized> AggregationEngine<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Spending per category for a single receipt: sum of `price * quantity`
    /// over its items, rounded to 2 decimals.
    ///
    /// Output is ordered by ascending category name.
    pub fn category_totals(
        &self,
        user_id: &str,
        receipt_id: &str,
    ) -> Result<Vec<CategorySummary>> {
        let receipt = self
            .store
            .find_by_id(user_id, receipt_id)?
            .ok_or_else(|| ReceiptError::UnknownReceipt(receipt_id.to_string()))?;

        let mut totals: BTreeMap<String, f64> = BTreeMap::new();
        for item in &receipt.items {
            *totals.entry(item.category.clone()).or_insert(0.0) +=
                item.price * item.quantity as f64;
        }

        debug!(
            "Category totals for receipt {}: {} categories",
            receipt_id,
            totals.len()
        );

        Ok(totals
            .into_iter()
            .map(|(name, value)| CategorySummary {
                name,
                value: round2(value),
            })
            .collect())
    }

    /// Monthly consumption table across `years`: for each receipt created
    /// within a requested year (UTC, Jan 1 00:00:00.000 through Dec 31
    /// 23:59:59.999 inclusive), its `total` charge prices are summed into the
    /// (month, `year_<Y>`) cell.
    ///
    /// One row per month that has any data, in calendar order. A year with no
    /// receipts in that month contributes no key — absent, not zero. Rejects
    /// an empty year set before touching the store.
    pub fn monthly_totals(&self, user_id: &str, years: &[i32]) -> Result<Vec<MonthlyRow>> {
        if years.is_empty() {
            return Err(ReceiptError::EmptyYearSet);
        }

        let mut table: BTreeMap<u32, BTreeMap<String, f64>> = BTreeMap::new();
        for &year in years {
            let receipts = self
                .store
                .find_in_range(user_id, year_start(year), year_end(year))?;
            debug!("Monthly totals: {} receipts in {}", receipts.len(), year);

            for receipt in receipts {
                let receipt_total: f64 = receipt.total.iter().map(|c| c.price).sum();
                *table
                    .entry(receipt.created_at.month())
                    .or_default()
                    .entry(year_key(year))
                    .or_insert(0.0) += receipt_total;
            }
        }

        Ok(table
            .into_iter()
            .map(|(month, years)| MonthlyRow {
                name: month_name(month).to_string(),
                years,
            })
            .collect())
    }

    /// Per-category spending by year, shaped for radar charts.
    ///
    /// Items are unwound across the user's whole collection, grouped by
    /// (year, category) summing `price` alone — quantity is deliberately not
    /// factored in here, unlike [`Self::category_totals`]; the two queries
    /// have always disagreed and consumers depend on each as-is. Groups are
    /// then filtered to the requested years and regrouped by category
    /// (ascending name), with `full_mark` set to the maximum single
    /// category/year amount across all rows.
    pub fn radar_data(&self, user_id: &str, years: &[i32]) -> Result<Vec<RadarRow>> {
        if years.is_empty() {
            return Err(ReceiptError::EmptyYearSet);
        }

        let receipts = self.store.find_by_user(user_id)?;

        let mut sums: BTreeMap<(String, i32), f64> = BTreeMap::new();
        for receipt in &receipts {
            let year = receipt.created_at.year();
            for item in &receipt.items {
                *sums.entry((item.category.clone(), year)).or_insert(0.0) += item.price;
            }
        }

        let mut rows: BTreeMap<String, BTreeMap<String, f64>> = BTreeMap::new();
        let mut full_mark = 0.0_f64;
        for ((category, year), amount) in sums {
            if !years.contains(&year) {
                continue;
            }
            full_mark = full_mark.max(amount);
            rows.entry(category).or_default().insert(year_key(year), amount);
        }

        Ok(rows
            .into_iter()
            .map(|(subject, years)| RadarRow {
                subject,
                years,
                full_mark,
            })
            .collect())
    }

    /// Distinct calendar years that hold at least one receipt for the user,
    /// with counts, ascending.
    pub fn receipt_years(&self, user_id: &str) -> Result<Vec<YearCount>> {
        let receipts = self.store.find_by_user(user_id)?;

        let mut counts: BTreeMap<i32, usize> = BTreeMap::new();
        for receipt in &receipts {
            *counts.entry(receipt.created_at.year()).or_insert(0) += 1;
        }

        Ok(counts
            .into_iter()
            .map(|(year, count)| YearCount { year, count })
            .collect())
    }
}
