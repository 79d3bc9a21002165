use serde::{Deserialize, Serialize};

/// Inclusive calendar-date window used to filter transactions.
///
/// Both bounds are kept as the caller supplied them (`YYYY-MM-DD`) and are
/// handed to the store as filter values. Malformed values are rejected by the
/// store, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    pub start_date: String,
    pub end_date: String,
}

impl DateRange {
    pub fn new(start_date: impl Into<String>, end_date: impl Into<String>) -> Self {
        Self {
            start_date: start_date.into(),
            end_date: end_date.into(),
        }
    }

    /// Single-day range covering `date`
    pub fn single_day(date: chrono::NaiveDate) -> Self {
        let day = date.format("%Y-%m-%d").to_string();
        Self::new(day.clone(), day)
    }
}

/// Revenue and transaction count over a date range
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SalesTotals {
    pub total_revenue: i64,
    pub transaction_count: i64,
}

/// Best-selling product in a date range
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopProduct {
    /// Display name; empty when nothing sold in range
    #[serde(rename = "nama")]
    pub name: String,
    #[serde(rename = "qty_terjual")]
    pub quantity_sold: i64,
}

impl TopProduct {
    pub fn new(name: impl Into<String>, quantity_sold: i64) -> Self {
        Self {
            name: name.into(),
            quantity_sold,
        }
    }
}

/// Sales summary for a date range.
///
/// The serialized field names are the public response contract and must not
/// change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub total_revenue: i64,
    #[serde(rename = "total_transaksi")]
    pub total_transaction_count: i64,
    #[serde(rename = "produk_terlaris")]
    pub top_product: TopProduct,
}

impl Report {
    /// Combine the results of the two store reads.
    /// A missing best seller becomes the zero `TopProduct`.
    pub fn new(totals: SalesTotals, top_product: Option<TopProduct>) -> Self {
        Self {
            total_revenue: totals.total_revenue,
            total_transaction_count: totals.transaction_count,
            top_product: top_product.unwrap_or_default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total_transaction_count == 0
    }
}
