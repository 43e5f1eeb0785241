use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::domain::{format_usd, range_text, RateEntry};

/// Identifier wrapper for cart line items.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CartItemId(pub Uuid);

impl CartItemId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Uuid::parse_str(raw.trim()).ok().map(Self)
    }
}

impl Default for CartItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CartItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A frozen copy of a resolved rate at the moment it was added. The cart
/// never re-derives an item from live selection state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: CartItemId,
    pub description: String,
    pub rate: String,
    pub low: f64,
    pub high: f64,
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    /// Snapshot a resolved entry. Guidance-only entries carry no numeric
    /// quote and are refused.
    pub fn from_entry(entry: &RateEntry) -> Option<Self> {
        if entry.is_informational() {
            return None;
        }
        Some(Self {
            id: CartItemId::new(),
            description: entry.description.clone(),
            rate: entry.text.clone(),
            low: entry.low,
            high: entry.high,
            added_at: Utc::now(),
        })
    }
}

/// Elementwise sums across the cart, derived on demand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CartTotal {
    pub low: f64,
    pub high: f64,
    pub item_count: usize,
}

impl CartTotal {
    /// An empty cart still renders as a range.
    pub fn text(&self) -> String {
        if self.item_count == 0 {
            format!("{}\u{2013}{}", format_usd(0.0), format_usd(0.0))
        } else {
            range_text(self.low, self.high)
        }
    }
}

/// Sum all items elementwise. Insertion order is irrelevant to the total.
pub fn cart_total(items: &[CartItem]) -> CartTotal {
    let (low, high) = items
        .iter()
        .fold((0.0, 0.0), |(low, high), item| (low + item.low, high + item.high));
    CartTotal {
        low,
        high,
        item_count: items.len(),
    }
}

/// Serializable snapshot of the cart for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct CartView {
    pub items: Vec<CartItem>,
    pub total_low: f64,
    pub total_high: f64,
    pub total_text: String,
}

impl CartView {
    pub fn from_items(items: Vec<CartItem>) -> Self {
        let total = cart_total(&items);
        Self {
            items,
            total_low: total.low,
            total_high: total.high,
            total_text: total.text(),
        }
    }
}

/// Storage abstraction so the quote service can be exercised in isolation.
/// Items keep insertion order for display.
pub trait CartStore: Send + Sync {
    fn append(&self, item: CartItem) -> Result<CartItem, CartStoreError>;
    fn remove(&self, id: &CartItemId) -> Result<bool, CartStoreError>;
    fn items(&self) -> Result<Vec<CartItem>, CartStoreError>;
}

/// Error enumeration for cart storage failures.
#[derive(Debug, thiserror::Error)]
pub enum CartStoreError {
    #[error("cart storage unavailable: {0}")]
    Unavailable(String),
}

/// Render the cart as CSV: one row per item plus a trailing total row.
pub fn cart_csv(items: &[CartItem]) -> Result<String, CsvExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["description", "rate", "low", "high", "added_at"])?;
    for item in items {
        writer.write_record([
            item.description.as_str(),
            item.rate.as_str(),
            &item.low.to_string(),
            &item.high.to_string(),
            &item.added_at.to_rfc3339(),
        ])?;
    }
    let total = cart_total(items);
    writer.write_record([
        "Total",
        total.text().as_str(),
        &total.low.to_string(),
        &total.high.to_string(),
        "",
    ])?;

    let buffer = writer.into_inner().map_err(|_| CsvExportError::Buffer)?;
    Ok(String::from_utf8(buffer)?)
}

/// CSV export failure modes.
#[derive(Debug, thiserror::Error)]
pub enum CsvExportError {
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("csv buffer finalization failed")]
    Buffer,
    #[error("csv output was not valid utf-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}
