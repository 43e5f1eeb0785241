use std::sync::Arc;

use tracing::info;

use super::cart::{
    cart_csv, CartItem, CartItemId, CartStore, CartStoreError, CartView, CsvExportError,
};
use super::domain::{QuoteParams, RateEntry};
use super::engine::RateEngine;

/// Service composing the rate engine with a cart store.
pub struct QuoteService<S> {
    engine: RateEngine,
    store: Arc<S>,
}

impl<S> QuoteService<S>
where
    S: CartStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self {
            engine: RateEngine::new(),
            store,
        }
    }

    /// Resolve a selection without touching the cart. `None` means the
    /// selection is unknown or incomplete; the caller keeps its prior state.
    pub fn resolve(&self, category: &str, sub_type: &str, params: &QuoteParams) -> Option<RateEntry> {
        self.engine.resolve(category, sub_type, params)
    }

    /// Resolve a selection and append it to the cart. Guidance-only entries
    /// are refused so the running total stays meaningful.
    pub fn add_to_cart(
        &self,
        category: &str,
        sub_type: &str,
        params: &QuoteParams,
    ) -> Result<CartItem, QuoteServiceError> {
        let entry = self
            .engine
            .resolve(category, sub_type, params)
            .ok_or(QuoteServiceError::Unresolvable)?;
        let item = CartItem::from_entry(&entry).ok_or(QuoteServiceError::NotQuotable)?;
        let stored = self.store.append(item)?;
        info!(description = %stored.description, rate = %stored.rate, "quote added to cart");
        Ok(stored)
    }

    /// Remove an item by id. Unknown ids are a tolerated no-op.
    pub fn remove_from_cart(&self, id: &CartItemId) -> Result<bool, QuoteServiceError> {
        Ok(self.store.remove(id)?)
    }

    /// Current cart contents and running total, in insertion order.
    pub fn cart(&self) -> Result<CartView, QuoteServiceError> {
        let items = self.store.items()?;
        Ok(CartView::from_items(items))
    }

    /// Cart snapshot rendered as CSV.
    pub fn cart_export(&self) -> Result<String, QuoteServiceError> {
        let items = self.store.items()?;
        Ok(cart_csv(&items)?)
    }
}

/// Error raised by the quote service.
#[derive(Debug, thiserror::Error)]
pub enum QuoteServiceError {
    #[error("no rate rule matches the requested selection")]
    Unresolvable,
    #[error("the selection resolves to guidance only and cannot be added to a quote")]
    NotQuotable,
    #[error(transparent)]
    Store(#[from] CartStoreError),
    #[error(transparent)]
    Export(#[from] CsvExportError),
}
