//! The quoting core: static rate catalog, resolution engine, and quote cart.

pub mod cart;
pub mod catalog;
pub mod domain;
pub mod engine;
pub mod router;
pub mod service;

pub use cart::{
    cart_csv, cart_total, CartItem, CartItemId, CartStore, CartStoreError, CartTotal, CartView,
    CsvExportError,
};
pub use catalog::{Category, MarketSize, MarketTier, TermLength};
pub use domain::{format_usd, QuoteParams, RateEntry};
pub use engine::RateEngine;
pub use router::{quote_router, QuoteRequest};
pub use service::{QuoteService, QuoteServiceError};
