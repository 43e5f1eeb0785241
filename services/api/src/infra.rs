use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use vo_rates::quoting::{CartItem, CartItemId, CartStore, CartStoreError};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Session-scoped cart storage. The cart lives and dies with the process;
/// the mutex exists only because axum handlers require shared state.
#[derive(Default, Clone)]
pub(crate) struct InMemoryCartStore {
    items: Arc<Mutex<Vec<CartItem>>>,
}

impl CartStore for InMemoryCartStore {
    fn append(&self, item: CartItem) -> Result<CartItem, CartStoreError> {
        let mut guard = self.items.lock().expect("cart mutex poisoned");
        guard.push(item.clone());
        Ok(item)
    }

    fn remove(&self, id: &CartItemId) -> Result<bool, CartStoreError> {
        let mut guard = self.items.lock().expect("cart mutex poisoned");
        let before = guard.len();
        guard.retain(|item| item.id != *id);
        Ok(guard.len() < before)
    }

    fn items(&self) -> Result<Vec<CartItem>, CartStoreError> {
        let guard = self.items.lock().expect("cart mutex poisoned");
        Ok(guard.clone())
    }
}
