use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::cart::{CartItemId, CartStore};
use super::catalog::Category;
use super::domain::{QuoteParams, RateEntry};
use super::service::{QuoteService, QuoteServiceError};

/// Router builder exposing HTTP endpoints for catalog browsing, rate
/// resolution, and the quote cart.
pub fn quote_router<S>(service: Arc<QuoteService<S>>) -> Router
where
    S: CartStore + 'static,
{
    Router::new()
        .route("/api/v1/rates/categories", get(categories_handler))
        .route("/api/v1/rates/resolve", post(resolve_handler::<S>))
        .route("/api/v1/cart", get(cart_handler::<S>))
        .route("/api/v1/cart/items", post(add_item_handler::<S>))
        .route("/api/v1/cart/items/:item_id", delete(remove_item_handler::<S>))
        .with_state(service)
}

/// A rate resolution or cart-add request body.
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteRequest {
    pub category: String,
    #[serde(alias = "subType")]
    pub sub_type: String,
    #[serde(default)]
    pub params: QuoteParams,
}

#[derive(Debug, Serialize)]
struct CategoryView {
    id: &'static str,
    label: &'static str,
    sub_types: Vec<&'static str>,
}

async fn categories_handler() -> axum::Json<Vec<CategoryView>> {
    let categories = Category::all()
        .iter()
        .map(|category| CategoryView {
            id: category.id(),
            label: category.label(),
            sub_types: category.sub_types(),
        })
        .collect();
    axum::Json(categories)
}

/// Resolution has no error state distinct from "no rate yet": both outcomes
/// are HTTP 200, distinguished by the `resolved` flag.
async fn resolve_handler<S>(
    State(service): State<Arc<QuoteService<S>>>,
    axum::Json(request): axum::Json<QuoteRequest>,
) -> Response
where
    S: CartStore + 'static,
{
    match service.resolve(&request.category, &request.sub_type, &request.params) {
        Some(entry) => (
            StatusCode::OK,
            axum::Json(json!({ "resolved": true, "rate": rate_view(&entry) })),
        )
            .into_response(),
        None => (
            StatusCode::OK,
            axum::Json(json!({
                "resolved": false,
                "hint": "provide more information to compute a rate",
            })),
        )
            .into_response(),
    }
}

async fn add_item_handler<S>(
    State(service): State<Arc<QuoteService<S>>>,
    axum::Json(request): axum::Json<QuoteRequest>,
) -> Response
where
    S: CartStore + 'static,
{
    match service.add_to_cart(&request.category, &request.sub_type, &request.params) {
        Ok(item) => (StatusCode::CREATED, axum::Json(item)).into_response(),
        Err(error @ (QuoteServiceError::Unresolvable | QuoteServiceError::NotQuotable)) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

async fn remove_item_handler<S>(
    State(service): State<Arc<QuoteService<S>>>,
    Path(item_id): Path<String>,
) -> Response
where
    S: CartStore + 'static,
{
    // A malformed id cannot match anything; removal is a tolerated no-op.
    let removed = match CartItemId::parse(&item_id) {
        Some(id) => match service.remove_from_cart(&id) {
            Ok(removed) => removed,
            Err(error) => {
                let payload = json!({ "error": error.to_string() });
                return (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response();
            }
        },
        None => false,
    };
    (StatusCode::OK, axum::Json(json!({ "removed": removed }))).into_response()
}

async fn cart_handler<S>(State(service): State<Arc<QuoteService<S>>>) -> Response
where
    S: CartStore + 'static,
{
    match service.cart() {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

fn rate_view(entry: &RateEntry) -> serde_json::Value {
    json!({
        "text": entry.text,
        "low": entry.low,
        "high": entry.high,
        "description": entry.description,
    })
}
