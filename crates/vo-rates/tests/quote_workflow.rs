//! Integration specifications for rate resolution and the quote cart.
//!
//! Scenarios exercise end-to-end behavior through the public service facade
//! and HTTP router so catalog data, resolution rules, and cart accounting are
//! validated without reaching into private modules.

mod common {
    use std::sync::{Arc, Mutex};

    use vo_rates::quoting::{
        CartItem, CartItemId, CartStore, CartStoreError, QuoteParams, QuoteService,
    };

    #[derive(Default, Clone)]
    pub(super) struct MemoryCartStore {
        items: Arc<Mutex<Vec<CartItem>>>,
    }

    impl CartStore for MemoryCartStore {
        fn append(&self, item: CartItem) -> Result<CartItem, CartStoreError> {
            let mut guard = self.items.lock().expect("lock");
            guard.push(item.clone());
            Ok(item)
        }

        fn remove(&self, id: &CartItemId) -> Result<bool, CartStoreError> {
            let mut guard = self.items.lock().expect("lock");
            let before = guard.len();
            guard.retain(|item| item.id != *id);
            Ok(guard.len() < before)
        }

        fn items(&self) -> Result<Vec<CartItem>, CartStoreError> {
            Ok(self.items.lock().expect("lock").clone())
        }
    }

    pub(super) fn build_service() -> (Arc<QuoteService<MemoryCartStore>>, Arc<MemoryCartStore>) {
        let store = Arc::new(MemoryCartStore::default());
        let service = Arc::new(QuoteService::new(store.clone()));
        (service, store)
    }

    pub(super) fn radio_year() -> (&'static str, &'static str, QuoteParams) {
        (
            "radio",
            "Local – Regional (Terrestrial)",
            QuoteParams {
                term: Some("1 Year".to_string()),
                ..QuoteParams::default()
            },
        )
    }

    pub(super) fn three_tags() -> (&'static str, &'static str, QuoteParams) {
        (
            "digital_visual",
            "Digital Tags",
            QuoteParams {
                number_of_tags: Some(3.0),
                ..QuoteParams::default()
            },
        )
    }
}

mod resolution {
    use super::common::*;
    use vo_rates::quoting::QuoteParams;

    #[test]
    fn radio_year_matches_the_published_range() {
        let (service, _) = build_service();
        let (category, sub_type, params) = radio_year();
        let entry = service
            .resolve(category, sub_type, &params)
            .expect("rate resolves");
        assert_eq!(entry.low, 900.0);
        assert_eq!(entry.high, 1500.0);
        assert_eq!(entry.text, "$900\u{2013}$1,500");
    }

    #[test]
    fn tag_counts_scale_the_published_per_unit_rate() {
        let (service, _) = build_service();
        let (category, sub_type, params) = three_tags();
        let entry = service
            .resolve(category, sub_type, &params)
            .expect("rate resolves");
        assert_eq!(entry.low, 525.0);
        assert_eq!(entry.high, 675.0);
    }

    #[test]
    fn recording_time_scale_quotes_a_flat_session_total() {
        let (service, _) = build_service();
        let entry = service
            .resolve(
                "non_broadcast",
                "Corporate & Industrial Narration – Recording Time Scale",
                &QuoteParams {
                    number_of_hours: Some(3.0),
                    ..QuoteParams::default()
                },
            )
            .expect("rate resolves");
        assert_eq!(entry.low, 1049.0);
        assert_eq!(entry.high, 1049.0);
        assert_eq!(entry.text, "$1,049");
    }

    #[test]
    fn mnemonics_resolve_to_guidance_only() {
        let (service, _) = build_service();
        let entry = service
            .resolve("tv", "Mnemonics", &QuoteParams::default())
            .expect("note resolves");
        assert!(entry.is_informational());
    }

    #[test]
    fn incomplete_selections_yield_no_rate() {
        let (service, _) = build_service();
        assert!(service
            .resolve(
                "radio",
                "Local – Regional (Terrestrial)",
                &QuoteParams::default()
            )
            .is_none());
        assert!(service
            .resolve("radio", "Jingles", &QuoteParams::default())
            .is_none());
    }

    #[test]
    fn repeated_resolution_is_stable() {
        let (service, _) = build_service();
        let (category, sub_type, params) = radio_year();
        let first = service.resolve(category, sub_type, &params);
        let second = service.resolve(category, sub_type, &params);
        assert_eq!(first, second);
    }
}

mod cart {
    use super::common::*;
    use vo_rates::quoting::{CartStore, QuoteParams, QuoteServiceError};

    #[test]
    fn totals_sum_added_items_elementwise() {
        let (service, _) = build_service();
        let (category, sub_type, params) = radio_year();
        service
            .add_to_cart(category, sub_type, &params)
            .expect("radio quote added");
        let (category, sub_type, params) = three_tags();
        service
            .add_to_cart(category, sub_type, &params)
            .expect("tags quote added");

        let view = service.cart().expect("cart view");
        assert_eq!(view.items.len(), 2);
        assert_eq!(view.total_low, 1425.0);
        assert_eq!(view.total_high, 2175.0);
        assert_eq!(view.total_text, "$1,425\u{2013}$2,175");
    }

    #[test]
    fn removing_an_item_restores_the_prior_total() {
        let (service, _) = build_service();
        let (category, sub_type, params) = radio_year();
        service
            .add_to_cart(category, sub_type, &params)
            .expect("radio quote added");
        let before = service.cart().expect("cart view");

        let (category, sub_type, params) = three_tags();
        let added = service
            .add_to_cart(category, sub_type, &params)
            .expect("tags quote added");

        let removed = service.remove_from_cart(&added.id).expect("remove runs");
        assert!(removed);

        let after = service.cart().expect("cart view");
        assert_eq!(after.total_low, before.total_low);
        assert_eq!(after.total_high, before.total_high);
        assert_eq!(after.items.len(), before.items.len());
    }

    #[test]
    fn removing_an_unknown_id_is_a_no_op() {
        let (service, _) = build_service();
        let (category, sub_type, params) = radio_year();
        let added = service
            .add_to_cart(category, sub_type, &params)
            .expect("radio quote added");

        let removed = service.remove_from_cart(&added.id).expect("remove runs");
        assert!(removed);
        let removed_again = service.remove_from_cart(&added.id).expect("remove runs");
        assert!(!removed_again);
    }

    #[test]
    fn guidance_entries_are_refused() {
        let (service, store) = build_service();
        let result = service.add_to_cart("tv", "Mnemonics", &QuoteParams::default());
        assert!(matches!(result, Err(QuoteServiceError::NotQuotable)));
        assert!(store.items().expect("items").is_empty());
    }

    #[test]
    fn unresolvable_selections_are_refused() {
        let (service, store) = build_service();
        let result = service.add_to_cart(
            "radio",
            "Local – Regional (Terrestrial)",
            &QuoteParams::default(),
        );
        assert!(matches!(result, Err(QuoteServiceError::Unresolvable)));
        assert!(store.items().expect("items").is_empty());
    }

    #[test]
    fn empty_cart_totals_to_a_zero_range() {
        let (service, _) = build_service();
        let view = service.cart().expect("cart view");
        assert!(view.items.is_empty());
        assert_eq!(view.total_text, "$0\u{2013}$0");
    }

    #[test]
    fn export_carries_one_row_per_item_plus_total() {
        let (service, _) = build_service();
        let (category, sub_type, params) = radio_year();
        service
            .add_to_cart(category, sub_type, &params)
            .expect("radio quote added");

        let csv = service.cart_export().expect("export renders");
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("Local – Regional (Terrestrial) - 1 Year"));
        assert!(lines[2].starts_with("Total"));
    }
}

mod routing {
    use super::common::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use vo_rates::quoting::quote_router;

    fn build_router() -> axum::Router {
        let (service, _) = build_service();
        quote_router(service)
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        serde_json::from_slice(&body).expect("json")
    }

    fn post_json(uri: &str, payload: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(payload.to_string()))
            .expect("request")
    }

    #[tokio::test]
    async fn categories_endpoint_lists_the_catalog() {
        let router = build_router();
        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/v1/rates/categories")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = body_json(response).await;
        let categories = payload.as_array().expect("array");
        assert!(categories.len() >= 10);
        let radio = categories
            .iter()
            .find(|c| c.get("id") == Some(&json!("radio")))
            .expect("radio listed");
        let sub_types = radio
            .get("sub_types")
            .and_then(Value::as_array)
            .expect("sub types");
        assert!(sub_types
            .iter()
            .any(|s| s.as_str() == Some("Local – Regional (Terrestrial)")));
    }

    #[tokio::test]
    async fn resolve_endpoint_returns_the_rate_view() {
        let router = build_router();
        let payload = json!({
            "category": "radio",
            "sub_type": "Local – Regional (Terrestrial)",
            "params": { "term": "1 Year" },
        });
        let response = router
            .oneshot(post_json("/api/v1/rates/resolve", &payload))
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = body_json(response).await;
        assert_eq!(payload.get("resolved"), Some(&json!(true)));
        let rate = payload.get("rate").expect("rate view");
        assert_eq!(rate.get("low"), Some(&json!(900.0)));
        assert_eq!(rate.get("high"), Some(&json!(1500.0)));
    }

    #[tokio::test]
    async fn resolve_endpoint_returns_a_placeholder_when_incomplete() {
        let router = build_router();
        let payload = json!({
            "category": "radio",
            "sub_type": "Local – Regional (Terrestrial)",
        });
        let response = router
            .oneshot(post_json("/api/v1/rates/resolve", &payload))
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = body_json(response).await;
        assert_eq!(payload.get("resolved"), Some(&json!(false)));
        assert!(payload.get("hint").is_some());
    }

    #[tokio::test]
    async fn cart_endpoints_add_list_and_remove_items() {
        let router = build_router();

        let payload = json!({
            "category": "digital_visual",
            "sub_type": "Digital Tags",
            "params": { "numberOfTags": 3 },
        });
        let response = router
            .clone()
            .oneshot(post_json("/api/v1/cart/items", &payload))
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::CREATED);
        let item = body_json(response).await;
        let item_id = item
            .get("id")
            .and_then(Value::as_str)
            .expect("item id")
            .to_string();
        assert_eq!(item.get("low"), Some(&json!(525.0)));

        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/v1/cart")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::OK);
        let cart = body_json(response).await;
        assert_eq!(
            cart.get("items").and_then(Value::as_array).map(Vec::len),
            Some(1)
        );
        assert_eq!(cart.get("total_text"), Some(&json!("$525\u{2013}$675")));

        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/api/v1/cart/items/{item_id}"))
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::OK);
        let payload = body_json(response).await;
        assert_eq!(payload.get("removed"), Some(&json!(true)));

        let response = router
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/api/v1/cart/items/{item_id}"))
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");
        let payload = body_json(response).await;
        assert_eq!(payload.get("removed"), Some(&json!(false)));
    }

    #[tokio::test]
    async fn guidance_entries_are_rejected_with_422() {
        let router = build_router();
        let payload = json!({
            "category": "tv",
            "sub_type": "Mnemonics",
        });
        let response = router
            .clone()
            .oneshot(post_json("/api/v1/cart/items", &payload))
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/v1/cart")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");
        let cart = body_json(response).await;
        assert_eq!(
            cart.get("items").and_then(Value::as_array).map(Vec::len),
            Some(0)
        );
    }

    #[tokio::test]
    async fn malformed_item_ids_are_a_tolerated_no_op() {
        let router = build_router();
        let response = router
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/api/v1/cart/items/not-a-uuid")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::OK);
        let payload = body_json(response).await;
        assert_eq!(payload.get("removed"), Some(&json!(false)));
    }
}
