//! API Routes
//!
//! Configures the Axum router with all inventory endpoints.

use axum::{
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    create_product, create_supplier, delete_product, delete_supplier, get_category, get_product,
    get_supplier, health_handler, list_categories, list_products, list_suppliers,
    low_stock_products, products_by_category, products_by_supplier, products_paginated,
    search_suppliers, suppliers_by_email, suppliers_paginated, update_product, update_supplier,
    AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET|POST /api/products`, `GET|PUT|DELETE /api/products/:id`
/// - `GET /api/products/paginated` - Cached default first page
/// - `GET /api/products/low-stock`, `/category/:id`, `/supplier/:id`
/// - `GET|POST /api/suppliers`, `GET|PUT|DELETE /api/suppliers/:id`
/// - `GET /api/suppliers/paginated`, `/search`, `/by-email`
/// - `GET /api/categories`, `GET /api/categories/:id` (read-only)
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints
    Router::new()
        .route("/api/products", get(list_products).post(create_product))
        .route("/api/products/paginated", get(products_paginated))
        .route("/api/products/low-stock", get(low_stock_products))
        .route(
            "/api/products/category/:category_id",
            get(products_by_category),
        )
        .route(
            "/api/products/supplier/:supplier_id",
            get(products_by_supplier),
        )
        .route(
            "/api/products/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route("/api/suppliers", get(list_suppliers).post(create_supplier))
        .route("/api/suppliers/paginated", get(suppliers_paginated))
        .route("/api/suppliers/search", get(search_suppliers))
        .route("/api/suppliers/by-email", get(suppliers_by_email))
        .route(
            "/api/suppliers/:id",
            get(get_supplier).put(update_supplier).delete(delete_supplier),
        )
        .route("/api/categories", get(list_categories))
        .route("/api/categories/:id", get(get_category))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{seed_demo_data, MemoryStore};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        let mut store = MemoryStore::new();
        seed_demo_data(&mut store);
        let state = AppState::new(store, 6, 300);
        create_router(state)
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_products_endpoint() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/products")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_product_not_found() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/products/999")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_paginated_endpoint_default_params() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/products/paginated")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_create_product_endpoint() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/products")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        r#"{"productName":"Desk Lamp","price":45.0,"stock":12}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
    }
}
