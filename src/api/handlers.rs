//! API Handlers
//!
//! HTTP request handlers for the inventory endpoints. Handlers own boundary
//! validation and the mapping of empty service results to 404; everything
//! else is delegated to the list services.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use tokio::sync::RwLock;

use crate::cache::{PageCache, PageEnvelope};
use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::models::{
    is_valid_email, Category, EmailQuery, HealthResponse, NameQuery, PageParams, ProductPayload,
    ProductView, SupplierPayload, SupplierView, ThresholdParams,
};
use crate::services::{ProductPageCache, ProductService, SupplierPageCache, SupplierService};
use crate::store::{seed_demo_data, MemoryStore, SharedStore};

/// Application state shared across all handlers.
///
/// The store and both page caches live behind Arc<RwLock<>>; the services
/// hold clones of the same handles, so a mutation through a service is
/// immediately visible to every handler.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe entity store (categories are served from it directly)
    pub store: SharedStore,
    /// Product list service
    pub products: ProductService,
    /// Supplier list service
    pub suppliers: SupplierService,
    /// Product envelope cache, exposed for the sweep task
    pub product_pages: ProductPageCache,
    /// Supplier envelope cache, exposed for the sweep task
    pub supplier_pages: SupplierPageCache,
}

impl AppState {
    /// Creates a new AppState around the given store.
    pub fn new(store: MemoryStore, default_page_size: u32, cache_ttl_secs: u64) -> Self {
        let store = store.into_shared();
        let product_pages: ProductPageCache = Arc::new(RwLock::new(PageCache::new(
            default_page_size,
            cache_ttl_secs,
        )));
        let supplier_pages: SupplierPageCache = Arc::new(RwLock::new(PageCache::new(
            default_page_size,
            cache_ttl_secs,
        )));

        Self {
            products: ProductService::new(store.clone(), product_pages.clone()),
            suppliers: SupplierService::new(store.clone(), supplier_pages.clone()),
            store,
            product_pages,
            supplier_pages,
        }
    }

    /// Creates a new AppState from configuration, seeded with demo data.
    pub fn from_config(config: &Config) -> Self {
        let mut store = MemoryStore::new();
        seed_demo_data(&mut store);
        Self::new(store, config.default_page_size, config.cache_ttl_secs)
    }
}

// == Product Handlers ==

/// Handler for GET /api/products
pub async fn list_products(State(state): State<AppState>) -> Json<Vec<ProductView>> {
    Json(state.products.list_all().await)
}

/// Handler for GET /api/products/paginated
pub async fn products_paginated(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Json<PageEnvelope<ProductView>>> {
    if let Some(error_msg) = params.validate() {
        return Err(ApiError::Validation(error_msg));
    }

    let envelope = state
        .products
        .list_paginated(params.page_number, params.page_size)
        .await;
    Ok(Json(envelope))
}

/// Handler for GET /api/products/low-stock
pub async fn low_stock_products(
    State(state): State<AppState>,
    Query(params): Query<ThresholdParams>,
) -> Json<Vec<ProductView>> {
    Json(state.products.low_stock(params.threshold).await)
}

/// Handler for GET /api/products/category/:category_id
pub async fn products_by_category(
    State(state): State<AppState>,
    Path(category_id): Path<u32>,
) -> Json<Vec<ProductView>> {
    Json(state.products.by_category(category_id).await)
}

/// Handler for GET /api/products/supplier/:supplier_id
pub async fn products_by_supplier(
    State(state): State<AppState>,
    Path(supplier_id): Path<u32>,
) -> Json<Vec<ProductView>> {
    Json(state.products.by_supplier(supplier_id).await)
}

/// Handler for GET /api/products/:id
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<ProductView>> {
    state
        .products
        .get(id)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Product with ID {} not found", id)))
}

/// Handler for POST /api/products
pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<ProductPayload>,
) -> Result<(StatusCode, Json<ProductView>)> {
    if let Some(error_msg) = payload.validate() {
        return Err(ApiError::Validation(error_msg));
    }

    let created = state.products.create(&payload).await;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Handler for PUT /api/products/:id
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    Json(payload): Json<ProductPayload>,
) -> Result<Json<ProductView>> {
    if let Some(error_msg) = payload.validate() {
        return Err(ApiError::Validation(error_msg));
    }

    state
        .products
        .update(id, &payload)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Product with ID {} not found", id)))
}

/// Handler for DELETE /api/products/:id
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<StatusCode> {
    if state.products.delete(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound(format!(
            "Product with ID {} not found",
            id
        )))
    }
}

// == Supplier Handlers ==

/// Handler for GET /api/suppliers
pub async fn list_suppliers(State(state): State<AppState>) -> Json<Vec<SupplierView>> {
    Json(state.suppliers.list_all().await)
}

/// Handler for GET /api/suppliers/paginated
pub async fn suppliers_paginated(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Json<PageEnvelope<SupplierView>>> {
    if let Some(error_msg) = params.validate() {
        return Err(ApiError::Validation(error_msg));
    }

    let envelope = state
        .suppliers
        .list_paginated(params.page_number, params.page_size)
        .await;
    Ok(Json(envelope))
}

/// Handler for GET /api/suppliers/search?name=
pub async fn search_suppliers(
    State(state): State<AppState>,
    Query(query): Query<NameQuery>,
) -> Result<Json<Vec<SupplierView>>> {
    if query.name.trim().is_empty() {
        return Err(ApiError::Validation("Search name is required".to_string()));
    }

    Ok(Json(state.suppliers.search_by_name(&query.name).await))
}

/// Handler for GET /api/suppliers/by-email?email=
pub async fn suppliers_by_email(
    State(state): State<AppState>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<Vec<SupplierView>>> {
    if query.email.trim().is_empty() {
        return Err(ApiError::Validation("Email is required".to_string()));
    }
    if !is_valid_email(&query.email) {
        return Err(ApiError::Validation("Invalid email format".to_string()));
    }

    Ok(Json(state.suppliers.by_email(&query.email).await))
}

/// Handler for GET /api/suppliers/:id
pub async fn get_supplier(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<SupplierView>> {
    state
        .suppliers
        .get(id)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Supplier with ID {} not found", id)))
}

/// Handler for POST /api/suppliers
pub async fn create_supplier(
    State(state): State<AppState>,
    Json(payload): Json<SupplierPayload>,
) -> Result<(StatusCode, Json<SupplierView>)> {
    if let Some(error_msg) = payload.validate() {
        return Err(ApiError::Validation(error_msg));
    }

    let created = state.suppliers.create(&payload).await;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Handler for PUT /api/suppliers/:id
pub async fn update_supplier(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    Json(payload): Json<SupplierPayload>,
) -> Result<Json<SupplierView>> {
    if let Some(error_msg) = payload.validate() {
        return Err(ApiError::Validation(error_msg));
    }

    state
        .suppliers
        .update(id, &payload)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Supplier with ID {} not found", id)))
}

/// Handler for DELETE /api/suppliers/:id
pub async fn delete_supplier(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<StatusCode> {
    if state.suppliers.delete(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound(format!(
            "Supplier with ID {} not found",
            id
        )))
    }
}

// == Category Handlers ==

/// Handler for GET /api/categories
///
/// Categories are read-only and served straight from the store.
pub async fn list_categories(State(state): State<AppState>) -> Json<Vec<Category>> {
    let store = state.store.read().await;
    Json(store.categories())
}

/// Handler for GET /api/categories/:id
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<Category>> {
    let store = state.store.read().await;
    store
        .category_by_id(id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Category with ID {} not found", id)))
}

// == Health ==

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_state() -> AppState {
        let mut store = MemoryStore::new();
        seed_demo_data(&mut store);
        AppState::new(store, 6, 300)
    }

    #[tokio::test]
    async fn test_get_product_handler() {
        let state = seeded_state();

        let response = get_product(State(state), Path(1)).await.unwrap();
        assert_eq!(response.product_name, "Laptop");
    }

    #[tokio::test]
    async fn test_get_product_not_found() {
        let state = seeded_state();

        let result = get_product(State(state), Path(99)).await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_create_product_validation() {
        let state = seeded_state();

        let payload = ProductPayload {
            product_name: "".to_string(),
            price: 1.0,
            stock: 1,
            category_ids: vec![],
            supplier_ids: vec![],
        };
        let result = create_product(State(state), Json(payload)).await;
        assert!(matches!(result, Err(ApiError::Validation(_))));
    }

    #[tokio::test]
    async fn test_paginated_handler_rejects_bad_bounds() {
        let state = seeded_state();

        let params = PageParams {
            page_number: 1,
            page_size: 200,
        };
        let result = products_paginated(State(state), Query(params)).await;
        assert!(matches!(result, Err(ApiError::Validation(_))));
    }

    #[tokio::test]
    async fn test_delete_supplier_handler() {
        let state = seeded_state();

        let status = delete_supplier(State(state.clone()), Path(2)).await.unwrap();
        assert_eq!(status, StatusCode::NO_CONTENT);

        let result = delete_supplier(State(state), Path(2)).await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_search_suppliers_requires_name() {
        let state = seeded_state();

        let result = search_suppliers(
            State(state),
            Query(NameQuery {
                name: "  ".to_string(),
            }),
        )
        .await;
        assert!(matches!(result, Err(ApiError::Validation(_))));
    }

    #[tokio::test]
    async fn test_get_category_handler() {
        let state = seeded_state();

        let response = get_category(State(state), Path(2)).await.unwrap();
        assert_eq!(response.category_name, "Furniture");
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
