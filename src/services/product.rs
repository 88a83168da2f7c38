//! Product List Service
//!
//! CRUD plus paginated listing for products, with the first default page
//! served from the pagination cache.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::cache::{PageCache, PageEnvelope};
use crate::models::{Product, ProductPayload, ProductView};
use crate::store::{MemoryStore, SharedStore};

/// Shared handle to the product envelope cache.
pub type ProductPageCache = Arc<RwLock<PageCache<ProductView>>>;

// == Product Service ==
#[derive(Clone)]
pub struct ProductService {
    store: SharedStore,
    pages: ProductPageCache,
}

impl ProductService {
    pub fn new(store: SharedStore, pages: ProductPageCache) -> Self {
        Self { store, pages }
    }

    // == List All ==
    /// Every product with relations resolved, ordered by id.
    pub async fn list_all(&self) -> Vec<ProductView> {
        let store = self.store.read().await;
        store
            .products()
            .into_iter()
            .map(|p| view(&store, p))
            .collect()
    }

    // == Get ==
    pub async fn get(&self, product_id: u32) -> Option<ProductView> {
        let store = self.store.read().await;
        let product = store.product_by_id(product_id)?.clone();
        Some(view(&store, product))
    }

    // == Create ==
    /// Persists a new product. Relation ids that do not exist are silently
    /// dropped. Invalidates the product page cache after the write.
    pub async fn create(&self, payload: &ProductPayload) -> ProductView {
        let created = {
            let mut store = self.store.write().await;
            let product = store.insert_product(
                payload.product_name.clone(),
                payload.price,
                payload.stock,
            );
            store.set_product_categories(product.product_id, &payload.category_ids);
            store.set_product_suppliers(product.product_id, &payload.supplier_ids);
            view(&store, product)
        };

        self.pages.write().await.invalidate();
        info!(product_id = created.product_id, "product created");
        created
    }

    // == Update ==
    /// Replaces scalar fields; a non-empty relation id list replaces that
    /// relation set wholesale, an empty list leaves it untouched. Returns
    /// None (and leaves the cache alone) when the id is absent.
    pub async fn update(&self, product_id: u32, payload: &ProductPayload) -> Option<ProductView> {
        let updated = {
            let mut store = self.store.write().await;
            if !store.update_product_scalars(
                product_id,
                payload.product_name.clone(),
                payload.price,
                payload.stock,
            ) {
                return None;
            }
            if !payload.category_ids.is_empty() {
                store.set_product_categories(product_id, &payload.category_ids);
            }
            if !payload.supplier_ids.is_empty() {
                store.set_product_suppliers(product_id, &payload.supplier_ids);
            }
            let product = store.product_by_id(product_id)?.clone();
            view(&store, product)
        };

        self.pages.write().await.invalidate();
        info!(product_id, "product updated");
        Some(updated)
    }

    // == Delete ==
    /// Returns false without touching the cache when the id is absent.
    pub async fn delete(&self, product_id: u32) -> bool {
        let removed = self.store.write().await.delete_product(product_id);
        if removed {
            self.pages.write().await.invalidate();
            info!(product_id, "product deleted");
        }
        removed
    }

    // == List Paginated ==
    /// Serves the distinguished default page from the cache when possible;
    /// otherwise queries the store, builds the envelope, and caches it
    /// (default key only) under the generation observed before the query.
    pub async fn list_paginated(
        &self,
        page_number: u32,
        page_size: u32,
    ) -> PageEnvelope<ProductView> {
        let observed = {
            let mut pages = self.pages.write().await;
            if let Some(envelope) = pages.lookup(page_number, page_size) {
                debug!(page_number, page_size, "product page served from cache");
                return envelope;
            }
            pages.generation()
        };

        let (items, total_count) = {
            let store = self.store.read().await;
            let items = store
                .product_page(page_number, page_size)
                .into_iter()
                .map(|p| view(&store, p))
                .collect::<Vec<_>>();
            (items, store.product_count())
        };
        let envelope = PageEnvelope::new(items, total_count, page_number, page_size);

        let mut pages = self.pages.write().await;
        if pages.is_default_key(page_number, page_size)
            && pages.store(page_number, page_size, envelope.clone(), observed)
        {
            debug!(total_count, "product default page cached");
        }
        envelope
    }

    // == Filtered Listings ==
    /// Products in a category, ordered by id.
    pub async fn by_category(&self, category_id: u32) -> Vec<ProductView> {
        let store = self.store.read().await;
        store
            .products_in_category(category_id)
            .into_iter()
            .map(|p| view(&store, p))
            .collect()
    }

    /// Products carried by a supplier, ordered by id.
    pub async fn by_supplier(&self, supplier_id: u32) -> Vec<ProductView> {
        let store = self.store.read().await;
        store
            .products_of_supplier(supplier_id)
            .into_iter()
            .map(|p| view(&store, p))
            .collect()
    }

    /// Products with stock at or below the threshold.
    pub async fn low_stock(&self, threshold: i64) -> Vec<ProductView> {
        let store = self.store.read().await;
        store
            .products_where(|p| p.stock <= threshold)
            .into_iter()
            .map(|p| view(&store, p))
            .collect()
    }
}

/// Resolves a product's relations into its response view.
fn view(store: &MemoryStore, product: Product) -> ProductView {
    let categories = store.categories_of(product.product_id);
    let suppliers = store.suppliers_of(product.product_id);
    ProductView::new(product, categories, suppliers)
}
