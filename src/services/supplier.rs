//! Supplier List Service
//!
//! CRUD, search and paginated listing for suppliers. Pagination caching
//! mirrors the product service: only the default first page is cached.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::cache::{PageCache, PageEnvelope};
use crate::models::{Supplier, SupplierPayload, SupplierView};
use crate::store::{MemoryStore, SharedStore};

/// Shared handle to the supplier envelope cache.
pub type SupplierPageCache = Arc<RwLock<PageCache<SupplierView>>>;

// == Supplier Service ==
#[derive(Clone)]
pub struct SupplierService {
    store: SharedStore,
    pages: SupplierPageCache,
}

impl SupplierService {
    pub fn new(store: SharedStore, pages: SupplierPageCache) -> Self {
        Self { store, pages }
    }

    // == List All ==
    /// Every supplier with its products resolved, ordered by id.
    pub async fn list_all(&self) -> Vec<SupplierView> {
        let store = self.store.read().await;
        store
            .suppliers()
            .into_iter()
            .map(|s| view(&store, s))
            .collect()
    }

    // == Get ==
    pub async fn get(&self, supplier_id: u32) -> Option<SupplierView> {
        let store = self.store.read().await;
        let supplier = store.supplier_by_id(supplier_id)?.clone();
        Some(view(&store, supplier))
    }

    // == Create ==
    /// Persists a new supplier, dropping product ids that do not exist.
    /// Invalidates the supplier page cache after the write.
    pub async fn create(&self, payload: &SupplierPayload) -> SupplierView {
        let created = {
            let mut store = self.store.write().await;
            let supplier = store.insert_supplier(
                payload.supplier_name.clone(),
                payload.supplier_email.clone(),
                payload.supplier_address.clone(),
                payload.supplier_phone_number.clone(),
            );
            store.set_supplier_products(supplier.supplier_id, &payload.product_ids);
            view(&store, supplier)
        };

        self.pages.write().await.invalidate();
        info!(supplier_id = created.supplier_id, "supplier created");
        created
    }

    // == Update ==
    /// Replaces scalar fields; a non-empty product id list replaces the
    /// relation set wholesale, an empty list leaves it untouched.
    pub async fn update(
        &self,
        supplier_id: u32,
        payload: &SupplierPayload,
    ) -> Option<SupplierView> {
        let updated = {
            let mut store = self.store.write().await;
            if !store.update_supplier_scalars(
                supplier_id,
                payload.supplier_name.clone(),
                payload.supplier_email.clone(),
                payload.supplier_address.clone(),
                payload.supplier_phone_number.clone(),
            ) {
                return None;
            }
            if !payload.product_ids.is_empty() {
                store.set_supplier_products(supplier_id, &payload.product_ids);
            }
            let supplier = store.supplier_by_id(supplier_id)?.clone();
            view(&store, supplier)
        };

        self.pages.write().await.invalidate();
        info!(supplier_id, "supplier updated");
        Some(updated)
    }

    // == Delete ==
    /// Returns false without touching the cache when the id is absent.
    pub async fn delete(&self, supplier_id: u32) -> bool {
        let removed = self.store.write().await.delete_supplier(supplier_id);
        if removed {
            self.pages.write().await.invalidate();
            info!(supplier_id, "supplier deleted");
        }
        removed
    }

    // == List Paginated ==
    /// Cache-backed listing for the distinguished default page, identical
    /// in shape to the product flow.
    pub async fn list_paginated(
        &self,
        page_number: u32,
        page_size: u32,
    ) -> PageEnvelope<SupplierView> {
        let observed = {
            let mut pages = self.pages.write().await;
            if let Some(envelope) = pages.lookup(page_number, page_size) {
                debug!(page_number, page_size, "supplier page served from cache");
                return envelope;
            }
            pages.generation()
        };

        let (items, total_count) = {
            let store = self.store.read().await;
            let items = store
                .supplier_page(page_number, page_size)
                .into_iter()
                .map(|s| view(&store, s))
                .collect::<Vec<_>>();
            (items, store.supplier_count())
        };
        let envelope = PageEnvelope::new(items, total_count, page_number, page_size);

        let mut pages = self.pages.write().await;
        if pages.is_default_key(page_number, page_size)
            && pages.store(page_number, page_size, envelope.clone(), observed)
        {
            debug!(total_count, "supplier default page cached");
        }
        envelope
    }

    // == Search ==
    /// Suppliers whose name contains the given fragment, ordered by id.
    pub async fn search_by_name(&self, name: &str) -> Vec<SupplierView> {
        let store = self.store.read().await;
        store
            .suppliers_where(|s| s.supplier_name.contains(name))
            .into_iter()
            .map(|s| view(&store, s))
            .collect()
    }

    /// Suppliers with exactly the given email, ordered by id.
    pub async fn by_email(&self, email: &str) -> Vec<SupplierView> {
        let store = self.store.read().await;
        store
            .suppliers_where(|s| s.supplier_email == email)
            .into_iter()
            .map(|s| view(&store, s))
            .collect()
    }
}

/// Resolves a supplier's products into its response view.
fn view(store: &MemoryStore, supplier: Supplier) -> SupplierView {
    let products = store.products_of_supplier(supplier.supplier_id);
    SupplierView::new(supplier, products)
}
