//! In-Memory Entity Store
//!
//! BTreeMaps keep each entity kind ordered by id ascending, which is the
//! ordering every listing and page slice relies on. The two many-to-many
//! relations are explicit sets of id pairs; relation updates that name
//! nonexistent ids silently drop them.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::{Category, Product, Supplier};

/// Thread-safe handle to the store shared across request handlers.
pub type SharedStore = Arc<RwLock<MemoryStore>>;

// == Memory Store ==
/// The durable (for the process lifetime) entity graph. Exclusively owns
/// entities and join rows; the pagination cache only ever holds derived
/// copies of what lives here.
#[derive(Debug, Default)]
pub struct MemoryStore {
    products: BTreeMap<u32, Product>,
    categories: BTreeMap<u32, Category>,
    suppliers: BTreeMap<u32, Supplier>,
    /// (product_id, category_id) join rows
    product_categories: BTreeSet<(u32, u32)>,
    /// (product_id, supplier_id) join rows
    product_suppliers: BTreeSet<(u32, u32)>,
    next_product_id: u32,
    next_category_id: u32,
    next_supplier_id: u32,
}

impl MemoryStore {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a store for shared use across handlers.
    pub fn into_shared(self) -> SharedStore {
        Arc::new(RwLock::new(self))
    }

    // == Products ==
    /// Inserts a product, assigning the next id.
    pub fn insert_product(&mut self, product_name: String, price: f64, stock: i64) -> Product {
        self.next_product_id += 1;
        let product = Product {
            product_id: self.next_product_id,
            product_name,
            price,
            stock,
        };
        self.products.insert(product.product_id, product.clone());
        product
    }

    pub fn product_by_id(&self, product_id: u32) -> Option<&Product> {
        self.products.get(&product_id)
    }

    /// All products ordered by id ascending.
    pub fn products(&self) -> Vec<Product> {
        self.products.values().cloned().collect()
    }

    pub fn product_count(&self) -> u64 {
        self.products.len() as u64
    }

    /// The ordered slice for one page of products.
    pub fn product_page(&self, page_number: u32, page_size: u32) -> Vec<Product> {
        page_of(self.products.values(), page_number, page_size)
    }

    /// Products matching a predicate, ordered by id ascending.
    pub fn products_where<P>(&self, predicate: P) -> Vec<Product>
    where
        P: Fn(&Product) -> bool,
    {
        self.products
            .values()
            .filter(|p| predicate(p))
            .cloned()
            .collect()
    }

    /// Replaces a product's scalar fields. Returns false if the id is absent.
    pub fn update_product_scalars(
        &mut self,
        product_id: u32,
        product_name: String,
        price: f64,
        stock: i64,
    ) -> bool {
        match self.products.get_mut(&product_id) {
            Some(product) => {
                product.product_name = product_name;
                product.price = price;
                product.stock = stock;
                true
            }
            None => false,
        }
    }

    /// Deletes a product and its join rows. Returns false if absent.
    pub fn delete_product(&mut self, product_id: u32) -> bool {
        if self.products.remove(&product_id).is_none() {
            return false;
        }
        self.product_categories.retain(|&(p, _)| p != product_id);
        self.product_suppliers.retain(|&(p, _)| p != product_id);
        true
    }

    // == Product Relations ==
    /// Replaces a product's category set wholesale. Ids without a matching
    /// category row are dropped without error.
    pub fn set_product_categories(&mut self, product_id: u32, category_ids: &[u32]) {
        self.product_categories.retain(|&(p, _)| p != product_id);
        for &category_id in category_ids {
            if self.categories.contains_key(&category_id) {
                self.product_categories.insert((product_id, category_id));
            }
        }
    }

    /// Replaces a product's supplier set wholesale, dropping unknown ids.
    pub fn set_product_suppliers(&mut self, product_id: u32, supplier_ids: &[u32]) {
        self.product_suppliers.retain(|&(p, _)| p != product_id);
        for &supplier_id in supplier_ids {
            if self.suppliers.contains_key(&supplier_id) {
                self.product_suppliers.insert((product_id, supplier_id));
            }
        }
    }

    /// Replaces a supplier's product set wholesale, dropping unknown ids.
    pub fn set_supplier_products(&mut self, supplier_id: u32, product_ids: &[u32]) {
        self.product_suppliers.retain(|&(_, s)| s != supplier_id);
        for &product_id in product_ids {
            if self.products.contains_key(&product_id) {
                self.product_suppliers.insert((product_id, supplier_id));
            }
        }
    }

    /// Categories of a product, ordered by id ascending.
    pub fn categories_of(&self, product_id: u32) -> Vec<Category> {
        self.product_categories
            .iter()
            .filter(|&&(p, _)| p == product_id)
            .filter_map(|&(_, c)| self.categories.get(&c).cloned())
            .collect()
    }

    /// Suppliers of a product, ordered by id ascending.
    pub fn suppliers_of(&self, product_id: u32) -> Vec<Supplier> {
        self.product_suppliers
            .iter()
            .filter(|&&(p, _)| p == product_id)
            .filter_map(|&(_, s)| self.suppliers.get(&s).cloned())
            .collect()
    }

    /// Products belonging to a category, ordered by id ascending.
    pub fn products_in_category(&self, category_id: u32) -> Vec<Product> {
        self.products_where(|p| {
            self.product_categories
                .contains(&(p.product_id, category_id))
        })
    }

    /// Products carried by a supplier, ordered by id ascending.
    pub fn products_of_supplier(&self, supplier_id: u32) -> Vec<Product> {
        self.products_where(|p| self.product_suppliers.contains(&(p.product_id, supplier_id)))
    }

    // == Categories ==
    /// Inserts a category, assigning the next id.
    pub fn insert_category(&mut self, category_name: String) -> Category {
        self.next_category_id += 1;
        let category = Category {
            category_id: self.next_category_id,
            category_name,
        };
        self.categories.insert(category.category_id, category.clone());
        category
    }

    pub fn category_by_id(&self, category_id: u32) -> Option<&Category> {
        self.categories.get(&category_id)
    }

    /// All categories ordered by id ascending.
    pub fn categories(&self) -> Vec<Category> {
        self.categories.values().cloned().collect()
    }

    // == Suppliers ==
    /// Inserts a supplier, assigning the next id.
    pub fn insert_supplier(
        &mut self,
        supplier_name: String,
        supplier_email: String,
        supplier_address: Option<String>,
        supplier_phone_number: Option<String>,
    ) -> Supplier {
        self.next_supplier_id += 1;
        let supplier = Supplier {
            supplier_id: self.next_supplier_id,
            supplier_name,
            supplier_email,
            supplier_address,
            supplier_phone_number,
        };
        self.suppliers.insert(supplier.supplier_id, supplier.clone());
        supplier
    }

    pub fn supplier_by_id(&self, supplier_id: u32) -> Option<&Supplier> {
        self.suppliers.get(&supplier_id)
    }

    /// All suppliers ordered by id ascending.
    pub fn suppliers(&self) -> Vec<Supplier> {
        self.suppliers.values().cloned().collect()
    }

    pub fn supplier_count(&self) -> u64 {
        self.suppliers.len() as u64
    }

    /// The ordered slice for one page of suppliers.
    pub fn supplier_page(&self, page_number: u32, page_size: u32) -> Vec<Supplier> {
        page_of(self.suppliers.values(), page_number, page_size)
    }

    /// Suppliers matching a predicate, ordered by id ascending.
    pub fn suppliers_where<P>(&self, predicate: P) -> Vec<Supplier>
    where
        P: Fn(&Supplier) -> bool,
    {
        self.suppliers
            .values()
            .filter(|s| predicate(s))
            .cloned()
            .collect()
    }

    /// Replaces a supplier's scalar fields. Returns false if the id is absent.
    pub fn update_supplier_scalars(
        &mut self,
        supplier_id: u32,
        supplier_name: String,
        supplier_email: String,
        supplier_address: Option<String>,
        supplier_phone_number: Option<String>,
    ) -> bool {
        match self.suppliers.get_mut(&supplier_id) {
            Some(supplier) => {
                supplier.supplier_name = supplier_name;
                supplier.supplier_email = supplier_email;
                supplier.supplier_address = supplier_address;
                supplier.supplier_phone_number = supplier_phone_number;
                true
            }
            None => false,
        }
    }

    /// Deletes a supplier and its join rows. Returns false if absent.
    pub fn delete_supplier(&mut self, supplier_id: u32) -> bool {
        if self.suppliers.remove(&supplier_id).is_none() {
            return false;
        }
        self.product_suppliers.retain(|&(_, s)| s != supplier_id);
        true
    }
}

/// One ordered page from an id-ascending iterator.
fn page_of<'a, T: Clone + 'a>(
    values: impl Iterator<Item = &'a T>,
    page_number: u32,
    page_size: u32,
) -> Vec<T> {
    let skip = (page_number.saturating_sub(1) as usize).saturating_mul(page_size as usize);
    values.skip(skip).take(page_size as usize).cloned().collect()
}
