//! Response DTOs for the inventory server API
//!
//! Defines the structure of outgoing HTTP response bodies. Views embed
//! related entities resolved from the store's join structures.

use serde::Serialize;

use crate::models::{Category, Product, Supplier};

/// A product with its related categories and suppliers resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductView {
    pub product_id: u32,
    pub product_name: String,
    pub price: f64,
    pub stock: i64,
    /// Categories this product belongs to, ordered by id
    pub categories: Vec<Category>,
    /// Suppliers carrying this product, ordered by id
    pub suppliers: Vec<Supplier>,
}

impl ProductView {
    /// Assembles a view from a product record and its resolved relations.
    pub fn new(product: Product, categories: Vec<Category>, suppliers: Vec<Supplier>) -> Self {
        Self {
            product_id: product.product_id,
            product_name: product.product_name,
            price: product.price,
            stock: product.stock,
            categories,
            suppliers,
        }
    }
}

/// A supplier with its related products resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierView {
    pub supplier_id: u32,
    pub supplier_name: String,
    pub supplier_email: String,
    pub supplier_address: Option<String>,
    pub supplier_phone_number: Option<String>,
    /// Products supplied, ordered by id
    pub products: Vec<Product>,
}

impl SupplierView {
    /// Assembles a view from a supplier record and its resolved products.
    pub fn new(supplier: Supplier, products: Vec<Product>) -> Self {
        Self {
            supplier_id: supplier.supplier_id,
            supplier_name: supplier.supplier_name,
            supplier_email: supplier.supplier_email,
            supplier_address: supplier.supplier_address,
            supplier_phone_number: supplier.supplier_phone_number,
            products,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
