//! Entity records for the inventory store
//!
//! Scalar attributes only. Entities hold no cross-references; the
//! many-to-many relations live in the store's join structures and are
//! resolved into view DTOs at the service layer.

use serde::{Deserialize, Serialize};

/// A product row: scalar fields, id assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Store-assigned identifier
    pub product_id: u32,
    /// Display name
    pub product_name: String,
    /// Unit price, never negative
    pub price: f64,
    /// Units on hand, never negative
    pub stock: i64,
}

/// A category row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Store-assigned identifier
    pub category_id: u32,
    /// Display name
    pub category_name: String,
}

/// A supplier row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    /// Store-assigned identifier
    pub supplier_id: u32,
    /// Display name
    pub supplier_name: String,
    /// Contact email, syntactically validated at the API boundary
    pub supplier_email: String,
    /// Postal address, optional
    pub supplier_address: Option<String>,
    /// Phone number, optional
    pub supplier_phone_number: Option<String>,
}
