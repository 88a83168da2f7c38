//! Request DTOs for the inventory server API
//!
//! Defines the structure of incoming HTTP request bodies and query strings.
//! All boundary validation lives here; the services may assume validated
//! scalar input.

use serde::Deserialize;

use crate::cache::MAX_PAGE_SIZE;

/// Request body for creating or updating a product.
///
/// Relation lists carry ids only. Ids that do not exist in the store are
/// silently dropped by the service. On update, an empty list means
/// "leave the existing relation set untouched".
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    /// Display name, required non-blank
    pub product_name: String,
    /// Unit price
    pub price: f64,
    /// Units on hand
    pub stock: i64,
    /// Category ids to associate
    #[serde(default)]
    pub category_ids: Vec<u32>,
    /// Supplier ids to associate
    #[serde(default)]
    pub supplier_ids: Vec<u32>,
}

impl ProductPayload {
    /// Validates the request data.
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.product_name.trim().is_empty() {
            return Some("Product name is required".to_string());
        }
        if self.price < 0.0 {
            return Some("Price cannot be negative".to_string());
        }
        if self.stock < 0 {
            return Some("Stock cannot be negative".to_string());
        }
        None
    }
}

/// Request body for creating or updating a supplier.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierPayload {
    /// Display name, required non-blank
    pub supplier_name: String,
    /// Contact email, required and syntactically valid
    pub supplier_email: String,
    /// Postal address
    #[serde(default)]
    pub supplier_address: Option<String>,
    /// Phone number
    #[serde(default)]
    pub supplier_phone_number: Option<String>,
    /// Product ids to associate
    #[serde(default)]
    pub product_ids: Vec<u32>,
}

impl SupplierPayload {
    /// Validates the request data.
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.supplier_name.trim().is_empty() {
            return Some("Supplier name is required".to_string());
        }
        if self.supplier_email.trim().is_empty() {
            return Some("Supplier email is required".to_string());
        }
        if !is_valid_email(&self.supplier_email) {
            return Some("Invalid email format".to_string());
        }
        None
    }
}

/// Query parameters for paginated listings.
///
/// Defaults match the client's first-page request, which is the key the
/// pagination cache serves.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageParams {
    /// 1-based page number
    #[serde(default = "default_page_number")]
    pub page_number: u32,
    /// Items per page, bounded to [1, 100]
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_page_number() -> u32 {
    1
}

fn default_page_size() -> u32 {
    6
}

impl PageParams {
    /// Validates pagination bounds before they reach the list services.
    pub fn validate(&self) -> Option<String> {
        if self.page_number < 1 {
            return Some("Page number must be greater than 0".to_string());
        }
        if self.page_size < 1 || self.page_size > MAX_PAGE_SIZE {
            return Some(format!(
                "Page size must be between 1 and {}",
                MAX_PAGE_SIZE
            ));
        }
        None
    }
}

/// Query parameter for the low-stock listing.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ThresholdParams {
    /// Inclusive stock threshold
    #[serde(default = "default_threshold")]
    pub threshold: i64,
}

fn default_threshold() -> i64 {
    10
}

/// Query parameter for supplier name search.
#[derive(Debug, Clone, Deserialize)]
pub struct NameQuery {
    pub name: String,
}

/// Query parameter for supplier email lookup.
#[derive(Debug, Clone, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

/// Minimal syntactic email check: one `@`, non-empty local part, and a
/// dotted domain without whitespace.
pub fn is_valid_email(email: &str) -> bool {
    if email.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}
