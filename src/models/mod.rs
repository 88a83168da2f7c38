//! Request and Response models for the inventory server API
//!
//! This module defines the entity records shared with the store plus the
//! DTOs (Data Transfer Objects) used for serializing/deserializing HTTP
//! request and response bodies.

pub mod entities;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use entities::{Category, Product, Supplier};
pub use requests::{
    is_valid_email, EmailQuery, NameQuery, PageParams, ProductPayload, SupplierPayload,
    ThresholdParams,
};
pub use responses::{ErrorResponse, HealthResponse, ProductView, SupplierView};
