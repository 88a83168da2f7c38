//! List Services
//!
//! Thin orchestrators per entity kind: each composes entity-store access
//! with pagination-cache lookups and invalidation. Mutations invalidate
//! only after the store write succeeds, and always before returning.

mod product;
mod supplier;

pub use product::{ProductPageCache, ProductService};
pub use supplier::{SupplierPageCache, SupplierService};
