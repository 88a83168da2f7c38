//! Entity Store Module
//!
//! In-memory relational storage for products, categories and suppliers.
//! Many-to-many relations live in explicit join structures owned by the
//! store; entities themselves carry no cross-references.

mod memory;
mod seed;

pub use memory::{MemoryStore, SharedStore};
pub use seed::seed_demo_data;
