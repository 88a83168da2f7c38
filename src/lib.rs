//! Inventory Hub - an inventory REST backend
//!
//! Products, Categories and Suppliers with many-to-many relations, plus a
//! TTL-cached first page for product and supplier listings.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod store;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_sweep_task;
