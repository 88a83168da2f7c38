//! API Module
//!
//! HTTP surface: application state, request handlers, and the router.

pub mod handlers;
pub mod routes;

// Re-export the main types for convenience
pub use handlers::AppState;
pub use routes::create_router;
