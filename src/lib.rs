pub mod graph;

// API module for the flow builder backend
pub mod api;

// Re-export api modules at crate root so routes and tests can use
// crate::models, crate::services, etc.
pub use api::middleware;
pub use api::models;
pub use api::routes;
pub use api::services;
pub use api::storage;
