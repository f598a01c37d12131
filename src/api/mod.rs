// src/api/mod.rs
pub mod assets;
pub mod handlers;
pub mod registry;
pub mod routes;
pub mod state;

pub use registry::DetailRegistry;
pub use routes::configure_routes;
pub use state::AppState;
