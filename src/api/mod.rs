// src/api/mod.rs
pub mod routes;
pub mod handlers;
pub mod state;

pub use routes::{compile_json_config, configure_app, configure_routes, cors, json_config};
pub use state::AppState;
