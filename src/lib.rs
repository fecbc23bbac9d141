// src/lib.rs
pub mod api;
pub mod assistant;
pub mod banner;
pub mod compiler;
pub mod config;
pub mod errors;
pub mod models;
pub mod providers;
pub mod runner;
pub mod workspace;
