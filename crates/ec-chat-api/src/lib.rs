//! Engine diagnostic chat server: library crate.
//!
//! Re-exports all modules so the binary (`main.rs`) and the end-to-end test
//! crate can reach `AppState`, `build_router` and `ApiConfig`.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
