//! Library crate for user-table.
//!
//! This crate exposes the building blocks of the TUI:
//! - User records and the HTTP client that fetches them (`model`, `api`)
//! - Filter criteria and matching (`filter`)
//! - The state container with its pure reducer (`store`)
//! - Application state and event loop (`app`)
//! - UI rendering (`ui`)
//! - Configuration, logging and error types (`config`, `logging`, `error`)
//!
//! It is used by the `user-table` binary and by tests.
#![doc = include_str!("../README.md")]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod filter;
pub mod logging;
pub mod model;
pub mod store;
pub mod ui;

// Re-export commonly used items at the crate root for convenience
pub use error::{FetchError, Result};
pub use model::User;
