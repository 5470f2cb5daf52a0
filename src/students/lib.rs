//! # Students Architecture
//!
//! A small roster of student records (name, group, mark) kept in a JSON file.
//! The library holds all the logic; the `students` binary is a thin CLI client.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, resolves the data file, prints tables  │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! │    and the process environment                              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Loads the roster once, dispatches to commands            │
//! │  - Owns the mutation flag, saves at most once               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - add / list / filter on plain Rust values                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait                                          │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr, never calls
//! `std::process::exit` and never reads environment variables. The data file
//! path arrives as a parameter, resolved by the CLI through [`config`].
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: add, list and filter
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: The `Student` record
//! - [`index`]: 1-based display positions
//! - [`config`]: Data path resolution and constants
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod store;
