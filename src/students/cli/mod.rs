//! # CLI Layer
//!
//! This module is **one possible UI client** for the roster library. It is the
//! only place that:
//! - Parses arguments
//! - Reads the `DATA` environment variable
//! - Sets up logging
//! - Prints to stdout and decides exit codes (through `main.rs`)
//!
//! ## Data File Resolution
//!
//! `-d/--data <path>` is accepted before or after the subcommand. Without it
//! the `DATA` environment variable is used. With neither, the run fails with
//! `The data file name is absent` and exit status 1.
//!
//! ## Persistence
//!
//! The roster is loaded once per invocation and written back only when the
//! command changed it (`add`). `list` and `filter` never touch the file.
//!
//! ## Module Structure
//!
//! - `commands`: Dispatch and per-command handlers
//! - `render`: The student table and message printing
//! - `setup`: Argument definitions via clap

mod commands;
mod render;
pub mod setup;

pub use commands::run;
