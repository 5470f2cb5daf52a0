//! # Storage Layer
//!
//! The [`DataStore`] trait is the persistence seam for the roster. The rest of
//! the crate never touches the filesystem directly.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, a single JSON file
//!   - Whole roster written as one JSON array, 4-space indented
//!   - Non-ASCII text kept as-is, never `\u` escaped
//!   - Every save overwrites the file in full
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Counts saves so tests can assert on the mutation flag
//!
//! ## Storage Format
//!
//! ```text
//! [
//!     {
//!         "name": "Ivanov I.I.",
//!         "group": 101,
//!         "mark": 5
//!     }
//! ]
//! ```
//!
//! A store that does not exist yet is not an error: callers check
//! [`DataStore::exists`] and start from an empty roster.

use crate::error::Result;
use crate::model::Student;

pub mod fs;
pub mod memory;

/// Abstract interface for roster storage.
pub trait DataStore {
    /// Whether there is anything to load yet
    fn exists(&self) -> bool;

    /// Load the whole roster, in stored order
    fn load(&self) -> Result<Vec<Student>>;

    /// Replace the stored roster with `students`
    fn save(&mut self, students: &[Student]) -> Result<()>;
}
