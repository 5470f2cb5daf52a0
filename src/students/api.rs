//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for roster operations.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Opens** the store once, starting from an empty roster when there is
//!   nothing to load yet
//! - **Dispatches** to the appropriate command function
//! - **Tracks the mutation flag** so the roster is written back at most once
//!   and only when a command changed it
//!
//! It does no business logic and no I/O of its own beyond what the store
//! does: no stdout, no environment lookups, no exit codes.
//!
//! ## Generic Over DataStore
//!
//! `StudentsApi<S: DataStore>` is generic over the storage backend:
//! - Production: `StudentsApi<FileStore>`
//! - Testing: `StudentsApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::model::Student;
use crate::store::DataStore;

pub struct StudentsApi<S: DataStore> {
    store: S,
    students: Vec<Student>,
    dirty: bool,
}

impl<S: DataStore> StudentsApi<S> {
    /// Load the roster from `store`, or start empty when the store does not exist.
    pub fn open(store: S) -> Result<Self> {
        let students = if store.exists() {
            store.load()?
        } else {
            log::debug!("no stored roster yet, starting empty");
            Vec::new()
        };
        Ok(Self {
            store,
            students,
            dirty: false,
        })
    }

    pub fn add_student(
        &mut self,
        name: String,
        group: Option<i64>,
        mark: i64,
    ) -> Result<commands::CmdResult> {
        let result = commands::add::run(&mut self.students, name, group, mark)?;
        self.dirty = true;
        Ok(result)
    }

    pub fn list_students(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.students)
    }

    pub fn filter_students(&self, threshold: i64) -> Result<FilterOutcome> {
        commands::filter::run(&self.students, threshold)
    }

    /// Write the roster back if a command changed it. Returns whether it wrote.
    pub fn flush(&mut self) -> Result<bool> {
        if !self.dirty {
            return Ok(false);
        }
        self.store.save(&self.students)?;
        self.dirty = false;
        log::info!("saved {} students", self.students.len());
        Ok(true)
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use commands::filter::FilterOutcome;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
