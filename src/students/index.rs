//! # Display Indexing
//!
//! Students carry no identifier. The only handle a user ever sees is the
//! 1-based position of a record in whatever list is being shown, so a filtered
//! list is renumbered from 1 rather than keeping the positions of the full
//! roster.

use crate::model::Student;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayStudent {
    pub index: usize,
    pub student: Student,
}

/// Number `students` from 1, keeping their order.
pub fn index_students(students: Vec<Student>) -> Vec<DisplayStudent> {
    students
        .into_iter()
        .enumerate()
        .map(|(i, student)| DisplayStudent {
            index: i + 1,
            student,
        })
        .collect()
}
