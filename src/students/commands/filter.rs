//! # Mark Filter
//!
//! An empty roster and a roster where nobody passes are different answers:
//! the first is [`FilterOutcome::EmptyInput`], the second is
//! `FilterOutcome::Matched(vec![])`. Callers show the "list is empty" notice
//! for the former instead of rendering a listing.

use crate::error::Result;
use crate::model::Student;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterOutcome {
    /// There was nothing to filter
    EmptyInput,
    /// Students whose mark is strictly above the threshold, in roster order
    Matched(Vec<Student>),
}

impl FilterOutcome {
    pub fn is_empty_input(&self) -> bool {
        matches!(self, FilterOutcome::EmptyInput)
    }
}

pub fn filter_by_mark(students: &[Student], threshold: i64) -> FilterOutcome {
    if students.is_empty() {
        return FilterOutcome::EmptyInput;
    }
    FilterOutcome::Matched(
        students
            .iter()
            .filter(|s| s.mark > threshold)
            .cloned()
            .collect(),
    )
}

pub fn run(students: &[Student], threshold: i64) -> Result<FilterOutcome> {
    let outcome = filter_by_mark(students, threshold);
    match &outcome {
        FilterOutcome::EmptyInput => log::debug!("filter: roster is empty"),
        FilterOutcome::Matched(matched) => log::debug!(
            "filter: {} of {} students above {}",
            matched.len(),
            students.len(),
            threshold
        ),
    }
    Ok(outcome)
}
