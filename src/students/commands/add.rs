use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Student;

/// Append a new student to the end of the roster.
///
/// No range checks: any mark and any group are accepted.
pub fn add_student(
    mut students: Vec<Student>,
    name: String,
    group: Option<i64>,
    mark: i64,
) -> Vec<Student> {
    students.push(Student::new(name, group, mark));
    students
}

pub fn run(
    students: &mut Vec<Student>,
    name: String,
    group: Option<i64>,
    mark: i64,
) -> Result<CmdResult> {
    let message = format!("Added student #{}: {}", students.len() + 1, name);
    *students = add_student(std::mem::take(students), name, group, mark);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(message));
    Ok(result)
}
