//! # Rendering
//!
//! The student table has fixed column widths. Padding is computed from display
//! width rather than byte or char length, so Cyrillic and other wide text
//! lines up. Values longer than their column are printed in full and push the
//! border out, they are never truncated.

use colored::Colorize;
use students::api::{CmdMessage, MessageLevel};
use students::index::DisplayStudent;
use unicode_width::UnicodeWidthStr;

pub const EMPTY_ROSTER_MESSAGE: &str = "Список студентов пустой.";

const INDEX_WIDTH: usize = 4;
const NAME_WIDTH: usize = 30;
const GROUP_WIDTH: usize = 14;

const INDEX_HEADER: &str = "№";
const NAME_HEADER: &str = "Ф.И.О.";
const GROUP_HEADER: &str = "Номер группы";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content),
            MessageLevel::Success => println!("{}", message.content.green()),
        }
    }
}

/// Render students as a bordered table, or the empty notice when there are none.
pub(super) fn render_student_list(students: &[DisplayStudent]) -> String {
    if students.is_empty() {
        return format!("{}\n", EMPTY_ROSTER_MESSAGE);
    }

    let border = border_line();
    let mut output = String::new();
    output.push_str(&border);
    output.push_str(&format!(
        "| {} | {} | {} |\n",
        center(INDEX_HEADER, INDEX_WIDTH),
        center(NAME_HEADER, NAME_WIDTH),
        center(GROUP_HEADER, GROUP_WIDTH),
    ));
    output.push_str(&border);

    for ds in students {
        let group = ds
            .student
            .group
            .map(|g| g.to_string())
            .unwrap_or_default();
        output.push_str(&format!(
            "| {} | {} | {} |\n",
            align_right(&ds.index.to_string(), INDEX_WIDTH),
            align_left(&ds.student.name, NAME_WIDTH),
            align_left(&group, GROUP_WIDTH),
        ));
    }

    output.push_str(&border);
    output
}

fn border_line() -> String {
    format!(
        "+-{}-+-{}-+-{}-+\n",
        "-".repeat(INDEX_WIDTH),
        "-".repeat(NAME_WIDTH),
        "-".repeat(GROUP_WIDTH),
    )
}

fn align_left(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn align_right(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", " ".repeat(padding), s)
}

// Odd leftover space goes to the right
fn center(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    let left = padding / 2;
    format!("{}{}{}", " ".repeat(left), s, " ".repeat(padding - left))
}
