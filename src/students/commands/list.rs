use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::index_students;
use crate::model::Student;

pub fn run(students: &[Student]) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_students(index_students(students.to_vec())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::DataStore;

    #[test]
    fn lists_everything_in_order() {
        let fixture = StoreFixture::new()
            .with_student("A", Some(1), 3)
            .with_student("B", Some(2), 5);
        let students = fixture.store.load().unwrap();

        let result = run(&students).unwrap();

        assert_eq!(result.listed_students.len(), 2);
        assert_eq!(result.listed_students[0].index, 1);
        assert_eq!(result.listed_students[0].student.name, "A");
        assert_eq!(result.listed_students[1].index, 2);
        assert_eq!(result.listed_students[1].student.name, "B");
    }

    #[test]
    fn empty_roster_lists_nothing() {
        let result = run(&[]).unwrap();
        assert!(result.listed_students.is_empty());
        assert!(result.messages.is_empty());
    }
}
