use super::DataStore;
use crate::error::Result;
use crate::model::Student;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    students: Option<Vec<Student>>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_students(students: Vec<Student>) -> Self {
        Self {
            students: Some(students),
            saves: 0,
        }
    }

    /// Number of times `save` has been called
    pub fn save_count(&self) -> usize {
        self.saves
    }

    pub fn students(&self) -> &[Student] {
        self.students.as_deref().unwrap_or_default()
    }
}

impl DataStore for InMemoryStore {
    fn exists(&self) -> bool {
        self.students.is_some()
    }

    fn load(&self) -> Result<Vec<Student>> {
        Ok(self.students.clone().unwrap_or_default())
    }

    fn save(&mut self, students: &[Student]) -> Result<()> {
        self.students = Some(students.to_vec());
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::with_students(Vec::new()),
            }
        }

        /// Adds `count` students with marks cycling through 1..=5
        pub fn with_students(mut self, count: usize) -> Self {
            let mut students = self.store.load().unwrap();
            for i in 0..count {
                let name = format!("Student {}", i + 1);
                let mark = (i % 5) as i64 + 1;
                students.push(Student::new(name, Some(100 + i as i64), mark));
            }
            self.store = InMemoryStore::with_students(students);
            self
        }

        pub fn with_student(mut self, name: &str, group: Option<i64>, mark: i64) -> Self {
            let mut students = self.store.load().unwrap();
            students.push(Student::new(name, group, mark));
            self.store = InMemoryStore::with_students(students);
            self
        }
    }
}
