use super::DataStore;
use crate::error::{Result, StudentsError};
use crate::model::Student;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

const INDENT: &[u8] = b"    ";

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Serialize the roster into `writer` the way it is kept on disk.
pub fn write_json<W: Write>(writer: W, students: &[Student]) -> Result<()> {
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut ser = serde_json::Serializer::with_formatter(writer, formatter);
    students
        .serialize(&mut ser)
        .map_err(StudentsError::Serialization)
}

impl DataStore for FileStore {
    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn load(&self) -> Result<Vec<Student>> {
        let content = fs::read_to_string(&self.path).map_err(StudentsError::Io)?;
        let students: Vec<Student> =
            serde_json::from_str(&content).map_err(StudentsError::Serialization)?;
        log::debug!(
            "loaded {} students from {}",
            students.len(),
            self.path.display()
        );
        Ok(students)
    }

    fn save(&mut self, students: &[Student]) -> Result<()> {
        let file = File::create(&self.path).map_err(StudentsError::Io)?;
        let mut writer = BufWriter::new(file);
        write_json(&mut writer, students)?;
        writer.flush().map_err(StudentsError::Io)?;
        log::debug!("wrote {} students to {}", students.len(), self.path.display());
        Ok(())
    }
}
