use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::models::{Course, Registration, Student};

use super::location::default_data_dir;

/// File names of the three collections inside the data directory.
pub const STUDENTS_FILE: &str = "students.json";
pub const COURSES_FILE: &str = "courses.json";
pub const REGISTRATIONS_FILE: &str = "registrations.json";

/// Handle on the directory holding the collection files. Every save rewrites a
/// whole collection, so the store keeps no state beyond the directory path.
#[derive(Debug, Clone)]
pub struct Store {
    dir: PathBuf,
}

impl Store {
    /// Open the store under the user's home directory, creating it on first use.
    pub fn open_default() -> Result<Self> {
        Self::open(default_data_dir()?)
    }

    /// Open the store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).context("failed to create data directory")?;
        debug!(dir = %dir.display(), "opened gradebook store");
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn load_students(&self) -> Result<Vec<Student>> {
        load_collection(&self.dir.join(STUDENTS_FILE)).context("failed to load students")
    }

    pub fn load_courses(&self) -> Result<Vec<Course>> {
        load_collection(&self.dir.join(COURSES_FILE)).context("failed to load courses")
    }

    pub fn load_registrations(&self) -> Result<Vec<Registration>> {
        load_collection(&self.dir.join(REGISTRATIONS_FILE))
            .context("failed to load registrations")
    }

    pub fn save_students(&self, students: &[Student]) -> Result<()> {
        self.save_collection(STUDENTS_FILE, students)
            .context("failed to save students")
    }

    pub fn save_courses(&self, courses: &[Course]) -> Result<()> {
        self.save_collection(COURSES_FILE, courses)
            .context("failed to save courses")
    }

    pub fn save_registrations(&self, registrations: &[Registration]) -> Result<()> {
        self.save_collection(REGISTRATIONS_FILE, registrations)
            .context("failed to save registrations")
    }

    /// Serialize `records` into a temporary file next to the target and move it
    /// over the target once fully written, so a failed save leaves the previous
    /// file in place.
    fn save_collection<T: Serialize>(&self, file_name: &str, records: &[T]) -> Result<()> {
        let target = self.dir.join(file_name);
        let tmp = NamedTempFile::new_in(&self.dir).context("failed to create temporary file")?;

        let mut writer = BufWriter::new(tmp.as_file());
        serde_json::to_writer_pretty(&mut writer, records)
            .with_context(|| format!("failed to encode {file_name}"))?;
        writer.flush().context("failed to flush temporary file")?;
        drop(writer);

        tmp.persist(&target)
            .with_context(|| format!("failed to replace {}", target.display()))?;
        debug!(file = file_name, records = records.len(), "saved collection");
        Ok(())
    }
}

/// Read a JSON array from `path`. A file that does not exist yet is an empty
/// collection.
fn load_collection<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let records = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(records)
}
