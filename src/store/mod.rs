//! Persistence module split across logical submodules.

mod collections;
mod location;

pub use collections::{Store, COURSES_FILE, REGISTRATIONS_FILE, STUDENTS_FILE};
pub use location::default_data_dir;
