//! Core library surface for the gradebook record keeper.
//!
//! The binary only wires these pieces together, so tests and other tooling can
//! drive the registry or the menu directly against any data directory.
pub mod error;
pub mod grades;
pub mod logging;
pub mod models;
pub mod registry;
pub mod store;
pub mod ui;

pub use error::RegistryError;
pub use grades::grade_points;
pub use models::{Course, Registration, Student};
pub use registry::{RankEntry, Registry, Transcript, TranscriptEntry};
pub use store::Store;
pub use ui::{run_menu, Menu};
