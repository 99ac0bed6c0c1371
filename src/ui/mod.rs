//! Line-oriented front end: a numbered menu that prompts for fields and prints
//! registry results.

mod helpers;
mod menu;
mod prompts;
mod report;

pub use menu::{run_menu, Menu};
