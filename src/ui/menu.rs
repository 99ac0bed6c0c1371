use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use crossterm::tty::IsTty;
use tracing::{error, info};

use crate::error::RegistryError;
use crate::registry::Registry;

use super::helpers::{surface_error, write_status, StatusKind};
use super::prompts::{parse_credits, parse_gpa_bound, read_line};
use super::report::{
    format_gpa, gpa_range_lines, grade_match_lines, ranking_lines, transcript_lines,
};

const MENU: &[&str] = &[
    "1. Add Student",
    "2. Add Course",
    "3. Register Student for Course",
    "4. Calculate GPA",
    "5. Calculate Ranking",
    "6. Search by Grade",
    "7. Generate Transcript",
    "8. Search by GPA Range",
    "9. Exit",
];

/// Whether the loop should keep prompting after a selection.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Drive the menu on the process's stdin/stdout until the operator exits.
pub fn run_menu(registry: &mut Registry) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let styled = stdout.is_tty();
    Menu::new(registry, stdin.lock(), stdout.lock())
        .with_color(styled)
        .run()
}

/// Line-oriented menu over any reader/writer pair.
pub struct Menu<'a, R, W> {
    registry: &'a mut Registry,
    input: R,
    out: W,
    color: bool,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(registry: &'a mut Registry, input: R, out: W) -> Self {
        Self {
            registry,
            input,
            out,
            color: false,
        }
    }

    /// Color status lines. Off by default; only worth enabling on a terminal.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Show the menu and dispatch selections until Exit or end of input.
    /// Operation failures are reported and the loop carries on; only I/O errors
    /// on the menu's own streams end it early.
    pub fn run(mut self) -> Result<()> {
        loop {
            writeln!(self.out, "\nMenu:")?;
            for item in MENU {
                writeln!(self.out, "{item}")?;
            }

            let Some(choice) = self.prompt("Enter your choice: ")? else {
                break;
            };
            if self.handle_choice(choice.trim())? == Flow::Exit {
                break;
            }
        }

        info!("menu closed");
        self.out.flush().context("failed to flush output")
    }

    fn handle_choice(&mut self, choice: &str) -> Result<Flow> {
        match choice {
            "1" => self.add_student(),
            "2" => self.add_course(),
            "3" => self.register(),
            "4" => self.calculate_gpa(),
            "5" => self.ranking(),
            "6" => self.search_by_grade(),
            "7" => self.transcript(),
            "8" => self.search_by_gpa_range(),
            "9" => Ok(Flow::Exit),
            _ => {
                self.status(StatusKind::Error, "Invalid choice. Please try again.")?;
                Ok(Flow::Continue)
            }
        }
    }

    fn add_student(&mut self) -> Result<Flow> {
        let Some(email) = self.prompt("Enter student email: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(names) = self.prompt("Enter student names: ")? else {
            return Ok(Flow::Exit);
        };

        if self.registry.find_student_by_email(&email).is_some() {
            self.status(
                StatusKind::Error,
                &format!("Student with email {email} already exists."),
            )?;
            return Ok(Flow::Continue);
        }

        let outcome = self.registry.add_student(&email, &names);
        self.report(outcome, &format!("Added student {email}."))
    }

    fn add_course(&mut self) -> Result<Flow> {
        let Some(name) = self.prompt("Enter course name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(trimester) = self.prompt("Enter course trimester: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(credits_raw) = self.prompt("Enter course credits: ")? else {
            return Ok(Flow::Exit);
        };

        let credits = match parse_credits(&credits_raw) {
            Ok(credits) => credits,
            Err(err) => {
                self.status(StatusKind::Error, &err.to_string())?;
                return Ok(Flow::Continue);
            }
        };

        if self.registry.find_course_by_name(&name).is_some() {
            self.status(
                StatusKind::Error,
                &format!("Course with name {name} already exists."),
            )?;
            return Ok(Flow::Continue);
        }

        let outcome = self.registry.add_course(&name, &trimester, credits);
        self.report(outcome, &format!("Added course {name}."))
    }

    fn register(&mut self) -> Result<Flow> {
        let Some(email) = self.prompt("Enter student email: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(course_name) = self.prompt("Enter course name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(grade) = self.prompt("Enter grade (A-F): ")? else {
            return Ok(Flow::Exit);
        };

        let outcome = self
            .registry
            .register_student_for_course(&email, &course_name, grade.trim());
        self.report(outcome, &format!("Registered {email} for {course_name}."))
    }

    fn calculate_gpa(&mut self) -> Result<Flow> {
        let Some(email) = self.prompt("Enter student email: ")? else {
            return Ok(Flow::Exit);
        };

        match self.registry.calculate_gpa(&email) {
            Ok(gpa) => {
                writeln!(self.out, "GPA for {email}: {}", format_gpa(gpa))?;
                Ok(Flow::Continue)
            }
            Err(err) => self.report_error(err),
        }
    }

    fn ranking(&mut self) -> Result<Flow> {
        let lines = ranking_lines(&self.registry.calculate_ranking());
        if lines.is_empty() {
            self.status(StatusKind::Info, "No students yet.")?;
        }
        self.write_lines(&lines)?;
        Ok(Flow::Continue)
    }

    fn search_by_grade(&mut self) -> Result<Flow> {
        let Some(grade) = self.prompt("Enter grade: ")? else {
            return Ok(Flow::Exit);
        };

        let lines = grade_match_lines(&self.registry.search_by_grade(grade.trim()));
        if lines.is_empty() {
            self.status(StatusKind::Info, "No registrations with that grade.")?;
        }
        self.write_lines(&lines)?;
        Ok(Flow::Continue)
    }

    fn search_by_gpa_range(&mut self) -> Result<Flow> {
        let Some(min_raw) = self.prompt("Enter minimum GPA: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(max_raw) = self.prompt("Enter maximum GPA: ")? else {
            return Ok(Flow::Exit);
        };

        let bounds =
            parse_gpa_bound(&min_raw).and_then(|min| Ok((min, parse_gpa_bound(&max_raw)?)));
        let (min, max) = match bounds {
            Ok(bounds) => bounds,
            Err(err) => {
                self.status(StatusKind::Error, &err.to_string())?;
                return Ok(Flow::Continue);
            }
        };

        let lines = gpa_range_lines(&self.registry.search_by_gpa_range(min, max));
        if lines.is_empty() {
            self.status(StatusKind::Info, "No students in that GPA range.")?;
        }
        self.write_lines(&lines)?;
        Ok(Flow::Continue)
    }

    fn transcript(&mut self) -> Result<Flow> {
        let Some(email) = self.prompt("Enter student email: ")? else {
            return Ok(Flow::Exit);
        };

        match self.registry.generate_transcript(&email) {
            Ok(transcript) => {
                self.write_lines(&transcript_lines(&transcript))?;
                Ok(Flow::Continue)
            }
            Err(err) => self.report_error(err),
        }
    }

    /// Echo the outcome of a registry mutation.
    fn report(&mut self, outcome: Result<(), RegistryError>, success: &str) -> Result<Flow> {
        match outcome {
            Ok(()) => {
                self.status(StatusKind::Info, success)?;
                Ok(Flow::Continue)
            }
            Err(err) => self.report_error(err),
        }
    }

    /// Not-found errors show their own message; storage errors show the root
    /// cause and get logged.
    fn report_error(&mut self, err: RegistryError) -> Result<Flow> {
        match err {
            RegistryError::Storage(err) => {
                error!("save failed: {err:#}");
                self.status(StatusKind::Error, &surface_error(&err))?;
            }
            err => self.status(StatusKind::Error, &err.to_string())?,
        }
        Ok(Flow::Continue)
    }

    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        read_line(&mut self.input, &mut self.out, prompt)
    }

    fn status(&mut self, kind: StatusKind, text: &str) -> Result<()> {
        write_status(&mut self.out, kind, text, self.color)
    }

    fn write_lines(&mut self, lines: &[String]) -> Result<()> {
        for line in lines {
            writeln!(self.out, "{line}")?;
        }
        Ok(())
    }
}
