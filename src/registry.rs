//! The registry owns every collection and exposes all gradebook operations.
//! Mutations append to the in-memory collection and immediately rewrite the
//! matching file; everything else is derived on demand from registrations.

use tracing::{debug, warn};

use crate::error::{RegistryError, Result};
use crate::grades::grade_points;
use crate::models::{Course, Registration, Student};
use crate::store::Store;

/// One row of the ranking table.
#[derive(Debug, Clone, PartialEq)]
pub struct RankEntry<'a> {
    /// 1-indexed position.
    pub rank: usize,
    pub student: &'a Student,
    pub gpa: f64,
}

/// A student's registration resolved against the course collection.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptEntry {
    pub course_name: String,
    pub trimester: String,
    pub credits: u32,
    pub grade: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transcript {
    pub email: String,
    pub names: String,
    pub entries: Vec<TranscriptEntry>,
    pub gpa: f64,
}

/// In-memory gradebook backed by a [`Store`].
pub struct Registry {
    store: Store,
    students: Vec<Student>,
    courses: Vec<Course>,
    registrations: Vec<Registration>,
}

impl Registry {
    /// Load all three collections from `store`.
    pub fn load(store: Store) -> anyhow::Result<Self> {
        let students = store.load_students()?;
        let courses = store.load_courses()?;
        let registrations = store.load_registrations()?;
        debug!(
            students = students.len(),
            courses = courses.len(),
            registrations = registrations.len(),
            "loaded gradebook"
        );

        Ok(Self {
            store,
            students,
            courses,
            registrations,
        })
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn registrations(&self) -> &[Registration] {
        &self.registrations
    }

    pub fn find_student_by_email(&self, email: &str) -> Option<&Student> {
        self.students.iter().find(|student| student.email == email)
    }

    pub fn find_course_by_name(&self, name: &str) -> Option<&Course> {
        self.courses.iter().find(|course| course.name == name)
    }

    /// Append a student and rewrite the students file. Duplicate emails are not
    /// rejected here; callers that care check `find_student_by_email` first.
    /// A failed save leaves the in-memory collection as it was.
    pub fn add_student(&mut self, email: &str, names: &str) -> Result<()> {
        self.students.push(Student::new(email, names));
        if let Err(err) = self.store.save_students(&self.students) {
            self.students.pop();
            return Err(err.into());
        }
        debug!(email, "added student");
        Ok(())
    }

    /// Append a course and rewrite the courses file.
    pub fn add_course(&mut self, name: &str, trimester: &str, credits: u32) -> Result<()> {
        self.courses.push(Course::new(name, trimester, credits));
        if let Err(err) = self.store.save_courses(&self.courses) {
            self.courses.pop();
            return Err(err.into());
        }
        debug!(name, trimester, credits, "added course");
        Ok(())
    }

    /// Record `grade` for the student in the course. Both must already exist;
    /// otherwise nothing changes and a not-found error is returned.
    pub fn register_student_for_course(
        &mut self,
        email: &str,
        course_name: &str,
        grade: &str,
    ) -> Result<()> {
        if self.find_student_by_email(email).is_none()
            || self.find_course_by_name(course_name).is_none()
        {
            return Err(RegistryError::StudentOrCourseNotFound {
                email: email.to_string(),
                course_name: course_name.to_string(),
            });
        }

        self.registrations
            .push(Registration::new(email, course_name, grade));
        if let Err(err) = self.store.save_registrations(&self.registrations) {
            self.registrations.pop();
            return Err(err.into());
        }
        debug!(email, course_name, grade, "registered student");
        Ok(())
    }

    /// Credit-weighted GPA across every registration of the student.
    pub fn calculate_gpa(&self, email: &str) -> Result<f64> {
        if self.find_student_by_email(email).is_none() {
            return Err(RegistryError::StudentNotFound(email.to_string()));
        }
        Ok(self.weighted_gpa(email))
    }

    /// Every student with their GPA, best first. Ties keep collection order.
    pub fn calculate_ranking(&self) -> Vec<RankEntry<'_>> {
        let mut scored: Vec<(&Student, f64)> = self
            .students
            .iter()
            .map(|student| (student, self.weighted_gpa(&student.email)))
            .collect();
        // Stable sort: ties keep collection order.
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));

        scored
            .into_iter()
            .enumerate()
            .map(|(idx, (student, gpa))| RankEntry {
                rank: idx + 1,
                student,
                gpa,
            })
            .collect()
    }

    /// Registrations whose grade is exactly `grade` (case-sensitive), resolved
    /// to their student and course in registration order.
    pub fn search_by_grade(&self, grade: &str) -> Vec<(&Student, &Course)> {
        self.registrations
            .iter()
            .filter(|registration| registration.grade == grade)
            .filter_map(|registration| {
                let student = self.find_student_by_email(&registration.email);
                let course = self.find_course_by_name(&registration.course_name);
                match (student, course) {
                    (Some(student), Some(course)) => Some((student, course)),
                    _ => {
                        warn!(
                            email = %registration.email,
                            course_name = %registration.course_name,
                            "skipping registration with dangling reference"
                        );
                        None
                    }
                }
            })
            .collect()
    }

    /// Students whose GPA lies within `[min, max]`, in collection order.
    pub fn search_by_gpa_range(&self, min: f64, max: f64) -> Vec<(&Student, f64)> {
        self.students
            .iter()
            .map(|student| (student, self.weighted_gpa(&student.email)))
            .filter(|(_, gpa)| min <= *gpa && *gpa <= max)
            .collect()
    }

    pub fn generate_transcript(&self, email: &str) -> Result<Transcript> {
        let student = self
            .find_student_by_email(email)
            .ok_or_else(|| RegistryError::StudentNotFound(email.to_string()))?;

        let entries = self
            .registrations_for(email)
            .filter_map(|registration| {
                let course = self.resolve_course(registration)?;
                Some(TranscriptEntry {
                    course_name: course.name.clone(),
                    trimester: course.trimester.clone(),
                    credits: course.credits,
                    grade: registration.grade.clone(),
                })
            })
            .collect();

        Ok(Transcript {
            email: student.email.clone(),
            names: student.names.clone(),
            entries,
            gpa: self.weighted_gpa(email),
        })
    }

    fn registrations_for<'a>(&'a self, email: &'a str) -> impl Iterator<Item = &'a Registration> {
        self.registrations
            .iter()
            .filter(move |registration| registration.email == email)
    }

    /// Look up the course a registration points at, logging dangling names.
    fn resolve_course(&self, registration: &Registration) -> Option<&Course> {
        let course = self.find_course_by_name(&registration.course_name);
        if course.is_none() {
            warn!(
                email = %registration.email,
                course_name = %registration.course_name,
                "registration references a missing course"
            );
        }
        course
    }

    /// GPA without the existence check. Registrations for missing courses add
    /// neither points nor weight.
    fn weighted_gpa(&self, email: &str) -> f64 {
        let (points, weight) = self
            .registrations_for(email)
            .filter_map(|registration| {
                let course = self.resolve_course(registration)?;
                let credits = f64::from(course.credits);
                Some((grade_points(&registration.grade) * credits, credits))
            })
            .fold((0.0, 0.0), |(points, weight), (p, c)| (points + p, weight + c));

        if weight > 0.0 {
            points / weight
        } else {
            0.0
        }
    }
}
