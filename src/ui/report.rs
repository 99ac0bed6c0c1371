//! Plain-text rendering of derived gradebook views.

use crate::models::{Course, Student};
use crate::registry::{RankEntry, Transcript};

pub(crate) fn format_gpa(gpa: f64) -> String {
    format!("{gpa:.2}")
}

pub(crate) fn ranking_lines(ranking: &[RankEntry<'_>]) -> Vec<String> {
    ranking
        .iter()
        .map(|entry| {
            format!(
                "{}. {} - GPA: {}",
                entry.rank,
                entry.student,
                format_gpa(entry.gpa)
            )
        })
        .collect()
}

pub(crate) fn grade_match_lines(matches: &[(&Student, &Course)]) -> Vec<String> {
    matches
        .iter()
        .map(|(student, course)| format!("{student} - {course} ({})", course.trimester))
        .collect()
}

pub(crate) fn gpa_range_lines(matches: &[(&Student, f64)]) -> Vec<String> {
    matches
        .iter()
        .map(|(student, gpa)| format!("{student} - GPA: {}", format_gpa(*gpa)))
        .collect()
}

/// Header, GPA, then one line per course in registration order.
pub(crate) fn transcript_lines(transcript: &Transcript) -> Vec<String> {
    let mut lines = Vec::with_capacity(transcript.entries.len() + 2);
    lines.push(format!(
        "Transcript for {} ({}):",
        transcript.email, transcript.names
    ));
    lines.push(format!("GPA: {}", format_gpa(transcript.gpa)));
    for entry in &transcript.entries {
        let unit = if entry.credits == 1 { "credit" } else { "credits" };
        lines.push(format!(
            "Course: {} ({}, {} {unit}) - Grade: {}",
            entry.course_name, entry.trimester, entry.credits, entry.grade
        ));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::TranscriptEntry;

    #[test]
    fn transcript_lists_every_entry() {
        let transcript = Transcript {
            email: "s1@x.com".into(),
            names: "Sam".into(),
            entries: vec![
                TranscriptEntry {
                    course_name: "Math101".into(),
                    trimester: "T1".into(),
                    credits: 3,
                    grade: "B".into(),
                },
                TranscriptEntry {
                    course_name: "Chess".into(),
                    trimester: "T2".into(),
                    credits: 1,
                    grade: "a".into(),
                },
            ],
            gpa: 3.25,
        };

        assert_eq!(
            transcript_lines(&transcript),
            [
                "Transcript for s1@x.com (Sam):",
                "GPA: 3.25",
                "Course: Math101 (T1, 3 credits) - Grade: B",
                "Course: Chess (T2, 1 credit) - Grade: a",
            ]
        );
    }

    #[test]
    fn ranking_lines_are_numbered() {
        let sam = Student::new("s1@x.com", "Sam");
        let kim = Student::new("s2@x.com", "Kim");
        let ranking = [
            RankEntry {
                rank: 1,
                student: &kim,
                gpa: 4.0,
            },
            RankEntry {
                rank: 2,
                student: &sam,
                gpa: 2.0 / 3.0,
            },
        ];
        assert_eq!(
            ranking_lines(&ranking),
            [
                "1. Kim <s2@x.com> - GPA: 4.00",
                "2. Sam <s1@x.com> - GPA: 0.67",
            ]
        );
    }
}
