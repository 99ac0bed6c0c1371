//! Letter grade conversion.

/// Map a letter grade to its point value, ignoring case. Anything outside
/// A/B/C/D/F is worth zero rather than an error, so stray input recorded in a
/// registration still lets the GPA be computed.
pub fn grade_points(grade: &str) -> f64 {
    match grade.to_ascii_uppercase().as_str() {
        "A" => 4.0,
        "B" => 3.0,
        "C" => 2.0,
        "D" => 1.0,
        _ => 0.0,
    }
}
