use std::io::{BufRead, Write};

use anyhow::{anyhow, Context, Result};

/// Print `prompt` and read one line of input. Returns `None` once the input is
/// exhausted so the menu can shut down cleanly.
pub(crate) fn read_line(
    input: &mut impl BufRead,
    out: &mut impl Write,
    prompt: &str,
) -> Result<Option<String>> {
    write!(out, "{prompt}")?;
    out.flush().context("failed to flush prompt")?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("failed to read input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Validate a credit count typed by the operator.
pub(crate) fn parse_credits(raw: &str) -> Result<u32> {
    match raw.trim().parse::<u32>() {
        Ok(credits) if credits > 0 => Ok(credits),
        _ => Err(anyhow!("Credits must be a positive integer.")),
    }
}

/// Validate one end of a GPA range.
pub(crate) fn parse_gpa_bound(raw: &str) -> Result<f64> {
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| anyhow!("Invalid GPA range. Please enter numbers."))?;
    if value.is_nan() {
        return Err(anyhow!("Invalid GPA range. Please enter numbers."));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn read_line_strips_newline_and_echoes_prompt() {
        let mut input = Cursor::new("Math101\r\nnext\n");
        let mut out = Vec::new();
        let line = read_line(&mut input, &mut out, "Course: ").unwrap();
        assert_eq!(line.as_deref(), Some("Math101"));
        assert_eq!(String::from_utf8(out).unwrap(), "Course: ");
    }

    #[test]
    fn read_line_reports_end_of_input() {
        let mut input = Cursor::new("");
        let mut out = Vec::new();
        assert_eq!(read_line(&mut input, &mut out, "> ").unwrap(), None);
    }

    #[test]
    fn credits_must_be_positive_integers() {
        assert_eq!(parse_credits(" 3 ").unwrap(), 3);
        for raw in ["", "three", "2.5", "-1", "0"] {
            let err = parse_credits(raw).unwrap_err();
            assert_eq!(err.to_string(), "Credits must be a positive integer.");
        }
    }

    #[test]
    fn gpa_bounds_must_be_numbers() {
        assert_eq!(parse_gpa_bound("2.5").unwrap(), 2.5);
        assert_eq!(parse_gpa_bound("4").unwrap(), 4.0);
        assert!(parse_gpa_bound("high").is_err());
        assert!(parse_gpa_bound("NaN").is_err());
    }
}
