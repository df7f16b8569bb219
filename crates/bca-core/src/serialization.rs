use crate::domain::{BcaError, BcaResult};
use std::fs;
use std::path::Path;

/// Shortest round-trip rendering of a float, always carrying a fractional part
/// (`500.0`, `0.1`, `1e-5`). Engine files written this way read back bit-identical.
pub fn float_token(value: f64) -> String {
    format!("{value:?}")
}

/// Fortran style scientific notation with a signed two digit exponent (`5.00000E-01`).
pub fn format_scientific(value: f64, precision: usize) -> String {
    let rendered = format!("{value:.precision$E}");
    let Some((mantissa, exponent)) = rendered.split_once('E') else {
        return rendered;
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    format!("{mantissa}E{sign}{digits:0>2}")
}

pub fn format_scientific_width(value: f64, width: usize, precision: usize) -> String {
    format!("{:>width$}", format_scientific(value, precision))
}

/// Strips surrounding whitespace and guarantees canonical `\n` endings with exactly one
/// trailing newline.
pub fn normalize_text_artifact(content: &str) -> String {
    let unified = content.replace("\r\n", "\n").replace('\r', "\n");
    let trimmed = unified.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    let mut normalized = trimmed.to_string();
    normalized.push('\n');
    normalized
}

pub fn write_text_artifact(path: &Path, content: &str) -> BcaResult<()> {
    fs::write(path, normalize_text_artifact(content)).map_err(|source| {
        BcaError::io_system(
            "IO.ENGINE_OUTPUT_WRITE",
            format!("failed to write '{}': {}", path.display(), source),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::{
        float_token, format_scientific, format_scientific_width, normalize_text_artifact,
        write_text_artifact,
    };
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn float_tokens_keep_a_fractional_part() {
        assert_eq!(float_token(500.0), "500.0");
        assert_eq!(float_token(0.1), "0.1");
        assert_eq!(float_token(-1.0), "-1.0");
    }

    #[test]
    fn scientific_formatting_uses_two_digit_signed_exponent() {
        assert_eq!(format_scientific(0.5, 5), "5.00000E-01");
        assert_eq!(format_scientific(250.0, 5), "2.50000E+02");
        assert_eq!(format_scientific(0.0, 5), "0.00000E+00");
        assert_eq!(format_scientific_width(0.5, 13, 5), "  5.00000E-01");
    }

    #[test]
    fn normalize_text_artifact_uses_canonical_line_endings() {
        let normalized = normalize_text_artifact("\nalpha\r\nbeta\rgamma\n\n\n");
        assert_eq!(normalized, "alpha\nbeta\ngamma\n");
    }

    #[test]
    fn repeated_text_writes_produce_identical_bytes() {
        let temp = TempDir::new().expect("tempdir should be created");
        let path = temp.path().join("tri.inp");
        let input = "line 1\r\nline 2\rline 3";

        write_text_artifact(&path, input).expect("first write should succeed");
        let first = fs::read(&path).expect("artifact should be readable");

        write_text_artifact(&path, input).expect("second write should succeed");
        let second = fs::read(&path).expect("artifact should be readable");

        assert_eq!(first, second);
        assert_eq!(second, b"line 1\nline 2\nline 3\n");
    }

    #[test]
    fn writing_into_missing_directory_is_an_io_error() {
        let temp = TempDir::new().expect("tempdir should be created");
        let path = temp.path().join("missing").join("tri.inp");

        let error = write_text_artifact(&path, "x").expect_err("write should fail");
        assert_eq!(error.placeholder(), "IO.ENGINE_OUTPUT_WRITE");
    }
}
