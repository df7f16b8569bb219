use crate::domain::DefaultAssumed;
use tracing::debug;

/// Why a single field could not be read.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("value is missing")]
    Missing,
    #[error("'{raw}' is not a valid {expected}")]
    Malformed { raw: String, expected: &'static str },
    #[error("code {code} has no mapping")]
    UnknownCode { code: i64 },
}

pub type FieldResult<T> = Result<T, FieldError>;

pub trait FieldResultExt<T> {
    /// Falls back to `default` on failure and records `field` as assumed.
    fn or_assumed(self, field: &str, default: T, assumed: &mut DefaultAssumed) -> T;
}

impl<T> FieldResultExt<T> for FieldResult<T> {
    fn or_assumed(self, field: &str, default: T, assumed: &mut DefaultAssumed) -> T {
        match self {
            Ok(value) => value,
            Err(error) => {
                debug!(field, %error, "using documented default");
                assumed.assumed(field);
                default
            }
        }
    }
}

pub fn parse_int(raw: Option<&str>) -> FieldResult<i64> {
    let raw = raw.map(str::trim).ok_or(FieldError::Missing)?;
    raw.parse().map_err(|_| FieldError::Malformed {
        raw: raw.to_string(),
        expected: "integer",
    })
}

/// Counts such as segment numbers; negative values are malformed.
pub fn parse_count(raw: Option<&str>) -> FieldResult<u32> {
    let value = parse_int(raw)?;
    u32::try_from(value).map_err(|_| FieldError::Malformed {
        raw: value.to_string(),
        expected: "count",
    })
}

pub fn parse_float(raw: Option<&str>) -> FieldResult<f64> {
    let raw = raw.map(str::trim).ok_or(FieldError::Missing)?;
    raw.parse().map_err(|_| FieldError::Malformed {
        raw: raw.to_string(),
        expected: "number",
    })
}

/// Accepts Fortran logicals (`.true.`, `.false.`, `T`, `F`) in any case.
pub fn parse_fortran_bool(raw: Option<&str>) -> FieldResult<bool> {
    let raw = raw.map(str::trim).ok_or(FieldError::Missing)?;
    let lowered = raw.to_ascii_lowercase();
    if lowered.contains("true") || lowered == "t" {
        Ok(true)
    } else if lowered.contains("false") || lowered == "f" {
        Ok(false)
    } else {
        Err(FieldError::Malformed {
            raw: raw.to_string(),
            expected: "logical",
        })
    }
}

pub fn fortran_bool(value: bool) -> &'static str {
    if value { ".true." } else { ".false." }
}

/// Splits a comma separated value list, trimming blanks and double quotes.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|item| item.trim().trim_matches('"').trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

pub fn is_numeric_token(token: &str) -> bool {
    token.parse::<f64>().is_ok()
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct KeyValueEntry {
    key: String,
    value: String,
    consumed: bool,
}

/// `key = value` lines of a namelist style file.
///
/// Reading a key marks it consumed; what is left afterwards is the set of directives the
/// decoder did not model.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyValueTable {
    entries: Vec<KeyValueEntry>,
}

impl KeyValueTable {
    /// Lines without `=` are ignored; the first occurrence of a repeated key wins.
    pub fn parse<'a>(lines: impl IntoIterator<Item = &'a str>) -> Self {
        let mut table = Self::default();
        for line in lines {
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            if key.is_empty() || table.entries.iter().any(|entry| entry.key == key) {
                continue;
            }
            table.entries.push(KeyValueEntry {
                key: key.to_string(),
                value: value.trim().to_string(),
                consumed: false,
            });
        }
        table
    }

    pub fn take(&mut self, key: &str) -> Option<String> {
        self.entries
            .iter_mut()
            .find(|entry| entry.key == key && !entry.consumed)
            .map(|entry| {
                entry.consumed = true;
                entry.value.clone()
            })
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|entry| entry.key == key)
    }

    pub fn discard_where(&mut self, predicate: impl Fn(&str) -> bool) {
        for entry in &mut self.entries {
            if predicate(&entry.key) {
                entry.consumed = true;
            }
        }
    }

    /// Unconsumed entries as `key = value` lines, in file order.
    pub fn remaining_lines(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|entry| !entry.consumed)
            .map(|entry| format!("{} = {}", entry.key, entry.value))
            .collect()
    }
}

/// A non-blank line split into whitespace separated tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenLine {
    pub source_line: usize,
    pub raw: String,
    pub tokens: Vec<String>,
}

impl TokenLine {
    pub fn keyword(&self) -> &str {
        self.tokens.first().map(String::as_str).unwrap_or_default()
    }

    pub fn arguments(&self) -> &[String] {
        self.tokens.get(1..).unwrap_or_default()
    }
}

pub fn tokenize_lines(source: &str) -> Vec<TokenLine> {
    source
        .lines()
        .enumerate()
        .filter_map(|(index, line)| tokenize_line(index + 1, line))
        .collect()
}

fn tokenize_line(source_line: usize, line: &str) -> Option<TokenLine> {
    let normalized = line.trim();
    if normalized.is_empty() {
        return None;
    }

    Some(TokenLine {
        source_line,
        raw: normalized.to_owned(),
        tokens: normalized
            .split_whitespace()
            .map(ToOwned::to_owned)
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::{
        FieldError, FieldResultExt, KeyValueTable, parse_count, parse_float, parse_fortran_bool,
        parse_int, split_list, tokenize_lines,
    };
    use crate::domain::DefaultAssumed;

    #[test]
    fn scalar_parsers_report_missing_and_malformed_values() {
        assert_eq!(parse_int(Some(" 42 ")), Ok(42));
        assert_eq!(parse_int(None), Err(FieldError::Missing));
        assert!(matches!(
            parse_int(Some("4.2")),
            Err(FieldError::Malformed { expected: "integer", .. })
        ));
        assert_eq!(parse_float(Some("1e-4")), Ok(1e-4));
        assert_eq!(parse_float(Some("2000")), Ok(2000.0));
        assert_eq!(parse_count(Some("200")), Ok(200));
        assert!(matches!(
            parse_count(Some("-1")),
            Err(FieldError::Malformed { expected: "count", .. })
        ));
    }

    #[test]
    fn fortran_logicals_are_recognized() {
        assert_eq!(parse_fortran_bool(Some(".true.")), Ok(true));
        assert_eq!(parse_fortran_bool(Some(".FALSE.")), Ok(false));
        assert_eq!(parse_fortran_bool(Some("T")), Ok(true));
        assert!(parse_fortran_bool(Some("yes")).is_err());
    }

    #[test]
    fn failures_fall_back_to_default_and_record_the_field() {
        let mut assumed = DefaultAssumed::new();
        let fluence = parse_float(None).or_assumed("fluence", 1.0, &mut assumed);
        let histories = parse_int(Some("10")).or_assumed("histories", 1000, &mut assumed);

        assert_eq!(fluence, 1.0);
        assert_eq!(histories, 10);
        assert_eq!(assumed.fields(), ["fluence"]);
    }

    #[test]
    fn list_values_drop_quotes_and_blanks() {
        assert_eq!(split_list("\"H\", \"Ar\""), vec!["H", "Ar"]);
        assert_eq!(split_list("0.5, 0.5,"), vec!["0.5", "0.5"]);
        assert!(split_list("").is_empty());
    }

    #[test]
    fn key_value_table_keeps_first_occurrence_and_tracks_consumption() {
        let mut table = KeyValueTable::parse([
            "&TRI_INP",
            "    nh = 1000",
            "    flc = 1.0",
            "    nh = 5",
            "    custom_key = 3",
            "/",
        ]);

        assert_eq!(table.take("nh").as_deref(), Some("1000"));
        assert_eq!(table.take("nh"), None);
        assert_eq!(table.take("flc").as_deref(), Some("1.0"));
        assert_eq!(table.remaining_lines(), vec!["custom_key = 3"]);

        table.discard_where(|key| key.starts_with("custom"));
        assert!(table.remaining_lines().is_empty());
        assert!(table.contains("custom_key"));
    }

    #[test]
    fn tokenizer_skips_blank_lines_and_keeps_line_numbers() {
        let lines = tokenize_lines("title line\n\n  cdat 0 1.0 1\n");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].source_line, 3);
        assert_eq!(lines[1].keyword(), "cdat");
        assert_eq!(lines[1].arguments(), ["0", "1.0", "1"]);
    }
}
