//! Naive comma-separated importer.
//!
//! Layout is `title,prompt,category`. The first line is always dropped as a
//! header, whatever it contains. There is no quoting: a comma inside a field
//! shifts the remaining columns.

use std::fmt;
use tracing::debug;

use super::validate;
use crate::api::ValidationError;

/// Column layout shown to users when a file cannot be read.
pub const EXPECTED_COLUMNS: &str = "title,prompt,category";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvRecord {
    pub title: String,
    pub prompt: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    TooFewFields(usize),
    Invalid(ValidationError),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::TooFewFields(n) => write!(f, "expected 3 fields, found {}", n),
            SkipReason::Invalid(e) => write!(f, "{}", e),
        }
    }
}

/// A row that was not imported. `line` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    pub line: usize,
    pub reason: SkipReason,
}

#[derive(Debug, Default)]
pub struct ParsedCsv {
    pub records: Vec<CsvRecord>,
    pub skipped: Vec<SkippedRow>,
}

/// Outcome of applying an import to a store.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CsvReport {
    pub added: usize,
    pub skipped: Vec<SkippedRow>,
}

pub fn parse(raw: &str) -> ParsedCsv {
    let mut parsed = ParsedCsv::default();

    for (idx, line) in raw.split('\n').enumerate().skip(1) {
        if line.trim().is_empty() {
            continue;
        }
        let line_no = idx + 1;
        match parse_row(line) {
            Ok(record) => parsed.records.push(record),
            Err(reason) => {
                debug!(line = line_no, %reason, "skipping csv row");
                parsed.skipped.push(SkippedRow {
                    line: line_no,
                    reason,
                });
            }
        }
    }
    parsed
}

fn parse_row(line: &str) -> Result<CsvRecord, SkipReason> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() < 3 {
        return Err(SkipReason::TooFewFields(fields.len()));
    }
    if fields.len() > 3 {
        debug!(
            fields = fields.len(),
            "row has extra columns, an embedded comma may have split a field"
        );
    }

    let entry =
        validate::check(fields[2], fields[0], fields[1]).map_err(SkipReason::Invalid)?;
    Ok(CsvRecord {
        title: entry.title.to_string(),
        prompt: entry.prompt.to_string(),
        category: entry.category.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validate::Field;

    #[test]
    fn header_line_is_always_dropped() {
        let parsed = parse("A,B,C\nx,y,z");
        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.records[0].title, "x");

        let parsed = parse("only,a,header");
        assert!(parsed.records.is_empty());
        assert!(parsed.skipped.is_empty());
    }

    #[test]
    fn rows_with_fewer_than_three_fields_are_skipped() {
        let parsed = parse("title,prompt,category\nonlytwo,fields");
        assert!(parsed.records.is_empty());
        assert_eq!(
            parsed.skipped,
            vec![SkippedRow {
                line: 2,
                reason: SkipReason::TooFewFields(2)
            }]
        );
    }

    #[test]
    fn extra_columns_are_ignored() {
        let parsed = parse("h\nT, P ,Cat,extra,more");
        assert_eq!(
            parsed.records,
            vec![CsvRecord {
                title: "T".into(),
                prompt: "P".into(),
                category: "Cat".into()
            }]
        );
    }

    #[test]
    fn blank_lines_are_not_reported() {
        let parsed = parse("h\n\n   \nT,P,C\n");
        assert_eq!(parsed.records.len(), 1);
        assert!(parsed.skipped.is_empty());
    }

    #[test]
    fn crlf_line_endings_are_trimmed() {
        let parsed = parse("h1,h2,h3\r\nT,P,Cat\r\n");
        assert_eq!(parsed.records[0].category, "Cat");
    }

    #[test]
    fn empty_and_overlong_fields_are_skipped_individually() {
        let long_prompt = "x".repeat(5001);
        let raw = format!("h\n,,\nT1,{},Cat\nT2,P2,Cat", long_prompt);
        let parsed = parse(&raw);

        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.records[0].title, "T2");
        assert_eq!(
            parsed.skipped,
            vec![
                SkippedRow {
                    line: 2,
                    reason: SkipReason::Invalid(ValidationError::Missing(Field::Title))
                },
                SkippedRow {
                    line: 3,
                    reason: SkipReason::Invalid(ValidationError::TooLong {
                        field: Field::Prompt,
                        max: 5000
                    })
                },
            ]
        );
    }

    #[test]
    fn empty_input_yields_nothing() {
        let parsed = parse("");
        assert!(parsed.records.is_empty());
        assert!(parsed.skipped.is_empty());
    }
}
