//! Typed values of a loaded CSV column

use serde::{Deserialize, Serialize};

/// Markers a dataframe reader treats as a missing value
const NA_VALUES: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND",
    "1.#QNAN", "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// One value of the comment column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    /// Free text
    Text(String),
    /// Numeric value (the whole column parsed as numbers)
    Number(f64),
    /// Boolean value (the whole column parsed as true/false)
    Boolean(bool),
    /// Empty or NA marker
    Missing,
}

impl Cell {
    /// Check whether a raw field is one of the NA markers
    pub fn is_na_marker(raw: &str) -> bool {
        NA_VALUES.contains(&raw)
    }

    /// Whether the cell holds a value at all
    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }

    /// Text content of a valid string cell.
    ///
    /// The empty string counts as absent; whitespace-only text is still a
    /// string.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(text) if !text.is_empty() => Some(text),
            _ => None,
        }
    }
}

impl From<&str> for Cell {
    fn from(raw: &str) -> Self {
        if Cell::is_na_marker(raw) {
            Cell::Missing
        } else {
            Cell::Text(raw.to_string())
        }
    }
}

impl From<Option<&str>> for Cell {
    fn from(raw: Option<&str>) -> Self {
        raw.map(Cell::from).unwrap_or(Cell::Missing)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        if value.is_nan() {
            Cell::Missing
        } else {
            Cell::Number(value)
        }
    }
}

/// Inferred type of a whole column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    Number,
    Boolean,
}

impl ColumnKind {
    /// Infer the column type from its non-missing raw fields.
    ///
    /// A column with no values at all is text.
    pub fn infer<S: AsRef<str>>(raw_values: &[S]) -> Self {
        let mut present = raw_values
            .iter()
            .map(AsRef::as_ref)
            .filter(|raw| !Cell::is_na_marker(raw))
            .peekable();

        if present.peek().is_none() {
            return ColumnKind::Text;
        }

        let (mut numeric, mut boolean) = (true, true);
        for raw in present {
            numeric &= parse_number(raw).is_some();
            boolean &= parse_bool(raw).is_some();
            if !numeric && !boolean {
                return ColumnKind::Text;
            }
        }

        if numeric {
            ColumnKind::Number
        } else {
            ColumnKind::Boolean
        }
    }

    /// Convert one raw field under this column type
    pub fn cell(&self, raw: &str) -> Cell {
        if Cell::is_na_marker(raw) {
            return Cell::Missing;
        }

        match self {
            ColumnKind::Text => Cell::Text(raw.to_string()),
            ColumnKind::Number => parse_number(raw).map(Cell::from).unwrap_or(Cell::Missing),
            ColumnKind::Boolean => parse_bool(raw).map(Cell::Boolean).unwrap_or(Cell::Missing),
        }
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok()
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim() {
        "True" | "TRUE" | "true" => Some(true),
        "False" | "FALSE" | "false" => Some(false),
        _ => None,
    }
}
