//! Loading the comment column from a CSV export

use std::fs::File;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, info};

use super::cell::{Cell, ColumnKind};
use crate::error::{Error, Result};

/// One column extracted from a CSV file
#[derive(Debug, Clone)]
pub struct CommentColumn {
    /// Column name
    pub name: String,
    /// Inferred column type
    pub kind: ColumnKind,
    /// One cell per data row, nulls included
    pub cells: Vec<Cell>,
}

impl CommentColumn {
    /// Number of data rows
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells left after dropping nulls.
    ///
    /// Fails when nothing is left.
    pub fn non_null(&self) -> Result<Vec<Cell>> {
        let cells: Vec<Cell> = self
            .cells
            .iter()
            .filter(|cell| !cell.is_missing())
            .cloned()
            .collect();

        if cells.is_empty() {
            return Err(Error::EmptyColumn(self.name.clone()));
        }

        Ok(cells)
    }
}

/// Loader for comment exports
#[derive(Debug, Clone)]
pub struct CommentLoader {
    column: String,
    delimiter: u8,
}

impl CommentLoader {
    /// Create a loader for the given column name
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            delimiter: b',',
        }
    }

    /// Set the field delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Name of the column this loader extracts
    pub fn column(&self) -> &str {
        &self.column
    }

    /// Load the configured column from a CSV file
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<CommentColumn> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::InputNotFound(path.to_path_buf()));
        }

        let file = File::open(path).map_err(|e| Error::InputUnreadable(e.to_string()))?;
        self.load_from_reader(file)
    }

    /// Load the configured column from any reader
    pub fn load_from_reader<R: std::io::Read>(&self, reader: R) -> Result<CommentColumn> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .from_reader(reader);

        let headers = reader
            .headers()
            .map_err(|e| Error::InputUnreadable(e.to_string()))?
            .clone();

        if headers.is_empty() || (headers.len() == 1 && headers[0].is_empty()) {
            return Err(Error::InputUnreadable(
                "No columns to parse from file".to_string(),
            ));
        }

        debug!(columns = ?headers.iter().collect::<Vec<_>>(), "Parsed CSV header");

        let index = headers
            .iter()
            .position(|name| name == self.column)
            .ok_or_else(|| Error::MissingColumn(self.column.clone()))?;

        let mut raw_values = Vec::new();
        for (row, result) in reader.records().enumerate() {
            let record = result.map_err(|e| {
                Error::InputUnreadable(format!("row {}: {}", row + 1, e))
            })?;
            raw_values.push(record.get(index).unwrap_or("").to_string());
        }

        let kind = ColumnKind::infer(&raw_values);
        let cells: Vec<Cell> = raw_values.iter().map(|raw| kind.cell(raw)).collect();

        info!(
            column = %self.column,
            rows = cells.len(),
            kind = ?kind,
            "Loaded comment column"
        );

        Ok(CommentColumn {
            name: self.column.clone(),
            kind,
            cells,
        })
    }
}

impl Default for CommentLoader {
    fn default() -> Self {
        Self::new("comments")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    fn load_str(content: &str) -> Result<CommentColumn> {
        CommentLoader::default().load_from_reader(content.as_bytes())
    }

    #[test]
    fn test_load_comments_column() {
        let column = load_str("id,comments\n1,Great service\n2,\n3,Slow delivery\n").unwrap();

        assert_eq!(column.len(), 3);
        assert_eq!(column.kind, ColumnKind::Text);
        assert_eq!(column.cells[0], Cell::Text("Great service".to_string()));
        assert!(column.cells[1].is_missing());
    }

    #[test]
    fn test_quoted_fields_with_commas() {
        let column = load_str("comments\n\"Fast, friendly, cheap\"\n").unwrap();
        assert_eq!(column.cells[0].as_text(), Some("Fast, friendly, cheap"));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let result = CommentLoader::default().load(dir.path().join("nope.csv"));
        assert!(matches!(result, Err(Error::InputNotFound(_))));
    }

    #[test]
    fn test_missing_column() {
        let result = load_str("id,feedback\n1,hello\n");
        assert!(matches!(result, Err(Error::MissingColumn(ref c)) if c == "comments"));
    }

    #[test]
    fn test_all_null_column_is_empty() {
        let column = load_str("id,comments\n1,\n2,NaN\n").unwrap();
        assert!(matches!(column.non_null(), Err(Error::EmptyColumn(_))));
    }

    #[test]
    fn test_empty_file_is_unreadable() {
        assert!(matches!(load_str(""), Err(Error::InputUnreadable(_))));
    }

    #[test]
    fn test_ragged_rows_are_unreadable() {
        let result = load_str("id,comments\n1,fine\n2,too,many,fields\n");
        assert!(matches!(result, Err(Error::InputUnreadable(_))));
    }

    #[test]
    fn test_numeric_column_has_no_text() {
        let column = load_str("comments\n1\n2\n").unwrap();
        assert_eq!(column.kind, ColumnKind::Number);
        assert!(column.cells.iter().all(|c| c.as_text().is_none()));
    }

    #[test]
    fn test_load_from_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "comments;score").unwrap();
        writeln!(file, "works well;5").unwrap();

        let column = CommentLoader::new("comments")
            .with_delimiter(b';')
            .load(file.path())
            .unwrap();
        assert_eq!(column.cells, vec![Cell::Text("works well".to_string())]);
    }
}
