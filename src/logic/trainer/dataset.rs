//! Dataset Loading - CSV Reader & Error Taxonomy
//!
//! Minimal quote-aware CSV reader: header row + data rows, column lookup by
//! name. Dataset failures are the only errors allowed to abort a training
//! invocation; they carry the offending path, column, or line.

use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// ERROR HANDLING
// ============================================================================

#[derive(Debug, Clone)]
pub enum DatasetError {
    /// Dataset file does not exist
    NotFound(PathBuf),
    /// Dataset file could not be read
    Io(String),
    /// A required column is absent from the header
    MissingColumn(String),
    /// No usable data rows
    Empty,
    /// A cell failed to parse
    BadValue { line: usize, message: String },
}

impl std::fmt::Display for DatasetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => write!(f, "Dataset not found at {}", path.display()),
            Self::Io(e) => write!(f, "Dataset read error: {}", e),
            Self::MissingColumn(name) => {
                write!(f, "Dataset must contain a '{}' column", name)
            }
            Self::Empty => write!(f, "Dataset has no usable rows"),
            Self::BadValue { line, message } => {
                write!(f, "Dataset line {}: {}", line, message)
            }
        }
    }
}

impl std::error::Error for DatasetError {}

// ============================================================================
// DATASET
// ============================================================================

/// Parsed tabular dataset: header + rows, all cells as strings
#[derive(Debug, Clone)]
pub struct Dataset {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Dataset {
    /// Load and parse a CSV file
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        if !path.exists() {
            return Err(DatasetError::NotFound(path.to_path_buf()));
        }
        let raw = fs::read_to_string(path).map_err(|e| DatasetError::Io(e.to_string()))?;
        Self::parse(&raw)
    }

    /// Parse CSV text. Blank lines are skipped; every data row must have as
    /// many cells as the header.
    pub fn parse(raw: &str) -> Result<Self, DatasetError> {
        let mut lines = raw.lines().enumerate().filter(|(_, l)| !l.trim().is_empty());

        let header = match lines.next() {
            Some((_, line)) => split_csv_line(line),
            None => return Err(DatasetError::Empty),
        };

        let mut rows = Vec::new();
        for (index, line) in lines {
            let cells = split_csv_line(line);
            if cells.len() != header.len() {
                return Err(DatasetError::BadValue {
                    line: index + 1,
                    message: format!("expected {} cells, got {}", header.len(), cells.len()),
                });
            }
            rows.push(cells);
        }

        if rows.is_empty() {
            return Err(DatasetError::Empty);
        }

        Ok(Self { header, rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column index by name
    pub fn column(&self, name: &str) -> Option<usize> {
        self.header.iter().position(|h| h == name)
    }

    /// Column index by name, MissingColumn otherwise
    pub fn require_column(&self, name: &str) -> Result<usize, DatasetError> {
        self.column(name)
            .ok_or_else(|| DatasetError::MissingColumn(name.to_string()))
    }

    /// Parse one cell as f32, with the 1-based line number on failure
    pub fn numeric(&self, row: usize, col: usize) -> Result<f32, DatasetError> {
        let cell = &self.rows[row][col];
        cell.trim().parse::<f32>().map_err(|_| DatasetError::BadValue {
            line: row + 2, // +1 for header, +1 for 1-based
            message: format!("'{}' is not a number", cell),
        })
    }
}

/// Split one CSV line, honoring double-quoted cells ("" escapes a quote)
fn split_csv_line(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => {
                cells.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }
    cells.push(current);
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let ds = Dataset::parse("url,label\nhttp://a.com,0\nhttp://b.com,1\n").unwrap();
        assert_eq!(ds.header, vec!["url", "label"]);
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.rows[1][0], "http://b.com");
    }

    #[test]
    fn test_parse_quoted_cell_with_comma() {
        let ds = Dataset::parse("url,label\n\"http://a.com/?q=1,2\",1\n").unwrap();
        assert_eq!(ds.rows[0][0], "http://a.com/?q=1,2");
    }

    #[test]
    fn test_parse_escaped_quote() {
        let ds = Dataset::parse("a,b\n\"he said \"\"hi\"\"\",2\n").unwrap();
        assert_eq!(ds.rows[0][0], "he said \"hi\"");
    }

    #[test]
    fn test_header_only_is_empty() {
        assert!(matches!(
            Dataset::parse("url,label\n"),
            Err(DatasetError::Empty)
        ));
    }

    #[test]
    fn test_ragged_row_is_bad_value() {
        let err = Dataset::parse("a,b\n1,2\n3\n").unwrap_err();
        assert!(matches!(err, DatasetError::BadValue { .. }));
    }

    #[test]
    fn test_require_column() {
        let ds = Dataset::parse("url,label\nx,1\n").unwrap();
        assert_eq!(ds.require_column("label").unwrap(), 1);
        let err = ds.require_column("Is_Phishing").unwrap_err();
        assert!(err.to_string().contains("Is_Phishing"));
    }

    #[test]
    fn test_numeric_parse_error_carries_line() {
        let ds = Dataset::parse("a\n1.5\nnope\n").unwrap();
        assert_eq!(ds.numeric(0, 0).unwrap(), 1.5);
        let err = ds.numeric(1, 0).unwrap_err();
        assert!(err.to_string().contains("line 3"));
    }

    #[test]
    fn test_missing_file() {
        let err = Dataset::load(Path::new("/nonexistent/data.csv")).unwrap_err();
        assert!(matches!(err, DatasetError::NotFound(_)));
    }
}
