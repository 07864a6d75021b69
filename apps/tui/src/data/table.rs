use crate::data::DataError;
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// A column-addressable table of string cells read from a CSV file.
///
/// Columns are only interpreted when a caller asks for them, so a missing or
/// malformed column fails the view that needs it rather than the whole load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataTable {
    name: String,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl DataTable {
    pub fn new(name: impl Into<String>, headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self {
            name: name.into(),
            headers,
            rows,
        }
    }

    /// Reads a CSV file with a header row.
    pub fn from_path(path: &Path) -> Result<Self, DataError> {
        let file = File::open(path).map_err(|source| DataError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("table")
            .to_string();

        Self::from_reader(name, file).map_err(|source| DataError::Csv {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_reader<R: Read>(name: impl Into<String>, reader: R) -> Result<Self, csv::Error> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(reader);

        let headers = reader
            .headers()?
            .iter()
            .enumerate()
            .map(|(index, header)| {
                if index == 0 {
                    header.trim_start_matches('\u{feff}').to_string()
                } else {
                    header.to_string()
                }
            })
            .collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            rows.push(record?.iter().map(str::to_string).collect());
        }

        Ok(Self::new(name, headers, rows))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.headers.iter().any(|header| header == column)
    }

    pub fn column_index(&self, column: &str) -> Result<usize, DataError> {
        self.headers
            .iter()
            .position(|header| header == column)
            .ok_or_else(|| DataError::MissingColumn {
                table: self.name.clone(),
                column: column.to_string(),
            })
    }

    /// Cell text; short rows read as empty.
    pub fn cell(&self, row: usize, index: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(index))
            .map_or("", String::as_str)
    }

    pub fn column(&self, column: &str) -> Result<Vec<&str>, DataError> {
        let index = self.column_index(column)?;
        Ok((0..self.rows.len())
            .map(|row| self.cell(row, index))
            .collect())
    }

    pub fn numeric_column(&self, column: &str) -> Result<Vec<f64>, DataError> {
        let index = self.column_index(column)?;
        (0..self.rows.len())
            .map(|row| self.parse_number(row, index, column))
            .collect()
    }

    /// Like `numeric_column`, but blank and NA-style cells (`nan`, `NA`,
    /// `null`, ...) read as `None` instead of failing.
    pub fn optional_numeric_column(&self, column: &str) -> Result<Vec<Option<f64>>, DataError> {
        let index = self.column_index(column)?;
        (0..self.rows.len())
            .map(|row| {
                if is_missing(self.cell(row, index)) {
                    Ok(None)
                } else {
                    self.parse_number(row, index, column).map(Some)
                }
            })
            .collect()
    }

    pub fn text_cell(&self, row: usize, column: &str) -> Result<&str, DataError> {
        let index = self.column_index(column)?;
        Ok(self.cell(row, index))
    }

    pub fn numeric_cell(&self, row: usize, column: &str) -> Result<f64, DataError> {
        let index = self.column_index(column)?;
        self.parse_number(row, index, column)
    }

    fn parse_number(&self, row: usize, index: usize, column: &str) -> Result<f64, DataError> {
        let raw = self.cell(row, index);
        raw.parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| DataError::InvalidNumber {
                table: self.name.clone(),
                column: column.to_string(),
                row: row + 1,
                value: raw.to_string(),
            })
    }
}

const MISSING_MARKERS: [&str; 6] = ["nan", "na", "n/a", "null", "none", "<na>"];

fn is_missing(raw: &str) -> bool {
    let raw = raw.trim();
    raw.is_empty() || MISSING_MARKERS.iter().any(|marker| raw.eq_ignore_ascii_case(marker))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = "\u{feff}Fan_ID, Fan_Score ,Nivel_Fan\nF1, 71.5 ,Premium\nF2,40,Bajo\n";

    #[test]
    fn reads_headers_and_trims_cells() -> Result<(), Box<dyn std::error::Error>> {
        let table = DataTable::from_reader("fans", SAMPLE.as_bytes())?;

        assert_eq!(table.headers(), ["Fan_ID", "Fan_Score", "Nivel_Fan"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.column("Fan_ID")?, vec!["F1", "F2"]);
        assert_eq!(table.numeric_column("Fan_Score")?, vec![71.5, 40.0]);
        assert_eq!(table.text_cell(1, "Nivel_Fan")?, "Bajo");

        Ok(())
    }

    #[test]
    fn missing_column_names_table_and_column() -> Result<(), Box<dyn std::error::Error>> {
        let table = DataTable::from_reader("fans", SAMPLE.as_bytes())?;

        let err = table.numeric_column("Cluster").unwrap_err();
        assert!(matches!(
            err,
            DataError::MissingColumn { ref table, ref column } if table == "fans" && column == "Cluster"
        ));

        Ok(())
    }

    #[test]
    fn blank_and_nan_cells_read_as_missing() -> Result<(), Box<dyn std::error::Error>> {
        let table = DataTable::from_reader(
            "fans",
            "Fan_ID,Fan_Score\nA,1\nB,\nC,NaN\nD, n/a \nE,2.5\n".as_bytes(),
        )?;

        assert_eq!(
            table.optional_numeric_column("Fan_Score")?,
            vec![Some(1.0), None, None, None, Some(2.5)]
        );
        assert!(matches!(
            table.numeric_column("Fan_Score"),
            Err(DataError::InvalidNumber { row: 2, .. })
        ));

        let bad = DataTable::from_reader("fans", "Fan_Score\n1\nabc\n".as_bytes())?;
        assert!(matches!(
            bad.optional_numeric_column("Fan_Score"),
            Err(DataError::InvalidNumber { row: 2, .. })
        ));
        Ok(())
    }

    #[test]
    fn non_numeric_cell_reports_row() -> Result<(), Box<dyn std::error::Error>> {
        let table = DataTable::from_reader("fans", "Fan_Score\n1\nabc\n".as_bytes())?;

        match table.numeric_column("Fan_Score") {
            Err(DataError::InvalidNumber { row, value, .. }) => {
                assert_eq!(row, 2);
                assert_eq!(value, "abc");
            }
            other => panic!("expected InvalidNumber, got {other:?}"),
        }

        Ok(())
    }

    #[test]
    fn ragged_rows_are_malformed() {
        let result = DataTable::from_reader("fans", "a,b\n1,2\n3\n".as_bytes());
        assert!(result.is_err());
    }

    #[test]
    fn from_path_reads_a_file() -> Result<(), Box<dyn std::error::Error>> {
        let mut file = tempfile::NamedTempFile::new()?;
        write!(file, "Cluster,Fan_Score\n0,55.2\n1,61.0\n")?;

        let table = DataTable::from_path(file.path())?;
        assert_eq!(table.numeric_column("Fan_Score")?, vec![55.2, 61.0]);

        Ok(())
    }

    #[test]
    fn from_path_missing_file_is_io_error() {
        let err = DataTable::from_path(Path::new("does/not/exist.csv")).unwrap_err();
        assert!(matches!(err, DataError::Io { .. }));
    }
}
