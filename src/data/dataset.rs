// dataset.rs - Ordered tabular dataset

use regex::Regex;
use std::collections::HashMap;

/// Ordered collection of rows, each row a mapping from column name to value
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub columns: Vec<String>,
    pub rows: Vec<HashMap<String, String>>,
}

impl Dataset {
    /// Create a new empty dataset
    pub fn new() -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Create an empty dataset with a fixed column set
    pub fn with_columns(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Get a single cell value
    pub fn get(&self, row: usize, column: &str) -> Option<&str> {
        self.rows.get(row)?.get(column).map(|s| s.as_str())
    }

    /// Append a row. Every declared column must be present and no extra keys are allowed.
    pub fn push_row(&mut self, row: HashMap<String, String>) -> Result<(), String> {
        for column in &self.columns {
            if !row.contains_key(column) {
                return Err(format!(
                    "Row {} is missing column '{}'",
                    self.rows.len() + 1,
                    column
                ));
            }
        }
        for key in row.keys() {
            if !self.has_column(key) {
                return Err(format!("Unknown column '{}' in row", key));
            }
        }
        self.rows.push(row);
        Ok(())
    }

    /// Collect the values of one column in row order
    pub fn column_values(&self, column: &str) -> Result<Vec<&str>, String> {
        if !self.has_column(column) {
            return Err(format!("Dataset has no column '{}'", column));
        }
        let mut values = Vec::with_capacity(self.rows.len());
        for (i, row) in self.rows.iter().enumerate() {
            let value = row
                .get(column)
                .ok_or_else(|| format!("Column '{}' missing in row {}", column, i + 1))?;
            values.push(value.as_str());
        }
        Ok(values)
    }

    /// Commit a full column in one step, creating or overwriting it.
    /// Values are assigned in row order and must cover every row.
    pub fn set_column(&mut self, name: &str, values: Vec<String>) -> Result<(), String> {
        if values.len() != self.rows.len() {
            return Err(format!(
                "Column '{}' has {} values, expected {} (one per row)",
                name,
                values.len(),
                self.rows.len()
            ));
        }
        if !self.has_column(name) {
            self.columns.push(name.to_string());
        }
        for (row, value) in self.rows.iter_mut().zip(values) {
            row.insert(name.to_string(), value);
        }
        Ok(())
    }

    /// Retain only rows whose value in `column` passes the regex filters
    pub fn filter_rows(
        &mut self,
        column: &str,
        include: Option<&Regex>,
        exclude: Option<&Regex>,
    ) -> Result<(), String> {
        if !self.has_column(column) {
            return Err(format!("Dataset has no column '{}'", column));
        }
        if include.is_none() && exclude.is_none() {
            return Ok(());
        }

        let initial_rows = self.rows.len();
        self.rows.retain(|row| {
            let value = match row.get(column) {
                Some(v) => v,
                None => return false,
            };

            if let Some(regex) = include {
                if !regex.is_match(value) {
                    return false;
                }
            }
            if let Some(regex) = exclude {
                if regex.is_match(value) {
                    return false;
                }
            }
            true
        });

        let filtered_rows = self.rows.len();
        if initial_rows != filtered_rows {
            println!(
                "Row filters: kept {} rows (removed {})",
                filtered_rows,
                initial_rows - filtered_rows
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_dataset() -> Dataset {
        let mut dataset = Dataset::with_columns(vec!["id".to_string(), "group".to_string()]);
        for (id, group) in [("A", "x"), ("B", "y"), ("C", "x")] {
            let mut row = HashMap::new();
            row.insert("id".to_string(), id.to_string());
            row.insert("group".to_string(), group.to_string());
            dataset.push_row(row).unwrap();
        }
        dataset
    }

    #[test]
    fn test_push_row_rejects_unknown_column() {
        let mut dataset = Dataset::with_columns(vec!["id".to_string()]);
        let mut row = HashMap::new();
        row.insert("id".to_string(), "A".to_string());
        row.insert("bogus".to_string(), "1".to_string());
        assert!(dataset.push_row(row).is_err());
    }

    #[test]
    fn test_push_row_rejects_missing_column() {
        let mut dataset = Dataset::with_columns(vec!["id".to_string(), "group".to_string()]);
        let mut row = HashMap::new();
        row.insert("id".to_string(), "A".to_string());
        let err = dataset.push_row(row).unwrap_err();
        assert!(err.contains("missing column 'group'"));
    }

    #[test]
    fn test_column_values_in_row_order() {
        let dataset = sample_dataset();
        assert_eq!(dataset.column_values("id").unwrap(), vec!["A", "B", "C"]);
        assert!(dataset.column_values("nope").is_err());
    }

    #[test]
    fn test_set_column_creates_and_overwrites() {
        let mut dataset = sample_dataset();
        dataset
            .set_column("seq", vec!["AC".into(), "GT".into(), "AA".into()])
            .unwrap();
        assert_eq!(dataset.n_columns(), 3);
        assert_eq!(dataset.get(1, "seq"), Some("GT"));

        // Overwriting keeps the column set unchanged
        dataset
            .set_column("seq", vec!["TT".into(), "TT".into(), "TT".into()])
            .unwrap();
        assert_eq!(dataset.n_columns(), 3);
        assert_eq!(dataset.get(0, "seq"), Some("TT"));
    }

    #[test]
    fn test_set_column_arity_mismatch() {
        let mut dataset = sample_dataset();
        let err = dataset
            .set_column("seq", vec!["AC".into()])
            .unwrap_err();
        assert!(err.contains("expected 3"));
    }

    #[test]
    fn test_filter_rows() {
        let mut dataset = sample_dataset();
        let include = Regex::new("^[AB]$").unwrap();
        dataset.filter_rows("id", Some(&include), None).unwrap();
        assert_eq!(dataset.column_values("id").unwrap(), vec!["A", "B"]);

        let exclude = Regex::new("^B$").unwrap();
        dataset.filter_rows("id", None, Some(&exclude)).unwrap();
        assert_eq!(dataset.column_values("id").unwrap(), vec!["A"]);
    }
}
