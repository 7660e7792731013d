// tsv.rs - TSV file loader for tabular datasets

use crate::data::dataset::Dataset;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

impl Dataset {
    /// Load a TSV file. The header line defines the column set; lines starting
    /// with '#' are treated as comments and skipped.
    pub fn from_tsv(file_path: &Path) -> Result<Self, String> {
        let file = File::open(file_path)
            .map_err(|e| format!("Failed to open TSV file '{}': {}", file_path.display(), e))?;

        let reader = BufReader::new(file);
        let mut header: Option<Vec<String>> = None;
        let mut dataset = Dataset::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line =
                line.map_err(|e| format!("Failed to read line {}: {}", line_num + 1, e))?;
            if line.trim().is_empty() || line.trim_start().starts_with('#') {
                continue;
            }

            let parts: Vec<&str> = line.split('\t').collect();

            match &header {
                None => {
                    let columns: Vec<String> = parts.iter().map(|s| s.to_string()).collect();
                    dataset = Dataset::with_columns(columns.clone());
                    header = Some(columns);
                }
                Some(columns) => {
                    if parts.len() != columns.len() {
                        return Err(format!(
                            "TSV line {} has {} fields, expected {}",
                            line_num + 1,
                            parts.len(),
                            columns.len()
                        ));
                    }
                    let mut row = HashMap::new();
                    for (column, value) in columns.iter().zip(parts) {
                        row.insert(column.clone(), value.to_string());
                    }
                    dataset.push_row(row)?;
                }
            }
        }

        if header.is_none() {
            return Err("Empty TSV file".to_string());
        }

        println!(
            "✅ TSV loaded: {} rows, {} columns",
            dataset.n_rows(),
            dataset.n_columns()
        );
        Ok(dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn fixture(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "seqframe_tsv_{}_{}",
            std::process::id(),
            name
        ));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_from_tsv() {
        let path = fixture("ok.tsv", "id\tgroup\nA\tx\nB\ty\n");
        let dataset = Dataset::from_tsv(&path).unwrap();
        assert_eq!(dataset.n_rows(), 2);
        assert_eq!(dataset.columns, vec!["id", "group"]);
        assert_eq!(dataset.get(0, "id"), Some("A"));
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_from_tsv_arity_mismatch() {
        let path = fixture("bad.tsv", "id\tgroup\nA\tx\textra\n");
        let err = Dataset::from_tsv(&path).unwrap_err();
        assert!(err.contains("expected 2"));
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_from_tsv_empty() {
        let path = fixture("empty.tsv", "");
        let err = Dataset::from_tsv(&path).unwrap_err();
        assert!(err.contains("Empty TSV file"));
        let _ = fs::remove_file(path);
    }
}
