// csv.rs - CSV file loader for tabular datasets

use crate::data::dataset::Dataset;
use std::collections::HashMap;
use std::path::Path;

impl Dataset {
    /// Load a CSV file. The header line defines the column set; lines starting
    /// with '#' are treated as comments and skipped.
    pub fn from_csv(file_path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(file_path)
            .map_err(|e| format!("Failed to read CSV file '{}': {}", file_path.display(), e))?;

        let mut columns: Option<Vec<String>> = None;
        let mut dataset = Dataset::new();

        for (line_num, line) in content.lines().enumerate() {
            if line.trim().is_empty() || line.trim_start().starts_with('#') {
                continue;
            }

            let parts: Vec<&str> = line.split(',').collect();

            match &columns {
                None => {
                    let header: Vec<String> = parts
                        .iter()
                        .map(|s| s.trim().trim_matches('"').to_string())
                        .collect();
                    dataset = Dataset::with_columns(header.clone());
                    columns = Some(header);
                }
                Some(header) => {
                    if parts.len() != header.len() {
                        return Err(format!(
                            "CSV line {} has {} columns, expected {}",
                            line_num + 1,
                            parts.len(),
                            header.len()
                        ));
                    }
                    let mut row = HashMap::new();
                    for (column, value) in header.iter().zip(parts) {
                        row.insert(column.clone(), value.trim().trim_matches('"').to_string());
                    }
                    dataset.push_row(row)?;
                }
            }
        }

        if columns.is_none() {
            return Err("Empty CSV file".to_string());
        }

        println!(
            "✅ CSV loaded: {} rows, {} columns",
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
            "seqframe_csv_{}_{}",
            std::process::id(),
            name
        ));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_from_csv() {
        let path = fixture("ok.csv", "id,group\nA,x\nB,y\n");
        let dataset = Dataset::from_csv(&path).unwrap();
        assert_eq!(dataset.n_rows(), 2);
        assert_eq!(dataset.columns, vec!["id", "group"]);
        assert_eq!(dataset.get(1, "group"), Some("y"));
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_from_csv_skips_comments() {
        let path = fixture("comments.csv", "# generated by a tool\nid,group\nA,x\n");
        let dataset = Dataset::from_csv(&path).unwrap();
        assert_eq!(dataset.n_rows(), 1);
        assert_eq!(dataset.get(0, "id"), Some("A"));
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_from_csv_arity_mismatch() {
        let path = fixture("bad.csv", "id,group\nA\n");
        let err = Dataset::from_csv(&path).unwrap_err();
        assert!(err.contains("expected 2"));
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_from_csv_missing_file() {
        let err = Dataset::from_csv(Path::new("/nonexistent/data.csv")).unwrap_err();
        assert!(err.contains("Failed to read CSV file"));
    }
}
