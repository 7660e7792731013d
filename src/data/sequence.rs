// sequence.rs - Identifier-to-sequence table built from a FASTA file

use bio::io::fasta;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Mapping from FASTA record identifier to plain sequence string.
///
/// Built fresh for every join and discarded afterwards. Only the string form of
/// each sequence is kept; descriptions and alphabet information are dropped.
#[derive(Debug, Clone)]
pub struct SequenceTable {
    pub sequences: HashMap<String, String>,
    /// Number of records read from the file, including duplicates
    pub total_records: usize,
}

impl SequenceTable {
    /// Parse a FASTA file into an identifier-to-sequence mapping.
    ///
    /// The file handle is scoped to this call and released before returning.
    /// Duplicate identifiers are resolved last-wins: a later record silently
    /// overwrites an earlier one with the same identifier.
    pub fn from_fasta(fasta_path: &Path) -> Result<Self, String> {
        let file = File::open(fasta_path).map_err(|e| {
            format!(
                "Failed to open FASTA file '{}': {}",
                fasta_path.display(),
                e
            )
        })?;

        let reader = fasta::Reader::new(BufReader::new(file));

        let pb = ProgressBar::new_spinner();
        pb.set_style(ProgressStyle::with_template("{spinner:.cyan} {msg}").unwrap());

        let mut sequences = HashMap::new();
        let mut total_records = 0usize;

        for record_result in reader.records() {
            let record = record_result.map_err(|e| {
                format!(
                    "Invalid FASTA record in '{}': {}",
                    fasta_path.display(),
                    e
                )
            })?;

            let id = record.id().to_string();
            let sequence = String::from_utf8_lossy(record.seq()).into_owned();
            sequences.insert(id, sequence);

            total_records += 1;
            if total_records % 1000 == 0 {
                pb.set_message(format!("Read {} FASTA records", total_records));
                pb.tick();
            }
        }
        pb.finish_and_clear();

        let duplicates = total_records - sequences.len();
        println!(
            "🧬 FASTA loaded: {} records, {} unique identifiers ({} duplicates overwritten)",
            total_records,
            sequences.len(),
            duplicates
        );

        Ok(Self {
            sequences,
            total_records,
        })
    }

    /// Look up the sequence for an identifier
    pub fn get(&self, id: &str) -> Option<&str> {
        self.sequences.get(id).map(|s| s.as_str())
    }

    pub fn has(&self, id: &str) -> bool {
        self.sequences.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn fixture(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "seqframe_sequence_{}_{}",
            std::process::id(),
            name
        ));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_from_fasta_basic() {
        let path = fixture("basic.fasta", ">A desc\nACGT\n>B\nTT\nTT\n");
        let table = SequenceTable::from_fasta(&path).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("A"), Some("ACGT"));
        // Multi-line sequences are concatenated
        assert_eq!(table.get("B"), Some("TTTT"));
        assert_eq!(table.total_records, 2);
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_duplicate_identifier_last_wins() {
        let path = fixture("dup.fasta", ">A\nACGT\n>A\nTTTG\n");
        let table = SequenceTable::from_fasta(&path).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("A"), Some("TTTG"));
        assert_eq!(table.total_records, 2);
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_missing_file() {
        let err = SequenceTable::from_fasta(Path::new("/nonexistent/file.fasta")).unwrap_err();
        assert!(err.contains("Failed to open FASTA file"));
    }

    #[test]
    fn test_malformed_fasta() {
        let path = fixture("bad.fasta", "this is not fasta\nACGT\n");
        let result = SequenceTable::from_fasta(&path);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Invalid FASTA record"));
        let _ = fs::remove_file(path);
    }
}
