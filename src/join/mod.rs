// mod.rs - FASTA-to-dataset join operations

use crate::data::{Dataset, SequenceTable};
use std::path::Path;

/// Join FASTA sequences into a dataset as a new column, in place.
///
/// Parses `fasta_path` into a fresh identifier-to-sequence table, resolves the
/// sequence for every row's `id_column` value, and commits the full column into
/// `new_column` (creating or overwriting it). The new column is resolved and
/// validated before the dataset is touched, so a lookup failure leaves the
/// dataset unmodified.
///
/// Re-joining with the same arguments overwrites the column with identical
/// values when the file is unchanged.
pub fn join_fasta(
    dataset: &mut Dataset,
    fasta_path: &Path,
    id_column: &str,
    new_column: &str,
) -> Result<(), String> {
    let table = SequenceTable::from_fasta(fasta_path)?;

    let sequences = {
        let ids = dataset.column_values(id_column)?;
        let mut resolved = Vec::with_capacity(ids.len());
        for id in ids {
            match table.get(id) {
                Some(sequence) => resolved.push(sequence.to_string()),
                None => {
                    return Err(format!(
                        "Identifier '{}' not found in FASTA file '{}'",
                        id,
                        fasta_path.display()
                    ))
                }
            }
        }
        resolved
    };

    dataset.set_column(new_column, sequences)
}

/// Pure variant of [`join_fasta`]: returns a new dataset and leaves the input
/// untouched, for callers that want immutable-update semantics.
pub fn joined_fasta(
    dataset: &Dataset,
    fasta_path: &Path,
    id_column: &str,
    new_column: &str,
) -> Result<Dataset, String> {
    let mut joined = dataset.clone();
    join_fasta(&mut joined, fasta_path, id_column, new_column)?;
    Ok(joined)
}
