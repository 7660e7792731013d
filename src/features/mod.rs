// mod.rs - Sequence featurization module

pub mod length;
pub mod melt;
pub mod mw;
pub mod one_hot;
pub mod pka;
pub mod registry;
pub mod traits;

// Re-export main types for convenience
pub use length::{apply_length_policy, LengthPolicy};
pub use melt::MeltFeaturizer;
pub use mw::MwFeaturizer;
pub use one_hot::OneHotFeaturizer;
pub use pka::PkaFeaturizer;
pub use registry::FeaturizerRegistry;
pub use traits::{SequenceFeaturizer, SequenceKind};

use crate::data::Dataset;
use rayon::prelude::*;
use serde::Serialize;

/// Numeric feature matrix derived from one sequence column of a dataset.
///
/// `row_indices` are the zero-based dataset row indices that survived the
/// length policy, in dataset row order.
#[derive(Debug, Clone, Serialize)]
pub struct FeatureMatrix {
    pub row_indices: Vec<usize>,
    pub labels: Vec<String>,
    pub rows: Vec<Vec<f64>>,
}

impl FeatureMatrix {
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_features(&self) -> usize {
        self.labels.len()
    }
}

/// Derive per-sequence features from one column of a dataset.
///
/// The column's sequences are length-normalized by `policy` (dropping or
/// padding rows as the policy dictates), then featurized in parallel with the
/// registered featurizer named by `featurization`.
pub fn sequence_features(
    dataset: &Dataset,
    column_name: &str,
    kind: SequenceKind,
    featurization: &str,
    pad_character: char,
    policy: LengthPolicy,
) -> Result<FeatureMatrix, String> {
    let registry = FeaturizerRegistry::new();
    let featurizer = registry.get(featurization).ok_or_else(|| {
        format!(
            "Unknown featurization type '{}'. Available: {}",
            featurization,
            registry.names().join(", ")
        )
    })?;

    if !featurizer.supports(kind) {
        return Err(format!(
            "Featurization type '{}' does not support {} sequences",
            featurization,
            kind.name()
        ));
    }

    let sequences: Vec<(usize, String)> = dataset
        .column_values(column_name)?
        .into_iter()
        .enumerate()
        .map(|(i, s)| (i, s.to_string()))
        .collect();

    let normalized = apply_length_policy(sequences, policy, pad_character)?;
    let positions = normalized[0].1.chars().count();
    let labels = featurizer.labels(kind, positions);

    let rows: Vec<Vec<f64>> = normalized
        .par_iter()
        .map(|(_, sequence)| featurizer.featurize(sequence, kind, pad_character))
        .collect::<Result<_, String>>()?;

    let row_indices: Vec<usize> = normalized.into_iter().map(|(i, _)| i).collect();

    Ok(FeatureMatrix {
        row_indices,
        labels,
        rows,
    })
}
