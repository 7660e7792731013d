// lib.rs - seqframe library root

//! # seqframe - FASTA-to-table joining and sequence featurization
//!
//! This library provides convenience functions for attaching biological
//! sequence data (FASTA records) to tabular datasets, and for deriving simple
//! per-sequence numeric or one-hot features.
//!
//! ## Features
//!
//! - **FASTA joining**: read a FASTA file into an identifier-to-sequence table
//!   and join the sequences into a dataset by row key, in place or as a copy
//! - **Atomic column commit**: the joined column is fully resolved and
//!   validated before the dataset is touched, so a failed join never leaves a
//!   partially updated dataset
//! - **Featurization**: one-hot, side-chain pKa, residue molecular weight and
//!   melting-temperature features, with pluggable featurizers and configurable
//!   length normalization
//! - **Tabular I/O**: CSV/TSV loaders and writers with comment-header support
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use seqframe::prelude::*;
//! use std::path::Path;
//!
//! let mut dataset = Dataset::from_csv(Path::new("samples.csv"))?;
//!
//! // Attach sequences by matching the "id" column against FASTA identifiers
//! join_fasta(&mut dataset, Path::new("sequences.fasta"), "id", "sequence")?;
//!
//! // Derive one-hot features from the joined column
//! let features = sequence_features(
//!     &dataset,
//!     "sequence",
//!     SequenceKind::Dna,
//!     "one-hot",
//!     '-',
//!     LengthPolicy::MostCommonOnly,
//! )?;
//! # Ok::<(), String>(())
//! ```

// Re-export all main modules
pub mod cli;
pub mod data;
pub mod features;
pub mod join;
pub mod output;

// Convenience prelude for common imports
pub mod prelude {
    pub use crate::cli::{validate_args, Args, ValidationResult};
    pub use crate::data::{Dataset, SequenceTable};
    pub use crate::features::{
        sequence_features, FeatureMatrix, FeaturizerRegistry, LengthPolicy, SequenceFeaturizer,
        SequenceKind,
    };
    pub use crate::join::{join_fasta, joined_fasta};
    pub use crate::output::{write_dataset, write_features};
}

// Re-export main types at the root level for convenience
pub use data::{Dataset, SequenceTable};
pub use features::{sequence_features, FeatureMatrix, LengthPolicy, SequenceKind};
pub use join::{join_fasta, joined_fasta};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library information
pub fn get_info() -> String {
    format!(
        "seqframe v{} - FASTA-to-table joining and sequence featurization",
        VERSION
    )
}
