// traits.rs - Core trait and types for the featurizer system

use std::fmt::Debug;
use std::str::FromStr;

/// Kind of biological sequence being featurized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceKind {
    Dna,
    Protein,
}

impl SequenceKind {
    /// Residue alphabet for this kind, in canonical order
    pub fn alphabet(&self) -> &'static [u8] {
        match self {
            SequenceKind::Dna => b"ACGT",
            SequenceKind::Protein => b"ACDEFGHIKLMNPQRSTVWY",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SequenceKind::Dna => "dna",
            SequenceKind::Protein => "protein",
        }
    }
}

impl FromStr for SequenceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dna" => Ok(SequenceKind::Dna),
            "protein" => Ok(SequenceKind::Protein),
            other => Err(format!(
                "Invalid sequence kind '{}'. Use: dna, protein",
                other
            )),
        }
    }
}

/// Trait for per-sequence featurization strategies.
///
/// A featurizer turns one length-normalized sequence string into a numeric
/// feature vector. Pad characters encode as 0.0 (all-zero indicators for
/// one-hot); any residue outside the kind's alphabet is an error.
pub trait SequenceFeaturizer: Send + Sync + Debug {
    /// Compute the feature vector for a sequence
    fn featurize(
        &self,
        sequence: &str,
        kind: SequenceKind,
        pad_character: char,
    ) -> Result<Vec<f64>, String>;

    /// Column labels for a feature matrix of sequences with `positions` residues
    fn labels(&self, kind: SequenceKind, positions: usize) -> Vec<String>;

    /// Get a human-readable name for this featurizer
    fn name(&self) -> &'static str;

    /// Get a description of this featurizer
    fn description(&self) -> &'static str;

    /// Whether this featurizer is defined for the given sequence kind
    fn supports(&self, _kind: SequenceKind) -> bool {
        true
    }
}
