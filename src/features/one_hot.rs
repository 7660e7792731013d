// one_hot.rs - One-hot encoding featurizer

use super::traits::{SequenceFeaturizer, SequenceKind};

/// One-hot featurizer: one indicator column per alphabet symbol per position.
/// Pad characters encode as an all-zero block.
#[derive(Debug, Clone)]
pub struct OneHotFeaturizer;

impl SequenceFeaturizer for OneHotFeaturizer {
    fn featurize(
        &self,
        sequence: &str,
        kind: SequenceKind,
        pad_character: char,
    ) -> Result<Vec<f64>, String> {
        let alphabet = kind.alphabet();
        let mut features = Vec::with_capacity(sequence.len() * alphabet.len());

        for (position, residue) in sequence.chars().enumerate() {
            if residue == pad_character {
                features.extend(std::iter::repeat(0.0).take(alphabet.len()));
                continue;
            }
            let upper = residue.to_ascii_uppercase();
            let index = alphabet
                .iter()
                .position(|&symbol| symbol as char == upper)
                .ok_or_else(|| {
                    format!(
                        "Unknown {} residue '{}' at position {}",
                        kind.name(),
                        residue,
                        position + 1
                    )
                })?;
            for i in 0..alphabet.len() {
                features.push(if i == index { 1.0 } else { 0.0 });
            }
        }
        Ok(features)
    }

    fn labels(&self, kind: SequenceKind, positions: usize) -> Vec<String> {
        let alphabet = kind.alphabet();
        let mut labels = Vec::with_capacity(positions * alphabet.len());
        for position in 1..=positions {
            for &symbol in alphabet {
                labels.push(format!("p{}_{}", position, symbol as char));
            }
        }
        labels
    }

    fn name(&self) -> &'static str {
        "one-hot"
    }

    fn description(&self) -> &'static str {
        "One indicator column per alphabet symbol per position (pads are all-zero)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_hot_dna() {
        let featurizer = OneHotFeaturizer;
        let features = featurizer.featurize("AC", SequenceKind::Dna, '-').unwrap();
        assert_eq!(
            features,
            vec![1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0]
        );
    }

    #[test]
    fn test_one_hot_pad_is_all_zero() {
        let featurizer = OneHotFeaturizer;
        let features = featurizer.featurize("A-", SequenceKind::Dna, '-').unwrap();
        assert_eq!(&features[4..], &[0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_one_hot_lowercase_accepted() {
        let featurizer = OneHotFeaturizer;
        let lower = featurizer.featurize("acgt", SequenceKind::Dna, '-').unwrap();
        let upper = featurizer.featurize("ACGT", SequenceKind::Dna, '-').unwrap();
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_one_hot_unknown_residue() {
        let featurizer = OneHotFeaturizer;
        let err = featurizer
            .featurize("AXGT", SequenceKind::Dna, '-')
            .unwrap_err();
        assert!(err.contains("Unknown dna residue 'X' at position 2"));
    }

    #[test]
    fn test_one_hot_labels() {
        let featurizer = OneHotFeaturizer;
        let labels = featurizer.labels(SequenceKind::Dna, 2);
        assert_eq!(labels.len(), 8);
        assert_eq!(labels[0], "p1_A");
        assert_eq!(labels[7], "p2_T");

        let protein = featurizer.labels(SequenceKind::Protein, 3);
        assert_eq!(protein.len(), 60);
    }
}
