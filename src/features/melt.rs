// melt.rs - Melting temperature contribution featurizer for DNA sequences

use super::traits::{SequenceFeaturizer, SequenceKind};

/// Per-base melting temperature contribution in °C by the Wallace rule
/// (A/T add 2 °C, G/C add 4 °C)
fn wallace_contribution(residue: char) -> Option<f64> {
    match residue {
        'A' | 'T' => Some(2.0),
        'G' | 'C' => Some(4.0),
        _ => None,
    }
}

/// Per-position melting temperature contribution featurizer. DNA only.
#[derive(Debug, Clone)]
pub struct MeltFeaturizer;

impl SequenceFeaturizer for MeltFeaturizer {
    fn featurize(
        &self,
        sequence: &str,
        kind: SequenceKind,
        pad_character: char,
    ) -> Result<Vec<f64>, String> {
        if kind != SequenceKind::Dna {
            return Err(format!(
                "Melting temperature featurization requires DNA sequences, got kind '{}'",
                kind.name()
            ));
        }

        let mut features = Vec::with_capacity(sequence.len());
        for (position, residue) in sequence.chars().enumerate() {
            if residue == pad_character {
                features.push(0.0);
                continue;
            }
            let value = wallace_contribution(residue.to_ascii_uppercase()).ok_or_else(|| {
                format!(
                    "Unknown dna residue '{}' at position {}",
                    residue,
                    position + 1
                )
            })?;
            features.push(value);
        }
        Ok(features)
    }

    fn labels(&self, _kind: SequenceKind, positions: usize) -> Vec<String> {
        (1..=positions).map(|p| format!("p{}_tm", p)).collect()
    }

    fn name(&self) -> &'static str {
        "t"
    }

    fn description(&self) -> &'static str {
        "Per-position melting temperature contribution by the Wallace rule (DNA only)"
    }

    fn supports(&self, kind: SequenceKind) -> bool {
        kind == SequenceKind::Dna
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_melt_values() {
        let featurizer = MeltFeaturizer;
        let features = featurizer
            .featurize("ACGT", SequenceKind::Dna, '-')
            .unwrap();
        assert_eq!(features, vec![2.0, 4.0, 4.0, 2.0]);
    }

    #[test]
    fn test_melt_pad_is_zero() {
        let featurizer = MeltFeaturizer;
        let features = featurizer.featurize("G-", SequenceKind::Dna, '-').unwrap();
        assert_eq!(features, vec![4.0, 0.0]);
    }

    #[test]
    fn test_melt_rejects_protein_kind() {
        let featurizer = MeltFeaturizer;
        assert!(!featurizer.supports(SequenceKind::Protein));
        let err = featurizer
            .featurize("KD", SequenceKind::Protein, '-')
            .unwrap_err();
        assert!(err.contains("requires DNA sequences"));
    }
}
