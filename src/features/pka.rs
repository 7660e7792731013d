// pka.rs - Side-chain pKa featurizer for protein sequences

use super::traits::{SequenceFeaturizer, SequenceKind};

/// Side-chain pKa of an amino acid residue; non-ionizable side chains are 0.0
fn side_chain_pka(residue: char) -> Option<f64> {
    match residue {
        'D' => Some(3.65),
        'E' => Some(4.25),
        'H' => Some(6.00),
        'C' => Some(8.30),
        'Y' => Some(10.07),
        'K' => Some(10.53),
        'R' => Some(12.48),
        'A' | 'F' | 'G' | 'I' | 'L' | 'M' | 'N' | 'P' | 'Q' | 'S' | 'T' | 'V' | 'W' => Some(0.0),
        _ => None,
    }
}

/// Per-position side-chain pKa featurizer. Protein sequences only.
#[derive(Debug, Clone)]
pub struct PkaFeaturizer;

impl SequenceFeaturizer for PkaFeaturizer {
    fn featurize(
        &self,
        sequence: &str,
        kind: SequenceKind,
        pad_character: char,
    ) -> Result<Vec<f64>, String> {
        if kind != SequenceKind::Protein {
            return Err(format!(
                "pKa featurization requires protein sequences, got kind '{}'",
                kind.name()
            ));
        }

        let mut features = Vec::with_capacity(sequence.len());
        for (position, residue) in sequence.chars().enumerate() {
            if residue == pad_character {
                features.push(0.0);
                continue;
            }
            let value = side_chain_pka(residue.to_ascii_uppercase()).ok_or_else(|| {
                format!(
                    "Unknown protein residue '{}' at position {}",
                    residue,
                    position + 1
                )
            })?;
            features.push(value);
        }
        Ok(features)
    }

    fn labels(&self, _kind: SequenceKind, positions: usize) -> Vec<String> {
        (1..=positions).map(|p| format!("p{}_pka", p)).collect()
    }

    fn name(&self) -> &'static str {
        "pka"
    }

    fn description(&self) -> &'static str {
        "Per-position side-chain pKa (protein only; non-ionizable residues and pads are 0)"
    }

    fn supports(&self, kind: SequenceKind) -> bool {
        kind == SequenceKind::Protein
    }
}
