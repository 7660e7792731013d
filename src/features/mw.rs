// mw.rs - Residue molecular weight featurizer

use super::traits::{SequenceFeaturizer, SequenceKind};

/// Average amino acid residue mass in Daltons (water of condensation removed)
fn protein_residue_mass(residue: char) -> Option<f64> {
    match residue {
        'A' => Some(71.08),
        'C' => Some(103.14),
        'D' => Some(115.09),
        'E' => Some(129.12),
        'F' => Some(147.18),
        'G' => Some(57.05),
        'H' => Some(137.14),
        'I' => Some(113.16),
        'K' => Some(128.17),
        'L' => Some(113.16),
        'M' => Some(131.19),
        'N' => Some(114.10),
        'P' => Some(97.12),
        'Q' => Some(128.13),
        'R' => Some(156.19),
        'S' => Some(87.08),
        'T' => Some(101.10),
        'V' => Some(99.13),
        'W' => Some(186.21),
        'Y' => Some(163.18),
        _ => None,
    }
}

/// Average nucleotide monophosphate residue mass in Daltons
fn dna_residue_mass(residue: char) -> Option<f64> {
    match residue {
        'A' => Some(313.21),
        'C' => Some(289.18),
        'G' => Some(329.21),
        'T' => Some(304.20),
        _ => None,
    }
}

/// Per-position residue molecular weight featurizer (protein and DNA).
#[derive(Debug, Clone)]
pub struct MwFeaturizer;

impl SequenceFeaturizer for MwFeaturizer {
    fn featurize(
        &self,
        sequence: &str,
        kind: SequenceKind,
        pad_character: char,
    ) -> Result<Vec<f64>, String> {
        let mut features = Vec::with_capacity(sequence.len());
        for (position, residue) in sequence.chars().enumerate() {
            if residue == pad_character {
                features.push(0.0);
                continue;
            }
            let upper = residue.to_ascii_uppercase();
            let value = match kind {
                SequenceKind::Protein => protein_residue_mass(upper),
                SequenceKind::Dna => dna_residue_mass(upper),
            }
            .ok_or_else(|| {
                format!(
                    "Unknown {} residue '{}' at position {}",
                    kind.name(),
                    residue,
                    position + 1
                )
            })?;
            features.push(value);
        }
        Ok(features)
    }

    fn labels(&self, _kind: SequenceKind, positions: usize) -> Vec<String> {
        (1..=positions).map(|p| format!("p{}_mw", p)).collect()
    }

    fn name(&self) -> &'static str {
        "mw"
    }

    fn description(&self) -> &'static str {
        "Per-position residue molecular weight in Daltons (pads are 0)"
    }
}
