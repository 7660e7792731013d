// length.rs - Length normalization policies for featurization

use std::str::FromStr;

/// Policy for handling sequences of unequal length before featurization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthPolicy {
    /// Keep only sequences of the most common length
    MostCommonOnly,
    /// Keep sequences up to the most common length, right-padding shorter ones
    MostCommonMax,
    /// Keep all sequences, right-padding to the longest length
    Longest,
    /// Keep only sequences of exactly this length
    Fixed(usize),
}

impl FromStr for LengthPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "most_common_only" => Ok(LengthPolicy::MostCommonOnly),
            "most_common_max" => Ok(LengthPolicy::MostCommonMax),
            "longest" => Ok(LengthPolicy::Longest),
            other => match other.parse::<usize>() {
                Ok(n) => Ok(LengthPolicy::Fixed(n)),
                Err(_) => Err(format!(
                    "Invalid sequence length policy '{}'. Use: most_common_only, most_common_max, longest, or a number",
                    other
                )),
            },
        }
    }
}

/// Most common sequence length; ties break toward the shorter length
fn most_common_length(sequences: &[(usize, String)]) -> usize {
    let mut counts: Vec<(usize, usize)> = Vec::new();
    for (_, seq) in sequences {
        let len = seq.chars().count();
        match counts.iter_mut().find(|(l, _)| *l == len) {
            Some((_, count)) => *count += 1,
            None => counts.push((len, 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    counts[0].0
}

fn right_pad(sequence: &str, target: usize, pad_character: char) -> String {
    let mut padded = sequence.to_string();
    let mut len = sequence.chars().count();
    while len < target {
        padded.push(pad_character);
        len += 1;
    }
    padded
}

/// Apply a length policy to `(row index, sequence)` pairs, dropping or padding
/// sequences so every survivor has the same length. Row indices identify which
/// dataset rows survive the policy.
pub fn apply_length_policy(
    sequences: Vec<(usize, String)>,
    policy: LengthPolicy,
    pad_character: char,
) -> Result<Vec<(usize, String)>, String> {
    if sequences.is_empty() {
        return Err("No sequences to featurize".to_string());
    }

    let result: Vec<(usize, String)> = match policy {
        LengthPolicy::MostCommonOnly => {
            let target = most_common_length(&sequences);
            sequences
                .into_iter()
                .filter(|(_, seq)| seq.chars().count() == target)
                .collect()
        }
        LengthPolicy::MostCommonMax => {
            let target = most_common_length(&sequences);
            sequences
                .into_iter()
                .filter(|(_, seq)| seq.chars().count() <= target)
                .map(|(i, seq)| {
                    let padded = right_pad(&seq, target, pad_character);
                    (i, padded)
                })
                .collect()
        }
        LengthPolicy::Longest => {
            let target = sequences
                .iter()
                .map(|(_, seq)| seq.chars().count())
                .max()
                .unwrap_or(0);
            sequences
                .into_iter()
                .map(|(i, seq)| {
                    let padded = right_pad(&seq, target, pad_character);
                    (i, padded)
                })
                .collect()
        }
        LengthPolicy::Fixed(target) => {
            let kept: Vec<(usize, String)> = sequences
                .into_iter()
                .filter(|(_, seq)| seq.chars().count() == target)
                .collect();
            if kept.is_empty() {
                return Err(format!("No sequences of length {}", target));
            }
            kept
        }
    };

    Ok(result)
}
