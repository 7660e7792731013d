// validation.rs - Input validation utilities

use crate::cli::args::Args;
use crate::features::{FeaturizerRegistry, LengthPolicy, SequenceKind};
use regex::Regex;
use std::str::FromStr;

#[derive(Debug)]
pub struct ValidationResult {
    pub kind: SequenceKind,
    pub length_policy: LengthPolicy,
    pub pad_character: char,
    pub include_regex: Option<Regex>,
    pub exclude_regex: Option<Regex>,
}

/// Validate all command line arguments
pub fn validate_args(args: &Args) -> Result<ValidationResult, String> {
    // Validate output formats
    if !matches!(args.format.to_lowercase().as_str(), "tsv" | "csv") {
        return Err(format!(
            "Invalid output format '{}'. Use: tsv, csv",
            args.format
        ));
    }
    if !matches!(
        args.features_format.to_lowercase().as_str(),
        "tsv" | "csv" | "json"
    ) {
        return Err(format!(
            "Invalid feature matrix format '{}'. Use: tsv, csv, json",
            args.features_format
        ));
    }

    // Validate featurization type against the registry
    if let Some(featurize) = &args.featurize {
        let registry = FeaturizerRegistry::new();
        if !registry.has(featurize) {
            return Err(format!(
                "Invalid featurization type '{}'. Available: {}",
                featurize,
                registry.names().join(", ")
            ));
        }
    }

    // Parse sequence kind and length policy
    let kind = SequenceKind::from_str(&args.kind)?;
    let length_policy = LengthPolicy::from_str(&args.sequence_length)?;

    // Pad character must be a single character
    let mut pad_chars = args.pad_character.chars();
    let pad_character = match (pad_chars.next(), pad_chars.next()) {
        (Some(c), None) => c,
        _ => {
            return Err(format!(
                "Pad character must be a single character, got '{}'",
                args.pad_character
            ))
        }
    };

    // Compile row filter patterns
    let include_regex = match &args.include_ids {
        Some(pattern) => Some(
            Regex::new(pattern)
                .map_err(|e| format!("Invalid --include-ids pattern '{}': {}", pattern, e))?,
        ),
        None => None,
    };
    let exclude_regex = match &args.exclude_ids {
        Some(pattern) => Some(
            Regex::new(pattern)
                .map_err(|e| format!("Invalid --exclude-ids pattern '{}': {}", pattern, e))?,
        ),
        None => None,
    };

    Ok(ValidationResult {
        kind,
        length_policy,
        pad_character,
        include_regex,
        exclude_regex,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_args() -> Args {
        Args {
            dataset: None,
            fasta: None,
            id_column: "id".to_string(),
            sequence_column: "sequence".to_string(),
            output: None,
            format: "tsv".to_string(),
            featurize: None,
            kind: "dna".to_string(),
            pad_character: "-".to_string(),
            sequence_length: "most_common_only".to_string(),
            features_output: None,
            features_format: "tsv".to_string(),
            include_ids: None,
            exclude_ids: None,
            config: None,
            generate_config: false,
            dry_run: false,
        }
    }

    #[test]
    fn test_validate_defaults() {
        let result = validate_args(&default_args()).unwrap();
        assert_eq!(result.kind, SequenceKind::Dna);
        assert_eq!(result.length_policy, LengthPolicy::MostCommonOnly);
        assert_eq!(result.pad_character, '-');
        assert!(result.include_regex.is_none());
    }

    #[test]
    fn test_validate_fixed_length_policy() {
        let mut args = default_args();
        args.sequence_length = "12".to_string();
        let result = validate_args(&args).unwrap();
        assert_eq!(result.length_policy, LengthPolicy::Fixed(12));
    }

    #[test]
    fn test_validate_rejects_bad_featurizer() {
        let mut args = default_args();
        args.featurize = Some("sha256".to_string());
        let err = validate_args(&args).unwrap_err();
        assert!(err.contains("Invalid featurization type"));
    }

    #[test]
    fn test_validate_rejects_bad_kind() {
        let mut args = default_args();
        args.kind = "rna".to_string();
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_rejects_long_pad() {
        let mut args = default_args();
        args.pad_character = "--".to_string();
        let err = validate_args(&args).unwrap_err();
        assert!(err.contains("single character"));
    }

    #[test]
    fn test_validate_rejects_bad_format() {
        let mut args = default_args();
        args.format = "parquet".to_string();
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_compiles_filters() {
        let mut args = default_args();
        args.include_ids = Some("^sample".to_string());
        args.exclude_ids = Some("(unclosed".to_string());
        let err = validate_args(&args).unwrap_err();
        assert!(err.contains("--exclude-ids"));
    }
}
