// config.rs - Configuration file support

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    // Input/Output
    pub dataset: Option<String>,
    pub fasta: Option<String>,
    pub output: Option<String>,

    // Join settings
    pub id_column: Option<String>,
    pub sequence_column: Option<String>,
    pub format: Option<String>,

    // Featurization
    pub featurize: Option<String>,
    pub kind: Option<String>,
    pub pad_character: Option<String>,
    pub sequence_length: Option<String>,
    pub features_output: Option<String>,
    pub features_format: Option<String>,

    // Row filtering
    pub include_ids: Option<String>,
    pub exclude_ids: Option<String>,

    // Flags
    pub dry_run: Option<bool>,
}

impl Config {
    /// Create a new empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file '{}': {}", path.display(), e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| format!("Failed to parse config file '{}': {}", path.display(), e))?;

        println!("📄 Loaded configuration from: {}", path.display());
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), String> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        fs::write(path, content)
            .map_err(|e| format!("Failed to write config file '{}': {}", path.display(), e))?;

        println!("📄 Saved configuration to: {}", path.display());
        Ok(())
    }

    /// Generate a sample configuration file with comments
    pub fn generate_sample() -> String {
        r#"# seqframe.toml - Configuration file for seqframe
# Command line arguments will override these settings

# =============================================================================
# INPUT/OUTPUT
# =============================================================================

# Path to the tabular dataset (.tsv or .csv)
dataset = "/path/to/samples.tsv"

# Path to the FASTA file to join
fasta = "/path/to/sequences.fasta"

# Output dataset file
output = "joined.tsv"

# =============================================================================
# JOIN SETTINGS
# =============================================================================

# Dataset column holding sequence identifiers
id_column = "id"

# Name of the sequence column to create or overwrite
sequence_column = "sequence"

# Output format: tsv, csv
format = "tsv"

# =============================================================================
# FEATURIZATION (optional)
# =============================================================================

# Featurization type: one-hot, pka, mw, t (omit to skip featurization)
# featurize = "one-hot"

# Sequence kind: dna, protein
kind = "dna"

# Pad character for length normalization
pad_character = "-"

# Sequence length policy: most_common_only, most_common_max, longest, or a number
sequence_length = "most_common_only"

# Output file for the feature matrix
# features_output = "features.tsv"

# Feature matrix format: tsv, csv, json
features_format = "tsv"

# =============================================================================
# ROW FILTERING
# =============================================================================

# Include only rows whose identifier matches regex pattern
# include_ids = "sample.*"

# Exclude rows whose identifier matches regex pattern
# exclude_ids = "control.*"

# =============================================================================
# FLAGS
# =============================================================================

# Validate inputs without writing output
dry_run = false
"#
        .to_string()
    }
}
