// merge.rs - Merge configuration file with CLI arguments

use crate::cli::{Args, Config};

impl Args {
    /// Merge with configuration from file.
    /// CLI arguments take precedence over config file values.
    pub fn merge_with_config(mut self, config: Config) -> Self {
        // Input/Output
        if self.dataset.is_none() {
            self.dataset = config.dataset;
        }
        if self.fasta.is_none() {
            self.fasta = config.fasta;
        }
        if self.output.is_none() {
            self.output = config.output;
        }

        // Join settings (only override defaults, not explicit CLI values)
        if self.id_column == "id" && config.id_column.is_some() {
            self.id_column = config.id_column.unwrap();
        }
        if self.sequence_column == "sequence" && config.sequence_column.is_some() {
            self.sequence_column = config.sequence_column.unwrap();
        }
        if self.format == "tsv" && config.format.is_some() {
            self.format = config.format.unwrap();
        }

        // Featurization
        if self.featurize.is_none() {
            self.featurize = config.featurize;
        }
        if self.kind == "dna" && config.kind.is_some() {
            self.kind = config.kind.unwrap();
        }
        if self.pad_character == "-" && config.pad_character.is_some() {
            self.pad_character = config.pad_character.unwrap();
        }
        if self.sequence_length == "most_common_only" && config.sequence_length.is_some() {
            self.sequence_length = config.sequence_length.unwrap();
        }
        if self.features_output.is_none() {
            self.features_output = config.features_output;
        }
        if self.features_format == "tsv" && config.features_format.is_some() {
            self.features_format = config.features_format.unwrap();
        }

        // Row filtering
        if self.include_ids.is_none() {
            self.include_ids = config.include_ids;
        }
        if self.exclude_ids.is_none() {
            self.exclude_ids = config.exclude_ids;
        }

        // Flags (CLI flags take precedence, config only sets if not explicitly set)
        if !self.dry_run && config.dry_run.unwrap_or(false) {
            self.dry_run = true;
        }

        self
    }

    /// Load configuration and merge with CLI args
    pub fn with_config_file(self, config_path: &str) -> Result<Self, String> {
        let config = Config::from_file(config_path)?;
        Ok(self.merge_with_config(config))
    }
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
    fn test_config_fills_unset_values() {
        let mut config = Config::new();
        config.dataset = Some("samples.csv".to_string());
        config.kind = Some("protein".to_string());
        config.dry_run = Some(true);

        let merged = default_args().merge_with_config(config);
        assert_eq!(merged.dataset.as_deref(), Some("samples.csv"));
        assert_eq!(merged.kind, "protein");
        assert!(merged.dry_run);
    }

    #[test]
    fn test_cli_values_take_precedence() {
        let mut args = default_args();
        args.format = "csv".to_string();
        args.dataset = Some("cli.csv".to_string());

        let mut config = Config::new();
        config.format = Some("tsv".to_string());
        config.dataset = Some("config.csv".to_string());

        let merged = args.merge_with_config(config);
        assert_eq!(merged.format, "csv");
        assert_eq!(merged.dataset.as_deref(), Some("cli.csv"));
    }
}
