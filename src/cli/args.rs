// args.rs - Command line arguments definition

use argh::FromArgs;

#[derive(FromArgs)]
/// seqframe - join FASTA sequences into tabular datasets and derive per-sequence features
pub struct Args {
    /// path to the tabular dataset (.tsv or .csv)
    #[argh(option)]
    pub dataset: Option<String>,

    /// path to the FASTA file to join
    #[argh(option)]
    pub fasta: Option<String>,

    /// dataset column holding sequence identifiers (default: id)
    #[argh(option, default = "String::from(\"id\")")]
    pub id_column: String,

    /// name of the sequence column to create or overwrite (default: sequence)
    #[argh(option, default = "String::from(\"sequence\")")]
    pub sequence_column: String,

    /// output dataset file
    #[argh(option)]
    pub output: Option<String>,

    /// output format: tsv, csv (default: tsv)
    #[argh(option, default = "String::from(\"tsv\")")]
    pub format: String,

    /// featurization type: one-hot, pka, mw, t (omit to skip featurization)
    #[argh(option)]
    pub featurize: Option<String>,

    /// sequence kind for featurization: dna, protein (default: dna)
    #[argh(option, default = "String::from(\"dna\")")]
    pub kind: String,

    /// pad character for length normalization (default: -)
    #[argh(option, default = "String::from(\"-\")")]
    pub pad_character: String,

    /// sequence length policy: most_common_only, most_common_max, longest, or a number (default: most_common_only)
    #[argh(option, default = "String::from(\"most_common_only\")")]
    pub sequence_length: String,

    /// output file for the feature matrix
    #[argh(option)]
    pub features_output: Option<String>,

    /// feature matrix format: tsv, csv, json (default: tsv)
    #[argh(option, default = "String::from(\"tsv\")")]
    pub features_format: String,

    /// include only rows whose identifier matches regex pattern
    #[argh(option)]
    pub include_ids: Option<String>,

    /// exclude rows whose identifier matches regex pattern
    #[argh(option)]
    pub exclude_ids: Option<String>,

    /// load settings from a TOML configuration file
    #[argh(option)]
    pub config: Option<String>,

    /// print a sample configuration file and exit
    #[argh(switch)]
    pub generate_config: bool,

    /// validate inputs without writing output
    #[argh(switch)]
    pub dry_run: bool,
}
