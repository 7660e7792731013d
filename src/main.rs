// main.rs - CLI entry point

use seqframe::cli::Config;
use seqframe::prelude::*;
use std::path::Path;
use std::time::Instant;

fn main() {
    if let Err(e) = run_main() {
        eprintln!("❌ ERROR: {}", e);
        std::process::exit(1);
    }
}

fn run_main() -> Result<(), String> {
    let mut args: Args = argh::from_env();
    let command_line = std::env::args().collect::<Vec<String>>().join(" ");

    // Handle generate config first
    if args.generate_config {
        let sample_config = Config::generate_sample();
        println!("{}", sample_config);
        println!("\n💡 Save this content to a .toml file and use --config /path/to/config.toml");
        return Ok(());
    }

    // Load configuration file if specified
    if let Some(config_path) = args.config.clone() {
        args = args.with_config_file(&config_path)?;
    }

    // Validate required parameters
    let dataset_path = args.dataset.as_ref().ok_or("--dataset is required")?;
    let fasta_path = args.fasta.as_ref().ok_or("--fasta is required")?;

    let output = if args.dry_run {
        None
    } else {
        Some(args.output.as_ref().ok_or("--output is required")?)
    };

    println!("🚀 seqframe v{}", env!("CARGO_PKG_VERSION"));

    // Validate all arguments
    let validation_result = validate_args(&args)?;

    let total_start = Instant::now();

    // Load the dataset by file extension
    let dataset_path = Path::new(dataset_path);
    let extension = dataset_path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("tsv");
    let mut dataset = match extension {
        "csv" => Dataset::from_csv(dataset_path)?,
        _ => Dataset::from_tsv(dataset_path)?,
    };

    // Apply row filters
    dataset.filter_rows(
        &args.id_column,
        validation_result.include_regex.as_ref(),
        validation_result.exclude_regex.as_ref(),
    )?;

    if dataset.n_rows() == 0 {
        return Err("No rows remain after filtering".to_string());
    }

    // Join FASTA sequences into the dataset
    join_fasta(
        &mut dataset,
        Path::new(fasta_path),
        &args.id_column,
        &args.sequence_column,
    )?;
    println!(
        "🔗 Joined column '{}' into {} rows",
        args.sequence_column,
        dataset.n_rows()
    );

    if args.dry_run {
        println!("✅ Dry run completed successfully");
        return Ok(());
    }

    if let Some(output) = output {
        write_dataset(output, &args.format, &dataset, &command_line)?;
    }

    // Optional featurization pass over the joined column
    if let Some(featurize) = &args.featurize {
        let matrix = sequence_features(
            &dataset,
            &args.sequence_column,
            validation_result.kind,
            featurize,
            validation_result.pad_character,
            validation_result.length_policy,
        )?;
        println!(
            "🧮 Features: {} rows × {} columns ({})",
            matrix.n_rows(),
            matrix.n_features(),
            featurize
        );

        let features_output = args
            .features_output
            .as_ref()
            .ok_or("--features-output is required when --featurize is set")?;
        write_features(
            features_output,
            &args.features_format,
            &matrix,
            &command_line,
        )?;
    }

    println!(
        "⏱️  Total time: {:.2}s",
        total_start.elapsed().as_secs_f64()
    );
    Ok(())
}
