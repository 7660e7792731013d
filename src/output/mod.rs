// mod.rs - Output writers for datasets and feature matrices

use crate::data::Dataset;
use crate::features::FeatureMatrix;
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Ensure parent directory exists before creating file
fn ensure_parent_dir(file_path: &str) -> Result<(), String> {
    if let Some(parent) = Path::new(file_path).parent() {
        create_dir_all(parent).map_err(|e| {
            format!(
                "Failed to create parent directory '{}': {}",
                parent.display(),
                e
            )
        })?;
    }
    Ok(())
}

fn comment_header(writer: &mut impl Write, command_line: &str) -> Result<(), String> {
    writeln!(writer, "# Command: {}", command_line).map_err(|e| format!("Write error: {}", e))?;
    writeln!(
        writer,
        "# Generated: {}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    )
    .map_err(|e| format!("Write error: {}", e))?;
    writeln!(writer, "# seqframe v{}", env!("CARGO_PKG_VERSION"))
        .map_err(|e| format!("Write error: {}", e))?;
    Ok(())
}

fn write_delimited_dataset(
    file_path: &str,
    delimiter: char,
    dataset: &Dataset,
    command_line: &str,
) -> Result<(), String> {
    ensure_parent_dir(file_path)?;
    let file = File::create(file_path)
        .map_err(|e| format!("Failed to create output file '{}': {}", file_path, e))?;
    let mut writer = BufWriter::new(file);

    comment_header(&mut writer, command_line)?;

    // Header row
    writeln!(writer, "{}", dataset.columns.join(&delimiter.to_string()))
        .map_err(|e| format!("Write error: {}", e))?;

    // Rows in column order; absent cells are written empty
    for row in &dataset.rows {
        let cells: Vec<&str> = dataset
            .columns
            .iter()
            .map(|column| row.get(column).map(|v| v.as_str()).unwrap_or(""))
            .collect();
        writeln!(writer, "{}", cells.join(&delimiter.to_string()))
            .map_err(|e| format!("Write error: {}", e))?;
    }

    writer.flush().map_err(|e| format!("Flush error: {}", e))?;
    println!("✅ Dataset written to: {}", file_path);
    Ok(())
}

/// Write a dataset in the specified format (tsv or csv)
pub fn write_dataset(
    file_path: &str,
    format: &str,
    dataset: &Dataset,
    command_line: &str,
) -> Result<(), String> {
    match format.to_lowercase().as_str() {
        "tsv" => write_delimited_dataset(file_path, '\t', dataset, command_line),
        "csv" => write_delimited_dataset(file_path, ',', dataset, command_line),
        _ => Err(format!(
            "Unsupported output format: {}. Use: tsv, csv",
            format
        )),
    }
}

fn write_delimited_features(
    file_path: &str,
    delimiter: char,
    matrix: &FeatureMatrix,
    command_line: &str,
) -> Result<(), String> {
    ensure_parent_dir(file_path)?;
    let file = File::create(file_path)
        .map_err(|e| format!("Failed to create output file '{}': {}", file_path, e))?;
    let mut writer = BufWriter::new(file);

    comment_header(&mut writer, command_line)?;

    write!(writer, "row").map_err(|e| format!("Write error: {}", e))?;
    for label in &matrix.labels {
        write!(writer, "{}{}", delimiter, label).map_err(|e| format!("Write error: {}", e))?;
    }
    writeln!(writer).map_err(|e| format!("Write error: {}", e))?;

    for (index, row) in matrix.row_indices.iter().zip(&matrix.rows) {
        write!(writer, "{}", index).map_err(|e| format!("Write error: {}", e))?;
        for value in row {
            write!(writer, "{}{}", delimiter, value).map_err(|e| format!("Write error: {}", e))?;
        }
        writeln!(writer).map_err(|e| format!("Write error: {}", e))?;
    }

    writer.flush().map_err(|e| format!("Flush error: {}", e))?;
    println!("✅ Feature matrix written to: {}", file_path);
    Ok(())
}

fn write_json_features(file_path: &str, matrix: &FeatureMatrix) -> Result<(), String> {
    ensure_parent_dir(file_path)?;
    let content = serde_json::to_string_pretty(matrix)
        .map_err(|e| format!("Failed to serialize feature matrix: {}", e))?;
    std::fs::write(file_path, content)
        .map_err(|e| format!("Failed to create output file '{}': {}", file_path, e))?;
    println!("✅ Feature matrix written to: {} (JSON)", file_path);
    Ok(())
}

/// Write a feature matrix in the specified format (tsv, csv or json)
pub fn write_features(
    file_path: &str,
    format: &str,
    matrix: &FeatureMatrix,
    command_line: &str,
) -> Result<(), String> {
    match format.to_lowercase().as_str() {
        "tsv" => write_delimited_features(file_path, '\t', matrix, command_line),
        "csv" => write_delimited_features(file_path, ',', matrix, command_line),
        "json" => write_json_features(file_path, matrix),
        _ => Err(format!(
            "Unsupported feature matrix format: {}. Use: tsv, csv, json",
            format
        )),
    }
}
