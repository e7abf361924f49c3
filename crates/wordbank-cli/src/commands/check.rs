//! Check command - report duplicates and badly formatted words.

use std::path::PathBuf;

use colored::Colorize;
use wordbank::validation::format_values;
use wordbank::{Observation, Wordbank, WordbankConfig, DEFAULT_FIXED_FILE};

pub fn run(
    file: Option<PathBuf>,
    prefix: String,
    max_len: usize,
    json_output: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = file.unwrap_or_else(|| PathBuf::from(DEFAULT_FIXED_FILE));

    let config = WordbankConfig::default()
        .with_export_prefix(prefix)
        .with_max_word_len(max_len);
    let wordbank = Wordbank::with_config(config)?;

    if json_output {
        let report = wordbank.check(&file)?;
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Checking".cyan().bold(),
        file.display().to_string().white()
    );

    let report = wordbank.check(&file)?;

    if verbose {
        if let Some(source) = &report.source {
            println!("  {:10} {}", "hash", source.hash);
            println!("  {:10} {} bytes", "size", source.size_bytes);
        }
    }

    println!("{}", "-".repeat(30));
    println!(
        "Checked {} words",
        report.total_records.to_string().white().bold()
    );
    println!("{}", "-".repeat(30));

    println!();
    if report.word_duplicates.is_empty() {
        println!("{}", "No duplicate words.".green());
    } else {
        println!(
            "{} {} duplicate words:",
            "Found".red().bold(),
            report.word_duplicates.len().to_string().white().bold()
        );
        for dup in &report.word_duplicates {
            println!(
                "  - '{}' appears {} times (IDs: {})",
                dup.word.white().bold(),
                dup.word_ids.len(),
                format_values(&dup.word_ids)
            );
        }
    }

    println!();
    if report.id_duplicates.is_empty() {
        println!("{}", "No ID conflicts.".green());
    } else {
        println!(
            "{} {} duplicate IDs (these break lookups):",
            "Found".red().bold(),
            report.id_duplicates.len().to_string().white().bold()
        );
        for dup in &report.id_duplicates {
            println!(
                "  - {}",
                Observation::DuplicateId(dup.clone()).description()
            );
        }
    }

    println!();
    if report.format_violations.is_empty() {
        println!("{}", "All words are well formatted.".green());
    } else {
        println!(
            "{} {} suspicious words:",
            "Found".yellow().bold(),
            report.format_violations.len().to_string().white().bold()
        );
        for violation in &report.format_violations {
            println!(
                "  - {} ({}): {}",
                violation.word,
                violation.word_id,
                violation.issue_labels().yellow()
            );
        }
    }

    Ok(())
}
