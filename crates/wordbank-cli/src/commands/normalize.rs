//! Normalize command - repair and flatten a raw data file.

use std::path::PathBuf;

use colored::Colorize;
use wordbank::{fixed_path_for, Wordbank, WordbankConfig, DEFAULT_FIXED_FILE, DEFAULT_RAW_FILE};

pub fn run(
    file: Option<PathBuf>,
    output: Option<PathBuf>,
    prefix: String,
    indent: usize,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    // Determine output path before `file` is consumed
    let output_path = match (&output, &file) {
        (Some(o), _) => o.clone(),
        (None, Some(f)) => fixed_path_for(f),
        (None, None) => PathBuf::from(DEFAULT_FIXED_FILE),
    };
    let file = file.unwrap_or_else(|| PathBuf::from(DEFAULT_RAW_FILE));

    println!(
        "{} {}",
        "Normalizing".cyan().bold(),
        file.display().to_string().white()
    );

    let config = WordbankConfig::default()
        .with_export_prefix(prefix)
        .with_indent_width(indent);
    let wordbank = Wordbank::with_config(config)?;

    let outcome = wordbank.normalize(&file, &output_path)?;

    println!(
        "Extracted {} records",
        outcome.record_count().to_string().white().bold()
    );

    if verbose {
        println!();
        println!("{}", "Source:".yellow().bold());
        println!("  {:10} {}", "hash", outcome.source.hash);
        println!("  {:10} {} bytes", "size", outcome.source.size_bytes);
        println!("{}", "Output:".yellow().bold());
        println!("  {:10} {}", "hash", outcome.output.hash);
        println!("  {:10} {} bytes", "size", outcome.output.size_bytes);
        println!();
    }

    println!(
        "{} {}",
        "Saved to".green().bold(),
        outcome.output_path().display().to_string().white()
    );

    if outcome.changed {
        println!(
            "Review {} before replacing {}",
            outcome.output_path().display().to_string().cyan(),
            file.display()
        );
    } else {
        println!("{}", "Input was already normalized - no changes.".green());
    }

    Ok(())
}
