//! Bundle command - merge categorized data files into one row list.

use std::path::PathBuf;

use colored::Colorize;
use wordbank::{BundleSource, Observation, Wordbank};

pub fn run(
    sources: Vec<BundleSource>,
    output: Option<PathBuf>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let wordbank = Wordbank::new();
    let bundle = wordbank.bundle(&sources)?;

    // Rows on stdout must stay parseable, so progress goes to stderr then
    let to_stdout = output.is_none();
    let status = |line: String| {
        if to_stdout {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    };

    for source in &sources {
        status(format!(
            "{} {} {} rows from {}",
            "Bundled".cyan().bold(),
            bundle.category_count(&source.category).to_string().white().bold(),
            source.category,
            source.path.display()
        ));
    }

    if verbose {
        for meta in &bundle.sources {
            status(format!("  {:24} {}", meta.file, meta.hash));
        }
    }

    if !bundle.conflicts.is_empty() {
        status(format!(
            "{} {} IDs are used more than once; rows sharing an ID will overwrite each other on import:",
            "Warning:".yellow().bold(),
            bundle.conflicts.len()
        ));
        for conflict in &bundle.conflicts {
            status(format!(
                "  - {}",
                Observation::DuplicateId(conflict.clone()).description()
            ));
        }
    }

    match output {
        Some(path) => {
            bundle.save(&path)?;
            println!(
                "{} {} rows to {}",
                "Saved".green().bold(),
                bundle.rows.len().to_string().white().bold(),
                path.display().to_string().white()
            );
        }
        None => println!("{}", bundle.to_json()?),
    }

    Ok(())
}
