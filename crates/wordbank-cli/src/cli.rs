//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use wordbank::BundleSource;

/// Wordbank: repair, flatten and check vocabulary data files
#[derive(Parser)]
#[command(name = "wordbank")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Strip JS syntax, flatten nested groups and write a clean data file
    Normalize {
        /// Path to the raw data file (default: life.js)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Output path (default: life_fixed.js, or <file>_fixed.<ext> when FILE is given)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Export declaration to strip and write back
        #[arg(long, default_value = wordbank::input::DEFAULT_EXPORT_PREFIX)]
        prefix: String,

        /// Spaces per indent level in the output
        #[arg(long, default_value = "4")]
        indent: usize,
    },

    /// Report duplicate words, duplicate ids and badly formatted words
    Check {
        /// Path to the data file (default: life_fixed.js)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Export declaration to strip
        #[arg(long, default_value = wordbank::input::DEFAULT_EXPORT_PREFIX)]
        prefix: String,

        /// Maximum word length in characters
        #[arg(long, default_value_t = wordbank::validation::DEFAULT_MAX_WORD_LEN)]
        max_len: usize,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Merge several data files into one list of {word_id, word, category} rows
    Bundle {
        /// Source as CATEGORY=PATH, repeatable (e.g. -c idiom=idioms.js -c life=life_fixed.js)
        #[arg(short = 'c', long = "category", value_name = "CATEGORY=PATH", required = true)]
        sources: Vec<BundleSource>,

        /// Output path for the rows (default: print to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
