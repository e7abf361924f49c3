//! Main Wordbank struct and public API.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::bundle::{Bundle, BundleRow, BundleSource};
use crate::dataset::Dataset;
use crate::error::{Result, WordbankError};
use crate::input::{Parser, ParserConfig, SourceMetadata, DEFAULT_EXPORT_PREFIX};
use crate::output::Serializer;
use crate::validation::{find_duplicate_ids, FormatRules, ValidationEngine, ValidationReport};

/// Largest accepted indent width.
const MAX_INDENT_WIDTH: usize = 16;

/// Configuration for wordbank runs.
#[derive(Debug, Clone)]
pub struct WordbankConfig {
    /// Export declaration stripped on read and written on output.
    pub export_prefix: String,
    /// Spaces per indent level in normalized output.
    pub indent_width: usize,
    /// Word format limits used by `check`.
    pub format_rules: FormatRules,
}

impl Default for WordbankConfig {
    fn default() -> Self {
        Self {
            export_prefix: DEFAULT_EXPORT_PREFIX.to_string(),
            indent_width: 4,
            format_rules: FormatRules::default(),
        }
    }
}

impl WordbankConfig {
    pub fn with_export_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.export_prefix = prefix.into();
        self
    }

    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    pub fn with_max_word_len(mut self, max: usize) -> Self {
        self.format_rules.max_word_len = max;
        self
    }

    /// Reject values that would produce unreadable or unparseable output.
    pub fn validate(&self) -> Result<()> {
        if self.export_prefix.trim().is_empty() {
            return Err(WordbankError::Config(
                "export prefix must not be empty".to_string(),
            ));
        }
        if self.indent_width == 0 || self.indent_width > MAX_INDENT_WIDTH {
            return Err(WordbankError::Config(format!(
                "indent width must be between 1 and {}, got {}",
                MAX_INDENT_WIDTH, self.indent_width
            )));
        }
        Ok(())
    }
}

/// Result of a normalize run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizeOutcome {
    /// The file that was read.
    pub source: SourceMetadata,
    /// The file that was written.
    pub output: SourceMetadata,
    /// Whether the written text differs from the input text.
    pub changed: bool,
}

impl NormalizeOutcome {
    pub fn record_count(&self) -> usize {
        self.output.record_count
    }

    pub fn output_path(&self) -> &Path {
        &self.output.path
    }
}

/// The main entry point: load, normalize, check and bundle vocabulary files.
pub struct Wordbank {
    config: WordbankConfig,
    parser: Parser,
    serializer: Serializer,
    validation: ValidationEngine,
}

impl Wordbank {
    /// Create a new instance with default configuration.
    pub fn new() -> Self {
        let config = WordbankConfig::default();
        Self {
            parser: Parser::new(),
            serializer: Serializer::new(),
            validation: ValidationEngine::with_rules(config.format_rules.clone()),
            config,
        }
    }

    /// Create an instance with custom configuration.
    pub fn with_config(config: WordbankConfig) -> Result<Self> {
        config.validate()?;

        let parser = Parser::with_config(&ParserConfig {
            export_prefix: config.export_prefix.clone(),
        })?;
        let serializer = Serializer::with_options(&config.export_prefix, config.indent_width);
        let validation = ValidationEngine::with_rules(config.format_rules.clone());

        Ok(Self {
            config,
            parser,
            serializer,
            validation,
        })
    }

    pub fn config(&self) -> &WordbankConfig {
        &self.config
    }

    /// Load a file into a flat dataset. An empty dataset is an error.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<(Dataset, SourceMetadata)> {
        let path = path.as_ref();
        let (dataset, source) = self.parser.parse_file(path)?;

        if dataset.is_empty() {
            return Err(WordbankError::EmptyData(format!(
                "no records found in '{}'",
                path.display()
            )));
        }

        Ok((dataset, source))
    }

    /// Repair and flatten `input`, then write it to `output`.
    ///
    /// On any error before the write, `output` is left untouched.
    pub fn normalize(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
    ) -> Result<NormalizeOutcome> {
        let output = output.as_ref();
        let (dataset, source) = self.load(input)?;

        let text = self.serializer.write(&dataset, output)?;
        info!(
            records = dataset.len(),
            output = %output.display(),
            "wrote normalized dataset"
        );

        let output = SourceMetadata::from_contents(output.to_path_buf(), text.as_bytes())
            .with_record_count(dataset.len());
        let changed = output.hash != source.hash;

        Ok(NormalizeOutcome {
            source,
            output,
            changed,
        })
    }

    /// Load `input` and run every validator over it.
    pub fn check(&self, input: impl AsRef<Path>) -> Result<ValidationReport> {
        let (dataset, source) = self.load(input)?;
        Ok(self.check_dataset(&dataset).with_source(source))
    }

    /// Run every validator over a dataset already in memory.
    pub fn check_dataset(&self, dataset: &Dataset) -> ValidationReport {
        let observations = self.validation.validate(dataset);
        debug!(observations = observations.len(), "validation finished");
        ValidationReport::from_observations(dataset.len(), observations)
    }

    /// Merge several files into categorized rows and find id conflicts
    /// across all of them.
    pub fn bundle(&self, sources: &[BundleSource]) -> Result<Bundle> {
        if sources.is_empty() {
            return Err(WordbankError::Config(
                "bundle needs at least one source".to_string(),
            ));
        }

        let mut rows = Vec::new();
        let mut ids = Vec::new();
        let mut metadata = Vec::with_capacity(sources.len());

        for source in sources {
            let (dataset, meta) = self.load(&source.path)?;
            for record in &dataset {
                rows.push(BundleRow {
                    word_id: record.get("word_id").cloned(),
                    word: record.get("word").cloned(),
                    category: source.category.clone(),
                });
                ids.push((record.word_id(), record.word()));
            }
            metadata.push(meta);
        }

        let conflicts = find_duplicate_ids(ids);
        if !conflicts.is_empty() {
            info!(conflicts = conflicts.len(), "bundle has conflicting ids");
        }

        Ok(Bundle {
            sources: metadata,
            rows,
            conflicts,
        })
    }
}

impl Default for Wordbank {
    fn default() -> Self {
        Self::new()
    }
}

/// Default input for `normalize`.
pub const DEFAULT_RAW_FILE: &str = "life.js";

/// Default output of `normalize` and input of `check`.
pub const DEFAULT_FIXED_FILE: &str = "life_fixed.js";

/// Default output path next to `input`: `<stem>_fixed.<ext>`.
pub fn fixed_path_for(input: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    let name = match input.extension() {
        Some(ext) => format!("{}_fixed.{}", stem, ext.to_string_lossy()),
        None => format!("{}_fixed", stem),
    };
    input.with_file_name(name)
}
