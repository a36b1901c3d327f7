use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::Context;
use regex::Regex;

use crate::aggregator::{AggregationTable, Aggregator};
use crate::config::Config;
use crate::errors::ReportError;
use crate::export::export;
use crate::field::claim_fields;
use crate::normalize_mode::NormalizeMode;
use crate::policy::ValidationPolicy;
use crate::ranker::rank;
use crate::record::ClaimRecord;
use crate::safe_chars::SafeChars;
use crate::splitter::split_quoted;

/// Header marker looked up in the prescriber last name field
pub const HEADER_MARKER: &str = "(?i)prescriber_last_name";

/// Build a drug cost report from a claims file
///
/// # Examples
/// ```
/// use std::path::PathBuf;
/// use pharmacy_counting::normalize_mode::NormalizeMode;
/// use pharmacy_counting::report::Report;
///
/// fn count(input: PathBuf, output: PathBuf) -> Result<(), anyhow::Error> {
///     let mut report = Report::new(input, output);
///     // compare drug names by letters and digits only when costs are equal
///     report.with_normalize_mode(NormalizeMode::AlphanumericOnly);
///     report.run()
/// }
/// ```
pub struct Report {
    input: PathBuf,
    output: PathBuf,
    field_separator: char,
    validation_policy: ValidationPolicy,
    normalize_mode: NormalizeMode,
    safe_chars: SafeChars,
    header: Option<(usize, Regex)>,
    skip_invalid: bool,
    warn_unsafe: bool,
}

impl Report {
    /// Create a default Report definition.
    ///
    /// * The default field separator is a comma
    /// * Records are checked with [ValidationPolicy::Lenient]
    /// * Drugs with equal cost are compared with [NormalizeMode::Full]
    /// * A line whose second field matches [HEADER_MARKER] is a header and is skipped
    /// * The first invalid record aborts the run
    /// * Unsafe characters are not reported
    pub fn new(input: PathBuf, output: PathBuf) -> Report {
        Report {
            input,
            output,
            field_separator: ',',
            validation_policy: ValidationPolicy::default(),
            normalize_mode: NormalizeMode::default(),
            safe_chars: SafeChars::default(),
            header: Regex::new(HEADER_MARKER).ok().map(|marker| (2, marker)),
            skip_invalid: false,
            warn_unsafe: false,
        }
    }

    /// Set the field separator. The default is ','
    pub fn with_field_separator(&mut self, field_separator: char) {
        self.field_separator = field_separator;
    }

    /// Set the [ValidationPolicy]
    pub fn with_validation_policy(&mut self, validation_policy: ValidationPolicy) {
        self.validation_policy = validation_policy;
    }

    /// Set the [NormalizeMode] used to break cost ties
    pub fn with_normalize_mode(&mut self, normalize_mode: NormalizeMode) {
        self.normalize_mode = normalize_mode;
    }

    /// Replace the set of safe characters
    pub fn with_safe_chars(&mut self, safe_chars: SafeChars) {
        self.safe_chars = safe_chars;
    }

    /// A line whose field at `index`, starting at 1, matches `marker` is a header and is skipped.
    pub fn with_header_pattern(&mut self, index: usize, marker: Regex) {
        self.header = Some((index, marker));
    }

    /// Treat every line as data.
    pub fn without_header(&mut self) {
        self.header = None;
    }

    /// Log and skip records with a wrong field count or invalid content instead of aborting.
    pub fn with_skip_invalid(&mut self, skip_invalid: bool) {
        self.skip_invalid = skip_invalid;
    }

    /// Log a warning for every record whose names hold characters outside the safe set.
    pub fn with_warn_unsafe(&mut self, warn_unsafe: bool) {
        self.warn_unsafe = warn_unsafe;
    }

    /// Fail when the input is missing or the output already exists.
    pub fn check_paths(&self) -> Result<(), ReportError> {
        if !self.input.is_file() {
            return Err(ReportError::InputNotFound(self.input.clone()));
        }
        if self.output.exists() {
            return Err(ReportError::OutputExists(self.output.clone()));
        }
        Ok(())
    }

    /// Read and aggregate the input without writing a report.
    pub fn aggregate(&self) -> Result<AggregationTable, anyhow::Error> {
        if !self.input.is_file() {
            return Err(ReportError::InputNotFound(self.input.clone()).into());
        }
        let config = self.create_config();
        Self::internal_aggregate(&self.input, &config)
    }

    /// Read, aggregate, rank and write the report.
    pub fn run(&self) -> Result<(), anyhow::Error> {
        self.check_paths()?;
        let config = self.create_config();
        log::info!("Start report, input: {}, sort mode: {:?}", self.input.display(), config.normalize_mode());
        let table = Self::internal_aggregate(&self.input, &config)?;
        let order = rank(&table, config.normalize_mode(), config.safe_chars());
        export(&table, &order, &self.output)?;
        log::info!("Finish report, drugs: {}, output: {}", order.len(), self.output.display());
        Ok(())
    }

    fn create_config(&self) -> Config {
        Config::new(
            self.field_separator,
            claim_fields(),
            self.validation_policy,
            self.normalize_mode,
            self.safe_chars.clone(),
            self.header.clone(),
            self.skip_invalid,
            self.warn_unsafe,
        )
    }

    pub(crate) fn internal_aggregate(path: &Path, config: &Config) -> Result<AggregationTable, anyhow::Error> {
        let file = File::open(path)
            .map_err(ReportError::from)
            .with_context(|| format!("path: {}", path.display()))?;
        let mut reader = BufReader::new(file);
        let mut aggregator = Aggregator::new();
        let mut skipped = 0;
        let mut n = 0;
        let mut line = String::new();
        while reader.read_line(&mut line)
            .map_err(ReportError::from)
            .with_context(|| format!("file: {}, line: {}", path.display(), n + 1))? != 0 {
            n += 1;
            if !line.contains(config.field_separator()) {
                line.clear();
                continue;
            }

            let split = split_quoted(&line, config.field_separator());
            if !split.is_balanced() {
                log::warn!(
                    "Entry with id {} has an unpaired quotation mark and may be parsed incorrectly, line: {}",
                    split.first(),
                    n
                );
            }

            if config.is_header(split.fields()) {
                log::debug!("Skip header, line: {}", n);
                line.clear();
                continue;
            }

            match config.validation_policy().validate(split.into_fields(), config.fields()) {
                Ok(record) => {
                    if config.warn_unsafe() {
                        warn_unsafe(&record, &line, config.safe_chars());
                    }
                    aggregator.add(&record);
                }
                Err(e) if config.skip_invalid() && e.is_record_error() => {
                    log::warn!("Skip line {}: {}", n, e);
                    skipped += 1;
                }
                Err(e) => {
                    return Err(
                        anyhow::Error::new(e).context(format!("file: {}, line: {}", path.display(), n))
                    );
                }
            }
            line.clear();
        }
        log::info!(
            "Read {} lines from {}, aggregated {} records, skipped {}",
            n,
            path.display(),
            aggregator.records(),
            skipped
        );
        Ok(aggregator.finish())
    }
}

fn warn_unsafe(record: &ClaimRecord, line: &str, safe_chars: &SafeChars) {
    let checked = [
        ("prescriber last name", record.last_name()),
        ("prescriber first name", record.first_name()),
        ("drug name", record.drug_name()),
    ];
    if let Some((field, c)) = checked
        .iter()
        .find_map(|(field, value)| safe_chars.first_unsafe(value).map(|c| (field, c))) {
        log::warn!("Unsafe character '{}' in {}: {}", c, field, line.trim_end());
    }
}
