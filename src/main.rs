use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use simple_logger::SimpleLogger;

use pharmacy_counting::normalize_mode::NormalizeMode;
use pharmacy_counting::policy::ValidationPolicy;
use pharmacy_counting::report::Report;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Policy {
    Strict,
    Lenient,
}

impl From<Policy> for ValidationPolicy {
    fn from(policy: Policy) -> Self {
        match policy {
            Policy::Strict => ValidationPolicy::Strict,
            Policy::Lenient => ValidationPolicy::Lenient,
        }
    }
}

/// Count prescribers and total cost per drug
#[derive(Parser, Debug)]
#[command(name = "pharmacy-counting", version, about)]
struct Args {
    /// Claims file with id, last name, first name, drug name and cost per line
    input: PathBuf,

    /// Report file to create, must not exist
    output: PathBuf,

    /// One of true, 1, t, y, yes or alpha to compare drug names by letters and digits only
    sort_mode: Option<String>,

    /// Field validation policy
    #[arg(long, value_enum, default_value_t = Policy::Lenient)]
    policy: Policy,

    /// Field delimiter
    #[arg(long, default_value_t = ',')]
    delimiter: char,

    /// Log and skip invalid records instead of aborting
    #[arg(long)]
    skip_invalid: bool,

    /// Warn about names with characters outside the safe set
    #[arg(long)]
    warn_unsafe: bool,
}

fn main() -> Result<(), anyhow::Error> {
    SimpleLogger::new().with_level(LevelFilter::Info).init()?;
    let args = Args::parse();

    let normalize_mode = args.sort_mode
        .as_deref()
        .map(NormalizeMode::from_token)
        .unwrap_or_default();

    let mut report = Report::new(args.input, args.output);
    report.with_normalize_mode(normalize_mode);
    report.with_validation_policy(args.policy.into());
    report.with_field_separator(args.delimiter);
    report.with_skip_invalid(args.skip_invalid);
    report.with_warn_unsafe(args.warn_unsafe);
    report.run()
}
