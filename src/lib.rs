//! This crate counts pharmacy claims per drug and writes a report of distinct prescribers and
//! total cost, ordered by decreasing cost.
//!
//! The input is a text file of line records with five fields separated by a delimiter:
//! prescriber id, prescriber last name, prescriber first name, drug name and drug cost. A field
//! may be wrapped in quotation marks to carry the delimiter, e.g. `"Vitamin, D"`.
//!
//! The output starts with the line `drug_name,num_prescriber,total_cost` followed by one line
//! per drug. Drugs with equal cost are ordered by name, either with all characters or, with
//! [NormalizeMode::AlphanumericOnly](normalize_mode::NormalizeMode::AlphanumericOnly), with
//! letters and digits only.
//!
//! # Examples
//! ```
//! use std::path::PathBuf;
//! use pharmacy_counting::policy::ValidationPolicy;
//! use pharmacy_counting::report::Report;
//!
//! fn count_claims(input: PathBuf, output: PathBuf) -> Result<(), anyhow::Error> {
//!     let mut report = Report::new(input, output);
//!
//!     // reject names with punctuation. The default accepts space, hyphen, apostrophe and
//!     // period in names.
//!     report.with_validation_policy(ValidationPolicy::Strict);
//!
//!     // log and skip invalid records. The default is to abort on the first one and leave no
//!     // output behind.
//!     report.with_skip_invalid(true);
//!
//!     report.run()
//! }
//! ```
//!

pub(crate) mod config;
pub(crate) mod key;

pub mod aggregator;
pub mod errors;
pub mod export;
pub mod field;
pub mod field_class;
pub mod normalize_mode;
pub mod policy;
pub mod ranker;
pub mod record;
pub mod report;
pub mod safe_chars;
pub mod splitter;
