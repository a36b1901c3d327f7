use std::fs;
use std::path::{Path, PathBuf};
use anyhow::Error;
use pharmacy_counting::normalize_mode::NormalizeMode;
use pharmacy_counting::report::Report;

use tikv_jemallocator::Jemalloc;
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

fn count_full_names(input_path: &Path, output_path: &Path) -> Result<(), Error> {
    // full name comparison is the default
    let report = Report::new(input_path.to_path_buf(), output_path.to_path_buf());
    report.run()?;
    Ok(())
}

fn count_alphanumeric_names(input_path: &Path, output_path: &Path) -> Result<(), Error> {
    let mut report = Report::new(input_path.to_path_buf(), output_path.to_path_buf());
    report.with_normalize_mode(NormalizeMode::AlphanumericOnly);
    report.run()?;
    Ok(())
}

fn remove_if_exists(path: &Path) -> Result<(), Error> {
    if path.exists() {
        fs::remove_file(path)?;
    }
    Ok(())
}

// cargo run -r --example count_claims
pub fn main() -> Result<(), Error> {
    let input_path = PathBuf::from("./tests/fixtures/ties.txt");
    let full_path = PathBuf::from("./target/top-cost-drug-full.txt");
    let alphanumeric_path = PathBuf::from("./target/top-cost-drug-alphanumeric.txt");

    remove_if_exists(&full_path)?;
    remove_if_exists(&alphanumeric_path)?;
    count_full_names(&input_path, &full_path)?;
    count_alphanumeric_names(&input_path, &alphanumeric_path)?;

    print!("{}", fs::read_to_string(&full_path)?);
    print!("{}", fs::read_to_string(&alphanumeric_path)?);
    Ok(())
}
