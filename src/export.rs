use std::io::{BufWriter, ErrorKind, Write};
use std::path::Path;

use anyhow::{anyhow, Context};
use tempfile::Builder;

use crate::aggregator::AggregationTable;
use crate::errors::ReportError;

/// First line of every report
pub const HEADER: &str = "drug_name,num_prescriber,total_cost";

/// Write the header and one line per drug of `order` to `writer`.
///
/// Each line reads `drug_name,num_prescriber,total_cost` with the cost printed with two decimal
/// digits. Names missing from `table` are an error.
pub fn write_report<W: Write>(writer: &mut W, table: &AggregationTable, order: &[String]) -> Result<(), anyhow::Error> {
    writeln!(writer, "{}", HEADER)?;
    for name in order {
        let stats = table.get(name)
            .ok_or_else(|| anyhow!("Drug {} is not in the aggregation table", name))?;
        writeln!(writer, "{},{},{:.2}", name, stats.prescriber_count(), stats.total_cost())?;
    }
    Ok(())
}

/// Write the report to `output`.
///
/// The report is written to a temporary file next to `output` and moved into place only when
/// complete, so a failed export leaves nothing behind. An existing `output` is never replaced.
pub fn export(table: &AggregationTable, order: &[String], output: &Path) -> Result<(), anyhow::Error> {
    let dir = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let tmp_file = Builder::new()
        .prefix(".report-")
        .suffix(".partial")
        .tempfile_in(dir)
        .with_context(|| format!("Failed to create temp file in {}", dir.display()))?;

    {
        let mut writer = BufWriter::new(tmp_file.as_file());
        write_report(&mut writer, table, order)?;
        writer.flush()?;
    }

    tmp_file.persist_noclobber(output)
        .map_err(|e| {
            if e.error.kind() == ErrorKind::AlreadyExists {
                anyhow::Error::new(ReportError::OutputExists(output.to_path_buf()))
            } else {
                anyhow!("Persist report to {}: {}", output.display(), e.error)
            }
        })?;
    Ok(())
}
