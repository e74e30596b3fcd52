use std::{
    fs::File,
    path::{Path, PathBuf},
};

use log::info;

use crate::{
    domain::domain_counts::DomainCounts,
    error::{DomainCountError, Result},
};

const HEADERS: [&str; 2] = ["domain", "number_of_customers"];

/// Writes the header followed by every domain count, sorted by domain, to the writer (W).
///
/// The output is flushed before returning.
///
/// # Errors
///
/// Failed to write a row, or failed to flush the buffered output
pub fn write_csv_domain_counts<W: std::io::Write>(data: &DomainCounts, w: W) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(w);
    let write_err = |source: csv::Error| DomainCountError::Write { source };

    wtr.write_record(HEADERS).map_err(write_err)?;
    for entry in data.sorted_entries() {
        wtr.serialize(entry).map_err(write_err)?;
    }
    wtr.flush()
        .map_err(|source| DomainCountError::Flush { source })?;

    Ok(())
}

/// Writes domain counts to a csv file at `output_path`.
#[derive(Debug, Clone)]
pub struct CustomerExporter {
    output_path: PathBuf,
}

impl CustomerExporter {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
        }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Writes `data` to the output file, truncating it if it already exists.
    ///
    /// # Errors
    ///
    /// - [`DomainCountError::EmptyData`] if there is nothing to export. The file isn't touched.
    /// - [`DomainCountError::Create`] if the file can't be created
    /// - anything [`write_csv_domain_counts`] returns
    pub fn export_data(&self, data: &DomainCounts) -> Result<()> {
        if data.is_empty() {
            return Err(DomainCountError::EmptyData);
        }

        let file = File::create(&self.output_path).map_err(|source| DomainCountError::Create {
            path: self.output_path.clone(),
            source,
        })?;
        write_csv_domain_counts(data, file)?;

        info!(
            "exported {} domains to {}",
            data.len(),
            self.output_path.display()
        );
        Ok(())
    }
}
