use std::{
    fs::File,
    path::{Path, PathBuf},
};

use log::{debug, info};

use crate::{
    domain::{
        customer::{EMAIL_FIELD, extract_domain},
        domain_counts::DomainCounts,
    },
    error::{DomainCountError, Result},
    parsers::strict_quotes::{QuoteError, StrictQuotes},
};

/// Reads customer data from a csv file at `path`.
#[derive(Debug, Clone)]
pub struct CustomerImporter {
    path: PathBuf,
}

impl CustomerImporter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Counts the customers of every email domain found in the file.
    ///
    /// # Errors
    ///
    /// The file can't be opened, or any row fails to parse (see
    /// [`CustomerImporter::import_domain_counts_from_reader`]).
    pub fn import_domain_counts(&self) -> Result<DomainCounts> {
        debug!("opening customer data at {}", self.path.display());
        let file = File::open(&self.path).map_err(|source| DomainCountError::Open {
            path: self.path.clone(),
            source,
        })?;

        self.import_domain_counts_from_reader(file)
    }

    /// This is the main parsing loop. The importer's path is only used to describe errors.
    ///
    /// The first row is a header and is skipped without looking at it. Every other row must
    /// carry an email in its third column. The first bad row aborts the whole import, nothing
    /// counted so far is returned.
    ///
    /// # Errors
    ///
    /// - [`DomainCountError::MissingHeader`] if the input is empty
    /// - [`DomainCountError::MalformedQuote`] on a bare, stray or unclosed quote, header included
    /// - [`DomainCountError::Read`] on other malformed csv (inconsistent field count, invalid
    ///   utf-8)
    /// - [`DomainCountError::MissingEmail`] if a row has no third column
    /// - [`DomainCountError::InvalidEmail`] if the email has no local or domain part
    pub fn import_domain_counts_from_reader<R: std::io::Read>(
        &self,
        reader: R,
    ) -> Result<DomainCounts> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(StrictQuotes::new(reader));
        // reused for every row, fields are overwritten on each read
        let mut record = csv::StringRecord::new();

        if !rdr
            .read_record(&mut record)
            .map_err(|err| self.read_error(err))?
        {
            return Err(DomainCountError::MissingHeader {
                path: self.path.clone(),
            });
        }

        let mut domain_counts = DomainCounts::new();
        let mut rows: u64 = 0;

        while rdr
            .read_record(&mut record)
            .map_err(|err| self.read_error(err))?
        {
            let line = record.position().map_or(0, |pos| pos.line());
            let email = record
                .get(EMAIL_FIELD)
                .ok_or_else(|| DomainCountError::MissingEmail {
                    path: self.path.clone(),
                    line,
                })?;
            let domain = extract_domain(email).ok_or_else(|| DomainCountError::InvalidEmail {
                path: self.path.clone(),
                email: email.to_owned(),
                line,
            })?;

            domain_counts.increment(domain);
            rows += 1;
        }

        info!(
            "imported {rows} customers across {} domains from {}",
            domain_counts.len(),
            self.path.display()
        );

        Ok(domain_counts)
    }

    fn read_error(&self, err: csv::Error) -> DomainCountError {
        // quote errors come through the csv reader as io errors
        if let csv::ErrorKind::Io(io_err) = err.kind() {
            if let Some(quote_err) = io_err
                .get_ref()
                .and_then(|inner| inner.downcast_ref::<QuoteError>())
            {
                return DomainCountError::MalformedQuote {
                    path: self.path.clone(),
                    line: quote_err.line,
                    kind: quote_err.kind,
                };
            }
        }

        DomainCountError::Read {
            path: self.path.clone(),
            source: err,
        }
    }
}
