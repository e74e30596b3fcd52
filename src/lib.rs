pub mod domain;
pub mod error;
pub mod exporter;
pub mod parsers;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use serde::Serialize;
use std::{
    io::{Write, stdout},
    path::{Path, PathBuf},
};

use crate::{
    error::{DomainCountError, Result},
    exporter::{CustomerExporter, write_csv_domain_counts},
    parsers::csv_parser::CustomerImporter,
};

/// How much the program logs to stderr
#[derive(Clone, Copy, Debug, PartialEq, Serialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum LogLevelOptions {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

serde_plain::derive_display_from_serialize!(LogLevelOptions);

impl From<LogLevelOptions> for LevelFilter {
    fn from(level: LogLevelOptions) -> Self {
        match level {
            LogLevelOptions::Off => LevelFilter::Off,
            LogLevelOptions::Error => LevelFilter::Error,
            LogLevelOptions::Warn => LevelFilter::Warn,
            LogLevelOptions::Info => LevelFilter::Info,
            LogLevelOptions::Debug => LevelFilter::Debug,
            LogLevelOptions::Trace => LevelFilter::Trace,
        }
    }
}

/// Counts customers per email domain in a csv file
#[derive(Parser, Debug)]
#[command(name = "domain-count", version)]
pub struct DomainCountInput {
    /// Path to the file with customer data
    #[arg(long, default_value = "./customers.csv")]
    pub path: PathBuf,
    /// Output file path. If empty the results are printed to the terminal
    #[arg(long = "out")]
    pub out_file: Option<String>,
    #[arg(long, default_value_t = LogLevelOptions::Info)]
    pub log_level: LogLevelOptions,
}

impl DomainCountInput {
    /// The output file, if one was given. An empty path means the terminal.
    pub fn out_file(&self) -> Option<&Path> {
        self.out_file
            .as_deref()
            .filter(|path| !path.is_empty())
            .map(Path::new)
    }
}

/// Imports the customers csv and writes the sorted domain counts to the output file, or to
/// stdout if there is none.
///
/// # Errors
///
/// The first import or export error. Nothing is written if the import fails.
pub fn process_customers(input: &DomainCountInput) -> Result<()> {
    let domain_counts = CustomerImporter::new(&input.path).import_domain_counts()?;

    match input.out_file() {
        Some(out_file) => CustomerExporter::new(out_file).export_data(&domain_counts),
        None => write_csv_domain_counts(&domain_counts, stdout().lock()),
    }
}

/// Logs a failed run, or writes it to `w` when error logging is disabled so a failure is never
/// silent.
pub fn report_failure<W: Write>(err: &DomainCountError, mut w: W) {
    if log::log_enabled!(log::Level::Error) {
        log::error!("{err}");
    } else {
        // nowhere left to report a failed write
        let _ = writeln!(w, "error: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let input = DomainCountInput::try_parse_from(["domain-count"]).unwrap();

        assert_eq!(input.path, PathBuf::from("./customers.csv"));
        assert_eq!(input.out_file(), None);
        assert_eq!(input.log_level, LogLevelOptions::Info);
    }

    #[test]
    fn test_empty_out_prints_to_terminal() {
        let input = DomainCountInput::try_parse_from(["domain-count", "--out", ""]).unwrap();

        assert_eq!(input.out_file(), None);
    }

    #[test]
    fn test_options() {
        let input = DomainCountInput::try_parse_from([
            "domain-count",
            "--path",
            "data/customers.csv",
            "--out",
            "counts.csv",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(input.path, PathBuf::from("data/customers.csv"));
        assert_eq!(input.out_file(), Some(Path::new("counts.csv")));
        assert_eq!(LevelFilter::from(input.log_level), LevelFilter::Debug);
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevelOptions::Warn.to_string(), "warn");
    }

    #[test]
    fn test_process_customers_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("customers.csv");
        let out_file = dir.path().join("counts.csv");
        std::fs::write(&path, "a,b,email\nx,y,one@b.io\nx,y,two@a.io\nx,y,three@b.io\n").unwrap();

        let input = DomainCountInput {
            path,
            out_file: Some(out_file.display().to_string()),
            log_level: LogLevelOptions::Off,
        };
        process_customers(&input).unwrap();

        assert_eq!(
            std::fs::read_to_string(out_file).unwrap(),
            "domain,number_of_customers\na.io,1\nb.io,2\n"
        );
    }

    #[test]
    fn test_process_customers_import_failure_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("customers.csv");
        let out_file = dir.path().join("counts.csv");
        std::fs::write(&path, "a,b,email\nx,y,one@b.io\nx,y,broken\n").unwrap();

        let input = DomainCountInput {
            path,
            out_file: Some(out_file.display().to_string()),
            log_level: LogLevelOptions::Off,
        };

        assert!(process_customers(&input).is_err());
        assert!(!out_file.exists());
    }

    #[test]
    fn test_report_failure_without_logger() {
        // no logger is installed in unit tests, so error logging is disabled
        let mut output = Vec::new();
        report_failure(&DomainCountError::EmptyData, &mut output);

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "error: provided data is empty\n"
        );
    }
}
