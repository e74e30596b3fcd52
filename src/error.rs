use std::path::PathBuf;

use thiserror::Error;

use crate::parsers::strict_quotes::QuoteErrorKind;

#[derive(Debug, Error)]
pub enum DomainCountError {
    #[error("improper path '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{path}' has no header row")]
    MissingHeader { path: PathBuf },

    #[error("invalid csv in '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("invalid csv in '{path}': {kind} on line {line}")]
    MalformedQuote {
        path: PathBuf,
        line: u64,
        kind: QuoteErrorKind,
    },

    #[error("missing email field in '{path}' on line {line}")]
    MissingEmail { path: PathBuf, line: u64 },

    #[error("invalid email address '{email}' in '{path}' on line {line}")]
    InvalidEmail {
        path: PathBuf,
        email: String,
        line: u64,
    },

    #[error("provided data is empty")]
    EmptyData,

    #[error("failed to create '{path}': {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write csv: {source}")]
    Write {
        #[source]
        source: csv::Error,
    },

    #[error("failed to flush output: {source}")]
    Flush {
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, DomainCountError>;
