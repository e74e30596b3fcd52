use std::io::{self, Read};

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QuoteErrorKind {
    #[error("bare \" in non-quoted field")]
    BareQuote,
    #[error("extraneous or missing \" in quoted field")]
    ExtraneousQuote,
    #[error("quoted field is never closed")]
    Unterminated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{kind} on line {line}")]
pub struct QuoteError {
    pub line: u64,
    pub kind: QuoteErrorKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    FieldStart,
    Unquoted,
    Quoted,
    /// A '"' was seen inside a quoted field, it either escapes another '"' or closes the field
    QuoteInQuoted,
    /// '\r' right after a closing quote, only '\n' may follow
    ClosedCr,
}

/// Passes bytes through unchanged while checking that every quote is well placed.
///
/// The csv reader accepts stray and unclosed quotes, this doesn't. On the first bad quote the
/// bytes before it are still handed out, and the error is returned by the next `read`. This way
/// every row before the bad one is parsed first.
///
/// The error is an [`io::Error`] of kind [`io::ErrorKind::InvalidData`] wrapping a
/// [`QuoteError`].
pub struct StrictQuotes<R> {
    inner: R,
    state: State,
    line: u64,
    // line where the current quoted field was opened
    quote_line: u64,
    pending: Option<QuoteError>,
}

impl<R> StrictQuotes<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            state: State::FieldStart,
            line: 1,
            quote_line: 1,
            pending: None,
        }
    }

    fn advance(&mut self, byte: u8) -> Result<(), QuoteErrorKind> {
        self.state = match (self.state, byte) {
            (State::FieldStart, b'"') => {
                self.quote_line = self.line;
                State::Quoted
            }
            (State::FieldStart | State::Unquoted, b',' | b'\n') => State::FieldStart,
            (State::FieldStart | State::Unquoted, b'"') => return Err(QuoteErrorKind::BareQuote),
            (State::FieldStart | State::Unquoted, _) => State::Unquoted,
            (State::Quoted, b'"') => State::QuoteInQuoted,
            (State::Quoted, _) => State::Quoted,
            (State::QuoteInQuoted, b'"') => State::Quoted,
            (State::QuoteInQuoted, b',' | b'\n') => State::FieldStart,
            (State::QuoteInQuoted, b'\r') => State::ClosedCr,
            (State::ClosedCr, b'\n') => State::FieldStart,
            (State::QuoteInQuoted | State::ClosedCr, _) => {
                return Err(QuoteErrorKind::ExtraneousQuote);
            }
        };
        if byte == b'\n' {
            self.line += 1;
        }
        Ok(())
    }
}

impl<R: Read> Read for StrictQuotes<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if let Some(err) = self.pending.take() {
            return Err(io::Error::new(io::ErrorKind::InvalidData, err));
        }

        let size = self.inner.read(buf)?;
        if size == 0 {
            if self.state == State::Quoted {
                let err = QuoteError {
                    line: self.quote_line,
                    kind: QuoteErrorKind::Unterminated,
                };
                return Err(io::Error::new(io::ErrorKind::InvalidData, err));
            }
            return Ok(0);
        }

        for (i, &byte) in buf[..size].iter().enumerate() {
            if let Err(kind) = self.advance(byte) {
                let err = QuoteError {
                    line: self.line,
                    kind,
                };
                // Ok(0) would read as end of input
                if i == 0 {
                    return Err(io::Error::new(io::ErrorKind::InvalidData, err));
                }
                self.pending = Some(err);
                return Ok(i);
            }
        }

        Ok(size)
    }
}
