use super::Reader;
use crate::ParseError;
use thiserror::Error;

#[doc = r#"
A set of errors that can occur while decoding a MIDI file
"#]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Reading at Position {position}, {kind}")]
pub struct ReaderError {
    position: usize,
    pub(crate) kind: ReaderErrorKind,
}

/// A kind of error that a reader can produce
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReaderErrorKind {
    /// Parsing errors
    #[error("Parsing {0}")]
    ParseError(#[from] ParseError),
    /// Fewer bytes remain than the field being read requires.
    #[error("Unexpected end of data")]
    UnexpectedEof,
}

impl ReaderError {
    /// Create a reader error from a position and kind
    pub const fn new(position: usize, kind: ReaderErrorKind) -> Self {
        Self { position, kind }
    }
    /// True if the data ended before a field was complete
    pub const fn is_out_of_bounds(&self) -> bool {
        matches!(self.kind, ReaderErrorKind::UnexpectedEof)
    }
    /// Returns the error kind of the reader.
    pub fn error_kind(&self) -> &ReaderErrorKind {
        &self.kind
    }
    /// Returns the position where the read error occurred.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Create a new invalid data error
    pub const fn parse_error(position: usize, error: ParseError) -> Self {
        Self {
            position,
            kind: ReaderErrorKind::ParseError(error),
        }
    }

    /// Create a new out of bounds error
    pub const fn oob(position: usize) -> Self {
        Self {
            position,
            kind: ReaderErrorKind::UnexpectedEof,
        }
    }
}

/// The Read Result type (see [`ReaderError`])
pub type ReadResult<T> = Result<T, ReaderError>;

pub(crate) fn inv_data(reader: &mut Reader<'_>, v: impl Into<ParseError>) -> ReaderError {
    reader.set_last_error_offset(reader.buffer_position());
    ReaderError::parse_error(reader.buffer_position(), v.into())
}

/// Like [`inv_data`], but for an error found at an earlier offset.
pub(crate) fn inv_data_at(
    reader: &mut Reader<'_>,
    position: usize,
    v: impl Into<ParseError>,
) -> ReaderError {
    reader.set_last_error_offset(position);
    ReaderError::parse_error(position, v.into())
}
