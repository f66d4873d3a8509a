use thiserror::Error;

#[doc = r#"
The set of things that can be wrong with the bytes being decoded
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A chunk could not be read
    #[error("Chunk: {0}")]
    Chunk(#[from] ChunkError),
    /// A variable-length quantity kept its continuation bit set past four bytes
    #[error("Variable-length quantity is longer than four bytes")]
    MalformedVlq,
    /// A data byte appeared before any status byte in the track
    #[error("Data byte {0:#04X} found before any status byte was established")]
    MissingRunningStatus(u8),
    /// A byte routed as a status byte does not have its high bit set
    #[error("{0:#04X} is not a status byte")]
    InvalidStatus(u8),
}

/// Errors tied to the chunk framing of the file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChunkError {
    /// The 4-byte tag of a chunk is not the one the decoder expected at that point
    #[error("Expected chunk id {expected:?}, found {found:?}")]
    InvalidChunkId {
        /// The tag that should have been there (`MThd` or `MTrk`)
        expected: [u8; 4],
        /// The tag found in the file
        found: [u8; 4],
    },
}

/// Errors raised when interpreting an SMPTE offset payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SmpteError {
    /// The payload is not exactly five bytes
    #[error("Invalid SMPTE offset length: {0}")]
    Length(usize),
    /// The two frame-rate bits hold an unknown value
    #[error("Invalid SMPTE track frame type: {0}")]
    TrackFrame(u8),
    /// Hours above 23
    #[error("Invalid SMPTE hour offset: {0}")]
    HourOffset(u8),
    /// Minutes above 59
    #[error("Invalid SMPTE minute offset: {0}")]
    MinuteOffset(u8),
    /// Seconds above 59
    #[error("Invalid SMPTE second offset: {0}")]
    SecondOffset(u8),
    /// Subframes above 99
    #[error("Invalid SMPTE subframe: {0}")]
    Subframe(u8),
}

/// Errors from decoding a file read through `std::io`
#[cfg(feature = "std")]
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The source could not be read
    #[error("I/O: {0}")]
    Io(#[from] std::io::Error),
    /// The bytes read are not a valid MIDI file
    #[error(transparent)]
    Read(#[from] crate::reader::ReaderError),
}
