#![doc = r#"
Rusty representation of a [`MidiFile`]
"#]

mod format;
pub use format::*;

mod header;
pub use header::*;

mod track;
pub use track::*;

mod timing;
pub use timing::*;

pub mod meta;
pub use meta::*;

use alloc::vec::Vec;

use crate::{
    ChunkError,
    reader::{ReadResult, Reader, inv_data_at},
};

/// The tag of the header chunk
pub const HEADER_CHUNK_ID: [u8; 4] = *b"MThd";

/// The tag of a track chunk
pub const TRACK_CHUNK_ID: [u8; 4] = *b"MTrk";

/// The smallest possible track chunk: tag, length and `00 FF 2F 00`
pub const MIN_TRACK_CHUNK_LEN: usize = 12;

/// Read a chunk tag and check it is `expected`
pub(crate) fn expect_chunk_id(reader: &mut Reader<'_>, expected: [u8; 4]) -> ReadResult<()> {
    let position = reader.buffer_position();
    let found = reader.read_exact_size::<4>()?;
    if found != expected {
        return Err(inv_data_at(
            reader,
            position,
            ChunkError::InvalidChunkId { expected, found },
        ));
    }
    Ok(())
}

#[doc = r#"
A fully decoded Standard MIDI File: the header fields and every track.
"#]
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MidiFile {
    header: MidiFileHeader,
    tracks: Vec<Track>,
}

impl MidiFile {
    /// Decode a whole file held in memory.
    ///
    /// Reads the header, then exactly as many track chunks as the header
    /// declares. Anything after the last of those is ignored. The first
    /// error aborts decoding and no partial file is returned.
    pub fn parse(bytes: &[u8]) -> ReadResult<Self> {
        let mut reader = Reader::from_byte_slice(bytes);
        let header = MidiFileHeader::read(&mut reader)?;

        let capacity = (header.track_count() as usize).min(reader.remaining() / MIN_TRACK_CHUNK_LEN);
        let mut tracks = Vec::with_capacity(capacity);
        for _ in 0..header.track_count() {
            tracks.push(Track::read(&mut reader)?);
        }

        Ok(Self { header, tracks })
    }

    /// Read everything from `source`, then decode it.
    #[cfg(feature = "std")]
    pub fn from_reader<R: std::io::Read>(mut source: R) -> Result<Self, crate::DecodeError> {
        let mut bytes = Vec::new();
        source.read_to_end(&mut bytes)?;
        Ok(Self::parse(&bytes)?)
    }

    /// Read the file at `path`, then decode it.
    ///
    /// The file is closed before decoding starts.
    #[cfg(feature = "std")]
    pub fn open<P: AsRef<std::path::Path>>(path: P) -> Result<Self, crate::DecodeError> {
        let bytes = std::fs::read(path)?;
        Ok(Self::parse(&bytes)?)
    }

    /// Returns header info
    pub const fn header(&self) -> &MidiFileHeader {
        &self.header
    }

    /// The raw format number from the header
    pub const fn format(&self) -> u16 {
        self.header.format()
    }

    /// Returns the format type for the file, if it is a known one.
    pub fn format_type(&self) -> Option<FormatType> {
        self.header.format_type()
    }

    /// The track count the header declares
    pub const fn track_count(&self) -> u16 {
        self.header.track_count()
    }

    /// Returns the time division
    pub const fn timing(&self) -> &Timing {
        self.header.timing()
    }

    /// Returns the tracks in file order
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Take ownership of the tracks
    pub fn into_tracks(self) -> Vec<Track> {
        self.tracks
    }
}
