use crate::{
    file::{FormatType, HEADER_CHUNK_ID, Timing, expect_chunk_id},
    reader::{ReadResult, Reader},
};

/// The length every `MThd` chunk should declare
pub const HEADER_LENGTH: u32 = 6;

#[doc = r#"
The contents of the `MThd` chunk: format, declared track count and timing.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MidiFileHeader {
    format: u16,
    track_count: u16,
    timing: Timing,
}

impl MidiFileHeader {
    /// Create a new header
    pub const fn new(format: u16, track_count: u16, timing: Timing) -> Self {
        Self {
            format,
            track_count,
            timing,
        }
    }

    /// Reads the header chunk from the start of a file.
    ///
    /// The declared chunk length is read but never used to skip bytes.
    pub(crate) fn read(reader: &mut Reader<'_>) -> ReadResult<Self> {
        expect_chunk_id(reader, HEADER_CHUNK_ID)?;

        let length = reader.read_u32_be()?;
        if length != HEADER_LENGTH {
            #[cfg(feature = "tracing")]
            tracing::warn!(length, "header chunk declares a length other than 6");
        }

        let format = reader.read_u16_be()?;
        let track_count = reader.read_u16_be()?;
        let timing = Timing::read(reader)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(format, track_count, ?timing, "read header");

        Ok(Self::new(format, track_count, timing))
    }

    /// The raw format number (0, 1 or 2 for conforming files)
    pub const fn format(&self) -> u16 {
        self.format
    }

    /// The format as a [`FormatType`], if it is one of the three known ones
    pub fn format_type(&self) -> Option<FormatType> {
        FormatType::try_from(self.format).ok()
    }

    /// The number of track chunks the header announces
    pub const fn track_count(&self) -> u16 {
        self.track_count
    }

    /// Get the timing props
    pub const fn timing(&self) -> &Timing {
        &self.timing
    }
}
