mod smpte;
pub use smpte::*;

use crate::reader::{ReadResult, Reader};

/// The header timing type.
///
/// This is either the number of ticks per quarter note or
/// the alternative SMPTE format, selected by bit 15 of the raw
/// 16-bit division field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Timing {
    /// The midi file's delta times are defined using a tick rate per quarter note
    TicksPerQuarterNote(TicksPerQuarterNote),

    /// The midi file's delta times are defined using an SMPTE and MIDI Time Code
    Smpte(SmpteHeader),
}

impl Timing {
    /// The tickrate per quarter note defines what a "quarter note" means.
    ///
    /// The leading bit of the u16 is disregarded, so 0-32767
    pub const fn new_ticks_per_quarter_note(tpqn: u16) -> Self {
        Self::TicksPerQuarterNote(TicksPerQuarterNote {
            inner: tpqn & 0x7FFF,
        })
    }

    /// Define the timing in terms of the raw frames-per-second code and ticks per frame
    pub const fn new_smpte(frames_per_second: u8, ticks_per_frame: u8) -> Self {
        Self::Smpte(SmpteHeader {
            frames_per_second: frames_per_second & 0x7F,
            ticks_per_frame,
        })
    }

    /// Interpret a raw division field
    pub const fn from_division(division: u16) -> Self {
        let [hi, lo] = division.to_be_bytes();
        match hi >> 7 {
            0 => Self::new_ticks_per_quarter_note(division),
            _ => Self::new_smpte(hi, lo),
        }
    }

    pub(crate) fn read(reader: &mut Reader<'_>) -> ReadResult<Self> {
        reader.read_u16_be().map(Self::from_division)
    }

    /// Returns Some if the midi timing is defined
    /// as ticks per quarter note
    pub const fn ticks_per_quarter_note(&self) -> Option<u16> {
        match self {
            Self::TicksPerQuarterNote(t) => Some(t.ticks_per_quarter_note()),
            _ => None,
        }
    }

    /// Returns Some if the midi timing is defined in SMPTE frames
    pub const fn smpte(&self) -> Option<&SmpteHeader> {
        match self {
            Self::Smpte(s) => Some(s),
            _ => None,
        }
    }
}

/// A representation of the `tpqn` timing for a MIDI file
#[derive(Debug, Clone, PartialEq, Eq, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TicksPerQuarterNote {
    pub(crate) inner: u16,
}
impl TicksPerQuarterNote {
    /// Returns the ticks per quarter note for the file.
    pub const fn ticks_per_quarter_note(&self) -> u16 {
        self.inner
    }
}

/// A representation of the `smpte` timing for a MIDI file
///
/// The frames-per-second code is stored as found in the file, with bit 7
/// masked off. Use [`SmpteHeader::fps`] to map it onto one of the four
/// standard rates.
#[derive(Debug, Clone, PartialEq, Eq, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SmpteHeader {
    pub(crate) frames_per_second: u8,
    pub(crate) ticks_per_frame: u8,
}

impl SmpteHeader {
    /// Returns the raw frames per second code (bits 14 thru 8 of the division)
    pub const fn frames_per_second(&self) -> u8 {
        self.frames_per_second
    }

    /// Returns the ticks per frame
    pub const fn ticks_per_frame(&self) -> u8 {
        self.ticks_per_frame
    }

    /// Interprets the frame code as one of -24, -25, -29 or -30.
    ///
    /// Returns `None` for any other code.
    pub const fn fps(&self) -> Option<SmpteFps> {
        //restore the sign bit that was masked off
        let code = (self.frames_per_second | 0x80) as i8;
        match code {
            -24 => Some(SmpteFps::TwentyFour),
            -25 => Some(SmpteFps::TwentyFive),
            //drop frame (29.97)
            -29 => Some(SmpteFps::TwentyNine),
            -30 => Some(SmpteFps::Thirty),
            _ => None,
        }
    }
}
