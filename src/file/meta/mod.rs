#![doc = r#"
Meta events

A meta event is status `0xFF`, a subtype byte, a one-byte length and that
many payload bytes.

```text
FF <subtype> <length> <payload...>
```

Text subtypes (`0x01`-`0x07`) carry a string. The others carry binary
payloads which are kept verbatim; the accessors on [`MetaEvent`] interpret
them on request. Subtypes above `0x07` without a variant of their own
(program name, MIDI port...) are kept as [`MetaType::Other`] with their raw
payload. End of Track (`0x2F`) becomes
[`EventKind::EndOfTrack`](crate::message::EventKind::EndOfTrack) and stops
the track. Sequence Number (`0x00`) is read past and dropped.
"#]

mod smpte_offset;
pub use smpte_offset::*;

mod signature;
pub use signature::*;

mod tempo;
pub use tempo::*;

use alloc::{string::String, vec::Vec};
use num_enum::{FromPrimitive, IntoPrimitive};

use crate::{
    SmpteError,
    message::EventKind,
    reader::{ReadResult, Reader},
};

/// Subtype of the Sequence Number event, which is not recorded
pub const SEQUENCE_NUMBER: u8 = 0x00;

/// The meta subtype byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, IntoPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum MetaType {
    /// `FF 01`: free text
    Text = 0x01,
    /// `FF 02`: copyright notice
    Copyright = 0x02,
    /// `FF 03`: sequence or track name
    TrackName = 0x03,
    /// `FF 04`: instrument name
    InstrumentName = 0x04,
    /// `FF 05`: a lyric syllable
    Lyrics = 0x05,
    /// `FF 06`: rehearsal letter or section name
    Marker = 0x06,
    /// `FF 07`: description of something happening on stage
    CuePoint = 0x07,
    /// `FF 20 01 cc`: channel the following meta/sysex events apply to
    ChannelPrefix = 0x20,
    /// `FF 2F 00`
    EndOfTrack = 0x2F,
    /// `FF 51 03 tttttt`: microseconds per quarter note
    Tempo = 0x51,
    /// `FF 54 05 hr mn se fr ff`
    SmpteOffset = 0x54,
    /// `FF 58 04 nn dd cc bb`
    TimeSignature = 0x58,
    /// `FF 59 02 sf mi`
    KeySignature = 0x59,
    /// `FF 7F len data`: sequencer specific
    SequencerSpecific = 0x7F,
    /// Any other subtype, payload kept raw
    #[num_enum(catch_all)]
    Other(u8),
}

impl MetaType {
    /// True for the subtypes whose payload is a string
    pub const fn is_text(&self) -> bool {
        matches!(
            self,
            Self::Text
                | Self::Copyright
                | Self::TrackName
                | Self::InstrumentName
                | Self::Lyrics
                | Self::Marker
                | Self::CuePoint
        )
    }
}

/// A recorded meta event and its raw payload
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetaEvent {
    kind: MetaType,
    payload: Vec<u8>,
}

impl MetaEvent {
    /// Create a meta event from its subtype and payload
    pub fn new(kind: MetaType, payload: impl Into<Vec<u8>>) -> Self {
        Self {
            kind,
            payload: payload.into(),
        }
    }

    /// Read a meta event after its `0xFF` status byte.
    ///
    /// The length is a single raw byte, not a variable-length quantity.
    pub(crate) fn read(reader: &mut Reader<'_>) -> ReadResult<Option<EventKind>> {
        let subtype = reader.read_u8()?;
        let length = reader.read_u8()?;
        let payload = reader.read_exact(length as usize)?;

        match MetaType::from(subtype) {
            MetaType::EndOfTrack => Ok(Some(EventKind::EndOfTrack)),
            MetaType::Other(SEQUENCE_NUMBER) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(length, "skipping sequence number");
                Ok(None)
            }
            kind => Ok(Some(EventKind::Meta(Self::new(kind, payload)))),
        }
    }

    /// The subtype
    pub const fn kind(&self) -> MetaType {
        self.kind
    }

    /// The payload bytes, exactly as found in the file
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// The payload as a string, for text subtypes.
    ///
    /// Each byte maps to the character with the same code point, so ASCII
    /// reads as ASCII and no byte is ever rejected.
    pub fn text(&self) -> Option<String> {
        self.kind
            .is_text()
            .then(|| self.payload.iter().map(|&b| b as char).collect())
    }

    fn payload_of(&self, kind: MetaType, min_len: usize) -> Option<&[u8]> {
        (self.kind == kind && self.payload.len() >= min_len).then_some(self.payload.as_slice())
    }

    /// The channel of a channel prefix event
    pub fn channel_prefix(&self) -> Option<u8> {
        self.payload_of(MetaType::ChannelPrefix, 1).map(|p| p[0])
    }

    /// The tempo of a tempo event
    pub fn tempo(&self) -> Option<Tempo> {
        self.payload_of(MetaType::Tempo, 3)
            .map(|p| Tempo::new(u32::from_be_bytes([0, p[0], p[1], p[2]])))
    }

    /// The time signature of a time signature event
    pub fn time_signature(&self) -> Option<TimeSignature> {
        self.payload_of(MetaType::TimeSignature, 4)
            .map(|p| TimeSignature::new(p[0], p[1], p[2], p[3]))
    }

    /// The key signature of a key signature event
    pub fn key_signature(&self) -> Option<KeySignature> {
        self.payload_of(MetaType::KeySignature, 2)
            .map(|p| KeySignature::new(p[0] as i8, p[1] != 0))
    }

    /// The SMPTE offset of an SMPTE offset event.
    ///
    /// The outer option is `None` for other subtypes; the inner result
    /// reports an out of range payload.
    pub fn smpte_offset(&self) -> Option<Result<SmpteOffset, SmpteError>> {
        (self.kind == MetaType::SmpteOffset).then(|| SmpteOffset::parse(&self.payload))
    }
}
