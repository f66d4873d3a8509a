#![doc = r#"
Track events and the state machine that decodes them.

# Hierarchy
```text
                     |-------|
                     | Event |
                     |-------|
          /          /         \            \
|---------------| |------| |-----------------| |------------|
| Channel Voice | | Meta | | SystemExclusive | | EndOfTrack |
|---------------| |------| |-----------------| |------------|
```

Every event in a track starts with a delta time followed by a status byte.
The status byte may be omitted when it equals the previous one ("running
status"); [`RunningStatus`] tracks that per track.
"#]

pub mod channel;
pub use channel::*;

mod system;

use crate::{
    ParseError,
    file::MetaEvent,
    reader::{ReadResult, Reader, inv_data},
};

/// The status byte announcing a meta event
pub const META_STATUS: u8 = 0xFF;

/// A decoded event, stamped with the absolute tick it occurs on.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event {
    tick: u32,
    kind: EventKind,
}

impl Event {
    /// Create a new event at `tick`
    pub const fn new(tick: u32, kind: EventKind) -> Self {
        Self { tick, kind }
    }

    /// Ticks since the start of the track
    #[inline]
    pub const fn tick(&self) -> u32 {
        self.tick
    }

    /// What happened
    #[inline]
    pub const fn kind(&self) -> &EventKind {
        &self.kind
    }

    /// Take ownership of the event kind
    pub fn into_kind(self) -> EventKind {
        self.kind
    }
}

/// The category of an [`Event`], each carrying only what it needs.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    /// Note on/off, controller, program change, pitch bend...
    ChannelVoice(ChannelVoiceEvent),
    /// A meta event the decoder recognises, with its payload
    Meta(MetaEvent),
    /// A system exclusive (or system common) block. Its bytes are skipped.
    SystemExclusive,
    /// The terminal event of a track
    EndOfTrack,
}

impl EventKind {
    /// Decode the body of an event whose status byte has already been resolved.
    ///
    /// Returns `None` for meta events that are consumed without being recorded.
    pub(crate) fn read(reader: &mut Reader<'_>, status: u8) -> ReadResult<Option<Self>> {
        match status {
            META_STATUS => MetaEvent::read(reader),
            s if s & 0xF0 == 0xF0 => system::skip_system_exclusive(reader).map(Some),
            s => match VoiceKind::try_from(s & 0xF0) {
                Ok(kind) => ChannelVoiceEvent::read(reader, kind, s & 0x0F)
                    .map(|ev| Some(Self::ChannelVoice(ev))),
                Err(_) => Err(inv_data(reader, ParseError::InvalidStatus(s))),
            },
        }
    }

    /// True for [`EventKind::EndOfTrack`]
    pub const fn is_end_of_track(&self) -> bool {
        matches!(self, Self::EndOfTrack)
    }

    /// Returns the channel voice event, if this is one
    pub const fn channel_voice(&self) -> Option<&ChannelVoiceEvent> {
        match self {
            Self::ChannelVoice(ev) => Some(ev),
            _ => None,
        }
    }

    /// Returns the meta event, if this is one
    pub const fn meta(&self) -> Option<&MetaEvent> {
        match self {
            Self::Meta(meta) => Some(meta),
            _ => None,
        }
    }
}

/// The last status byte seen in a track.
///
/// Starts out empty for every track and is dropped when the track ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunningStatus {
    last: Option<u8>,
}

impl RunningStatus {
    /// The status byte currently in effect, if any
    pub const fn last(&self) -> Option<u8> {
        self.last
    }

    /// Read the status byte of the next event.
    ///
    /// A byte with the high bit set becomes the new status. Otherwise it is
    /// the first data byte of an event reusing the previous status: the
    /// reader is moved back over it so the event body can read it again.
    pub fn resolve(&mut self, reader: &mut Reader<'_>) -> ReadResult<u8> {
        let byte = reader.read_u8()?;
        if byte & 0x80 != 0 {
            self.last = Some(byte);
            return Ok(byte);
        }

        reader.rewind(1);
        match self.last {
            Some(status) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(status, position = reader.buffer_position(), "running status");
                Ok(status)
            }
            None => Err(inv_data(reader, ParseError::MissingRunningStatus(byte))),
        }
    }
}
