#![doc = r#"
Channel voice events

The high nibble of the status byte selects the message, the low nibble the
channel (0-15). Every message carries one or two 7-bit data bytes.

| status | message             | data bytes |
|--------|---------------------|------------|
| `8n`   | Note Off            | 2          |
| `9n`   | Note On             | 2          |
| `An`   | Polyphonic Pressure | 2          |
| `Bn`   | Controller          | 2          |
| `Cn`   | Program Change      | 1          |
| `Dn`   | Channel Pressure    | 1          |
| `En`   | Pitch Bend          | 2          |
"#]

use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::reader::{ReadResult, Reader};

/// The message type encoded in the high nibble of a channel status byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum VoiceKind {
    /// `0x8n`
    NoteOff = 0x80,
    /// `0x9n`
    NoteOn = 0x90,
    /// `0xAn`
    PolyphonicPressure = 0xA0,
    /// `0xBn`
    Controller = 0xB0,
    /// `0xCn`
    ProgramChange = 0xC0,
    /// `0xDn`
    ChannelPressure = 0xD0,
    /// `0xEn`
    PitchBend = 0xE0,
}

impl VoiceKind {
    /// How many data bytes follow the status byte
    pub const fn data_len(&self) -> usize {
        match self {
            Self::ProgramChange | Self::ChannelPressure => 1,
            _ => 2,
        }
    }
}

/// The payload of a channel voice message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VoiceEvent {
    /// Release a note
    NoteOff {
        /// The note number
        note: u8,
        /// Release velocity
        velocity: u8,
    },
    /// Press a note
    NoteOn {
        /// The note number
        note: u8,
        /// Attack velocity. Zero is commonly used in place of a note off.
        velocity: u8,
    },
    /// Aftertouch on a single note
    PolyphonicPressure {
        /// The note number
        note: u8,
        /// Pressure amount
        pressure: u8,
    },
    /// Change a controller value
    Controller {
        /// Controller number
        controller: u8,
        /// New value
        value: u8,
    },
    /// Select a program (patch)
    ProgramChange {
        /// Program number
        program: u8,
    },
    /// Aftertouch applied to the whole channel
    ChannelPressure {
        /// Pressure amount
        pressure: u8,
    },
    /// Bend the pitch of the channel
    PitchBend {
        /// 14-bit value, `0x2000` is centered
        value: u16,
    },
}

impl VoiceEvent {
    /// The message type
    pub const fn kind(&self) -> VoiceKind {
        match self {
            Self::NoteOff { .. } => VoiceKind::NoteOff,
            Self::NoteOn { .. } => VoiceKind::NoteOn,
            Self::PolyphonicPressure { .. } => VoiceKind::PolyphonicPressure,
            Self::Controller { .. } => VoiceKind::Controller,
            Self::ProgramChange { .. } => VoiceKind::ProgramChange,
            Self::ChannelPressure { .. } => VoiceKind::ChannelPressure,
            Self::PitchBend { .. } => VoiceKind::PitchBend,
        }
    }

    /// Read the data bytes for `kind`.
    fn read(reader: &mut Reader<'_>, kind: VoiceKind) -> ReadResult<Self> {
        let first = reader.read_u8()?;
        let ev = match kind {
            VoiceKind::NoteOff => Self::NoteOff {
                note: first,
                velocity: reader.read_u8()?,
            },
            VoiceKind::NoteOn => Self::NoteOn {
                note: first,
                velocity: reader.read_u8()?,
            },
            VoiceKind::PolyphonicPressure => Self::PolyphonicPressure {
                note: first,
                pressure: reader.read_u8()?,
            },
            VoiceKind::Controller => Self::Controller {
                controller: first,
                value: reader.read_u8()?,
            },
            VoiceKind::ProgramChange => Self::ProgramChange { program: first },
            VoiceKind::ChannelPressure => Self::ChannelPressure { pressure: first },
            VoiceKind::PitchBend => {
                // lsb first
                let msb = reader.read_u8()?;
                Self::PitchBend {
                    value: pitch_bend_value(first, msb),
                }
            }
        };
        Ok(ev)
    }
}

/// Combine two 7-bit pitch bend bytes into the 14-bit value
pub const fn pitch_bend_value(lsb: u8, msb: u8) -> u16 {
    ((msb as u16 & 0x7F) << 7) | (lsb as u16 & 0x7F)
}

#[doc = r#"
A channel voice message and the channel it is addressed to
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChannelVoiceEvent {
    channel: u8,
    event: VoiceEvent,
}

impl ChannelVoiceEvent {
    /// Create a new channel voice event. The channel is masked to 0-15.
    pub const fn new(channel: u8, event: VoiceEvent) -> Self {
        Self {
            channel: channel & 0x0F,
            event,
        }
    }

    /// Read the data bytes of a `kind` message addressed to `channel`.
    pub(crate) fn read(reader: &mut Reader<'_>, kind: VoiceKind, channel: u8) -> ReadResult<Self> {
        let event = VoiceEvent::read(reader, kind)?;
        Ok(Self::new(channel, event))
    }

    /// The channel, 0-15
    pub const fn channel(&self) -> u8 {
        self.channel
    }

    /// The message
    pub const fn event(&self) -> &VoiceEvent {
        &self.event
    }

    /// The message type
    pub const fn kind(&self) -> VoiceKind {
        self.event.kind()
    }

    /// The status byte this message would be sent with
    pub fn status(&self) -> u8 {
        u8::from(self.kind()) | self.channel
    }

    /// True for note offs, and for note ons with a velocity of zero.
    pub const fn is_note_off_like(&self) -> bool {
        matches!(
            self.event,
            VoiceEvent::NoteOff { .. } | VoiceEvent::NoteOn { velocity: 0, .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn read(status: u8, data: &[u8]) -> (ChannelVoiceEvent, usize) {
        let mut reader = Reader::from_byte_slice(data);
        let kind = VoiceKind::try_from(status & 0xF0).unwrap();
        let ev = ChannelVoiceEvent::read(&mut reader, kind, status & 0x0F).unwrap();
        (ev, reader.buffer_position())
    }

    #[test]
    fn two_byte_messages() {
        let (ev, read_len) = read(0x93, &[0x3C, 0x64, 0xFF]);
        assert_eq!(read_len, 2);
        assert_eq!(ev.channel(), 3);
        assert_eq!(ev.event(), &VoiceEvent::NoteOn { note: 0x3C, velocity: 0x64 });

        let (ev, _) = read(0x80, &[0x3C, 0x40]);
        assert_eq!(ev.event(), &VoiceEvent::NoteOff { note: 0x3C, velocity: 0x40 });

        let (ev, _) = read(0xAF, &[0x3C, 0x10]);
        assert_eq!(ev.channel(), 15);
        assert_eq!(
            ev.event(),
            &VoiceEvent::PolyphonicPressure { note: 0x3C, pressure: 0x10 }
        );

        let (ev, _) = read(0xB1, &[0x07, 0x7F]);
        assert_eq!(ev.event(), &VoiceEvent::Controller { controller: 7, value: 127 });
        assert_eq!(ev.status(), 0xB1);
    }

    #[test]
    fn one_byte_messages() {
        let (ev, read_len) = read(0xC2, &[0x18, 0x00]);
        assert_eq!(read_len, 1);
        assert_eq!(ev.event(), &VoiceEvent::ProgramChange { program: 0x18 });

        let (ev, read_len) = read(0xD9, &[0x30, 0x00]);
        assert_eq!(read_len, 1);
        assert_eq!(ev.channel(), 9);
        assert_eq!(ev.event(), &VoiceEvent::ChannelPressure { pressure: 0x30 });
    }

    #[test]
    fn pitch_bend_is_lsb_then_msb() {
        let (ev, read_len) = read(0xE0, &[0x00, 0x40]);
        assert_eq!(read_len, 2);
        assert_eq!(ev.event(), &VoiceEvent::PitchBend { value: 0x2000 });

        let (ev, _) = read(0xE4, &[0x7F, 0x7F]);
        assert_eq!(ev.event(), &VoiceEvent::PitchBend { value: 0x3FFF });

        let (ev, _) = read(0xE4, &[0x01, 0x00]);
        assert_eq!(ev.event(), &VoiceEvent::PitchBend { value: 1 });
    }

    #[test]
    fn data_lengths() {
        assert_eq!(VoiceKind::NoteOn.data_len(), 2);
        assert_eq!(VoiceKind::ProgramChange.data_len(), 1);
        assert_eq!(VoiceKind::ChannelPressure.data_len(), 1);
        assert_eq!(VoiceKind::PitchBend.data_len(), 2);
    }

    #[test]
    fn zero_velocity_note_on_stays_note_on() {
        let (ev, _) = read(0x90, &[0x3C, 0x00]);
        assert_eq!(ev.kind(), VoiceKind::NoteOn);
        assert!(ev.is_note_off_like());
    }

    #[test]
    fn truncated_message() {
        let mut reader = Reader::from_byte_slice(&[0x3C]);
        let err = ChannelVoiceEvent::read(&mut reader, VoiceKind::NoteOn, 0).unwrap_err();
        assert!(err.is_out_of_bounds());
        assert_eq!(err.position(), 1);
    }
}
