use alloc::{format, string::String, vec::Vec};

use crate::{
    file::{MetaEvent, MetaType, TRACK_CHUNK_ID, Tempo, expect_chunk_id},
    message::{Event, EventKind, RunningStatus},
    reader::{ReadResult, Reader},
};

#[doc = r#"
One decoded `MTrk` chunk.

Besides the ordered events, a track collects what its text meta events say:
the name, instrument name and copyright, plus lyrics/markers and free text
prefixed with the tick they occur on.
"#]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Track {
    name: Option<String>,
    copyright: Option<String>,
    instrument_name: Option<String>,
    lyrics: Vec<String>,
    text: Vec<String>,
    declared_length: u32,
    events: Vec<Event>,
}

impl Track {
    /// An empty track whose chunk header declared `declared_length` bytes
    pub fn new(declared_length: u32) -> Self {
        Self {
            declared_length,
            ..Default::default()
        }
    }

    /// Decode a track chunk.
    ///
    /// Events are read until End of Track, whatever the chunk header says
    /// about the track's length.
    pub(crate) fn read(reader: &mut Reader<'_>) -> ReadResult<Self> {
        expect_chunk_id(reader, TRACK_CHUNK_ID)?;
        let declared_length = reader.read_u32_be()?;
        let start = reader.buffer_position();

        let mut track = Self::new(declared_length);
        let mut status = RunningStatus::default();
        let mut tick: u32 = 0;

        loop {
            tick = tick.saturating_add(reader.read_vlq()?);
            let status_byte = status.resolve(reader)?;

            let Some(kind) = EventKind::read(reader, status_byte)? else {
                continue;
            };
            let done = kind.is_end_of_track();
            track.push(Event::new(tick, kind));
            if done {
                break;
            }
        }

        let consumed = reader.buffer_position() - start;
        if consumed != declared_length as usize {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                declared_length,
                consumed,
                "track length disagrees with the position of End of Track"
            );
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            events = track.events.len(),
            declared_length,
            end_tick = tick,
            "read track"
        );

        Ok(track)
    }

    /// Append an event, updating the text fields for text meta events
    pub fn push(&mut self, event: Event) {
        if let EventKind::Meta(meta) = event.kind() {
            self.apply_text(meta, event.tick());
        }
        self.events.push(event);
    }

    fn apply_text(&mut self, meta: &MetaEvent, tick: u32) {
        let Some(text) = meta.text() else {
            return;
        };
        match meta.kind() {
            MetaType::TrackName => self.name = Some(text),
            MetaType::InstrumentName => self.instrument_name = Some(text),
            MetaType::Copyright => match &mut self.copyright {
                Some(copyright) => copyright.push_str(&text),
                None => self.copyright = Some(text),
            },
            MetaType::Lyrics => self.lyrics.push(format!("{tick} - {text}")),
            MetaType::Marker => self.lyrics.push(format!("{tick} -- {text}")),
            MetaType::Text | MetaType::CuePoint => self.text.push(format!("{tick}: {text}")),
            _ => {}
        }
    }

    /// The last track name set, if any
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Every copyright notice in the track, concatenated
    pub fn copyright(&self) -> Option<&str> {
        self.copyright.as_deref()
    }

    /// The last instrument name set, if any
    pub fn instrument_name(&self) -> Option<&str> {
        self.instrument_name.as_deref()
    }

    /// Lyrics as `"{tick} - {text}"` and markers as `"{tick} -- {text}"`, in order
    pub fn lyrics(&self) -> &[String] {
        &self.lyrics
    }

    /// Text and cue points as `"{tick}: {text}"`, in order
    pub fn text(&self) -> &[String] {
        &self.text
    }

    /// The length from the chunk header. Not used while decoding.
    pub const fn declared_length(&self) -> u32 {
        self.declared_length
    }

    /// The events in order, ending with End of Track
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Take ownership of the events
    pub fn into_events(self) -> Vec<Event> {
        self.events
    }

    /// The tick of the last event
    pub fn end_tick(&self) -> u32 {
        self.events.last().map(Event::tick).unwrap_or(0)
    }

    /// The first tempo set in this track
    pub fn tempo(&self) -> Option<Tempo> {
        self.events
            .iter()
            .find_map(|ev| ev.kind().meta().and_then(MetaEvent::tempo))
    }
}
