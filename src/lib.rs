#![doc = r#"
A decoder for Standard MIDI Files (SMF).

Feed the raw bytes of a `.mid` file to [`MidiFile::parse`](crate::file::MidiFile::parse)
and get back the header fields, every track, and each track's events
stamped with their absolute tick.

```rust
# use smf_reader::prelude::*;
let bytes = [
    b'M', b'T', b'h', b'd', 0, 0, 0, 6, 0, 0, 0, 1, 0x00, 0x60,
    b'M', b'T', b'r', b'k', 0, 0, 0, 12,
    0x00, 0x90, 60, 100,
    0x60, 0x80, 60, 0,
    0x00, 0xFF, 0x2F, 0x00,
];

let file = MidiFile::parse(&bytes).unwrap();
assert_eq!(file.timing().ticks_per_quarter_note(), Some(96));

let track = &file.tracks()[0];
assert_eq!(track.events().len(), 3);
assert_eq!(track.events()[1].tick(), 96);
```

# Scope

This crate only reads. There is no playback, no writing of files, and no
conversion of ticks into wall-clock time. Binary meta payloads (tempo, time
signature...) are stored verbatim; [`MetaEvent`](crate::file::MetaEvent)
offers accessors that interpret them on demand.
"#]
#![warn(missing_docs)]
#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod error;
pub use error::*;

pub mod file;
pub mod message;
pub mod reader;

#[doc = r#"
Common re-exports
"#]
pub mod prelude {
    pub use crate::{
        error::*,
        file::*,
        message::*,
        reader::{ReadResult, Reader, ReaderError, ReaderErrorKind},
    };
}
