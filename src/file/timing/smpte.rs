#![doc = r#"
SMPTE frame rates.

A file may measure its delta times in SMPTE frames instead of musical
quarter notes. The header then stores a negative frame-rate code, and an
SMPTE offset meta event may pin a track to an absolute start time. Both use
one of the four rates below.
"#]

/// The frame rates MIDI recognises.
///
/// `TwentyNine` is 29.97 fps NTSC "drop-frame" timecode: no frames are
/// dropped, the numbering skips values to stay aligned with real time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SmpteFps {
    /// 24 frames per second, film
    TwentyFour,
    /// 25 frames per second, PAL/SECAM
    TwentyFive,
    /// 29.97 frames per second (30000/1001), NTSC colour
    TwentyNine,
    /// 30 frames per second
    Thirty,
}

impl SmpteFps {
    /// The nominal integer rate. Drop-frame counts as 30.
    pub const fn as_division(&self) -> u8 {
        match self {
            Self::TwentyFour => 24,
            Self::TwentyFive => 25,
            Self::TwentyNine | Self::Thirty => 30,
        }
    }

    /// The exact rate, including the fractional drop-frame rate.
    pub const fn as_f64(&self) -> f64 {
        match self {
            Self::TwentyFour => 24.,
            Self::TwentyFive => 25.,
            Self::TwentyNine => DROP_FRAME,
            Self::Thirty => 30.,
        }
    }
}

/// 29.97002997... fps
const DROP_FRAME: f64 = 30_000. / 1001.;
