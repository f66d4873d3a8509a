/// The payload of a time signature event, `FF 58 04 nn dd cc bb`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeSignature {
    numerator: u8,
    denominator_power: u8,
    clocks_per_click: u8,
    thirty_seconds_per_quarter: u8,
}

impl TimeSignature {
    /// Create a time signature from its four payload bytes
    pub const fn new(
        numerator: u8,
        denominator_power: u8,
        clocks_per_click: u8,
        thirty_seconds_per_quarter: u8,
    ) -> Self {
        Self {
            numerator,
            denominator_power,
            clocks_per_click,
            thirty_seconds_per_quarter,
        }
    }

    /// Beats per bar
    pub const fn numerator(&self) -> u8 {
        self.numerator
    }

    /// The denominator as stored: a power of two
    pub const fn denominator_power(&self) -> u8 {
        self.denominator_power
    }

    /// The note value of one beat (4 for quarter notes, 8 for eighths...)
    pub const fn denominator(&self) -> u32 {
        let power = if self.denominator_power > 31 {
            31
        } else {
            self.denominator_power
        };
        1 << power
    }

    /// MIDI clocks per metronome click
    pub const fn clocks_per_click(&self) -> u8 {
        self.clocks_per_click
    }

    /// Notated 32nd notes per MIDI quarter note (24 clocks)
    pub const fn thirty_seconds_per_quarter(&self) -> u8 {
        self.thirty_seconds_per_quarter
    }
}

/// The payload of a key signature event, `FF 59 02 sf mi`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeySignature {
    accidentals: i8,
    minor: bool,
}

impl KeySignature {
    /// Create a key signature
    pub const fn new(accidentals: i8, minor: bool) -> Self {
        Self { accidentals, minor }
    }

    /// Number of sharps (positive) or flats (negative)
    pub const fn accidentals(&self) -> i8 {
        self.accidentals
    }

    /// True for a minor key
    pub const fn is_minor(&self) -> bool {
        self.minor
    }
}
