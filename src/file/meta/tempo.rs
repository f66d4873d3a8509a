/// The default tempo when a file sets none: 120 beats per minute
pub const DEFAULT_MICROS_PER_QUARTER_NOTE: u32 = 500_000;

/// A tempo, in microseconds per quarter note
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tempo(u32);

impl Default for Tempo {
    fn default() -> Self {
        Self(DEFAULT_MICROS_PER_QUARTER_NOTE)
    }
}

impl Tempo {
    /// Create a tempo. Only the low 24 bits are meaningful in a file.
    pub const fn new(micros_per_quarter_note: u32) -> Self {
        Self(micros_per_quarter_note)
    }

    /// Microseconds per quarter note
    pub const fn micros_per_quarter_note(&self) -> u32 {
        self.0
    }

    /// Quarter notes per minute. Zero for a zero tempo.
    pub fn beats_per_minute(&self) -> f64 {
        if self.0 == 0 {
            return 0.;
        }
        60_000_000. / self.0 as f64
    }
}

#[test]
fn bpm_from_tempo() {
    use pretty_assertions::assert_eq;
    assert_eq!(Tempo::default().beats_per_minute(), 120.);
    assert_eq!(Tempo::new(1_000_000).beats_per_minute(), 60.);
    assert_eq!(Tempo::new(0).beats_per_minute(), 0.);
}
