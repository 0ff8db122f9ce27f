//! Text rendering of patterns.
//!
//! ```text
//! Saved with HW Version: 0.808-alpha
//! Tempo: 120
//! (0) kick	|x---|x---|x---|x---|
//! (1) snare	|----|x---|----|x---|
//! ```

use std::fmt;

use crate::pattern::{Pattern, Track};

/// Glyph for a hit step.
pub const HIT_GLYPH: char = 'x';

/// Glyph for a rest step.
pub const REST_GLYPH: char = '-';

/// Steps between bar separators.
pub const STEPS_PER_BAR: usize = 4;

/// Glyph for a raw step byte. Bytes other than 0 and 1 have no glyph.
pub fn step_glyph(step: u8) -> Option<char> {
    match step {
        0 => Some(REST_GLYPH),
        1 => Some(HIT_GLYPH),
        _ => None,
    }
}

/// Tempo with no decimals when it is a whole number, one decimal otherwise.
pub fn format_tempo(tempo: f32) -> String {
    if tempo.is_finite() && tempo.fract() == 0.0 {
        format!("{:.0}", tempo)
    } else {
        format!("{:.1}", tempo)
    }
}

/// The `|xxxx|xxxx|xxxx|xxxx|` step grid of a track.
pub fn step_grid(track: &Track) -> String {
    let mut grid = String::with_capacity(track.steps.len() + track.steps.len() / STEPS_PER_BAR + 1);
    grid.push('|');
    for (i, &step) in track.steps.iter().enumerate() {
        if let Some(glyph) = step_glyph(step) {
            grid.push(glyph);
        }
        if (i + 1) % STEPS_PER_BAR == 0 {
            grid.push('|');
        }
    }
    grid
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) {}\t{}", self.id, self.name_lossy(), step_grid(self))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Saved with HW Version: {}", self.version_lossy())?;
        writeln!(f, "Tempo: {}", format_tempo(self.tempo))?;
        for track in &self.tracks {
            writeln!(f, "{}", track)?;
        }
        Ok(())
    }
}
