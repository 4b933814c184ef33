//! Accent pattern representation.
//!
//! An accent pattern is the canonical description of a word's pitch shape in
//! Tokyo Japanese: its length in morae plus the downstep index, the mora after
//! which pitch falls from high to low. `0` means pitch never falls within the
//! word (heiban).

use serde::{Deserialize, Serialize};

use crate::errors::AccentError;

/// The four accent shape classes, derived from downstep position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccentShape {
    /// Flat: no fall within the word, and none on a following particle.
    Heiban,
    /// Falls after the first mora.
    Atamadaka,
    /// Falls word-internally after a non-initial mora.
    Nakadaka,
    /// Falls after the final mora, i.e. audible only on a following particle.
    Odaka,
}

/// Immutable pitch shape of a word or phrase.
///
/// Invariant: `0 <= downstep <= mora_count`. Combination operations always
/// produce a new pattern; an existing one is never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccentPattern {
    mora_count: usize,
    downstep: usize,
}

impl AccentPattern {
    /// Create a pattern, rejecting a downstep past the end of the word.
    pub fn new(mora_count: usize, downstep: usize) -> Result<Self, AccentError> {
        if downstep > mora_count {
            return Err(AccentError::InvalidDownstep {
                downstep,
                mora_count,
            });
        }
        Ok(Self {
            mora_count,
            downstep,
        })
    }

    /// Flat pattern of the given length.
    pub fn heiban(mora_count: usize) -> Self {
        Self {
            mora_count,
            downstep: 0,
        }
    }

    /// Build a pattern from a computed downstep, saturating into
    /// `[0, mora_count]`.
    ///
    /// Combination rules can produce positions just past the boundary (a
    /// shift onto a zero-mora suffix, or a retraction below zero); the
    /// surface realization caps at the word edges.
    pub fn clamped(mora_count: usize, downstep: isize) -> Self {
        let capped = downstep.clamp(0, mora_count as isize) as usize;
        if capped as isize != downstep {
            tracing::debug!(downstep, mora_count, capped, "downstep clamped to word edge");
        }
        Self {
            mora_count,
            downstep: capped,
        }
    }

    pub fn mora_count(&self) -> usize {
        self.mora_count
    }

    pub fn downstep(&self) -> usize {
        self.downstep
    }

    pub fn is_heiban(&self) -> bool {
        self.downstep == 0
    }

    pub fn is_accented(&self) -> bool {
        self.downstep != 0
    }

    /// Classify into the four shape classes.
    ///
    /// A 1-mora accented word satisfies both the atamadaka and odaka
    /// definitions; the atamadaka reading wins.
    pub fn shape(&self) -> AccentShape {
        match self.downstep {
            0 => AccentShape::Heiban,
            1 => AccentShape::Atamadaka,
            d if d == self.mora_count => AccentShape::Odaka,
            _ => AccentShape::Nakadaka,
        }
    }

    /// Render the L/H pitch letter pattern.
    ///
    /// With `include_particle` an extra position is appended showing the
    /// pitch a following particle would take; this is the only place heiban
    /// and odaka words differ.
    ///
    /// - heiban: `LHHH...H` (stays high through the particle)
    /// - atamadaka: `HLLL...L`
    /// - nakadaka/odaka: `LHH...HL...L`, falling after the downstep mora
    pub fn pitch_string(&self, include_particle: bool) -> String {
        if self.mora_count == 0 {
            return String::new();
        }

        let total = self.mora_count + usize::from(include_particle);

        if self.mora_count == 1 && !include_particle {
            return if self.downstep == 1 { "H" } else { "L" }.to_string();
        }

        match self.downstep {
            0 => format!("L{}", "H".repeat(total - 1)),
            1 => format!("H{}", "L".repeat(total - 1)),
            d => {
                let high = d - 1;
                let low = total - d;
                format!("L{}{}", "H".repeat(high), "L".repeat(low))
            }
        }
    }
}
