//! Compound-noun accent sandhi.
//!
//! When two nouns fuse into a tight compound the result carries a single
//! accent nucleus, selected by the mora length of the second element and its
//! accent shape. The first element keeps only its length: its own nucleus is
//! discarded once the boundary is crossed.
//!
//! Lexicalized compounds with memorized accent are outside this engine; the
//! phrase analyzer consults the caller's override map and the flattening
//! suffix set before ever calling in here.

use std::fmt;

use libaccent_core::{mora, AccentError, AccentPattern};

use crate::config::TokyoConfig;

/// One member of a compound: surface, hiragana reading, and its isolated
/// accent pattern (mora count included).
#[derive(Debug, Clone, PartialEq)]
pub struct CompoundElement {
    pub surface: String,
    pub reading: String,
    pub pattern: AccentPattern,
}

impl CompoundElement {
    pub fn new<S: Into<String>, R: Into<String>>(
        surface: S,
        reading: R,
        pattern: AccentPattern,
    ) -> Self {
        Self {
            surface: surface.into(),
            reading: reading.into(),
            pattern,
        }
    }
}

/// Which sandhi branch fired, for traces and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SandhiRule {
    /// N2 of 1-2 morae: nucleus on N1's final mora.
    Boundary,
    /// Boundary nucleus retracted off trailing special morae.
    BoundaryRetracted(usize),
    /// N2 of 3-4 morae, heiban: nucleus on N2's first mora.
    SecondInitial,
    /// N2 of 3-4 morae, accented: N2's nucleus preserved under offset.
    SecondPreserved,
    /// N2 of 5+ morae, accented: N2's nucleus preserved under offset.
    LongPreserved,
    /// N2 of 5+ morae, heiban: the compound stays heiban.
    LongHeiban,
}

impl fmt::Display for SandhiRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SandhiRule::Boundary => write!(f, "boundary"),
            SandhiRule::BoundaryRetracted(n) => write!(f, "boundary-retract{n}"),
            SandhiRule::SecondInitial => write!(f, "n2-initial"),
            SandhiRule::SecondPreserved => write!(f, "n2-preserved"),
            SandhiRule::LongPreserved => write!(f, "n2-preserved-long"),
            SandhiRule::LongHeiban => write!(f, "heiban"),
        }
    }
}

/// Combine two compound elements under the Tokyo length-driven rules.
///
/// Keyed strictly on N2's mora length and accent shape; N1 contributes only
/// its length. The result's mora count is always the sum.
pub fn combine_compound(n1: &CompoundElement, n2: &CompoundElement) -> (CompoundElement, SandhiRule) {
    combine_with(n1, n2, false)
}

pub(crate) fn combine_with(
    n1: &CompoundElement,
    n2: &CompoundElement,
    retract_special: bool,
) -> (CompoundElement, SandhiRule) {
    let n1_len = n1.pattern.mora_count();
    let n2_len = n2.pattern.mora_count();
    let total = n1_len + n2_len;

    let (downstep, rule) = if n2_len <= 2 {
        if retract_special && mora::ends_with_special_mora(&n1.reading) {
            let shift = mora::trailing_special_mora(&n1.reading);
            let retracted = n1_len.saturating_sub(shift).max(1);
            (retracted, SandhiRule::BoundaryRetracted(shift))
        } else {
            (n1_len, SandhiRule::Boundary)
        }
    } else if n2_len <= 4 {
        if n2.pattern.is_heiban() {
            (n1_len + 1, SandhiRule::SecondInitial)
        } else {
            (n1_len + n2.pattern.downstep(), SandhiRule::SecondPreserved)
        }
    } else if n2.pattern.is_heiban() {
        (0, SandhiRule::LongHeiban)
    } else {
        (n1_len + n2.pattern.downstep(), SandhiRule::LongPreserved)
    };

    let combined = CompoundElement {
        surface: format!("{}{}", n1.surface, n2.surface),
        reading: format!("{}{}", n1.reading, n2.reading),
        pattern: AccentPattern::clamped(total, downstep as isize),
    };

    tracing::debug!(
        n1 = %n1.surface,
        n2 = %n2.surface,
        n1_len,
        n2_len,
        rule = %rule,
        downstep = combined.pattern.downstep(),
        "compound sandhi"
    );

    (combined, rule)
}

/// Folds compound elements left to right.
pub struct CompoundAccentEngine {
    retract_special: bool,
}

impl CompoundAccentEngine {
    pub fn new(config: &TokyoConfig) -> Self {
        Self {
            retract_special: config.shift_off_special_mora,
        }
    }

    /// Combine one pair under this engine's configuration.
    pub fn combine(
        &self,
        n1: &CompoundElement,
        n2: &CompoundElement,
    ) -> (CompoundElement, SandhiRule) {
        combine_with(n1, n2, self.retract_special)
    }

    /// Combine 2+ elements with an explicit left-to-right reduction:
    /// `((N1 + N2) + N3) + ...`. The fold order is part of the contract.
    pub fn combine_all(
        &self,
        elements: &[CompoundElement],
    ) -> Result<(CompoundElement, Vec<SandhiRule>), AccentError> {
        let Some(first) = elements.first() else {
            return Err(AccentError::EmptyPhrase);
        };

        let mut acc = first.clone();
        let mut rules = Vec::new();
        for next in &elements[1..] {
            let (combined, rule) = self.combine(&acc, next);
            rules.push(rule);
            acc = combined;
        }
        Ok((acc, rules))
    }
}
