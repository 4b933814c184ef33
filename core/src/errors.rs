//! Error taxonomy shared by the accent engines.
//!
//! Three classes matter in practice: broken rule tables (fatal at load time),
//! unclassified input (recoverable, caller decides the fallback), and invalid
//! pattern construction (an engine bug, never bad input).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AccentError {
    /// A downstep outside `[0, mora_count]`. All combination rules preserve
    /// the invariant by construction, so this indicates an engine bug.
    #[error("downstep {downstep} exceeds mora count {mora_count}")]
    InvalidDownstep { downstep: usize, mora_count: usize },

    /// An engine was invoked on an empty morpheme sequence.
    #[error("empty morpheme sequence")]
    EmptyPhrase,

    /// The counter is not present in the category table. Recoverable: the
    /// caller may apply a default pattern or surface the gap.
    #[error("unknown counter `{0}`")]
    UnknownCounter(String),

    /// No reading is available for this numeral value, and the selected rule
    /// needs mora counts. The caller can supply a reading instead.
    #[error("no reading available for numeral {0}")]
    UnknownNumeralReading(u64),

    /// A malformed or missing rule-table entry. Fatal: the table is validated
    /// at load time and never partially applied.
    #[error("rule table error: {0}")]
    RuleTable(String),
}
