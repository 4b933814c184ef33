//! # libtokyo
//!
//! Tokyo-dialect pitch accent realization engine built on libaccent-core.
//!
//! Three cooperating rule engines share the `(mora count, downstep)`
//! representation from core:
//!
//! - [`AccentEngine`] merges a stem with its suffixes via the UniDic F-type
//!   combination rules (conjugated verbs and adjectives).
//! - [`compound::combine_compound`] derives the single accent nucleus of a
//!   noun-noun compound from the second element's length and shape.
//! - [`NumeralAccentEngine`] assigns numeral+counter phrase accent from the
//!   counter category tables, with exact overrides for irregular pairs.
//!
//! [`PhraseAnalyzer`] ties them together over a pre-segmented morpheme
//! stream. Segmentation and rendering stay outside: inputs come from an
//! external morphological analyzer, outputs are bare patterns.
//!
//! Coverage note: compound and numeral accent in Tokyo Japanese carries
//! lexicalized exceptions no length rule predicts; the tables here target
//! the regular system and callers supply an override map for the rest.

pub mod config;
pub mod ftype;
pub mod rules;
pub mod engine;
pub mod compound;
pub mod numeral;
pub mod phrase;

pub use config::{default_heiban_suffixes, TokyoConfig};
pub use engine::{AccentEngine, AccentResult};
pub use compound::{combine_compound, CompoundAccentEngine, CompoundElement, SandhiRule};
pub use ftype::{FRule, FType, ModRule, PosClass};
pub use numeral::{
    classify_counter, CounterCategory, NumeralAccentEngine, NumeralClass, NumeralPhrase, RuleCode,
};
pub use phrase::{AnnotatedWord, PhraseAnalyzer};

// Re-export the core types callers need alongside the engines.
pub use libaccent_core::{AccentError, AccentPattern, AccentShape, Config, Morpheme};
