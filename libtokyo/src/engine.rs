//! Suffix combination engine.
//!
//! Computes the accent of an inflected form by chaining F-type rules over a
//! morpheme sequence: the first morpheme contributes its base accent (after
//! any aModType modification), then each following suffix merges via its
//! combination rule, left to right, each step consuming the previous output
//! as its new stem.

use libaccent_core::{AccentError, AccentPattern, Config, Morpheme};

use crate::ftype::{FRule, ModRule, PosClass};
use crate::rules::SuffixRuleTable;

/// Result of a chain computation.
#[derive(Debug, Clone, PartialEq)]
pub struct AccentResult {
    /// The full inflected surface form.
    pub surface: String,
    /// Hiragana reading of the whole form.
    pub reading: String,
    pub pattern: AccentPattern,
    /// Step-by-step computation trace, empty unless `Config::keep_breakdown`.
    pub breakdown: Vec<String>,
}

/// Applies F-type combination rules over morpheme chains.
pub struct AccentEngine {
    rules: SuffixRuleTable,
    config: Config,
}

impl AccentEngine {
    pub fn new(rules: SuffixRuleTable, config: Config) -> Self {
        Self { rules, config }
    }

    /// Engine over the embedded rule table.
    pub fn with_builtin_rules(config: Config) -> Self {
        Self::new(SuffixRuleTable::builtin(), config)
    }

    pub fn rules(&self) -> &SuffixRuleTable {
        &self.rules
    }

    /// Merge one suffix onto a stem pattern.
    ///
    /// The result's mora count is the sum of stem and suffix; the downstep is
    /// the rule's output capped into the combined word. Zero-mora suffixes
    /// leave the length alone but may still move the downstep.
    pub fn combine(stem: &AccentPattern, rule: &FRule, suffix_mora: usize) -> AccentPattern {
        let total = stem.mora_count() + suffix_mora;
        AccentPattern::clamped(total, rule.apply(stem))
    }

    /// Compute the accent of a morpheme chain.
    pub fn compute(&self, morphemes: &[Morpheme]) -> Result<AccentResult, AccentError> {
        let Some(first) = morphemes.first() else {
            return Err(AccentError::EmptyPhrase);
        };

        let mut breakdown = Vec::new();

        let base = first.base_accent().unwrap_or(0);
        let mut accent = base;
        if let Some(mod_rule) = ModRule::parse(&first.mod_type) {
            accent = mod_rule.apply(base);
            breakdown.push(format!(
                "{}: base={base}, {} -> {accent}",
                first.surface, first.mod_type
            ));
        } else {
            breakdown.push(format!("{}: base accent={accent}", first.surface));
        }

        let pos = PosClass::from_pos1(&first.pos1);
        let mut surface = first.surface.clone();
        let mut reading = first.reading_hira();
        let mut pattern = AccentPattern::clamped(first.mora_count(), accent as isize);

        for morph in &morphemes[1..] {
            let suffix_mora = morph.mora_count();

            // The analyzer's own connection field wins; the loaded table
            // backs it up for morphemes the dictionary left unannotated.
            let rule = FRule::for_pos(&morph.con_type, pos).or_else(|| {
                self.rules
                    .lookup_surface(&morph.surface, &morph.pos1)
                    .and_then(|r| FRule::for_pos(&r.con_type, pos))
            });

            match rule {
                Some(rule) => {
                    let prev = pattern;
                    pattern = Self::combine(&pattern, &rule, suffix_mora);
                    tracing::debug!(
                        suffix = %morph.surface,
                        rule = ?rule,
                        n1 = prev.mora_count(),
                        m1 = prev.downstep(),
                        downstep = pattern.downstep(),
                        "applied combination rule"
                    );
                    breakdown.push(format!(
                        "+ {}: {:?}@{} (N1={}, M1={}) -> accent={}",
                        morph.surface,
                        rule.ftype,
                        rule.m,
                        prev.mora_count(),
                        prev.downstep(),
                        pattern.downstep()
                    ));
                }
                None => {
                    pattern = AccentPattern::clamped(
                        pattern.mora_count() + suffix_mora,
                        pattern.downstep() as isize,
                    );
                    tracing::warn!(
                        suffix = %morph.surface,
                        "no combination rule found, preserving accent"
                    );
                    breakdown.push(format!(
                        "+ {}: no rule, preserving accent={}",
                        morph.surface,
                        pattern.downstep()
                    ));
                }
            }

            surface.push_str(&morph.surface);
            reading.push_str(&morph.reading_hira());
        }

        Ok(AccentResult {
            surface,
            reading,
            pattern,
            breakdown: if self.config.keep_breakdown {
                breakdown
            } else {
                Vec::new()
            },
        })
    }
}
