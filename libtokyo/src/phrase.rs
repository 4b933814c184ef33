//! Phrase-level analyzer over pre-segmented morphemes.
//!
//! Groups an external analyzer's morpheme stream into accent phrases and
//! routes each run to the right engine: numeral+counter phrases, noun
//! compounds, and verb/adjective conjugation chains. Segmentation itself
//! never happens here; this module only consumes its output and only ever
//! returns `(mora count, downstep)` pairs, never rendered strings.
//!
//! Lexicalized-exception policy: the caller-supplied override map and the
//! flattening suffix set are consulted here, before the sandhi engine is
//! invoked, so the engine itself stays free of exception tables.

use ahash::AHashMap;
use libaccent_core::{mora, AccentError, AccentPattern, Morpheme};

use crate::compound::{CompoundAccentEngine, CompoundElement};
use crate::config::TokyoConfig;
use crate::engine::{AccentEngine, AccentResult};
use crate::numeral::NumeralAccentEngine;
use crate::rules::SuffixRuleTable;

/// POS tags treated as content words.
const CONTENT_POS: [&str; 5] = ["動詞", "名詞", "形容詞", "副詞", "代名詞"];

/// POS tags that never carry their own accent phrase.
const SKIP_POS: [&str; 5] = ["助詞", "助動詞", "補助記号", "空白", "記号"];

/// One annotated word in the output stream.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedWord {
    pub surface: String,
    /// Hiragana reading.
    pub reading: String,
    pub pattern: AccentPattern,
    pub pos1: String,
    pub is_content_word: bool,
    /// True when the word was merged from several morphemes.
    pub is_compound: bool,
    /// Names of the rules applied while merging.
    pub rules: Vec<String>,
}

/// Routes morpheme runs to the three engines.
pub struct PhraseAnalyzer {
    suffix: AccentEngine,
    compound: CompoundAccentEngine,
    numeral: NumeralAccentEngine,
    config: TokyoConfig,
    /// Caller-supplied lexicalized compounds, keyed by combined surface.
    overrides: AHashMap<String, AccentPattern>,
}

impl PhraseAnalyzer {
    pub fn new(config: TokyoConfig) -> Self {
        Self::with_rules(SuffixRuleTable::builtin(), config)
    }

    pub fn with_rules(rules: SuffixRuleTable, config: TokyoConfig) -> Self {
        Self {
            suffix: AccentEngine::new(rules, config.base.clone()),
            compound: CompoundAccentEngine::new(&config),
            numeral: NumeralAccentEngine::new(),
            config,
            overrides: AHashMap::new(),
        }
    }

    /// Install the caller's exception map for lexicalized compounds.
    pub fn set_compound_overrides<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (String, AccentPattern)>,
    {
        self.overrides = entries.into_iter().collect();
    }

    /// Annotate a pre-segmented morpheme sequence.
    pub fn annotate(&self, morphemes: &[Morpheme]) -> Result<Vec<AnnotatedWord>, AccentError> {
        if morphemes.is_empty() {
            return Err(AccentError::EmptyPhrase);
        }

        let mut words = Vec::new();
        let mut i = 0;

        while i < morphemes.len() {
            let m = &morphemes[i];

            if Self::noun_like(m) {
                let mut j = i + 1;
                while j < morphemes.len() && Self::noun_like(&morphemes[j]) {
                    j += 1;
                }
                words.push(self.process_noun_run(&morphemes[i..j])?);
                i = j;
                continue;
            }

            if m.pos1 == "動詞" || m.pos1 == "形容詞" {
                let mut j = i + 1;
                while j < morphemes.len() && Self::aux_like(&morphemes[j]) {
                    j += 1;
                }
                let result = self.suffix.compute(&morphemes[i..j])?;
                words.push(Self::from_chain(result, m, j - i > 1));
                i = j;
                continue;
            }

            words.push(self.single_word(m));
            i += 1;
        }

        Ok(words)
    }

    fn noun_like(m: &Morpheme) -> bool {
        m.pos1 == "名詞"
            || m.pos1 == "代名詞"
            || m.pos2 == "数詞"
            || m.pos2 == "助数詞"
            || (m.pos1 == "接尾辞" && m.pos2 == "名詞的")
    }

    fn aux_like(m: &Morpheme) -> bool {
        m.pos1 == "助動詞" || (m.pos1 == "助詞" && m.pos2 == "接続助詞")
    }

    fn is_content_word(m: &Morpheme) -> bool {
        if SKIP_POS.contains(&m.pos1.as_str()) {
            return false;
        }
        m.pos2 == "数詞" || m.pos2 == "助数詞" || CONTENT_POS.contains(&m.pos1.as_str())
    }

    fn single_word(&self, m: &Morpheme) -> AnnotatedWord {
        let accent = m.base_accent().unwrap_or(0);
        AnnotatedWord {
            surface: m.surface.clone(),
            reading: m.reading_hira(),
            pattern: AccentPattern::clamped(m.mora_count(), accent as isize),
            pos1: m.pos1.clone(),
            is_content_word: Self::is_content_word(m),
            is_compound: false,
            rules: Vec::new(),
        }
    }

    fn from_chain(result: AccentResult, first: &Morpheme, merged: bool) -> AnnotatedWord {
        AnnotatedWord {
            surface: result.surface,
            reading: result.reading,
            pattern: result.pattern,
            pos1: first.pos1.clone(),
            is_content_word: true,
            is_compound: merged,
            rules: result.breakdown,
        }
    }

    fn process_noun_run(&self, run: &[Morpheme]) -> Result<AnnotatedWord, AccentError> {
        let Some(first) = run.first() else {
            return Err(AccentError::EmptyPhrase);
        };

        if run.len() == 1 {
            return Ok(self.single_word(first));
        }

        let surface: String = run.iter().map(|m| m.surface.as_str()).collect();
        let reading: String = run.iter().map(|m| m.reading_hira()).collect();

        // Lexicalized exceptions beat every rule engine.
        if let Some(&pattern) = self.overrides.get(&surface) {
            return Ok(AnnotatedWord {
                surface,
                reading,
                pattern,
                pos1: first.pos1.clone(),
                is_content_word: true,
                is_compound: true,
                rules: vec!["override".to_string()],
            });
        }

        let has_numeral = run.iter().any(|m| m.pos2 == "数詞");
        let has_counter = run.iter().any(|m| m.pos2 == "助数詞");

        if has_numeral && has_counter && self.config.use_numeral_rules {
            let numeral_surface: String = run
                .iter()
                .filter(|m| m.pos2 == "数詞")
                .map(|m| m.surface.as_str())
                .collect();
            let counter = run.iter().find(|m| m.pos2 == "助数詞");

            if let (Some(value), Some(counter)) = (numeral_value(&numeral_surface), counter) {
                match self.numeral.phrase_accent(value, &counter.surface) {
                    Ok(p) => {
                        return Ok(AnnotatedWord {
                            surface,
                            reading: p.reading,
                            pattern: p.pattern,
                            pos1: "名詞".to_string(),
                            is_content_word: true,
                            is_compound: true,
                            rules: vec![format!("numeral:{:?}", p.rule)],
                        });
                    }
                    Err(err)
                        if matches!(
                            err,
                            AccentError::UnknownCounter(_)
                                | AccentError::UnknownNumeralReading(_)
                        ) =>
                    {
                        tracing::warn!(%err, "numeral phrase fell back");
                        if self.config.base.default_unknown_heiban {
                            return Ok(AnnotatedWord {
                                pattern: AccentPattern::heiban(mora::count_mora(&reading)),
                                surface,
                                reading,
                                pos1: first.pos1.clone(),
                                is_content_word: true,
                                is_compound: true,
                                rules: vec!["default-heiban".to_string()],
                            });
                        }
                        // Otherwise treat the run as an ordinary compound.
                    }
                    Err(err) => return Err(err),
                }
            }
        }

        if self.config.use_compound_rules {
            return self.fold_compound(run, surface, reading, first);
        }

        // Compound rules disabled: the run keeps the first element's accent.
        let accent = first.base_accent().unwrap_or(0);
        Ok(AnnotatedWord {
            pattern: AccentPattern::clamped(mora::count_mora(&reading), accent as isize),
            surface,
            reading,
            pos1: first.pos1.clone(),
            is_content_word: true,
            is_compound: true,
            rules: Vec::new(),
        })
    }

    fn fold_compound(
        &self,
        run: &[Morpheme],
        surface: String,
        reading: String,
        first: &Morpheme,
    ) -> Result<AnnotatedWord, AccentError> {
        let mut rules = Vec::new();
        let mut acc = Self::element_of(first);

        for m in &run[1..] {
            let next = Self::element_of(m);
            // Flattening suffixes are lexical data, checked before sandhi.
            if self.config.heiban_suffixes.contains(&next.surface) {
                let total = acc.pattern.mora_count() + next.pattern.mora_count();
                acc = CompoundElement::new(
                    format!("{}{}", acc.surface, next.surface),
                    format!("{}{}", acc.reading, next.reading),
                    AccentPattern::heiban(total),
                );
                rules.push("heiban-suffix".to_string());
            } else {
                let (combined, rule) = self.compound.combine(&acc, &next);
                rules.push(rule.to_string());
                acc = combined;
            }
        }

        Ok(AnnotatedWord {
            surface,
            reading,
            pattern: acc.pattern,
            pos1: first.pos1.clone(),
            is_content_word: true,
            is_compound: true,
            rules,
        })
    }

    fn element_of(m: &Morpheme) -> CompoundElement {
        let accent = m.base_accent().unwrap_or(0);
        CompoundElement::new(
            m.surface.clone(),
            m.reading_hira(),
            AccentPattern::clamped(m.mora_count(), accent as isize),
        )
    }
}

/// Extract a numeric value from a numeral surface: ASCII digits, full-width
/// digits, or a single-unit kanji numeral. Anything else is left to the
/// caller's numeral parser.
fn numeral_value(surface: &str) -> Option<u64> {
    let digits: String = surface
        .chars()
        .filter_map(|c| match c {
            '0'..='9' => Some(c),
            '０'..='９' => char::from_u32(c as u32 - 0xFF10 + 0x30),
            _ => None,
        })
        .collect();
    if !digits.is_empty() {
        return digits.parse().ok();
    }

    match surface {
        "一" => Some(1),
        "二" => Some(2),
        "三" => Some(3),
        "四" => Some(4),
        "五" => Some(5),
        "六" => Some(6),
        "七" => Some(7),
        "八" => Some(8),
        "九" => Some(9),
        "十" => Some(10),
        "百" => Some(100),
        "千" => Some(1000),
        "万" => Some(10000),
        _ => None,
    }
}
