//! Numeral + counter accent assignment.
//!
//! Counters are classified into categories (α-ν in the Miyazaki tradition);
//! a two-dimensional table keyed by numeral bucket and counter category
//! selects a rule code, with exact (numeral, category) overrides taking
//! precedence for irregular combinations. The rule code plus the mora counts
//! of the two halves yields the phrase pattern.
//!
//! Reading support here exists only so accent positions can be computed:
//! the boundary alternation table carries the 促音/rendaku/suppletive forms
//! (いっぽん, さんぼん, ひとり, ついたち). General numeral-to-reading
//! conversion is the caller's business; values outside the built-in tables
//! take `phrase_accent_with_reading`.

use once_cell::sync::Lazy;

use ahash::AHashMap;
use libaccent_core::{mora, AccentError, AccentPattern};

/// The closed set of counter categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CounterCategory {
    Alpha,
    Beta,
    Gamma,
    Delta,
    Epsilon,
    Zeta,
    Eta,
    Theta,
    Iota,
    Kappa,
    Lambda,
    Mu,
    Nu,
}

/// Counter surface -> category.
static COUNTER_CATEGORIES: phf::Map<&'static str, CounterCategory> = phf::phf_map! {
    // α - generic counters
    "つ" => CounterCategory::Alpha,
    "個" => CounterCategory::Alpha,
    "枚" => CounterCategory::Alpha,
    // β - 本 group
    "本" => CounterCategory::Beta,
    "杯" => CounterCategory::Beta,
    // γ - buildings
    "階" => CounterCategory::Gamma,
    "軒" => CounterCategory::Gamma,
    // δ - 年 group
    "年" => CounterCategory::Delta,
    "月" => CounterCategory::Delta,
    "週" => CounterCategory::Delta,
    // ε - 回 group
    "回" => CounterCategory::Epsilon,
    "度" => CounterCategory::Epsilon,
    // ζ - clock units
    "分" => CounterCategory::Zeta,
    "秒" => CounterCategory::Zeta,
    // η - currency
    "円" => CounterCategory::Eta,
    // θ - age
    "歳" => CounterCategory::Theta,
    "才" => CounterCategory::Theta,
    // ι - hours
    "時" => CounterCategory::Iota,
    "時間" => CounterCategory::Iota,
    // κ - days
    "日" => CounterCategory::Kappa,
    "日間" => CounterCategory::Kappa,
    // λ - 人 group
    "人" => CounterCategory::Lambda,
    "名" => CounterCategory::Lambda,
    // μ - machines and animals
    "台" => CounterCategory::Mu,
    "匹" => CounterCategory::Mu,
    "頭" => CounterCategory::Mu,
    // ν - ordinals
    "番" => CounterCategory::Nu,
    "号" => CounterCategory::Nu,
};

/// Classify a counter word. `None` means the counter is outside the table;
/// the caller decides how to fall back.
pub fn classify_counter(counter: &str) -> Option<CounterCategory> {
    COUNTER_CATEGORIES.get(counter).copied()
}

/// Numeral value buckets. Accent behavior is regular within a bucket but
/// differs across bucket boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumeralClass {
    One,
    Two,
    Three,
    FourPlus,
    Ten,
    Hundred,
    Thousand,
    Large,
}

impl NumeralClass {
    pub fn of(value: u64) -> Self {
        match value {
            1 => NumeralClass::One,
            2 => NumeralClass::Two,
            3 => NumeralClass::Three,
            4..=9 => NumeralClass::FourPlus,
            10 => NumeralClass::Ten,
            100 => NumeralClass::Hundred,
            1000 => NumeralClass::Thousand,
            _ => NumeralClass::Large,
        }
    }
}

/// What the category table prescribes for a numeral/counter pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleCode {
    /// Ordinary compound-style sandhi at the boundary.
    Sandhi,
    /// Whole phrase heiban.
    Heiban,
    /// Nucleus on the counter's first mora.
    CounterInitial,
    /// Nucleus on the counter's final mora.
    CounterFinal,
    /// Nucleus on the phrase-initial mora (atamadaka).
    Initial,
}

/// Base rule by (numeral bucket, counter category).
pub fn base_rule(class: NumeralClass, category: CounterCategory) -> RuleCode {
    use CounterCategory::*;
    use NumeralClass::*;
    match (class, category) {
        // Values past the bucketed range flatten unless an override says
        // otherwise.
        (Large, _) => RuleCode::Heiban,
        (_, Alpha | Gamma | Theta | Kappa | Mu | Nu | Zeta) => RuleCode::Sandhi,
        (_, Beta | Iota | Lambda) => RuleCode::CounterInitial,
        (_, Delta | Epsilon | Eta) => RuleCode::Heiban,
    }
}

/// Exact (numeral, category) overrides; these beat the bucketed lookup.
static OVERRIDES: Lazy<AHashMap<(u64, CounterCategory), RuleCode>> = Lazy::new(|| {
    use CounterCategory::*;
    let mut m = AHashMap::new();
    // 本 group: the fused/voiced forms take plain boundary sandhi
    for v in [3u64, 6, 8, 10] {
        m.insert((v, Beta), RuleCode::Sandhi);
    }
    // 人: suppletive ひとり/ふたり, flat さんにん/よにん
    m.insert((1, Lambda), RuleCode::Sandhi);
    m.insert((2, Lambda), RuleCode::Sandhi);
    m.insert((3, Lambda), RuleCode::Heiban);
    m.insert((4, Lambda), RuleCode::Heiban);
    // 回 group irregulars
    m.insert((1, Epsilon), RuleCode::CounterInitial);
    for v in [6u64, 8, 10] {
        m.insert((v, Epsilon), RuleCode::Sandhi);
    }
    // 台/匹/頭: numeral 3 is atamadaka
    m.insert((3, Mu), RuleCode::Initial);
    m
});

/// Override for an exact pair, if one is recorded.
pub fn override_rule(value: u64, category: CounterCategory) -> Option<RuleCode> {
    OVERRIDES.get(&(value, category)).copied()
}

/// Resolve the rule for a pair: exact override first, bucketed base second.
pub fn rule_for(value: u64, category: CounterCategory) -> RuleCode {
    override_rule(value, category).unwrap_or_else(|| base_rule(NumeralClass::of(value), category))
}

/// Turn a rule code into a concrete pattern given the two mora counts.
pub fn apply_rule(code: RuleCode, numeral_mora: usize, counter_mora: usize) -> AccentPattern {
    let total = numeral_mora + counter_mora;
    match code {
        RuleCode::Sandhi => {
            if counter_mora <= 2 {
                AccentPattern::clamped(total, numeral_mora as isize)
            } else {
                AccentPattern::clamped(total, numeral_mora as isize + 1)
            }
        }
        RuleCode::Heiban => AccentPattern::heiban(total),
        RuleCode::CounterInitial => AccentPattern::clamped(total, numeral_mora as isize + 1),
        RuleCode::CounterFinal => AccentPattern::clamped(total, total as isize),
        RuleCode::Initial => AccentPattern::clamped(total, 1),
    }
}

/// Numeral readings for the bucketed range.
static NUMERAL_READINGS: phf::Map<u64, &'static str> = phf::phf_map! {
    0u64 => "ゼロ",
    1u64 => "いち",
    2u64 => "に",
    3u64 => "さん",
    4u64 => "よん",
    5u64 => "ご",
    6u64 => "ろく",
    7u64 => "なな",
    8u64 => "はち",
    9u64 => "きゅう",
    10u64 => "じゅう",
    100u64 => "ひゃく",
    1000u64 => "せん",
    10000u64 => "まん",
};

/// Default counter readings.
static COUNTER_READINGS: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "つ" => "つ",
    "個" => "こ",
    "枚" => "まい",
    "本" => "ほん",
    "杯" => "はい",
    "階" => "かい",
    "軒" => "けん",
    "年" => "ねん",
    "月" => "がつ",
    "週" => "しゅう",
    "回" => "かい",
    "度" => "ど",
    "分" => "ふん",
    "秒" => "びょう",
    "円" => "えん",
    "歳" => "さい",
    "才" => "さい",
    "時" => "じ",
    "時間" => "じかん",
    "日" => "にち",
    "日間" => "にちかん",
    "人" => "にん",
    "名" => "めい",
    "台" => "だい",
    "匹" => "ひき",
    "頭" => "とう",
    "番" => "ばん",
    "号" => "ごう",
};

/// Phonological alternations at the numeral-counter boundary: 促音化,
/// rendaku, and suppletive readings, keyed by the exact pair.
fn boundary_alternation(value: u64, counter: &str) -> Option<(&'static str, &'static str)> {
    Some(match (value, counter) {
        // っ insertion
        (1, "本") => ("いっ", "ぽん"),
        (1, "杯") => ("いっ", "ぱい"),
        (1, "回") => ("いっ", "かい"),
        (1, "階") => ("いっ", "かい"),
        (1, "個") => ("いっ", "こ"),
        (1, "歳") | (1, "才") => ("いっ", "さい"),
        (1, "分") => ("いっ", "ぷん"),
        (6, "本") => ("ろっ", "ぽん"),
        (6, "杯") => ("ろっ", "ぱい"),
        (6, "回") => ("ろっ", "かい"),
        (6, "個") => ("ろっ", "こ"),
        (8, "本") => ("はっ", "ぽん"),
        (8, "杯") => ("はっ", "ぱい"),
        (8, "回") => ("はっ", "かい"),
        (8, "歳") | (8, "才") => ("はっ", "さい"),
        (10, "本") => ("じゅっ", "ぽん"),
        (10, "杯") => ("じゅっ", "ぱい"),
        (10, "回") => ("じっ", "かい"),
        (10, "歳") | (10, "才") => ("じゅっ", "さい"),
        // rendaku after ん
        (3, "本") => ("さん", "ぼん"),
        (3, "杯") => ("さん", "ばい"),
        (3, "分") => ("さん", "ぷん"),
        // suppletive 人
        (1, "人") => ("ひと", "り"),
        (2, "人") => ("ふた", "り"),
        (4, "人") => ("よ", "にん"),
        // suppletive dates
        (1, "日") => ("つい", "たち"),
        (2, "日") => ("ふつ", "か"),
        (3, "日") => ("みっ", "か"),
        (4, "日") => ("よっ", "か"),
        (5, "日") => ("いつ", "か"),
        (6, "日") => ("むい", "か"),
        (7, "日") => ("なの", "か"),
        (8, "日") => ("よう", "か"),
        (9, "日") => ("ここの", "か"),
        (10, "日") => ("とお", "か"),
        (14, "日") => ("じゅうよっ", "か"),
        (20, "日") => ("はつ", "か"),
        (24, "日") => ("にじゅうよっ", "か"),
        // clock readings
        (4, "時") => ("よ", "じ"),
        (7, "時") => ("しち", "じ"),
        (9, "時") => ("く", "じ"),
        (4, "年") => ("よ", "ねん"),
        _ => return None,
    })
}

/// Result of a numeral phrase computation.
#[derive(Debug, Clone, PartialEq)]
pub struct NumeralPhrase {
    pub surface: String,
    pub reading: String,
    pub pattern: AccentPattern,
    pub rule: RuleCode,
    pub category: CounterCategory,
}

/// Assigns accent patterns to numeral + counter phrases.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumeralAccentEngine;

impl NumeralAccentEngine {
    pub fn new() -> Self {
        Self
    }

    /// Accent of a numeral + counter phrase, resolving readings from the
    /// built-in tables.
    pub fn phrase_accent(&self, value: u64, counter: &str) -> Result<NumeralPhrase, AccentError> {
        let category = classify_counter(counter)
            .ok_or_else(|| AccentError::UnknownCounter(counter.to_string()))?;
        let (numeral_reading, counter_reading) = self.readings_for(value, counter)?;
        Ok(self.assemble(value, counter, category, &numeral_reading, &counter_reading))
    }

    /// Same, with a caller-supplied numeral reading for values outside the
    /// built-in tables (the caller owns numeral-to-reading conversion).
    pub fn phrase_accent_with_reading(
        &self,
        value: u64,
        numeral_reading: &str,
        counter: &str,
    ) -> Result<NumeralPhrase, AccentError> {
        let category = classify_counter(counter)
            .ok_or_else(|| AccentError::UnknownCounter(counter.to_string()))?;
        let counter_reading = COUNTER_READINGS
            .get(counter)
            .copied()
            .unwrap_or(counter)
            .to_string();
        Ok(self.assemble(value, counter, category, numeral_reading, &counter_reading))
    }

    fn readings_for(&self, value: u64, counter: &str) -> Result<(String, String), AccentError> {
        if let Some((n, c)) = boundary_alternation(value, counter) {
            return Ok((n.to_string(), c.to_string()));
        }
        let numeral = NUMERAL_READINGS
            .get(&value)
            .copied()
            .ok_or(AccentError::UnknownNumeralReading(value))?;
        let counter_reading = COUNTER_READINGS.get(counter).copied().unwrap_or(counter);
        Ok((numeral.to_string(), counter_reading.to_string()))
    }

    fn assemble(
        &self,
        value: u64,
        counter: &str,
        category: CounterCategory,
        numeral_reading: &str,
        counter_reading: &str,
    ) -> NumeralPhrase {
        let code = rule_for(value, category);
        let numeral_mora = mora::count_mora(numeral_reading);
        let counter_mora = mora::count_mora(counter_reading);
        let pattern = apply_rule(code, numeral_mora, counter_mora);

        tracing::debug!(
            value,
            counter,
            category = ?category,
            rule = ?code,
            downstep = pattern.downstep(),
            "numeral phrase accent"
        );

        NumeralPhrase {
            surface: format!("{value}{counter}"),
            reading: format!("{numeral_reading}{counter_reading}"),
            pattern,
            rule: code,
            category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phrase(value: u64, counter: &str) -> NumeralPhrase {
        NumeralAccentEngine::new()
            .phrase_accent(value, counter)
            .expect("phrase accent")
    }

    #[test]
    fn counter_classification() {
        assert_eq!(classify_counter("本"), Some(CounterCategory::Beta));
        assert_eq!(classify_counter("年"), Some(CounterCategory::Delta));
        assert_eq!(classify_counter("人"), Some(CounterCategory::Lambda));
        assert_eq!(classify_counter("膳"), None);
    }

    #[test]
    fn numeral_buckets() {
        assert_eq!(NumeralClass::of(1), NumeralClass::One);
        assert_eq!(NumeralClass::of(3), NumeralClass::Three);
        assert_eq!(NumeralClass::of(7), NumeralClass::FourPlus);
        assert_eq!(NumeralClass::of(10), NumeralClass::Ten);
        assert_eq!(NumeralClass::of(1000), NumeralClass::Thousand);
        assert_eq!(NumeralClass::of(2024), NumeralClass::Large);
    }

    #[test]
    fn override_beats_bucketed_base() {
        // β base is counter-initial, but 3本 takes plain sandhi
        assert_eq!(
            base_rule(NumeralClass::Three, CounterCategory::Beta),
            RuleCode::CounterInitial
        );
        assert_eq!(rule_for(3, CounterCategory::Beta), RuleCode::Sandhi);
        // No override for 5 -> base applies
        assert_eq!(rule_for(5, CounterCategory::Beta), RuleCode::CounterInitial);
    }

    #[test]
    fn year_phrases_are_flat() {
        let p = phrase(1, "年");
        assert_eq!(p.reading, "いちねん");
        assert!(p.pattern.is_heiban());
        assert_eq!(p.pattern.mora_count(), 4);
    }

    #[test]
    fn hon_group_alternations_and_accent() {
        let p = phrase(1, "本");
        assert_eq!(p.reading, "いっぽん");
        assert_eq!(p.rule, RuleCode::CounterInitial);
        assert_eq!(p.pattern.downstep(), 3);

        let p = phrase(3, "本");
        assert_eq!(p.reading, "さんぼん");
        assert_eq!(p.rule, RuleCode::Sandhi);
        assert_eq!(p.pattern.downstep(), 2);

        let p = phrase(6, "本");
        assert_eq!(p.reading, "ろっぽん");
        assert_eq!(p.pattern.downstep(), 2);
    }

    #[test]
    fn people_phrases() {
        // Suppletive readings keep plain sandhi: ひと'り, ふた'り
        let p = phrase(1, "人");
        assert_eq!(p.reading, "ひとり");
        assert_eq!(p.pattern.downstep(), 2);

        let p = phrase(2, "人");
        assert_eq!(p.reading, "ふたり");
        assert_eq!(p.pattern.downstep(), 2);

        let p = phrase(3, "人");
        assert_eq!(p.reading, "さんにん");
        assert!(p.pattern.is_heiban());

        let p = phrase(5, "人");
        assert_eq!(p.reading, "ごにん");
        assert_eq!(p.pattern.downstep(), 2);
    }

    #[test]
    fn atamadaka_override_scenario() {
        // μ category marks numeral 3 atamadaka: downstep 1 regardless of the
        // bucketed base rule.
        assert_eq!(
            base_rule(NumeralClass::Three, CounterCategory::Mu),
            RuleCode::Sandhi
        );
        let p = phrase(3, "台");
        assert_eq!(p.rule, RuleCode::Initial);
        assert_eq!(p.pattern.downstep(), 1);
    }

    #[test]
    fn clock_readings() {
        let p = phrase(4, "時");
        assert_eq!(p.reading, "よじ");
        assert_eq!(p.pattern.downstep(), 2);

        let p = phrase(9, "時");
        assert_eq!(p.reading, "くじ");
    }

    #[test]
    fn date_suppletives_keep_sandhi() {
        let p = phrase(1, "日");
        assert_eq!(p.reading, "ついたち");
        assert_eq!(p.rule, RuleCode::Sandhi);

        let p = phrase(20, "日");
        assert_eq!(p.reading, "はつか");
    }

    #[test]
    fn currency_is_flat() {
        let p = phrase(100, "円");
        assert_eq!(p.reading, "ひゃくえん");
        assert!(p.pattern.is_heiban());
    }

    #[test]
    fn unknown_counter_is_recoverable() {
        let err = NumeralAccentEngine::new()
            .phrase_accent(3, "膳")
            .unwrap_err();
        assert!(matches!(err, AccentError::UnknownCounter(c) if c == "膳"));
    }

    #[test]
    fn unknown_numeral_reading_reported() {
        let err = NumeralAccentEngine::new()
            .phrase_accent(2024, "年")
            .unwrap_err();
        assert!(matches!(err, AccentError::UnknownNumeralReading(2024)));
    }

    #[test]
    fn caller_supplied_reading_for_large_values() {
        let p = NumeralAccentEngine::new()
            .phrase_accent_with_reading(2024, "にせんにじゅうよ", "年")
            .expect("phrase accent");
        assert_eq!(p.reading, "にせんにじゅうよねん");
        assert!(p.pattern.is_heiban());
        assert_eq!(p.pattern.mora_count(), 9);
    }

    #[test]
    fn counter_final_code_lands_on_last_mora() {
        let p = apply_rule(RuleCode::CounterFinal, 2, 2);
        assert_eq!(p.downstep(), 4);
        assert_eq!(p.mora_count(), 4);
    }
}
