/// Tokyo-dialect configuration that extends the base `Config` from core.
///
/// This configuration includes:
/// - All generic options from `libaccent_core::Config` (flattened via serde)
/// - Toggles for the compound sandhi and numeral rule engines
/// - The special-mora retraction option at compound boundaries
/// - The set of flattening suffixes consulted before compound sandhi
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TokyoConfig {
    /// Base configuration fields (particle rendering, traces, fallbacks).
    #[serde(flatten)]
    pub base: libaccent_core::Config,

    /// Merge consecutive noun morphemes with compound accent sandhi.
    pub use_compound_rules: bool,

    /// Assign numeral+counter phrase accent from the category tables.
    pub use_numeral_rules: bool,

    /// Retract a boundary nucleus off word-final ん/っ/ー and long vowels in
    /// the short-second-element sandhi branch. Off by default: the plain
    /// boundary rule is the documented contract.
    pub shift_off_special_mora: bool,

    /// Second elements that flatten the whole compound (語, 的, 性, ...).
    /// Consulted by the phrase analyzer before sandhi, never by the sandhi
    /// engine itself.
    pub heiban_suffixes: HashSet<String>,
}

impl Default for TokyoConfig {
    fn default() -> Self {
        Self {
            base: libaccent_core::Config::default(),
            use_compound_rules: true,
            use_numeral_rules: true,
            shift_off_special_mora: false,
            heiban_suffixes: default_heiban_suffixes(),
        }
    }
}

impl TokyoConfig {
    /// Convert into the base config.
    pub fn into_base(self) -> libaccent_core::Config {
        self.base
    }

    /// Get a reference to the base config.
    pub fn base(&self) -> &libaccent_core::Config {
        &self.base
    }

    /// Get a mutable reference to the base config.
    pub fn base_mut(&mut self) -> &mut libaccent_core::Config {
        &mut self.base
    }
}

/// The flattening suffixes of Tokyo Japanese (平板化接尾辞): as the second
/// element of a compound these make the whole word heiban.
pub fn default_heiban_suffixes() -> HashSet<String> {
    [
        "語", "色", "的", "性", "化", "家", "者", "員", "式", "用", "中", "内", "外", "上",
        "下", "間", "前", "後", "代", "感",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
