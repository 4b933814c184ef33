//! libaccent-core
//!
//! Core accent pattern model, mora counting, morpheme types and configuration
//! shared by dialect-specific crates (libtokyo).
//!
//! The crate holds everything that is true of Japanese pitch accent before a
//! dialect's combination rules enter the picture: the `(mora count, downstep)`
//! representation, mora arithmetic over kana readings, and the morpheme tuple
//! an external morphological analyzer supplies. No segmentation or rendering
//! happens here.
//!
//! Public API:
//! - `AccentPattern` / `AccentShape` - pitch shape of a word or phrase
//! - `Morpheme` - analyzer-supplied morpheme with its accent fields
//! - `mora` - mora counting and special-mora detection
//! - `AccentError` - error taxonomy shared by the engines
//! - `Config` - generic configuration and feature flags
use serde::{Deserialize, Serialize};

pub mod pattern;
pub use pattern::{AccentPattern, AccentShape};

pub mod mora;

pub mod morpheme;
pub use morpheme::Morpheme;

pub mod errors;
pub use errors::AccentError;

/// Generic configuration for accent computation.
///
/// This config contains only dialect-agnostic fields. Dialect-specific options
/// (compound sandhi toggles, suffix sets, etc.) belong in `TokyoConfig` in the
/// dialect crate.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Show the pitch of a following particle mora in rendered L/H patterns.
    /// Heiban and odaka words only differ on that mora.
    pub include_particle: bool,

    /// Record a per-step rule trace in engine results. The same information
    /// is always emitted at `tracing::debug!` level regardless of this flag.
    pub keep_breakdown: bool,

    /// Fall back to a flat (heiban) pattern for unclassified input instead of
    /// handing the gap back to the caller.
    pub default_unknown_heiban: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            include_particle: true,
            keep_breakdown: true,
            default_unknown_heiban: false,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(
        &self,
        path: P,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// Utility helpers.
pub mod utils {
    /// Normalize input strings (NFC) and trim whitespace.
    pub fn normalize(s: &str) -> String {
        use unicode_normalization::UnicodeNormalization;
        s.nfc().collect::<String>().trim().to_string()
    }

    /// Convert katakana to hiragana.
    ///
    /// UniDic emits readings in katakana; the accent engines and the mora
    /// tables work over hiragana. Characters outside the katakana block pass
    /// through unchanged (ー has no hiragana counterpart and stays as is).
    pub fn kata_to_hira(s: &str) -> String {
        s.chars()
            .map(|ch| {
                let code = ch as u32;
                // Katakana ァ..ヶ -> Hiragana ぁ..ゖ
                if (0x30A1..=0x30F6).contains(&code) {
                    char::from_u32(code - 0x60).unwrap_or(ch)
                } else {
                    ch
                }
            })
            .collect()
    }

    /// Convert hiragana to katakana.
    pub fn hira_to_kata(s: &str) -> String {
        s.chars()
            .map(|ch| {
                let code = ch as u32;
                if (0x3041..=0x3096).contains(&code) {
                    char::from_u32(code + 0x60).unwrap_or(ch)
                } else {
                    ch
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_toml_round_trip() {
        let config = Config {
            include_particle: false,
            keep_breakdown: true,
            default_unknown_heiban: true,
        };
        let s = config.to_toml_string().expect("serialize");
        let back = Config::from_toml_str(&s).expect("parse");
        assert!(!back.include_particle);
        assert!(back.keep_breakdown);
        assert!(back.default_unknown_heiban);
    }

    #[test]
    fn kata_to_hira_converts_reading() {
        assert_eq!(utils::kata_to_hira("タベル"), "たべる");
        assert_eq!(utils::kata_to_hira("ニホンゴ"), "にほんご");
        // Prolonged sound mark and non-kana pass through
        assert_eq!(utils::kata_to_hira("コーヒー"), "こーひー");
        assert_eq!(utils::kata_to_hira("abc"), "abc");
    }

    #[test]
    fn hira_to_kata_inverts() {
        assert_eq!(utils::hira_to_kata("たべる"), "タベル");
        assert_eq!(utils::kata_to_hira(&utils::hira_to_kata("きょう")), "きょう");
    }

    #[test]
    fn normalize_trims_and_composes() {
        assert_eq!(utils::normalize("  たべる  "), "たべる");
    }
}
