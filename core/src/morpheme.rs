//! Morpheme value objects supplied by an external morphological analyzer.
//!
//! Segmentation and dictionary lookup are not this library's job: a UniDic
//! style analyzer hands over one `Morpheme` per unit, carrying the surface,
//! the kana reading, part of speech, and the three accent fields (aType,
//! aConType, aModType) verbatim. The engines only read these values.

use serde::{Deserialize, Serialize};

use crate::{mora, utils};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Morpheme {
    pub surface: String,
    /// Kana reading as the analyzer emits it (katakana in UniDic).
    pub reading: String,
    /// Primary part of speech (動詞, 名詞, 形容詞, 助動詞, ...).
    pub pos1: String,
    /// Secondary part of speech (数詞, 助数詞, 接続助詞, ...).
    pub pos2: String,
    pub lemma: String,
    /// Accent type field (aType): "0", "1", "1,0", or "*".
    pub accent: String,
    /// Accent connection field (aConType), e.g. "動詞%F2@1,形容詞%F1".
    pub con_type: String,
    /// Accent modification field (aModType), e.g. "M4@1".
    pub mod_type: String,
    /// Conjugation type (cType).
    pub c_type: String,
    /// Conjugation form (cForm).
    pub c_form: String,
}

impl Morpheme {
    /// A morpheme with only surface and reading; every analyzer field
    /// defaults to the UniDic "not applicable" marker.
    pub fn new<S: Into<String>, R: Into<String>>(surface: S, reading: R) -> Self {
        let surface = surface.into();
        Self {
            lemma: surface.clone(),
            surface,
            reading: reading.into(),
            pos1: String::new(),
            pos2: String::new(),
            accent: "*".to_string(),
            con_type: "*".to_string(),
            mod_type: "*".to_string(),
            c_type: "*".to_string(),
            c_form: "*".to_string(),
        }
    }

    pub fn with_pos<A: Into<String>, B: Into<String>>(mut self, pos1: A, pos2: B) -> Self {
        self.pos1 = pos1.into();
        self.pos2 = pos2.into();
        self
    }

    pub fn with_accent<S: Into<String>>(mut self, accent: S) -> Self {
        self.accent = accent.into();
        self
    }

    pub fn with_con_type<S: Into<String>>(mut self, con_type: S) -> Self {
        self.con_type = con_type.into();
        self
    }

    pub fn with_mod_type<S: Into<String>>(mut self, mod_type: S) -> Self {
        self.mod_type = mod_type.into();
        self
    }

    /// Base accent from the aType field. Multiple alternatives ("1,0") take
    /// the first; "*" and empty mean the dictionary records none.
    pub fn base_accent(&self) -> Option<usize> {
        if self.accent.is_empty() || self.accent == "*" {
            return None;
        }
        let first = self.accent.split(',').next()?;
        first.trim().parse().ok()
    }

    /// Mora count of the reading.
    pub fn mora_count(&self) -> usize {
        mora::count_mora(&self.reading)
    }

    /// Reading converted to hiragana.
    pub fn reading_hira(&self) -> String {
        utils::kata_to_hira(&self.reading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_accent_parses_atype_variants() {
        let m = Morpheme::new("箸", "ハシ").with_accent("1");
        assert_eq!(m.base_accent(), Some(1));

        let m = Morpheme::new("橋", "ハシ").with_accent("2,0");
        assert_eq!(m.base_accent(), Some(2));

        let m = Morpheme::new("端", "ハシ").with_accent("*");
        assert_eq!(m.base_accent(), None);

        let m = Morpheme::new("x", "x").with_accent("");
        assert_eq!(m.base_accent(), None);
    }

    #[test]
    fn mora_count_uses_reading() {
        let m = Morpheme::new("学校", "ガッコウ");
        assert_eq!(m.mora_count(), 4);
        let m = Morpheme::new("保障", "ホショウ");
        assert_eq!(m.mora_count(), 3);
    }

    #[test]
    fn reading_hira_converts() {
        let m = Morpheme::new("食べ", "タベ");
        assert_eq!(m.reading_hira(), "たべ");
    }
}
