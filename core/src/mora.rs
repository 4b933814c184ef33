//! Mora counting and special-mora detection for kana readings.
//!
//! The mora is the timing unit pitch accent is specified over: one kana
//! character, except that small vowels (ゃゅょ etc.) merge into the preceding
//! mora. The sokuon っ carries its own beat and does count. Readings are
//! NFC-normalized before counting so decomposed voicing marks don't inflate
//! the total.

use unicode_normalization::UnicodeNormalization;

/// Small kana that merge into the preceding mora. The sokuon っ/ッ is
/// deliberately absent: it counts as a mora of its own.
const SMALL_KANA: &str = "ぁぃぅぇぉゃゅょゎァィゥェォャュョヮ";

/// Morae that cannot carry an accent nucleus (撥音, 促音, 長音).
const SPECIAL_MORA: &str = "んンっッー";

/// Word-final digraphs read as long vowels.
const LONG_VOWEL_FINALS: [&str; 7] = ["ああ", "いい", "うう", "ええ", "おお", "おう", "えい"];

/// Count morae in a kana reading.
pub fn count_mora(reading: &str) -> usize {
    reading
        .nfc()
        .filter(|c| !SMALL_KANA.contains(*c))
        .count()
}

/// True if the reading ends in a mora that cannot carry an accent nucleus:
/// ん, っ, ー, or the second half of a long vowel.
pub fn ends_with_special_mora(reading: &str) -> bool {
    let chars: Vec<char> = reading.nfc().collect();
    let Some(&last) = chars.last() else {
        return false;
    };
    if SPECIAL_MORA.contains(last) {
        return true;
    }
    if chars.len() >= 2 {
        let tail: String = chars[chars.len() - 2..].iter().collect();
        if LONG_VOWEL_FINALS.contains(&tail.as_str()) {
            return true;
        }
    }
    false
}

/// Number of consecutive special morae (ん/っ/ー) at the end of the reading,
/// used when a boundary accent has to retract onto an accentable mora.
pub fn trailing_special_mora(reading: &str) -> usize {
    reading
        .nfc()
        .collect::<Vec<char>>()
        .iter()
        .rev()
        .take_while(|c| SPECIAL_MORA.contains(**c))
        .count()
}
