// Ported conjugation accent vectors
//
// These tests exercise the end-to-end suffix combination flow:
//  - base accent from the stem morpheme (aType)
//  - aModType modification
//  - F-type rule lookup (builtin table or analyzer-supplied aConType)
//  - left-to-right chaining over auxiliaries
//
// Vectors mirror the reference engine's test forms; the minimal pair 箸/橋/端
// checks the four shape classes come out of the same machinery.

use libaccent_core::{AccentShape, Config, Morpheme};
use libtokyo::engine::AccentEngine;

fn engine() -> AccentEngine {
    AccentEngine::with_builtin_rules(Config::default())
}

fn stem(surface: &str, reading: &str, pos1: &str, accent: &str) -> Morpheme {
    Morpheme::new(surface, reading)
        .with_pos(pos1, "一般")
        .with_accent(accent)
}

fn aux(surface: &str, reading: &str) -> Morpheme {
    Morpheme::new(surface, reading).with_pos("助動詞", "*")
}

#[test]
fn tabenai_shifts_to_stem_boundary() {
    // 食べる[2] -> 食べない[2]: the negative always lands the nucleus on the
    // stem boundary, LHLL over four morae.
    let result = engine()
        .compute(&[stem("食べ", "タベ", "動詞", "0"), aux("ない", "ナイ")])
        .unwrap();
    assert_eq!(result.surface, "食べない");
    assert_eq!(result.reading, "たべない");
    assert_eq!(result.pattern.mora_count(), 4);
    assert_eq!(result.pattern.downstep(), 2);
    assert_eq!(result.pattern.pitch_string(false), "LHLL");
}

#[test]
fn tabeta_preserves_stem_accent() {
    let result = engine()
        .compute(&[stem("食べ", "タベ", "動詞", "2"), aux("た", "タ")])
        .unwrap();
    assert_eq!(result.pattern.mora_count(), 3);
    assert_eq!(result.pattern.downstep(), 2);
}

#[test]
fn tabete_preserves_stem_accent() {
    let result = engine()
        .compute(&[
            stem("食べ", "タベ", "動詞", "2"),
            Morpheme::new("て", "テ").with_pos("助詞", "接続助詞"),
        ])
        .unwrap();
    assert_eq!(result.pattern.downstep(), 2);
}

#[test]
fn tabemasu_lands_past_boundary() {
    let result = engine()
        .compute(&[stem("食べ", "タベ", "動詞", "0"), aux("ます", "マス")])
        .unwrap();
    assert_eq!(result.pattern.mora_count(), 4);
    assert_eq!(result.pattern.downstep(), 3);
}

#[test]
fn tabetai_lands_past_boundary() {
    let result = engine()
        .compute(&[stem("食べ", "タベ", "動詞", "0"), aux("たい", "タイ")])
        .unwrap();
    assert_eq!(result.pattern.mora_count(), 4);
    assert_eq!(result.pattern.downstep(), 3);
}

#[test]
fn taberareru_offsets_by_two() {
    let result = engine()
        .compute(&[stem("食べ", "タベ", "動詞", "0"), aux("られる", "ラレル")])
        .unwrap();
    assert_eq!(result.pattern.mora_count(), 5);
    assert_eq!(result.pattern.downstep(), 4);
}

#[test]
fn chained_auxiliaries_fold_left_to_right() {
    // 食べませんでした-style chains reuse each step's output as the next stem.
    let result = engine()
        .compute(&[
            stem("食べ", "タベ", "動詞", "0"),
            aux("ます", "マス"),
            aux("た", "タ"),
        ])
        .unwrap();
    assert_eq!(result.pattern.mora_count(), 5);
    assert_eq!(result.pattern.downstep(), 3);
}

#[test]
fn volitional_mod_type_sets_accent() {
    // 書こう: the volitional stem carries M1@2.
    let result = engine()
        .compute(&[stem("書こ", "カコ", "動詞", "0").with_mod_type("M1@2")])
        .unwrap();
    assert_eq!(result.pattern.downstep(), 2);
}

#[test]
fn shortened_stem_mod_type_retracts() {
    let result = engine()
        .compute(&[
            stem("見", "ミ", "動詞", "1").with_mod_type("M4@1"),
            aux("た", "タ"),
        ])
        .unwrap();
    // M4@1 turns the 1-accent stem heiban before た preserves it.
    assert!(result.pattern.is_heiban());
}

#[test]
fn minimal_pair_hashi() {
    let e = engine();

    let hashi1 = e.compute(&[stem("箸", "ハシ", "名詞", "1")]).unwrap();
    assert_eq!(hashi1.pattern.shape(), AccentShape::Atamadaka);
    assert_eq!(hashi1.pattern.pitch_string(true), "HLL");

    let hashi2 = e.compute(&[stem("橋", "ハシ", "名詞", "2")]).unwrap();
    assert_eq!(hashi2.pattern.shape(), AccentShape::Odaka);
    assert_eq!(hashi2.pattern.pitch_string(true), "LHL");

    let hashi0 = e.compute(&[stem("端", "ハシ", "名詞", "0")]).unwrap();
    assert_eq!(hashi0.pattern.shape(), AccentShape::Heiban);
    assert_eq!(hashi0.pattern.pitch_string(true), "LHH");
}

#[test]
fn computation_is_deterministic() {
    let e = engine();
    let chain = [
        stem("食べ", "タベ", "動詞", "0"),
        aux("ます", "マス"),
        aux("た", "タ"),
    ];
    let a = e.compute(&chain).unwrap();
    let b = e.compute(&chain).unwrap();
    assert_eq!(a, b);
}
