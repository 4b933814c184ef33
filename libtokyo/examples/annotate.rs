//! Annotate a pre-segmented sentence and print the computed patterns.
//!
//! The morphemes below mirror what a UniDic analyzer would emit for
//! 「安全保障面では3本のペンを食べない。」-style input; segmentation itself
//! is not this library's job.

use libtokyo::{Morpheme, PhraseAnalyzer, TokyoConfig};

fn main() {
    let analyzer = PhraseAnalyzer::new(TokyoConfig::default());

    let morphemes = vec![
        Morpheme::new("安全", "アンゼン")
            .with_pos("名詞", "一般")
            .with_accent("0"),
        Morpheme::new("保障", "ホショウ")
            .with_pos("名詞", "一般")
            .with_accent("0"),
        Morpheme::new("面", "メン")
            .with_pos("名詞", "一般")
            .with_accent("1"),
        Morpheme::new("で", "デ").with_pos("助詞", "格助詞"),
        Morpheme::new("3", "サン").with_pos("名詞", "数詞"),
        Morpheme::new("本", "ホン")
            .with_pos("名詞", "助数詞")
            .with_accent("1"),
        Morpheme::new("の", "ノ").with_pos("助詞", "格助詞"),
        Morpheme::new("食べ", "タベ")
            .with_pos("動詞", "一般")
            .with_accent("0"),
        Morpheme::new("ない", "ナイ").with_pos("助動詞", "*"),
    ];

    let words = analyzer.annotate(&morphemes).expect("annotate");

    for word in words {
        println!(
            "{}\t[{}]\t{}\t{:?}\t{}",
            word.surface,
            word.reading,
            word.pattern.downstep(),
            word.pattern.shape(),
            word.pattern.pitch_string(true),
        );
        for rule in &word.rules {
            println!("\t-> {rule}");
        }
    }
}
