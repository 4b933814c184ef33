//! F-type accent combination rules.
//!
//! UniDic tags every suffix with an accent connection field (aConType) naming
//! one of six combination rules F1-F6 plus positional parameters. Given the
//! accent of the preceding element (M1) and its length in morae (N1), each
//! rule is a total function producing the downstep of the combined form:
//!
//! - F1: preserve M1
//! - F2: heiban -> N1+M, otherwise preserve
//! - F3: heiban -> stay heiban, otherwise N1+M
//! - F4: always N1+M
//! - F5: always heiban
//! - F6: heiban -> N1+M, otherwise N1+L
//!
//! The set is closed by linguistic fact; every variant is matched
//! exhaustively. A spec naming anything else fails to parse and is handled
//! as a table error (at load) or unclassified input (at run time).

use once_cell::sync::Lazy;
use regex::Regex;

use libaccent_core::AccentPattern;

/// The closed set of UniDic combination rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FType {
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
}

/// A combination rule with its positional parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FRule {
    pub ftype: FType,
    /// M parameter: offset from the stem boundary. Absent means 0.
    pub m: isize,
    /// L parameter: alternative offset, read only by F6.
    pub l: isize,
}

static FRULE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^F([1-6])(?:@(-?\d+))?(?:@(-?\d+))?$").expect("F-rule regex"));

impl FRule {
    /// Parse a single rule spec like `F2@1` or `F6@0@1`.
    pub fn parse(spec: &str) -> Option<FRule> {
        let caps = FRULE_RE.captures(spec.trim())?;
        let ftype = match &caps[1] {
            "1" => FType::F1,
            "2" => FType::F2,
            "3" => FType::F3,
            "4" => FType::F4,
            "5" => FType::F5,
            "6" => FType::F6,
            _ => return None,
        };
        let m = caps
            .get(2)
            .and_then(|v| v.as_str().parse().ok())
            .unwrap_or(0);
        let l = caps
            .get(3)
            .and_then(|v| v.as_str().parse().ok())
            .unwrap_or(0);
        Some(FRule { ftype, m, l })
    }

    /// Select the rule for a POS class out of a full aConType field like
    /// `動詞%F2@1,形容詞%F1`.
    pub fn for_pos(con_type: &str, pos: PosClass) -> Option<FRule> {
        if con_type.is_empty() || con_type == "*" {
            return None;
        }
        for part in con_type.split(',') {
            let Some((pos_name, spec)) = part.split_once('%') else {
                continue;
            };
            if pos_name.trim() == pos.key() {
                return FRule::parse(spec);
            }
        }
        None
    }

    /// New downstep for `stem` with this suffix attached, before capping into
    /// the combined word. Zero-mora suffixes still shift the downstep.
    pub fn apply(&self, stem: &AccentPattern) -> isize {
        let n1 = stem.mora_count() as isize;
        let m1 = stem.downstep() as isize;
        match self.ftype {
            FType::F1 => m1,
            FType::F2 => {
                if stem.is_heiban() {
                    n1 + self.m
                } else {
                    m1
                }
            }
            FType::F3 => {
                if stem.is_heiban() {
                    0
                } else {
                    n1 + self.m
                }
            }
            FType::F4 => n1 + self.m,
            FType::F5 => 0,
            FType::F6 => {
                if stem.is_heiban() {
                    n1 + self.m
                } else {
                    n1 + self.l
                }
            }
        }
    }
}

/// aModType stem modification, applied to the base accent before any suffix
/// combination. UniDic uses these for shortened and suppletive stems.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModRule {
    /// M4@n: retract an accented stem by n morae; heiban is unaffected.
    Shift(isize),
    /// M1@n: set the accent outright.
    Set(isize),
}

static MODRULE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^M([14])@(-?\d+)$").expect("mod-rule regex"));

impl ModRule {
    pub fn parse(spec: &str) -> Option<ModRule> {
        let caps = MODRULE_RE.captures(spec.trim())?;
        let n: isize = caps[2].parse().ok()?;
        match &caps[1] {
            "4" => Some(ModRule::Shift(n)),
            "1" => Some(ModRule::Set(n)),
            _ => None,
        }
    }

    pub fn apply(&self, base_accent: usize) -> usize {
        match *self {
            ModRule::Shift(n) => {
                if base_accent == 0 {
                    0
                } else {
                    (base_accent as isize - n).max(0) as usize
                }
            }
            ModRule::Set(n) => n.max(0) as usize,
        }
    }
}

/// POS class keying the aConType lookup. The first morpheme of a chain
/// decides which branch of a suffix's rule applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosClass {
    Verb,
    Adjective,
    Noun,
}

impl PosClass {
    pub fn from_pos1(pos1: &str) -> Self {
        if pos1.contains("動詞") {
            PosClass::Verb
        } else if pos1.contains("形容詞") {
            PosClass::Adjective
        } else {
            PosClass::Noun
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            PosClass::Verb => "動詞",
            PosClass::Adjective => "形容詞",
            PosClass::Noun => "名詞",
        }
    }
}
