//! Loadable suffix rule table.
//!
//! Rules extracted from a UniDic-style dictionary live in a JSON file keyed
//! by suffix identity; a compact default table ships embedded in the crate.
//! The whole table is validated when loaded: an entry that does not parse is
//! a broken table, not bad input, and fails the load outright.

use std::path::Path;

use ahash::AHashMap;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::ftype::{FRule, ModRule};

fn star() -> String {
    "*".to_string()
}

/// One suffix entry with its accent fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuffixRule {
    pub surface: String,
    #[serde(default)]
    pub pos1: String,
    /// aType of the suffix itself, where the dictionary records one.
    #[serde(default = "star")]
    pub accent: String,
    /// aConType: the combination spec per preceding POS class.
    #[serde(default = "star")]
    pub con_type: String,
    /// aModType carried by the suffix, if any.
    #[serde(default = "star")]
    pub mod_type: String,
}

#[derive(Debug, Deserialize)]
struct RuleFile {
    suffix_rules: AHashMap<String, SuffixRule>,
}

/// Read-only suffix rule table with a secondary index by surface.
#[derive(Debug, Clone, Default)]
pub struct SuffixRuleTable {
    rules: AHashMap<String, SuffixRule>,
    by_surface: AHashMap<String, Vec<String>>,
}

impl SuffixRuleTable {
    /// The table embedded in the crate.
    pub fn builtin() -> Self {
        // Embedded data is validated by tests; a failure here is a broken
        // build, not a runtime condition.
        Self::from_json_str(include_str!("../data/suffix_rules.json"))
            .expect("embedded suffix rule table")
    }

    /// Parse and validate a table from a JSON string.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let parsed: RuleFile =
            serde_json::from_str(content).context("parse suffix rule table")?;
        Self::from_rules(parsed.suffix_rules)
    }

    /// Load a table from a JSON file.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read suffix rule table {}", path.display()))?;
        Self::from_json_str(&content)
    }

    fn from_rules(rules: AHashMap<String, SuffixRule>) -> Result<Self> {
        for (key, rule) in &rules {
            validate_con_type(&rule.con_type)
                .with_context(|| format!("suffix rule `{key}`"))?;
            if !rule.mod_type.is_empty()
                && rule.mod_type != "*"
                && ModRule::parse(&rule.mod_type).is_none()
            {
                bail!(
                    "suffix rule `{key}`: unrecognized modification spec `{}`",
                    rule.mod_type
                );
            }
        }

        let mut by_surface: AHashMap<String, Vec<String>> = AHashMap::new();
        for (key, rule) in &rules {
            by_surface
                .entry(rule.surface.clone())
                .or_default()
                .push(key.clone());
        }

        Ok(Self { rules, by_surface })
    }

    pub fn get(&self, key: &str) -> Option<&SuffixRule> {
        self.rules.get(key)
    }

    /// Look up by surface, preferring an entry with a matching POS.
    pub fn lookup_surface(&self, surface: &str, pos1: &str) -> Option<&SuffixRule> {
        let keys = self.by_surface.get(surface)?;
        let mut fallback = None;
        for key in keys {
            let rule = self.rules.get(key)?;
            if rule.pos1 == pos1 {
                return Some(rule);
            }
            fallback.get_or_insert(rule);
        }
        fallback
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

fn validate_con_type(con_type: &str) -> Result<()> {
    if con_type.is_empty() || con_type == "*" {
        return Ok(());
    }
    let mut usable = 0usize;
    for part in con_type.split(',') {
        let Some((_pos, spec)) = part.split_once('%') else {
            bail!("malformed combination spec `{part}`");
        };
        if FRule::parse(spec).is_none() {
            bail!("unrecognized combination spec `{part}`");
        }
        usable += 1;
    }
    if usable == 0 {
        bail!("no usable combination spec in `{con_type}`");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ftype::PosClass;

    #[test]
    fn builtin_table_loads_and_indexes() {
        let table = SuffixRuleTable::builtin();
        assert!(!table.is_empty());

        let nai = table.lookup_surface("ない", "助動詞").expect("ない entry");
        assert!(FRule::for_pos(&nai.con_type, PosClass::Verb).is_some());
    }

    #[test]
    fn lookup_prefers_pos_match() {
        let json = r#"{
            "suffix_rules": {
                "て:助詞": {"surface": "て", "pos1": "助詞", "con_type": "動詞%F1"},
                "て:助動詞": {"surface": "て", "pos1": "助動詞", "con_type": "動詞%F4"}
            }
        }"#;
        let table = SuffixRuleTable::from_json_str(json).expect("load");
        let hit = table.lookup_surface("て", "助動詞").expect("hit");
        assert_eq!(hit.pos1, "助動詞");
        // Unknown POS still finds something
        assert!(table.lookup_surface("て", "接尾辞").is_some());
        assert!(table.lookup_surface("ぬ", "助動詞").is_none());
    }

    #[test]
    fn malformed_spec_fails_load() {
        let json = r#"{
            "suffix_rules": {
                "x": {"surface": "x", "con_type": "動詞%F9"}
            }
        }"#;
        assert!(SuffixRuleTable::from_json_str(json).is_err());

        let json = r#"{
            "suffix_rules": {
                "x": {"surface": "x", "con_type": "nonsense"}
            }
        }"#;
        assert!(SuffixRuleTable::from_json_str(json).is_err());
    }

    #[test]
    fn bad_mod_type_fails_load() {
        let json = r#"{
            "suffix_rules": {
                "x": {"surface": "x", "mod_type": "M9@1"}
            }
        }"#;
        assert!(SuffixRuleTable::from_json_str(json).is_err());
    }

    #[test]
    fn star_fields_are_fine() {
        let json = r#"{
            "suffix_rules": {
                "x": {"surface": "x"}
            }
        }"#;
        let table = SuffixRuleTable::from_json_str(json).expect("load");
        assert_eq!(table.len(), 1);
    }
}
