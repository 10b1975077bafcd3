//! 自定义读音表的 TOML 格式。
//!
//! ```toml
//! [chars]
//! "乐" = "le"
//!
//! [words]
//! "西行寺" = "xi xing si"
//! ```
//!
//! 默认表通过 `include_str!("default_overrides.toml")` 内置。

use std::collections::BTreeMap;

use dictgen_core::{CharOverrides, OverrideError, OverrideTables, WordOverrides};
use serde::Deserialize;

pub const DEFAULT_OVERRIDES_TOML: &str = include_str!("default_overrides.toml");

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct OverrideFile {
    #[serde(default)]
    chars: BTreeMap<String, String>,
    #[serde(default)]
    words: BTreeMap<String, String>,
}

/// 解析 TOML 格式的自定义读音表。
pub fn parse_overrides_toml(toml_str: &str) -> Result<OverrideTables, OverrideError> {
    let file: OverrideFile =
        toml::from_str(toml_str).map_err(|e| OverrideError::Parse(e.to_string()))?;

    let mut chars = CharOverrides::new();
    for (key, token) in file.chars {
        chars.insert_str(&key, token)?;
    }
    let words: WordOverrides = file.words.into_iter().collect();
    Ok(OverrideTables::new(words, chars))
}

/// 内置的默认自定义读音表。
pub fn default_overrides() -> OverrideTables {
    parse_overrides_toml(DEFAULT_OVERRIDES_TOML).expect("embedded override TOML must be valid")
}

pub fn default_toml() -> &'static str {
    DEFAULT_OVERRIDES_TOML
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_defaults_parse() {
        let tables = default_overrides();
        assert_eq!(tables.chars.get('乐'), None);
        assert_eq!(tables.chars.get('长'), Some("zhang"));
        assert_eq!(tables.chars.get('女'), Some("nv"));
        assert_eq!(
            tables.words.get("西行寺").unwrap(),
            ["xi", "xing", "si"]
        );
        assert!(tables.chars.len() > 400);
        assert!(tables.words.len() > 80);
    }

    #[test]
    fn sections_are_optional() {
        let tables = parse_overrides_toml("[words]\n\"空白\" = \"\"\n").unwrap();
        assert!(tables.chars.is_empty());
        assert_eq!(tables.words.get("空白").unwrap().len(), 0);
        assert!(parse_overrides_toml("").unwrap().words.is_empty());
    }

    #[test]
    fn invalid_char_key_is_rejected() {
        let err = parse_overrides_toml("[chars]\n\"乐园\" = \"le\"\n").unwrap_err();
        assert_eq!(err, OverrideError::InvalidChar("乐园".to_string()));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = parse_overrides_toml("[chars\n").unwrap_err();
        assert!(matches!(err, OverrideError::Parse(_)));
        let err = parse_overrides_toml("[extra]\n").unwrap_err();
        assert!(matches!(err, OverrideError::Parse(_)));
    }
}
