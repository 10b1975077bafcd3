//! 运行配置：内置默认值 <- 配置文件 <- 命令行参数。
//!
//! 默认值通过 `include_str!("default_config.toml")` 内置；用户配置文件只需写要改的键，
//! 加载时与默认表逐键合并（`[output]` 表也逐键合并）。

use std::path::{Path, PathBuf};

use dictgen_core::{AssemblerConfig, BuildConfig, NumeralSyllables, ViewKind};
use serde::Deserialize;

pub const DEFAULT_CONFIG_TOML: &str = include_str!("default_config.toml");

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("读取配置文件 {} 失败：{source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("配置 TOML 解析失败：{0}")]
    Parse(String),
    #[error("配置项 {field} 无效：{reason}")]
    InvalidValue { field: String, reason: String },
}

/// 各输出视图的文件路径。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputPaths {
    pub full: PathBuf,
    pub abbrev: PathBuf,
    pub combined: PathBuf,
    pub reweighted: PathBuf,
    pub ambiguous: PathBuf,
    pub words: PathBuf,
    pub heteronyms: PathBuf,
}

impl OutputPaths {
    pub fn path(&self, kind: ViewKind) -> &Path {
        match kind {
            ViewKind::Full => &self.full,
            ViewKind::Abbrev => &self.abbrev,
            ViewKind::Combined => &self.combined,
            ViewKind::Reweighted => &self.reweighted,
            ViewKind::Ambiguous => &self.ambiguous,
            ViewKind::Words => &self.words,
            ViewKind::Heteronyms => &self.heteronyms,
        }
    }

    /// 把所有输出放到 `dir` 下，文件名不变。
    pub fn relocate(&mut self, dir: &Path) {
        for p in [
            &mut self.full,
            &mut self.abbrev,
            &mut self.combined,
            &mut self.reweighted,
            &mut self.ambiguous,
            &mut self.words,
            &mut self.heteronyms,
        ] {
            if let Some(name) = p.file_name() {
                *p = dir.join(name);
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub input: PathBuf,
    pub input_delimiter: String,
    pub weight: i64,
    pub min_abbrev_len: usize,
    pub name_separator: String,
    pub field_separator: String,
    #[serde(default)]
    pub overrides: Option<PathBuf>,
    pub output: OutputPaths,
}

impl Default for Config {
    fn default() -> Self {
        parse_config_toml("").expect("embedded config TOML must be valid")
    }
}

impl Config {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        parse_config_toml(&content)
    }

    /// 校验并转成运行参数。入口处调用一次。
    pub fn settings(&self) -> Result<Settings, ConfigError> {
        let name_separator = single_char("name_separator", &self.name_separator)?;
        let field_separator = single_char("field_separator", &self.field_separator)?;
        let delimiter = single_char("input_delimiter", &self.input_delimiter)?;
        let input_delimiter = u8::try_from(delimiter)
            .ok()
            .filter(u8::is_ascii)
            .ok_or_else(|| ConfigError::InvalidValue {
                field: "input_delimiter".to_string(),
                reason: "必须是 ASCII 字符".to_string(),
            })?;
        Ok(Settings {
            input_delimiter,
            build: BuildConfig {
                name_separator,
                assembler: AssemblerConfig {
                    weight: self.weight,
                    min_abbrev_len: self.min_abbrev_len,
                    field_separator,
                },
                numerals: NumeralSyllables::default(),
            },
        })
    }
}

/// 校验后的运行参数。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub input_delimiter: u8,
    pub build: BuildConfig,
}

fn single_char(field: &str, value: &str) -> Result<char, ConfigError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        _ => Err(ConfigError::InvalidValue {
            field: field.to_string(),
            reason: format!("必须恰好是一个字符，实际为 {value:?}"),
        }),
    }
}

/// 解析用户配置：与内置默认值逐键合并。取值校验见 [`Config::settings`]。
pub fn parse_config_toml(toml_str: &str) -> Result<Config, ConfigError> {
    let parse = |s: &str| s.parse::<toml::Table>().map_err(|e| ConfigError::Parse(e.to_string()));
    let mut merged = parse(DEFAULT_CONFIG_TOML)?;
    merge_tables(&mut merged, parse(toml_str)?);
    let config: Config = toml::Value::Table(merged)
        .try_into()
        .map_err(|e: toml::de::Error| ConfigError::Parse(e.to_string()))?;
    Ok(config)
}

fn merge_tables(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        match value {
            toml::Value::Table(o) => {
                if let Some(toml::Value::Table(b)) = base.get_mut(&key) {
                    merge_tables(b, o);
                    continue;
                }
                base.insert(key, toml::Value::Table(o));
            }
            v => {
                base.insert(key, v);
            }
        }
    }
}

pub fn default_toml() -> &'static str {
    DEFAULT_CONFIG_TOML
}
