//! `rime-dictgen` 的批处理流程：读配置与读音表 -> 读 CSV -> 生成 -> 写出各视图。
pub mod config;

use std::fs;

use anyhow::Context;
use dictgen_core::{DictBuilder, OverrideTables, Summary, ViewKind};
use dictgen_io::{ColumnReader, write_atomic};
use dictgen_pinyin::{PinyinLexicon, default_overrides, parse_overrides_toml};
use tracing::{info, warn};

pub use config::{Config, ConfigError, OutputPaths, Settings};

/// 读取自定义读音表；未配置时使用内置表。
pub fn load_overrides(config: &Config) -> anyhow::Result<OverrideTables> {
    let Some(path) = &config.overrides else {
        return Ok(default_overrides());
    };
    let content = fs::read_to_string(path)
        .with_context(|| format!("读取自定义读音表 {} 失败", path.display()))?;
    let tables = parse_overrides_toml(&content)
        .with_context(|| format!("自定义读音表 {} 无效", path.display()))?;
    Ok(tables)
}

/// 执行一次完整的生成。输入读取失败时不写出任何文件。
pub fn run(config: &Config) -> anyhow::Result<Summary> {
    let settings = config.settings()?;
    let tables = load_overrides(config)?;
    info!(
        chars = tables.chars.len(),
        words = tables.words.len(),
        "override tables loaded"
    );

    let columns = ColumnReader::new(settings.input_delimiter).read_path(&config.input)?;
    info!(input = %config.input.display(), columns = columns.len(), "input loaded");

    let mut builder = DictBuilder::new(tables, PinyinLexicon::new(), settings.build);
    let output = builder.build(columns);

    for kind in ViewKind::ALL {
        let path = config.output.path(kind);
        write_atomic(path, &output.views.render(kind))?;
        info!(
            view = kind.name(),
            path = %path.display(),
            lines = output.summary.lines(kind),
            "written"
        );
    }

    let summary = output.summary;
    if summary.lines(ViewKind::Full) == 0 {
        warn!("no entry produced a code");
    }
    info!(
        raw_entries = summary.raw_entries,
        resolved_entries = summary.resolved_entries,
        min_abbrev_len = summary.min_abbrev_len,
        review = summary.lines(ViewKind::Ambiguous),
        heteronyms = summary.lines(ViewKind::Heteronyms),
        "done"
    );
    Ok(summary)
}
