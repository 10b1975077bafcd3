//! `pipeline`：一次批处理的编排。
//!
//! 流水线：原始词条 -> 人名展开 -> 词条解析（整词 / 切分 / 单字 / 数字）-> 去重汇总 -> 输出视图。
//! 多音字统计由 `DictBuilder` 持有，随批次累加，`reset` 后重新开始。

use tracing::{debug, debug_span, warn};

use crate::assembler::{AssemblerConfig, DictAssembler, DictViews, ViewKind};
use crate::expander::{DEFAULT_NAME_SEPARATOR, NameExpander};
use crate::heteronym::HeteronymTracker;
use crate::lexicon::Lexicon;
use crate::model::ResolvedEntry;
use crate::numeral::NumeralSyllables;
use crate::overrides::{CharOverrides, OverrideTables};
use crate::resolver::EntryResolver;

/// 批处理参数。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    /// 人名分隔符
    pub name_separator: char,
    pub assembler: AssemblerConfig,
    pub numerals: NumeralSyllables,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            name_separator: DEFAULT_NAME_SEPARATOR,
            assembler: AssemblerConfig::default(),
            numerals: NumeralSyllables::default(),
        }
    }
}

/// 各视图行数等统计。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// 送入的原始词条数
    pub raw_entries: usize,
    /// 展开后实际解析的词条数
    pub resolved_entries: usize,
    /// 简拼最小长度（写入摘要便于核对）
    pub min_abbrev_len: usize,
    pub view_lines: Vec<(ViewKind, usize)>,
}

impl Summary {
    pub fn lines(&self, kind: ViewKind) -> usize {
        self.view_lines
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOutput {
    pub views: DictViews,
    pub summary: Summary,
}

/// 词典生成器：持有解析链、汇总器与多音字统计。
pub struct DictBuilder {
    expander: NameExpander,
    resolver: EntryResolver,
    /// 单字自定义的字，多音字报告中排除
    excluded: CharOverrides,
    assembler: DictAssembler,
    tracker: HeteronymTracker,
    raw_entries: usize,
    resolved_entries: usize,
}

impl DictBuilder {
    pub fn new<L: Lexicon + 'static>(tables: OverrideTables, lexicon: L, config: BuildConfig) -> Self {
        let excluded = tables.chars.clone();
        Self {
            expander: NameExpander::new(config.name_separator),
            resolver: EntryResolver::standard(tables, lexicon, config.numerals),
            excluded,
            assembler: DictAssembler::new(config.assembler),
            tracker: HeteronymTracker::new(),
            raw_entries: 0,
            resolved_entries: 0,
        }
    }

    /// 处理一个原始词条，返回展开后每一项的解析结果。
    pub fn add_entry(&mut self, raw: &str) -> Vec<ResolvedEntry> {
        self.raw_entries += 1;
        let variants = self.expander.expand(raw);
        // 纯词表先收全部展开项，再逐项解析
        for v in &variants {
            self.assembler.add_word(&v.display);
        }

        let mut out = Vec::with_capacity(variants.len());
        for v in variants {
            let resolution = self.resolver.resolve(&v.lookup, &mut self.tracker);
            if resolution.full_code().is_empty() {
                warn!(display = %v.display, "entry produced no code");
            } else if resolution.needs_review() {
                debug!(
                    display = %v.display,
                    lookup = %v.lookup,
                    ambiguous = resolution.has_ambiguity,
                    unresolved = resolution.has_unresolved,
                    "entry needs review"
                );
            }
            let entry = ResolvedEntry::new(v, resolution);
            self.assembler.add_entry(&entry);
            self.resolved_entries += 1;
            out.push(entry);
        }
        out
    }

    /// 处理一列（已去重）词条。
    pub fn add_column<I, S>(&mut self, column: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for raw in column {
            self.add_entry(raw.as_ref());
        }
    }

    /// 依次处理所有列并生成输出。
    pub fn build<C, I, S>(&mut self, columns: C) -> BuildOutput
    where
        C: IntoIterator<Item = I>,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let _span = debug_span!("build").entered();
        for column in columns {
            self.add_column(column);
        }
        self.finish()
    }

    /// 以当前累积状态生成输出（不清空状态）。
    pub fn finish(&self) -> BuildOutput {
        let heteronyms = self.tracker.report_lines(|ch| self.excluded.contains(ch));
        let views = self.assembler.finish(heteronyms);
        let summary = Summary {
            raw_entries: self.raw_entries,
            resolved_entries: self.resolved_entries,
            min_abbrev_len: self.assembler.config().min_abbrev_len,
            view_lines: ViewKind::ALL
                .iter()
                .map(|k| (*k, views.line_count(*k)))
                .collect(),
        };
        BuildOutput { views, summary }
    }

    pub fn tracker(&self) -> &HeteronymTracker {
        &self.tracker
    }

    /// 清空统计与已汇总的结果，解析链保持不变。
    pub fn reset(&mut self) {
        self.tracker.reset();
        self.assembler.clear();
        self.raw_entries = 0;
        self.resolved_entries = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overrides::WordOverrides;
    use crate::testutil::MapLexicon;

    fn builder() -> DictBuilder {
        let words: WordOverrides = [("东方灵异传", "dong fang ling yi zhuan")].into_iter().collect();
        let mut chars = CharOverrides::new();
        chars.insert('长', "zhang").unwrap();
        DictBuilder::new(
            OverrideTables::new(words, chars),
            MapLexicon::sample(),
            BuildConfig::default(),
        )
    }

    #[test]
    fn end_to_end_views() {
        let mut b = builder();
        let out = b.build(vec![
            vec!["雾雨·魔理沙", "东方灵异传", "朝"],
            vec!["博丽灵梦", "雾雨", "长!"],
        ]);
        let v = &out.views;
        assert_eq!(
            v.lines(ViewKind::Full),
            [
                "雾雨\twu yu\t100",
                "魔理沙\tmo li sha\t100",
                "雾雨·魔理沙\twu yu\t100",
                "东方灵异传\tdong fang ling yi zhuan\t100",
                "朝\tzhao\t100",
                "博丽灵梦\tbo li ling meng\t100",
                "长!\tzhang\t100",
            ]
        );
        assert!(v.lines(ViewKind::Abbrev).is_empty());
        assert_eq!(v.lines(ViewKind::Ambiguous), ["朝\tzhao\t100", "长!\tzhang\t100"]);
        assert_eq!(
            v.lines(ViewKind::Words),
            ["雾雨", "魔理沙", "雾雨·魔理沙", "东方灵异传", "朝", "博丽灵梦", "长!"]
        );
        assert_eq!(v.lines(ViewKind::Heteronyms), ["朝 zhao chao"]);
        assert_eq!(out.summary.raw_entries, 6);
        assert_eq!(out.summary.resolved_entries, 8);
        assert_eq!(out.summary.lines(ViewKind::Full), 7);
        assert_eq!(out.summary.lines(ViewKind::Reweighted), 7);
    }

    #[test]
    fn duplicate_pairs_appear_once() {
        let mut b = builder();
        let first = b.add_entry("东方");
        let second = b.add_entry("东方");
        assert_eq!(first, second);
        let out = b.finish();
        assert_eq!(out.views.lines(ViewKind::Full), ["东方\tdong fang\t100"]);
        assert_eq!(out.views.lines(ViewKind::Words), ["东方"]);
    }

    #[test]
    fn heteronym_counts_accumulate_across_entries() {
        let mut b = builder();
        for raw in ["朝", "朝着", "着"] {
            b.add_entry(raw);
        }
        assert_eq!(b.tracker().default_count('朝', "zhao"), 2);
        assert_eq!(b.tracker().default_count('着', "zhe"), 2);
        assert!(!b.tracker().contains('长'));
        let out = b.finish();
        assert_eq!(
            out.views.lines(ViewKind::Heteronyms),
            ["朝 zhao chao", "着 zhe zhao zhuo"]
        );
    }

    #[test]
    fn reset_starts_a_fresh_batch() {
        let mut b = builder();
        b.add_entry("朝");
        b.reset();
        assert!(b.tracker().is_empty());
        let out = b.finish();
        assert_eq!(out.summary.raw_entries, 0);
        assert!(out.views.full.is_empty());
    }

    #[test]
    fn blank_entries_are_skipped() {
        let mut b = builder();
        assert!(b.add_entry("   ").is_empty());
        assert!(b.finish().views.words.is_empty());
    }
}
