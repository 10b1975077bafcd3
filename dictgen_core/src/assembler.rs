//! `assembler`：把解析结果去重汇总成各个输出视图。
//!
//! 每个视图按各自的键去重，先到先得，保持插入顺序。

use indexmap::{IndexMap, IndexSet};

use crate::model::ResolvedEntry;

/// 无法得到任何编码时，复查视图里代替编码的占位符。
pub const UNPARSED_PLACEHOLDER: &str = "<<<UNPARSED>>>";

/// 重设权重视图使用的固定权重。
pub const FLAT_WEIGHT: i64 = 1;

/// Rime 词典的一行：`text<TAB>code[<TAB>weight]`。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictLine {
    pub text: String,
    pub code: String,
    pub weight: Option<i64>,
}

impl DictLine {
    /// 权重为负时不输出权重列。
    pub fn new(text: impl Into<String>, code: impl Into<String>, weight: i64) -> Self {
        Self {
            text: text.into(),
            code: code.into(),
            weight: (weight >= 0).then_some(weight),
        }
    }

    pub fn with_weight(&self, weight: i64) -> Self {
        Self {
            weight: Some(weight),
            ..self.clone()
        }
    }

    pub fn render(&self, sep: char) -> String {
        match self.weight {
            Some(w) => format!("{}{sep}{}{sep}{w}", self.text, self.code),
            None => format!("{}{sep}{}", self.text, self.code),
        }
    }
}

/// 汇总参数。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssemblerConfig {
    /// 写入全拼/简拼行的权重；为负时不输出权重列
    pub weight: i64,
    /// 简拼编码的最小长度（字符数），不足的不输出
    pub min_abbrev_len: usize,
    /// 列分隔符
    pub field_separator: char,
}

impl Default for AssemblerConfig {
    fn default() -> Self {
        Self {
            weight: 100,
            min_abbrev_len: 999,
            field_separator: '\t',
        }
    }
}

/// 输出视图的种类。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    Full,
    Abbrev,
    Combined,
    Reweighted,
    Ambiguous,
    Words,
    Heteronyms,
}

impl ViewKind {
    pub const ALL: [ViewKind; 7] = [
        ViewKind::Full,
        ViewKind::Abbrev,
        ViewKind::Combined,
        ViewKind::Reweighted,
        ViewKind::Ambiguous,
        ViewKind::Words,
        ViewKind::Heteronyms,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ViewKind::Full => "full",
            ViewKind::Abbrev => "abbrev",
            ViewKind::Combined => "combined",
            ViewKind::Reweighted => "reweighted",
            ViewKind::Ambiguous => "ambiguous",
            ViewKind::Words => "words",
            ViewKind::Heteronyms => "heteronyms",
        }
    }
}

/// 去重累加器。
#[derive(Debug, Clone, Default)]
pub struct DictAssembler {
    config: AssemblerConfig,
    full: IndexMap<(String, String), DictLine>,
    abbrev: IndexMap<(String, String), DictLine>,
    ambiguous: IndexMap<(String, String), DictLine>,
    words: IndexSet<String>,
}

impl DictAssembler {
    pub fn new(config: AssemblerConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &AssemblerConfig {
        &self.config
    }

    /// 记录一个词条文本到纯词表（不论能否注音）。
    pub fn add_word(&mut self, display: &str) {
        if !self.words.contains(display) {
            self.words.insert(display.to_string());
        }
    }

    /// 加入一条解析结果。
    pub fn add_entry(&mut self, entry: &ResolvedEntry) {
        let text = &entry.display_text;
        let res = &entry.resolution;
        let full_code = res.full_code();
        let abbrev_code = res.abbrev_code();
        let weight = self.config.weight;

        if !full_code.is_empty() {
            self.full
                .entry((text.clone(), full_code.clone()))
                .or_insert_with(|| DictLine::new(text.as_str(), full_code.as_str(), weight));
        }
        if !abbrev_code.is_empty() && abbrev_code.chars().count() >= self.config.min_abbrev_len {
            self.abbrev
                .entry((text.clone(), abbrev_code.clone()))
                .or_insert_with(|| DictLine::new(text.as_str(), abbrev_code.as_str(), weight));
        }
        if res.needs_review() {
            self.ambiguous
                .entry((text.clone(), full_code.clone()))
                .or_insert_with(|| {
                    if full_code.is_empty() {
                        DictLine {
                            text: text.clone(),
                            code: UNPARSED_PLACEHOLDER.to_string(),
                            weight: None,
                        }
                    } else {
                        DictLine::new(text.as_str(), full_code.as_str(), weight)
                    }
                });
        }
    }

    pub fn clear(&mut self) {
        self.full.clear();
        self.abbrev.clear();
        self.ambiguous.clear();
        self.words.clear();
    }

    /// 结束汇总，生成全部视图。`heteronyms` 为已排好序的多音字报告行。
    pub fn finish(&self, heteronyms: Vec<String>) -> DictViews {
        let full: Vec<DictLine> = self.full.values().cloned().collect();
        let abbrev: Vec<DictLine> = self.abbrev.values().cloned().collect();
        DictViews {
            field_separator: self.config.field_separator,
            full,
            abbrev,
            ambiguous: self.ambiguous.values().cloned().collect(),
            words: self.words.iter().cloned().collect(),
            heteronyms,
        }
    }
}

/// 汇总结果。合并视图与重设权重视图由全拼、简拼两视图派生。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictViews {
    pub field_separator: char,
    pub full: Vec<DictLine>,
    pub abbrev: Vec<DictLine>,
    pub ambiguous: Vec<DictLine>,
    pub words: Vec<String>,
    pub heteronyms: Vec<String>,
}

impl DictViews {
    /// 全拼行在前，简拼行在后。
    pub fn combined(&self) -> Vec<DictLine> {
        self.full.iter().chain(&self.abbrev).cloned().collect()
    }

    /// 与合并视图相同，但权重一律改为 1（原来没有权重列的补上）。
    pub fn reweighted(&self) -> Vec<DictLine> {
        self.full
            .iter()
            .chain(&self.abbrev)
            .map(|l| l.with_weight(FLAT_WEIGHT))
            .collect()
    }

    /// 某个视图渲染后的行。
    pub fn lines(&self, kind: ViewKind) -> Vec<String> {
        let sep = self.field_separator;
        let render = |ls: &[DictLine]| ls.iter().map(|l| l.render(sep)).collect::<Vec<_>>();
        match kind {
            ViewKind::Full => render(self.full.as_slice()),
            ViewKind::Abbrev => render(self.abbrev.as_slice()),
            ViewKind::Combined => render(self.combined().as_slice()),
            ViewKind::Reweighted => render(self.reweighted().as_slice()),
            ViewKind::Ambiguous => render(self.ambiguous.as_slice()),
            ViewKind::Words => self.words.clone(),
            ViewKind::Heteronyms => self.heteronyms.clone(),
        }
    }

    pub fn line_count(&self, kind: ViewKind) -> usize {
        match kind {
            ViewKind::Full => self.full.len(),
            ViewKind::Abbrev => self.abbrev.len(),
            ViewKind::Combined | ViewKind::Reweighted => self.full.len() + self.abbrev.len(),
            ViewKind::Ambiguous => self.ambiguous.len(),
            ViewKind::Words => self.words.len(),
            ViewKind::Heteronyms => self.heteronyms.len(),
        }
    }

    /// 文件内容：行以 `\n` 连接，非空时以换行结尾。
    pub fn render(&self, kind: ViewKind) -> String {
        render_lines(&self.lines(kind))
    }
}

pub fn render_lines(lines: &[String]) -> String {
    if lines.is_empty() {
        return String::new();
    }
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{NameVariant, Resolution};

    fn entry(display: &str, tokens: &[&str], ambiguous: bool, unresolved: bool) -> ResolvedEntry {
        ResolvedEntry::new(
            NameVariant::new(display, display),
            Resolution {
                tokens: tokens.iter().map(|t| t.to_string()).collect(),
                has_ambiguity: ambiguous,
                has_unresolved: unresolved,
            },
        )
    }

    #[test]
    fn full_view_dedups_by_text_and_code() {
        let mut a = DictAssembler::new(AssemblerConfig::default());
        a.add_entry(&entry("东方", &["dong", "fang"], false, false));
        a.add_entry(&entry("东方", &["dong", "fang"], false, false));
        a.add_entry(&entry("东方", &["dong", "fang", "X"], false, false));
        let v = a.finish(Vec::new());
        assert_eq!(v.lines(ViewKind::Full), ["东方\tdong fang\t100", "东方\tdong fang X\t100"]);
        assert!(v.lines(ViewKind::Abbrev).is_empty());
    }

    #[test]
    fn abbrev_view_respects_min_len() {
        let config = AssemblerConfig {
            min_abbrev_len: 3,
            ..AssemblerConfig::default()
        };
        let mut a = DictAssembler::new(config);
        a.add_entry(&entry("东方", &["dong", "fang"], false, false));
        a.add_entry(&entry("博丽灵梦", &["bo", "li", "ling", "meng"], false, false));
        let v = a.finish(Vec::new());
        assert_eq!(v.lines(ViewKind::Abbrev), ["博丽灵梦\tbllm\t100"]);

        let mut a = DictAssembler::new(AssemblerConfig {
            min_abbrev_len: 0,
            ..AssemblerConfig::default()
        });
        a.add_entry(&entry("空", &[], false, false));
        a.add_entry(&entry("东方", &["dong", "fang"], false, false));
        assert_eq!(a.finish(Vec::new()).lines(ViewKind::Abbrev), ["东方\tdf\t100"]);
    }

    #[test]
    fn combined_and_reweighted_views() {
        let config = AssemblerConfig {
            weight: -1,
            min_abbrev_len: 1,
            ..AssemblerConfig::default()
        };
        let mut a = DictAssembler::new(config);
        a.add_entry(&entry("东方", &["dong", "fang"], false, false));
        let v = a.finish(Vec::new());
        assert_eq!(v.lines(ViewKind::Combined), ["东方\tdong fang", "东方\tdf"]);
        assert_eq!(v.lines(ViewKind::Reweighted), ["东方\tdong fang\t1", "东方\tdf\t1"]);
        assert_eq!(v.line_count(ViewKind::Reweighted), 2);
    }

    #[test]
    fn ambiguous_view_uses_placeholder_without_code() {
        let mut a = DictAssembler::new(AssemblerConfig::default());
        a.add_entry(&entry("朝", &["zhao"], true, false));
        a.add_entry(&entry("！", &[], false, true));
        a.add_entry(&entry("！", &[], false, true));
        a.add_entry(&entry("东方", &["dong", "fang"], false, false));
        let v = a.finish(Vec::new());
        assert_eq!(v.lines(ViewKind::Ambiguous), ["朝\tzhao\t100", "！\t<<<UNPARSED>>>"]);
        assert_eq!(v.lines(ViewKind::Full), ["朝\tzhao\t100", "东方\tdong fang\t100"]);
    }

    #[test]
    fn words_keep_first_occurrence_order() {
        let mut a = DictAssembler::new(AssemblerConfig::default());
        for w in ["b", "a", "b", "c", "a"] {
            a.add_word(w);
        }
        assert_eq!(a.finish(Vec::new()).lines(ViewKind::Words), ["b", "a", "c"]);
    }

    #[test]
    fn render_trailing_newline_only_when_non_empty() {
        assert_eq!(render_lines(&[]), "");
        assert_eq!(render_lines(&["a".to_string(), "b".to_string()]), "a\nb\n");
        let a = DictAssembler::new(AssemblerConfig::default());
        assert_eq!(a.finish(Vec::new()).render(ViewKind::Full), "");
    }

    #[test]
    fn custom_field_separator() {
        let mut a = DictAssembler::new(AssemblerConfig {
            field_separator: ',',
            ..AssemblerConfig::default()
        });
        a.add_entry(&entry("东方", &["dong", "fang"], false, false));
        assert_eq!(a.finish(Vec::new()).render(ViewKind::Full), "东方,dong fang,100\n");
    }
}
