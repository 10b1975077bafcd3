//! `resolver`：把一条文本解析成音节 token。
//!
//! 解析按优先级分层，每层要么给出确定结果，要么返回 `None` 交给下一层：
//! - 词条层：整词自定义拼音 -> 切分后逐段解析
//! - 单字层：单字自定义读音 -> 读音词典默认读音（同时记录多音字）

use tracing::debug;

use crate::heteronym::HeteronymTracker;
use crate::lexicon::Lexicon;
use crate::model::{Resolution, SegmentKind};
use crate::numeral::{NumeralSyllables, parse_digits};
use crate::overrides::{CharOverrides, OverrideTables, WordOverrides};
use crate::segmenter::{ScriptSegmenter, Segmenter, is_ideograph};

/// 单个汉字的解析结果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharReading {
    /// 采用的读音；`None` 表示无法给出
    pub token: Option<String>,
    /// 该字是否为多音字
    pub ambiguous: bool,
}

/// 单字层：给出某个汉字的读音，或返回 `None` 交给下一层。
pub trait CharTier: Send + Sync {
    fn resolve_char(&self, ch: char, tracker: &mut HeteronymTracker) -> Option<CharReading>;
}

/// 单字自定义读音。命中时不查词典，也不计入多音字统计。
pub struct CharOverrideTier {
    table: CharOverrides,
}

impl CharOverrideTier {
    pub fn new(table: CharOverrides) -> Self {
        Self { table }
    }
}

impl CharTier for CharOverrideTier {
    fn resolve_char(&self, ch: char, _tracker: &mut HeteronymTracker) -> Option<CharReading> {
        self.table.get(ch).map(|token| CharReading {
            token: Some(token.to_string()),
            ambiguous: false,
        })
    }
}

/// 读音词典：取默认读音，候选多于一个时记录到多音字统计。
pub struct LexiconTier<L> {
    lexicon: L,
}

impl<L: Lexicon> LexiconTier<L> {
    pub fn new(lexicon: L) -> Self {
        Self { lexicon }
    }
}

impl<L: Lexicon> CharTier for LexiconTier<L> {
    fn resolve_char(&self, ch: char, tracker: &mut HeteronymTracker) -> Option<CharReading> {
        let candidates = self.lexicon.all_readings(ch);
        if candidates.is_empty() {
            return Some(CharReading {
                token: None,
                ambiguous: false,
            });
        }
        let default = self.lexicon.default_reading(ch);
        let ambiguous = candidates.len() > 1;
        if ambiguous {
            tracker.record(ch, &candidates, default.as_deref());
        }
        Some(CharReading {
            token: default,
            ambiguous,
        })
    }
}

/// 汉字串解析器：逐字走单字层链，先命中者为准。
pub struct CharResolver {
    tiers: Vec<Box<dyn CharTier>>,
}

impl CharResolver {
    pub fn with_tiers(tiers: Vec<Box<dyn CharTier>>) -> Self {
        Self { tiers }
    }

    /// 标准链：单字自定义 -> 读音词典。
    pub fn standard<L: Lexicon + 'static>(chars: CharOverrides, lexicon: L) -> Self {
        Self::with_tiers(vec![
            Box::new(CharOverrideTier::new(chars)),
            Box::new(LexiconTier::new(lexicon)),
        ])
    }

    /// 解析一段汉字。每个字至多贡献一个 token。
    pub fn resolve_ideographs(&self, text: &str, tracker: &mut HeteronymTracker) -> Resolution {
        let mut out = Resolution::default();
        for ch in text.chars().filter(|c| is_ideograph(*c)) {
            let reading = self
                .tiers
                .iter()
                .find_map(|tier| tier.resolve_char(ch, tracker));
            match reading {
                Some(CharReading { token, ambiguous }) => {
                    out.has_ambiguity |= ambiguous;
                    match token {
                        Some(t) => out.tokens.push(t),
                        None => out.has_unresolved = true,
                    }
                }
                None => out.has_unresolved = true,
            }
        }
        out
    }
}

/// 词条层：整条文本的解析，或返回 `None` 交给下一层。
pub trait EntryTier: Send + Sync {
    fn resolve_entry(&self, text: &str, tracker: &mut HeteronymTracker) -> Option<Resolution>;
}

/// 整词自定义拼音：原样返回，不做任何大小写处理。
pub struct WordOverrideTier {
    table: WordOverrides,
}

impl WordOverrideTier {
    pub fn new(table: WordOverrides) -> Self {
        Self { table }
    }
}

impl EntryTier for WordOverrideTier {
    fn resolve_entry(&self, text: &str, _tracker: &mut HeteronymTracker) -> Option<Resolution> {
        let tokens = self.table.get(text)?;
        debug!(text, "whole-entry override");
        Some(Resolution::from_tokens(tokens.to_vec()))
    }
}

/// 切分后逐段解析：汉字 / 数字 / 英文（转大写）/ 其他（记为未解析）。
pub struct SegmentTier {
    segmenter: Box<dyn Segmenter>,
    chars: CharResolver,
    numerals: NumeralSyllables,
}

impl SegmentTier {
    pub fn new(chars: CharResolver, numerals: NumeralSyllables) -> Self {
        Self {
            segmenter: Box::new(ScriptSegmenter),
            chars,
            numerals,
        }
    }

    pub fn segmenter(mut self, segmenter: impl Segmenter + 'static) -> Self {
        self.segmenter = Box::new(segmenter);
        self
    }

    fn resolve_numeral(&self, digits: &str) -> Resolution {
        let syllables = parse_digits(digits).and_then(|n| self.numerals.to_syllables(n).ok());
        match syllables {
            Some(tokens) => Resolution::from_tokens(tokens),
            None => {
                debug!(digits, "numeral out of range");
                Resolution::unresolved()
            }
        }
    }
}

impl EntryTier for SegmentTier {
    fn resolve_entry(&self, text: &str, tracker: &mut HeteronymTracker) -> Option<Resolution> {
        let mut out = Resolution::default();
        for seg in self.segmenter.segment(text) {
            let part = match seg.kind {
                SegmentKind::Ideograph => self.chars.resolve_ideographs(&seg.text, tracker),
                SegmentKind::Numeral => self.resolve_numeral(&seg.text),
                SegmentKind::Latin => Resolution::from_tokens(vec![seg.text.to_ascii_uppercase()]),
                SegmentKind::Other => Resolution::unresolved(),
            };
            out.absorb(part);
        }
        Some(out)
    }
}

/// 词条解析器：按顺序尝试各词条层，先命中者为准。
pub struct EntryResolver {
    tiers: Vec<Box<dyn EntryTier>>,
}

impl EntryResolver {
    pub fn with_tiers(tiers: Vec<Box<dyn EntryTier>>) -> Self {
        Self { tiers }
    }

    /// 标准链：整词自定义 -> 切分解析（单字自定义 -> 读音词典）。
    pub fn standard<L: Lexicon + 'static>(
        tables: OverrideTables,
        lexicon: L,
        numerals: NumeralSyllables,
    ) -> Self {
        let chars = CharResolver::standard(tables.chars, lexicon);
        Self::with_tiers(vec![
            Box::new(WordOverrideTier::new(tables.words)),
            Box::new(SegmentTier::new(chars, numerals)),
        ])
    }

    pub fn resolve(&self, text: &str, tracker: &mut HeteronymTracker) -> Resolution {
        self.tiers
            .iter()
            .find_map(|tier| tier.resolve_entry(text, tracker))
            .unwrap_or_else(Resolution::unresolved)
    }
}
