//! `segmenter`：把一条文本切成按字符类别划分的连续段。
//!
//! 切分是全函数：任意输入都能切，且各段文本按序拼接后与原文完全一致。

use crate::model::{Segment, SegmentKind};

/// 判断是否为 CJK 统一汉字（基本区）。
pub fn is_ideograph(ch: char) -> bool {
    ('\u{4e00}'..='\u{9fff}').contains(&ch)
}

/// 十进制数字的值：半角 `0-9` 与全角 `０-９`。
pub fn decimal_value(ch: char) -> Option<u32> {
    match ch {
        '0'..='9' => ch.to_digit(10),
        '\u{ff10}'..='\u{ff19}' => Some(ch as u32 - 0xff10),
        _ => None,
    }
}

/// 单个字符的类别。
pub fn classify(ch: char) -> SegmentKind {
    if is_ideograph(ch) {
        SegmentKind::Ideograph
    } else if decimal_value(ch).is_some() {
        SegmentKind::Numeral
    } else if ch.is_ascii_alphabetic() {
        SegmentKind::Latin
    } else {
        SegmentKind::Other
    }
}

/// Segmenter：把文本切分为 `Segment` 序列。
pub trait Segmenter: Send + Sync {
    fn segment(&self, text: &str) -> Vec<Segment>;
}

/// 按字符类别做最长匹配的切分器（单次从左到右扫描，不回溯）。
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptSegmenter;

impl Segmenter for ScriptSegmenter {
    fn segment(&self, text: &str) -> Vec<Segment> {
        segment(text)
    }
}

pub fn segment(text: &str) -> Vec<Segment> {
    let mut out: Vec<Segment> = Vec::new();
    let mut run_start = 0;
    let mut run_kind: Option<SegmentKind> = None;

    for (idx, ch) in text.char_indices() {
        let kind = classify(ch);
        match run_kind {
            Some(k) if k == kind => {}
            Some(k) => {
                out.push(Segment::new(k, &text[run_start..idx]));
                run_start = idx;
                run_kind = Some(kind);
            }
            None => run_kind = Some(kind),
        }
    }
    if let Some(k) = run_kind {
        out.push(Segment::new(k, &text[run_start..]));
    }
    out
}
