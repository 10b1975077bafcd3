//! 人名展开：含分隔符（默认 `·`）的名字除整体外，还拆出各部分作为独立词条。

use crate::model::NameVariant;

pub const DEFAULT_NAME_SEPARATOR: char = '·';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameExpander {
    separator: char,
}

impl Default for NameExpander {
    fn default() -> Self {
        Self::new(DEFAULT_NAME_SEPARATOR)
    }
}

impl NameExpander {
    pub fn new(separator: char) -> Self {
        Self { separator }
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    /// 展开一个原始词条。
    ///
    /// - 空白词条 -> 空
    /// - 无分隔符 -> `(w, w)`
    /// - 两部分 `A·B` -> `(A, A)`, `(B, B)`, `(A·B, A)`
    /// - 更多部分 -> `(A, A)`, `(全名, A)`，中间部分不单独成词
    ///
    /// 整体词条用第一部分注音。
    pub fn expand(&self, raw: &str) -> Vec<NameVariant> {
        let word = raw.trim();
        if word.is_empty() {
            return Vec::new();
        }
        if !word.contains(self.separator) {
            return vec![NameVariant::new(word, word)];
        }

        let parts: Vec<&str> = word.split(self.separator).map(str::trim).collect();
        let first = parts.first().copied().unwrap_or("");
        let mut out = Vec::new();
        if !first.is_empty() {
            out.push(NameVariant::new(first, first));
        }
        if parts.len() == 2 && !parts[1].is_empty() {
            out.push(NameVariant::new(parts[1], parts[1]));
        }
        if !first.is_empty() {
            out.push(NameVariant::new(word, first));
        }
        out
    }
}
