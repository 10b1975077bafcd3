//! 自定义读音表：整词表（最高优先级）与单字表（次优先级）。
//!
//! 两张表都在构造时注入，运行期间只读。

use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OverrideError {
    #[error("单字表的键必须恰好是一个字符：{0:?}")]
    InvalidChar(String),
    #[error("单字 {ch} 的读音必须是一个音节：{value:?}")]
    InvalidToken { ch: char, value: String },
    #[error("读音表解析失败：{0}")]
    Parse(String),
}

/// 整词自定义拼音：命中时原样使用，不做大小写处理，也不再切分。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordOverrides {
    map: HashMap<String, Vec<String>>,
}

impl WordOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// value 为空格分隔的全拼；空串表示该词没有任何音节。
    pub fn insert(&mut self, word: impl Into<String>, code: &str) {
        let tokens = code.split_whitespace().map(str::to_string).collect();
        self.map.insert(word.into(), tokens);
    }

    pub fn get(&self, word: &str) -> Option<&[String]> {
        self.map.get(word).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<K: Into<String>, V: AsRef<str>> FromIterator<(K, V)> for WordOverrides {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut out = Self::new();
        for (k, v) in iter {
            out.insert(k, v.as_ref());
        }
        out
    }
}

/// 单字自定义读音：每个字固定一个音节。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharOverrides {
    map: HashMap<char, String>,
}

impl CharOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, ch: char, token: impl Into<String>) -> Result<(), OverrideError> {
        let token = token.into();
        let token_trimmed = token.trim();
        if token_trimmed.is_empty() || token_trimmed.contains(char::is_whitespace) {
            return Err(OverrideError::InvalidToken { ch, value: token });
        }
        self.map.insert(ch, token_trimmed.to_string());
        Ok(())
    }

    /// 以字符串为键插入（来自配置文件），键必须恰好一个字符。
    pub fn insert_str(&mut self, key: &str, token: impl Into<String>) -> Result<(), OverrideError> {
        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => self.insert(ch, token),
            _ => Err(OverrideError::InvalidChar(key.to_string())),
        }
    }

    pub fn get(&self, ch: char) -> Option<&str> {
        self.map.get(&ch).map(String::as_str)
    }

    pub fn contains(&self, ch: char) -> bool {
        self.map.contains_key(&ch)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.map.keys().copied()
    }
}

/// 两张自定义读音表的组合。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideTables {
    pub words: WordOverrides,
    pub chars: CharOverrides,
}

impl OverrideTables {
    pub fn new(words: WordOverrides, chars: CharOverrides) -> Self {
        Self { words, chars }
    }
}
