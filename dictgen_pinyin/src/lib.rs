//! 拼音相关：基于 `pinyin` crate 的读音词典，以及内置的自定义读音表。

mod overrides;

use dictgen_core::lexicon::{Lexicon, dedup_readings};
use pinyin::{ToPinyin, ToPinyinMulti};

pub use overrides::{DEFAULT_OVERRIDES_TOML, default_overrides, default_toml, parse_overrides_toml};

/// 无声调拼音读音词典。
///
/// - 全部读音来自 `to_pinyin_multi`，保序去重
/// - 默认读音取 `to_pinyin`（即词库的首选读音）
/// - `ü` 统一写作 `v`（`nv`、`lv`），`ê` 写作 `e`，与 Rime 拼音方案的编码一致
#[derive(Debug, Clone, Copy, Default)]
pub struct PinyinLexicon;

impl PinyinLexicon {
    pub fn new() -> Self {
        Self
    }
}

/// 读音统一为 ASCII：`ü` -> `v`，`ê` -> `e`。
fn normalize(plain: &str) -> String {
    plain
        .chars()
        .map(|c| match c {
            'ü' => 'v',
            'ê' => 'e',
            c => c,
        })
        .collect()
}

impl Lexicon for PinyinLexicon {
    fn all_readings(&self, ch: char) -> Vec<String> {
        match ch.to_pinyin_multi() {
            Some(multi) => dedup_readings(multi.into_iter().map(|p| normalize(p.plain()))),
            None => Vec::new(),
        }
    }

    fn default_reading(&self, ch: char) -> Option<String> {
        ch.to_pinyin().map(|p| normalize(p.plain()))
    }
}
