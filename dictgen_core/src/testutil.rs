//! 测试用的小型内存词典。

use std::collections::HashMap;

use crate::lexicon::Lexicon;

/// `char -> [读音...]`，第一个读音为默认读音；构造时读音以空格分隔。
#[derive(Debug, Default)]
pub(crate) struct MapLexicon {
    map: HashMap<char, Vec<String>>,
}

impl MapLexicon {
    pub(crate) fn new(entries: &[(char, &str)]) -> Self {
        let map = entries
            .iter()
            .map(|(ch, rs)| (*ch, rs.split_whitespace().map(str::to_string).collect()))
            .collect();
        Self { map }
    }

    /// 常用测试字表。
    pub(crate) fn sample() -> Self {
        Self::new(&[
            ('东', "dong"),
            ('方', "fang"),
            ('朝', "zhao chao"),
            ('着', "zhe zhao zhuo"),
            ('行', "xing hang"),
            ('长', "chang zhang"),
            ('立', "li"),
            ('年', "nian"),
            ('灵', "ling"),
            ('梦', "meng"),
            ('博', "bo"),
            ('丽', "li"),
            ('雾', "wu"),
            ('雨', "yu"),
            ('魔', "mo"),
            ('理', "li"),
            ('沙', "sha"),
        ])
    }
}

impl Lexicon for MapLexicon {
    fn all_readings(&self, ch: char) -> Vec<String> {
        self.map.get(&ch).cloned().unwrap_or_default()
    }

    fn default_reading(&self, ch: char) -> Option<String> {
        self.map.get(&ch).and_then(|rs| rs.first().cloned())
    }
}
