//! 多音字统计：记录每个多音字出现过的全部读音，以及各读音被选为默认读音的次数。
//!
//! 统计对象由调用方持有并以 `&mut` 传入解析器，累加只增不减；
//! 需要重新开始时调用 `reset`。

use std::collections::{BTreeMap, BTreeSet, HashMap};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct CharStats {
    /// 出现过的全部读音（并集）
    readings: BTreeSet<String>,
    /// 读音 -> 作为默认读音被采用的次数
    default_counts: HashMap<String, u64>,
}

/// 多音字统计累加器。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeteronymTracker {
    /// 按字符（码位）有序，报告直接按此顺序输出
    stats: BTreeMap<char, CharStats>,
}

impl HeteronymTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// 记录一次多音字的出现。候选读音不超过一个时不记录。
    pub fn record(&mut self, ch: char, candidates: &[String], default: Option<&str>) {
        if candidates.len() <= 1 {
            return;
        }
        let stats = self.stats.entry(ch).or_default();
        stats.readings.extend(candidates.iter().cloned());
        if let Some(d) = default {
            *stats.default_counts.entry(d.to_string()).or_insert(0) += 1;
        }
    }

    pub fn reset(&mut self) {
        self.stats.clear();
    }

    /// 当前状态的拷贝，之后的记录不影响它。
    pub fn snapshot(&self) -> HeteronymTracker {
        self.clone()
    }

    /// 合并另一份统计：读音取并集，次数相加。
    pub fn merge(&mut self, other: &HeteronymTracker) {
        for (ch, theirs) in &other.stats {
            let ours = self.stats.entry(*ch).or_default();
            ours.readings.extend(theirs.readings.iter().cloned());
            for (reading, count) in &theirs.default_counts {
                *ours.default_counts.entry(reading.clone()).or_insert(0) += count;
            }
        }
    }

    pub fn contains(&self, ch: char) -> bool {
        self.stats.contains_key(&ch)
    }

    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.stats.keys().copied()
    }

    /// `ch` 的某个读音被选为默认读音的次数。
    pub fn default_count(&self, ch: char, reading: &str) -> u64 {
        self.stats
            .get(&ch)
            .and_then(|s| s.default_counts.get(reading).copied())
            .unwrap_or(0)
    }

    /// `ch` 的全部读音：按默认次数降序，同次数按字典序。
    pub fn ranked_readings(&self, ch: char) -> Vec<&str> {
        let Some(stats) = self.stats.get(&ch) else {
            return Vec::new();
        };
        let mut readings: Vec<&str> = stats.readings.iter().map(String::as_str).collect();
        readings.sort_by(|a, b| {
            let ca = stats.default_counts.get(*a).copied().unwrap_or(0);
            let cb = stats.default_counts.get(*b).copied().unwrap_or(0);
            cb.cmp(&ca).then_with(|| a.cmp(b))
        });
        readings
    }

    /// 报告行：`字 读音1 读音2 ...`，按字符码位排序；`exclude` 命中的字跳过。
    pub fn report_lines(&self, exclude: impl Fn(char) -> bool) -> Vec<String> {
        self.chars()
            .filter(|ch| !exclude(*ch))
            .map(|ch| {
                let mut line = ch.to_string();
                for r in self.ranked_readings(ch) {
                    line.push(' ');
                    line.push_str(r);
                }
                line
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(rs: &[&str]) -> Vec<String> {
        rs.iter().map(|r| r.to_string()).collect()
    }

    #[test]
    fn single_reading_is_not_recorded() {
        let mut t = HeteronymTracker::new();
        t.record('东', &owned(&["dong"]), Some("dong"));
        assert!(t.is_empty());
    }

    #[test]
    fn report_orders_by_count_then_reading() {
        let mut t = HeteronymTracker::new();
        let cands = owned(&["zhao", "chao", "zhe"]);
        for _ in 0..3 {
            t.record('朝', &cands, Some("chao"));
        }
        t.record('朝', &cands, Some("zhao"));
        assert_eq!(t.report_lines(|_| false), ["朝 chao zhao zhe"]);
        assert_eq!(t.default_count('朝', "chao"), 3);
        assert_eq!(t.default_count('朝', "zhe"), 0);
    }

    #[test]
    fn readings_accumulate_across_records() {
        let mut t = HeteronymTracker::new();
        t.record('着', &owned(&["zhe", "zhao"]), None);
        t.record('着', &owned(&["zhuo", "zhe"]), Some("zhe"));
        assert_eq!(t.ranked_readings('着'), ["zhe", "zhao", "zhuo"]);
    }

    #[test]
    fn report_sorted_by_scalar_value_with_exclusion() {
        let mut t = HeteronymTracker::new();
        let cands = owned(&["a", "b"]);
        t.record('长', &cands, Some("a"));
        t.record('一', &cands, Some("b"));
        t.record('行', &cands, Some("a"));
        let lines = t.report_lines(|ch| ch == '行');
        assert_eq!(lines, ["一 b a", "长 a b"]);
    }

    #[test]
    fn snapshot_is_detached_and_reset_clears() {
        let mut t = HeteronymTracker::new();
        t.record('行', &owned(&["xing", "hang"]), Some("xing"));
        let snap = t.snapshot();
        t.record('行', &owned(&["xing", "hang"]), Some("xing"));
        assert_eq!(snap.default_count('行', "xing"), 1);
        assert_eq!(t.default_count('行', "xing"), 2);
        t.reset();
        assert!(t.is_empty());
        assert_eq!(snap.len(), 1);
    }

    #[test]
    fn merge_sums_counts() {
        let cands = owned(&["xing", "hang"]);
        let mut a = HeteronymTracker::new();
        a.record('行', &cands, Some("xing"));
        let mut b = HeteronymTracker::new();
        b.record('行', &cands, Some("hang"));
        b.record('行', &cands, Some("hang"));
        b.record('长', &owned(&["chang", "zhang"]), Some("chang"));
        a.merge(&b);
        assert_eq!(a.default_count('行', "hang"), 2);
        assert_eq!(a.default_count('行', "xing"), 1);
        assert_eq!(a.ranked_readings('行'), ["hang", "xing"]);
        assert!(a.contains('长'));
    }
}
