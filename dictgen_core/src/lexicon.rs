/// 读音词典抽象：core 不关心读音来自哪个库或文件。
///
/// 约定：
/// - `all_readings` 返回去重后的全部读音，顺序由实现决定；查不到返回空
/// - `default_reading` 是实现自己挑选的默认读音
/// - 查询失败一律按“无读音”处理，不返回错误
pub trait Lexicon: Send + Sync {
    fn all_readings(&self, ch: char) -> Vec<String>;

    fn default_reading(&self, ch: char) -> Option<String>;
}

impl<L: Lexicon + ?Sized> Lexicon for &L {
    fn all_readings(&self, ch: char) -> Vec<String> {
        (**self).all_readings(ch)
    }

    fn default_reading(&self, ch: char) -> Option<String> {
        (**self).default_reading(ch)
    }
}

impl<L: Lexicon + ?Sized> Lexicon for Box<L> {
    fn all_readings(&self, ch: char) -> Vec<String> {
        (**self).all_readings(ch)
    }

    fn default_reading(&self, ch: char) -> Option<String> {
        (**self).default_reading(ch)
    }
}

/// 保序去重，用于整理 `all_readings` 的返回值。
pub fn dedup_readings<I, S>(readings: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let set: indexmap::IndexSet<String> = readings.into_iter().map(Into::into).collect();
    set.into_iter().collect()
}
