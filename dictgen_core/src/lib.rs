//! `dictgen_core`：纯逻辑层，不做任何 I/O。
//!
//! 把词条列表转成 Rime 词典的拼音编码：
//! - **切分**：汉字 / 数字 / 英文 / 其他
//! - **解析**：整词自定义 -> 单字自定义 -> 读音词典默认读音，数字按中文读法展开
//! - **汇总**：人名展开、去重，生成全拼 / 简拼 / 复查 / 纯词表 / 多音字报告等视图
pub mod assembler;
pub mod expander;
pub mod heteronym;
pub mod lexicon;
pub mod model;
pub mod numeral;
pub mod overrides;
pub mod pipeline;
pub mod resolver;
pub mod segmenter;

#[cfg(test)]
pub(crate) mod testutil;

pub use assembler::{AssemblerConfig, DictAssembler, DictLine, DictViews, ViewKind};
pub use expander::NameExpander;
pub use heteronym::HeteronymTracker;
pub use lexicon::Lexicon;
pub use model::{NameVariant, Resolution, ResolvedEntry, Segment, SegmentKind};
pub use numeral::{NumeralError, NumeralSyllables};
pub use overrides::{CharOverrides, OverrideError, OverrideTables, WordOverrides};
pub use pipeline::{BuildConfig, BuildOutput, DictBuilder, Summary};
pub use resolver::{CharResolver, EntryResolver};
