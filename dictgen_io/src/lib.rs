//! 文件读写：按列读取 CSV 词条，原子写出各输出视图。
mod input;
mod output;

pub use input::{ColumnReader, InputError, dedup_column};
pub use output::{OutputError, write_atomic};
