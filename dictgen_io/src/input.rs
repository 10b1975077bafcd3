use std::{fs::File, io, io::Read, path::Path, path::PathBuf};

use indexmap::IndexSet;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("找不到输入文件：{}", .0.display())]
    InputNotFound(PathBuf),
    #[error("输入文件没有数据行：{}", .0.display())]
    EmptyInput(PathBuf),
    #[error("CSV 解析失败：{0}")]
    Csv(#[from] csv::Error),
    #[error("读取输入失败：{0}")]
    Io(#[from] io::Error),
}

/// CSV 按列读取。
///
/// - 第一行是标题，丢弃
/// - 允许各行列数不同
/// - 每列独立收集：去掉首尾空白、丢弃空值、列内保序去重
#[derive(Debug, Clone, Copy)]
pub struct ColumnReader {
    delimiter: u8,
}

impl Default for ColumnReader {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl ColumnReader {
    pub fn new(delimiter: u8) -> Self {
        Self { delimiter }
    }

    pub fn read_path(&self, path: impl AsRef<Path>) -> Result<Vec<Vec<String>>, InputError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => InputError::InputNotFound(path.to_path_buf()),
            _ => InputError::Io(e),
        })?;
        self.read(file, path)
    }

    /// 从任意 reader 读取；`origin` 只用于错误信息。
    pub fn read<R: Read>(&self, reader: R, origin: &Path) -> Result<Vec<Vec<String>>, InputError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .delimiter(self.delimiter)
            .from_reader(reader);

        let mut columns: Vec<Vec<String>> = Vec::new();
        let mut rows = 0usize;
        for record in csv_reader.records() {
            let record = record?;
            rows += 1;
            if record.len() > columns.len() {
                columns.resize_with(record.len(), Vec::new);
            }
            for (idx, field) in record.iter().enumerate() {
                let value = field.trim();
                if !value.is_empty() {
                    columns[idx].push(value.to_string());
                }
            }
        }

        if rows == 0 {
            return Err(InputError::EmptyInput(origin.to_path_buf()));
        }
        debug!(rows, columns = columns.len(), "input read");
        Ok(columns.into_iter().map(dedup_column).collect())
    }
}

/// 列内保序去重。
pub fn dedup_column<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let set: IndexSet<String> = values.into_iter().map(Into::into).collect();
    set.into_iter().collect()
}
