// Copyright (c) 2025 youbianrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::utils::errors::LookupError;
use std::path::{Path, PathBuf};

/// 内存中的表格数据集
///
/// 表头加字符串单元格的行，从CSV读入、写回CSV。
/// 行会被补齐到表头长度，读取越界的单元格视为空串。
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Dataset {
    /// 创建带表头的空数据集
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// 从CSV文件读入数据集
    pub fn from_path(path: &Path) -> Result<Self, LookupError> {
        if !path.exists() {
            return Err(LookupError::FileNotFound(path.to_path_buf()));
        }

        let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;

        let headers = reader
            .headers()?
            .iter()
            .map(|h| h.to_string())
            .collect::<Vec<_>>();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            let mut row: Vec<String> = record.iter().map(|c| c.to_string()).collect();
            row.resize(headers.len(), String::new());
            rows.push(row);
        }

        Ok(Self { headers, rows })
    }

    /// 写出数据集
    pub fn write_to(&self, path: &Path) -> Result<(), LookupError> {
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(&self.headers)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// 追加一行，补齐/截断到表头长度
    pub fn push_row(&mut self, mut row: Vec<String>) {
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    /// 按列名查找列下标
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// 确保某列存在，不存在则以空值追加
    pub fn ensure_column(&mut self, name: &str) -> usize {
        if let Some(index) = self.column_index(name) {
            return index;
        }
        self.headers.push(name.to_string());
        for row in &mut self.rows {
            row.push(String::new());
        }
        self.headers.len() - 1
    }

    pub fn cell(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn set_cell(&mut self, row: usize, column: usize, value: String) {
        if let Some(cell) = self.rows.get_mut(row).and_then(|r| r.get_mut(column)) {
            *cell = value;
        }
    }

    /// 派生输出文件路径：`{原文件名}_with_postal_codes{原扩展名}`，与输入同目录
    pub fn output_path(input: &Path) -> PathBuf {
        let stem = input
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("output");
        let extension = input
            .extension()
            .and_then(|s| s.to_str())
            .map(|e| format!(".{}", e))
            .unwrap_or_default();
        input.with_file_name(format!("{}_with_postal_codes{}", stem, extension))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        let mut dataset = Dataset::new(vec!["序号".to_string(), "地址".to_string()]);
        dataset.push_row(vec!["1".to_string(), "北京市朝阳区".to_string()]);
        dataset.push_row(vec!["2".to_string(), "上海市浦东新区".to_string()]);
        dataset
    }

    #[test]
    fn test_column_lookup_and_ensure() {
        let mut dataset = sample();
        assert_eq!(dataset.column_index("地址"), Some(1));
        assert_eq!(dataset.column_index("邮政编码"), None);

        let col = dataset.ensure_column("邮政编码");
        assert_eq!(col, 2);
        assert_eq!(dataset.cell(0, col), "");

        // 已存在的列不会重复追加
        assert_eq!(dataset.ensure_column("邮政编码"), 2);
        assert_eq!(dataset.headers().len(), 3);
    }

    #[test]
    fn test_cell_access_out_of_bounds_is_empty() {
        let dataset = sample();
        assert_eq!(dataset.cell(0, 1), "北京市朝阳区");
        assert_eq!(dataset.cell(99, 0), "");
        assert_eq!(dataset.cell(0, 99), "");
    }

    #[test]
    fn test_csv_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("addresses.csv");

        let mut dataset = sample();
        let col = dataset.ensure_column("邮政编码");
        dataset.set_cell(0, col, "100083".to_string());
        dataset.write_to(&path).expect("write");

        let loaded = Dataset::from_path(&path).expect("read");
        assert_eq!(loaded.headers(), dataset.headers());
        assert_eq!(loaded.row_count(), 2);
        assert_eq!(loaded.cell(0, col), "100083");
        assert_eq!(loaded.cell(1, col), "");
    }

    #[test]
    fn test_missing_file_is_reported() {
        let result = Dataset::from_path(Path::new("/nonexistent/input.csv"));
        assert!(matches!(result, Err(LookupError::FileNotFound(_))));
    }

    #[test]
    fn test_output_path_derivation() {
        assert_eq!(
            Dataset::output_path(Path::new("/data/addresses.csv")),
            PathBuf::from("/data/addresses_with_postal_codes.csv")
        );
        assert_eq!(
            Dataset::output_path(Path::new("addresses")),
            PathBuf::from("addresses_with_postal_codes")
        );
    }
}
