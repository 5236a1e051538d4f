// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

/// 数据集加载错误类型
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed dataset row: {0}")]
    Csv(#[from] csv::Error),
}

/// 百科数据集行
///
/// 列为 `title`、`category`、`content`，加载后只读
#[derive(Debug, Clone, Deserialize)]
pub struct PackageRecord {
    pub title: String,
    pub category: String,
    pub content: String,
}

/// 百科数据集
///
/// 启动时从CSV文件一次性加载进内存；文件缺失或损坏时加载失败，
/// 进程不应启动
pub struct Dataset {
    records: Vec<PackageRecord>,
}

impl Dataset {
    /// 从CSV文件加载数据集
    ///
    /// # Returns
    ///
    /// * `Ok(Dataset)` - 成功加载的数据集
    /// * `Err(DatasetError)` - 文件缺失或行格式错误
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let mut reader = csv::Reader::from_path(path.as_ref())?;
        let mut records = Vec::new();
        for row in reader.deserialize() {
            let record: PackageRecord = row?;
            records.push(record);
        }
        info!("Loaded {} encyclopedia records", records.len());
        Ok(Self { records })
    }

    /// 按标题精确查找（忽略大小写），返回第一个匹配行
    pub fn find_by_title(&self, title: &str) -> Option<&PackageRecord> {
        let needle = title.to_lowercase();
        self.records
            .iter()
            .find(|r| r.title.to_lowercase() == needle)
    }

    /// 按分类精确过滤（忽略大小写），保持数据集顺序
    pub fn filter_by_category(&self, category: &str) -> Vec<&PackageRecord> {
        let needle = category.to_lowercase();
        self.records
            .iter()
            .filter(|r| r.category.to_lowercase() == needle)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn from_records(records: Vec<PackageRecord>) -> Self {
        Self { records }
    }
}
