// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Serialize;

use crate::infrastructure::dataset::PackageRecord;
use crate::utils::markdown;

/// 包信息来源标签
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Local,
    Pypi,
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Local => write!(f, "local"),
            Source::Pypi => write!(f, "pypi"),
        }
    }
}

/// 包信息
///
/// 本地数据集命中和PyPI远程查询共用同一结构，仅来源标签不同。
/// 构建后不再变更
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PackageInfo {
    pub name: String,
    pub version: String,
    pub summary: String,
    /// 渲染后的HTML描述
    pub description: String,
    pub homepage: String,
    pub predicted_category: String,
    pub source: Source,
}

impl PackageInfo {
    /// 从数据集行构建本地包信息
    ///
    /// 版本号固定为 `N/A`，主页固定为占位符 `#`
    pub fn from_record(record: &PackageRecord) -> Self {
        Self {
            name: record.title.clone(),
            version: "N/A".to_string(),
            summary: format!("Category: {}", record.category),
            description: markdown::render(&record.content),
            homepage: "#".to_string(),
            predicted_category: record.category.clone(),
            source: Source::Local,
        }
    }
}
