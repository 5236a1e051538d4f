// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use serde::Serialize;

use crate::infrastructure::dataset::Dataset;
use crate::utils::markdown;

/// 每页结果数
pub const PER_PAGE: usize = 5;

/// 分类结果中的单行
#[derive(Debug, Clone, Serialize)]
pub struct CategoryEntry {
    pub title: String,
    pub category: String,
    /// 渲染后的HTML内容
    pub content: String,
}

/// 一页分类搜索结果
#[derive(Debug, Clone, Serialize)]
pub struct CategoryPage {
    pub category: String,
    pub results: Vec<CategoryEntry>,
    pub page: usize,
    pub total_pages: usize,
}

impl CategoryPage {
    /// 未提交表单时的空结果页
    pub fn empty() -> Self {
        Self {
            category: String::new(),
            results: Vec::new(),
            page: 1,
            total_pages: 1,
        }
    }
}

/// 分类搜索服务
///
/// 按分类过滤数据集并分页。页码为1起始；小于1的页码按1处理，
/// 超出范围的页码返回空切片而非错误
pub struct CategoryService {
    dataset: Arc<Dataset>,
}

impl CategoryService {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }

    /// 过滤并返回指定页
    pub fn search(&self, category: &str, page: usize) -> CategoryPage {
        let normalized = category.trim().to_lowercase();
        let matched = self.dataset.filter_by_category(&normalized);

        let total_pages = matched.len().div_ceil(PER_PAGE);
        let page = page.max(1);
        let start = (page - 1) * PER_PAGE;

        let results = matched
            .iter()
            .skip(start)
            .take(PER_PAGE)
            .map(|r| CategoryEntry {
                title: r.title.clone(),
                category: r.category.clone(),
                content: markdown::render(&r.content),
            })
            .collect();

        CategoryPage {
            category: normalized,
            results,
            page,
            total_pages,
        }
    }
}
