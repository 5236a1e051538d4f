// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    response::Html,
    Form,
};
use serde::Deserialize;

use crate::domain::services::category_service::{CategoryPage, CategoryService};
use crate::presentation::errors::AppError;
use crate::presentation::templates::Templates;

/// 分类搜索表单数据
#[derive(Debug, Deserialize)]
pub struct CategoryForm {
    pub category: String,
}

/// 分页查询参数
#[derive(Debug, Deserialize)]
pub struct PageParams {
    #[serde(default = "default_page")]
    pub page: usize,
}

fn default_page() -> usize {
    1
}

/// 渲染空的分类搜索表单
pub async fn show_form(
    Extension(templates): Extension<Arc<Templates>>,
) -> Result<Html<String>, AppError> {
    Ok(Html(templates.render("category", CategoryPage::empty())?))
}

/// 处理分类搜索请求
///
/// # 参数
///
/// * `templates` - 模板集合
/// * `service` - 分类搜索服务实例
/// * `params` - 查询串中的页码参数，默认第1页
/// * `form` - 分类表单数据
///
/// # 返回值
///
/// 返回渲染后的分页结果视图
pub async fn search(
    Extension(templates): Extension<Arc<Templates>>,
    Extension(service): Extension<Arc<CategoryService>>,
    Query(params): Query<PageParams>,
    Form(form): Form<CategoryForm>,
) -> Result<Html<String>, AppError> {
    let page = service.search(&form.category, params.page);
    Ok(Html(templates.render("category", page)?))
}
