// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use axum::{extract::Extension, response::Html, Form};
use serde::{Deserialize, Serialize};

use crate::domain::models::package_info::PackageInfo;
use crate::domain::services::library_service::LibraryService;
use crate::presentation::errors::AppError;
use crate::presentation::templates::Templates;

/// 搜索表单数据
#[derive(Debug, Deserialize)]
pub struct LibraryForm {
    pub query: String,
}

#[derive(Serialize)]
struct LibraryView {
    has_info: bool,
    info: Option<PackageInfo>,
}

/// 渲染空的搜索表单
pub async fn show_form(
    Extension(templates): Extension<Arc<Templates>>,
) -> Result<Html<String>, AppError> {
    let view = LibraryView {
        has_info: false,
        info: None,
    };
    Ok(Html(templates.render("library", view)?))
}

/// 处理搜索请求
///
/// # 参数
///
/// * `templates` - 模板集合
/// * `service` - 百科搜索服务实例
/// * `form` - 搜索表单数据
///
/// # 返回值
///
/// 返回渲染后的包信息视图；本地和远程均未命中时视图不含包信息
pub async fn search(
    Extension(templates): Extension<Arc<Templates>>,
    Extension(service): Extension<Arc<LibraryService>>,
    Form(form): Form<LibraryForm>,
) -> Result<Html<String>, AppError> {
    let info = service.search(&form.query).await;
    let view = LibraryView {
        has_info: info.is_some(),
        info,
    };
    Ok(Html(templates.render("library", view)?))
}
