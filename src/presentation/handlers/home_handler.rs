// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use axum::{extract::Extension, response::Html};
use serde_json::json;

use crate::presentation::errors::AppError;
use crate::presentation::templates::Templates;

/// 渲染首页
pub async fn home(
    Extension(templates): Extension<Arc<Templates>>,
) -> Result<Html<String>, AppError> {
    let html = templates.render("index", json!({}))?;
    Ok(Html(html))
}
