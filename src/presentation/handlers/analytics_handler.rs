// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use axum::{extract::Extension, response::Html};
use serde::Serialize;

use crate::domain::services::analytics_service::AnalyticsService;
use crate::presentation::errors::AppError;
use crate::presentation::templates::Templates;

#[derive(Serialize)]
struct AnalyticsView {
    /// JSON数组字面量，直接内嵌进图表脚本
    labels_json: String,
    values_json: String,
    is_fallback: bool,
}

/// 渲染搜索分析仪表盘
///
/// 图表数据以JSON数组形式传入模板，由模板内的plotly脚本绘制
pub async fn analytics(
    Extension(templates): Extension<Arc<Templates>>,
    Extension(service): Extension<Arc<AnalyticsService>>,
) -> Result<Html<String>, AppError> {
    let chart = service.top_searches();
    let view = AnalyticsView {
        labels_json: serde_json::to_string(&chart.labels)?,
        values_json: serde_json::to_string(&chart.values)?,
        is_fallback: chart.is_fallback,
    };
    Ok(Html(templates.render("analytics", view)?))
}
