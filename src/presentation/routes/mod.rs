// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower_http::trace::TraceLayer;

use crate::domain::services::analytics_service::AnalyticsService;
use crate::domain::services::category_service::CategoryService;
use crate::domain::services::library_service::LibraryService;
use crate::presentation::handlers::{
    analytics_handler, category_handler, home_handler, library_handler,
};
use crate::presentation::templates::Templates;

/// 创建应用路由
///
/// # 参数
///
/// 接收全部共享组件，以 `Extension` 层注入各处理器
///
/// # 返回值
///
/// 返回配置好的路由
pub fn app(
    templates: Arc<Templates>,
    library: Arc<LibraryService>,
    category: Arc<CategoryService>,
    analytics: Arc<AnalyticsService>,
) -> Router {
    Router::new()
        .route("/", get(home_handler::home))
        .route(
            "/library",
            get(library_handler::show_form).post(library_handler::search),
        )
        .route(
            "/category",
            get(category_handler::show_form).post(category_handler::search),
        )
        .route("/analytics", get(analytics_handler::analytics))
        .route("/health", get(health_check))
        .route("/version", get(version))
        .layer(TraceLayer::new_for_http())
        .layer(Extension(templates))
        .layer(Extension(library))
        .layer(Extension(category))
        .layer(Extension(analytics))
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
