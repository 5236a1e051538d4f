// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use axum::http::StatusCode;

use super::helpers;

/// 健康检查测试
///
/// 验证健康检查端点是否正常工作
#[tokio::test]
async fn health_check_works() {
    let app = helpers::spawn_app().await;
    let (status, body) = helpers::get(&app.router, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}

#[tokio::test]
async fn version_returns_package_version() {
    let app = helpers::spawn_app().await;
    let (status, body) = helpers::get(&app.router, "/version").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn home_page_renders() {
    let app = helpers::spawn_app().await;
    let (status, body) = helpers::get(&app.router, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Package Encyclopedia"));
}
