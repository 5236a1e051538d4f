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

/// 回退数据测试
///
/// 无任何搜索时展示5条固定示例数据并标注回退
#[tokio::test]
async fn empty_counters_render_the_fallback_dataset() {
    let app = helpers::spawn_app().await;

    let (status, body) = helpers::get(&app.router, "/analytics").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("showing example data"));
    assert!(body.contains(r#"["Pandas","Numpy","Matplotlib","Flask","TensorFlow"]"#));
    assert!(body.contains("[5,4,3,2,1]"));
    assert!(body.contains("Top 10 Most Searched Libraries"));
}

/// 真实计数测试
///
/// 有搜索记录后图表使用真实计数，不再标注回退
#[tokio::test]
async fn recorded_searches_replace_the_fallback() {
    let app = helpers::spawn_app().await;

    helpers::post_form(&app.router, "/library", "query=Flask+Tutorial").await;
    helpers::post_form(&app.router, "/library", "query=flask+tutorial").await;
    helpers::post_form(&app.router, "/library", "query=numpy+guide").await;

    let (status, body) = helpers::get(&app.router, "/analytics").await;
    assert_eq!(status, StatusCode::OK);
    assert!(!body.contains("showing example data"));
    assert!(body.contains("flask tutorial"));
    assert!(body.contains("numpy guide"));
}
