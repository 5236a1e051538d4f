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

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use pkgpedia::domain::services::analytics_service::AnalyticsService;
use pkgpedia::domain::services::category_service::CategoryService;
use pkgpedia::domain::services::library_service::LibraryService;
use pkgpedia::infrastructure::classifier::Classifier;
use pkgpedia::infrastructure::counters::SearchCounters;
use pkgpedia::infrastructure::dataset::Dataset;
use pkgpedia::infrastructure::pypi::client::PyPiClient;
use pkgpedia::infrastructure::pypi::RemoteLookup;
use pkgpedia::presentation::routes;
use pkgpedia::presentation::templates::Templates;
use tower::util::ServiceExt;
use wiremock::MockServer;

const MODEL_JSON: &str = r#"{
    "classes": [
        {"label": "web", "weights": {"flask": 2.0, "framework": 1.0, "http": 0.5}},
        {"label": "data-science", "weights": {"array": 1.5, "dataframe": 2.0}},
        {"label": "networking", "weights": {"socket": 1.8, "tcp": 1.5, "aws": 1.0}}
    ]
}"#;

/// 组装好的被测应用
pub struct TestApp {
    pub router: Router,
    pub counters: Arc<SearchCounters>,
    /// 模拟的PyPI端点；其期望在drop时校验
    pub pypi: MockServer,
}

/// 默认测试数据集：1个web行 + 12个networking行
pub fn default_csv() -> String {
    let mut csv = String::from("title,category,content\n");
    csv.push_str("flask tutorial,web,A **Flask** walkthrough.\n");
    for i in 0..12 {
        csv.push_str(&format!("pkg-{},networking,Socket notes {}.\n", i, i));
    }
    csv
}

/// 以给定CSV内容启动被测应用
pub async fn spawn_app_with_csv(csv: &str) -> TestApp {
    let pypi = MockServer::start().await;

    let mut data_file = tempfile::NamedTempFile::new().unwrap();
    data_file.write_all(csv.as_bytes()).unwrap();
    let dataset = Arc::new(Dataset::load(data_file.path()).unwrap());

    let mut model_file = tempfile::NamedTempFile::new().unwrap();
    model_file.write_all(MODEL_JSON.as_bytes()).unwrap();
    let classifier = Arc::new(Classifier::load(model_file.path()).unwrap());

    let templates = Arc::new(Templates::new().unwrap());
    let client = PyPiClient::new(&pypi.uri(), Duration::from_secs(5)).unwrap();
    let lookup = Arc::new(RemoteLookup::new(client, classifier, 128));
    let counters = Arc::new(SearchCounters::new());

    let library = Arc::new(LibraryService::new(
        dataset.clone(),
        lookup,
        counters.clone(),
    ));
    let category = Arc::new(CategoryService::new(dataset));
    let analytics = Arc::new(AnalyticsService::new(counters.clone()));

    let router = routes::app(templates, library, category, analytics);
    TestApp {
        router,
        counters,
        pypi,
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with_csv(&default_csv()).await
}

/// 发送GET请求并返回状态码与响应体
pub async fn get(router: &Router, uri: &str) -> (StatusCode, String) {
    let response = router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

/// 发送表单POST请求并返回状态码与响应体
pub async fn post_form(router: &Router, uri: &str, body: &str) -> (StatusCode, String) {
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}
