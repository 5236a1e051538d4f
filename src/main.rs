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

use std::sync::Arc;
use std::time::Duration;

use pkgpedia::config::settings::Settings;
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
use pkgpedia::utils::telemetry;
use tokio::net::TcpListener;
use tracing::info;

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务。
/// 数据集或模型文件缺失/损坏时启动失败，无恢复路径
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting pkgpedia...");

    // 2. Load configuration
    let settings = Settings::new()?;
    info!("Configuration loaded");

    // 3. Load the encyclopedia dataset (startup-fatal on failure)
    let dataset = Arc::new(Dataset::load(&settings.dataset.path)?);
    info!("Encyclopedia dataset loaded from {}", settings.dataset.path);

    // 4. Load the pre-trained classifier (startup-fatal on failure)
    let classifier = Arc::new(Classifier::load(&settings.classifier.model_path)?);
    info!("Classifier model loaded from {}", settings.classifier.model_path);

    // 5. Compile templates (startup-fatal on syntax errors)
    let templates = Arc::new(Templates::new()?);
    info!("Templates compiled");

    // 6. Initialize components
    let pypi_client = PyPiClient::new(
        &settings.pypi.base_url,
        Duration::from_secs(settings.pypi.timeout_secs),
    )?;
    let lookup = Arc::new(RemoteLookup::new(
        pypi_client,
        classifier.clone(),
        settings.pypi.cache_capacity,
    ));
    let counters = Arc::new(SearchCounters::new());

    let library = Arc::new(LibraryService::new(
        dataset.clone(),
        lookup.clone(),
        counters.clone(),
    ));
    let category = Arc::new(CategoryService::new(dataset.clone()));
    let analytics = Arc::new(AnalyticsService::new(counters.clone()));

    // 7. Start HTTP server
    let app = routes::app(templates, library, category, analytics);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
