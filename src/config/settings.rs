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

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// 应用程序配置设置
///
/// 包含服务器、数据集、分类器和PyPI查询等所有配置项
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// 数据集配置
    pub dataset: DatasetSettings,
    /// 分类器配置
    pub classifier: ClassifierSettings,
    /// PyPI远程查询配置
    pub pypi: PyPiSettings,
}

/// 服务器配置设置
#[derive(Debug, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// 数据集配置设置
#[derive(Debug, Deserialize)]
pub struct DatasetSettings {
    /// 百科数据集CSV文件路径
    pub path: String,
}

/// 分类器配置设置
#[derive(Debug, Deserialize)]
pub struct ClassifierSettings {
    /// 预训练模型文件路径
    pub model_path: String,
}

/// PyPI远程查询配置设置
#[derive(Debug, Deserialize)]
pub struct PyPiSettings {
    /// PyPI JSON API 基础URL
    pub base_url: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
    /// 查询结果缓存容量
    pub cache_capacity: usize,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从环境变量加载配置，支持默认值
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Start with default settings
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            // Default dataset and model locations
            .set_default("dataset.path", "data/encyclopedia.csv")?
            .set_default("classifier.model_path", "data/model.json")?
            // Default PyPI lookup settings
            .set_default("pypi.base_url", "https://pypi.org")?
            .set_default("pypi.timeout_secs", 10)?
            .set_default("pypi.cache_capacity", 128)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("PKGPEDIA").separator("__"));

        builder.build()?.try_deserialize()
    }
}
