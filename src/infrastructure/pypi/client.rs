// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use url::Url;

/// 远程查询错误类型
///
/// 区分网络故障、非2xx状态和响应格式错误；调用方统一折叠为
/// "未找到"结果
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected status: {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed payload: {0}")]
    Payload(String),
}

/// PyPI响应中实际消费的字段子集
///
/// 所有文本字段在上游都可能为null
#[derive(Debug, Clone, Deserialize)]
pub struct PyPiPackage {
    pub name: String,
    pub version: String,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub home_page: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PyPiResponse {
    info: PyPiPackage,
}

/// PyPI JSON API 客户端
///
/// 每次请求携带客户端级超时，缓慢或挂起的远端不会无限阻塞请求处理
pub struct PyPiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl PyPiClient {
    /// 创建新的PyPI客户端
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let base_url = Url::parse(base_url)?;
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http, base_url })
    }

    /// 按包名查询 `GET {base_url}/pypi/{name}/json`
    pub async fn fetch(&self, name: &str) -> Result<PyPiPackage, LookupError> {
        let url = format!(
            "{}/pypi/{}/json",
            self.base_url.as_str().trim_end_matches('/'),
            name
        );

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| LookupError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(LookupError::Status(response.status()));
        }

        let payload: PyPiResponse = response
            .json()
            .await
            .map_err(|e| LookupError::Payload(e.to_string()))?;

        Ok(payload.info)
    }
}
