// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod client;
pub mod lookup_cache;

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::models::package_info::{PackageInfo, Source};
use crate::infrastructure::classifier::Classifier;
use crate::utils::markdown;

use client::{PyPiClient, PyPiPackage};
use lookup_cache::LookupCache;

/// 远程包查询组件
///
/// 查询PyPI JSON API，将描述交给分类器得到预测分类，
/// 并按原始包名缓存组装好的结果。任何错误类别都折叠为
/// "未找到"，不重试
pub struct RemoteLookup {
    client: PyPiClient,
    classifier: Arc<Classifier>,
    cache: LookupCache,
}

impl RemoteLookup {
    pub fn new(client: PyPiClient, classifier: Arc<Classifier>, cache_capacity: usize) -> Self {
        Self {
            client,
            classifier,
            cache: LookupCache::new(cache_capacity),
        }
    }

    /// 按包名查询，命中缓存时不发出HTTP请求
    pub async fn lookup(&self, name: &str) -> Option<PackageInfo> {
        if let Some(cached) = self.cache.get(name) {
            debug!("PyPI lookup cache hit for '{}'", name);
            return cached;
        }

        let result = match self.client.fetch(name).await {
            Ok(pkg) => Some(self.assemble(pkg)),
            Err(e) => {
                warn!("PyPI lookup for '{}' failed: {}", name, e);
                None
            }
        };

        self.cache.put(name.to_string(), result.clone());
        result
    }

    /// 从PyPI响应组装包信息
    ///
    /// 描述为空时回退到摘要；原始描述文本交给分类器，
    /// 渲染后的HTML用于展示
    fn assemble(&self, pkg: PyPiPackage) -> PackageInfo {
        let description = pkg
            .description
            .filter(|s| !s.trim().is_empty())
            .or_else(|| pkg.summary.filter(|s| !s.trim().is_empty()))
            .unwrap_or_default();

        let category = self
            .classifier
            .predict(&[description.as_str()])
            .into_iter()
            .next()
            .unwrap_or_default();

        PackageInfo {
            name: pkg.name,
            version: pkg.version,
            summary: format!("Category: {}", category),
            description: markdown::render(&description),
            homepage: pkg
                .home_page
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| "#".to_string()),
            predicted_category: category,
            source: Source::Pypi,
        }
    }
}
