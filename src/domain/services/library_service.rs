// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use crate::domain::models::package_info::PackageInfo;
use crate::infrastructure::counters::SearchCounters;
use crate::infrastructure::dataset::Dataset;
use crate::infrastructure::pypi::RemoteLookup;

/// 百科搜索服务
///
/// 编排一次查询：先记录搜索计数，再查本地数据集，
/// 未命中时回退到PyPI远程查询。本地命中优先，
/// 此时不会发出任何远程请求
pub struct LibraryService {
    dataset: Arc<Dataset>,
    lookup: Arc<RemoteLookup>,
    counters: Arc<SearchCounters>,
}

impl LibraryService {
    pub fn new(
        dataset: Arc<Dataset>,
        lookup: Arc<RemoteLookup>,
        counters: Arc<SearchCounters>,
    ) -> Self {
        Self {
            dataset,
            lookup,
            counters,
        }
    }

    /// 处理一次搜索请求
    ///
    /// 计数键在计数器内部小写化；远程查询使用去除首尾空白、
    /// 未小写化的原始查询串
    pub async fn search(&self, raw_query: &str) -> Option<PackageInfo> {
        let query = raw_query.trim();
        self.counters.record(query);

        if let Some(record) = self.dataset.find_by_title(query) {
            return Some(PackageInfo::from_record(record));
        }

        self.lookup.lookup(query).await
    }
}
