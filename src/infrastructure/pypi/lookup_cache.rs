// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::num::NonZeroUsize;

use lru::LruCache;
use parking_lot::Mutex;

use crate::domain::models::package_info::PackageInfo;

/// 远程查询结果缓存
///
/// 固定容量的LRU缓存，键为调用方传入的原始包名（不做大小写归一化）。
/// 未命中远端的空结果同样被缓存，避免对同一包名重复打到PyPI
pub struct LookupCache {
    inner: Mutex<LruCache<String, Option<PackageInfo>>>,
}

impl LookupCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Mutex::new(LruCache::new(
                NonZeroUsize::new(capacity.max(1)).unwrap(),
            )),
        }
    }

    /// 查询缓存；命中时将条目提升为最近使用
    ///
    /// 外层 `Option` 表示是否命中缓存，内层表示缓存的查询结果本身
    pub fn get(&self, key: &str) -> Option<Option<PackageInfo>> {
        self.inner.lock().get(key).cloned()
    }

    /// 写入缓存，容量满时淘汰最久未使用的条目
    pub fn put(&self, key: String, value: Option<PackageInfo>) {
        self.inner.lock().put(key, value);
    }
}
