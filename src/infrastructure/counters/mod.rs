// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::collections::HashMap;

use parking_lot::Mutex;

/// 搜索计数器
///
/// 进程级的查询词计数，键为小写化、去除首尾空白后的查询词。
/// 无淘汰策略，仅在进程重启时清零。互斥锁保护，
/// 并发请求下不会丢失更新
#[derive(Default)]
pub struct SearchCounters {
    counts: Mutex<HashMap<String, u64>>,
}

impl SearchCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// 记录一次查询，计数加一
    pub fn record(&self, query: &str) {
        let key = query.trim().to_lowercase();
        let mut counts = self.counts.lock();
        *counts.entry(key).or_insert(0) += 1;
    }

    pub fn is_empty(&self) -> bool {
        self.counts.lock().is_empty()
    }

    /// 返回计数最高的前 `n` 个查询词，按计数降序
    ///
    /// 计数相同的词之间的顺序不作保证
    pub fn top(&self, n: usize) -> Vec<(String, u64)> {
        let counts = self.counts.lock();
        let mut entries: Vec<(String, u64)> =
            counts.iter().map(|(k, v)| (k.clone(), *v)).collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(n);
        entries
    }

    /// 某个查询词的当前计数（主要用于测试）
    pub fn count_of(&self, query: &str) -> u64 {
        let key = query.trim().to_lowercase();
        self.counts.lock().get(&key).copied().unwrap_or(0)
    }
}
