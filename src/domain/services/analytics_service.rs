// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use crate::infrastructure::counters::SearchCounters;

/// 榜单最大长度
const TOP_N: usize = 10;

/// 尚无任何搜索时使用的静态示例数据
const FALLBACK: [(&str, u64); 5] = [
    ("Pandas", 5),
    ("Numpy", 4),
    ("Matplotlib", 3),
    ("Flask", 2),
    ("TensorFlow", 1),
];

/// 柱状图数据
///
/// 标签与数值一一对应，交给模板层渲染为嵌入式图表
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub values: Vec<u64>,
    /// 数据来自静态示例而非真实计数
    pub is_fallback: bool,
}

/// 搜索分析服务
///
/// 将搜索计数聚合为按次数降序的Top-10榜单；
/// 计数为空时退回固定的示例数据
pub struct AnalyticsService {
    counters: Arc<SearchCounters>,
}

impl AnalyticsService {
    pub fn new(counters: Arc<SearchCounters>) -> Self {
        Self { counters }
    }

    pub fn top_searches(&self) -> ChartData {
        if self.counters.is_empty() {
            let (labels, values) = FALLBACK
                .iter()
                .map(|(label, count)| (label.to_string(), *count))
                .unzip();
            return ChartData {
                labels,
                values,
                is_fallback: true,
            };
        }

        let (labels, values) = self.counters.top(TOP_N).into_iter().unzip();
        ChartData {
            labels,
            values,
            is_fallback: false,
        }
    }
}
