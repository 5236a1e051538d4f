// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

/// 分类器加载错误类型
#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("failed to read model file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse model file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("model file contains no classes")]
    EmptyModel,
}

/// 单个分类的权重表
#[derive(Debug, Deserialize)]
struct ClassWeights {
    label: String,
    #[serde(default)]
    bias: f64,
    weights: HashMap<String, f64>,
}

#[derive(Debug, Deserialize)]
struct ModelFile {
    classes: Vec<ClassWeights>,
}

/// 预训练文本分类器
///
/// 启动时从JSON权重文件加载，将自由文本描述映射到分类标签。
/// 模型的训练与导出流程在本应用之外完成
pub struct Classifier {
    classes: Vec<ClassWeights>,
}

impl Classifier {
    /// 从模型文件加载分类器
    ///
    /// # Returns
    ///
    /// * `Ok(Classifier)` - 成功加载的分类器
    /// * `Err(ClassifierError)` - 文件缺失、格式错误或模型为空
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ClassifierError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let model: ModelFile = serde_json::from_str(&raw)?;
        if model.classes.is_empty() {
            return Err(ClassifierError::EmptyModel);
        }
        info!("Loaded classifier model with {} classes", model.classes.len());
        Ok(Self {
            classes: model.classes,
        })
    }

    /// 预测每段文本的分类标签
    ///
    /// 评分为 `bias + Σ weight[token]`，取最高分的分类；
    /// 分数相同时取模型文件中靠前的分类
    pub fn predict(&self, texts: &[&str]) -> Vec<String> {
        texts.iter().map(|text| self.predict_one(text)).collect()
    }

    fn predict_one(&self, text: &str) -> String {
        let tokens = tokenize(text);

        let mut best_label = &self.classes[0].label;
        let mut best_score = f64::NEG_INFINITY;
        for class in &self.classes {
            let mut score = class.bias;
            for token in &tokens {
                if let Some(weight) = class.weights.get(token) {
                    score += weight;
                }
            }
            // Strict comparison keeps the first class on ties.
            if score > best_score {
                best_score = score;
                best_label = &class.label;
            }
        }
        best_label.clone()
    }
}

/// 小写化并按字母数字连续段切分
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}
