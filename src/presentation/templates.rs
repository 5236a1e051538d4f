// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Serialize;
use thiserror::Error;
use upon::Engine;

/// 模板错误类型
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("unknown template: {0}")]
    Unknown(String),
    #[error("template render failed: {0}")]
    Render(#[from] upon::Error),
}

/// HTML模板集合
///
/// 启动时一次性编译全部模板，语法错误在启动阶段暴露
/// 而不是在请求处理中
pub struct Templates {
    engine: Engine<'static>,
}

impl Templates {
    /// 编译内置模板集
    pub fn new() -> Result<Self, TemplateError> {
        let mut engine = Engine::new();
        engine.add_template("index", include_str!("../../templates/index.html"))?;
        engine.add_template("library", include_str!("../../templates/library.html"))?;
        engine.add_template("category", include_str!("../../templates/category.html"))?;
        engine.add_template("analytics", include_str!("../../templates/analytics.html"))?;
        Ok(Self { engine })
    }

    /// 按名称渲染模板
    pub fn render(&self, name: &str, ctx: impl Serialize) -> Result<String, TemplateError> {
        let template = self
            .engine
            .get_template(name)
            .ok_or_else(|| TemplateError::Unknown(name.to_string()))?;
        Ok(template.render(ctx).to_string()?)
    }
}
