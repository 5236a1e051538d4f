// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use pulldown_cmark::{html, Options, Parser};

/// 将Markdown文本渲染为HTML片段
///
/// 数据集的 `content` 列和PyPI包描述均以Markdown存储，
/// 展示前统一通过此函数渲染
pub fn render(input: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(input, options);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}
