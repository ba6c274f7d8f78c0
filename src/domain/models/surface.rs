// Copyright (c) 2025 youbianrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde_json::Value;
use std::collections::HashMap;

/// 可能携带邮政编码的元素属性名
pub const ATTRIBUTE_HINTS: &[&str] = &["data-postcode", "data-zipcode", "title", "alt"];

/// 页面元素快照
///
/// 从活动页面读出的可见文本与提示属性，脱离会话后仍可提取。
#[derive(Debug, Clone, Default)]
pub struct SurfaceNode {
    pub text: String,
    pub attributes: HashMap<String, String>,
}

impl SurfaceNode {
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            attributes: HashMap::new(),
        }
    }
}

/// 查询引擎返回的结果面
///
/// 提取服务根据变体选择扫描策略。
#[derive(Debug, Clone)]
pub enum ResultSurface {
    /// 页面元素快照集合（按选择器优先级排列）
    Nodes(Vec<SurfaceNode>),
    /// 原始HTML/文本内容
    Raw(String),
    /// API返回的JSON树
    Payload(Value),
}
