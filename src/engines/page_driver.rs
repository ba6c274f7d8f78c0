// Copyright (c) 2025 youbianrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::surface::SurfaceNode;
use crate::engines::traits::EngineError;
use async_trait::async_trait;
use std::fmt;

/// 元素定位方式
///
/// CSS选择器覆盖绝大多数情况；按钮文本用于没有稳定
/// class/id、只能靠可见文字找到的提交按钮。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locator {
    Css(&'static str),
    ButtonText(&'static str),
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locator::Css(selector) => write!(f, "css:{}", selector),
            Locator::ButtonText(text) => write!(f, "button:{}", text),
        }
    }
}

/// 页面自动化能力
///
/// 交互式查询引擎依赖的最小接口；生产实现基于无头Chromium，
/// 测试中用内存实现替代。
#[async_trait]
pub trait PageDriver: Send + Sync {
    /// 导航到指定URL
    async fn navigate(&self, url: &str) -> Result<(), EngineError>;

    /// 查找所有匹配元素，返回文本与提示属性的快照
    ///
    /// 没有匹配时返回空列表，不是错误。
    async fn find_nodes(&self, locator: Locator) -> Result<Vec<SurfaceNode>, EngineError>;

    /// 在第一个匹配元素中输入文本
    async fn fill(&self, locator: Locator, text: &str) -> Result<(), EngineError>;

    /// 点击第一个匹配元素
    async fn click(&self, locator: Locator) -> Result<(), EngineError>;

    /// 在第一个匹配元素上按回车提交
    async fn press_enter(&self, locator: Locator) -> Result<(), EngineError>;

    /// 读取当前文档内容
    async fn page_source(&self) -> Result<String, EngineError>;

    /// 关闭会话，释放浏览器资源
    async fn close(&self) -> Result<(), EngineError>;
}
