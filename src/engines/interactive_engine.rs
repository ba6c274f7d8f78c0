// Copyright (c) 2025 youbianrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::candidate_set::CandidateSet;
use crate::domain::models::surface::ResultSurface;
use crate::domain::services::extraction_service::{ExtractionService, RESULT_SELECTORS};
use crate::engines::page_driver::{Locator, PageDriver};
use crate::engines::traits::{EngineError, LookupEngine};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};

/// 地址输入框选择器，从最具体到最通用
const INPUT_LOCATORS: &[Locator] = &[
    Locator::Css("#search_text"),
    Locator::Css("input[name='q']"),
    Locator::Css("input[placeholder*='地址']"),
    Locator::Css("input[placeholder*='请输入']"),
    Locator::Css("input[placeholder*='搜索']"),
    Locator::Css("input[type='text']"),
    Locator::Css(".search-input"),
    Locator::Css(".search-box input"),
    Locator::Css("input"),
    Locator::Css("textarea"),
];

/// 查询按钮选择器，从最具体到最通用
const SUBMIT_LOCATORS: &[Locator] = &[
    Locator::Css("#search_btn"),
    Locator::Css("input[type='submit']"),
    Locator::Css("button[type='submit']"),
    Locator::ButtonText("搜索"),
    Locator::ButtonText("查询"),
    Locator::Css(".search-btn"),
    Locator::Css(".btn-search"),
    Locator::Css(".submit-btn"),
    Locator::Css("button"),
    Locator::Css("input[value*='搜索']"),
    Locator::Css("input[value*='查询']"),
];

/// 交互式查询引擎
///
/// 驱动查询网站的搜索表单：定位输入框、填入地址、提交、
/// 等待结果渲染后提取候选编码。每次查询都重新导航到入口页，
/// 保证输入框是空的。
pub struct InteractiveEngine {
    driver: Arc<dyn PageDriver>,
    base_url: String,
    /// 提交后的等待时间。页面没有加载完成信号，这是一个启发式延时。
    settle: Duration,
    /// 无结果时是否把页面源码存盘用于离线排查
    save_page_source: bool,
}

impl InteractiveEngine {
    pub fn new(
        driver: Arc<dyn PageDriver>,
        base_url: String,
        settle: Duration,
        save_page_source: bool,
    ) -> Self {
        Self {
            driver,
            base_url,
            settle,
            save_page_source,
        }
    }

    /// 沿回退列表找到第一个能输入的控件
    async fn fill_address(&self, address: &str) -> Result<Locator, EngineError> {
        for locator in INPUT_LOCATORS {
            if self.driver.fill(*locator, address).await.is_ok() {
                info!("Found address input via {}", locator);
                return Ok(*locator);
            }
        }
        Err(EngineError::ElementNotFound("address input".to_string()))
    }

    /// 提交查询：先沿回退列表点按钮，都找不到就在输入框上按回车
    async fn submit(&self, input: Locator) -> Result<(), EngineError> {
        for locator in SUBMIT_LOCATORS {
            if self.driver.click(*locator).await.is_ok() {
                info!("Clicked submit button via {}", locator);
                return Ok(());
            }
        }

        info!("No submit button found, pressing Enter on the input");
        self.driver.press_enter(input).await
    }

    /// 按选择器优先级收集结果区域的元素快照
    async fn collect_result_nodes(&self) -> Vec<crate::domain::models::surface::SurfaceNode> {
        let mut nodes = Vec::new();
        for selector in RESULT_SELECTORS {
            if let Ok(mut found) = self.driver.find_nodes(Locator::Css(*selector)).await {
                nodes.append(&mut found);
            }
        }
        nodes
    }

    /// 保存页面源码用于调试
    ///
    /// 只是诊断副作用，写盘失败不影响查询结果。
    fn dump_page_source(&self, address: &str, source: &str) {
        let safe: String = address
            .chars()
            .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '-' || *c == '_')
            .take(50)
            .collect();
        let filename = format!("page_source_{}.html", safe);
        match std::fs::write(&filename, source) {
            Ok(_) => info!("Saved page source to {}", filename),
            Err(e) => error!("Failed to save page source to {}: {}", filename, e),
        }
    }
}

#[async_trait]
impl LookupEngine for InteractiveEngine {
    async fn lookup(&self, address: &str) -> Result<CandidateSet, EngineError> {
        info!("Querying '{}' via interactive page", address);

        // 每次查询重新进入入口页
        self.driver.navigate(&self.base_url).await?;

        let input = self.fill_address(address).await?;
        self.submit(input).await?;

        // 等待结果渲染
        tokio::time::sleep(self.settle).await;

        let nodes = self.collect_result_nodes().await;
        let candidates = ExtractionService::extract(&ResultSurface::Nodes(nodes));
        if !candidates.is_empty() {
            return Ok(candidates);
        }

        // 元素扫描落空，退回到整个页面源码
        let source = self.driver.page_source().await?;
        let candidates = ExtractionService::extract(&ResultSurface::Raw(source.clone()));

        if candidates.is_empty() {
            warn!("No postal code found for '{}' on the page", address);
            if self.save_page_source {
                self.dump_page_source(address, &source);
            }
        }

        Ok(candidates)
    }

    fn name(&self) -> &'static str {
        "interactive"
    }
}
