// Copyright (c) 2025 youbianrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::surface::{SurfaceNode, ATTRIBUTE_HINTS};
use crate::engines::page_driver::{Locator, PageDriver};
use crate::engines::traits::EngineError;
use async_trait::async_trait;
use chromiumoxide::element::Element;
use chromiumoxide::{Browser, BrowserConfig, Page};
use futures::StreamExt;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

/// 基于chromiumoxide的页面驱动
///
/// 持有一个浏览器实例和单个标签页，整个批次复用，
/// 由批处理层在所有退出路径上关闭。
pub struct ChromiumDriver {
    browser: Mutex<Browser>,
    page: Page,
    handler_task: JoinHandle<()>,
}

impl ChromiumDriver {
    /// 启动无头Chromium并打开空白页
    ///
    /// # 参数
    ///
    /// * `headless` - 是否使用无头模式
    ///
    /// # 返回值
    ///
    /// * `Ok(ChromiumDriver)` - 可用的页面驱动
    /// * `Err(EngineError)` - 浏览器启动失败（调用方视为致命的会话初始化失败）
    pub async fn launch(headless: bool) -> Result<Self, EngineError> {
        let mut builder = BrowserConfig::builder()
            .no_sandbox()
            .window_size(1920, 1080)
            .request_timeout(Duration::from_secs(30))
            .arg("--disable-gpu")
            .arg("--disable-dev-shm-usage");

        if !headless {
            builder = builder.with_head();
        }

        let config = builder.build().map_err(EngineError::Browser)?;
        let (browser, mut handler) = Browser::launch(config)
            .await
            .map_err(|e| EngineError::Browser(e.to_string()))?;

        // Spawn a handler to process browser events
        let handler_task = tokio::spawn(async move {
            while let Some(h) = handler.next().await {
                if h.is_err() {
                    break;
                }
            }
        });

        let page = browser
            .new_page("about:blank")
            .await
            .map_err(|e| EngineError::Browser(e.to_string()))?;

        Ok(Self {
            browser: Mutex::new(browser),
            page,
            handler_task,
        })
    }

    /// 查找匹配元素列表
    ///
    /// chromiumoxide对无匹配的查询会报错；这里统一折叠成空列表，
    /// 让上层的选择器回退逻辑只需要处理"有/没有"。
    async fn elements(&self, locator: Locator) -> Vec<Element> {
        let result = match locator {
            Locator::Css(selector) => self.page.find_elements(selector).await,
            Locator::ButtonText(text) => {
                self.page
                    .find_xpaths(format!("//button[contains(text(), '{}')]", text))
                    .await
            }
        };
        result.unwrap_or_default()
    }

    async fn first_element(&self, locator: Locator) -> Result<Element, EngineError> {
        self.elements(locator)
            .await
            .into_iter()
            .next()
            .ok_or_else(|| EngineError::ElementNotFound(locator.to_string()))
    }
}

#[async_trait]
impl PageDriver for ChromiumDriver {
    async fn navigate(&self, url: &str) -> Result<(), EngineError> {
        self.page
            .goto(url)
            .await
            .map_err(|e| EngineError::Browser(e.to_string()))?;
        Ok(())
    }

    async fn find_nodes(&self, locator: Locator) -> Result<Vec<SurfaceNode>, EngineError> {
        let mut nodes = Vec::new();

        for element in self.elements(locator).await {
            let text = element
                .inner_text()
                .await
                .ok()
                .flatten()
                .unwrap_or_default();

            let mut attributes = HashMap::new();
            for attr in ATTRIBUTE_HINTS {
                if let Ok(Some(value)) = element.attribute(*attr).await {
                    attributes.insert((*attr).to_string(), value);
                }
            }

            nodes.push(SurfaceNode { text, attributes });
        }

        Ok(nodes)
    }

    async fn fill(&self, locator: Locator, text: &str) -> Result<(), EngineError> {
        let element = self.first_element(locator).await?;
        element
            .click()
            .await
            .map_err(|e| EngineError::Browser(e.to_string()))?;
        element
            .type_str(text)
            .await
            .map_err(|e| EngineError::Browser(e.to_string()))?;
        Ok(())
    }

    async fn click(&self, locator: Locator) -> Result<(), EngineError> {
        let element = self.first_element(locator).await?;
        element
            .click()
            .await
            .map_err(|e| EngineError::Browser(e.to_string()))?;
        Ok(())
    }

    async fn press_enter(&self, locator: Locator) -> Result<(), EngineError> {
        let element = self.first_element(locator).await?;
        element
            .press_key("Enter")
            .await
            .map_err(|e| EngineError::Browser(e.to_string()))?;
        Ok(())
    }

    async fn page_source(&self) -> Result<String, EngineError> {
        self.page
            .content()
            .await
            .map_err(|e| EngineError::Browser(e.to_string()))
    }

    async fn close(&self) -> Result<(), EngineError> {
        let mut browser = self.browser.lock().await;
        browser
            .close()
            .await
            .map_err(|e| EngineError::Browser(e.to_string()))?;
        let _ = browser.wait().await;
        self.handler_task.abort();
        Ok(())
    }
}
