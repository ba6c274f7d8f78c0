// Copyright (c) 2025 youbianrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::candidate_set::CandidateSet;
use crate::domain::models::surface::ResultSurface;
use crate::domain::services::extraction_service::ExtractionService;
use crate::engines::traits::{EngineError, LookupEngine};
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info};

const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// API查询引擎
///
/// 依次请求候选端点，返回第一个载荷中能提取出候选编码的响应。
/// 单个端点的任何失败（网络、状态码、JSON解析）都被吞掉，
/// 继续尝试下一个端点。
pub struct ApiEngine {
    client: reqwest::Client,
    endpoints: Vec<String>,
}

impl ApiEngine {
    /// 创建API查询引擎
    ///
    /// # 参数
    ///
    /// * `endpoints` - 候选端点列表（按优先级排序）
    /// * `timeout` - 单次请求超时时间
    pub fn new(endpoints: Vec<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_default();

        Self { client, endpoints }
    }

    /// 请求单个端点并提取载荷
    async fn query_endpoint(
        &self,
        endpoint: &str,
        address: &str,
    ) -> Result<CandidateSet, EngineError> {
        let response = self
            .client
            .get(endpoint)
            .query(&[
                ("address", address),
                ("query", address),
                ("keyword", address),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(EngineError::Other(format!("HTTP error: {}", status)));
        }

        let payload: Value = response.json().await?;
        Ok(ExtractionService::extract(&ResultSurface::Payload(payload)))
    }
}

#[async_trait]
impl LookupEngine for ApiEngine {
    async fn lookup(&self, address: &str) -> Result<CandidateSet, EngineError> {
        for endpoint in &self.endpoints {
            match self.query_endpoint(endpoint, address).await {
                Ok(candidates) if !candidates.is_empty() => {
                    info!("Endpoint {} resolved '{}'", endpoint, address);
                    return Ok(candidates);
                }
                Ok(_) => {
                    debug!("Endpoint {} returned no codes for '{}'", endpoint, address);
                }
                Err(e) => {
                    debug!("Endpoint {} failed: {}, trying next endpoint", endpoint, e);
                }
            }
        }

        Ok(CandidateSet::new())
    }

    fn name(&self) -> &'static str {
        "api"
    }
}
