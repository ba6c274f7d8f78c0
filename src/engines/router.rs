// Copyright (c) 2025 youbianrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::candidate_set::CandidateSet;
use crate::engines::traits::LookupEngine;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// 引擎路由器
///
/// 按固定优先级依次尝试查询引擎，返回第一个非空候选集。
/// 单个引擎的失败被就地吸收，继续尝试下一个引擎；
/// 所有引擎都没有结果时返回空集合，调用方将其解释为"未找到"。
pub struct EngineRouter {
    /// 引擎列表（按优先级排序）
    engines: Vec<Arc<dyn LookupEngine>>,
}

impl EngineRouter {
    /// 创建新的引擎路由器
    ///
    /// # 参数
    ///
    /// * `engines` - 引擎列表，排在前面的优先尝试
    pub fn new(engines: Vec<Arc<dyn LookupEngine>>) -> Self {
        Self { engines }
    }

    /// 解析一个地址
    ///
    /// # 参数
    ///
    /// * `address` - 要查询的地址
    ///
    /// # 返回值
    ///
    /// 第一个成功引擎的候选集；全部落空时为空集合
    pub async fn resolve(&self, address: &str) -> CandidateSet {
        for engine in &self.engines {
            match engine.lookup(address).await {
                Ok(candidates) if !candidates.is_empty() => {
                    info!(
                        "Engine {} resolved '{}' to {} candidate(s)",
                        engine.name(),
                        address,
                        candidates.len()
                    );
                    return candidates;
                }
                Ok(_) => {
                    debug!(
                        "Engine {} found nothing for '{}', trying next engine",
                        engine.name(),
                        address
                    );
                }
                Err(e) => {
                    warn!(
                        "Engine {} failed for '{}': {}, trying next engine",
                        engine.name(),
                        address,
                        e
                    );
                }
            }
        }

        CandidateSet::new()
    }
}
