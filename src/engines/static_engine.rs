// Copyright (c) 2025 youbianrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::candidate_set::CandidateSet;
use crate::domain::models::postal_code::PostalCode;
use crate::engines::traits::{EngineError, LookupEngine};
use async_trait::async_trait;
use tracing::debug;

/// 市级地名到代表编码的映射
///
/// 人工维护的兜底数据，不是核实过的精确邮编。
/// 代表编码以0000结尾，跳过针对页面噪音的启发式过滤。
const CITY_CODES: &[(&str, &str)] = &[
    ("北京市", "100000"),
    ("上海市", "200000"),
    ("广州市", "510000"),
    ("深圳市", "518000"),
    ("杭州市", "310000"),
    ("南京市", "210000"),
    ("武汉市", "430000"),
    ("成都市", "610000"),
    ("西安市", "710000"),
    ("重庆市", "400000"),
];

/// 静态映射引擎
///
/// 链条的最后一环：按市级地名子串匹配，命中即返回单元素候选集。
/// 明确的低置信度兜底，不做任何远程查询。
pub struct StaticMappingEngine;

#[async_trait]
impl LookupEngine for StaticMappingEngine {
    async fn lookup(&self, address: &str) -> Result<CandidateSet, EngineError> {
        for (city, code) in CITY_CODES {
            if address.contains(city) {
                debug!("Static mapping matched '{}' for '{}'", city, address);
                let mut candidates = CandidateSet::new();
                candidates.push_code(PostalCode::trusted(code));
                return Ok(candidates);
            }
        }

        Ok(CandidateSet::new())
    }

    fn name(&self) -> &'static str {
        "static"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_matches_city_substring() {
        let engine = StaticMappingEngine;
        let result = engine
            .lookup("北京市朝阳区建国门外大街1号")
            .await
            .expect("lookup");
        assert_eq!(result.join(), "100000");
    }

    #[tokio::test]
    async fn test_unknown_city_yields_empty_set() {
        let engine = StaticMappingEngine;
        let result = engine.lookup("拉萨市城关区").await.expect("lookup");
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_first_matching_city_wins() {
        let engine = StaticMappingEngine;
        let result = engine
            .lookup("上海市浦东新区陆家嘴环路1000号")
            .await
            .expect("lookup");
        assert_eq!(result.join(), "200000");
    }
}
