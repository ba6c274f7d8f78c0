// Copyright (c) 2025 youbianrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use youbianrs::engines::api_engine::ApiEngine;
use youbianrs::engines::traits::LookupEngine;

/// 测试API引擎从JSON负载中提取邮政编码
///
/// 验证嵌套负载中的别名键（如 data.postcode）能被正确识别。
#[tokio::test]
async fn test_api_engine_extracts_code_from_payload() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/lookup"))
        .and(query_param("address", "深圳市南山区科技园"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "ok",
            "data": { "postcode": "518031", "city": "深圳市" }
        })))
        .mount(&server)
        .await;

    let engine = ApiEngine::new(
        vec![format!("{}/lookup", server.uri())],
        Duration::from_secs(5),
    );

    let candidates = engine.lookup("深圳市南山区科技园").await.unwrap();
    assert_eq!(candidates.join(), "518031");
}

/// 测试端点失败后回退到下一个端点
///
/// 第一个端点返回500，引擎应继续尝试第二个端点并返回其结果。
#[tokio::test]
async fn test_api_engine_falls_back_on_endpoint_failure() {
    let failing = MockServer::start().await;
    let healthy = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&failing)
        .await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "result": { "zipcode": "310012" }
        })))
        .mount(&healthy)
        .await;

    let engine = ApiEngine::new(
        vec![
            format!("{}/api", failing.uri()),
            format!("{}/api", healthy.uri()),
        ],
        Duration::from_secs(5),
    );

    let candidates = engine.lookup("杭州市西湖区").await.unwrap();
    assert_eq!(candidates.join(), "310012");
}

/// 测试非别名键下的六位数字不会被误判
///
/// 负载中只有 year 字段时不应产生任何候选。
#[tokio::test]
async fn test_api_engine_ignores_non_alias_digit_values() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "year": "199801",
            "count": 42
        })))
        .mount(&server)
        .await;

    let engine = ApiEngine::new(
        vec![format!("{}/lookup", server.uri())],
        Duration::from_secs(5),
    );

    let candidates = engine.lookup("某地址").await.unwrap();
    assert!(candidates.is_empty());
}

/// 测试所有端点均失败时返回空候选集而非错误
#[tokio::test]
async fn test_api_engine_all_endpoints_failing_yields_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let engine = ApiEngine::new(
        vec![format!("{}/lookup", server.uri())],
        Duration::from_secs(5),
    );

    let candidates = engine.lookup("某地址").await.unwrap();
    assert!(candidates.is_empty());
}
