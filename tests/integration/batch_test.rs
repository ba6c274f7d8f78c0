// Copyright (c) 2025 youbianrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use youbianrs::batch::dataset::Dataset;
use youbianrs::batch::resolver::{BatchResolver, NOT_FOUND_SENTINEL};
use youbianrs::batch::sample::write_sample_dataset;
use youbianrs::engines::api_engine::ApiEngine;
use youbianrs::engines::router::EngineRouter;
use youbianrs::engines::static_engine::StaticMappingEngine;
use youbianrs::engines::traits::LookupEngine;

/// 测试API引擎与静态映射组成的完整批处理链路
///
/// API端点只认识一个地址，其余地址回退到静态城市映射，
/// 都查不到的地址写入"未找到"。
#[tokio::test]
async fn test_batch_chain_api_then_static_fallback() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("address", "苏州市工业园区星湖街328号"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": { "postcode": "215123" }
        })))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("addresses.csv");
    let mut dataset = Dataset::new(vec!["地址".to_string()]);
    dataset.push_row(vec!["苏州市工业园区星湖街328号".to_string()]);
    dataset.push_row(vec!["北京市海淀区中关村大街1号".to_string()]);
    dataset.push_row(vec!["拉萨市城关区某路1号".to_string()]);
    dataset.write_to(&input).expect("write input");

    let engines: Vec<Arc<dyn LookupEngine>> = vec![
        Arc::new(ApiEngine::new(
            vec![format!("{}/lookup", server.uri())],
            Duration::from_secs(5),
        )),
        Arc::new(StaticMappingEngine),
    ];
    let resolver = BatchResolver::new(
        EngineRouter::new(engines),
        None,
        Duration::from_millis(0),
    );

    let output = resolver.run(&input, "地址", "邮政编码").await.expect("run");

    let result = Dataset::from_path(&output).expect("read output");
    let col = result.column_index("邮政编码").expect("output column");
    assert_eq!(result.cell(0, col), "215123", "resolved by the API endpoint");
    assert_eq!(result.cell(1, col), "100000", "falls back to the city mapping");
    assert_eq!(result.cell(2, col), NOT_FOUND_SENTINEL);
}

/// 测试示例数据集走完整批处理后每行都有结果
#[tokio::test]
async fn test_sample_dataset_resolves_end_to_end() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("sample_addresses.csv");
    write_sample_dataset(&input).expect("write sample");

    let resolver = BatchResolver::new(
        EngineRouter::new(vec![Arc::new(StaticMappingEngine) as Arc<dyn LookupEngine>]),
        None,
        Duration::from_millis(0),
    );
    let output = resolver.run(&input, "地址", "邮政编码").await.expect("run");

    assert_eq!(
        output,
        dir.path().join("sample_addresses_with_postal_codes.csv")
    );

    let result = Dataset::from_path(&output).expect("read output");
    let col = result.column_index("邮政编码").expect("output column");
    assert_eq!(result.row_count(), 10);
    assert_eq!(result.cell(0, col), "100000");
    assert_eq!(result.cell(3, col), "518000");
    assert_eq!(result.cell(9, col), "400000");
    for row in 0..result.row_count() {
        assert_ne!(result.cell(row, col), "", "every sample row gets a value");
    }
}
