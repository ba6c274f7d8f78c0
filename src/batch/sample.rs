// Copyright (c) 2025 youbianrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::batch::dataset::Dataset;
use crate::utils::errors::LookupError;
use std::path::Path;
use tracing::info;

/// 示例地址数据
const SAMPLE_ROWS: &[(&str, &str)] = &[
    ("北京市朝阳区建国门外大街1号", "国贸大厦"),
    ("上海市浦东新区陆家嘴环路1000号", "上海中心"),
    ("广州市天河区珠江新城花城大道85号", "广州塔附近"),
    ("深圳市南山区粤海街道科技园南区", "腾讯总部"),
    ("杭州市西湖区文三路259号", "阿里巴巴园区"),
    ("南京市鼓楼区中山路321号", "新街口商圈"),
    ("武汉市武昌区中南路99号", "中南商业大楼"),
    ("成都市锦江区红星路三段1号", "春熙路商圈"),
    ("西安市雁塔区小寨西路232号", "小寨赛格"),
    ("重庆市渝中区解放碑步行街88号", "解放碑CBD"),
];

/// 生成用于测试的示例地址数据集
pub fn write_sample_dataset(path: &Path) -> Result<(), LookupError> {
    let mut dataset = Dataset::new(vec![
        "序号".to_string(),
        "地址".to_string(),
        "备注".to_string(),
    ]);

    for (index, (address, note)) in SAMPLE_ROWS.iter().enumerate() {
        dataset.push_row(vec![
            (index + 1).to_string(),
            (*address).to_string(),
            (*note).to_string(),
        ]);
    }

    dataset.write_to(path)?;
    info!("示例数据集已创建: {}", path.display());
    Ok(())
}
