// Copyright 2025 youbianrs contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// 应用程序配置设置
///
/// 包含交互式查询、API查询和批处理的所有配置项
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// 交互式查询配置
    pub lookup: LookupSettings,
    /// API查询配置
    pub api: ApiSettings,
    /// 批处理配置
    pub batch: BatchSettings,
}

/// 交互式查询配置设置
#[derive(Debug, Deserialize)]
pub struct LookupSettings {
    /// 查询网站地址
    pub base_url: String,
    /// 提交后等待结果的时间（毫秒）。
    /// 目标页面没有加载完成信号，这是一个启发式延时，不是正确性保证。
    pub settle_ms: u64,
    /// 是否使用无头模式
    pub headless: bool,
    /// 查询无结果时是否保存页面源码用于调试
    pub save_page_source: bool,
}

/// API查询配置设置
#[derive(Debug, Deserialize)]
pub struct ApiSettings {
    /// 候选API端点列表（按优先级排序）
    pub endpoints: Vec<String>,
    /// 单次请求超时时间（秒）
    pub timeout_secs: u64,
}

/// 批处理配置设置
#[derive(Debug, Deserialize)]
pub struct BatchSettings {
    /// 相邻两次查询之间的节流间隔（毫秒）
    pub throttle_ms: u64,
    /// 默认输出列名
    pub output_column: String,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从环境变量加载配置，支持默认值
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Default interactive lookup settings
            .set_default("lookup.base_url", "https://www.youbianku.com/")?
            .set_default("lookup.settle_ms", 3000)?
            .set_default("lookup.headless", true)?
            .set_default("lookup.save_page_source", true)?
            // Default API settings
            .set_default(
                "api.endpoints",
                vec![
                    "http://dey.11185.cn/api/address/search".to_string(),
                    "http://dey.11185.cn/api/toolkit/address".to_string(),
                    "http://dey.11185.cn/web/api/address".to_string(),
                ],
            )?
            .set_default("api.timeout_secs", 10)?
            // Default batch settings
            .set_default("batch.throttle_ms", 2000)?
            .set_default("batch.output_column", "邮政编码")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("YOUBIANRS").separator("__"));

        builder.build()?.try_deserialize()
    }
}
