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

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use youbianrs::batch::resolver::BatchResolver;
use youbianrs::batch::sample::write_sample_dataset;
use youbianrs::config::settings::Settings;
use youbianrs::engines::api_engine::ApiEngine;
use youbianrs::engines::chromium_driver::ChromiumDriver;
use youbianrs::engines::interactive_engine::InteractiveEngine;
use youbianrs::engines::page_driver::PageDriver;
use youbianrs::engines::router::EngineRouter;
use youbianrs::engines::static_engine::StaticMappingEngine;
use youbianrs::engines::traits::LookupEngine;
use youbianrs::utils::errors::LookupError;
use youbianrs::utils::telemetry;

/// 邮政编码批量查询工具
#[derive(Parser)]
#[command(name = "youbianrs", about = "批量查询中文地址的邮政编码并写回表格")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// 查询数据集中每个地址的邮政编码
    Run {
        /// 输入CSV文件路径
        input: PathBuf,
        /// 地址列名
        #[arg(long)]
        address_column: String,
        /// 输出列名，默认取配置中的 batch.output_column
        #[arg(long)]
        output_column: Option<String>,
        /// 显示浏览器窗口（默认无头模式）
        #[arg(long)]
        headed: bool,
        /// 跳过浏览器查询，只使用API和静态映射
        #[arg(long)]
        no_browser: bool,
    },
    /// 生成用于测试的示例地址数据集
    Sample {
        /// 输出文件路径
        #[arg(default_value = "sample_addresses.csv")]
        output: PathBuf,
    },
}

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并执行批量查询
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();

    let cli = Cli::parse();

    // 2. Load configuration
    let settings = Settings::new()?;
    info!("Configuration loaded");

    match cli.command {
        Command::Sample { output } => {
            write_sample_dataset(&output)?;
            println!("示例数据集已创建: {}", output.display());
        }
        Command::Run {
            input,
            address_column,
            output_column,
            headed,
            no_browser,
        } => {
            let output_column =
                output_column.unwrap_or_else(|| settings.batch.output_column.clone());

            // 3. Initialize lookup engines in priority order
            let mut engines: Vec<Arc<dyn LookupEngine>> = Vec::new();
            let mut session: Option<Arc<dyn PageDriver>> = None;

            if !no_browser {
                let headless = settings.lookup.headless && !headed;
                info!("正在初始化浏览器驱动...");
                let driver = Arc::new(
                    ChromiumDriver::launch(headless)
                        .await
                        .map_err(|e| LookupError::Setup(e.to_string()))?,
                );
                info!("浏览器驱动初始化完成");

                engines.push(Arc::new(InteractiveEngine::new(
                    driver.clone(),
                    settings.lookup.base_url.clone(),
                    Duration::from_millis(settings.lookup.settle_ms),
                    settings.lookup.save_page_source,
                )));
                session = Some(driver.clone() as Arc<dyn PageDriver>);
            }

            engines.push(Arc::new(ApiEngine::new(
                settings.api.endpoints.clone(),
                Duration::from_secs(settings.api.timeout_secs),
            )));
            engines.push(Arc::new(StaticMappingEngine));

            // 4. Run the batch
            let resolver = BatchResolver::new(
                EngineRouter::new(engines),
                session,
                Duration::from_millis(settings.batch.throttle_ms),
            );
            let output = resolver.run(&input, &address_column, &output_column).await?;

            println!("查询完成！结果已保存到: {}", output.display());
        }
    }

    Ok(())
}
