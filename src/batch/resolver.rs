// Copyright (c) 2025 youbianrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::batch::dataset::Dataset;
use crate::engines::page_driver::PageDriver;
use crate::engines::router::EngineRouter;
use crate::utils::errors::LookupError;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};

/// 未找到时写入输出单元格的标记值
pub const NOT_FOUND_SENTINEL: &str = "未找到";

/// 批量解析器
///
/// 遍历数据集的地址列，逐个地址调用引擎路由器，把结果写回输出列。
/// 按唯一地址解析：每个不同的地址只查询一次，结果广播到所有匹配行。
/// 引擎层的失败不会中止批次；只有数据错误和会话错误会向上传播。
pub struct BatchResolver {
    router: EngineRouter,
    /// 批次独占的页面会话，在所有退出路径上关闭
    session: Option<Arc<dyn PageDriver>>,
    /// 相邻两次查询之间的节流间隔
    throttle: Duration,
}

impl BatchResolver {
    pub fn new(router: EngineRouter, session: Option<Arc<dyn PageDriver>>, throttle: Duration) -> Self {
        Self {
            router,
            session,
            throttle,
        }
    }

    /// 处理整个数据集
    ///
    /// # 参数
    ///
    /// * `input` - 输入CSV路径
    /// * `address_column` - 地址列名
    /// * `output_column` - 输出列名（不存在则创建）
    ///
    /// # 返回值
    ///
    /// * `Ok(PathBuf)` - 输出文件路径
    /// * `Err(LookupError)` - 数据错误，批次中止
    pub async fn run(
        &self,
        input: &Path,
        address_column: &str,
        output_column: &str,
    ) -> Result<PathBuf, LookupError> {
        let result = self.process(input, address_column, output_column).await;
        self.close_session().await;
        result
    }

    async fn process(
        &self,
        input: &Path,
        address_column: &str,
        output_column: &str,
    ) -> Result<PathBuf, LookupError> {
        info!("Reading dataset from {}", input.display());
        let mut dataset = Dataset::from_path(input)?;

        let address_col = dataset
            .column_index(address_column)
            .ok_or_else(|| LookupError::ColumnNotFound(address_column.to_string()))?;
        let output_col = dataset.ensure_column(output_column);

        // 按出现顺序收集唯一的非空地址
        let mut addresses = Vec::new();
        let mut seen = HashSet::new();
        for row in 0..dataset.row_count() {
            let address = dataset.cell(row, address_col).trim().to_string();
            if address.is_empty() {
                continue;
            }
            if seen.insert(address.clone()) {
                addresses.push(address);
            }
        }

        let total = addresses.len();
        info!("共需要查询 {} 个地址", total);

        for (index, address) in addresses.iter().enumerate() {
            info!("正在处理 {}/{}: {}", index + 1, total, address);

            let candidates = self.router.resolve(address).await;
            let value = if candidates.is_empty() {
                warn!("未找到邮政编码，标记为'{}'", NOT_FOUND_SENTINEL);
                NOT_FOUND_SENTINEL.to_string()
            } else {
                let joined = candidates.join();
                info!("已更新邮政编码: {}", joined);
                joined
            };

            // 广播到所有匹配行
            for row in 0..dataset.row_count() {
                if dataset.cell(row, address_col).trim() == address.as_str() {
                    dataset.set_cell(row, output_col, value.clone());
                }
            }

            // 节流，避免请求过于频繁
            if index + 1 < total {
                tokio::time::sleep(self.throttle).await;
            }
        }

        let output = Dataset::output_path(input);
        dataset.write_to(&output)?;
        info!("结果已保存到: {}", output.display());

        Ok(output)
    }

    /// 关闭页面会话
    ///
    /// 成功、数据错误、中断都要经过这里。
    async fn close_session(&self) {
        if let Some(session) = &self.session {
            match session.close().await {
                Ok(_) => info!("浏览器会话已关闭"),
                Err(e) => error!("关闭浏览器会话时发生错误: {}", e),
            }
        }
    }
}
