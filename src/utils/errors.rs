// Copyright (c) 2025 youbianrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::path::PathBuf;
use thiserror::Error;

/// 批处理致命错误类型
///
/// 引擎内部的瞬时失败由路由器就地吸收，不会出现在这里；
/// 只有会话初始化失败和数据集错误会中止整个批次。
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("浏览器会话初始化失败: {0}")]
    Setup(String),

    #[error("未找到地址列 '{0}'")]
    ColumnNotFound(String),

    #[error("文件不存在: {0}")]
    FileNotFound(PathBuf),

    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV错误: {0}")]
    Csv(#[from] csv::Error),
}
