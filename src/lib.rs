// Copyright (c) 2025 youbianrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 批处理模块
///
/// 实现数据集读写与逐地址批量解析
pub mod batch;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含邮政编码值类型、候选集合与提取服务
pub mod domain;

/// 引擎模块
///
/// 实现各种邮编查询引擎及其路由
pub mod engines;

/// 工具模块
///
/// 提供错误类型与日志初始化
pub mod utils;
