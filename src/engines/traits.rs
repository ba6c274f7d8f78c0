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

use crate::domain::models::candidate_set::CandidateSet;
use async_trait::async_trait;
use thiserror::Error;

/// 引擎错误类型
///
/// 引擎内部的失败都是瞬时性的（超时、元素缺失、网络错误），
/// 由路由器捕获并视为空结果，不会向批处理层传播。
#[derive(Error, Debug)]
pub enum EngineError {
    /// 请求失败
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    /// 页面元素未找到
    #[error("Element not found: {0}")]
    ElementNotFound(String),
    /// 浏览器错误
    #[error("Browser error: {0}")]
    Browser(String),
    /// 超时
    #[error("Timeout")]
    Timeout,
    /// 其他错误
    #[error("Other error: {0}")]
    Other(String),
}

/// 邮编查询引擎特质
#[async_trait]
pub trait LookupEngine: Send + Sync {
    /// 查询一个地址的候选邮政编码
    ///
    /// 空集合表示"该引擎没有找到"，是合法结果而非错误。
    async fn lookup(&self, address: &str) -> Result<CandidateSet, EngineError>;

    /// 引擎名称
    fn name(&self) -> &'static str;
}
