// Copyright (c) 2025 youbianrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::postal_code::PostalCode;

/// 单次解析最多保留的候选编码数
pub const MAX_CANDIDATES: usize = 5;

/// 候选编码集合
///
/// 保持发现顺序，去重，最多 [`MAX_CANDIDATES`] 个。
/// 空集合是合法的解析结果，表示"未找到"，不是错误。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateSet {
    codes: Vec<PostalCode>,
}

impl CandidateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 尝试加入一个提取到的编码
    ///
    /// 编码先经过合理性校验，再去重、检查容量。
    /// 返回是否实际加入。
    pub fn push(&mut self, code: &str) -> bool {
        match PostalCode::parse(code) {
            Some(code) => self.push_code(code),
            None => false,
        }
    }

    /// 加入一个已构造的编码（去重、容量检查，不再校验）
    pub fn push_code(&mut self, code: PostalCode) -> bool {
        if self.is_full() || self.codes.contains(&code) {
            return false;
        }
        self.codes.push(code);
        true
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.codes.len() >= MAX_CANDIDATES
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn codes(&self) -> &[PostalCode] {
        &self.codes
    }

    /// 展平为输出单元格的值
    pub fn join(&self) -> String {
        self.codes
            .iter()
            .map(PostalCode::as_str)
            .collect::<Vec<_>>()
            .join("; ")
    }
}
