// Copyright (c) 2025 youbianrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::fmt;

/// 邮政编码值类型
///
/// 6位数字字符串，按字符串相等比较（前导零有效，不是数值类型）。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct PostalCode(String);

impl PostalCode {
    /// 校验并构造邮政编码
    ///
    /// 从页面或API结果中提取的编码必须通过 [`PostalCode::is_valid`] 才能构造。
    pub fn parse(code: &str) -> Option<Self> {
        if Self::is_valid(code) {
            Some(Self(code.to_string()))
        } else {
            None
        }
    }

    /// 构造一个跳过启发式过滤的邮政编码
    ///
    /// 仅用于人工维护的静态映射表：市级代表编码（如北京100000）
    /// 以0000结尾，会被针对页面噪音设计的过滤规则误伤。
    pub fn trusted(code: &str) -> Self {
        Self(code.to_string())
    }

    /// 验证是否为有效的中国邮政编码
    ///
    /// 启发式规则，按顺序执行，第一条不满足即拒绝：
    /// 1. 必须是6位ASCII数字
    /// 2. 排除十个重复数字串（000000..999999）
    /// 3. 排除年份前缀（19xx/20xx，避免匹配到相邻年份数字）
    /// 4. 首位必须是1-9（中国邮政大区：1-华北，2-东北，3-华东，
    ///    4-中南，5-西南，6-西北，7-台湾，8-港澳，9-新疆）
    /// 5. 排除 00 开头或 0000 结尾的占位模式
    pub fn is_valid(code: &str) -> bool {
        if code.len() != 6 || !code.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }

        let bytes = code.as_bytes();
        if bytes.iter().all(|&b| b == bytes[0]) {
            return false;
        }

        if code.starts_with("19") || code.starts_with("20") {
            return false;
        }

        let first_digit = bytes[0] - b'0';
        if !(1..=9).contains(&first_digit) {
            return false;
        }

        if code.starts_with("00") || code.ends_with("0000") {
            return false;
        }

        true
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plausible_codes() {
        assert!(PostalCode::is_valid("518000"));
        assert!(PostalCode::is_valid("310012"));
        assert!(PostalCode::is_valid("100083"));
    }

    #[test]
    fn test_rejects_non_six_digit_input() {
        assert!(!PostalCode::is_valid(""));
        assert!(!PostalCode::is_valid("12345"));
        assert!(!PostalCode::is_valid("1234567"));
        assert!(!PostalCode::is_valid("10000a"));
        assert!(!PostalCode::is_valid("邮编一二三四"));
    }

    #[test]
    fn test_rejects_repeated_digit_strings() {
        for digit in 0..=9u8 {
            let code: String = std::iter::repeat(char::from(b'0' + digit)).take(6).collect();
            assert!(!PostalCode::is_valid(&code), "{} should be rejected", code);
        }
    }

    #[test]
    fn test_rejects_year_prefixes() {
        assert!(!PostalCode::is_valid("199801"));
        assert!(!PostalCode::is_valid("202500"));
    }

    #[test]
    fn test_rejects_placeholder_patterns() {
        assert!(!PostalCode::is_valid("001234"));
        assert!(!PostalCode::is_valid("310000"));
        assert!(!PostalCode::is_valid("120000"));
        // 市级根编码也会被 0000 结尾规则过滤，静态映射走 trusted 路径
        assert!(!PostalCode::is_valid("100000"));
    }

    #[test]
    fn test_parse_and_trusted_construction() {
        let code = PostalCode::parse("518000").expect("valid code");
        assert_eq!(code.as_str(), "518000");
        assert!(PostalCode::parse("000000").is_none());

        let city_root = PostalCode::trusted("100000");
        assert_eq!(city_root.as_str(), "100000");
    }
}
