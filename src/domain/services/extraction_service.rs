// Copyright (c) 2025 youbianrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::candidate_set::CandidateSet;
use crate::domain::models::surface::{ResultSurface, SurfaceNode, ATTRIBUTE_HINTS};
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};
use serde_json::Value;

/// 结果区域选择器，按优先级排列：
/// 先查专用结果容器，再查表格单元格，最后兜底到通用叶子元素。
pub const RESULT_SELECTORS: &[&str] = &[
    ".result .postal-code",
    ".result td",
    ".search-result",
    ".postal-code",
    ".zipcode",
    ".post-code",
    "[class*='postal']",
    "[class*='zip']",
    "[class*='code']",
    ".result-item",
    ".result",
    ".data-item",
    "table td",
    "tr td",
    "td",
    "span",
    "div",
];

/// JSON载荷中视为邮政编码的键名（小写比较）
const PAYLOAD_KEY_ALIASES: &[&str] = &[
    "postcode",
    "zipcode",
    "postal_code",
    "code",
    "邮编",
    "邮政编码",
];

static CODE_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d{6}\b").unwrap());

/// 带标签的编码模式，区域性写法优先
static LABELED_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"邮编[：:]\s*(\d{6})").unwrap(),
        Regex::new(r"邮政编码[：:]\s*(\d{6})").unwrap(),
        Regex::new(r"(?i)postcode[：:]\s*(\d{6})").unwrap(),
    ]
});

/// 候选编码提取服务
///
/// 对结果面做分层扫描：结构化扫描 → 标签文本回退 → 裸6位数字回退。
/// 提取永远不会失败；缺失或畸形的输入只是不贡献候选。
pub struct ExtractionService;

impl ExtractionService {
    /// 从结果面提取候选编码
    pub fn extract(surface: &ResultSurface) -> CandidateSet {
        let mut candidates = CandidateSet::new();

        match surface {
            ResultSurface::Nodes(nodes) => {
                Self::scan_nodes(nodes, &mut candidates);
            }
            ResultSurface::Raw(content) => {
                Self::scan_markup(content, &mut candidates);
                if candidates.is_empty() {
                    Self::scan_labeled_text(content, &mut candidates);
                }
            }
            ResultSurface::Payload(value) => {
                Self::walk_payload(value, &mut candidates);
            }
        }

        candidates
    }

    /// 第一层：扫描页面元素快照的文本与提示属性
    fn scan_nodes(nodes: &[SurfaceNode], candidates: &mut CandidateSet) {
        for node in nodes {
            if candidates.is_full() {
                break;
            }
            Self::collect_tokens(&node.text, candidates);
            for attr in ATTRIBUTE_HINTS {
                if let Some(value) = node.attributes.get(*attr) {
                    Self::collect_tokens(value, candidates);
                }
            }
        }
    }

    /// 第一层（原始HTML变体）：解析文档后按选择器优先级扫描
    fn scan_markup(content: &str, candidates: &mut CandidateSet) {
        let document = Html::parse_document(content);

        for selector_str in RESULT_SELECTORS {
            let selector = match Selector::parse(selector_str) {
                Ok(s) => s,
                Err(_) => continue,
            };

            for element in document.select(&selector) {
                if candidates.is_full() {
                    return;
                }

                let text = element.text().collect::<Vec<_>>().join(" ");
                Self::collect_tokens(text.trim(), candidates);

                for attr in ATTRIBUTE_HINTS {
                    if let Some(value) = element.value().attr(attr) {
                        Self::collect_tokens(value, candidates);
                    }
                }
            }
        }
    }

    /// 第二层：整段内容上的标签模式回退，最后退化为裸6位数字
    ///
    /// 某个模式一旦贡献了候选就停止，避免裸模式把无关数字也卷进来。
    fn scan_labeled_text(content: &str, candidates: &mut CandidateSet) {
        for pattern in LABELED_PATTERNS.iter() {
            for capture in pattern.captures_iter(content) {
                if let Some(code) = capture.get(1) {
                    candidates.push(code.as_str());
                }
                if candidates.is_full() {
                    break;
                }
            }
            if !candidates.is_empty() {
                return;
            }
        }

        Self::collect_tokens(content, candidates);
    }

    /// 递归遍历JSON载荷
    ///
    /// 只接受键名命中别名且值恰为6位数字串的字段，
    /// 不对任意载荷值做正则开窗匹配。
    fn walk_payload(value: &Value, candidates: &mut CandidateSet) {
        if candidates.is_full() {
            return;
        }

        match value {
            Value::Object(map) => {
                for (key, child) in map {
                    if PAYLOAD_KEY_ALIASES.contains(&key.to_lowercase().as_str()) {
                        if let Some(text) = child.as_str() {
                            if text.len() == 6 && text.bytes().all(|b| b.is_ascii_digit()) {
                                candidates.push(text);
                            }
                        }
                    } else if child.is_object() || child.is_array() {
                        Self::walk_payload(child, candidates);
                    }
                }
            }
            Value::Array(items) => {
                for item in items {
                    Self::walk_payload(item, candidates);
                }
            }
            _ => {}
        }
    }

    /// 在一段文本中收集通过校验的6位数字token
    fn collect_tokens(text: &str, candidates: &mut CandidateSet) {
        if text.is_empty() {
            return;
        }
        for token in CODE_TOKEN.find_iter(text) {
            if candidates.is_full() {
                return;
            }
            candidates.push(token.as_str());
        }
    }
}
