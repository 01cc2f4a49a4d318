//! 自动识别：按优先级顺序的模式级联，首个命中即返回
//! 顺序：电话 > 网址 > 地址 > 邮编 > 公司名称（兜底）
//! 例如纯 10 位数字判为电话而不是邮编

use once_cell::sync::Lazy;
use tracing::debug;

use super::category::Category;
use super::pattern::{first_match, ClassificationPattern};
use crate::normalizer::postal::POSTAL_PATTERNS;
use crate::utils::is_blank;

/// 电话模式（整串匹配）
pub static PHONE_PATTERNS: Lazy<Vec<ClassificationPattern>> = Lazy::new(|| {
    vec![
        // (555) 123-4567 / 555.123.4567 / 5551234567，区号首位 2-9
        ClassificationPattern::builtin("us", r"^\(?[2-9]\d{2}\)?[-.\s]?\d{3}[-.\s]?\d{4}$"),
        // +1 (555) 123-4567 / 1-555-123-4567
        ClassificationPattern::builtin(
            "us_country_code",
            r"^\+?1[-.\s]?\(?[2-9]\d{2}\)?[-.\s]?\d{3}[-.\s]?\d{4}$",
        ),
        // +44 20 7946 0958：国家码 + 1-4 组数字，共 7-15 位
        ClassificationPattern::builtin(
            "international",
            r"^\+\d{1,3}(?:[-.\s]?\(?\d{1,12}\)?){1,4}$",
        )
        .with_digit_count(7..=15),
        // 0044 20 7946 0958：00 前缀（计数含前缀两位）
        ClassificationPattern::builtin(
            "international_00",
            r"^00\d{1,3}(?:[-.\s]?\(?\d{1,12}\)?){1,4}$",
        )
        .with_digit_count(9..=17),
    ]
});

/// 网址模式
pub static WEBSITE_PATTERNS: Lazy<Vec<ClassificationPattern>> = Lazy::new(|| {
    vec![
        ClassificationPattern::builtin("scheme_or_www", r"(?i)^(?:https?://|www\.)"),
        ClassificationPattern::builtin("common_tld", r"(?i)\.(?:com|org|net)\b"),
    ]
});

/// 地址模式：门牌号 + 街名 + 街道后缀
pub static ADDRESS_PATTERNS: Lazy<Vec<ClassificationPattern>> = Lazy::new(|| {
    vec![ClassificationPattern::builtin(
        "street_line",
        r"(?i)\b\d+\s+(?:[\w'.-]+\s+){1,3}(?:street|st|avenue|ave|road|rd|boulevard|blvd|drive|dr|lane|ln|court|ct|circle|cir|place|pl|square|sq|terrace|ter|way|parkway|pkwy|highway|hwy|freeway|fwy)\b",
    )]
});

/// 分类级联表（顺序即优先级，公司名称为兜底不在表中）
static CASCADE: Lazy<Vec<(Category, &'static [ClassificationPattern])>> = Lazy::new(|| {
    vec![
        (Category::PhoneNumber, PHONE_PATTERNS.as_slice()),
        (Category::Website, WEBSITE_PATTERNS.as_slice()),
        (Category::Address, ADDRESS_PATTERNS.as_slice()),
        (Category::PostalCode, POSTAL_PATTERNS.as_slice()),
    ]
});

/// 分类器
pub struct Classifier;

impl Classifier {
    /// 判定输入类别；空输入返回 None
    pub fn classify(text: &str) -> Option<Category> {
        if is_blank(text) {
            return None;
        }

        let trimmed = text.trim();
        for (category, patterns) in CASCADE.iter() {
            if let Some(pattern) = first_match(patterns, trimmed) {
                debug!("Classified as {} via pattern [{}]", category, pattern.name);
                return Some(*category);
            }
        }

        debug!("No pattern matched, defaulting to {}", Category::CompanyName);
        Some(Category::CompanyName)
    }

    /// 级联表（按优先级排列）
    pub fn cascade() -> &'static [(Category, &'static [ClassificationPattern])] {
        CASCADE.as_slice()
    }

    pub fn phone_patterns() -> &'static [ClassificationPattern] {
        PHONE_PATTERNS.as_slice()
    }

    pub fn website_patterns() -> &'static [ClassificationPattern] {
        WEBSITE_PATTERNS.as_slice()
    }

    pub fn address_patterns() -> &'static [ClassificationPattern] {
        ADDRESS_PATTERNS.as_slice()
    }

    pub fn postal_patterns() -> &'static [ClassificationPattern] {
        POSTAL_PATTERNS.as_slice()
    }
}
