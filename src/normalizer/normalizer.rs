//! 规范化器核心：整合分类器与各类别流水线，统一处理失败降级

use std::sync::Arc;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::options::NormalizationOptions;
use super::{address, company, phone, postal, website};
use crate::compiler::CompiledRules;
use crate::config::GlobalConfig;
use crate::detector::{Category, Classifier, DataType};
use crate::error::NormResult;
use crate::rule::{RuleLoader, RuleSet};
use crate::utils::is_blank;

/// 单条规范化结果（附带最终判定的具体类别）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedValue {
    pub original: String,
    pub normalized: String,
    /// 判定出的具体类别，非空输入必为 Some。
    /// None 仅表示输入为空、从未进入分类，不是一种分类结果
    pub category: Option<Category>,
}

/// 规范化器（无内部可变状态，克隆廉价，可跨线程共享）
#[derive(Debug, Clone)]
pub struct Normalizer {
    rules: Arc<CompiledRules>,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(RuleSet::defaults())
    }
}

impl Normalizer {
    /// 基于规则集创建
    pub fn new(rule_set: RuleSet) -> Self {
        Self::with_rules(Arc::new(rule_set))
    }

    pub fn with_rules(rule_set: Arc<RuleSet>) -> Self {
        Self {
            rules: Arc::new(CompiledRules::new(rule_set)),
        }
    }

    /// 按全局配置加载规则文件后创建
    pub fn from_config(config: &GlobalConfig) -> NormResult<Self> {
        let rule_set = RuleLoader::load(config)?;
        Ok(Self::new(rule_set))
    }

    pub fn rules(&self) -> &CompiledRules {
        &self.rules
    }

    /// 公司名称
    pub fn company_name(&self, text: &str, options: &NormalizationOptions) -> String {
        self.guard(Category::CompanyName, text, |t| company::canonicalize(&self.rules, t, options))
    }

    /// 网址
    pub fn website(&self, text: &str, options: &NormalizationOptions) -> String {
        self.guard(Category::Website, text, |t| Ok(website::canonicalize(t, options)))
    }

    /// 电话号码
    pub fn phone_number(&self, text: &str, options: &NormalizationOptions) -> String {
        self.guard(Category::PhoneNumber, text, |t| Ok(phone::canonicalize(t, options)))
    }

    /// 地址
    pub fn address(&self, text: &str, options: &NormalizationOptions) -> String {
        self.guard(Category::Address, text, |t| address::canonicalize(&self.rules, t, options))
    }

    /// 邮编
    pub fn postal_code(&self, text: &str) -> String {
        self.guard(Category::PostalCode, text, |t| Ok(postal::canonicalize(t)))
    }

    /// 按具体类别规范化
    pub fn canonicalize(&self, category: Category, text: &str, options: &NormalizationOptions) -> String {
        match category {
            Category::CompanyName => self.company_name(text, options),
            Category::Website => self.website(text, options),
            Category::PhoneNumber => self.phone_number(text, options),
            Category::Address => self.address(text, options),
            Category::PostalCode => self.postal_code(text),
        }
    }

    /// 自动识别类别后规范化
    pub fn auto(&self, text: &str, options: &NormalizationOptions) -> String {
        self.normalize_detailed(text, DataType::Auto, options).normalized
    }

    /// 通用入口
    pub fn normalize(&self, text: &str, data_type: DataType, options: &NormalizationOptions) -> String {
        self.normalize_detailed(text, data_type, options).normalized
    }

    /// 通用入口（返回判定类别）
    pub fn normalize_detailed(
        &self,
        text: &str,
        data_type: DataType,
        options: &NormalizationOptions,
    ) -> NormalizedValue {
        // 空输入在分类前短路
        let category = if is_blank(text) {
            None
        } else {
            data_type.category().or_else(|| Classifier::classify(text))
        };

        let normalized = match category {
            Some(category) => self.canonicalize(category, text, options),
            None => String::new(),
        };

        NormalizedValue {
            original: text.to_string(),
            normalized,
            category,
        }
    }

    /// 批量规范化（同一数据类型）
    pub fn normalize_batch<S: AsRef<str>>(
        &self,
        items: &[S],
        data_type: DataType,
        options: &NormalizationOptions,
    ) -> Vec<String> {
        items
            .iter()
            .map(|item| self.normalize(item.as_ref(), data_type, options))
            .collect()
    }

    /// 流水线边界：空输入直接返回空串；内部失败记录告警并退回去空白的原始输入
    fn guard<F>(&self, category: Category, text: &str, pipeline: F) -> String
    where
        F: FnOnce(&str) -> NormResult<String>,
    {
        if is_blank(text) {
            return String::new();
        }

        match pipeline(text) {
            Ok(normalized) => {
                debug!("{} [{}] -> [{}]", category, text, normalized);
                normalized
            }
            Err(e) => {
                warn!(
                    "{} normalization failed for [{}], returning trimmed input: {}",
                    category, text, e
                );
                text.trim().to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalizer::options::PhoneFormat;
    use crate::rule::RuleName;

    fn options() -> NormalizationOptions {
        NormalizationOptions::default()
    }

    #[test]
    fn test_documented_scenarios() {
        let n = Normalizer::default();

        assert_eq!(n.company_name("Microsoft Corporation", &options()), "microsoft");
        assert_eq!(
            n.company_name("The Apple Inc.", &options().with_remove_filler_words(true)),
            "apple"
        );
        assert_eq!(
            n.website("https://www.google.com/search?q=test", &options().with_ignore_paths(true)),
            "google.com"
        );
        assert_eq!(n.phone_number("+1 (555) 123-4567", &options()), "5551234567");
        assert_eq!(
            n.phone_number("+1 (555) 123-4567", &options().with_format(PhoneFormat::Standard)),
            "555-123-4567"
        );
        assert_eq!(n.address("6325 Mcleod Dr Suite# 7 & 8", &options()), "6325 mcleod");
        assert_eq!(
            n.address("123 Main St NE", &options().with_standardize_directions(true)),
            "123 main ne"
        );
        assert_eq!(n.auto("Test (555) 123-4567 ext", &options()), "test 555 123 4567 ext");
    }

    #[test]
    fn test_blank_input_everywhere() {
        let n = Normalizer::default();
        for text in ["", "   ", "\t\n"] {
            for category in Category::ALL {
                assert_eq!(n.canonicalize(category, text, &options()), "");
            }
            let detailed = n.normalize_detailed(text, DataType::Auto, &options());
            assert_eq!(detailed.normalized, "");
            assert_eq!(detailed.category, None);
        }
    }

    #[test]
    fn test_auto_delegates_with_caller_options() {
        let n = Normalizer::default();
        let standard = options().with_format(PhoneFormat::Standard);

        let value = n.normalize_detailed("5551234567", DataType::Auto, &standard);
        assert_eq!(value.category, Some(Category::PhoneNumber));
        assert_eq!(value.normalized, "555-123-4567");

        assert_eq!(n.auto("www.example.com", &options()), "example.com");
        assert_eq!(n.auto(" SW1A 1AA ", &options()), "sw1a 1aa");
        assert_eq!(n.auto("12345", &options()), "12345");
    }

    #[test]
    fn test_explicit_data_type_skips_classifier() {
        let n = Normalizer::default();
        // 按邮编处理时即便像电话也不重新分类
        let value = n.normalize_detailed("5551234567", DataType::PostalCode, &options());
        assert_eq!(value.category, Some(Category::PostalCode));
        assert_eq!(value.normalized, "5551234567");
    }

    #[test]
    fn test_transform_failure_returns_trimmed_input() {
        let rules = RuleSet::defaults().with_rule(RuleName::OfficePatterns, ["(unclosed"]);
        let n = Normalizer::new(rules);

        assert_eq!(n.address("  12 Main St Suite 4  ", &options()), "12 Main St Suite 4");
        // 其他规则不受影响
        assert_eq!(n.company_name("Acme Inc", &options()), "acme");
    }

    #[test]
    fn test_batch() {
        let n = Normalizer::default();
        let out = n.normalize_batch(
            &["Microsoft Corporation", "", "https://example.org/"],
            DataType::Auto,
            &options(),
        );
        assert_eq!(out, vec!["microsoft", "", "example.org"]);
    }
}
