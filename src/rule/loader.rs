//! 规则加载管理器
//! 负责从外部 JSON 规则文件加载规则集，缺失时回退到内置默认规则

use std::collections::HashMap;
use std::path::Path;
use serde_json::Value;
use tracing::{debug, warn};

use super::model::{RuleName, RuleSet};
use crate::config::GlobalConfig;
use crate::error::{NormResult, NormalizerError};

/// 规则加载管理器
pub struct RuleLoader;

impl RuleLoader {
    /// 按配置加载规则集（未配置规则文件时直接使用内置规则）
    pub fn load(config: &GlobalConfig) -> NormResult<RuleSet> {
        match &config.rules_path {
            Some(path) => Self::load_from_path(path),
            None => {
                debug!("No rule document configured, using built-in rules");
                Ok(RuleSet::defaults())
            }
        }
    }

    /// 从本地文件加载规则集
    /// 文件不存在：告警并使用内置规则；文件损坏：返回错误，由调用方决定
    pub fn load_from_path(path: &Path) -> NormResult<RuleSet> {
        if !path.exists() {
            warn!(
                "Rule document {} not found, falling back to built-in rules",
                path.display()
            );
            return Ok(RuleSet::defaults());
        }

        let content = std::fs::read_to_string(path)?;
        let rule_set = Self::from_json(&content)?;
        debug!("Loaded rule document from {}", path.display());
        Ok(rule_set)
    }

    /// 解析 JSON 规则文档
    /// 格式：{ "LegalSuffixes": ["Inc", ...], "DirectionMap": ["North=N", ...] }
    /// 未知键忽略；值必须为字符串数组
    pub fn from_json(content: &str) -> NormResult<RuleSet> {
        let document: Value = serde_json::from_str(content)?;
        let Value::Object(entries) = document else {
            return Err(NormalizerError::RuleLoadError(
                "规则文档顶层必须是 JSON 对象".to_string(),
            ));
        };

        let mut overrides = HashMap::new();
        for (key, value) in entries {
            let Ok(name) = key.parse::<RuleName>() else {
                debug!("Ignoring unknown rule key [{}]", key);
                continue;
            };

            let list = Self::parse_string_list(&key, value)?;
            overrides.insert(name, list);
        }

        for name in RuleName::ALL {
            match overrides.get(&name) {
                Some(list) if !list.is_empty() => {
                    debug!("Rule [{}] overridden with {} entries", name, list.len())
                }
                _ => debug!("Rule [{}] using built-in defaults", name),
            }
        }

        Ok(RuleSet::from_overrides(overrides))
    }

    fn parse_string_list(key: &str, value: Value) -> NormResult<Vec<String>> {
        match value {
            Value::Null => Ok(Vec::new()),
            Value::String(s) => Ok(vec![s]),
            Value::Array(arr) => arr
                .into_iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s),
                    other => Err(NormalizerError::RuleParseError(format!(
                        "规则 {} 含非字符串条目：{}",
                        key, other
                    ))),
                })
                .collect(),
            other => Err(NormalizerError::RuleParseError(format!(
                "规则 {} 的值必须为字符串数组，实际为：{}",
                key, other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_json_partial_document() {
        let rules = RuleLoader::from_json(
            r#"{ "FillerWords": ["Le", "La"], "StreetSuffixes": [], "Unknown": [1, 2] }"#,
        )
        .unwrap();

        assert_eq!(rules.resolve(RuleName::FillerWords), vec!["Le", "La"]);
        assert!(rules
            .resolve(RuleName::StreetSuffixes)
            .contains(&"Boulevard".to_string()));
        assert!(!rules.is_overridden(RuleName::OfficePatterns));
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        assert!(RuleLoader::from_json("[1, 2, 3]").is_err());
        assert!(RuleLoader::from_json(r#"{ "LegalSuffixes": [1] }"#).is_err());
    }

    #[test]
    fn test_malformed_pattern_is_not_validated_at_load() {
        let rules = RuleLoader::from_json(r#"{ "OfficePatterns": ["(unclosed"] }"#).unwrap();
        assert_eq!(rules.resolve(RuleName::OfficePatterns), vec!["(unclosed"]);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let rules = RuleLoader::load_from_path(&dir.path().join("absent.json")).unwrap();
        assert_eq!(rules, RuleSet::defaults());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "LegalSuffixes": ["GmbH", "AG"] }}"#).unwrap();

        let config = crate::config::ConfigManager::custom()
            .rules_path(file.path())
            .build();
        let rules = RuleLoader::load(&config).unwrap();
        assert_eq!(rules.resolve(RuleName::LegalSuffixes), vec!["GmbH", "AG"]);
    }
}
