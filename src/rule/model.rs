//! 规则数据模型定义
//! 仅存储规则数据，无任何业务逻辑，支持序列化/反序列化

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

use super::defaults;
use crate::error::NormalizerError;

/// 规则名称（规则文件中的键）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleName {
    LegalSuffixes,
    FillerWords,
    OfficePatterns,
    StreetSuffixes,
    DirectionMap,
}

impl RuleName {
    pub const ALL: [RuleName; 5] = [
        RuleName::LegalSuffixes,
        RuleName::FillerWords,
        RuleName::OfficePatterns,
        RuleName::StreetSuffixes,
        RuleName::DirectionMap,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RuleName::LegalSuffixes => "LegalSuffixes",
            RuleName::FillerWords => "FillerWords",
            RuleName::OfficePatterns => "OfficePatterns",
            RuleName::StreetSuffixes => "StreetSuffixes",
            RuleName::DirectionMap => "DirectionMap",
        }
    }
}

impl fmt::Display for RuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleName {
    type Err = NormalizerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuleName::ALL
            .into_iter()
            .find(|name| name.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| NormalizerError::RuleParseError(format!("未知规则名称：{}", s)))
    }
}

/// 规则集：规则名称 -> 有序字符串列表
/// 进程启动时加载一次，此后只读
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    overrides: HashMap<RuleName, Vec<String>>,
}

impl RuleSet {
    /// 空规则集（全部规则回退到内置默认值）
    pub fn defaults() -> Self {
        Self::default()
    }

    /// 以覆盖表构建规则集
    pub fn from_overrides(overrides: HashMap<RuleName, Vec<String>>) -> Self {
        Self { overrides }
    }

    /// 链式设置单条规则覆盖
    pub fn with_rule<I, S>(mut self, name: RuleName, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.overrides
            .insert(name, entries.into_iter().map(Into::into).collect());
        self
    }

    /// 解析规则：外部配置提供非空列表则原样返回，否则回退到内置默认（按规则逐条回退）
    pub fn resolve(&self, name: RuleName) -> Vec<String> {
        match self.overrides.get(&name) {
            Some(list) if !list.is_empty() => list.clone(),
            _ => defaults::default_rule(name)
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    /// 该规则是否使用了外部覆盖
    pub fn is_overridden(&self, name: RuleName) -> bool {
        self.overrides
            .get(&name)
            .is_some_and(|list| !list.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_falls_back_per_rule() {
        let rules = RuleSet::defaults()
            .with_rule(RuleName::FillerWords, ["Das", "Der"])
            .with_rule(RuleName::LegalSuffixes, Vec::<String>::new());

        assert_eq!(rules.resolve(RuleName::FillerWords), vec!["Das", "Der"]);
        // 空列表视为缺失，回退默认
        assert!(!rules.is_overridden(RuleName::LegalSuffixes));
        assert!(rules
            .resolve(RuleName::LegalSuffixes)
            .iter()
            .any(|s| s == "Corporation"));
        assert!(!rules.resolve(RuleName::StreetSuffixes).is_empty());
    }

    #[test]
    fn test_rule_name_parse() {
        assert_eq!("officepatterns".parse::<RuleName>().unwrap(), RuleName::OfficePatterns);
        assert!("Nope".parse::<RuleName>().is_err());
    }
}
