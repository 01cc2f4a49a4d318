//! 规则编译器核心
//! 将规则集中的字符串条目编译为可执行的正则模式
//! 编译按规则惰性进行：某条规则中的非法正则只会在该规则被实际应用时报错

use std::sync::Arc;
use std::time::Instant;
use once_cell::sync::OnceCell;
use tracing::debug;

use super::pattern::{CompiledPattern, PatternKind};
use crate::error::{NormResult, NormalizerError};
use crate::rule::{RuleName, RuleSet};

type CompiledSlot = OnceCell<NormResult<Vec<CompiledPattern>>>;

/// 惰性编译的规则库（只读，可跨线程共享）
#[derive(Debug)]
pub struct CompiledRules {
    rule_set: Arc<RuleSet>,
    legal_suffixes: CompiledSlot,
    filler_words: CompiledSlot,
    office_patterns: CompiledSlot,
    street_suffixes: CompiledSlot,
    direction_map: CompiledSlot,
}

impl CompiledRules {
    pub fn new(rule_set: Arc<RuleSet>) -> Self {
        Self {
            rule_set,
            legal_suffixes: OnceCell::new(),
            filler_words: OnceCell::new(),
            office_patterns: OnceCell::new(),
            street_suffixes: OnceCell::new(),
            direction_map: OnceCell::new(),
        }
    }

    /// 原始规则集
    pub fn rule_set(&self) -> &Arc<RuleSet> {
        &self.rule_set
    }

    /// 获取某条规则的编译结果（首次访问时编译）
    pub fn get(&self, name: RuleName) -> NormResult<&[CompiledPattern]> {
        let slot = match name {
            RuleName::LegalSuffixes => &self.legal_suffixes,
            RuleName::FillerWords => &self.filler_words,
            RuleName::OfficePatterns => &self.office_patterns,
            RuleName::StreetSuffixes => &self.street_suffixes,
            RuleName::DirectionMap => &self.direction_map,
        };

        match slot.get_or_init(|| RuleCompiler::compile_rule(&self.rule_set, name)) {
            Ok(patterns) => Ok(patterns.as_slice()),
            Err(e) => Err(Self::replay_error(name, e)),
        }
    }

    // 缓存的是首次编译结果，后续调用需复制一份错误返回
    fn replay_error(name: RuleName, err: &NormalizerError) -> NormalizerError {
        match err {
            NormalizerError::PatternCompileError { rule, source } => {
                NormalizerError::PatternCompileError {
                    rule: *rule,
                    source: source.clone(),
                }
            }
            NormalizerError::RuleParseError(msg) => NormalizerError::RuleParseError(msg.clone()),
            other => NormalizerError::RuleParseError(format!("规则 {} 不可用：{}", name, other)),
        }
    }
}

/// 规则编译器
pub struct RuleCompiler;

impl RuleCompiler {
    /// 编译单条规则
    pub fn compile_rule(rule_set: &RuleSet, name: RuleName) -> NormResult<Vec<CompiledPattern>> {
        let start = Instant::now();
        let entries = rule_set.resolve(name);

        let compiled = match name {
            RuleName::DirectionMap => Self::compile_direction_map(&entries)?,
            RuleName::OfficePatterns => Self::compile_list(name, &entries, PatternKind::Raw)?,
            _ => Self::compile_list(name, &entries, PatternKind::WholeWord)?,
        };

        debug!(
            "Compiled rule [{}]: {} patterns in {:?}",
            name,
            compiled.len(),
            start.elapsed()
        );
        Ok(compiled)
    }

    /// 编译删除类规则列表
    fn compile_list(
        name: RuleName,
        entries: &[String],
        kind: PatternKind,
    ) -> NormResult<Vec<CompiledPattern>> {
        entries
            .iter()
            .map(|entry| {
                kind.compile(entry)
                    .map(|regex| CompiledPattern::removal(regex, kind))
                    .map_err(|source| NormalizerError::PatternCompileError { rule: name, source })
            })
            .collect()
    }

    /// 编译方向映射："模式=替换"
    fn compile_direction_map(entries: &[String]) -> NormResult<Vec<CompiledPattern>> {
        entries
            .iter()
            .map(|entry| {
                let (pattern, replacement) = entry.rsplit_once('=').ok_or_else(|| {
                    NormalizerError::RuleParseError(format!(
                        "方向映射条目缺少 '='：{}",
                        entry
                    ))
                })?;

                let regex = PatternKind::WholeWord
                    .compile(pattern.trim())
                    .map_err(|source| NormalizerError::PatternCompileError {
                        rule: RuleName::DirectionMap,
                        source,
                    })?;

                Ok(CompiledPattern {
                    regex,
                    kind: PatternKind::WholeWord,
                    replacement: replacement.trim().to_string(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules_compile() {
        let compiled = CompiledRules::new(Arc::new(RuleSet::defaults()));
        for name in RuleName::ALL {
            assert!(!compiled.get(name).unwrap().is_empty(), "rule {} is empty", name);
        }
    }

    #[test]
    fn test_malformed_rule_fails_only_that_rule() {
        let rules = RuleSet::defaults().with_rule(RuleName::FillerWords, ["(broken"]);
        let compiled = CompiledRules::new(Arc::new(rules));

        assert!(compiled.get(RuleName::LegalSuffixes).is_ok());
        let err = compiled.get(RuleName::FillerWords).unwrap_err();
        assert!(matches!(
            err,
            NormalizerError::PatternCompileError { rule: RuleName::FillerWords, .. }
        ));
        // 二次访问返回同样的错误
        assert!(compiled.get(RuleName::FillerWords).is_err());
    }

    #[test]
    fn test_direction_entry_without_separator() {
        let rules = RuleSet::defaults().with_rule(RuleName::DirectionMap, ["North"]);
        let compiled = CompiledRules::new(Arc::new(rules));
        assert!(matches!(
            compiled.get(RuleName::DirectionMap),
            Err(NormalizerError::RuleParseError(_))
        ));
    }
}
