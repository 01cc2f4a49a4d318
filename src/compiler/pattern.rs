//! 编译后模式模型
//! 规则条目编译后的结构

use std::borrow::Cow;
use regex::Regex;

/// 整词匹配的尾部分隔（空白或零宽边界）：删除时一并吞掉，替换时原样写回
const TAIL_GROUP: &str = "tail";

/// 规则条目的编译方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    /// 整词匹配（词表类规则：法律后缀/填充词/街道后缀/方向）
    WholeWord,
    /// 原样作为正则（办公单元标识）
    Raw,
}

impl PatternKind {
    /// 生成最终正则源码（统一忽略大小写）
    pub fn source(&self, pattern: &str) -> String {
        match self {
            // 优先吞掉一个空白，词被删除后不留下双空格；条目以 '.' 结尾（如 "Inc."）时尾部不存在 \b
            PatternKind::WholeWord => {
                format!(r"(?i)\b(?:{})(?P<{}>\s|\b|$)", pattern, TAIL_GROUP)
            }
            PatternKind::Raw => format!("(?i){}", pattern),
        }
    }

    pub fn compile(&self, pattern: &str) -> Result<Regex, regex::Error> {
        Regex::new(&self.source(pattern))
    }
}

/// 编译后的单条替换规则
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    pub regex: Regex,
    pub kind: PatternKind,
    /// 替换内容（删除类规则为空串）
    pub replacement: String,
}

impl CompiledPattern {
    pub fn removal(regex: Regex, kind: PatternKind) -> Self {
        Self {
            regex,
            kind,
            replacement: String::new(),
        }
    }

    /// 对输入应用本规则
    pub fn apply<'a>(&self, input: &'a str) -> Cow<'a, str> {
        match self.kind {
            PatternKind::WholeWord if !self.replacement.is_empty() => {
                let template = format!("{}${{{}}}", self.replacement, TAIL_GROUP);
                self.regex.replace_all(input, template.as_str())
            }
            _ => self.regex.replace_all(input, self.replacement.as_str()),
        }
    }

    pub fn is_match(&self, input: &str) -> bool {
        self.regex.is_match(input)
    }

    /// 规则描述
    pub fn describe(&self) -> &str {
        self.regex.as_str()
    }
}

/// 按顺序依次应用一组规则
pub fn apply_all(patterns: &[CompiledPattern], input: &str) -> String {
    patterns
        .iter()
        .fold(input.to_string(), |acc, pattern| pattern.apply(&acc).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_word_keeps_neighbouring_words() {
        let pattern = CompiledPattern::removal(
            PatternKind::WholeWord.compile(r"Inc\.?").unwrap(),
            PatternKind::WholeWord,
        );
        assert_eq!(pattern.apply("Apple Inc. Holdings"), "Apple Holdings");
        assert_eq!(pattern.apply("Acme Inc, Ohio"), "Acme , Ohio");
        assert_eq!(pattern.apply("Incline Inc"), "Incline ");
    }

    #[test]
    fn test_whole_word_removal_mid_text_leaves_single_space() {
        let pattern = CompiledPattern::removal(
            PatternKind::WholeWord.compile(r"Corp\.?").unwrap(),
            PatternKind::WholeWord,
        );
        assert_eq!(pattern.apply("Acme Corp Widgets"), "Acme Widgets");
        assert_eq!(pattern.apply("Acme Corp. Widgets"), "Acme Widgets");
        assert_eq!(pattern.apply("Acme Corporate"), "Acme Corporate");
    }

    #[test]
    fn test_whole_word_replacement_preserves_spacing() {
        let pattern = CompiledPattern {
            regex: PatternKind::WholeWord.compile("Northeast").unwrap(),
            kind: PatternKind::WholeWord,
            replacement: "NE".to_string(),
        };
        assert_eq!(pattern.apply("100 northeast Main"), "100 NE Main");
    }

    #[test]
    fn test_raw_pattern_is_case_insensitive() {
        let regex = PatternKind::Raw.compile(r"\bUnit\b\s*[^,;]*").unwrap();
        let pattern = CompiledPattern::removal(regex, PatternKind::Raw);
        assert_eq!(pattern.apply("9 Elm UNIT 100-102, Akron"), "9 Elm , Akron");
    }
}
