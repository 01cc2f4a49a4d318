//! 分类模式
//! 自动识别使用的匹配谓词：正则 + 可选的数字位数约束

use std::ops::RangeInclusive;
use regex::Regex;

/// 单条分类模式
#[derive(Debug, Clone)]
pub struct ClassificationPattern {
    pub name: &'static str,
    pub regex: Regex,
    /// 输入中数字字符总数的约束（正则难以表达的部分）
    pub digit_count: Option<RangeInclusive<usize>>,
}

impl ClassificationPattern {
    /// 编译内置模式，源码为常量，编译失败属于程序缺陷
    pub fn builtin(name: &'static str, source: &str) -> Self {
        Self {
            name,
            regex: Regex::new(source).unwrap(),
            digit_count: None,
        }
    }

    pub fn with_digit_count(mut self, range: RangeInclusive<usize>) -> Self {
        self.digit_count = Some(range);
        self
    }

    /// 判断输入（调用方已去除首尾空白）是否命中
    pub fn is_match(&self, text: &str) -> bool {
        if !self.regex.is_match(text) {
            return false;
        }
        match &self.digit_count {
            Some(range) => range.contains(&text.chars().filter(|c| c.is_ascii_digit()).count()),
            None => true,
        }
    }
}

/// 返回列表中第一个命中的模式
pub fn first_match<'a>(
    patterns: &'a [ClassificationPattern],
    text: &str,
) -> Option<&'a ClassificationPattern> {
    patterns.iter().find(|pattern| pattern.is_match(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_count_constraint() {
        let pattern = ClassificationPattern::builtin("digits", r"^[\d ]+$").with_digit_count(3..=4);
        assert!(pattern.is_match("1 2 3"));
        assert!(!pattern.is_match("12"));
        assert!(!pattern.is_match("12345"));
    }
}
