//! 文本清理工具
//! 各规范化流水线共用的空白/字符过滤函数

use std::borrow::Cow;
use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// 空串或全空白
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// 连续空白折叠为单个空格并去除首尾空白
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text.trim(), " ").into_owned()
}

/// 仅保留单词字符、空白以及 `keep` 中列出的字符
pub fn strip_chars<'a>(text: &'a str, keep: &[char]) -> Cow<'a, str> {
    let is_kept = |c: char| c.is_alphanumeric() || c == '_' || c.is_whitespace() || keep.contains(&c);
    if text.chars().all(is_kept) {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.chars().filter(|c| is_kept(*c)).collect())
    }
}
