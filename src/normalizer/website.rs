//! 网址规范化

use once_cell::sync::Lazy;
use regex::Regex;

use super::options::NormalizationOptions;
use crate::utils::is_blank;

static SCHEME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^https?://").unwrap());
static WWW_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^www\.").unwrap());

/// 规范化网址：去协议 -> 去 www.（除非保留子域名）-> 小写 -> 去路径或末尾斜杠
pub fn canonicalize(text: &str, options: &NormalizationOptions) -> String {
    if is_blank(text) {
        return String::new();
    }

    let mut value = SCHEME_REGEX.replace(text.trim(), "").into_owned();
    if !options.keep_subdomains {
        value = WWW_REGEX.replace(&value, "").into_owned();
    }
    let value = value.to_lowercase();

    if options.ignore_paths {
        let end = value.find(['/', '?', '#']).unwrap_or(value.len());
        return value[..end].to_string();
    }

    match value.strip_suffix('/') {
        Some(stripped) => stripped.to_string(),
        None => value,
    }
}
