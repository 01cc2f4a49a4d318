//! 邮编规范化
//! 依次尝试美国 ZIP、加拿大、英国和宽松兜底格式；命中则小写输出，未命中原样（仅去空白）返回

use once_cell::sync::Lazy;
use tracing::debug;

use crate::detector::pattern::{first_match, ClassificationPattern};
use crate::utils::is_blank;

/// 邮编模式（顺序即优先级）
pub static POSTAL_PATTERNS: Lazy<Vec<ClassificationPattern>> = Lazy::new(|| {
    vec![
        ClassificationPattern::builtin("us_zip", r"^\d{5}(?:-\d{4})?$"),
        ClassificationPattern::builtin("canada", r"^[A-Za-z]\d[A-Za-z][ -]?\d[A-Za-z]\d$"),
        ClassificationPattern::builtin("uk", r"^[A-Za-z]{1,2}\d[A-Za-z\d]?\s?\d[A-Za-z]{2}$"),
        // 宽松兜底：3-10 位字母数字，可含空格/连字符
        ClassificationPattern::builtin("generic", r"^[A-Za-z0-9][A-Za-z0-9 -]{1,8}[A-Za-z0-9]$"),
    ]
});

/// 是否符合任一邮编格式，返回命中的格式名
pub fn match_postal(text: &str) -> Option<&'static str> {
    first_match(&POSTAL_PATTERNS, text.trim()).map(|pattern| pattern.name)
}

/// 规范化邮编
/// 未通过格式校验的输入不做小写，避免被当作已确认的规范形式
pub fn canonicalize(text: &str) -> String {
    if is_blank(text) {
        return String::new();
    }

    let trimmed = text.trim();
    match match_postal(trimmed) {
        Some(format) => {
            debug!("Postal code matched format [{}]", format);
            trimmed.to_lowercase()
        }
        None => trimmed.to_string(),
    }
}
