//! 地理编码查询预处理
//! 比完整地址规范化更轻：去办公单元、折叠标点空白，并控制查询长度

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

use crate::compiler::CompiledRules;
use crate::normalizer::address::strip_office_designations;
use crate::utils::collapse_whitespace;

/// 查询最大字符数
pub const MAX_QUERY_CHARS: usize = 100;

// 保留逗号用于分段，其余标点替换为空格
static PUNCTUATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s,]").unwrap());
static COMMA_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*,[\s,]*").unwrap());

/// 生成查询串
pub fn prepare_query(rules: &CompiledRules, address: &str) -> String {
    let stripped = strip_office_designations(rules, address).unwrap_or_else(|e| {
        warn!("Office designation rule unavailable, querying unstripped address: {}", e);
        address.to_string()
    });

    let cleaned = PUNCTUATION.replace_all(&stripped, " ");
    let cleaned = collapse_whitespace(&cleaned);
    let cleaned = COMMA_RUN.replace_all(&cleaned, ", ");
    let cleaned = cleaned.trim_matches(|c: char| c == ',' || c.is_whitespace());

    shorten(cleaned)
}

/// 超长时先截取前两段，仍超长再按字符截断
fn shorten(query: &str) -> String {
    if query.chars().count() <= MAX_QUERY_CHARS {
        return query.to_string();
    }

    let two_segments = query.splitn(3, ',').take(2).collect::<Vec<_>>().join(",");
    let two_segments = two_segments.trim();
    if two_segments.chars().count() <= MAX_QUERY_CHARS {
        return two_segments.to_string();
    }

    two_segments
        .chars()
        .take(MAX_QUERY_CHARS)
        .collect::<String>()
        .trim_end()
        .to_string()
}
