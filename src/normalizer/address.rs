//! 地址规范化
//! 只产出单一可比较字符串，不做结构化解析

use super::options::NormalizationOptions;
use crate::compiler::{apply_all, CompiledRules};
use crate::error::NormResult;
use crate::rule::RuleName;
use crate::utils::{collapse_whitespace, is_blank, strip_chars};

/// 规范化地址
/// 方向标准化(可选) -> 去办公单元 -> 去街道后缀(可选) -> 去标点 -> 小写 -> 空白折叠
///
/// 方向映射必须先于后缀处理：否则 "Northeast" 可能被 "North" 部分改写；
/// 办公单元模式吞到分隔符为止，"Suite 5 & 6" 整段去除而 "5th Avenue" 不受影响。
pub fn canonicalize(
    rules: &CompiledRules,
    text: &str,
    options: &NormalizationOptions,
) -> NormResult<String> {
    if is_blank(text) {
        return Ok(String::new());
    }

    let mut value = text.trim().to_string();

    if options.standardize_directions {
        value = apply_all(rules.get(RuleName::DirectionMap)?, &value);
    }

    value = apply_all(rules.get(RuleName::OfficePatterns)?, &value);

    if !options.keep_street_suffixes {
        value = apply_all(rules.get(RuleName::StreetSuffixes)?, &value);
    }

    let value = strip_chars(&value, &[]);
    let value = if options.preserve_casing {
        value.into_owned()
    } else {
        value.to_lowercase()
    };

    Ok(collapse_whitespace(&value))
}

/// 去除办公单元标识（地理编码查询预处理复用）
pub fn strip_office_designations(rules: &CompiledRules, text: &str) -> NormResult<String> {
    Ok(apply_all(rules.get(RuleName::OfficePatterns)?, text))
}
