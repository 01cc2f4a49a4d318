//! 公司名称规范化

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::options::NormalizationOptions;
use crate::compiler::{apply_all, CompiledRules};
use crate::error::NormResult;
use crate::rule::RuleName;
use crate::utils::{is_blank, strip_chars};

// " & " 分隔符的占位（字符过滤后输入中不可能出现 NUL）
const SEPARATOR_MARK: &str = "\u{0}";

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*(?:\x00\s*)+").unwrap());

/// 规范化公司名称
/// 去法律后缀 -> (可选)去填充词 -> 字符过滤 -> "-" 转空格、" & " 转双空格 -> 空白折叠 -> 小写
/// 双空格只来自 " & "（或上一轮规范化的输出），其余空白一律折叠为单空格
pub fn canonicalize(
    rules: &CompiledRules,
    text: &str,
    options: &NormalizationOptions,
) -> NormResult<String> {
    if is_blank(text) {
        return Ok(String::new());
    }

    let mut value = apply_all(rules.get(RuleName::LegalSuffixes)?, text);
    if options.remove_filler_words {
        value = apply_all(rules.get(RuleName::FillerWords)?, &value);
    }

    let value = strip_chars(&value, &['&', '-'])
        .replace('-', " ")
        .replace(" & ", SEPARATOR_MARK);
    let value = WHITESPACE_RUN.replace_all(&value, |caps: &Captures| collapse_run(&caps[0]));
    let value = SEPARATOR.replace_all(&value, "  ");
    let value = value.trim();

    Ok(if options.preserve_casing {
        value.to_string()
    } else {
        value.to_lowercase()
    })
}

// 纯空格连续 2 个及以上折叠为双空格（已规范化的分隔符保持不变），含制表符等其他空白的连续段折叠为单空格
fn collapse_run(run: &str) -> &'static str {
    if run.len() >= 2 && run.bytes().all(|b| b == b' ') {
        "  "
    } else {
        " "
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::RuleSet;
    use std::sync::Arc;

    fn rules() -> CompiledRules {
        CompiledRules::new(Arc::new(RuleSet::defaults()))
    }

    fn run(text: &str, options: &NormalizationOptions) -> String {
        canonicalize(&rules(), text, options).unwrap()
    }

    #[test]
    fn test_legal_suffix_removed() {
        let options = NormalizationOptions::default();
        assert_eq!(run("Microsoft Corporation", &options), "microsoft");
        assert_eq!(run("Acme, Inc.", &options), "acme");
        assert_eq!(run("Widgets L.L.C.", &options), "widgets");
        assert_eq!(run("Smith & Jones LLP", &options), "smith  jones");
    }

    #[test]
    fn test_filler_words() {
        let options = NormalizationOptions::default().with_remove_filler_words(true);
        assert_eq!(run("The Apple Inc.", &options), "apple");
        assert_eq!(run("Bank of America Corp", &options), "bank america");

        let keep = NormalizationOptions::default();
        assert_eq!(run("The Apple Inc.", &keep), "the apple");
    }

    #[test]
    fn test_separators() {
        let options = NormalizationOptions::default();
        assert_eq!(run("Coca-Cola Company", &options), "coca cola");
        assert_eq!(run("Johnson & Johnson", &options), "johnson  johnson");
        assert_eq!(run("AT&T", &options), "at&t");
        assert_eq!(run("Foo   &   Bar\tBaz", &options), "foo  bar baz");
        assert_eq!(run("Foo &\tBar", &options), "foo & bar");
        assert_eq!(run("Foo  &  Bar", &options), "foo  bar");
    }

    #[test]
    fn test_suffix_mid_name_does_not_collide_with_separator() {
        let options = NormalizationOptions::default();
        assert_eq!(run("Acme Corp Widgets", &options), "acme widgets");
        assert_ne!(run("Acme Corp Widgets", &options), run("Acme & Widgets", &options));
        assert_eq!(
            run("Bank of America", &options.clone().with_remove_filler_words(true)),
            "bank america"
        );
    }

    #[test]
    fn test_mixed_whitespace_collapses_to_single_space() {
        let options = NormalizationOptions::default();
        assert_eq!(run("Acme \tWidgets", &options), "acme widgets");
        assert_eq!(run("Acme\t\tWidgets", &options), "acme widgets");
        assert_eq!(run("Acme\n Widgets", &options), "acme widgets");
        assert_ne!(run("Acme \tWidgets", &options), run("Acme & Widgets", &options));
    }

    #[test]
    fn test_preserve_casing() {
        let options = NormalizationOptions::default().with_preserve_casing(true);
        assert_eq!(run("Microsoft Corporation", &options), "Microsoft");
    }

    #[test]
    fn test_blank_and_idempotent() {
        let options = NormalizationOptions::default().with_remove_filler_words(true);
        assert_eq!(run(" \n ", &options), "");
        for input in ["Microsoft Corporation", "Johnson & Johnson", "The Apple Inc."] {
            let once = run(input, &options);
            assert_eq!(run(&once, &options), once, "input: {}", input);
        }
    }

    #[test]
    fn test_malformed_suffix_pattern_is_an_error() {
        let rules = CompiledRules::new(Arc::new(
            RuleSet::defaults().with_rule(RuleName::LegalSuffixes, ["[oops"]),
        ));
        assert!(canonicalize(&rules, "Acme Inc", &NormalizationOptions::default()).is_err());
    }
}
