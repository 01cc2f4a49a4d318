//! 电话号码规范化

use tracing::warn;

use super::options::{NormalizationOptions, PhoneFormat, DEFAULT_COUNTRY_CODE};
use crate::utils::is_blank;

/// 规范化电话号码：去除非数字字符 -> 去掉国家区号 -> 按格式输出
pub fn canonicalize(text: &str, options: &NormalizationOptions) -> String {
    if is_blank(text) {
        return String::new();
    }

    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    let country_code = options.country_code.as_str();

    let national = match digits.strip_prefix(country_code) {
        Some(rest) if digits.len() > country_code.len() => rest,
        _ => digits.as_str(),
    };

    if country_code == DEFAULT_COUNTRY_CODE && national.len() != 10 {
        warn!(
            "Phone number [{}] has {} digits after country code removal, expected 10",
            text.trim(),
            national.len()
        );
    }

    format_digits(national, options.format)
}

/// 按格式输出；只有恰好 10 位时才分组，否则退回纯数字
fn format_digits(digits: &str, format: PhoneFormat) -> String {
    let separator = match format {
        PhoneFormat::Raw => return digits.to_string(),
        PhoneFormat::Standard => '-',
        PhoneFormat::Dotted => '.',
    };

    if digits.len() != 10 {
        return digits.to_string();
    }

    format!(
        "{}{sep}{}{sep}{}",
        &digits[..3],
        &digits[3..6],
        &digits[6..],
        sep = separator
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_format(format: PhoneFormat) -> NormalizationOptions {
        NormalizationOptions::default().with_format(format)
    }

    #[test]
    fn test_country_code_is_dropped() {
        let options = NormalizationOptions::default();
        assert_eq!(canonicalize("+1 (555) 123-4567", &options), "5551234567");
        assert_eq!(canonicalize("(555) 123-4567", &options), "5551234567");
    }

    #[test]
    fn test_standard_and_dotted() {
        assert_eq!(
            canonicalize("+1 (555) 123-4567", &with_format(PhoneFormat::Standard)),
            "555-123-4567"
        );
        assert_eq!(
            canonicalize("555 123 4567", &with_format(PhoneFormat::Dotted)),
            "555.123.4567"
        );
    }

    #[test]
    fn test_non_ten_digit_falls_back_to_raw() {
        assert_eq!(canonicalize("555-1234", &with_format(PhoneFormat::Standard)), "5551234");
    }

    #[test]
    fn test_custom_country_code() {
        let options = NormalizationOptions::default()
            .with_country_code("44")
            .with_format(PhoneFormat::Raw);
        assert_eq!(canonicalize("+44 20 7946 0958", &options), "2079460958");
        // 只有区号本身时不剥离
        assert_eq!(canonicalize("44", &options), "44");
    }

    #[test]
    fn test_blank_and_idempotent() {
        let options = with_format(PhoneFormat::Standard);
        assert_eq!(canonicalize("  ", &options), "");
        let once = canonicalize("1-555-123-4567", &options);
        assert_eq!(canonicalize(&once, &options), once);
    }
}
