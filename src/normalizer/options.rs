//! 规范化选项
//! 所有类别的选项放在同一个不可变结构中，各流水线只读取自己关心的字段

use serde::{Deserialize, Serialize};

/// 电话号码输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PhoneFormat {
    /// 纯数字
    #[default]
    Raw,
    /// XXX-XXX-XXXX
    Standard,
    /// XXX.XXX.XXXX
    Dotted,
}

/// 默认国家区号
pub const DEFAULT_COUNTRY_CODE: &str = "1";

/// 规范化选项（未识别的选项在反序列化时被忽略）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NormalizationOptions {
    // CompanyName / Address
    pub preserve_casing: bool,
    // CompanyName
    pub remove_filler_words: bool,
    // Website
    pub ignore_paths: bool,
    pub keep_subdomains: bool,
    // PhoneNumber
    pub format: PhoneFormat,
    pub country_code: String,
    // Address
    pub keep_street_suffixes: bool,
    pub standardize_directions: bool,
}

impl Default for NormalizationOptions {
    fn default() -> Self {
        Self {
            preserve_casing: false,
            remove_filler_words: false,
            ignore_paths: false,
            keep_subdomains: false,
            format: PhoneFormat::Raw,
            country_code: DEFAULT_COUNTRY_CODE.to_string(),
            keep_street_suffixes: false,
            standardize_directions: false,
        }
    }
}

impl NormalizationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_preserve_casing(mut self, value: bool) -> Self {
        self.preserve_casing = value;
        self
    }

    pub fn with_remove_filler_words(mut self, value: bool) -> Self {
        self.remove_filler_words = value;
        self
    }

    pub fn with_ignore_paths(mut self, value: bool) -> Self {
        self.ignore_paths = value;
        self
    }

    pub fn with_keep_subdomains(mut self, value: bool) -> Self {
        self.keep_subdomains = value;
        self
    }

    pub fn with_format(mut self, format: PhoneFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_country_code(mut self, country_code: impl Into<String>) -> Self {
        self.country_code = country_code.into();
        self
    }

    pub fn with_keep_street_suffixes(mut self, value: bool) -> Self {
        self.keep_street_suffixes = value;
        self
    }

    pub fn with_standardize_directions(mut self, value: bool) -> Self {
        self.standardize_directions = value;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_options_are_ignored() {
        let options: NormalizationOptions = serde_json::from_str(
            r#"{ "ignorePaths": true, "format": "Dotted", "frobnicate": 7 }"#,
        )
        .unwrap();

        assert!(options.ignore_paths);
        assert_eq!(options.format, PhoneFormat::Dotted);
        assert_eq!(options.country_code, DEFAULT_COUNTRY_CODE);
        assert!(!options.preserve_casing);
    }
}
