//! 全局错误类型定义
//! 仅在库内部流转：规范化入口对外永不返回错误（降级为原始输入）

use thiserror::Error;
use regex::Error as RegexError;
use serde_json::Error as SerdeJsonError;
use std::io::Error as IoError;
use url::ParseError as UrlParseError;

use crate::rule::RuleName;

#[derive(Error, Debug)]
pub enum NormalizerError {
    // 规则相关错误
    #[error("规则加载失败：{0}")]
    RuleLoadError(String),
    #[error("规则解析失败：{0}")]
    RuleParseError(String),

    // 编译相关错误（仅在规则被实际应用时出现）
    #[error("规则 {rule} 正则编译失败：{source}")]
    PatternCompileError {
        rule: RuleName,
        #[source]
        source: RegexError,
    },

    // 网络相关错误
    #[error("网络请求失败：{0}")]
    HttpError(#[from] reqwest::Error),

    // 序列化/反序列化错误
    #[error("JSON解析失败：{0}")]
    JsonError(#[from] SerdeJsonError),

    // 基础错误
    #[error("IO操作失败：{0}")]
    IoError(#[from] IoError),
    #[error("URL解析失败：{0}")]
    UrlError(#[from] UrlParseError),
    #[error("无效输入：{0}")]
    InvalidInput(String),
}

// 全局Result类型
pub type NormResult<T> = Result<T, NormalizerError>;
