//! 自测用例与结果模型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::detector::DataType;
use crate::normalizer::NormalizationOptions;

/// 自测用例
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TestCase {
    pub input: String,
    pub expected: String,
    #[serde(default)]
    pub data_type: DataType,
    /// 用例专属选项，缺省时使用运行器的默认选项
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<NormalizationOptions>,
}

impl TestCase {
    pub fn new(input: impl Into<String>, expected: impl Into<String>, data_type: DataType) -> Self {
        Self {
            input: input.into(),
            expected: expected.into(),
            data_type,
            options: None,
        }
    }

    pub fn with_options(mut self, options: NormalizationOptions) -> Self {
        self.options = Some(options);
        self
    }
}

/// 单条自测结果（每次运行重新生成，不落盘）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TestResult {
    pub input: String,
    pub expected: String,
    pub actual: String,
    pub data_type: DataType,
    pub passed: bool,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// 汇总统计
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TestSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
}

impl TestSummary {
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}
