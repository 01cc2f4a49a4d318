//! 自测运行器
//! 逐条执行用例并与期望值做精确比较；单条用例异常不会中断整批

use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use chrono::Utc;
use tracing::{debug, error, warn};

use super::model::{TestCase, TestResult, TestSummary};
use crate::detector::DataType;
use crate::error::NormResult;
use crate::normalizer::{NormalizationOptions, Normalizer, PhoneFormat};

/// 自测运行器
#[derive(Debug, Clone, Default)]
pub struct SelfTestRunner {
    normalizer: Normalizer,
    options: NormalizationOptions,
}

impl SelfTestRunner {
    pub fn new(normalizer: Normalizer) -> Self {
        Self {
            normalizer,
            options: NormalizationOptions::default(),
        }
    }

    /// 用例未携带选项时使用的默认选项
    pub fn with_options(mut self, options: NormalizationOptions) -> Self {
        self.options = options;
        self
    }

    /// 批量执行
    pub fn run(&self, cases: &[TestCase]) -> Vec<TestResult> {
        self.run_with(cases, |case, options| {
            self.normalizer.normalize(&case.input, case.data_type, options)
        })
    }

    /// 以自定义规范化函数批量执行；单条用例 panic 时记录为失败并继续
    pub fn run_with<F>(&self, cases: &[TestCase], canonicalize: F) -> Vec<TestResult>
    where
        F: Fn(&TestCase, &NormalizationOptions) -> String,
    {
        let results: Vec<TestResult> = cases
            .iter()
            .map(|case| self.run_case(case, &canonicalize))
            .collect();
        let summary = summarize(&results);
        debug!(
            "Self-test finished: {} total, {} passed, {} failed",
            summary.total, summary.passed, summary.failed
        );
        results
    }

    fn run_case<F>(&self, case: &TestCase, canonicalize: &F) -> TestResult
    where
        F: Fn(&TestCase, &NormalizationOptions) -> String,
    {
        let options = case.options.as_ref().unwrap_or(&self.options);
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| canonicalize(case, options)));

        let (actual, error) = match outcome {
            Ok(actual) => (actual, None),
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                error!("Self-test case [{}] aborted: {}", case.input, message);
                (String::new(), Some(message))
            }
        };

        let passed = error.is_none() && actual == case.expected;
        if !passed && error.is_none() {
            warn!(
                "Self-test case [{}] ({}) failed: expected [{}], got [{}]",
                case.input, case.data_type, case.expected, actual
            );
        }

        TestResult {
            input: case.input.clone(),
            expected: case.expected.clone(),
            actual,
            data_type: case.data_type,
            passed,
            timestamp: Utc::now(),
            error,
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// 汇总结果
pub fn summarize(results: &[TestResult]) -> TestSummary {
    let passed = results.iter().filter(|r| r.passed).count();
    TestSummary {
        total: results.len(),
        passed,
        failed: results.len() - passed,
    }
}

/// 从 JSON 文件加载用例：[{ "Input": ..., "Expected": ..., "DataType": ... }]
pub fn load_cases(path: &Path) -> NormResult<Vec<TestCase>> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// 内置用例
pub fn builtin_cases() -> Vec<TestCase> {
    let defaults = NormalizationOptions::default();
    vec![
        TestCase::new("Microsoft Corporation", "microsoft", DataType::CompanyName),
        TestCase::new("The Apple Inc.", "apple", DataType::CompanyName)
            .with_options(defaults.clone().with_remove_filler_words(true)),
        TestCase::new("https://www.google.com/search?q=test", "google.com", DataType::Website)
            .with_options(defaults.clone().with_ignore_paths(true)),
        TestCase::new("+1 (555) 123-4567", "5551234567", DataType::PhoneNumber),
        TestCase::new("+1 (555) 123-4567", "555-123-4567", DataType::PhoneNumber)
            .with_options(defaults.clone().with_format(PhoneFormat::Standard)),
        TestCase::new("6325 Mcleod Dr Suite# 7 & 8", "6325 mcleod", DataType::Address),
        TestCase::new("123 Main St NE", "123 main ne", DataType::Address)
            .with_options(defaults.with_standardize_directions(true)),
        TestCase::new("5551234567", "5551234567", DataType::Auto),
        TestCase::new("12345", "12345", DataType::Auto),
        TestCase::new("www.example.com", "example.com", DataType::Auto),
        TestCase::new("Test (555) 123-4567 ext", "test 555 123 4567 ext", DataType::Auto),
        TestCase::new("   ", "", DataType::Auto),
    ]
}
