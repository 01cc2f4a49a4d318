//! 自测模块：以声明式用例驱动分类器/规范化流水线并输出报告
pub mod model;
pub mod runner;

pub use self::model::{TestCase, TestResult, TestSummary};
pub use self::runner::{builtin_cases, load_cases, summarize, SelfTestRunner};
