//! 检测模块：类别定义与自动识别级联
pub mod category;
pub mod pattern;
pub mod classifier;

// 导出核心接口
pub use self::category::{Category, DataType};
pub use self::pattern::ClassificationPattern;
pub use self::classifier::Classifier;
