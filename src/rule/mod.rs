//! 规则模块：负责规则的加载、内置默认值、数据模型定义
pub mod model;
pub mod defaults;
pub mod loader;

// 导出核心接口
pub use self::model::{RuleName, RuleSet};
pub use self::loader::RuleLoader;
