//! 编译模块：将规则集编译为可执行的正则模式
pub mod pattern;
pub mod compiler;

pub use self::pattern::{apply_all, CompiledPattern, PatternKind};
pub use self::compiler::{CompiledRules, RuleCompiler};
