//! 工具模块：文本清理等通用能力
pub mod text;

pub use self::text::{collapse_whitespace, is_blank, strip_chars};
