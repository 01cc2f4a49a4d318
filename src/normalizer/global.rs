//! 全局规范化器单例管理
//! 规则集在进程启动时加载一次，此后只读；未显式初始化时使用内置规则

use std::sync::Arc;
use once_cell::sync::OnceCell;
use tracing::{debug, warn};

use super::normalizer::{NormalizedValue, Normalizer};
use super::options::NormalizationOptions;
use crate::config::{ConfigManager, GlobalConfig};
use crate::detector::DataType;
use crate::error::NormResult;
use crate::rule::{RuleName, RuleSet};

/// 全局规范化器实例
static GLOBAL_NORMALIZER: OnceCell<Normalizer> = OnceCell::new();

/// 初始化全局规则（默认配置）
pub fn init_rules() -> NormResult<()> {
    init_rules_with_config(&ConfigManager::get_default())
}

/// 带自定义配置初始化全局规则
pub fn init_rules_with_config(config: &GlobalConfig) -> NormResult<()> {
    if GLOBAL_NORMALIZER.get().is_some() {
        warn!("Global rules already initialized, ignoring re-initialization");
        return Ok(());
    }

    let normalizer = Normalizer::from_config(config)?;
    if config.verbose {
        preflight(&normalizer);
    }
    if GLOBAL_NORMALIZER.set(normalizer).is_err() {
        warn!("Global rules were initialized concurrently, keeping the first instance");
    } else {
        debug!("Global rules initialized");
    }
    Ok(())
}

// 详细模式下提前编译全部规则，尽早暴露非法正则（规则仍保持可用，失败的规则在应用时降级）
fn preflight(normalizer: &Normalizer) {
    for name in RuleName::ALL {
        match normalizer.rules().get(name) {
            Ok(patterns) => debug!(
                "Rule [{}] ready: {} patterns (overridden: {})",
                name,
                patterns.len(),
                normalizer.rules().rule_set().is_overridden(name)
            ),
            Err(e) => warn!("Rule [{}] failed to compile: {}", name, e),
        }
    }
}

/// 获取全局规范化器
pub fn global_normalizer() -> &'static Normalizer {
    GLOBAL_NORMALIZER.get_or_init(|| {
        debug!("Global rules not initialized, using built-in rules");
        Normalizer::default()
    })
}

/// 全局规则集（只读）
pub fn global_rules() -> &'static Arc<RuleSet> {
    global_normalizer().rules().rule_set()
}

/// 简化接口：按数据类型规范化（Auto 自动识别）
pub fn normalize(text: &str, data_type: DataType, options: &NormalizationOptions) -> String {
    global_normalizer().normalize(text, data_type, options)
}

/// 简化接口：返回判定类别
pub fn normalize_detailed(
    text: &str,
    data_type: DataType,
    options: &NormalizationOptions,
) -> NormalizedValue {
    global_normalizer().normalize_detailed(text, data_type, options)
}

pub fn normalize_company_name(text: &str, options: &NormalizationOptions) -> String {
    global_normalizer().company_name(text, options)
}

pub fn normalize_website(text: &str, options: &NormalizationOptions) -> String {
    global_normalizer().website(text, options)
}

pub fn normalize_phone_number(text: &str, options: &NormalizationOptions) -> String {
    global_normalizer().phone_number(text, options)
}

pub fn normalize_address(text: &str, options: &NormalizationOptions) -> String {
    global_normalizer().address(text, options)
}

pub fn normalize_postal_code(text: &str) -> String {
    global_normalizer().postal_code(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_defaults_and_reinit() {
        let options = NormalizationOptions::default();
        assert_eq!(normalize("www.example.com", DataType::Auto, &options), "example.com");
        assert_eq!(normalize_company_name("Microsoft Corporation", &options), "microsoft");
        // 已初始化后再次初始化不报错
        assert!(init_rules().is_ok());
        assert_eq!(normalize_postal_code("12345-6789"), "12345-6789");
        assert!(!global_rules().resolve(RuleName::StreetSuffixes).is_empty());
    }

    #[test]
    fn test_global_is_shared_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                std::thread::spawn(|| {
                    normalize_address("6325 Mcleod Dr Suite# 7 & 8", &NormalizationOptions::default())
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), "6325 mcleod");
        }
    }
}
