//! rsnormalizer - 规则驱动的企业记录规范化工具（公司名/网址/电话/地址/邮编）

// 导出全局错误类型
pub use self::error::{NormalizerError, NormResult};

// 导出配置模块
pub use self::config::{GlobalConfig, ConfigManager, CustomConfigBuilder};

// 导出规则模块核心接口
pub use self::rule::{RuleName, RuleSet, RuleLoader};

// 导出编译模块核心接口
pub use self::compiler::{CompiledRules, RuleCompiler, CompiledPattern};

// 导出检测模块核心接口
pub use self::detector::{Category, DataType, Classifier};

// 导出规范化模块核心接口（含全局简化接口）
pub use self::normalizer::{
    Normalizer,
    NormalizedValue,
    NormalizationOptions,
    PhoneFormat,
    init_rules,
    init_rules_with_config,
    global_normalizer,
    global_rules,
    normalize,
    normalize_detailed,
    normalize_company_name,
    normalize_website,
    normalize_phone_number,
    normalize_address,
    normalize_postal_code,
};

// 导出校验模块核心接口
pub use self::validator::{
    AddressValidator, GeocodingProvider, NominatimProvider, ValidationOutcome, ValidationRequest,
};

// 导出自测模块核心接口
pub use self::harness::{SelfTestRunner, TestCase, TestResult, TestSummary};

// 声明所有子模块
pub mod config;
pub mod error;
pub mod rule;
pub mod utils;
pub mod compiler;
pub mod detector;
pub mod normalizer;
pub mod validator;
pub mod harness;
