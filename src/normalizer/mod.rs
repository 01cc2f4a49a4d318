//! 规范化模块：五类数据的规范化流水线及统一入口
pub mod options;
pub mod company;
pub mod website;
pub mod phone;
pub mod address;
pub mod postal;
pub mod normalizer;
pub mod global;

pub use self::options::{NormalizationOptions, PhoneFormat, DEFAULT_COUNTRY_CODE};
pub use self::normalizer::{NormalizedValue, Normalizer};
pub use self::global::{
    global_normalizer, global_rules, init_rules, init_rules_with_config, normalize, normalize_address,
    normalize_company_name, normalize_detailed, normalize_phone_number, normalize_postal_code,
    normalize_website,
};
