//! 校验模块：基于外部地理编码服务的地址校验（有界重试、限流退避、本地回退）
pub mod provider;
pub mod query;
pub mod validator;

pub use self::provider::{GeocodingProvider, NominatimProvider, ProviderError};
pub use self::query::{prepare_query, MAX_QUERY_CHARS};
pub use self::validator::{AddressValidator, ValidationOutcome, ValidationRequest};
