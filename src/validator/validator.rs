//! 地址校验适配器
//! 有界重试 + 限流指数退避 + 耗尽后回退到本地地址规范化
//! 最坏耗时：retry_count × (timeout + delay)（未触发限流时）

use std::time::Duration;
use tracing::{debug, warn};

use super::provider::{GeocodingProvider, NominatimProvider, ProviderError};
use super::query::prepare_query;
use crate::config::GlobalConfig;
use crate::error::NormResult;
use crate::normalizer::{NormalizationOptions, Normalizer};
use crate::utils::is_blank;

/// 单次校验请求
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationRequest {
    pub address: String,
    /// 最大尝试次数（0 视为 1）
    pub retry_count: u32,
    /// 两次尝试之间的基础间隔（限流时翻倍）
    pub delay: Duration,
    /// 每次尝试各自的超时
    pub timeout: Duration,
    /// 耗尽后是否回退到本地地址规范化
    pub fallback_to_local: bool,
}

impl ValidationRequest {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            retry_count: 3,
            delay: Duration::from_secs(1),
            timeout: Duration::from_secs(10),
            fallback_to_local: true,
        }
    }

    pub fn retry_count(mut self, retry_count: u32) -> Self {
        self.retry_count = retry_count;
        self
    }

    pub fn delay_seconds(mut self, seconds: u64) -> Self {
        self.delay = Duration::from_secs(seconds);
        self
    }

    pub fn timeout_seconds(mut self, seconds: u64) -> Self {
        self.timeout = Duration::from_secs(seconds);
        self
    }

    pub fn fallback_to_local(mut self, enabled: bool) -> Self {
        self.fallback_to_local = enabled;
        self
    }
}

/// 校验结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// 服务返回的规范展示地址
    Validated(String),
    /// 重试耗尽，本地规范化后的原始输入
    LocalFallback(String),
    /// 重试耗尽且未开启回退，原样返回
    Original(String),
}

impl ValidationOutcome {
    pub fn as_str(&self) -> &str {
        match self {
            ValidationOutcome::Validated(s)
            | ValidationOutcome::LocalFallback(s)
            | ValidationOutcome::Original(s) => s,
        }
    }

    pub fn into_string(self) -> String {
        match self {
            ValidationOutcome::Validated(s)
            | ValidationOutcome::LocalFallback(s)
            | ValidationOutcome::Original(s) => s,
        }
    }

    pub fn is_validated(&self) -> bool {
        matches!(self, ValidationOutcome::Validated(_))
    }
}

/// 地址校验器
/// 同一实例的多次调用互不共享限流状态
pub struct AddressValidator<P: GeocodingProvider> {
    provider: P,
    normalizer: Normalizer,
}

impl AddressValidator<NominatimProvider> {
    /// 使用 Nominatim 与配置中的规则文件
    pub fn from_config(config: &GlobalConfig) -> NormResult<Self> {
        Ok(Self::new(
            NominatimProvider::new(config)?,
            Normalizer::from_config(config)?,
        ))
    }
}

impl<P: GeocodingProvider> AddressValidator<P> {
    pub fn new(provider: P, normalizer: Normalizer) -> Self {
        Self { provider, normalizer }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// 执行校验，永不返回错误
    pub async fn validate(&self, request: &ValidationRequest) -> ValidationOutcome {
        if is_blank(&request.address) {
            return ValidationOutcome::Original(String::new());
        }

        let query = prepare_query(self.normalizer.rules(), &request.address);
        if query.is_empty() {
            debug!("Address [{}] is empty after query cleanup", request.address);
            return self.fallback(request);
        }

        let attempts = request.retry_count.max(1);
        let mut delay = request.delay;

        for attempt in 1..=attempts {
            if attempt > 1 {
                tokio::time::sleep(delay).await;
            }

            debug!("Geocoding [{}] attempt {}/{}", query, attempt, attempts);
            let result = tokio::time::timeout(
                request.timeout,
                self.provider.lookup(&query, request.timeout),
            )
            .await
            .unwrap_or(Err(ProviderError::Timeout));

            match result {
                Ok(Some(resolved)) => {
                    debug!("Geocoding [{}] resolved to [{}]", query, resolved);
                    return ValidationOutcome::Validated(resolved);
                }
                Ok(None) => {
                    debug!("Geocoding [{}] returned no results (attempt {})", query, attempt);
                }
                Err(ProviderError::RateLimited) => {
                    delay = delay.saturating_mul(2);
                    warn!(
                        "Geocoding rate limited (attempt {}/{}), backing off to {:?}",
                        attempt, attempts, delay
                    );
                }
                Err(e) => {
                    warn!("Geocoding attempt {}/{} failed: {}", attempt, attempts, e);
                }
            }
        }

        warn!("Geocoding exhausted {} attempts for [{}]", attempts, request.address);
        self.fallback(request)
    }

    /// 字符串形式的便捷入口
    pub async fn validate_address(
        &self,
        address: &str,
        retry_count: u32,
        delay_seconds: u64,
        timeout_seconds: u64,
        fallback_to_local: bool,
    ) -> String {
        let request = ValidationRequest::new(address)
            .retry_count(retry_count)
            .delay_seconds(delay_seconds)
            .timeout_seconds(timeout_seconds)
            .fallback_to_local(fallback_to_local);
        self.validate(&request).await.into_string()
    }

    // 回退作用于原始输入而非查询串
    fn fallback(&self, request: &ValidationRequest) -> ValidationOutcome {
        if request.fallback_to_local {
            let local = self
                .normalizer
                .address(&request.address, &NormalizationOptions::default());
            debug!("Falling back to local address normalization: [{}]", local);
            ValidationOutcome::LocalFallback(local)
        } else {
            ValidationOutcome::Original(request.address.clone())
        }
    }
}
