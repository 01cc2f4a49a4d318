//! Geocoding provider boundary
//! 地理编码服务边界：视为黑盒的同步请求/响应服务，本模块只负责一次请求

use std::time::Duration;
use async_trait::async_trait;
use reqwest::header::{RETRY_AFTER, USER_AGENT};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::config::GlobalConfig;
use crate::error::NormResult;

/// 单次查询失败原因
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProviderError {
    #[error("rate limited by provider")]
    RateLimited,
    #[error("request timed out")]
    Timeout,
    #[error("provider returned status {0}")]
    Http(u16),
    #[error("network error: {0}")]
    Network(String),
    #[error("failed to decode response: {0}")]
    Decode(String),
}

/// 地理编码服务抽象
/// 返回 Ok(Some(展示地址)) 表示命中，Ok(None) 表示服务正常但无结果
#[async_trait]
pub trait GeocodingProvider: Send + Sync {
    async fn lookup(&self, query: &str, timeout: Duration) -> Result<Option<String>, ProviderError>;
}

/// Nominatim 搜索结果（仅取展示字段）
#[derive(Debug, Deserialize)]
struct SearchResult {
    #[serde(default)]
    display_name: Option<String>,
}

/// Nominatim 地理编码实现
/// 公共实例要求每秒不超过 1 次请求，并发调用方需自行限流
#[derive(Debug, Clone)]
pub struct NominatimProvider {
    client: Client,
    endpoint: Url,
    user_agent: String,
}

impl NominatimProvider {
    pub fn new(config: &GlobalConfig) -> NormResult<Self> {
        let endpoint = Url::parse(&config.geocoder_url)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout))
            .build()?;

        Ok(Self {
            client,
            endpoint,
            user_agent: config.user_agent.clone(),
        })
    }

    /// 构建查询地址：q / format=json / addressdetails=1 / limit=1
    pub fn search_url(&self, query: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("format", "json")
            .append_pair("addressdetails", "1")
            .append_pair("limit", "1");
        url
    }

    fn is_rate_limited(status: StatusCode, has_retry_after: bool) -> bool {
        status == StatusCode::TOO_MANY_REQUESTS
            || (status == StatusCode::SERVICE_UNAVAILABLE && has_retry_after)
    }
}

#[async_trait]
impl GeocodingProvider for NominatimProvider {
    async fn lookup(&self, query: &str, timeout: Duration) -> Result<Option<String>, ProviderError> {
        let url = self.search_url(query);
        debug!("Geocoding request: {}", url);

        let response = self
            .client
            .get(url)
            .header(USER_AGENT, &self.user_agent)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ProviderError::Timeout
                } else {
                    ProviderError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        if Self::is_rate_limited(status, response.headers().contains_key(RETRY_AFTER)) {
            return Err(ProviderError::RateLimited);
        }
        if !status.is_success() {
            return Err(ProviderError::Http(status.as_u16()));
        }

        let results: Vec<SearchResult> = response
            .json()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))?;

        Ok(results
            .into_iter()
            .next()
            .and_then(|r| r.display_name)
            .filter(|name| !name.trim().is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigManager;

    #[test]
    fn test_search_url_parameters() {
        let provider = NominatimProvider::new(&ConfigManager::get_default()).unwrap();
        let url = provider.search_url("10 Downing St, London");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();

        assert_eq!(url.host_str(), Some("nominatim.openstreetmap.org"));
        assert_eq!(
            pairs,
            vec![
                ("q".to_string(), "10 Downing St, London".to_string()),
                ("format".to_string(), "json".to_string()),
                ("addressdetails".to_string(), "1".to_string()),
                ("limit".to_string(), "1".to_string()),
            ]
        );
    }

    #[test]
    fn test_invalid_endpoint_is_rejected() {
        let config = ConfigManager::custom().geocoder_url("not a url").build();
        assert!(NominatimProvider::new(&config).is_err());
    }

    #[test]
    fn test_rate_limit_detection() {
        assert!(NominatimProvider::is_rate_limited(StatusCode::TOO_MANY_REQUESTS, false));
        assert!(NominatimProvider::is_rate_limited(StatusCode::SERVICE_UNAVAILABLE, true));
        assert!(!NominatimProvider::is_rate_limited(StatusCode::SERVICE_UNAVAILABLE, false));
        assert!(!NominatimProvider::is_rate_limited(StatusCode::OK, false));
    }
}
