//! 全局配置管理,存储所有可配置项

use std::path::PathBuf;

/// 默认地理编码服务地址（Nominatim 公共搜索接口）
pub const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org/search";

/// 全局配置
#[derive(Debug, Clone)]
pub struct GlobalConfig {
    // 规则文件路径（None 时全部使用内置规则）
    pub rules_path: Option<PathBuf>,
    // 地理编码服务地址
    pub geocoder_url: String,
    // 请求时携带的 User-Agent（Nominatim 要求必须标识客户端）
    pub user_agent: String,
    // 超时配置（单位：秒）
    pub http_timeout: u64,
    // 是否启用详细日志
    pub verbose: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            rules_path: None,
            geocoder_url: DEFAULT_GEOCODER_URL.to_string(),
            user_agent: format!("rsnormalizer/{}", env!("CARGO_PKG_VERSION")),
            http_timeout: 30,
            verbose: false,
        }
    }
}

/// 配置管理器
pub struct ConfigManager;

impl ConfigManager {
    /// 获取默认配置
    pub fn get_default() -> GlobalConfig {
        GlobalConfig::default()
    }

    /// 自定义配置
    pub fn custom() -> CustomConfigBuilder {
        CustomConfigBuilder::new()
    }
}

/// 配置构建器（便于自定义配置）
#[derive(Debug, Clone, Default)]
pub struct CustomConfigBuilder {
    config: GlobalConfig,
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rules_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.rules_path = Some(path.into());
        self
    }

    pub fn geocoder_url(mut self, url: impl Into<String>) -> Self {
        self.config.geocoder_url = url.into();
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    pub fn http_timeout(mut self, timeout: u64) -> Self {
        self.config.http_timeout = timeout;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    pub fn build(self) -> GlobalConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_overrides_defaults() {
        let config = ConfigManager::custom()
            .rules_path("/etc/rsnormalizer/rules.json")
            .user_agent("acme-dedupe/2.0")
            .http_timeout(5)
            .build();

        assert_eq!(config.rules_path, Some(PathBuf::from("/etc/rsnormalizer/rules.json")));
        assert_eq!(config.user_agent, "acme-dedupe/2.0");
        assert_eq!(config.http_timeout, 5);
        assert_eq!(config.geocoder_url, DEFAULT_GEOCODER_URL);
    }

    #[test]
    fn test_default_user_agent_names_client() {
        let config = ConfigManager::get_default();
        assert!(config.user_agent.starts_with("rsnormalizer/"));
        assert!(config.rules_path.is_none());
    }
}
