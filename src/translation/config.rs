//! 翻译配置管理
//!
//! 提供简化的配置管理，支持环境变量、配置文件和默认值

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::translation::error::{TranslationError, TranslationResult};

/// 配置常量
pub mod constants {
    use std::time::Duration;

    /// 默认翻译端点
    pub const DEFAULT_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

    /// 默认目标语言（站点的历史行为）
    pub const DEFAULT_TARGET_LANG: &str = "nl";
    pub const DEFAULT_SOURCE_LANG: &str = "auto";

    /// 请求头中声明的来源站点
    pub const DEFAULT_ORIGIN: &str = "https://aeonsolutions.github.io";

    pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
    pub const DEFAULT_MAX_CONCURRENT_REQUESTS: usize = 8;

    /// 低于此字符数的片段不发起请求
    pub const DEFAULT_MIN_FRAGMENT_CHARS: usize = 2;

    /// 扫描的标签集合，顺序即片段的提取顺序
    pub const TRANSLATABLE_TAGS: &[&str] = &["p", "h1", "h2", "h3", "h4", "h5", "h6", "a"];

    /// 配置文件搜索路径
    pub const CONFIG_PATHS: &[&str] = &["pagetrans.toml", ".pagetrans.toml"];
}

/// 翻译配置
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TranslationConfig {
    // 基础配置
    pub target_lang: String,
    pub source_lang: String,
    pub endpoint: String,
    pub origin: String,

    // 性能配置
    pub max_concurrent_requests: usize,
    pub request_timeout_secs: u64,

    // 过滤配置
    pub min_fragment_chars: usize,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            target_lang: constants::DEFAULT_TARGET_LANG.to_string(),
            source_lang: constants::DEFAULT_SOURCE_LANG.to_string(),
            endpoint: constants::DEFAULT_ENDPOINT.to_string(),
            origin: constants::DEFAULT_ORIGIN.to_string(),
            max_concurrent_requests: constants::DEFAULT_MAX_CONCURRENT_REQUESTS,
            request_timeout_secs: constants::DEFAULT_REQUEST_TIMEOUT.as_secs(),
            min_fragment_chars: constants::DEFAULT_MIN_FRAGMENT_CHARS,
        }
    }
}

impl TranslationConfig {
    /// 创建带指定语言的默认配置
    pub fn default_with_lang(target_lang: &str, endpoint: Option<&str>) -> Self {
        let mut config = Self::default();
        config.target_lang = target_lang.to_string();
        if let Some(url) = endpoint {
            config.endpoint = url.to_string();
        }
        config
    }

    /// 从配置文件和环境变量加载配置
    ///
    /// 依次查找 `constants::CONFIG_PATHS` 中的文件；找不到则退回默认值。
    /// 环境变量始终在最后覆盖。
    pub fn load() -> TranslationResult<Self> {
        let mut config = Self::default();

        for path in constants::CONFIG_PATHS {
            if std::path::Path::new(path).exists() {
                let contents = std::fs::read_to_string(path)
                    .map_err(|e| TranslationError::ConfigError(format!("读取 {path} 失败: {e}")))?;
                config = toml::from_str(&contents)?;
                tracing::debug!("已加载配置文件: {}", path);
                break;
            }
        }

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// 应用环境变量覆盖
    pub fn apply_env_overrides(&mut self) {
        if let Ok(target_lang) = std::env::var("PAGETRANS_TARGET_LANG") {
            self.target_lang = target_lang;
        }

        if let Ok(source_lang) = std::env::var("PAGETRANS_SOURCE_LANG") {
            self.source_lang = source_lang;
        }

        if let Ok(endpoint) = std::env::var("PAGETRANS_ENDPOINT") {
            tracing::info!("环境变量覆盖翻译端点: {}", endpoint);
            self.endpoint = endpoint;
        }

        if let Ok(origin) = std::env::var("PAGETRANS_ORIGIN") {
            self.origin = origin;
        }

        if let Ok(value) = std::env::var("PAGETRANS_MAX_CONCURRENT_REQUESTS") {
            if let Ok(parsed) = value.parse() {
                self.max_concurrent_requests = parsed;
            }
        }

        if let Ok(value) = std::env::var("PAGETRANS_REQUEST_TIMEOUT_SECS") {
            if let Ok(parsed) = value.parse() {
                self.request_timeout_secs = parsed;
            }
        }

        if let Ok(value) = std::env::var("PAGETRANS_MIN_FRAGMENT_CHARS") {
            if let Ok(parsed) = value.parse() {
                self.min_fragment_chars = parsed;
            }
        }
    }

    /// 验证配置
    pub fn validate(&self) -> TranslationResult<()> {
        if self.target_lang.is_empty() {
            return Err(TranslationError::ConfigError(
                "目标语言不能为空".to_string(),
            ));
        }

        if self.endpoint.is_empty() {
            return Err(TranslationError::ConfigError(
                "翻译端点不能为空".to_string(),
            ));
        }

        if self.max_concurrent_requests == 0 {
            return Err(TranslationError::ConfigError(
                "最大并发数不能为0".to_string(),
            ));
        }

        if self.request_timeout_secs == 0 {
            return Err(TranslationError::ConfigError(
                "请求超时不能为0".to_string(),
            ));
        }

        Ok(())
    }

    /// 请求超时时长
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
