//! 翻译模块统一错误处理
//!
//! 提供结构化错误类型和错误处理机制

use thiserror::Error;

use crate::core::PageTransError;

/// 翻译错误类型
#[derive(Error, Debug, Clone)]
pub enum TranslationError {
    /// 传输不可用（HTTP客户端构造失败），整个翻译流程终止
    #[error("翻译传输不可用: {0}")]
    TransportUnavailable(String),

    /// 单个翻译请求以非200状态完成
    #[error("翻译请求失败，HTTP状态 {status}")]
    RequestFailed { status: u16 },

    /// 网络错误（连接失败、超时）
    #[error("网络错误: {0}")]
    NetworkError(String),

    /// 翻译端点响应体不符合约定格式
    #[error("响应解析错误: {0}")]
    ResponseParseError(String),

    /// 配置错误
    #[error("配置错误: {0}")]
    ConfigError(String),

    /// 输入验证错误
    #[error("输入无效: {0}")]
    InvalidInput(String),

    /// 内部错误
    #[error("内部错误: {0}")]
    InternalError(String),
}

impl TranslationError {
    /// 检查错误是否可重试
    pub fn is_retryable(&self) -> bool {
        match self {
            TranslationError::NetworkError(_) => true,
            TranslationError::RequestFailed { status } => *status >= 500,
            TranslationError::TransportUnavailable(_) => false,
            TranslationError::ResponseParseError(_) => false,
            TranslationError::ConfigError(_) => false,
            TranslationError::InvalidInput(_) => false,
            TranslationError::InternalError(_) => false,
        }
    }
}

/// 从PageTransError转换
impl From<PageTransError> for TranslationError {
    fn from(error: PageTransError) -> Self {
        TranslationError::InternalError(error.to_string())
    }
}

/// 转换为PageTransError（CLI边界）
impl From<TranslationError> for PageTransError {
    fn from(error: TranslationError) -> Self {
        PageTransError::new(&error.to_string())
    }
}

/// 标准错误转换
impl From<std::io::Error> for TranslationError {
    fn from(error: std::io::Error) -> Self {
        TranslationError::NetworkError(format!("IO错误: {}", error))
    }
}

impl From<serde_json::Error> for TranslationError {
    fn from(error: serde_json::Error) -> Self {
        TranslationError::ResponseParseError(format!("JSON解析错误: {}", error))
    }
}

impl From<toml::de::Error> for TranslationError {
    fn from(error: toml::de::Error) -> Self {
        TranslationError::ConfigError(format!("TOML解析错误: {}", error))
    }
}

/// 错误结果类型别名
pub type TranslationResult<T> = Result<T, TranslationError>;
