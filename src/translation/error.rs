//! 翻译模块统一错误处理

use thiserror::Error;

/// 翻译错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslationError {
    /// 配置错误
    #[error("translation client misconfigured: {0}")]
    ConfigError(String),

    /// 输入验证错误
    #[error("invalid input for translation: {0}")]
    InvalidInput(String),

    /// 网络错误
    #[error("translation request failed: {0}")]
    NetworkError(String),

    /// 速率限制错误
    #[error("too many translation requests, the service refused to answer")]
    RateLimitExceeded,

    /// 服务返回了非成功状态码
    #[error("translation service responded with HTTP {0}")]
    RequestError(u16),

    /// 响应中找不到译文
    #[error("no translation found for \"{0}\"")]
    TranslationNotFound(String),
}

pub type TranslationResult<T> = Result<T, TranslationError>;

impl From<reqwest::Error> for TranslationError {
    fn from(error: reqwest::Error) -> Self {
        match error.status() {
            Some(status) => TranslationError::RequestError(status.as_u16()),
            None => TranslationError::NetworkError(error.to_string()),
        }
    }
}
