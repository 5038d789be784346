//! 统一的环境变量管理系统
//!
//! 提供类型安全、可验证的环境变量管理

use std::env;
use std::fmt;
use std::time::Duration;

/// 环境变量解析错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvError {
    pub variable: String,
    pub message: String,
}

impl fmt::Display for EnvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Environment variable '{}': {}", self.variable, self.message)
    }
}

impl std::error::Error for EnvError {}

pub type EnvResult<T> = Result<T, EnvError>;

/// 环境变量访问器特性
pub trait EnvVar<T> {
    const NAME: &'static str;
    const DEFAULT: Option<T>;
    const DESCRIPTION: &'static str;

    fn parse(value: &str) -> EnvResult<T>;

    fn get() -> EnvResult<T> {
        match env::var(Self::NAME) {
            Ok(value) => Self::parse(&value),
            Err(_) => {
                if let Some(default) = Self::DEFAULT {
                    Ok(default)
                } else {
                    Err(EnvError {
                        variable: Self::NAME.to_string(),
                        message: "Required environment variable not set".to_string(),
                    })
                }
            }
        }
    }

    /// 未设置时返回 `None`；已设置但无效时仍然报错
    fn get_optional() -> EnvResult<Option<T>> {
        match env::var(Self::NAME) {
            Ok(value) => Self::parse(&value).map(Some),
            Err(_) => Ok(Self::DEFAULT),
        }
    }
}

/// 核心环境变量定义
pub mod core {
    use super::*;

    /// 日志级别
    pub struct LogLevel;
    impl EnvVar<String> for LogLevel {
        const NAME: &'static str = "FORUM_EXPORT_LOG_LEVEL";
        const DEFAULT: Option<String> = None;

        fn get() -> EnvResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok("warn".to_string()),
            }
        }
        const DESCRIPTION: &'static str = "Log level: trace, debug, info, warn, error";

        fn parse(value: &str) -> EnvResult<String> {
            match value.trim().to_lowercase().as_str() {
                level @ ("trace" | "debug" | "info" | "warn" | "error") => Ok(level.to_string()),
                _ => Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: format!(
                        "Invalid log level '{}'. Use: trace, debug, info, warn, error",
                        value
                    ),
                }),
            }
        }
    }

    /// 启用颜色输出
    pub struct NoColor;
    impl EnvVar<bool> for NoColor {
        const NAME: &'static str = "NO_COLOR";
        const DEFAULT: Option<bool> = Some(false);
        const DESCRIPTION: &'static str = "Disable colored output when set to any value";

        fn parse(value: &str) -> EnvResult<bool> {
            // NO_COLOR 遵循标准：任何值都表示禁用颜色
            Ok(!value.is_empty())
        }
    }

    /// 输入文档字符集
    pub struct InputEncoding;
    impl EnvVar<String> for InputEncoding {
        const NAME: &'static str = "FORUM_EXPORT_INPUT_ENCODING";
        const DEFAULT: Option<String> = None;

        fn get() -> EnvResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok("utf-8".to_string()),
            }
        }
        const DESCRIPTION: &'static str = "Character encoding label of the input HTML file";

        fn parse(value: &str) -> EnvResult<String> {
            let label = value.trim();
            if encoding_rs::Encoding::for_label(label.as_bytes()).is_none() {
                return Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: format!("Unknown encoding label '{}'", label),
                });
            }
            Ok(label.to_lowercase())
        }
    }
}

/// 翻译相关环境变量
pub mod translation {
    use super::*;
    use crate::translation::google::{DEFAULT_API_URL, DEFAULT_USER_AGENT};
    use crate::translation::{AUTO_DETECT, DEFAULT_TARGET_LANG};

    /// 目标语言
    pub struct TargetLang;
    impl EnvVar<String> for TargetLang {
        const NAME: &'static str = "FORUM_EXPORT_TRANSLATION_TARGET_LANG";
        const DEFAULT: Option<String> = None;

        fn get() -> EnvResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok(DEFAULT_TARGET_LANG.to_string()),
            }
        }
        const DESCRIPTION: &'static str =
            "Target language for translation (ISO 639-1 code, optionally with region)";

        fn parse(value: &str) -> EnvResult<String> {
            parse_language(value, Self::NAME)
        }
    }

    /// 源语言
    pub struct SourceLang;
    impl EnvVar<String> for SourceLang {
        const NAME: &'static str = "FORUM_EXPORT_TRANSLATION_SOURCE_LANG";
        const DEFAULT: Option<String> = None;

        fn get() -> EnvResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok(AUTO_DETECT.to_string()),
            }
        }
        const DESCRIPTION: &'static str = "Source language for translation ('auto' for detection)";

        fn parse(value: &str) -> EnvResult<String> {
            if value.trim().eq_ignore_ascii_case(AUTO_DETECT) {
                return Ok(AUTO_DETECT.to_string());
            }
            parse_language(value, Self::NAME)
        }
    }

    /// API URL
    pub struct ApiUrl;
    impl EnvVar<String> for ApiUrl {
        const NAME: &'static str = "FORUM_EXPORT_TRANSLATION_API_URL";
        const DEFAULT: Option<String> = None;

        fn get() -> EnvResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok(DEFAULT_API_URL.to_string()),
            }
        }
        const DESCRIPTION: &'static str = "Translation page endpoint URL";

        fn parse(value: &str) -> EnvResult<String> {
            let url = value.trim();
            if url.starts_with("http://") || url.starts_with("https://") {
                Ok(url.to_string())
            } else {
                Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: "API URL must start with http:// or https://".to_string(),
                })
            }
        }
    }

    /// 请求超时（未设置则不限时）
    pub struct Timeout;
    impl EnvVar<Duration> for Timeout {
        const NAME: &'static str = "FORUM_EXPORT_TRANSLATION_TIMEOUT";
        const DEFAULT: Option<Duration> = None;
        const DESCRIPTION: &'static str =
            "Per-request translation timeout in seconds (unset: wait indefinitely)";

        fn parse(value: &str) -> EnvResult<Duration> {
            let seconds = parse_ranged_u64(value, Self::NAME, 1, 600)?;
            Ok(Duration::from_secs(seconds))
        }
    }

    /// User-Agent 请求头
    pub struct UserAgent;
    impl EnvVar<String> for UserAgent {
        const NAME: &'static str = "FORUM_EXPORT_USER_AGENT";
        const DEFAULT: Option<String> = None;
        const DESCRIPTION: &'static str = "User-Agent header sent to the translation service";

        fn get() -> EnvResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok(DEFAULT_USER_AGENT.to_string()),
            }
        }

        fn parse(value: &str) -> EnvResult<String> {
            let agent = value.trim();
            if agent.is_empty() {
                return Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: "User agent cannot be empty".to_string(),
                });
            }
            Ok(agent.to_string())
        }
    }
}

/// 辅助函数
fn parse_language(value: &str, var_name: &str) -> EnvResult<String> {
    let lang = value.trim();
    let (primary, region) = match lang.split_once('-') {
        Some((primary, region)) => (primary, Some(region)),
        None => (lang, None),
    };

    let primary_ok = primary.len() == 2 && primary.chars().all(|c| c.is_ascii_alphabetic());
    let region_ok = region
        .map(|r| (2..=4).contains(&r.len()) && r.chars().all(|c| c.is_ascii_alphanumeric()))
        .unwrap_or(true);

    if primary_ok && region_ok {
        Ok(match region {
            Some(region) => format!("{}-{}", primary.to_lowercase(), region),
            None => primary.to_lowercase(),
        })
    } else {
        Err(EnvError {
            variable: var_name.to_string(),
            message: format!(
                "Invalid language code '{}'. Use an ISO 639-1 code such as 'en' or 'zh-CN'",
                value
            ),
        })
    }
}

fn parse_ranged_u64(value: &str, var_name: &str, min: u64, max: u64) -> EnvResult<u64> {
    let num: u64 = value.trim().parse().map_err(|_| EnvError {
        variable: var_name.to_string(),
        message: "Must be a valid positive number".to_string(),
    })?;

    if num < min {
        return Err(EnvError {
            variable: var_name.to_string(),
            message: format!("Value {} is below minimum {}", num, min),
        });
    }

    if num > max {
        return Err(EnvError {
            variable: var_name.to_string(),
            message: format!("Value {} exceeds maximum {}", num, max),
        });
    }

    Ok(num)
}

/// 环境变量配置汇总
#[derive(Debug, Clone)]
pub struct EnvConfig {
    // 核心配置
    pub log_level: String,
    pub input_encoding: String,

    // 翻译配置
    pub translation_source_lang: String,
    pub translation_target_lang: String,
    pub translation_api_url: String,
    pub translation_timeout: Option<Duration>,
    pub user_agent: String,
}

impl EnvConfig {
    /// 从环境变量加载配置
    pub fn from_env() -> EnvResult<Self> {
        Ok(Self {
            log_level: core::LogLevel::get()?,
            input_encoding: core::InputEncoding::get()?,

            translation_source_lang: translation::SourceLang::get()?,
            translation_target_lang: translation::TargetLang::get()?,
            translation_api_url: translation::ApiUrl::get()?,
            translation_timeout: translation::Timeout::get_optional()?,
            user_agent: translation::UserAgent::get()?,
        })
    }
}

/// 环境变量文档生成器
pub fn generate_env_docs() -> String {
    let mut docs = String::new();
    docs.push_str("# Environment Variables Documentation\n\n");

    docs.push_str("## Core Configuration\n\n");
    push_entry(&mut docs, core::LogLevel::NAME, core::LogLevel::DESCRIPTION, "warn");
    push_entry(&mut docs, core::NoColor::NAME, core::NoColor::DESCRIPTION, "unset");
    push_entry(&mut docs, core::InputEncoding::NAME, core::InputEncoding::DESCRIPTION, "utf-8");

    docs.push_str("\n## Translation Configuration\n\n");
    push_entry(
        &mut docs,
        translation::SourceLang::NAME,
        translation::SourceLang::DESCRIPTION,
        crate::translation::AUTO_DETECT,
    );
    push_entry(
        &mut docs,
        translation::TargetLang::NAME,
        translation::TargetLang::DESCRIPTION,
        crate::translation::DEFAULT_TARGET_LANG,
    );
    push_entry(
        &mut docs,
        translation::ApiUrl::NAME,
        translation::ApiUrl::DESCRIPTION,
        crate::translation::google::DEFAULT_API_URL,
    );
    push_entry(&mut docs, translation::Timeout::NAME, translation::Timeout::DESCRIPTION, "unset");
    push_entry(
        &mut docs,
        translation::UserAgent::NAME,
        translation::UserAgent::DESCRIPTION,
        "a desktop browser",
    );

    docs
}

fn push_entry(docs: &mut String, name: &str, description: &str, default: &str) {
    docs.push_str(&format!("- `{}`: {} (default: {})\n", name, description, default));
}
