//! Google 翻译客户端
//!
//! 请求移动版翻译页面（`/m?sl=..&tl=..&q=..`），再从返回的 HTML 中读取译文。
//! 不重试、不限速、不缓存：每次调用对应一次请求。

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use tracing::debug;
use url::Url;

use super::error::{TranslationError, TranslationResult};
use super::service::Translator;
use crate::env::EnvConfig;
use crate::parsers::html::{find_descendants, get_stripped_text, has_class, html_to_dom};

pub const DEFAULT_API_URL: &str = "https://translate.google.com/m";
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0";
/// Longest input (exclusive, in chars) the service accepts in one request
pub const MAX_INPUT_CHARS: usize = 5000;
/// 按顺序尝试的译文容器 class
const RESULT_CLASSES: &[&str] = &["t0", "result-container"];

pub struct GoogleTranslator {
    client: Client,
    endpoint: Url,
}

impl GoogleTranslator {
    /// `timeout` of `None` lets a request block for as long as the service takes.
    pub fn new(
        endpoint: &str,
        user_agent: &str,
        timeout: Option<Duration>,
    ) -> TranslationResult<GoogleTranslator> {
        let endpoint = Url::parse(endpoint).map_err(|e| {
            TranslationError::ConfigError(format!("invalid API URL {endpoint}: {e}"))
        })?;

        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|e| TranslationError::ConfigError(e.to_string()))?;

        Ok(GoogleTranslator { client, endpoint })
    }

    pub fn from_env_config(config: &EnvConfig) -> TranslationResult<GoogleTranslator> {
        GoogleTranslator::new(
            &config.translation_api_url,
            &config.user_agent,
            config.translation_timeout,
        )
    }

    fn request_url(&self, text: &str, source: &str, target: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("tl", target)
            .append_pair("sl", source)
            .append_pair("q", text);
        url
    }
}

impl Translator for GoogleTranslator {
    fn translate(&self, text: &str, source: &str, target: &str) -> TranslationResult<String> {
        let length = text.chars().count();
        if length >= MAX_INPUT_CHARS {
            return Err(TranslationError::InvalidInput(format!(
                "text is {length} characters long, the limit is {}",
                MAX_INPUT_CHARS - 1
            )));
        }

        let text = text.trim();
        if text.is_empty() || source == target {
            return Ok(text.to_string());
        }

        let response = self.client.get(self.request_url(text, source, target)).send()?;
        let status = response.status();
        debug!(%status, chars = length, "translation response");

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(TranslationError::RateLimitExceeded);
        }
        if !status.is_success() {
            return Err(TranslationError::RequestError(status.as_u16()));
        }

        let page = response.text()?;
        parse_translation(&page, text)
    }
}

/// Reads the translated text out of the service's result page
///
/// An echo of an input with no letters or digits in it (punctuation, emoji)
/// counts as no translation and yields an empty string.
pub fn parse_translation(page: &str, original: &str) -> TranslationResult<String> {
    let dom = html_to_dom(page);
    let divs = find_descendants(&dom.document, "div");

    let translated = RESULT_CLASSES
        .iter()
        .find_map(|class| divs.iter().find(|div| has_class(div, class)))
        .map(get_stripped_text)
        .ok_or_else(|| TranslationError::TranslationNotFound(original.to_string()))?;

    let original = original.trim();
    if translated == original && !original.chars().any(char::is_alphanumeric) {
        return Ok(String::new());
    }

    Ok(translated)
}
