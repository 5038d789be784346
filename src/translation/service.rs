//! 翻译服务接口
//!
//! 管道只依赖 `Translator`：一次调用翻译一段文本，同步返回结果。
//! 真实实现见 `google`，测试中可以换成确定性的替身。

use super::error::TranslationResult;

/// Source language value that asks the service to detect the language
pub const AUTO_DETECT: &str = "auto";
pub const DEFAULT_TARGET_LANG: &str = "en";

/// A synchronous text translator
pub trait Translator {
    /// Translates `text` from `source` (or [`AUTO_DETECT`]) into `target`.
    fn translate(&self, text: &str, source: &str, target: &str) -> TranslationResult<String>;
}

impl<T: Translator + ?Sized> Translator for &T {
    fn translate(&self, text: &str, source: &str, target: &str) -> TranslationResult<String> {
        (**self).translate(text, source, target)
    }
}

impl<T: Translator + ?Sized> Translator for Box<T> {
    fn translate(&self, text: &str, source: &str, target: &str) -> TranslationResult<String> {
        (**self).translate(text, source, target)
    }
}
