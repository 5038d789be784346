//! 翻译模块
//!
//! - **service**: `Translator` 接口
//! - **google**: 基于 Google 翻译移动页面的实现
//! - **enrich**: 为筛选后的表格追加 `trans` 列
//! - **error**: 错误处理

pub mod enrich;
pub mod error;
pub mod google;
pub mod service;

pub use enrich::{translate_comments, TRANSLATION_COLUMN};
pub use error::{TranslationError, TranslationResult};
pub use google::GoogleTranslator;
pub use service::{Translator, AUTO_DETECT, DEFAULT_TARGET_LANG};
