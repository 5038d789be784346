//! # Forum Export Library
//!
//! 将论坛评论导出的 HTML 文件转换为经过筛选和翻译的 CSV 文件。
//!
//! ## 模块组织
//!
//! - `core` - 导出流程和错误类型
//! - `parsers` - HTML 解码、DOM 操作和记录提取
//! - `dataset` - 记录、表格和评论筛选
//! - `translation` - 翻译接口、Google 翻译客户端和译文列
//! - `builders` - CSV 输出构建器
//! - `env` - 环境变量配置

pub mod builders;
pub mod core;
pub mod dataset;
pub mod env;
pub mod parsers;
pub mod translation;

// Re-export commonly used items for convenience
pub use crate::core::{
    export_document, export_file, format_output_path, print_error_message, print_info_message,
    ExportError, ExportOptions, ExportOutcome, FileExport,
};
pub use crate::dataset::{Record, Table};
pub use crate::translation::{GoogleTranslator, TranslationError, Translator};
