//! # 解析器模块
//!
//! # 模块组织
//!
//! - `html` - HTML文档解码、DOM操作、记录提取

pub mod html;

// Re-export commonly used items for convenience
pub use html::{decode_document, extract_records, html_to_dom};
