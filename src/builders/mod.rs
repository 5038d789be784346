//! # 构建器模块
//!
//! # 模块组织
//!
//! - `csv_builder` - 将表格序列化为 CSV

pub mod csv_builder;

// Re-export commonly used items for convenience
pub use csv_builder::*;
