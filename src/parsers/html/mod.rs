//! HTML解析和处理模块
//!
//! - `dom`: 解码、DOM 构建和基础节点操作
//! - `records`: 从论坛导出文档中提取记录

pub mod dom;
pub mod records;

pub use dom::{
    decode_document, find_descendants, flatten_elements, get_node_attr, get_node_name,
    get_node_text, get_stripped_text, has_class, html_to_dom,
};
pub use records::{extract_records, extract_table_fields, is_marker, MISSING_IP};
