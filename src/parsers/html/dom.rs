use encoding_rs::Encoding;
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

use crate::core::ExportError;

/// 按给定字符集解码 HTML 字节
///
/// 非法字节序列不会被替换，而是作为读取错误返回。
pub fn decode_document(data: &[u8], document_encoding: &str) -> Result<String, ExportError> {
    let encoding = Encoding::for_label(document_encoding.trim().as_bytes())
        .ok_or_else(|| ExportError::UnknownEncoding(document_encoding.to_string()))?;

    encoding
        .decode_without_bom_handling_and_without_replacement(data)
        .map(|text| text.into_owned())
        .ok_or_else(|| ExportError::Decode {
            encoding: encoding.name().to_string(),
        })
}

/// 将 HTML 文本转换为 DOM
pub fn html_to_dom(html: &str) -> RcDom {
    parse_document(RcDom::default(), Default::default()).one(html)
}

/// 按文档顺序（先序）展开所有元素节点
pub fn flatten_elements(node: &Handle) -> Vec<Handle> {
    let mut elements = Vec::new();
    collect_elements(node, &mut elements);
    elements
}

fn collect_elements(node: &Handle, elements: &mut Vec<Handle>) {
    if let NodeData::Element { .. } = node.data {
        elements.push(node.clone());
    }

    for child_node in node.children.borrow().iter() {
        collect_elements(child_node, elements);
    }
}

/// 查找指定名称的后代元素（不包含节点自身）
pub fn find_descendants(node: &Handle, node_name: &str) -> Vec<Handle> {
    let mut found_nodes = Vec::new();

    for child_node in node.children.borrow().iter() {
        if get_node_name(child_node) == Some(node_name) {
            found_nodes.push(child_node.clone());
        }
        found_nodes.append(&mut find_descendants(child_node, node_name));
    }

    found_nodes
}

/// 获取节点属性值
pub fn get_node_attr(node: &Handle, attr_name: &str) -> Option<String> {
    match &node.data {
        NodeData::Element { attrs, .. } => {
            for attr in attrs.borrow().iter() {
                if &*attr.name.local == attr_name {
                    return Some(attr.value.to_string());
                }
            }
            None
        }
        _ => None,
    }
}

/// 获取节点名称
pub fn get_node_name(node: &Handle) -> Option<&'_ str> {
    match &node.data {
        NodeData::Element { name, .. } => Some(name.local.as_ref()),
        _ => None,
    }
}

/// Checks whether the `class` attribute lists the given class name
pub fn has_class(node: &Handle, class_name: &str) -> bool {
    get_node_attr(node, "class")
        .map(|classes| classes.split_ascii_whitespace().any(|c| c == class_name))
        .unwrap_or(false)
}

/// 获取节点下的全部文本（按文档顺序拼接，不做裁剪）
pub fn get_node_text(node: &Handle) -> String {
    let mut text = String::new();
    for fragment in text_fragments(node) {
        text.push_str(&fragment);
    }
    text
}

/// 获取节点文本：每个文本片段先裁剪，空片段丢弃，再直接拼接
pub fn get_stripped_text(node: &Handle) -> String {
    text_fragments(node)
        .iter()
        .map(|fragment| fragment.trim())
        .filter(|fragment| !fragment.is_empty())
        .collect()
}

fn text_fragments(node: &Handle) -> Vec<String> {
    let mut fragments = Vec::new();
    collect_text(node, &mut fragments);
    fragments
}

fn collect_text(node: &Handle, fragments: &mut Vec<String>) {
    match &node.data {
        NodeData::Text { contents } => fragments.push(contents.borrow().to_string()),
        NodeData::Comment { .. } | NodeData::ProcessingInstruction { .. } => {}
        _ => {
            for child_node in node.children.borrow().iter() {
                collect_text(child_node, fragments);
            }
        }
    }
}
