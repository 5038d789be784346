//! 记录提取
//!
//! 论坛导出的 HTML 中，每条记录以一个 `<font face="arial">`（或 `helvetica`）
//! 元素开头，里面是时间戳；其后第一个 `<i>` 元素的最后一个词是 IP；
//! 其后第一个 `<table>` 的两列行是字段名和值。
//!
//! "其后"均指文档顺序：对展开后的元素列表做一次正向扫描，
//! 每个标记元素记住它之后出现的第一个 `<i>` 和第一个 `<table>`。

use markup5ever_rcdom::Handle;
use tracing::{debug, info};

use super::dom::{find_descendants, flatten_elements, get_node_attr, get_node_name, get_node_text};
use crate::core::ExportError;
use crate::dataset::Record;

pub const MARKER_TAG: &str = "font";
pub const MARKER_FACES: &[&str] = &["arial", "helvetica"];
pub const TIMESTAMP_FIELD: &str = "Timestamp";
pub const IP_FIELD: &str = "IP";
pub const MISSING_IP: &str = "N/A";

struct MarkerMatch {
    marker: Handle,
    italic: Option<Handle>,
    table: Option<Handle>,
}

/// Face values are compared case-sensitively.
pub fn is_marker(node: &Handle) -> bool {
    get_node_name(node) == Some(MARKER_TAG)
        && get_node_attr(node, "face")
            .map(|face| MARKER_FACES.contains(&face.as_str()))
            .unwrap_or(false)
}

/// Extracts one record per marker that has a table somewhere after it
///
/// Markers with no following table are dropped silently. A following `<i>`
/// with no text in it is an error, even for a marker that is dropped.
pub fn extract_records(document: &Handle) -> Result<Vec<Record>, ExportError> {
    let matches = match_markers(document);
    let marker_count = matches.len();
    let mut records = Vec::with_capacity(marker_count);

    for found in matches {
        let timestamp = get_node_text(&found.marker).trim().to_string();
        let ip = extract_ip(found.italic.as_ref())
            .ok_or_else(|| ExportError::BlankAddressLine(timestamp.clone()))?;

        let table = match found.table {
            Some(table) => table,
            None => {
                debug!(%timestamp, "marker without a following table, skipped");
                continue;
            }
        };

        let mut record = Record::new();
        record.insert(TIMESTAMP_FIELD, timestamp);
        record.insert(IP_FIELD, ip);
        record.extend(extract_table_fields(&table));
        records.push(record);
    }

    info!(markers = marker_count, records = records.len(), "extracted records");
    Ok(records)
}

fn match_markers(document: &Handle) -> Vec<MarkerMatch> {
    let mut matches: Vec<MarkerMatch> = Vec::new();
    // matches[awaiting_italic..] 还没有找到 <i>，<table> 同理
    let mut awaiting_italic = 0;
    let mut awaiting_table = 0;

    for node in flatten_elements(document) {
        match get_node_name(&node) {
            Some("i") => {
                for found in &mut matches[awaiting_italic..] {
                    found.italic = Some(node.clone());
                }
                awaiting_italic = matches.len();
            }
            Some("table") => {
                for found in &mut matches[awaiting_table..] {
                    found.table = Some(node.clone());
                }
                awaiting_table = matches.len();
            }
            _ => {}
        }

        if is_marker(&node) {
            matches.push(MarkerMatch {
                marker: node,
                italic: None,
                table: None,
            });
        }
    }

    matches
}

/// 没有 `<i>` 时为 `N/A`；有 `<i>` 但没有任何词时为 `None`
fn extract_ip(italic: Option<&Handle>) -> Option<String> {
    match italic {
        Some(node) => get_node_text(node)
            .split_whitespace()
            .last()
            .map(str::to_string),
        None => Some(MISSING_IP.to_string()),
    }
}

/// 提取表格中恰好两个单元格的行；其他行忽略
pub fn extract_table_fields(table: &Handle) -> Record {
    let mut fields = Record::new();

    for row in find_descendants(table, "tr") {
        let cells = find_descendants(&row, "td");
        if let [key, value] = cells.as_slice() {
            fields.insert(
                get_node_text(key).trim(),
                get_node_text(value).trim(),
            );
        }
    }

    fields
}
