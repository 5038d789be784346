//! 评论筛选
//!
//! 只保留有实际内容的评论：非空、至少包含一个空格、长度在 3 到 2000 个字符之间。

use tracing::debug;

use super::table::Table;

pub const COMMENTS_COLUMN: &str = "Comments";
pub const MIN_COMMENT_CHARS: usize = 3;
pub const MAX_COMMENT_CHARS: usize = 2000;

/// Length is counted in chars and the text is not re-trimmed here.
pub fn is_qualifying_comment(comment: &str) -> bool {
    if !comment.contains(' ') {
        return false;
    }

    let length = comment.chars().count();
    (MIN_COMMENT_CHARS..=MAX_COMMENT_CHARS).contains(&length)
}

/// 筛选评论行
///
/// 表中没有 `Comments` 列时返回 `None`。
pub fn filter_comments(mut table: Table) -> Option<Table> {
    let comments = table.column_index(COMMENTS_COLUMN)?;
    let total = table.len();

    table.retain_rows(|row| !row[comments].is_empty());
    let non_empty = table.len();

    table.retain_rows(|row| is_qualifying_comment(&row[comments]));

    debug!(
        total,
        non_empty,
        kept = table.len(),
        "filtered comment rows"
    );

    Some(table)
}
