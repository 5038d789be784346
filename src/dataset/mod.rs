//! # 数据集模块
//!
//! 提取出的记录、由记录拼成的表格，以及评论筛选。

pub mod filter;
pub mod record;
pub mod table;

pub use filter::{filter_comments, is_qualifying_comment, COMMENTS_COLUMN};
pub use record::Record;
pub use table::Table;
