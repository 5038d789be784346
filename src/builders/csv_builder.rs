//! CSV 构建器
//!
//! 表头是表格的列名，之后每行一条记录；不输出行号列。

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::dataset::Table;

/// Serializes the whole table into an in-memory CSV document
pub fn build_csv(table: &Table) -> Result<Vec<u8>, csv::Error> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(table.columns())?;
    for row in table.rows() {
        writer.write_record(row)?;
    }

    writer
        .into_inner()
        .map_err(|error| csv::Error::from(error.into_error()))
}
