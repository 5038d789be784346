use std::collections::HashMap;

use super::record::Record;

/// Row-major string table assembled from heterogeneous records
///
/// Every row has exactly one cell per column; cells for fields a record did
/// not carry are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// 两遍构建：先确定所有字段的并集（按首次出现顺序），再填充每一行
    pub fn from_records(records: &[Record]) -> Table {
        let mut columns: Vec<String> = Vec::new();
        let mut positions: HashMap<&str, usize> = HashMap::new();

        for record in records {
            for name in record.field_names() {
                if !positions.contains_key(name) {
                    positions.insert(name, columns.len());
                    columns.push(name.to_string());
                }
            }
        }

        let rows = records
            .iter()
            .map(|record| {
                let mut row = vec![String::new(); columns.len()];
                for (name, value) in record.iter() {
                    row[positions[name]] = value.to_string();
                }
                row
            })
            .collect();

        Table { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Iterates over one column's cells, top to bottom
    pub fn column_values(&self, name: &str) -> Option<impl Iterator<Item = &str>> {
        let index = self.column_index(name)?;
        Some(self.rows.iter().map(move |row| row[index].as_str()))
    }

    pub fn value(&self, row: usize, column: &str) -> Option<&str> {
        let index = self.column_index(column)?;
        self.rows.get(row).map(|cells| cells[index].as_str())
    }

    /// 保留满足条件的行；剩余行按原顺序紧凑排列
    pub fn retain_rows<F>(&mut self, mut keep: F)
    where
        F: FnMut(&[String]) -> bool,
    {
        self.rows.retain(|row| keep(row));
    }

    /// Appends a column as the last one
    ///
    /// `values` must hold one entry per row.
    pub fn push_column(&mut self, name: impl Into<String>, values: Vec<String>) {
        assert_eq!(
            values.len(),
            self.rows.len(),
            "new column must have one value per row"
        );

        self.columns.push(name.into());
        for (row, value) in self.rows.iter_mut().zip(values) {
            row.push(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(fields: &[(&str, &str)]) -> Record {
        fields.iter().copied().collect()
    }

    #[test]
    fn columns_are_union_in_first_seen_order() {
        let table = Table::from_records(&[
            record(&[("Timestamp", "1"), ("IP", "a"), ("Name", "x")]),
            record(&[("Timestamp", "2"), ("IP", "b"), ("Comments", "hi there"), ("Name", "y")]),
            record(&[("Timestamp", "3"), ("IP", "c"), ("Email", "e@x")]),
        ]);

        assert_eq!(table.columns(), ["Timestamp", "IP", "Name", "Comments", "Email"]);
        assert_eq!(table.len(), 3);
        assert_eq!(table.value(0, "Comments"), Some(""));
        assert_eq!(table.value(1, "Name"), Some("y"));
        assert_eq!(table.value(2, "Email"), Some("e@x"));
        assert_eq!(table.value(3, "Email"), None);
    }

    #[test]
    fn empty_table_has_no_columns() {
        let table = Table::from_records(&[]);
        assert!(table.is_empty());
        assert!(table.columns().is_empty());
        assert!(!table.has_column("Comments"));
    }

    #[test]
    fn push_column_goes_last() {
        let mut table = Table::from_records(&[record(&[("Comments", "a b")])]);
        table.push_column("trans", vec!["A B".to_string()]);

        assert_eq!(table.columns(), ["Comments", "trans"]);
        assert_eq!(table.rows(), [vec!["a b".to_string(), "A B".to_string()]]);
    }

    #[test]
    fn retain_keeps_order() {
        let mut table = Table::from_records(&[
            record(&[("n", "1")]),
            record(&[("n", "2")]),
            record(&[("n", "3")]),
        ]);
        table.retain_rows(|row| row[0] != "2");

        assert_eq!(table.column_values("n").unwrap().collect::<Vec<_>>(), ["1", "3"]);
    }
}
