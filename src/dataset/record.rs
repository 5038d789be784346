/// A single extracted entry: field name → value, in insertion order
///
/// Inserting a name that already exists replaces the value in place, so the
/// field keeps the position of its first insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    pub fn new() -> Record {
        Record { fields: Vec::new() }
    }

    /// 插入字段；同名字段覆盖旧值但保留原位置
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();

        match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, existing_value)) => *existing_value = value,
            None => self.fields.push((name, value)),
        }
    }

    /// Merges `other` into `self` with the same override rules as `insert`
    pub fn extend(&mut self, other: Record) {
        for (name, value) in other.fields {
            self.insert(name, value);
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (name, value) in iter {
            record.insert(name, value);
        }
        record
    }
}
