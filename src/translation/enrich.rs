//! 译文列
//!
//! 按行顺序逐条翻译 `Comments`，全部成功后才把 `trans` 列追加到表格末尾；
//! 任何一行失败都会中止，表格保持不变。表格必须已有 `Comments` 列。

use tracing::{debug, info};

use super::error::{TranslationError, TranslationResult};
use super::service::Translator;
use crate::dataset::{Table, COMMENTS_COLUMN};

pub const TRANSLATION_COLUMN: &str = "trans";

pub fn translate_comments<T: Translator + ?Sized>(
    table: &mut Table,
    translator: &T,
    source: &str,
    target: &str,
) -> TranslationResult<()> {
    let comments: Vec<String> = match table.column_values(COMMENTS_COLUMN) {
        Some(values) => values.map(str::to_string).collect(),
        None => {
            return Err(TranslationError::InvalidInput(format!(
                "table has no {COMMENTS_COLUMN} column"
            )))
        }
    };

    let mut translations = Vec::with_capacity(comments.len());
    for (row, comment) in comments.iter().enumerate() {
        debug!(row, chars = comment.chars().count(), "translating comment");
        translations.push(translator.translate(comment, source, target)?);
    }

    table.push_column(TRANSLATION_COLUMN, translations);

    info!(rows = table.len(), source, target, "translated comments");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::dataset::Record;

    struct Recording {
        calls: RefCell<Vec<String>>,
        fail_on: Option<&'static str>,
    }

    impl Translator for Recording {
        fn translate(&self, text: &str, source: &str, target: &str) -> TranslationResult<String> {
            self.calls.borrow_mut().push(format!("{source}->{target}:{text}"));
            if Some(text) == self.fail_on {
                return Err(TranslationError::RateLimitExceeded);
            }
            Ok(text.to_uppercase())
        }
    }

    fn table() -> Table {
        let records: Vec<Record> = ["hola amigo", "hola amigo", "buen dia"]
            .iter()
            .map(|comment| [("Comments", *comment)].into_iter().collect())
            .collect();
        Table::from_records(&records)
    }

    #[test]
    fn translates_every_row_in_order_without_dedup() {
        let translator = Recording { calls: RefCell::new(Vec::new()), fail_on: None };
        let mut table = table();

        translate_comments(&mut table, &translator, "auto", "en").unwrap();

        assert_eq!(
            *translator.calls.borrow(),
            ["auto->en:hola amigo", "auto->en:hola amigo", "auto->en:buen dia"]
        );
        assert_eq!(table.columns(), ["Comments", TRANSLATION_COLUMN]);
        assert_eq!(table.value(2, TRANSLATION_COLUMN), Some("BUEN DIA"));
    }

    #[test]
    fn failure_leaves_table_untouched() {
        let translator = Recording { calls: RefCell::new(Vec::new()), fail_on: Some("buen dia") };
        let mut table = table();
        let before = table.clone();

        let result = translate_comments(&mut table, &translator, "auto", "en");

        assert_eq!(result, Err(TranslationError::RateLimitExceeded));
        assert_eq!(table, before);
    }

    #[test]
    fn table_without_comments_is_rejected() {
        let translator = Recording { calls: RefCell::new(Vec::new()), fail_on: None };
        let mut table = Table::from_records(&[[("Name", "Ann")].into_iter().collect()]);
        let before = table.clone();

        let result = translate_comments(&mut table, &translator, "auto", "en");

        assert!(matches!(result, Err(TranslationError::InvalidInput(_))));
        assert!(translator.calls.borrow().is_empty());
        assert_eq!(table, before);
    }
}
