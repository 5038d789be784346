// 集成测试公共模块
//
// 提供测试夹具和确定性的翻译替身

use std::cell::Cell;

use forum_export::translation::{TranslationError, TranslationResult, Translator};

/// 确定性翻译：给文本加上语言方向前缀
pub struct StubTranslator {
    pub calls: Cell<usize>,
}

impl StubTranslator {
    pub fn new() -> Self {
        Self { calls: Cell::new(0) }
    }
}

impl Translator for StubTranslator {
    fn translate(&self, text: &str, source: &str, target: &str) -> TranslationResult<String> {
        self.calls.set(self.calls.get() + 1);
        Ok(format!("[{source}>{target}] {}", text.to_uppercase()))
    }
}

/// 总是失败的翻译替身
pub struct FailingTranslator;

impl Translator for FailingTranslator {
    fn translate(&self, _: &str, _: &str, _: &str) -> TranslationResult<String> {
        Err(TranslationError::NetworkError("connection refused".to_string()))
    }
}

/// HTML 测试夹具
pub struct HtmlFixture;

impl HtmlFixture {
    /// 一个完整的记录块：标记、IP 行和两列表格
    pub fn entry(timestamp: &str, ip_line: &str, rows: &[(&str, &str)]) -> String {
        let mut html = format!(
            "<p><font face=\"arial\" size=\"2\">{timestamp}</font><br>\n<i>{ip_line}</i></p>\n<table border=\"0\">\n"
        );
        for (key, value) in rows {
            html.push_str(&format!("  <tr><td><b>{key}</b></td><td>{value}</td></tr>\n"));
        }
        html.push_str("</table>\n");
        html
    }

    pub fn document(entries: &[String]) -> String {
        format!(
            "<!DOCTYPE html>\n<html><head><title>Guestbook export</title></head><body>\n{}</body></html>\n",
            entries.concat()
        )
    }

    /// 两条合格评论，外加各种应被筛掉的记录
    pub fn guestbook() -> String {
        Self::document(&[
            Self::entry(
                "Monday, 3 April 2006 10:15:02",
                "Posted from 81.2.69.160",
                &[("Name", "Jean"), ("Email", "jean@example.fr"), ("Comments", "Très bon site, merci beaucoup")],
            ),
            Self::entry(
                "Monday, 3 April 2006 11:40:55",
                "Posted from 10.0.0.7",
                &[("Name", "Ana"), ("Comments", "ok")],
            ),
            Self::entry(
                "Tuesday, 4 April 2006 08:01:13",
                "Posted from 10.0.0.9",
                &[("Name", "Kurt"), ("Comments", "")],
            ),
            Self::entry(
                "Tuesday, 4 April 2006 09:12:40",
                "Posted from 192.168.1.20",
                &[("Name", "María"), ("Homepage", "http://example.es"), ("Comments", "Hola, me gusta mucho")],
            ),
            Self::entry(
                "Wednesday, 5 April 2006 17:30:00",
                "Posted from 172.16.0.3",
                &[("Name", "Pieter")],
            ),
        ])
    }
}
