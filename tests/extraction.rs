//! 记录提取集成测试

use forum_export::parsers::html::{extract_records, html_to_dom, MISSING_IP};
use forum_export::{ExportError, Record};

#[allow(dead_code)]
mod common {
    include!("common/mod.rs");
}

use common::HtmlFixture;

fn extract(html: &str) -> Vec<Record> {
    extract_records(&html_to_dom(html).document).unwrap()
}

#[test]
fn no_markers_no_records() {
    let html = HtmlFixture::document(&["<p>Nothing to see</p><table><tr><td>a</td><td>b</td></tr></table>".to_string()]);
    assert!(extract(&html).is_empty());
}

#[test]
fn marker_without_following_table_is_dropped() {
    let html = HtmlFixture::document(&[
        "<font face=\"arial\">Sunday, 2 April 2006 23:59:59</font><i>Posted from 1.1.1.1</i>".to_string(),
    ]);
    assert_eq!(extract(&html).len(), 0);
}

#[test]
fn table_before_marker_is_not_used() {
    let html = HtmlFixture::document(&[
        "<table><tr><td>Comments</td><td>too early</td></tr></table>".to_string(),
        "<font face=\"arial\">late marker</font>".to_string(),
    ]);
    assert!(extract(&html).is_empty());
}

#[test]
fn comments_row_becomes_field() {
    let html = HtmlFixture::document(&[HtmlFixture::entry(
        "Monday, 3 April 2006 10:15:02",
        "Posted from 81.2.69.160",
        &[("Name", "Jean"), ("Comments", "hello world")],
    )]);

    let records = extract(&html);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].get("Comments"), Some("hello world"));
    assert_eq!(records[0].get("Timestamp"), Some("Monday, 3 April 2006 10:15:02"));
    assert_eq!(records[0].get("IP"), Some("81.2.69.160"));
}

#[test]
fn guestbook_fixture() {
    let records = extract(&HtmlFixture::guestbook());

    assert_eq!(records.len(), 5);
    assert_eq!(records[2].get("IP"), Some("10.0.0.9"));
    assert_eq!(records[3].get("Homepage"), Some("http://example.es"));
    assert_eq!(records[4].get("Comments"), None);
    assert_eq!(
        records[0].field_names().collect::<Vec<_>>(),
        ["Timestamp", "IP", "Name", "Email", "Comments"]
    );
}

#[test]
fn record_count_never_exceeds_marker_count() {
    let mut entries = vec![HtmlFixture::entry("t1", "from 1.1.1.1", &[("Comments", "a b")])];
    entries.push("<font face=\"helvetica\">trailing marker, no table</font>".to_string());
    let records = extract(&HtmlFixture::document(&entries));

    assert_eq!(records.len(), 1);
}

#[test]
fn unclosed_markup_is_tolerated() {
    let html = "<body><font face=arial>t<i>from 9.8.7.6<table><tr><td>Comments<td>still parsed fine";
    let records = extract(html);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].get("Comments"), Some("still parsed fine"));
}

#[test]
fn entry_without_italic_gets_sentinel_ip() {
    let html = HtmlFixture::document(&[
        "<p><font face=\"arial\">Friday, 7 April 2006 12:00:00</font></p>\
         <table><tr><td>Comments</td><td>no address here</td></tr></table>"
            .to_string(),
    ]);

    let records = extract(&html);

    assert_eq!(records[0].get("IP"), Some(MISSING_IP));
}

#[test]
fn empty_ip_line_aborts_extraction() {
    let html = HtmlFixture::document(&[
        HtmlFixture::entry("t1", "Posted from 1.1.1.1", &[("Comments", "a b")]),
        HtmlFixture::entry("Saturday, 8 April 2006 08:00:00", "  ", &[("Comments", "c d")]),
    ]);

    match extract_records(&html_to_dom(&html).document) {
        Err(error @ ExportError::BlankAddressLine(_)) => {
            assert!(!error.is_input_error());
            assert!(error.to_string().contains("Saturday, 8 April 2006 08:00:00"));
        }
        other => panic!("expected a blank address line error, got {other:?}"),
    }
}
