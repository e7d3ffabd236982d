//! Extraction and formatting through the public API with real HTML

use tldv_export::application::extract;
use tldv_export::domain::transcript::{format, OutputFormat, TranscriptRecord};
use tldv_export::infrastructure::HtmlDocument;

fn extract_html(markup: &str) -> Option<Vec<TranscriptRecord>> {
    extract(&HtmlDocument::parse(markup))
}

fn container(paragraphs: &str) -> String {
    format!(
        "<html><body><div id=\"transcript-container\">{}</div></body></html>",
        paragraphs
    )
}

#[test]
fn page_without_container_is_not_found() {
    let html = "<html><body><p><span data-speaker=\"true\">Alice</span>\
                <span data-speaker=\"false\">Hi</span></p></body></html>";
    assert!(extract_html(html).is_none());
}

#[test]
fn single_paragraph_with_timestamp() {
    let html = container(
        "<p><span data-speaker=\"true\"><a href=\"#\">05:05</a> Speaker Name</span>\
         <span data-speaker=\"false\">Hello</span>\
         <span data-speaker=\"false\">World</span></p>",
    );

    assert_eq!(
        extract_html(&html).unwrap(),
        vec![TranscriptRecord::new("05:05", "Speaker Name", "Hello World")]
    );
}

#[test]
fn speaker_separators_are_stripped() {
    let html = container(
        "<p><span data-speaker=\"true\"><a href=\"#\">02:00</a> : Bob :</span>\
         <span data-speaker=\"false\">Morning.</span></p>",
    );

    let records = extract_html(&html).unwrap();
    assert_eq!(records[0].timestamp(), "02:00");
    assert_eq!(records[0].speaker(), "Bob");
}

#[test]
fn two_paragraphs_as_plain_text() {
    let html = container(
        "<p><span data-speaker=\"true\"><a>10:00</a> Alice</span>\
         <span data-speaker=\"false\">Hi there.</span></p>\
         <p><span data-speaker=\"true\"><a>10:01</a> Bob</span>\
         <span data-speaker=\"false\">Hello Alice.</span></p>",
    );

    let records = extract_html(&html).unwrap();
    assert_eq!(
        format(&records, OutputFormat::Plain),
        "10:00 Alice :: Hi there.\n10:01 Bob :: Hello Alice."
    );
}

#[test]
fn two_records_as_csv() {
    let records = vec![
        TranscriptRecord::new("10:00", "Alice", "Hi there."),
        TranscriptRecord::new("10:01", "Bob", "Hello Alice."),
    ];

    assert_eq!(
        format(&records, OutputFormat::Csv),
        "Timestamp,Speaker,Transcript\n\"10:00\",\"Alice\",\"Hi there.\"\n\"10:01\",\"Bob\",\"Hello Alice.\""
    );
}

#[test]
fn marker_without_fragments_yields_nothing() {
    let html = container("<p><span data-speaker=\"true\"><a>03:00</a> Alice</span></p>");
    assert_eq!(extract_html(&html), Some(Vec::new()));
}

#[test]
fn saved_meeting_page_as_markdown() {
    let html = include_str!("fixtures/meeting.html");
    let records = extract_html(html).unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(
        format(&records, OutputFormat::Markdown),
        "**00:10** *Alice* :: Welcome everyone. Let's start.\n\n\
         **00:42** *Bob \"The Builder\"* :: Thanks, Alice.\n\n\
         *Carol* :: No timestamp here."
    );
}

#[test]
fn class_names_do_not_matter() {
    let html = container(
        "<p class=\"x1\"><b class=\"speaker\" data-speaker=\"true\">Dana</b>\
         <span class=\"text\" data-speaker=\"false\">Styled.</span></p>",
    );

    assert_eq!(
        extract_html(&html).unwrap(),
        vec![TranscriptRecord::new("", "Dana", "Styled.")]
    );
}
