//! Tests for outline parsing.

use folio_core::Outline;
use folio_error::OutlineErrorKind;

fn malformed_position(source: &str) -> usize {
    match Outline::parse(source).unwrap_err().kind {
        OutlineErrorKind::MalformedRecord { position, .. } => position,
        other => panic!("expected MalformedRecord, got {other:?}"),
    }
}

#[test]
fn test_empty_source_yields_empty_outline() {
    let outline = Outline::parse("").unwrap();
    assert!(outline.is_empty());

    let outline = Outline::parse("\n   \n").unwrap();
    assert_eq!(outline.len(), 0);
}

#[test]
fn test_source_order_is_kept_over_numbering() {
    let source = "3,Third,Happens first\n1,First,Happens second\n3,Third again,Duplicate number\n";
    let outline = Outline::parse(source).unwrap();

    let numbers: Vec<u32> = outline.iter().map(|c| *c.number()).collect();
    assert_eq!(numbers, vec![3, 1, 3]);
    assert_eq!(outline.chapters()[1].title(), "First");
    assert_eq!(outline.chapters()[2].summary(), "Duplicate number");
}

#[test]
fn test_two_field_record_is_malformed() {
    let source = "1,The Body,A corpse is found\n2,The Clue\n";
    assert_eq!(malformed_position(source), 2);
}

#[test]
fn test_four_field_record_is_malformed() {
    assert_eq!(malformed_position("1,Title,Summary,Extra"), 1);
}

#[test]
fn test_non_numeric_chapter_number_is_malformed() {
    assert_eq!(malformed_position("1,Ok,Fine\none,Bad,Number"), 2);
}

#[test]
fn test_zero_chapter_number_is_malformed() {
    assert_eq!(malformed_position("0,Prologue,Before it all"), 1);
}

#[test]
fn test_fields_are_trimmed() {
    let outline = Outline::parse("  7 ,  The Title  ,  The summary  ").unwrap();
    let chapter = &outline.chapters()[0];
    assert_eq!(*chapter.number(), 7);
    assert_eq!(chapter.title(), "The Title");
    assert_eq!(chapter.summary(), "The summary");
}

#[test]
fn test_quoted_summary_may_contain_delimiter() {
    let outline =
        Outline::parse(r#"2,The Clue,"A letter, unsigned, is discovered""#).unwrap();
    assert_eq!(
        outline.chapters()[0].summary(),
        "A letter, unsigned, is discovered"
    );
}

#[test]
fn test_crlf_line_endings() {
    let outline = Outline::parse("1,A,First\r\n2,B,Second\r\n").unwrap();
    assert_eq!(outline.len(), 2);
    assert_eq!(outline.chapters()[1].summary(), "Second");
}

#[test]
fn test_leading_byte_order_mark_is_ignored() {
    let source = "\u{feff}1,The Body,A corpse is found\n2,The Clue,A letter\n";
    let outline = Outline::parse(source).unwrap();
    assert_eq!(outline.len(), 2);
    assert_eq!(*outline.chapters()[0].number(), 1);
    assert_eq!(outline.chapters()[0].title(), "The Body");
}
