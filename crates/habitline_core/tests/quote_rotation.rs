use chrono::NaiveDate;
use habitline_core::{
    rotate_quote, CoreError, JsonQuoteRepository, LastQuote, Quote, QuoteService,
    QuoteStateError, QuotesDocument,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn quotes_doc(count: usize, index: usize, last: NaiveDate) -> QuotesDocument {
    QuotesDocument {
        quotes: (0..count)
            .map(|i| Quote::new(format!("Author {i}"), format!("Quote number {i}")))
            .collect(),
        last_quote: LastQuote { index, date: last },
    }
}

fn write_doc(path: &Path, doc: &QuotesDocument) {
    std::fs::write(path, serde_json::to_string_pretty(doc).unwrap()).unwrap();
}

fn service(path: &Path) -> QuoteService<JsonQuoteRepository> {
    QuoteService::new(JsonQuoteRepository::new(path))
}

#[test]
fn same_day_replays_last_quote_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("quotes.json");
    let today = date(2024, 8, 20);
    write_doc(&path, &quotes_doc(3, 2, today));
    let before = std::fs::read(&path).unwrap();

    let mut rng = StdRng::seed_from_u64(1);
    let (first, _) = service(&path).reconcile_with_rng(today, &mut rng).unwrap();
    let (second, doc) = service(&path).reconcile_with_rng(today, &mut rng).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.content, "Quote number 2");
    assert_eq!(doc.last_quote, LastQuote { index: 2, date: today });
    assert_eq!(std::fs::read(&path).unwrap(), before);
}

#[test]
fn new_day_rotates_to_different_quote_and_persists_pointer() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("quotes.json");
    let today = date(2024, 8, 20);
    write_doc(&path, &quotes_doc(4, 0, date(2024, 8, 19)));

    let mut rng = StdRng::seed_from_u64(42);
    let (quote, doc) = service(&path).reconcile_with_rng(today, &mut rng).unwrap();

    assert_ne!(doc.last_quote.index, 0);
    assert_eq!(doc.last_quote.date, today);
    assert_eq!(quote, doc.quotes[doc.last_quote.index]);

    let on_disk: QuotesDocument =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(on_disk, doc);
}

#[test]
fn rotation_then_same_day_call_is_stable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("quotes.json");
    let today = date(2024, 8, 20);
    write_doc(&path, &quotes_doc(5, 3, date(2024, 8, 1)));

    let mut rng = StdRng::seed_from_u64(9);
    let (rotated, _) = service(&path).reconcile_with_rng(today, &mut rng).unwrap();
    let after_rotation = std::fs::read(&path).unwrap();
    let (replayed, _) = service(&path).reconcile_with_rng(today, &mut rng).unwrap();

    assert_eq!(rotated, replayed);
    assert_eq!(std::fs::read(&path).unwrap(), after_rotation);
}

#[test]
fn many_days_apart_rotates_exactly_once() {
    let doc = quotes_doc(3, 1, date(2024, 1, 1));
    let mut rng = StdRng::seed_from_u64(3);

    let rotation = rotate_quote(&doc, date(2024, 6, 1), &mut rng).unwrap();
    assert!(rotation.rotated);
    assert_ne!(rotation.document.last_quote.index, 1);
    assert_eq!(rotation.document.quotes, doc.quotes);
}

#[test]
fn earlier_date_also_rotates() {
    let doc = quotes_doc(2, 0, date(2024, 8, 20));
    let mut rng = StdRng::seed_from_u64(5);

    let rotation = rotate_quote(&doc, date(2024, 8, 19), &mut rng).unwrap();
    assert!(rotation.rotated);
    assert_eq!(rotation.document.last_quote.index, 1);
}

#[test]
fn two_quotes_alternate_across_days() {
    let mut doc = quotes_doc(2, 0, date(2024, 8, 1));
    let mut rng = StdRng::seed_from_u64(11);

    for day in 2..10 {
        let previous = doc.last_quote.index;
        let rotation = rotate_quote(&doc, date(2024, 8, day), &mut rng).unwrap();
        assert_eq!(rotation.document.last_quote.index, 1 - previous);
        doc = rotation.document;
    }
}

#[test]
fn single_quote_is_never_rotated_or_rewritten() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("quotes.json");
    let last = date(2024, 8, 1);
    write_doc(&path, &quotes_doc(1, 0, last));
    let before = std::fs::read(&path).unwrap();

    let mut rng = StdRng::seed_from_u64(0);
    let (quote, doc) = service(&path)
        .reconcile_with_rng(date(2024, 8, 20), &mut rng)
        .unwrap();

    assert_eq!(quote.content, "Quote number 0");
    assert_eq!(doc.last_quote, LastQuote { index: 0, date: last });
    assert_eq!(std::fs::read(&path).unwrap(), before);
}

#[test]
fn out_of_range_index_is_malformed_state() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("quotes.json");
    write_doc(&path, &quotes_doc(2, 7, date(2024, 8, 1)));
    let before = std::fs::read(&path).unwrap();

    let err = service(&path).reconcile(date(2024, 8, 20)).unwrap_err();
    assert!(matches!(err, CoreError::MalformedState(_)));
    assert_eq!(std::fs::read(&path).unwrap(), before);
}

#[test]
fn out_of_range_index_is_rejected_by_pure_rotation() {
    let doc = quotes_doc(2, 2, date(2024, 8, 1));
    let err = rotate_quote(&doc, date(2024, 8, 2), &mut StdRng::seed_from_u64(0)).unwrap_err();
    assert_eq!(err, QuoteStateError::IndexOutOfRange { index: 2, len: 2 });
}

#[test]
fn empty_quote_list_is_malformed_state() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("quotes.json");
    write_doc(&path, &quotes_doc(0, 0, date(2024, 8, 1)));

    let err = service(&path).reconcile(date(2024, 8, 20)).unwrap_err();
    assert!(matches!(err, CoreError::MalformedState(_)));
}

#[test]
fn missing_quotes_document_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("quotes.json");

    let err = service(&path).reconcile(date(2024, 8, 20)).unwrap_err();
    assert!(matches!(err, CoreError::MissingQuotesDocument { path: ref p } if p == &path));
    assert!(!path.exists());
}

#[test]
fn unparsable_quotes_document_is_malformed_state() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("quotes.json");
    std::fs::write(&path, r#"{"quotes": [], "last_quote": {"index": "zero"}}"#).unwrap();

    let err = service(&path).reconcile(date(2024, 8, 20)).unwrap_err();
    assert!(matches!(err, CoreError::MalformedState(_)));
}

#[test]
fn preflight_reports_missing_and_out_of_range_documents_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("quotes.json");

    let err = service(&path).preflight().unwrap_err();
    assert!(matches!(err, CoreError::MissingQuotesDocument { .. }));
    assert!(!path.exists());

    write_doc(&path, &quotes_doc(2, 5, date(2024, 8, 1)));
    let before = std::fs::read(&path).unwrap();
    let err = service(&path).preflight().unwrap_err();
    assert!(matches!(err, CoreError::MalformedState(_)));
    assert_eq!(std::fs::read(&path).unwrap(), before);

    write_doc(&path, &quotes_doc(2, 1, date(2024, 8, 1)));
    service(&path).preflight().unwrap();
}
