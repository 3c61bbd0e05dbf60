use chrono::NaiveDate;
use habitline_core::{Habit, HabitCollection, LastQuote, Quote, QuotesDocument, Reason};
use serde_json::json;

#[test]
fn quotes_document_roundtrip_preserves_pointer_and_quotes() {
    let document = QuotesDocument {
        quotes: vec![
            Quote::new("Seneca", "Luck is what happens when preparation meets opportunity."),
            Quote::new("Lao Tzu", "A journey of a thousand miles begins with a single step."),
        ],
        last_quote: LastQuote {
            index: 1,
            date: NaiveDate::from_ymd_opt(2024, 8, 16).unwrap(),
        },
    };

    let encoded = serde_json::to_string(&document).unwrap();
    let decoded: QuotesDocument = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, document);
}

#[test]
fn quotes_document_uses_expected_wire_fields() {
    let value = json!({
        "quotes": [{"name": "Epictetus", "content": "First say to yourself what you would be."}],
        "last_quote": {"index": 0, "date": "2024-08-16"}
    });

    let document: QuotesDocument = serde_json::from_value(value.clone()).unwrap();
    assert_eq!(document.quotes[0].name, "Epictetus");
    assert_eq!(
        document.last_quote.date,
        NaiveDate::from_ymd_opt(2024, 8, 16).unwrap()
    );
    assert_eq!(serde_json::to_value(&document).unwrap(), value);
}

#[test]
fn habit_start_date_is_serialized_as_date() {
    let collection = HabitCollection::with_habit(Habit::new(
        "doomscrolling",
        NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
        vec![Reason::new("sleep")],
    ));

    let value = serde_json::to_value(&collection).unwrap();
    assert_eq!(value["habits"][0]["date"], "2025-01-31");
    assert!(value["habits"][0].get("start_date").is_none());
    assert_eq!(value["habits"][0]["reasons"][0]["description"], "sleep");
}

#[test]
fn negative_quote_index_is_rejected_at_parse_time() {
    let value = json!({
        "quotes": [{"name": "a", "content": "b"}],
        "last_quote": {"index": -1, "date": "2024-08-16"}
    });
    assert!(serde_json::from_value::<QuotesDocument>(value).is_err());
}
