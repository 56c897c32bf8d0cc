#![cfg(feature = "merge")]
//! Unit tests for merging record sequences on a key field.

use rstest::rstest;
use seqkit::SequenceError;
use seqkit::merge::merge_on;
use seqkit::record;
use seqkit::record::{Record, Value, ValueKind};

fn people() -> Vec<Record> {
    vec![
        record! { "id" => 1, "name" => "Rak" },
        record! { "id" => 2, "name" => "Raj" },
    ]
}

fn cities() -> Vec<Record> {
    vec![
        record! { "id" => 1, "city" => "Delhi" },
        record! { "id" => 2, "city" => "Mumbai" },
    ]
}

#[rstest]
fn test_merge_on_id() {
    let merged = merge_on(&people(), &cities(), "id").unwrap();
    assert_eq!(
        merged,
        vec![
            record! { "id" => 1, "name" => "Rak", "city" => "Delhi" },
            record! { "id" => 2, "name" => "Raj", "city" => "Mumbai" },
        ]
    );
    assert_eq!(merged[0].names().collect::<Vec<_>>(), ["id", "name", "city"]);
}

#[rstest]
fn test_merge_follows_left_order() {
    let mut reversed = cities();
    reversed.reverse();
    let merged = merge_on(&people(), &reversed, "id").unwrap();
    assert_eq!(merged[0].get("name"), Some(&Value::from("Rak")));
    assert_eq!(merged[0].get("city"), Some(&Value::from("Delhi")));
}

#[rstest]
fn test_merge_first_right_match_wins() {
    let right = [
        record! { "id" => 1, "city" => "Delhi" },
        record! { "id" => 1, "city" => "Pune" },
    ];
    let merged = merge_on(&people(), &right, "id").unwrap();
    assert_eq!(merged, vec![record! { "id" => 1, "name" => "Rak", "city" => "Delhi" }]);
}

#[rstest]
fn test_merge_right_wins_on_collision() {
    let right = [record! { "id" => 2, "name" => "Rajesh" }];
    let merged = merge_on(&people(), &right, "id").unwrap();
    assert_eq!(merged, vec![record! { "id" => 2, "name" => "Rajesh" }]);
}

#[rstest]
#[case(0.0, -0.0)]
#[case(-0.0, 0.0)]
fn test_merge_keeps_left_key_value(#[case] left_id: f64, #[case] right_id: f64) {
    let left = [record! { "id" => left_id, "name" => "Rak" }];
    let right = [record! { "id" => right_id, "city" => "Delhi" }];

    let merged = merge_on(&left, &right, "id").unwrap();

    assert_eq!(merged.len(), 1);
    let id = merged[0].get("id").and_then(Value::as_number).unwrap();
    assert_eq!(id.is_sign_positive(), left_id.is_sign_positive());
    assert_eq!(merged[0].names().collect::<Vec<_>>(), ["id", "name", "city"]);
    assert_eq!(merged[0].get("city"), Some(&Value::from("Delhi")));
}

#[rstest]
#[case(vec![], vec![record! { "id" => 1 }])]
#[case(vec![record! { "id" => 1 }], vec![])]
#[case(vec![record! { "id" => 1 }], vec![record! { "id" => "1" }])]
fn test_merge_without_matches_is_empty(#[case] left: Vec<Record>, #[case] right: Vec<Record>) {
    assert_eq!(merge_on(&left, &right, "id"), Ok(Vec::new()));
}

#[rstest]
fn test_merge_never_longer_than_left() {
    let right: Vec<Record> = (0..10).map(|id| record! { "id" => id }).collect();
    let left = [record! { "id" => 3 }, record! { "id" => 42 }];
    let merged = merge_on(&left, &right, "id").unwrap();
    assert!(merged.len() <= left.len());
    assert_eq!(merged, vec![record! { "id" => 3 }]);
}

#[rstest]
fn test_merge_missing_key_in_scanned_right_record() {
    let right = [record! { "city" => "Nowhere" }, record! { "id" => 1 }];
    assert_eq!(
        merge_on(&people(), &right, "id"),
        Err(SequenceError::missing_field("id"))
    );
}

#[rstest]
fn test_merge_unscanned_right_records_are_not_checked() {
    // The match at index 0 stops the scan before the malformed record.
    let right = [
        record! { "id" => 1, "city" => "Delhi" },
        record! { "id" => 2, "city" => "Mumbai" },
        record! { "city" => "Nowhere" },
    ];
    assert!(merge_on(&people(), &right, "id").is_ok());
}

#[rstest]
fn test_merge_non_scalar_key() {
    let left = [record! { "id" => vec![1] }];
    assert_eq!(
        merge_on(&left, &cities(), "id"),
        Err(SequenceError::type_mismatch("id", "scalar key", ValueKind::Sequence))
    );
}
