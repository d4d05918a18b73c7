//! Tests for refresh countdowns

use chrono::TimeDelta;
use test_case::test_case;

use crate::common::{at_minutes, stream};
use streamorder::core::models::{Stream, StreamId, UpdateFrequency};
use streamorder::core::services::{
    Countdown, CountdownBoard, NextUpdate, OVERDUE_TEXT, UNRESOLVED_TEXT, countdown_text,
    format_remaining, next_update_for, next_update_instant,
};

#[test]
fn daily_stream_overdue_after_25_hours() {
    let next = next_update_instant(Some(at_minutes(0)), Some(UpdateFrequency::Daily));
    assert_eq!(countdown_text(at_minutes(25 * 60), next), OVERDUE_TEXT);
}

#[test]
fn hourly_stream_half_way() {
    let next = next_update_instant(Some(at_minutes(0)), Some(UpdateFrequency::Hourly));
    assert_eq!(countdown_text(at_minutes(30), next), "30m 0s");
}

#[test]
fn weekly_interval() {
    let next = next_update_instant(Some(at_minutes(0)), Some(UpdateFrequency::Weekly));
    assert_eq!(next, NextUpdate::At(at_minutes(7 * 24 * 60)));
}

#[test]
fn missing_pieces_are_unresolved() {
    let no_time = Stream::new(1, "a").with_frequency(UpdateFrequency::Daily);
    let no_frequency = Stream::new(2, "b").with_last_updated(at_minutes(0));
    assert_eq!(next_update_for(&no_time), NextUpdate::Unresolved);
    assert_eq!(next_update_for(&no_frequency), NextUpdate::Unresolved);
    assert_eq!(countdown_text(at_minutes(0), NextUpdate::Unresolved), UNRESOLVED_TEXT);
}

#[test]
fn unrecognized_frequency_from_backend_is_unresolved() {
    let stream: Stream = serde_json::from_str(
        r#"{"id": 3, "query": "q", "update_frequency": "fortnightly", "last_updated": "2024-05-01T00:00:00"}"#,
    )
    .unwrap();
    assert_eq!(next_update_for(&stream), NextUpdate::Unresolved);
}

#[test_case(59, "59s" ; "seconds only")]
#[test_case(60, "1m 0s" ; "one minute")]
#[test_case(3_599, "59m 59s" ; "just under an hour")]
#[test_case(3_600, "1h 0m 0s" ; "one hour")]
#[test_case(3_661, "1h 1m 1s" ; "all units")]
#[test_case(90_000, "25h 0m 0s" ; "hours not folded into days")]
fn test_format_remaining(seconds: i64, expected: &str) {
    assert_eq!(format_remaining(TimeDelta::seconds(seconds)), expected);
}

#[test]
fn recomputation_has_no_side_effects() {
    let mut board = CountdownBoard::new();
    board.sync(&[stream(1, Some(0))]);
    let first = board.tick(at_minutes(10));
    let second = board.tick(at_minutes(10));
    assert_eq!(first, second);
    assert_eq!(board.countdown_for(StreamId(1), at_minutes(10)), Some(Countdown::Remaining(TimeDelta::minutes(1430))));
}

#[test]
fn board_stops_tracking_hidden_streams() {
    let mut board = CountdownBoard::new();
    board.sync(&[stream(1, Some(0)), stream(2, Some(0)), stream(3, None)]);
    assert_eq!(board.len(), 3);

    board.sync(&[stream(3, None)]);
    assert_eq!(board.len(), 1);
    assert!(!board.is_tracked(StreamId(1)));
    assert_eq!(board.countdown_for(StreamId(1), at_minutes(5)), None);
    assert_eq!(board.tick(at_minutes(5))[&StreamId(3)], Countdown::Unresolved);

    assert!(board.untrack(StreamId(3)));
    assert!(board.is_empty());
}
