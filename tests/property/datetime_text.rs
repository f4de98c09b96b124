//! Property tests for form-field date-times and event day coverage.
//!
//! Uses proptest to verify:
//! 1. Any minute-precision date-time survives format → parse.
//! 2. Arbitrary text never panics `parse_field` (returns `Err` gracefully).
//! 3. An event with `start <= end` always touches the day it starts on,
//!    and never touches the day before.

#![allow(clippy::unwrap_used)]

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use proptest::prelude::*;
use taskcal_core::datetime::{format_field, parse_field};
use taskcal_core::event::Event;

/// Strategy for minute-precision date-times between 1970 and 2100.
fn arb_minute() -> impl Strategy<Value = NaiveDateTime> {
    (0i64..(130 * 366 * 24 * 60)).prop_map(|minutes| {
        NaiveDate::from_ymd_opt(1970, 1, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .unwrap()
            + TimeDelta::minutes(minutes)
    })
}

proptest! {
    #[test]
    fn formatted_field_parses_back(value in arb_minute()) {
        let text = format_field(value);
        prop_assert_eq!(parse_field(&text).unwrap(), value);
    }

    #[test]
    fn arbitrary_text_never_panics(text in ".{0,40}") {
        let _ = parse_field(&text);
    }

    #[test]
    fn event_touches_its_start_day(
        start in arb_minute(),
        length in 0i64..(5 * 24 * 60),
    ) {
        let end = start + TimeDelta::minutes(length);
        let event = Event::new("prop", start, end);
        prop_assert!(event.touches_day(start.date()));
        if let Some(before) = start.date().pred_opt() {
            prop_assert!(!event.touches_day(before));
        }
    }
}
