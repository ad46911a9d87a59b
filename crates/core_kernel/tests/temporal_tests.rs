//! Property tests for timezone-aware date formatting

use chrono::{DateTime, NaiveDate, Utc};
use core_kernel::temporal::format_date_ja;
use core_kernel::Timezone;
use proptest::prelude::*;

proptest! {
    #[test]
    fn formatted_date_matches_local_calendar_date(secs in 0i64..4_102_444_800) {
        let tz = Timezone::default();
        let utc = DateTime::<Utc>::from_timestamp(secs, 0).unwrap();

        let parsed = NaiveDate::parse_from_str(&tz.format_date(utc), "%Y-%m-%d").unwrap();
        prop_assert_eq!(parsed, tz.date_of(utc));
    }

    #[test]
    fn tokyo_is_never_behind_utc(secs in 0i64..4_102_444_800) {
        let tz = Timezone::default();
        let utc = DateTime::<Utc>::from_timestamp(secs, 0).unwrap();

        prop_assert!(tz.date_of(utc) >= utc.date_naive());
    }

    #[test]
    fn japanese_label_carries_year_month_day(days in 0u64..40_000) {
        let date = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap() + chrono::Days::new(days);
        let label = format_date_ja(date);

        let expected_prefix = format!("{}年", date.format("%Y"));
        prop_assert!(label.starts_with(&expected_prefix));
        prop_assert!(label.ends_with(')'));
    }
}
