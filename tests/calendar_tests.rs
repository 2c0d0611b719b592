use chrono::{NaiveDate, NaiveDateTime};
use preplan_tool::calendar::{
    Daytime, DaytimeError, Week, Weekday, Weeks, add_days, date_only, weekday_of,
};

fn d(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn weekday_anchored_at_saturday() {
    // 2025-01-04 is a Saturday.
    assert_eq!(weekday_of(d(2025, 1, 4)), Weekday::Saturday);
    assert_eq!(Weekday::Saturday.index(), 0);
    assert_eq!(weekday_of(d(2025, 1, 10)), Weekday::Friday);
    assert_eq!(Weekday::Friday.index(), 6);
}

#[test]
fn weekday_index_round_trip() {
    for weekday in Weekday::ALL {
        assert_eq!(Weekday::from_index(weekday.index()), Some(weekday));
    }
    assert_eq!(Weekday::from_index(7), None);
}

#[test]
fn date_only_is_idempotent() {
    let datetime: NaiveDateTime = d(2025, 3, 14).and_hms_opt(13, 45, 12).unwrap();
    let stripped = date_only(datetime);
    assert_eq!(stripped, d(2025, 3, 14));
    assert_eq!(date_only(stripped.and_hms_opt(0, 0, 0).unwrap()), stripped);
}

#[test]
fn add_days_does_not_mutate_input() {
    let date = d(2025, 1, 4);
    assert_eq!(add_days(date, 3), d(2025, 1, 7));
    assert_eq!(add_days(date, -4), d(2024, 12, 31));
    assert_eq!(date, d(2025, 1, 4));
}

#[test]
fn daytime_parses_clock_and_minutes() {
    let from_clock: Daytime = "10:30".parse().unwrap();
    assert_eq!(from_clock.minutes(), 630);
    let from_minutes: Daytime = "630".parse().unwrap();
    assert_eq!(from_clock, from_minutes);
    assert_eq!(from_clock.to_string(), "10:30");
}

#[test]
fn daytime_rejects_out_of_range_and_malformed() {
    assert_eq!(Daytime::new(1440), Err(DaytimeError::OutOfRange(1440)));
    assert_eq!(Daytime::new(1439).unwrap().to_string(), "23:59");
    assert!(matches!(
        "24:00".parse::<Daytime>(),
        Err(DaytimeError::OutOfRange(1440))
    ));
    assert!(matches!(
        "10:75".parse::<Daytime>(),
        Err(DaytimeError::InvalidFormat(_))
    ));
    assert!(matches!(
        "morning".parse::<Daytime>(),
        Err(DaytimeError::InvalidFormat(_))
    ));
}

#[test]
fn daytime_compares_like_minutes() {
    let early = Daytime::new(600).unwrap();
    let late = Daytime::new(650).unwrap();
    assert!(early < late);
    assert_eq!(late.minutes() - early.minutes(), 50);
}

#[test]
fn week_containing_aligns_to_saturday() {
    // 2025-01-08 is a Wednesday; its week starts Saturday 2025-01-04.
    let week = Week::containing(d(2025, 1, 8));
    assert_eq!(week.start_date, d(2025, 1, 4));
    assert_eq!(week.end_date, d(2025, 1, 10));
    assert!(week.contains(d(2025, 1, 4)));
    assert!(week.contains(d(2025, 1, 10)));
    assert!(!week.contains(d(2025, 1, 11)));
}

#[test]
fn weeks_between_covers_interval_gaplessly() {
    let weeks = Weeks::between(d(2025, 1, 6), d(2025, 1, 20)).unwrap();
    assert_eq!(weeks.len(), 3);
    assert_eq!(weeks.as_slice()[0].start_date, d(2025, 1, 4));
    assert_eq!(weeks.as_slice()[2].end_date, d(2025, 1, 24));
    for pair in weeks.as_slice().windows(2) {
        assert_eq!(add_days(pair[0].end_date, 1), pair[1].start_date);
    }
}

#[test]
fn weeks_between_rejects_reversed_range() {
    assert!(Weeks::between(d(2025, 1, 20), d(2025, 1, 6)).is_err());
}

#[test]
fn weeks_between_single_day_yields_one_week() {
    let weeks = Weeks::between(d(2025, 1, 8), d(2025, 1, 8)).unwrap();
    assert_eq!(weeks.len(), 1);
    assert!(weeks.as_slice()[0].contains(d(2025, 1, 8)));
}
