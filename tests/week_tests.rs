mod common;
use chrono::{Datelike, NaiveDate, Weekday};
use common::{setup_store, write_sample_store};
use sugarlog::core::week::{WeekView, week_start};
use sugarlog::models::Period;
use sugarlog::store::RecordStore;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn test_week_start_is_previous_or_same_sunday() {
    // 2025-01-08 is a Wednesday
    assert_eq!(week_start(d("2025-01-08")), Some(d("2025-01-05")));
    // Sunday anchors start their own week
    assert_eq!(week_start(d("2025-01-05")), Some(d("2025-01-05")));
    // Saturday belongs to the week started six days before
    assert_eq!(week_start(d("2025-01-11")), Some(d("2025-01-05")));
    // across a year boundary
    assert_eq!(week_start(d("2025-01-01")), Some(d("2024-12-29")));
}

#[test]
fn test_wednesday_anchor_gives_sunday_to_saturday() {
    let view = WeekView::new(d("2025-01-08"), Period::Morning).unwrap();
    let dates = view.dates();

    assert_eq!(dates.len(), 7);
    assert_eq!(dates[0], d("2025-01-05"));
    assert_eq!(dates[0].weekday(), Weekday::Sun);
    assert_eq!(dates[6], d("2025-01-11"));
    assert_eq!(dates[6].weekday(), Weekday::Sat);
    assert!(dates.windows(2).all(|w| w[1] == w[0].succ_opt().unwrap()));
}

#[test]
fn test_rows_fill_missing_with_none() {
    let path = setup_store("week_rows");
    write_sample_store(&path);
    let store = RecordStore::new(&path).load().unwrap().into_store();

    let rows = WeekView::new(d("2025-01-08"), Period::Morning)
        .unwrap()
        .rows(&store);
    assert_eq!(rows.len(), 7);

    // Morning: Glycemia, Insulin, Glycemia After
    assert_eq!(rows[0].date, d("2025-01-05"));
    assert_eq!(rows[0].values, vec![None, None, None]);
    assert_eq!(rows[1].date, d("2025-01-06"));
    assert_eq!(rows[1].values, vec![Some(120), Some(10), None]);
    assert_eq!(rows[5].values, vec![Some(110), None, None]);

    let lunch = WeekView::new(d("2025-01-08"), Period::Morning)
        .unwrap()
        .with_period(Period::Lunch)
        .rows(&store);
    assert_eq!(lunch[3].date, d("2025-01-08"));
    assert_eq!(lunch[3].values, vec![Some(95), Some(8), None]);
}

#[test]
fn test_navigation_moves_by_seven_days() {
    let view = WeekView::new(d("2025-01-08"), Period::Dinner).unwrap();

    let prev = view.previous().unwrap();
    assert_eq!(prev.start(), d("2024-12-29"));
    assert_eq!(prev.period(), Period::Dinner);

    let next = view.next().unwrap();
    assert_eq!(next.start(), d("2025-01-12"));
    assert_eq!(next.end(), d("2025-01-18"));

    assert_eq!(view.shift(-2), view.previous().and_then(WeekView::previous));
    assert_eq!(view.previous().and_then(WeekView::next), Some(view));
    assert_eq!(view.shift(0), Some(view));
}

#[test]
fn test_switching_period_keeps_week() {
    let view = WeekView::new(d("2025-01-08"), Period::Morning)
        .unwrap()
        .with_period(Period::Bedtime);
    assert_eq!(view.start(), d("2025-01-05"));

    let names: Vec<&str> = view.fields().iter().map(|f| f.name).collect();
    assert_eq!(names, vec!["Glycemia At Night", "Night Insulin"]);
}

#[test]
fn test_label() {
    let view = WeekView::new(d("2025-01-08"), Period::Morning).unwrap();
    assert_eq!(view.label(), "Week: 2025-01-05 → 2025-01-11");
}

#[test]
fn test_shift_past_calendar_bounds_is_none() {
    let view = WeekView::new(d("2025-01-08"), Period::Morning).unwrap();

    assert_eq!(view.shift(-4_000_000_000), None);
    assert_eq!(view.shift(4_000_000_000), None);
    assert_eq!(view.shift(i64::MIN), None);
    assert_eq!(view.shift(i64::MAX), None);
}

#[test]
fn test_weeks_at_calendar_edges() {
    // the week holding chrono's last day only fits when that day is a Saturday
    let last = WeekView::new(NaiveDate::MAX, Period::Morning);
    assert_eq!(last.is_some(), NaiveDate::MAX.weekday() == Weekday::Sat);
    // and the first one only when that day is a Sunday
    let first = WeekView::new(NaiveDate::MIN, Period::Morning);
    assert_eq!(first.is_some(), NaiveDate::MIN.weekday() == Weekday::Sun);
}
