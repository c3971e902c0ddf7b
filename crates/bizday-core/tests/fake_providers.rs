//! Engine algorithms over injected collaborators.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use bizday_core::prelude::*;

fn date(y: i32, m: u32, d: u32) -> CalendarDate {
    CalendarDate::from_ymd(y, m, d).unwrap()
}

/// Accepts a fixed list of uppercase codes.
struct OnlyCodes(&'static [&'static str]);

impl CountryValidator for OnlyCodes {
    fn is_valid(&self, code: &str) -> bool {
        self.0.contains(&code)
    }
}

struct DaySet {
    days: HashSet<CalendarDate>,
}

impl HolidayCalendar for DaySet {
    fn name(&self) -> &str {
        "Day set"
    }

    fn is_holiday(&self, date: CalendarDate) -> bool {
        self.days.contains(&date)
    }
}

/// One calendar for every country; counts how often it is requested.
struct FakeProvider {
    calendar: Arc<DaySet>,
    requests: AtomicUsize,
}

impl FakeProvider {
    fn new(days: &[CalendarDate]) -> Self {
        Self {
            calendar: Arc::new(DaySet {
                days: days.iter().copied().collect(),
            }),
            requests: AtomicUsize::new(0),
        }
    }

    fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

impl HolidayProvider for FakeProvider {
    fn calendar(&self, _country: &CountryCode) -> Arc<dyn HolidayCalendar> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        self.calendar.clone()
    }
}

#[test]
fn custom_validator_decides_validity() {
    let engine = BusinessDateEngine::new(OnlyCodes(&["XA"]), FakeProvider::new(&[]));
    let wednesday = date(2019, 1, 23);

    assert!(engine.is_business_date(wednesday, "xa"));
    assert!(!engine.is_business_date(wednesday, "US"));
    assert_eq!(engine.add_business_days(wednesday, 1, "US"), None);
    assert_eq!(engine.holidays_between(wednesday, date(2019, 2, 1), "US"), -1);
}

#[test]
fn weekend_holidays_are_counted_in_ranges() {
    // Saturday and the following Monday
    let provider = FakeProvider::new(&[date(2019, 6, 1), date(2019, 6, 3)]);
    let engine = BusinessDateEngine::new(Iso3166Countries, provider);

    assert_eq!(engine.holidays_between(date(2019, 5, 31), date(2019, 6, 3), "DE"), 2);
    // start itself is never counted
    assert_eq!(engine.holidays_between(date(2019, 6, 1), date(2019, 6, 3), "DE"), 1);
}

#[test]
fn range_and_advancement_fetch_one_calendar() {
    let engine = BusinessDateEngine::new(Iso3166Countries, FakeProvider::new(&[]));

    let _ = engine.holidays_between(date(2019, 1, 1), date(2019, 12, 31), "FR");
    assert_eq!(engine.holidays().requests(), 1);

    let _ = engine.add_business_days(date(2019, 1, 1), 100, "FR");
    assert_eq!(engine.holidays().requests(), 2);
}

#[test]
fn advancement_skips_a_holiday_run() {
    let christmas_week = [
        date(2019, 12, 23),
        date(2019, 12, 24),
        date(2019, 12, 25),
        date(2019, 12, 26),
        date(2019, 12, 27),
    ];
    let engine = BusinessDateEngine::new(Iso3166Countries, FakeProvider::new(&christmas_week));

    // Friday 2019-12-20 -> Monday 2019-12-30
    assert_eq!(
        engine.add_business_days(date(2019, 12, 20), 1, "GB"),
        Some(date(2019, 12, 30))
    );
    // the start date may itself be a holiday
    assert_eq!(
        engine.add_business_days(date(2019, 12, 25), 2, "GB"),
        Some(date(2019, 12, 31))
    );
}

#[test]
fn holiday_on_business_day_is_not_business() {
    let engine = BusinessDateEngine::new(Iso3166Countries, FakeProvider::new(&[date(2019, 5, 1)]));
    assert!(engine.is_holiday(date(2019, 5, 1), "FR"));
    assert!(engine.is_week_day(date(2019, 5, 1)));
    assert!(!engine.is_business_date(date(2019, 5, 1), "FR"));
}

#[test]
fn shared_provider_behind_arc() {
    let provider = Arc::new(FakeProvider::new(&[date(2019, 7, 4)]));
    let engine = BusinessDateEngine::new(Iso3166Countries, Arc::clone(&provider));

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| assert!(engine.is_holiday(date(2019, 7, 4), "US")));
        }
    });
    assert_eq!(provider.requests(), 4);
}
