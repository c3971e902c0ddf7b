//! Day bitmap and date rule helpers for holiday tables.

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// First year covered by holiday tables.
pub const MIN_YEAR: i32 = 1970;
/// Last year covered by holiday tables.
pub const MAX_YEAR: i32 = 2100;

/// 366 bits, one per ordinal day.
type YearRow = [u64; 6];

/// One bit per day from [`MIN_YEAR`] to [`MAX_YEAR`], set for holidays.
///
/// Rows are indexed by year and bits by `ordinal0`, so a lookup is two
/// index operations. Dates outside the covered years are never holidays.
#[derive(Clone)]
pub struct HolidayBitmap {
    rows: Box<[YearRow]>,
}

impl std::fmt::Debug for HolidayBitmap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HolidayBitmap")
            .field("years", &(MIN_YEAR..=MAX_YEAR))
            .field("len", &self.len())
            .finish()
    }
}

impl Default for HolidayBitmap {
    fn default() -> Self {
        Self::new()
    }
}

impl HolidayBitmap {
    /// Empty bitmap over the covered years.
    pub fn new() -> Self {
        let years = (MAX_YEAR - MIN_YEAR + 1) as usize;
        Self {
            rows: vec![[0; 6]; years].into_boxed_slice(),
        }
    }

    /// Marks `date`. Returns false if the date is outside the covered years.
    pub fn insert(&mut self, date: NaiveDate) -> bool {
        match Self::slot(date) {
            Some((row, word, mask)) => {
                self.rows[row][word] |= mask;
                true
            }
            None => false,
        }
    }

    /// Returns true if `date` is marked.
    #[inline]
    pub fn contains(&self, date: NaiveDate) -> bool {
        Self::slot(date).is_some_and(|(row, word, mask)| self.rows[row][word] & mask != 0)
    }

    /// Number of marked days.
    pub fn len(&self) -> usize {
        self.rows
            .iter()
            .flatten()
            .map(|word| word.count_ones() as usize)
            .sum()
    }

    /// Whether no day is marked.
    pub fn is_empty(&self) -> bool {
        self.rows.iter().flatten().all(|&word| word == 0)
    }

    fn slot(date: NaiveDate) -> Option<(usize, usize, u64)> {
        let row = usize::try_from(date.year() - MIN_YEAR).ok()?;
        if date.year() > MAX_YEAR {
            return None;
        }
        let day = date.ordinal0() as usize;
        Some((row, day / 64, 1 << (day % 64)))
    }
}

/// Moves a Saturday date to the Friday before and a Sunday date to the
/// Monday after.
pub fn observed_date(date: NaiveDate) -> NaiveDate {
    let shifted = match date.weekday() {
        Weekday::Sat => date.checked_sub_days(Days::new(1)),
        Weekday::Sun => date.checked_add_days(Days::new(1)),
        _ => None,
    };
    shifted.unwrap_or(date)
}

/// The `n`-th `weekday` of a month (1-based).
pub fn nth_weekday_of_month(year: i32, month: u32, weekday: Weekday, n: u32) -> Option<NaiveDate> {
    NaiveDate::from_weekday_of_month_opt(year, month, weekday, u8::try_from(n).ok()?)
}

/// The last `weekday` of a month.
pub fn last_weekday_of_month(year: i32, month: u32, weekday: Weekday) -> Option<NaiveDate> {
    nth_weekday_of_month(year, month, weekday, 5)
        .or_else(|| nth_weekday_of_month(year, month, weekday, 4))
}

/// Gregorian Easter Sunday (Oudin's method).
#[allow(clippy::many_single_char_names)]
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let golden = year % 19;
    let century = year / 100;
    let h = (century - century / 4 - (8 * century + 13) / 25 + 19 * golden + 15) % 30;
    let i = h - (h / 28) * (1 - (29 / (h + 1)) * ((21 - golden) / 11));
    let j = (year + year / 4 + i + 2 - century + century / 4) % 7;
    let l = i - j;
    let month = 3 + (l + 40) / 44;
    let day = l + 28 - 31 * (month / 4);

    NaiveDate::from_ymd_opt(year, u32::try_from(month).ok()?, u32::try_from(day).ok()?)
}
