use std::fmt;
use std::str::FromStr;

use chrono::{
  Datelike,
  Duration,
  NaiveDate
};
use serde::{
  Deserialize,
  Serialize
};

use crate::error::PickerConfigError;

pub const MONTH_ABBREVIATIONS: [&str;
  12] = [
  "Jan", "Feb", "Mar", "Apr", "May",
  "Jun", "Jul", "Aug", "Sep", "Oct",
  "Nov", "Dec"
];

/// Years shown on each side of the reference year.
pub const YEAR_WINDOW_RADIUS: i32 = 5;

/// The month currently shown by a calendar grid.
///
/// The month index is zero-based (0 = January) and always in 0-11.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
  Hash,
  Serialize,
  Deserialize,
)]
pub struct DisplayedMonth {
  year:   i32,
  month0: u32
}

impl DisplayedMonth {
  pub fn new(
    month0: u32,
    year: i32
  ) -> Result<Self, PickerConfigError> {
    if month0 > 11 {
      return Err(
        PickerConfigError::InvalidMonth(
          month0
        )
      );
    }
    Ok(Self { year, month0 })
  }

  #[must_use]
  pub fn from_date(
    date: NaiveDate
  ) -> Self {
    Self {
      year:   date.year(),
      month0: date.month0()
    }
  }

  #[must_use]
  pub fn month_index(self) -> u32 {
    self.month0
  }

  #[must_use]
  pub fn year(self) -> i32 {
    self.year
  }

  #[must_use]
  pub fn abbreviation(
    self
  ) -> &'static str {
    MONTH_ABBREVIATIONS
      [self.month0 as usize]
  }

  /// Shifts by `delta` months, carrying into the year.
  #[must_use]
  pub fn shift(
    self,
    delta: i32
  ) -> Self {
    let total = i64::from(self.year) * 12
      + i64::from(self.month0)
      + i64::from(delta);
    let year = total.div_euclid(12);
    let month0 = total.rem_euclid(12);
    Self {
      year:   i32::try_from(year)
        .unwrap_or(self.year),
      month0: month0 as u32
    }
  }

  #[must_use]
  pub fn next(self) -> Self {
    self.shift(1)
  }

  #[must_use]
  pub fn prev(self) -> Self {
    self.shift(-1)
  }

  #[must_use]
  pub fn with_month(
    self,
    month0: u32
  ) -> Self {
    Self {
      month0: month0.min(11),
      ..self
    }
  }

  #[must_use]
  pub fn with_year(
    self,
    year: i32
  ) -> Self {
    Self { year, ..self }
  }

  #[must_use]
  pub fn first_day(self) -> NaiveDate {
    NaiveDate::from_ymd_opt(
      self.year,
      self.month0 + 1,
      1
    )
    .unwrap_or(NaiveDate::MIN)
  }

  #[must_use]
  pub fn last_day(self) -> NaiveDate {
    self
      .next()
      .first_day()
      .checked_sub_signed(Duration::days(
        1
      ))
      .unwrap_or(NaiveDate::MAX)
  }

  #[must_use]
  pub fn days_in_month(self) -> u32 {
    self.last_day().day()
  }

  #[must_use]
  pub fn contains(
    self,
    date: NaiveDate
  ) -> bool {
    date.year() == self.year
      && date.month0() == self.month0
  }
}

impl fmt::Display for DisplayedMonth {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    write!(
      f,
      "{} {}",
      self.abbreviation(),
      self.year
    )
  }
}

/// Parses `YYYY-MM` (one-based month).
impl FromStr for DisplayedMonth {
  type Err = PickerConfigError;

  fn from_str(
    raw: &str
  ) -> Result<Self, Self::Err> {
    let invalid = || {
      PickerConfigError::InvalidMonthLabel(
        raw.trim().to_string()
      )
    };
    let (year, month) = raw
      .trim()
      .split_once('-')
      .ok_or_else(invalid)?;
    let year = year
      .parse::<i32>()
      .map_err(|_| invalid())?;
    let month = month
      .parse::<u32>()
      .map_err(|_| invalid())?;
    if !(1..=12).contains(&month) {
      return Err(invalid());
    }
    Self::new(month - 1, year)
  }
}

/// Month and year columns of the month/year selector.
///
/// The year list is always rebuilt around the reference, so picking a year
/// near the edge re-centres the next window on it.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub struct MonthYearWindow {
  reference: DisplayedMonth
}

impl MonthYearWindow {
  #[must_use]
  pub fn new(
    reference: DisplayedMonth
  ) -> Self {
    Self { reference }
  }

  #[must_use]
  pub fn reference(
    &self
  ) -> DisplayedMonth {
    self.reference
  }

  #[must_use]
  pub fn months(
    &self
  ) -> [&'static str; 12] {
    MONTH_ABBREVIATIONS
  }

  #[must_use]
  pub fn years(&self) -> Vec<i32> {
    let center = self.reference.year();
    (center - YEAR_WINDOW_RADIUS
      ..=center + YEAR_WINDOW_RADIUS)
      .collect()
  }

  #[must_use]
  pub fn selected_month_index(
    &self
  ) -> usize {
    self.reference.month_index()
      as usize
  }

  #[must_use]
  pub fn selected_year_index(
    &self
  ) -> Option<usize> {
    self.years().iter().position(
      |year| *year == self.reference.year()
    )
  }

  /// New month, reference year kept.
  pub fn pick_month(
    &self,
    month0: u32
  ) -> Result<DisplayedMonth, PickerConfigError>
  {
    DisplayedMonth::new(
      month0,
      self.reference.year()
    )
  }

  /// New year, reference month kept.
  #[must_use]
  pub fn pick_year(
    &self,
    year: i32
  ) -> DisplayedMonth {
    self.reference.with_year(year)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn month(
    month0: u32,
    year: i32
  ) -> DisplayedMonth {
    DisplayedMonth::new(month0, year)
      .expect("valid month")
  }

  #[test]
  fn next_from_december_rolls_year() {
    assert_eq!(
      month(11, 2025).next(),
      month(0, 2026)
    );
    assert_eq!(
      month(0, 2026).prev(),
      month(11, 2025)
    );
    assert_eq!(
      month(4, 2025).shift(-17),
      month(11, 2023)
    );
  }

  #[test]
  fn year_window_stays_centered_after_each_pick(
  ) {
    let mut reference = month(4, 2025);
    for picked in [2030, 2035, 1999] {
      let window =
        MonthYearWindow::new(reference);
      reference = window.pick_year(picked);
      let next =
        MonthYearWindow::new(reference);
      let years = next.years();
      assert_eq!(years.len(), 11);
      assert_eq!(years[5], picked);
      assert!(years.windows(2).all(|pair| {
        pair[1] == pair[0] + 1
      }));
      assert_eq!(
        next.selected_year_index(),
        Some(5)
      );
    }
  }

  #[test]
  fn month_pick_keeps_year() {
    let window =
      MonthYearWindow::new(month(4, 2025));
    assert_eq!(
      window
        .pick_month(10)
        .expect("valid index"),
      month(10, 2025)
    );
    assert!(window.pick_month(12).is_err());
    assert_eq!(
      window.pick_year(2020),
      month(4, 2020)
    );
  }

  #[test]
  fn month_bounds_and_labels() {
    let feb = month(1, 2024);
    assert_eq!(feb.days_in_month(), 29);
    assert_eq!(
      feb.last_day(),
      NaiveDate::from_ymd_opt(2024, 2, 29)
        .expect("valid date")
    );
    assert_eq!(feb.to_string(), "Feb 2024");
    assert_eq!(
      "2025-12".parse::<DisplayedMonth>(),
      Ok(month(11, 2025))
    );
    assert!("2025-13"
      .parse::<DisplayedMonth>()
      .is_err());
  }
}
