//! Month grid layout and per-day cell roles for the day grid.

use std::str::FromStr;

use chrono::{
  Datelike,
  Duration,
  NaiveDate,
  Weekday
};
use serde::{
  Deserialize,
  Serialize
};

use crate::error::PickerConfigError;
use crate::month::DisplayedMonth;
use crate::selection::DateSelection;

pub const GRID_WEEKS: usize = 6;

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Default,
  Serialize,
  Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
  #[default]
  Sunday,
  Monday
}

impl WeekStart {
  #[must_use]
  pub fn weekday(self) -> Weekday {
    match self {
      | Self::Sunday => Weekday::Sun,
      | Self::Monday => Weekday::Mon
    }
  }

  #[must_use]
  pub fn as_key(self) -> &'static str {
    match self {
      | Self::Sunday => "sunday",
      | Self::Monday => "monday"
    }
  }
}

impl FromStr for WeekStart {
  type Err = PickerConfigError;

  fn from_str(
    raw: &str
  ) -> Result<Self, Self::Err> {
    let trimmed = raw.trim();
    if trimmed
      .eq_ignore_ascii_case("sunday")
    {
      Ok(Self::Sunday)
    } else if trimmed
      .eq_ignore_ascii_case("monday")
    {
      Ok(Self::Monday)
    } else {
      Err(
        PickerConfigError::InvalidWeekStart(
          trimmed.to_string()
        )
      )
    }
  }
}

#[must_use]
pub fn weekday_labels(
  week_start: WeekStart
) -> [&'static str; 7] {
  match week_start {
    | WeekStart::Sunday => {
      [
        "Su", "Mo", "Tu", "We", "Th",
        "Fr", "Sa"
      ]
    }
    | WeekStart::Monday => {
      [
        "Mo", "Tu", "We", "Th", "Fr",
        "Sa", "Su"
      ]
    }
  }
}

fn add_days(
  date: NaiveDate,
  days: i64
) -> NaiveDate {
  date
    .checked_add_signed(Duration::days(
      days
    ))
    .unwrap_or(date)
}

#[must_use]
pub fn start_of_week(
  day: NaiveDate,
  week_start: WeekStart
) -> NaiveDate {
  let day_idx = day
    .weekday()
    .num_days_from_monday()
    as i64;
  let start_idx = week_start
    .weekday()
    .num_days_from_monday()
    as i64;
  let diff =
    (7 + day_idx - start_idx) % 7;
  add_days(day, -diff)
}

/// Inclusive window of selectable days. Days before `before` or after
/// `after` are disabled.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Default,
  Serialize,
  Deserialize,
)]
#[serde(deny_unknown_fields)]
pub struct DateBounds {
  #[serde(default)]
  pub before: Option<NaiveDate>,
  #[serde(default)]
  pub after:  Option<NaiveDate>
}

impl DateBounds {
  pub fn new(
    before: Option<NaiveDate>,
    after: Option<NaiveDate>
  ) -> Result<Self, PickerConfigError> {
    if let (Some(before), Some(after)) =
      (before, after)
      && before > after
    {
      return Err(
        PickerConfigError::InvertedDateWindow {
          before,
          after
        }
      );
    }
    Ok(Self { before, after })
  }

  #[must_use]
  pub fn is_disabled(
    &self,
    day: NaiveDate
  ) -> bool {
    self
      .before
      .is_some_and(|bound| day < bound)
      || self
        .after
        .is_some_and(|bound| day > bound)
  }
}

/// Semantic roles of one grid cell. Several can hold at once.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Default,
  Serialize,
)]
pub struct DayRoles {
  pub selected:     bool,
  pub today:        bool,
  pub outside:      bool,
  pub disabled:     bool,
  pub hidden:       bool,
  pub range_start:  bool,
  pub range_middle: bool,
  pub range_end:    bool
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Serialize,
)]
pub struct DayCell {
  pub date:  NaiveDate,
  pub roles: DayRoles
}

impl DayCell {
  /// Hidden and disabled cells swallow clicks.
  #[must_use]
  pub fn is_interactive(&self) -> bool {
    !self.roles.hidden
      && !self.roles.disabled
  }
}

/// Class names per cell role. Overrides replace single entries; any
/// unspecified role keeps its default.
#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
#[serde(default, deny_unknown_fields)]
pub struct DayClassNames {
  pub day:          String,
  pub selected:     String,
  pub today:        String,
  pub outside:      String,
  pub disabled:     String,
  pub hidden:       String,
  pub range_start:  String,
  pub range_middle: String,
  pub range_end:    String
}

impl Default for DayClassNames {
  fn default() -> Self {
    Self {
      day:          "calendar-cell \
                     calendar-cell-default"
        .to_string(),
      selected:     "calendar-cell-selected"
        .to_string(),
      today:        "calendar-cell-current"
        .to_string(),
      outside:      "calendar-cell-inactive"
        .to_string(),
      disabled:     "calendar-cell-inactive"
        .to_string(),
      hidden:       "invisible".to_string(),
      range_start:  "day-range-start"
        .to_string(),
      range_middle: "calendar-cell-selected"
        .to_string(),
      range_end:    "day-range-end"
        .to_string()
    }
  }
}

impl DayClassNames {
  /// Space-separated class list for a cell, duplicates removed.
  #[must_use]
  pub fn class_for(
    &self,
    roles: &DayRoles
  ) -> String {
    let candidates = [
      (true, &self.day),
      (roles.selected, &self.selected),
      (roles.today, &self.today),
      (roles.outside, &self.outside),
      (roles.disabled, &self.disabled),
      (roles.hidden, &self.hidden),
      (roles.range_start, &self.range_start),
      (
        roles.range_middle,
        &self.range_middle
      ),
      (roles.range_end, &self.range_end)
    ];

    let mut classes: Vec<&str> = Vec::new();
    for (active, names) in candidates {
      if !active {
        continue;
      }
      for name in names.split_whitespace() {
        if !classes.contains(&name) {
          classes.push(name);
        }
      }
    }
    classes.join(" ")
  }
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub struct GridOptions {
  pub week_start:        WeekStart,
  pub show_outside_days: bool,
  pub disabled:          DateBounds
}

impl Default for GridOptions {
  fn default() -> Self {
    Self {
      week_start:        WeekStart::Sunday,
      show_outside_days: true,
      disabled:          DateBounds::default()
    }
  }
}

/// Six weeks of cells starting on the week start on or before the first of
/// `month`.
#[must_use]
pub fn month_grid(
  month: DisplayedMonth,
  options: &GridOptions,
  selection: Option<&DateSelection>,
  today: NaiveDate
) -> Vec<Vec<DayCell>> {
  let grid_start = start_of_week(
    month.first_day(),
    options.week_start
  );

  (0..GRID_WEEKS as i64)
    .map(|week| {
      (0..7_i64)
        .map(|weekday| {
          let date = add_days(
            grid_start,
            week * 7 + weekday
          );
          DayCell {
            date,
            roles: day_roles(
              date, month, options,
              selection, today
            )
          }
        })
        .collect()
    })
    .collect()
}

fn day_roles(
  date: NaiveDate,
  month: DisplayedMonth,
  options: &GridOptions,
  selection: Option<&DateSelection>,
  today: NaiveDate
) -> DayRoles {
  let outside = !month.contains(date);
  let hidden =
    outside && !options.show_outside_days;
  let range =
    selection.and_then(DateSelection::as_range);
  let closed_range =
    range.filter(|range| range.to.is_some());

  DayRoles {
    selected: !hidden
      && selection.is_some_and(|selection| {
        selection.contains(date)
      }),
    today: date == today,
    outside,
    disabled: options
      .disabled
      .is_disabled(date),
    hidden,
    range_start: !hidden
      && range.is_some_and(|range| {
        range.is_start(date)
      }),
    range_middle: !hidden
      && closed_range.is_some_and(
        |range| range.is_middle(date)
      ),
    range_end: !hidden
      && closed_range.is_some_and(
        |range| range.is_end(date)
      )
  }
}
