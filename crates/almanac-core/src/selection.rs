use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{
  Deserialize,
  Serialize
};

use crate::error::PickerConfigError;

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
pub enum SelectionMode {
  #[default]
  Single,
  Range
}

impl FromStr for SelectionMode {
  type Err = PickerConfigError;

  fn from_str(
    raw: &str
  ) -> Result<Self, Self::Err> {
    match raw
      .trim()
      .to_ascii_lowercase()
      .as_str()
    {
      | "single" => Ok(Self::Single),
      | "range" => Ok(Self::Range),
      | other => Err(
        PickerConfigError::InvalidMode(
          other.to_string()
        )
      )
    }
  }
}

/// A start date with an optional end. Dates in between are implicitly
/// selected.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
)]
pub struct DateRange {
  pub from: NaiveDate,
  pub to:   Option<NaiveDate>
}

impl DateRange {
  #[must_use]
  pub fn open(from: NaiveDate) -> Self {
    Self { from, to: None }
  }

  /// Builds a closed range, ordering the ends.
  #[must_use]
  pub fn closed(
    a: NaiveDate,
    b: NaiveDate
  ) -> Self {
    Self {
      from: a.min(b),
      to:   Some(a.max(b))
    }
  }

  #[must_use]
  pub fn contains(
    &self,
    day: NaiveDate
  ) -> bool {
    match self.to {
      | Some(to) => {
        day >= self.from && day <= to
      }
      | None => day == self.from
    }
  }

  #[must_use]
  pub fn is_start(
    &self,
    day: NaiveDate
  ) -> bool {
    day == self.from
  }

  #[must_use]
  pub fn is_end(
    &self,
    day: NaiveDate
  ) -> bool {
    self.to == Some(day)
  }

  #[must_use]
  pub fn is_middle(
    &self,
    day: NaiveDate
  ) -> bool {
    self.to.is_some_and(|to| {
      day > self.from && day < to
    })
  }
}

/// Caller-owned selection handed to the calendar shell.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum DateSelection {
  Single { date: NaiveDate },
  Range(DateRange)
}

impl DateSelection {
  #[must_use]
  pub fn single(date: NaiveDate) -> Self {
    Self::Single { date }
  }

  #[must_use]
  pub fn mode(&self) -> SelectionMode {
    match self {
      | Self::Single { .. } => {
        SelectionMode::Single
      }
      | Self::Range(_) => {
        SelectionMode::Range
      }
    }
  }

  /// The date a grid opens on when no month was given.
  #[must_use]
  pub fn anchor(&self) -> NaiveDate {
    match self {
      | Self::Single { date } => *date,
      | Self::Range(range) => range.from
    }
  }

  #[must_use]
  pub fn contains(
    &self,
    day: NaiveDate
  ) -> bool {
    match self {
      | Self::Single { date } => {
        *date == day
      }
      | Self::Range(range) => {
        range.contains(day)
      }
    }
  }

  #[must_use]
  pub fn as_range(
    &self
  ) -> Option<&DateRange> {
    match self {
      | Self::Range(range) => Some(range),
      | Self::Single { .. } => None
    }
  }
}

impl fmt::Display for DateSelection {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    match self {
      | Self::Single { date } => {
        write!(f, "{date}")
      }
      | Self::Range(DateRange {
        from,
        to: Some(to)
      }) => write!(f, "{from}..{to}"),
      | Self::Range(DateRange {
        from,
        to: None
      }) => write!(f, "{from}.."),
    }
  }
}

/// Parses `YYYY-MM-DD`, `YYYY-MM-DD..` or `YYYY-MM-DD..YYYY-MM-DD`.
impl FromStr for DateSelection {
  type Err = PickerConfigError;

  fn from_str(
    raw: &str
  ) -> Result<Self, Self::Err> {
    let raw = raw.trim();
    match raw.split_once("..") {
      | Some((from, to)) => {
        let from = parse_date(from)?;
        if to.trim().is_empty() {
          return Ok(Self::Range(
            DateRange::open(from)
          ));
        }
        let to = parse_date(to)?;
        Ok(Self::Range(DateRange::closed(
          from, to
        )))
      }
      | None => {
        Ok(Self::single(parse_date(raw)?))
      }
    }
  }
}

pub fn parse_date(
  raw: &str
) -> Result<NaiveDate, PickerConfigError> {
  NaiveDate::parse_from_str(
    raw.trim(),
    "%Y-%m-%d"
  )
  .map_err(|_| {
    PickerConfigError::InvalidDate(
      raw.trim().to_string()
    )
  })
}

/// Range click rule: grows, shrinks, restarts or clears `range` around
/// `day`.
#[must_use]
pub fn add_to_range(
  day: NaiveDate,
  range: Option<DateRange>
) -> Option<DateRange> {
  let Some(DateRange { from, to }) =
    range
  else {
    return Some(DateRange::open(day));
  };

  match to {
    | Some(to) => {
      if to == day && from == day {
        None
      } else if to == day {
        Some(DateRange::open(to))
      } else if from == day {
        None
      } else if day < from {
        Some(DateRange {
          from: day,
          to:   Some(to)
        })
      } else {
        Some(DateRange {
          from,
          to: Some(day)
        })
      }
    }
    | None => {
      Some(DateRange::closed(from, day))
    }
  }
}

/// Single click rule: selects `day`, or clears when `day` is already
/// selected and the selection is not `required`.
#[must_use]
pub fn toggle_single(
  day: NaiveDate,
  current: Option<NaiveDate>,
  required: bool
) -> Option<NaiveDate> {
  if current == Some(day) && !required {
    None
  } else {
    Some(day)
  }
}

/// The selection a day click requests from the owner.
#[must_use]
pub fn apply_day_click(
  mode: SelectionMode,
  current: Option<&DateSelection>,
  day: NaiveDate,
  required: bool
) -> Option<DateSelection> {
  match mode {
    | SelectionMode::Single => {
      let current = current
        .map(DateSelection::anchor);
      toggle_single(day, current, required)
        .map(DateSelection::single)
    }
    | SelectionMode::Range => {
      let current = current.map(
        |selection| match selection {
          | DateSelection::Range(range) => {
            *range
          }
          | DateSelection::Single {
            date
          } => DateRange::open(*date)
        }
      );
      add_to_range(day, current)
        .map(DateSelection::Range)
        .or_else(|| {
          required.then(|| {
            DateSelection::Range(
              DateRange::open(day)
            )
          })
        })
    }
  }
}
