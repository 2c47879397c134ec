use thiserror::Error;

use crate::time::TimeValue;

/// Rejections raised while building picker options.
///
/// Widgets never surface these to the end user. Callers either fix their
/// configuration or fall back to defaults.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PickerConfigError {
  #[error("minute step must be a divisor of 60 between 1 and 60, got {0}")]
  InvalidMinuteStep(u32),

  #[error("invalid time `{0}`, expected HH:MM (optionally with am/pm)")]
  InvalidTime(String),

  #[error("invalid hour format `{0}`, expected 12 or 24")]
  InvalidHourFormat(String),

  #[error("month index {0} is outside 0-11")]
  InvalidMonth(u32),

  #[error("invalid month `{0}`, expected YYYY-MM")]
  InvalidMonthLabel(String),

  #[error("invalid date `{0}`, expected YYYY-MM-DD")]
  InvalidDate(String),

  #[error("invalid selection mode `{0}`, expected single or range")]
  InvalidMode(String),

  #[error("invalid week start `{0}`, expected sunday or monday")]
  InvalidWeekStart(String),

  #[error(
    "disabled_before {before} is later than disabled_after {after}; no time \
     would be selectable"
  )]
  InvertedTimeWindow {
    before: TimeValue,
    after:  TimeValue
  },

  #[error("disabled dates window is inverted: before {before} > after {after}")]
  InvertedDateWindow {
    before: chrono::NaiveDate,
    after:  chrono::NaiveDate
  },

  #[error("failed parsing picker config: {0}")]
  Parse(String)
}
