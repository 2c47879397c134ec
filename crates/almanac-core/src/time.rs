//! Time-of-day values, the disabled-window predicate and the state model
//! behind the hour/minute selector.

use std::fmt;
use std::str::FromStr;

use regex::Regex;
use serde::{
  Deserialize,
  Serialize
};
use tracing::{
  debug,
  trace
};

use crate::error::PickerConfigError;

/// A time of day stored in 24-hour form.
///
/// Ordering is hour-major, minute-minor, which is what the disabled-window
/// checks rely on.
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
#[serde(
  try_from = "String",
  into = "String"
)]
pub struct TimeValue {
  hour:   u8,
  minute: u8
}

impl TimeValue {
  pub const DEFAULT: Self = Self {
    hour:   10,
    minute: 15
  };

  pub fn new(
    hour: u8,
    minute: u8
  ) -> Result<Self, PickerConfigError> {
    if hour > 23 || minute > 59 {
      return Err(
        PickerConfigError::InvalidTime(
          format!("{hour}:{minute:02}")
        )
      );
    }
    Ok(Self { hour, minute })
  }

  #[must_use]
  pub fn hour(self) -> u8 {
    self.hour
  }

  #[must_use]
  pub fn minute(self) -> u8 {
    self.minute
  }

  /// Same minute, different hour. The hour is clamped to 0-23.
  #[must_use]
  pub fn with_hour(
    self,
    hour: u8
  ) -> Self {
    Self {
      hour: hour.min(23),
      ..self
    }
  }

  /// Same hour, different minute. The minute is clamped to 0-59.
  #[must_use]
  pub fn with_minute(
    self,
    minute: u8
  ) -> Self {
    Self {
      minute: minute.min(59),
      ..self
    }
  }

  #[must_use]
  pub fn period(self) -> DayPeriod {
    if self.hour >= 12 {
      DayPeriod::Pm
    } else {
      DayPeriod::Am
    }
  }

  /// Minutes since midnight.
  #[must_use]
  pub fn minute_of_day(self) -> u16 {
    u16::from(self.hour) * 60
      + u16::from(self.minute)
  }

  /// Hour label as shown in the given format: 0-23, or 1-12.
  #[must_use]
  pub fn hour_for_display(
    self,
    format: HourFormat
  ) -> u8 {
    match format {
      | HourFormat::TwentyFour => {
        self.hour
      }
      | HourFormat::Twelve => {
        let hour = self.hour % 12;
        if hour == 0 { 12 } else { hour }
      }
    }
  }
}

impl Default for TimeValue {
  fn default() -> Self {
    Self::DEFAULT
  }
}

impl fmt::Display for TimeValue {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    write!(
      f,
      "{:02}:{:02}",
      self.hour, self.minute
    )
  }
}

impl FromStr for TimeValue {
  type Err = PickerConfigError;

  fn from_str(
    raw: &str
  ) -> Result<Self, Self::Err> {
    parse_clock_time(raw)
      .and_then(|(hour, minute)| {
        Self::new(hour, minute).ok()
      })
      .ok_or_else(|| {
        PickerConfigError::InvalidTime(
          raw.trim().to_string()
        )
      })
  }
}

impl TryFrom<String> for TimeValue {
  type Error = PickerConfigError;

  fn try_from(
    raw: String
  ) -> Result<Self, Self::Error> {
    raw.parse()
  }
}

impl From<TimeValue> for String {
  fn from(value: TimeValue) -> Self {
    value.to_string()
  }
}

fn parse_clock_time(
  token: &str
) -> Option<(u8, u8)> {
  let clock_re = Regex::new(
    r"(?i)^(?P<hour>\d{1,2}):(?P<minute>\d{2})\s*(?P<ampm>[ap]m)?$",
  )
  .ok()?;
  let captures =
    clock_re.captures(token.trim())?;

  let raw_hour = captures
    .name("hour")?
    .as_str()
    .parse::<u8>()
    .ok()?;
  let minute = captures
    .name("minute")?
    .as_str()
    .parse::<u8>()
    .ok()?;

  let hour = match captures.name("ampm")
  {
    | Some(ampm) => {
      if raw_hour == 0 || raw_hour > 12 {
        return None;
      }
      let period = if ampm
        .as_str()
        .eq_ignore_ascii_case("pm")
      {
        DayPeriod::Pm
      } else {
        DayPeriod::Am
      };
      to_24_hour(raw_hour, period)
    }
    | None => raw_hour
  };

  Some((hour, minute))
}

/// Whether `candidate` falls outside the enabled window.
///
/// `before` and `after` are inclusive edges of the enabled window: a time
/// equal to either bound stays selectable. There is no wraparound across
/// midnight, so a `before` later than `after` disables everything.
#[must_use]
pub fn is_disabled(
  candidate: TimeValue,
  before: Option<TimeValue>,
  after: Option<TimeValue>
) -> bool {
  before.is_some_and(|bound| {
    candidate < bound
  }) || after.is_some_and(|bound| {
    candidate > bound
  })
}

/// The enabled time-of-day window of a selector.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Default,
)]
pub struct TimeWindow {
  before: Option<TimeValue>,
  after:  Option<TimeValue>
}

impl TimeWindow {
  /// Builds a window, rejecting a `before` bound later than `after`.
  pub fn new(
    before: Option<TimeValue>,
    after: Option<TimeValue>
  ) -> Result<Self, PickerConfigError> {
    if let (Some(before), Some(after)) =
      (before, after)
      && before > after
    {
      return Err(
        PickerConfigError::InvertedTimeWindow {
          before,
          after
        }
      );
    }
    Ok(Self { before, after })
  }

  #[must_use]
  pub fn unbounded() -> Self {
    Self::default()
  }

  #[must_use]
  pub fn before(&self) -> Option<TimeValue> {
    self.before
  }

  #[must_use]
  pub fn after(&self) -> Option<TimeValue> {
    self.after
  }

  #[must_use]
  pub fn is_disabled(
    &self,
    candidate: TimeValue
  ) -> bool {
    is_disabled(
      candidate,
      self.before,
      self.after
    )
  }
}

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
pub enum HourFormat {
  #[serde(rename = "12")]
  Twelve,
  #[default]
  #[serde(rename = "24")]
  TwentyFour
}

impl HourFormat {
  #[must_use]
  pub fn as_key(self) -> &'static str {
    match self {
      | Self::Twelve => "12",
      | Self::TwentyFour => "24"
    }
  }

  /// Column header above the hour list.
  #[must_use]
  pub fn header(self) -> &'static str {
    match self {
      | Self::Twelve => "H",
      | Self::TwentyFour => "HH"
    }
  }
}

impl FromStr for HourFormat {
  type Err = PickerConfigError;

  fn from_str(
    raw: &str
  ) -> Result<Self, Self::Err> {
    match raw.trim() {
      | "12" => Ok(Self::Twelve),
      | "24" => Ok(Self::TwentyFour),
      | other => Err(
        PickerConfigError::InvalidHourFormat(
          other.to_string()
        )
      )
    }
  }
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize,
)]
pub enum DayPeriod {
  Am,
  Pm
}

impl DayPeriod {
  pub const ALL: [Self; 2] =
    [Self::Am, Self::Pm];

  #[must_use]
  pub fn other(self) -> Self {
    match self {
      | Self::Am => Self::Pm,
      | Self::Pm => Self::Am
    }
  }

  /// 24-hour hours belonging to the period.
  #[must_use]
  pub fn hours(
    self
  ) -> std::ops::Range<u8> {
    match self {
      | Self::Am => 0..12,
      | Self::Pm => 12..24
    }
  }

  #[must_use]
  pub fn label(self) -> &'static str {
    match self {
      | Self::Am => "AM",
      | Self::Pm => "PM"
    }
  }
}

/// Maps a 12-hour label (1-12) and period back to a 24-hour hour.
#[must_use]
pub fn to_24_hour(
  label: u8,
  period: DayPeriod
) -> u8 {
  let base = label % 12;
  match period {
    | DayPeriod::Am => base,
    | DayPeriod::Pm => base + 12
  }
}

/// Minute granularity of the minute column; always a divisor of 60.
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
#[serde(
  try_from = "u32",
  into = "u32"
)]
pub struct MinuteStep(u8);

impl MinuteStep {
  pub const DEFAULT: Self = Self(15);

  pub fn new(
    step: u32
  ) -> Result<Self, PickerConfigError> {
    if step == 0
      || step > 60
      || 60 % step != 0
    {
      return Err(
        PickerConfigError::InvalidMinuteStep(
          step
        )
      );
    }
    Ok(Self(step as u8))
  }

  #[must_use]
  pub fn get(self) -> u8 {
    self.0
  }
}

impl Default for MinuteStep {
  fn default() -> Self {
    Self::DEFAULT
  }
}

impl TryFrom<u32> for MinuteStep {
  type Error = PickerConfigError;

  fn try_from(
    step: u32
  ) -> Result<Self, Self::Error> {
    Self::new(step)
  }
}

impl From<MinuteStep> for u32 {
  fn from(step: MinuteStep) -> Self {
    u32::from(step.0)
  }
}

/// Hour labels for the hour column: `1..=12` or `0..=23`.
#[must_use]
pub fn hour_options(
  format: HourFormat
) -> Vec<u8> {
  match format {
    | HourFormat::Twelve => {
      (1..=12).collect()
    }
    | HourFormat::TwentyFour => {
      (0..=23).collect()
    }
  }
}

/// Minutes `0, step, 2*step, ...` below 60.
#[must_use]
pub fn minute_options(
  step: MinuteStep
) -> Vec<u8> {
  (0..60)
    .step_by(usize::from(step.get()))
    .collect()
}

#[must_use]
pub fn pad2(value: u8) -> String {
  format!("{value:02}")
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Default,
)]
pub struct TimeSelectorOptions {
  pub format:      HourFormat,
  pub minute_step: MinuteStep,
  pub window:      TimeWindow
}

/// One rendered cell of a selector column.
#[derive(
  Debug, Clone, PartialEq, Eq, Serialize,
)]
pub struct TimeCell {
  pub value:    u8,
  pub label:    String,
  pub selected: bool,
  pub disabled: bool
}

#[derive(
  Debug, Clone, PartialEq, Eq, Serialize,
)]
pub struct PeriodCell {
  pub period:   DayPeriod,
  pub selected: bool,
  pub disabled: bool
}

/// Shadow copy of a caller-owned [`TimeValue`] plus the rules for changing
/// it from the hour, minute and period columns.
///
/// Every `select_*` method returns the new value when the selection was
/// accepted and `None` when it was ignored (disabled target, or nothing
/// would change).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSelectorModel {
  options: TimeSelectorOptions,
  value:   TimeValue
}

impl TimeSelectorModel {
  #[must_use]
  pub fn new(
    options: TimeSelectorOptions,
    value: TimeValue
  ) -> Self {
    Self { options, value }
  }

  #[must_use]
  pub fn value(&self) -> TimeValue {
    self.value
  }

  #[must_use]
  pub fn options(
    &self
  ) -> &TimeSelectorOptions {
    &self.options
  }

  /// Adopts a value pushed down by the owner. Returns whether it changed.
  pub fn sync_value(
    &mut self,
    value: TimeValue
  ) -> bool {
    if self.value == value {
      return false;
    }
    debug!(from = %self.value, to = %value, "time selector adopted external value");
    self.value = value;
    true
  }

  pub fn set_options(
    &mut self,
    options: TimeSelectorOptions
  ) {
    self.options = options;
  }

  /// The time an hour-column click on `label` would produce.
  ///
  /// In 12-hour format the label is read in the current period first. When
  /// that falls outside the window the same label in the other period is
  /// used instead, so `12`-`6` reach the afternoon from a morning value.
  #[must_use]
  pub fn candidate_for_hour(
    &self,
    label: u8
  ) -> TimeValue {
    let window = &self.options.window;
    match self.options.format {
      | HourFormat::TwentyFour => {
        self.value.with_hour(label)
      }
      | HourFormat::Twelve => {
        let period = self.value.period();
        let same = self.value.with_hour(
          to_24_hour(label, period)
        );
        if !window.is_disabled(same) {
          return same;
        }
        let other = self.value.with_hour(
          to_24_hour(label, period.other())
        );
        if window.is_disabled(other) {
          same
        } else {
          other
        }
      }
    }
  }

  /// The time a period click would produce.
  ///
  /// Keeps the clock label when that time is enabled; otherwise moves to
  /// the closest enabled time of `period` on the minute grid. When the
  /// period has no enabled time at all the folded value is returned and
  /// stays disabled.
  #[must_use]
  pub fn candidate_for_period(
    &self,
    period: DayPeriod
  ) -> TimeValue {
    let window = &self.options.window;
    let label = self
      .value
      .hour_for_display(
        HourFormat::Twelve
      );
    let folded = self
      .value
      .with_hour(to_24_hour(label, period));
    if !window.is_disabled(folded) {
      return folded;
    }

    let minutes = minute_options(
      self.options.minute_step
    );
    let minutes = &minutes;
    let target = folded.minute_of_day();
    period
      .hours()
      .flat_map(move |hour| {
        minutes.iter().map(move |minute| {
          TimeValue {
            hour,
            minute: *minute
          }
        })
      })
      .filter(|candidate| {
        !window.is_disabled(*candidate)
      })
      .min_by_key(|candidate| {
        (
          candidate
            .minute_of_day()
            .abs_diff(target),
          *candidate
        )
      })
      .unwrap_or(folded)
  }

  #[must_use]
  pub fn hour_cells(&self) -> Vec<TimeCell> {
    let selected_label = self
      .value
      .hour_for_display(
        self.options.format
      );
    hour_options(self.options.format)
      .into_iter()
      .map(|label| {
        let disabled =
          self.options.window.is_disabled(
            self.candidate_for_hour(label)
          );
        TimeCell {
          value: label,
          label: pad2(label),
          selected: label == selected_label
            && !disabled,
          disabled
        }
      })
      .collect()
  }

  #[must_use]
  pub fn minute_cells(
    &self
  ) -> Vec<TimeCell> {
    minute_options(
      self.options.minute_step
    )
    .into_iter()
    .map(|minute| {
      let disabled =
        self.options.window.is_disabled(
          self.value.with_minute(minute)
        );
      TimeCell {
        value: minute,
        label: pad2(minute),
        selected: minute
          == self.value.minute()
          && !disabled,
        disabled
      }
    })
    .collect()
  }

  /// AM/PM cells; empty in 24-hour format.
  #[must_use]
  pub fn period_cells(
    &self
  ) -> Vec<PeriodCell> {
    if self.options.format
      == HourFormat::TwentyFour
    {
      return Vec::new();
    }
    DayPeriod::ALL
      .into_iter()
      .map(|period| {
        PeriodCell {
          period,
          selected: self.value.period()
            == period,
          disabled: self
            .options
            .window
            .is_disabled(
              self.candidate_for_period(
                period
              )
            )
        }
      })
      .collect()
  }

  #[must_use]
  pub fn selected_hour_index(
    &self
  ) -> Option<usize> {
    let label = self
      .value
      .hour_for_display(
        self.options.format
      );
    hour_options(self.options.format)
      .iter()
      .position(|hour| *hour == label)
  }

  #[must_use]
  pub fn selected_minute_index(
    &self
  ) -> Option<usize> {
    minute_options(
      self.options.minute_step
    )
    .iter()
    .position(|minute| {
      *minute == self.value.minute()
    })
  }

  /// Moves to the hour labelled `label`, keeping the minute.
  ///
  /// Returns `None` when the target is disabled or already selected;
  /// re-selecting the current hour reports no change.
  pub fn select_hour(
    &mut self,
    label: u8
  ) -> Option<TimeValue> {
    let candidate =
      self.candidate_for_hour(label);
    self.accept(candidate)
  }

  /// Moves to `minute` within the current hour. Re-selecting the current
  /// minute, a disabled minute or one past 59 reports no change.
  pub fn select_minute(
    &mut self,
    minute: u8
  ) -> Option<TimeValue> {
    if minute > 59 {
      return None;
    }
    let candidate =
      self.value.with_minute(minute);
    self.accept(candidate)
  }

  /// Switches AM/PM via [`Self::candidate_for_period`]. Always `None` in
  /// 24-hour format, and `None` when the period is already current.
  pub fn select_period(
    &mut self,
    period: DayPeriod
  ) -> Option<TimeValue> {
    if self.options.format
      == HourFormat::TwentyFour
    {
      return None;
    }
    let candidate =
      self.candidate_for_period(period);
    self.accept(candidate)
  }

  /// The single place the value changes. An unchanged candidate is not a
  /// change, so callers never emit for a re-click.
  fn accept(
    &mut self,
    candidate: TimeValue
  ) -> Option<TimeValue> {
    if self
      .options
      .window
      .is_disabled(candidate)
    {
      trace!(%candidate, "ignored disabled time cell");
      return None;
    }
    if candidate == self.value {
      return None;
    }
    self.value = candidate;
    Some(candidate)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn tv(
    hour: u8,
    minute: u8
  ) -> TimeValue {
    TimeValue::new(hour, minute)
      .expect("valid time")
  }

  fn bounded_model(
    format: HourFormat,
    step: u32,
    value: TimeValue
  ) -> TimeSelectorModel {
    let window = TimeWindow::new(
      Some(tv(9, 45)),
      Some(tv(18, 45))
    )
    .expect("ordered window");
    TimeSelectorModel::new(
      TimeSelectorOptions {
        format,
        minute_step: MinuteStep::new(step)
          .expect("valid step"),
        window
      },
      value
    )
  }

  #[test]
  fn predicate_matches_hour_major_ordering(
  ) {
    let before = Some(tv(9, 45));
    let after = Some(tv(18, 45));

    for hour in 0..24 {
      for minute in 0..60 {
        let candidate = tv(hour, minute);
        let expected = (hour, minute)
          < (9, 45)
          || (hour, minute) > (18, 45);
        assert_eq!(
          is_disabled(
            candidate, before, after
          ),
          expected,
          "{candidate}"
        );
      }
    }
  }

  #[test]
  fn bounds_themselves_stay_enabled() {
    assert!(!is_disabled(
      tv(9, 45),
      Some(tv(9, 45)),
      None
    ));
    assert!(!is_disabled(
      tv(18, 45),
      None,
      Some(tv(18, 45))
    ));
    assert!(!is_disabled(
      tv(0, 0),
      None,
      None
    ));
  }

  #[test]
  fn inverted_window_is_rejected() {
    let err = TimeWindow::new(
      Some(tv(18, 0)),
      Some(tv(9, 0))
    )
    .expect_err("inverted window");
    assert!(matches!(
      err,
      PickerConfigError::InvertedTimeWindow { .. }
    ));
    // the bare predicate still degenerates to all-disabled
    assert!(is_disabled(
      tv(12, 0),
      Some(tv(18, 0)),
      Some(tv(9, 0))
    ));
  }

  #[test]
  fn minute_lists_follow_every_divisor_of_sixty(
  ) {
    for step in
      [1, 2, 3, 4, 5, 6, 10, 12, 15, 20, 30, 60]
    {
      let minutes = minute_options(
        MinuteStep::new(step)
          .expect("divisor"),
      );
      assert_eq!(
        minutes.len(),
        (60 / step) as usize
      );
      assert_eq!(minutes[0], 0);
      assert!(minutes.iter().all(|m| {
        u32::from(*m) % step == 0
      }));
    }
  }

  #[test]
  fn invalid_minute_steps_are_rejected() {
    for step in [0, 7, 61, 90] {
      assert_eq!(
        MinuteStep::new(step),
        Err(
          PickerConfigError::InvalidMinuteStep(
            step
          )
        )
      );
    }
  }

  #[test]
  fn hour_lists_per_format() {
    assert_eq!(
      hour_options(HourFormat::Twelve),
      (1..=12).collect::<Vec<u8>>()
    );
    assert_eq!(
      hour_options(
        HourFormat::TwentyFour
      ),
      (0..=23).collect::<Vec<u8>>()
    );
  }

  #[test]
  fn disabled_hour_click_is_ignored() {
    let mut model = bounded_model(
      HourFormat::TwentyFour,
      1,
      TimeValue::DEFAULT
    );
    assert_eq!(model.select_hour(8), None);
    assert_eq!(
      model.value(),
      TimeValue::DEFAULT
    );
  }

  #[test]
  fn bounded_window_scenario_yields_single_change(
  ) {
    let mut model = bounded_model(
      HourFormat::TwentyFour,
      1,
      TimeValue::DEFAULT
    );
    let mut changes = Vec::new();

    if let Some(value) =
      model.select_hour(8)
    {
      changes.push(value);
    }
    if let Some(value) =
      model.select_hour(10)
    {
      changes.push(value);
    }
    if let Some(value) =
      model.select_minute(0)
    {
      changes.push(value);
    }

    assert_eq!(changes, vec![tv(10, 0)]);
    assert_eq!(model.value(), tv(10, 0));
  }

  #[test]
  fn partial_updates_preserve_the_other_field(
  ) {
    let mut model = TimeSelectorModel::new(
      TimeSelectorOptions::default(),
      tv(10, 15)
    );
    assert_eq!(
      model.select_hour(14),
      Some(tv(14, 15))
    );
    assert_eq!(
      model.select_minute(45),
      Some(tv(14, 45))
    );
  }

  #[test]
  fn minute_cells_disable_relative_to_current_hour(
  ) {
    let model = bounded_model(
      HourFormat::TwentyFour,
      15,
      tv(9, 45)
    );
    let disabled = model
      .minute_cells()
      .into_iter()
      .filter(|cell| cell.disabled)
      .map(|cell| cell.value)
      .collect::<Vec<_>>();
    assert_eq!(disabled, vec![0, 15, 30]);
  }

  #[test]
  fn twelve_hour_labels_keep_storage_in_24_hour(
  ) {
    let mut model = TimeSelectorModel::new(
      TimeSelectorOptions {
        format: HourFormat::Twelve,
        ..TimeSelectorOptions::default()
      },
      tv(15, 30)
    );
    assert_eq!(
      model.selected_hour_index(),
      Some(2)
    );
    assert_eq!(
      model.select_hour(12),
      Some(tv(12, 30))
    );
    assert_eq!(
      model.select_period(DayPeriod::Am),
      Some(tv(0, 30))
    );
    assert_eq!(
      model.hour_cells()[11].label,
      "12"
    );
    assert!(model.hour_cells()[11].selected);
  }

  #[test]
  fn twelve_hour_afternoon_is_reachable_from_morning(
  ) {
    let mut model = bounded_model(
      HourFormat::Twelve,
      15,
      tv(10, 15)
    );
    let enabled_labels = model
      .hour_cells()
      .into_iter()
      .filter(|cell| !cell.disabled)
      .map(|cell| cell.value)
      .collect::<Vec<_>>();
    assert_eq!(
      enabled_labels,
      vec![1, 2, 3, 4, 5, 6, 10, 11, 12]
    );

    assert_eq!(
      model.select_hour(12),
      Some(tv(12, 15))
    );
    assert_eq!(
      model.select_hour(3),
      Some(tv(15, 15))
    );
    assert_eq!(
      model.select_hour(7),
      None
    );
  }

  #[test]
  fn period_switch_lands_on_closest_enabled_time(
  ) {
    let mut model = bounded_model(
      HourFormat::Twelve,
      15,
      tv(10, 15)
    );
    let pm = model.period_cells()[1].clone();
    assert_eq!(pm.period, DayPeriod::Pm);
    assert!(!pm.disabled);
    assert_eq!(
      model.select_period(DayPeriod::Pm),
      Some(tv(18, 45))
    );
    assert_eq!(
      model.select_period(DayPeriod::Am),
      Some(tv(9, 45))
    );
    assert_eq!(
      model.select_period(DayPeriod::Am),
      None
    );
  }

  #[test]
  fn period_with_no_enabled_time_stays_disabled(
  ) {
    let window = TimeWindow::new(
      Some(tv(13, 0)),
      Some(tv(17, 0))
    )
    .expect("ordered window");
    let mut model = TimeSelectorModel::new(
      TimeSelectorOptions {
        format: HourFormat::Twelve,
        minute_step: MinuteStep::DEFAULT,
        window
      },
      tv(14, 0)
    );
    assert!(model.period_cells()[0].disabled);
    assert_eq!(
      model.select_period(DayPeriod::Am),
      None
    );
    assert_eq!(model.value(), tv(14, 0));
  }

  #[test]
  fn reselecting_current_value_reports_no_change(
  ) {
    let mut model = bounded_model(
      HourFormat::TwentyFour,
      15,
      tv(10, 15)
    );
    assert_eq!(model.select_hour(10), None);
    assert_eq!(model.select_minute(15), None);
    assert_eq!(
      model.select_period(DayPeriod::Am),
      None
    );
    assert_eq!(model.value(), tv(10, 15));
  }

  /// Every time reachable from the model's value by column clicks.
  fn reachable_from(
    model: &TimeSelectorModel
  ) -> std::collections::BTreeSet<TimeValue>
  {
    let options = *model.options();
    let mut seen =
      std::collections::BTreeSet::new();
    let mut queue =
      std::collections::VecDeque::new();
    seen.insert(model.value());
    queue.push_back(model.value());

    while let Some(value) = queue.pop_front()
    {
      let mut next = Vec::new();
      for label in
        hour_options(options.format)
      {
        let mut m =
          TimeSelectorModel::new(options, value);
        next.push(m.select_hour(label));
      }
      for minute in
        minute_options(options.minute_step)
      {
        let mut m =
          TimeSelectorModel::new(options, value);
        next.push(m.select_minute(minute));
      }
      for period in DayPeriod::ALL {
        let mut m =
          TimeSelectorModel::new(options, value);
        next.push(m.select_period(period));
      }
      for reached in next.into_iter().flatten()
      {
        if seen.insert(reached) {
          queue.push_back(reached);
        }
      }
    }
    seen
  }

  #[test]
  fn every_enabled_time_on_the_grid_is_reachable(
  ) {
    for format in [
      HourFormat::TwentyFour,
      HourFormat::Twelve
    ] {
      for step in [1, 15] {
        let model = bounded_model(
          format,
          step,
          tv(10, 15)
        );
        let grid = minute_options(
          model.options().minute_step
        );
        let enabled = (0..24)
          .flat_map(|hour| {
            grid
              .iter()
              .map(move |minute| tv(hour, *minute))
          })
          .filter(|value| {
            !model.options().window.is_disabled(*value)
          })
          .collect::<std::collections::BTreeSet<_>>();

        let reachable = reachable_from(&model);
        assert_eq!(
          reachable, enabled,
          "format {format:?} step {step}"
        );
      }
    }
  }

  #[test]
  fn parses_clock_strings() {
    assert_eq!(
      "09:45".parse::<TimeValue>(),
      Ok(tv(9, 45))
    );
    assert_eq!(
      "6:45 pm".parse::<TimeValue>(),
      Ok(tv(18, 45))
    );
    assert_eq!(
      "12:00am".parse::<TimeValue>(),
      Ok(tv(0, 0))
    );
    assert!("24:00"
      .parse::<TimeValue>()
      .is_err());
    assert!("9:60"
      .parse::<TimeValue>()
      .is_err());
    assert_eq!(
      tv(7, 5).to_string(),
      "07:05"
    );
  }
}
