//! Per-instance state of the calendar shell: the displayed month, the
//! month/year panel and time selector gating.

use tracing::debug;

use crate::month::DisplayedMonth;
use crate::selection::SelectionMode;

/// Options of a shell instance that decide which side panel may appear.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Default,
)]
pub struct ShellOptions {
  pub mode:                 SelectionMode,
  pub show_time_selector:   bool,
  pub month_year_selection: bool
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum TimeSelectorGate {
  /// Not requested.
  Off,
  Shown,
  /// Requested under range mode and dropped.
  Suppressed
}

impl TimeSelectorGate {
  #[must_use]
  pub fn for_options(
    options: &ShellOptions
  ) -> Self {
    match (
      options.show_time_selector,
      options.mode
    ) {
      | (false, _) => Self::Off,
      | (true, SelectionMode::Single) => {
        Self::Shown
      }
      | (true, SelectionMode::Range) => {
        Self::Suppressed
      }
    }
  }
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum SidePanel {
  None,
  TimeSelector,
  MonthYear
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum ShellEvent {
  PrevMonth,
  NextMonth,
  OpenMonthYear,
  CloseMonthYear,
  PickMonthYear(DisplayedMonth),
  /// The owner pushed a new displayed month.
  Adopt(DisplayedMonth)
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub struct ShellState {
  displayed_month: DisplayedMonth,
  month_year_open: bool,
  /// Month changes made from inside the shell; adoptions do not count.
  moves:           u32
}

impl ShellState {
  #[must_use]
  pub fn new(
    displayed_month: DisplayedMonth
  ) -> Self {
    Self {
      displayed_month,
      month_year_open: false,
      moves: 0
    }
  }

  #[must_use]
  pub fn displayed_month(
    &self
  ) -> DisplayedMonth {
    self.displayed_month
  }

  /// Bumped each time the shell itself moves the month. Owners watch it to
  /// report month changes after the state settles.
  #[must_use]
  pub fn moves(&self) -> u32 {
    self.moves
  }

  #[must_use]
  pub fn is_month_year_open(
    &self
  ) -> bool {
    self.month_year_open
  }

  /// Applies `event` and returns the new displayed month when it moved.
  pub fn apply(
    &mut self,
    event: ShellEvent,
    options: &ShellOptions
  ) -> Option<DisplayedMonth> {
    let before = self.displayed_month;

    match event {
      | ShellEvent::PrevMonth => {
        self.displayed_month =
          before.prev();
      }
      | ShellEvent::NextMonth => {
        self.displayed_month =
          before.next();
      }
      | ShellEvent::OpenMonthYear => {
        if options.month_year_selection {
          self.month_year_open = true;
        }
      }
      | ShellEvent::CloseMonthYear => {
        self.month_year_open = false;
      }
      | ShellEvent::PickMonthYear(
        month
      ) => {
        self.displayed_month = month;
        self.month_year_open = false;
      }
      | ShellEvent::Adopt(month) => {
        self.displayed_month = month;
      }
    }

    debug!(
      ?event,
      from = %before,
      to = %self.displayed_month,
      month_year_open = self.month_year_open,
      "shell transition"
    );

    let moved =
      self.displayed_month != before;
    if moved
      && !matches!(event, ShellEvent::Adopt(_))
    {
      self.moves = self.moves.wrapping_add(1);
    }
    moved.then_some(self.displayed_month)
  }

  /// Which panel renders beside the grid. The month/year panel wins.
  #[must_use]
  pub fn side_panel(
    &self,
    options: &ShellOptions
  ) -> SidePanel {
    if self.month_year_open
      && options.month_year_selection
    {
      return SidePanel::MonthYear;
    }
    match TimeSelectorGate::for_options(
      options
    ) {
      | TimeSelectorGate::Shown => {
        SidePanel::TimeSelector
      }
      | TimeSelectorGate::Off
      | TimeSelectorGate::Suppressed => {
        SidePanel::None
      }
    }
  }
}

/// Reports the gating mismatch once per mount while it persists.
#[derive(Debug, Default)]
pub struct GateDiagnostics {
  reported: bool
}

impl GateDiagnostics {
  /// Returns the message to log, if any, for the current gate.
  pub fn observe(
    &mut self,
    gate: TimeSelectorGate
  ) -> Option<&'static str> {
    if gate != TimeSelectorGate::Suppressed
    {
      self.reported = false;
      return None;
    }
    if self.reported {
      return None;
    }
    self.reported = true;
    Some(
      "time selector requested in range \
       mode; it is only available for \
       single date selection",
    )
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

  fn single_with_panels() -> ShellOptions {
    ShellOptions {
      mode:                 SelectionMode::Single,
      show_time_selector:   true,
      month_year_selection: true
    }
  }

  #[test]
  fn next_arrow_in_december_moves_to_january(
  ) {
    let mut state =
      ShellState::new(month(11, 2025));
    let moved = state.apply(
      ShellEvent::NextMonth,
      &ShellOptions::default()
    );
    assert_eq!(moved, Some(month(0, 2026)));
    assert_eq!(
      state.displayed_month(),
      month(0, 2026)
    );
  }

  #[test]
  fn month_year_panel_takes_precedence() {
    let options = single_with_panels();
    let mut state =
      ShellState::new(month(4, 2025));
    assert_eq!(
      state.side_panel(&options),
      SidePanel::TimeSelector
    );

    state
      .apply(ShellEvent::OpenMonthYear, &options);
    assert_eq!(
      state.side_panel(&options),
      SidePanel::MonthYear
    );

    let moved = state.apply(
      ShellEvent::PickMonthYear(month(
        9, 2025
      )),
      &options
    );
    assert_eq!(moved, Some(month(9, 2025)));
    assert!(!state.is_month_year_open());
    assert_eq!(
      state.side_panel(&options),
      SidePanel::TimeSelector
    );
  }

  #[test]
  fn pick_then_close_keeps_the_picked_month(
  ) {
    let options = single_with_panels();
    let mut state =
      ShellState::new(month(4, 2025));
    state
      .apply(ShellEvent::OpenMonthYear, &options);

    // the selector emits its pick and then its close in one click
    state.apply(
      ShellEvent::PickMonthYear(month(
        10, 2025
      )),
      &options
    );
    assert_eq!(
      state.apply(
        ShellEvent::CloseMonthYear,
        &options
      ),
      None
    );
    assert_eq!(
      state.displayed_month(),
      month(10, 2025)
    );
    assert!(!state.is_month_year_open());
    assert_eq!(state.moves(), 1);
  }

  #[test]
  fn adopting_a_month_is_not_a_move() {
    let options = ShellOptions::default();
    let mut state =
      ShellState::new(month(4, 2025));
    state.apply(
      ShellEvent::Adopt(month(7, 2025)),
      &options
    );
    assert_eq!(state.moves(), 0);
    state
      .apply(ShellEvent::NextMonth, &options);
    assert_eq!(state.moves(), 1);
    assert_eq!(
      state.displayed_month(),
      month(8, 2025)
    );
  }

  #[test]
  fn open_is_ignored_when_month_year_disabled(
  ) {
    let options = ShellOptions::default();
    let mut state =
      ShellState::new(month(4, 2025));
    assert_eq!(
      state.apply(
        ShellEvent::OpenMonthYear,
        &options
      ),
      None
    );
    assert!(!state.is_month_year_open());
  }

  #[test]
  fn range_mode_suppresses_time_selector_and_reports_once(
  ) {
    let options = ShellOptions {
      mode: SelectionMode::Range,
      show_time_selector: true,
      month_year_selection: false
    };
    let state =
      ShellState::new(month(4, 2025));
    assert_eq!(
      state.side_panel(&options),
      SidePanel::None
    );

    let gate =
      TimeSelectorGate::for_options(&options);
    assert_eq!(
      gate,
      TimeSelectorGate::Suppressed
    );

    let mut diagnostics =
      GateDiagnostics::default();
    assert!(diagnostics.observe(gate).is_some());
    assert!(diagnostics.observe(gate).is_none());
    assert!(diagnostics.observe(gate).is_none());

    // clearing and re-entering the mismatch reports again
    assert!(diagnostics
      .observe(TimeSelectorGate::Shown)
      .is_none());
    assert!(diagnostics.observe(gate).is_some());
  }
}
