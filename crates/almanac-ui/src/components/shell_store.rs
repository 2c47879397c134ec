//! Reducer holding a shell's state so that several events fired from one
//! click apply in order instead of each overwriting the last.

use std::rc::Rc;

use almanac_core::shell::{
  ShellEvent,
  ShellOptions,
  ShellState
};
use yew::Reducible;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellStore(pub ShellState);

impl Reducible for ShellStore {
  type Action = (ShellEvent, ShellOptions);

  fn reduce(
    self: Rc<Self>,
    (event, options): Self::Action
  ) -> Rc<Self> {
    let mut next = self.0;
    next.apply(event, &options);
    Rc::new(Self(next))
  }
}

#[cfg(test)]
mod tests {
  use almanac_core::month::DisplayedMonth;
  use almanac_core::selection::SelectionMode;
  use almanac_core::shell::SidePanel;

  use super::*;

  fn month(
    month0: u32,
    year: i32
  ) -> DisplayedMonth {
    DisplayedMonth::new(month0, year)
      .expect("valid month")
  }

  fn options() -> ShellOptions {
    ShellOptions {
      mode:                 SelectionMode::Single,
      show_time_selector:   true,
      month_year_selection: true
    }
  }

  fn dispatch_all(
    start: ShellState,
    events: &[ShellEvent]
  ) -> ShellState {
    events
      .iter()
      .fold(
        Rc::new(ShellStore(start)),
        |store, event| {
          store.reduce((*event, options()))
        }
      )
      .0
  }

  #[test]
  fn selector_pick_then_close_keeps_pick() {
    let picked = month(10, 2026);
    let state = dispatch_all(
      ShellState::new(month(4, 2025)),
      &[
        ShellEvent::OpenMonthYear,
        ShellEvent::PickMonthYear(picked),
        ShellEvent::CloseMonthYear
      ]
    );
    assert_eq!(
      state.displayed_month(),
      picked
    );
    assert_eq!(
      state.side_panel(&options()),
      SidePanel::TimeSelector
    );
    assert_eq!(state.moves(), 1);
  }

  #[test]
  fn escape_close_without_pick_keeps_month() {
    let start = month(4, 2025);
    let state = dispatch_all(
      ShellState::new(start),
      &[
        ShellEvent::OpenMonthYear,
        ShellEvent::CloseMonthYear
      ]
    );
    assert_eq!(
      state.displayed_month(),
      start
    );
    assert_eq!(state.moves(), 0);
  }

  #[test]
  fn owner_adoption_does_not_count_as_move(
  ) {
    let state = dispatch_all(
      ShellState::new(month(4, 2025)),
      &[
        ShellEvent::Adopt(month(0, 2026)),
        ShellEvent::PrevMonth
      ]
    );
    assert_eq!(
      state.displayed_month(),
      month(11, 2025)
    );
    assert_eq!(state.moves(), 1);
  }
}
