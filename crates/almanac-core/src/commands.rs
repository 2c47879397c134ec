use std::io::Write;

use anyhow::Context;
use chrono::{
  Local,
  NaiveDate
};
use tracing::{
  debug,
  info,
  instrument,
  warn
};

use crate::cli::Command;
use crate::config::LoadedConfig;
use crate::grid::{
  GridOptions,
  month_grid
};
use crate::month::DisplayedMonth;
use crate::render::{
  MonthPreview,
  Renderer,
  TimePreview
};
use crate::selection::{
  DateSelection,
  SelectionMode,
  apply_day_click
};
use crate::shell::{
  GateDiagnostics,
  TimeSelectorGate
};
use crate::time::{
  TimeSelectorModel,
  TimeValue
};

#[instrument(skip(loaded, renderer, out))]
pub fn dispatch<W: Write>(
  command: Command,
  loaded: &LoadedConfig,
  renderer: &Renderer,
  out: &mut W
) -> anyhow::Result<()> {
  match command {
    | Command::Check => {
      check(loaded, renderer, out)
    }
    | Command::Month {
      month,
      select,
      clicks,
      mode,
      today
    } => {
      let today = today.unwrap_or_else(|| {
        Local::now().date_naive()
      });
      let mode = mode.unwrap_or(
        loaded.config.calendar.mode
      );
      let month = month.unwrap_or_else(|| {
        DisplayedMonth::from_date(
          select
            .as_ref()
            .map_or(today, DateSelection::anchor)
        )
      });
      let preview = month_preview(
        loaded, month, mode, select, &clicks,
        today
      );
      renderer.write_month(out, &preview)
    }
    | Command::Times {
      value,
      hour,
      minute
    } => {
      let preview =
        time_preview(loaded, value, hour, minute)?;
      renderer.write_times(out, &preview)
    }
  }
}

fn check<W: Write>(
  loaded: &LoadedConfig,
  renderer: &Renderer,
  out: &mut W
) -> anyhow::Result<()> {
  loaded
    .config
    .validate()
    .context("picker config failed validation")?;

  let gate = TimeSelectorGate::for_options(
    &loaded.config.shell_options()
  );
  if let Some(message) =
    GateDiagnostics::default().observe(gate)
  {
    warn!("{message}");
  }

  info!(?gate, "picker config is valid");
  renderer.write_summary(out, loaded, gate)
}

/// Replays `clicks` against the grid the way the day grid widget would,
/// skipping hidden and disabled cells and following month moves from
/// outside days.
#[must_use]
pub fn month_preview(
  loaded: &LoadedConfig,
  month: DisplayedMonth,
  mode: SelectionMode,
  select: Option<DateSelection>,
  clicks: &[NaiveDate],
  today: NaiveDate
) -> MonthPreview {
  let options: GridOptions =
    loaded.config.grid_options();
  let required =
    loaded.config.calendar.required;

  let mut month = month;
  let mut selection = select;
  for day in clicks {
    let grid = month_grid(
      month,
      &options,
      selection.as_ref(),
      today
    );
    let Some(cell) = grid
      .iter()
      .flatten()
      .find(|cell| cell.date == *day)
    else {
      debug!(%day, %month, "click outside the visible grid ignored");
      continue;
    };
    if !cell.is_interactive() {
      debug!(%day, "click on inactive day ignored");
      continue;
    }

    selection = apply_day_click(
      mode,
      selection.as_ref(),
      *day,
      required
    );
    if cell.roles.outside {
      month = DisplayedMonth::from_date(*day);
    }
    debug!(%day, selection = ?selection, "applied day click");
  }

  let weeks = month_grid(
    month,
    &options,
    selection.as_ref(),
    today
  );
  MonthPreview::new(
    month,
    options.week_start,
    weeks,
    selection
  )
}

pub fn time_preview(
  loaded: &LoadedConfig,
  value: Option<TimeValue>,
  hour: Option<u8>,
  minute: Option<u8>
) -> anyhow::Result<TimePreview> {
  let options = loaded
    .config
    .time_selector_options()
    .context("invalid [time] section")?;
  let mut model = TimeSelectorModel::new(
    options,
    value.unwrap_or(loaded.config.time.initial)
  );

  let mut changes = Vec::new();
  if let Some(label) = hour {
    changes.extend(model.select_hour(label));
  }
  if let Some(minute) = minute {
    changes
      .extend(model.select_minute(minute));
  }

  Ok(TimePreview::new(&model, changes))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config::PickerConfig;

  fn loaded(raw: &str) -> LoadedConfig {
    LoadedConfig {
      config: PickerConfig::from_toml_str(raw)
        .expect("valid config"),
      source: None
    }
  }

  fn date(
    m: u32,
    d: u32
  ) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, m, d)
      .expect("valid date")
  }

  #[test]
  fn range_clicks_build_selection() {
    let loaded = loaded("");
    let month = DisplayedMonth::new(4, 2025)
      .expect("valid month");
    let preview = month_preview(
      &loaded,
      month,
      SelectionMode::Range,
      None,
      &[date(5, 11), date(5, 14)],
      date(5, 1)
    );

    assert_eq!(
      preview.selection,
      Some(
        "2025-05-11..2025-05-14"
          .parse()
          .expect("range")
      )
    );
  }

  #[test]
  fn disabled_and_hidden_days_ignore_clicks(
  ) {
    let loaded = loaded(
      "[calendar]\nshow_outside_days = \
       false\ndisabled_dates = { before = \
       \"2025-05-10\" }\n"
    );
    let month = DisplayedMonth::new(4, 2025)
      .expect("valid month");
    let preview = month_preview(
      &loaded,
      month,
      SelectionMode::Single,
      None,
      &[date(5, 2), date(4, 30)],
      date(5, 1)
    );
    assert_eq!(preview.selection, None);
    assert_eq!(preview.caption, "May 2025");
  }

  #[test]
  fn outside_day_click_moves_month() {
    let loaded = loaded("");
    let month = DisplayedMonth::new(4, 2025)
      .expect("valid month");
    let preview = month_preview(
      &loaded,
      month,
      SelectionMode::Single,
      None,
      &[date(6, 1)],
      date(5, 1)
    );
    assert_eq!(preview.caption, "Jun 2025");
    assert_eq!(
      preview.selection,
      Some(DateSelection::single(date(6, 1)))
    );
  }

  #[test]
  fn time_preview_reports_single_change() {
    let loaded = loaded(
      "[time]\ndisabled_before = \
       \"09:45\"\ndisabled_after = \
       \"18:45\"\n"
    );
    let preview = time_preview(
      &loaded,
      Some(
        TimeValue::new(10, 0)
          .expect("valid time")
      ),
      Some(8),
      Some(0)
    )
    .expect("preview");

    assert!(preview.changes.is_empty());
    assert_eq!(
      preview.value,
      TimeValue::new(10, 0)
        .expect("valid time")
    );
    assert!(preview.hours[8].disabled);
  }
}
