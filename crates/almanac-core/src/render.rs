use std::io::{
  self,
  IsTerminal,
  Write
};

use serde::Serialize;

use crate::config::LoadedConfig;
use crate::grid::{
  DayCell,
  WeekStart,
  weekday_labels
};
use crate::month::DisplayedMonth;
use crate::selection::DateSelection;
use crate::shell::TimeSelectorGate;
use crate::time::{
  PeriodCell,
  TimeCell,
  TimeSelectorModel,
  TimeValue
};

#[derive(Debug, Clone, Serialize)]
pub struct MonthPreview {
  pub caption:   String,
  pub weekdays:  [&'static str; 7],
  pub weeks:     Vec<Vec<DayCell>>,
  pub selection: Option<DateSelection>
}

impl MonthPreview {
  #[must_use]
  pub fn new(
    month: DisplayedMonth,
    week_start: WeekStart,
    weeks: Vec<Vec<DayCell>>,
    selection: Option<DateSelection>
  ) -> Self {
    Self {
      caption: month.to_string(),
      weekdays: weekday_labels(week_start),
      weeks,
      selection
    }
  }
}

#[derive(Debug, Clone, Serialize)]
pub struct TimePreview {
  pub value:   TimeValue,
  pub header:  &'static str,
  pub hours:   Vec<TimeCell>,
  pub minutes: Vec<TimeCell>,
  pub periods: Vec<PeriodCell>,
  pub changes: Vec<TimeValue>
}

impl TimePreview {
  #[must_use]
  pub fn new(
    model: &TimeSelectorModel,
    changes: Vec<TimeValue>
  ) -> Self {
    Self {
      value: model.value(),
      header: model.options().format.header(),
      hours: model.hour_cells(),
      minutes: model.minute_cells(),
      periods: model.period_cells(),
      changes
    }
  }
}

/// Writes previews as text (optionally coloured) or JSON.
#[derive(Debug, Clone)]
pub struct Renderer {
  color: bool,
  json:  bool
}

impl Renderer {
  #[must_use]
  pub fn new(
    color: bool,
    json: bool
  ) -> Self {
    Self { color, json }
  }

  #[must_use]
  pub fn for_stdout(json: bool) -> Self {
    Self::new(
      !json && io::stdout().is_terminal(),
      json
    )
  }

  #[tracing::instrument(skip_all)]
  pub fn write_month<W: Write>(
    &self,
    out: &mut W,
    preview: &MonthPreview
  ) -> anyhow::Result<()> {
    if self.json {
      return self.write_json(out, preview);
    }

    writeln!(
      out,
      "{:^28}",
      format!("<  {}  >", preview.caption)
    )?;
    let header = preview
      .weekdays
      .iter()
      .map(|label| format!(" {label} "))
      .collect::<String>();
    writeln!(out, "{header}")?;

    for week in &preview.weeks {
      let row = week
        .iter()
        .map(|cell| self.day_cell(cell))
        .collect::<String>();
      writeln!(out, "{}", row.trim_end())?;
    }

    match &preview.selection {
      | Some(selection) => {
        writeln!(out, "selected: {selection}")?
      }
      | None => {
        writeln!(out, "selected: -")?
      }
    }
    Ok(())
  }

  #[tracing::instrument(skip_all)]
  pub fn write_times<W: Write>(
    &self,
    out: &mut W,
    preview: &TimePreview
  ) -> anyhow::Result<()> {
    if self.json {
      return self.write_json(out, preview);
    }

    let with_period =
      !preview.periods.is_empty();
    if with_period {
      writeln!(
        out,
        "{:^4} {:^4} {:^4}",
        preview.header, "MM", ""
      )?;
    } else {
      writeln!(
        out,
        "{:^4} {:^4}",
        preview.header, "MM"
      )?;
    }

    let rows = preview
      .hours
      .len()
      .max(preview.minutes.len());
    for row in 0..rows {
      let hour = preview
        .hours
        .get(row)
        .map(|cell| self.time_cell(cell))
        .unwrap_or_else(|| "    ".to_string());
      let minute = preview
        .minutes
        .get(row)
        .map(|cell| self.time_cell(cell))
        .unwrap_or_else(|| "    ".to_string());
      let period = preview
        .periods
        .get(row)
        .map(|cell| self.period_cell(cell))
        .unwrap_or_default();
      let line =
        format!("{hour} {minute} {period}");
      writeln!(out, "{}", line.trim_end())?;
    }

    writeln!(out, "value: {}", preview.value)?;
    for change in &preview.changes {
      writeln!(out, "changed: {change}")?;
    }
    Ok(())
  }

  pub fn write_summary<W: Write>(
    &self,
    out: &mut W,
    loaded: &LoadedConfig,
    gate: TimeSelectorGate
  ) -> anyhow::Result<()> {
    let config = &loaded.config;
    if self.json {
      return self.write_json(out, config);
    }

    let source = loaded
      .source
      .as_ref()
      .map(|path| path.display().to_string())
      .unwrap_or_else(|| {
        "(defaults)".to_string()
      });
    let bound = |value: Option<TimeValue>| {
      value
        .map(|time| time.to_string())
        .unwrap_or_else(|| "-".to_string())
    };

    writeln!(out, "config:        {source}")?;
    writeln!(
      out,
      "mode:          {:?}",
      config.calendar.mode
    )?;
    writeln!(
      out,
      "week start:    {}",
      config.calendar.week_start.as_key()
    )?;
    writeln!(
      out,
      "outside days:  {}",
      config.calendar.show_outside_days
    )?;
    writeln!(out, "time selector: {gate:?}")?;
    writeln!(
      out,
      "  format {}h, step {}m, initial {}",
      config.time.format.as_key(),
      config.time.minute_step.get(),
      config.time.initial
    )?;
    writeln!(
      out,
      "  enabled window {} .. {}",
      bound(config.time.disabled_before),
      bound(config.time.disabled_after)
    )?;
    writeln!(
      out,
      "month/year:    {}",
      config.month_year.enabled
    )?;
    Ok(())
  }

  fn write_json<W: Write, T: Serialize>(
    &self,
    out: &mut W,
    value: &T
  ) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(
      &mut *out,
      value
    )?;
    writeln!(out)?;
    Ok(())
  }

  fn day_cell(
    &self,
    cell: &DayCell
  ) -> String {
    let roles = &cell.roles;
    if roles.hidden {
      return "    ".to_string();
    }
    let day = chrono::Datelike::day(
      &cell.date
    );
    let (open, close) = if roles.selected
    {
      ('[', ']')
    } else if roles.today {
      ('(', ')')
    } else if roles.disabled {
      ('x', ' ')
    } else {
      (' ', ' ')
    };
    let text =
      format!("{open}{day:>2}{close}");

    if roles.selected {
      self.paint(&text, "7")
    } else if roles.disabled {
      self.paint(&text, "9")
    } else if roles.outside {
      self.paint(&text, "2")
    } else if roles.today {
      self.paint(&text, "1")
    } else {
      text
    }
  }

  fn time_cell(
    &self,
    cell: &TimeCell
  ) -> String {
    if cell.selected {
      self.paint(
        &format!("[{}]", cell.label),
        "7"
      )
    } else if cell.disabled {
      self.paint(
        &format!("x{} ", cell.label),
        "2"
      )
    } else {
      format!(" {} ", cell.label)
    }
  }

  fn period_cell(
    &self,
    cell: &PeriodCell
  ) -> String {
    let label = cell.period.label();
    if cell.selected {
      self.paint(&format!("[{label}]"), "7")
    } else if cell.disabled {
      self.paint(&format!("x{label} "), "2")
    } else {
      format!(" {label} ")
    }
  }

  fn paint(
    &self,
    s: &str,
    code: &str
  ) -> String {
    if self.color {
      format!("\x1b[{code}m{s}\x1b[0m")
    } else {
      s.to_string()
    }
  }
}
