use std::fs;
use std::path::{
  Path,
  PathBuf
};

use anyhow::Context;
use serde::{
  Deserialize,
  Serialize
};
use tracing::{
  debug,
  info
};

use crate::error::PickerConfigError;
use crate::grid::{
  DateBounds,
  GridOptions,
  WeekStart
};
use crate::selection::SelectionMode;
use crate::shell::ShellOptions;
use crate::time::{
  HourFormat,
  MinuteStep,
  TimeSelectorOptions,
  TimeValue,
  TimeWindow
};

pub const CONFIG_ENV_VAR: &str =
  "ALMANAC_CONFIG";
pub const CONFIG_FILE_NAME: &str =
  "picker.toml";

/// Picker configuration. Every section and key is optional; unknown keys
/// are rejected.
#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Default,
  Serialize,
  Deserialize,
)]
#[serde(default, deny_unknown_fields)]
pub struct PickerConfig {
  pub version:    u32,
  pub calendar:   CalendarSection,
  pub time:       TimeSection,
  pub month_year: MonthYearSection
}

#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
#[serde(default, deny_unknown_fields)]
pub struct CalendarSection {
  pub mode:              SelectionMode,
  pub week_start:        WeekStart,
  pub show_outside_days: bool,
  pub required:          bool,
  pub disabled_dates:    DateBounds
}

impl Default for CalendarSection {
  fn default() -> Self {
    Self {
      mode:              SelectionMode::Single,
      week_start:        WeekStart::Sunday,
      show_outside_days: true,
      required:          false,
      disabled_dates:    DateBounds::default()
    }
  }
}

#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Default,
  Serialize,
  Deserialize,
)]
#[serde(default, deny_unknown_fields)]
pub struct TimeSection {
  pub enabled:         bool,
  pub format:          HourFormat,
  pub minute_step:     MinuteStep,
  pub initial:         TimeValue,
  pub disabled_before: Option<TimeValue>,
  pub disabled_after:  Option<TimeValue>
}

#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Default,
  Serialize,
  Deserialize,
)]
#[serde(default, deny_unknown_fields)]
pub struct MonthYearSection {
  pub enabled: bool
}

impl PickerConfig {
  pub fn from_toml_str(
    raw: &str
  ) -> Result<Self, PickerConfigError> {
    let config =
      toml::from_str::<PickerConfig>(raw)
        .map_err(|error| {
          PickerConfigError::Parse(
            error.to_string()
          )
        })?;
    config.validate()?;
    Ok(config)
  }

  /// Rejects windows that leave nothing selectable.
  pub fn validate(
    &self
  ) -> Result<(), PickerConfigError> {
    self.time_window()?;
    DateBounds::new(
      self.calendar.disabled_dates.before,
      self.calendar.disabled_dates.after
    )?;
    Ok(())
  }

  pub fn time_window(
    &self
  ) -> Result<TimeWindow, PickerConfigError>
  {
    TimeWindow::new(
      self.time.disabled_before,
      self.time.disabled_after
    )
  }

  pub fn time_selector_options(
    &self
  ) -> Result<
    TimeSelectorOptions,
    PickerConfigError
  > {
    Ok(TimeSelectorOptions {
      format:      self.time.format,
      minute_step: self.time.minute_step,
      window:      self.time_window()?
    })
  }

  #[must_use]
  pub fn grid_options(&self) -> GridOptions {
    GridOptions {
      week_start:        self
        .calendar
        .week_start,
      show_outside_days: self
        .calendar
        .show_outside_days,
      disabled:          self
        .calendar
        .disabled_dates
    }
  }

  #[must_use]
  pub fn shell_options(
    &self
  ) -> ShellOptions {
    ShellOptions {
      mode:                 self
        .calendar
        .mode,
      show_time_selector:   self
        .time
        .enabled,
      month_year_selection: self
        .month_year
        .enabled
    }
  }
}

#[derive(Debug, Clone)]
pub struct LoadedConfig {
  pub config: PickerConfig,
  pub source: Option<PathBuf>
}

#[tracing::instrument(skip(
  override_path
))]
pub fn load_config(
  override_path: Option<&Path>
) -> anyhow::Result<LoadedConfig> {
  let Some(path) =
    resolve_config_path(override_path)
  else {
    info!(
      "no picker config found; using \
       defaults"
    );
    return Ok(LoadedConfig {
      config: PickerConfig::default(),
      source: None
    });
  };

  let text = fs::read_to_string(&path)
    .with_context(|| {
      format!(
        "failed to read {}",
        path.display()
      )
    })?;
  let config =
    PickerConfig::from_toml_str(&text)
      .with_context(|| {
        format!(
          "invalid picker config {}",
          path.display()
        )
      })?;

  info!(
    config = %path.display(),
    version = config.version,
    "loaded picker config"
  );
  Ok(LoadedConfig {
    config,
    source: Some(path)
  })
}

/// `--config`, then `$ALMANAC_CONFIG`, then the user config directory.
pub fn resolve_config_path(
  override_path: Option<&Path>
) -> Option<PathBuf> {
  if let Some(path) = override_path {
    return Some(path.to_path_buf());
  }

  if let Ok(raw) =
    std::env::var(CONFIG_ENV_VAR)
    && !raw.trim().is_empty()
  {
    debug!(env = CONFIG_ENV_VAR, path = %raw, "config path from environment");
    return Some(PathBuf::from(raw));
  }

  let candidate = dirs::config_dir()?
    .join("almanac")
    .join(CONFIG_FILE_NAME);
  candidate.exists().then_some(candidate)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_document_uses_defaults() {
    let config =
      PickerConfig::from_toml_str("")
        .expect("empty config");
    assert_eq!(
      config,
      PickerConfig::default()
    );
    assert!(
      config.calendar.show_outside_days
    );
    assert_eq!(
      config.time.initial,
      TimeValue::DEFAULT
    );
  }

  #[test]
  fn parses_time_section() {
    let config = PickerConfig::from_toml_str(
      r#"
        [time]
        enabled = true
        format = "12"
        minute_step = 5
        disabled_before = "09:45"
        disabled_after = "6:45 pm"
      "#
    )
    .expect("valid config");

    let options = config
      .time_selector_options()
      .expect("ordered window");
    assert_eq!(
      options.format,
      HourFormat::Twelve
    );
    assert_eq!(options.minute_step.get(), 5);
    assert_eq!(
      options.window.after(),
      Some(
        TimeValue::new(18, 45)
          .expect("valid time")
      )
    );
  }

  #[test]
  fn rejects_unknown_keys_and_bad_values() {
    assert!(matches!(
      PickerConfig::from_toml_str(
        "[time]\nshow_seconds = true\n"
      ),
      Err(PickerConfigError::Parse(_))
    ));
    assert!(matches!(
      PickerConfig::from_toml_str(
        "[time]\nminute_step = 7\n"
      ),
      Err(PickerConfigError::Parse(_))
    ));
    assert!(matches!(
      PickerConfig::from_toml_str(
        "[time]\ndisabled_before = \
         \"18:00\"\ndisabled_after = \
         \"09:00\"\n"
      ),
      Err(
        PickerConfigError::InvertedTimeWindow { .. }
      )
    ));
  }
}
