use almanac_core::config::PickerConfig;

const PICKER_CONFIG_TOML: &str =
  include_str!("../config/picker.toml");

/// Embedded picker config; defaults when it fails to parse or validate.
pub fn load_picker_config()
-> PickerConfig {
  match PickerConfig::from_toml_str(
    PICKER_CONFIG_TOML
  ) {
    | Ok(config) => {
      tracing::info!(
        version = config.version,
        week_start = %config.calendar.week_start.as_key(),
        minute_step = config.time.minute_step.get(),
        "loaded picker config"
      );
      config
    }
    | Err(error) => {
      tracing::error!(%error, "failed parsing picker config; using defaults");
      PickerConfig::default()
    }
  }
}
