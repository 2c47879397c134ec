use almanac_core::time::{
  DayPeriod,
  HourFormat,
  MinuteStep,
  TimeSelectorModel,
  TimeSelectorOptions,
  TimeValue,
  TimeWindow
};
use yew::{
  Callback,
  Html,
  Properties,
  classes,
  function_component,
  html,
  use_effect_with,
  use_memo,
  use_node_ref,
  use_state_eq
};

use super::scroll::use_scroll_to_selected;

#[derive(Properties, PartialEq)]
pub struct TimeSelectorProps {
  pub value:           TimeValue,
  pub on_change:       Callback<TimeValue>,
  #[prop_or_default]
  pub format:          HourFormat,
  #[prop_or(u32::from(
    MinuteStep::DEFAULT.get()
  ))]
  pub minute_step:     u32,
  #[prop_or_default]
  pub disabled_before: Option<TimeValue>,
  #[prop_or_default]
  pub disabled_after:  Option<TimeValue>
}

fn selector_options(
  format: HourFormat,
  minute_step: u32,
  disabled_before: Option<TimeValue>,
  disabled_after: Option<TimeValue>
) -> TimeSelectorOptions {
  let minute_step = MinuteStep::new(
    minute_step
  )
  .unwrap_or_else(|error| {
    tracing::error!(%error, "invalid minute step; using default");
    MinuteStep::DEFAULT
  });
  let window = TimeWindow::new(
    disabled_before,
    disabled_after
  )
  .unwrap_or_else(|error| {
    tracing::error!(%error, "invalid disabled time window; leaving every time enabled");
    TimeWindow::unbounded()
  });

  TimeSelectorOptions {
    format,
    minute_step,
    window
  }
}

/// `<prefix>-selected`, `<prefix>-disabled` or `<prefix>-default`. A cell
/// that is both selected and disabled renders as disabled.
pub(super) fn cell_state_class(
  prefix: &str,
  selected: bool,
  disabled: bool
) -> String {
  let state = match (selected, disabled) {
    | (_, true) => "disabled",
    | (true, false) => "selected",
    | (false, false) => "default"
  };
  format!("{prefix}-{state}")
}

#[function_component(TimeSelector)]
pub fn time_selector(
  props: &TimeSelectorProps
) -> Html {
  let shadow = use_state_eq(|| props.value);
  let hour_column = use_node_ref();
  let minute_column = use_node_ref();

  let options = *use_memo(
    (
      props.format,
      props.minute_step,
      props.disabled_before,
      props.disabled_after
    ),
    |(format, step, before, after)| {
      selector_options(
        *format, *step, *before, *after
      )
    }
  );

  {
    let shadow = shadow.clone();
    use_effect_with(
      props.value,
      move |value| {
        let mut model =
          TimeSelectorModel::new(
            options, *shadow
          );
        if model.sync_value(*value) {
          shadow.set(model.value());
        }
        || ()
      }
    );
  }

  let model =
    TimeSelectorModel::new(options, *shadow);

  use_scroll_to_selected(
    hour_column.clone(),
    model.selected_hour_index()
  );
  use_scroll_to_selected(
    minute_column.clone(),
    model.selected_minute_index()
  );

  let commit = {
    let shadow = shadow.clone();
    let on_change = props.on_change.clone();
    move |next: Option<TimeValue>| {
      if let Some(next) = next {
        tracing::debug!(value = %next, "time selected");
        shadow.set(next);
        on_change.emit(next);
      }
    }
  };

  let hour_cells = model
    .hour_cells()
    .into_iter()
    .map(|cell| {
      let model = model.clone();
      let commit = commit.clone();
      let label = cell.value;
      html! {
          <button
              type="button"
              class={classes!(
                  "time-cell",
                  cell_state_class("time-cell", cell.selected, cell.disabled)
              )}
              disabled={cell.disabled}
              onclick={move |_| {
                  let mut model = model.clone();
                  commit(model.select_hour(label))
              }}
          >
              { cell.label }
          </button>
      }
    })
    .collect::<Html>();

  let minute_cells = model
    .minute_cells()
    .into_iter()
    .map(|cell| {
      let model = model.clone();
      let commit = commit.clone();
      let minute = cell.value;
      html! {
          <button
              type="button"
              class={classes!(
                  "time-cell",
                  cell_state_class("time-cell", cell.selected, cell.disabled)
              )}
              disabled={cell.disabled}
              onclick={move |_| {
                  let mut model = model.clone();
                  commit(model.select_minute(minute))
              }}
          >
              { cell.label }
          </button>
      }
    })
    .collect::<Html>();

  let period_cells = model.period_cells();
  let period_column = if period_cells
    .is_empty()
  {
    Html::default()
  } else {
    let cells = period_cells
      .into_iter()
      .map(|cell| {
        let model = model.clone();
        let commit = commit.clone();
        let period: DayPeriod = cell.period;
        html! {
            <button
                type="button"
                class={classes!(
                    "time-cell",
                    cell_state_class("time-cell", cell.selected, cell.disabled)
                )}
                disabled={cell.disabled}
                onclick={move |_| {
                    let mut model = model.clone();
                    commit(model.select_period(period))
                }}
            >
                { period.label() }
            </button>
        }
      })
      .collect::<Html>();
    html! {
        <div class="time-column time-column-period">{ cells }</div>
    }
  };

  html! {
      <div class="time-selector">
          <div class="time-selector-header">
              <span>{ props.format.header() }</span>
              <span>{ "MM" }</span>
          </div>
          <div class="time-selector-columns">
              <div class="time-column" ref={hour_column}>{ hour_cells }</div>
              <div class="time-column" ref={minute_column}>{ minute_cells }</div>
              { period_column }
          </div>
      </div>
  }
}

#[cfg(test)]
mod tests {
  use almanac_core::time::TimeCell;

  use super::*;

  #[test]
  fn every_cell_gets_exactly_one_state_class() {
    assert_eq!(
      cell_state_class("time-cell", true, false),
      "time-cell-selected"
    );
    assert_eq!(
      cell_state_class("time-cell", false, true),
      "time-cell-disabled"
    );
    assert_eq!(
      cell_state_class("time-cell", true, true),
      "time-cell-disabled"
    );
    assert_eq!(
      cell_state_class("time-cell", false, false),
      "time-cell-default"
    );
  }

  #[test]
  fn bounded_hour_column_marks_default_cells() {
    let options = selector_options(
      HourFormat::TwentyFour,
      15,
      "09:45".parse().ok(),
      "18:45".parse().ok()
    );
    let model = TimeSelectorModel::new(
      options,
      TimeValue::DEFAULT
    );
    let classes = model
      .hour_cells()
      .iter()
      .map(|cell: &TimeCell| {
        cell_state_class(
          "time-cell",
          cell.selected,
          cell.disabled
        )
      })
      .collect::<Vec<_>>();
    assert_eq!(classes[9], "time-cell-disabled");
    assert_eq!(classes[10], "time-cell-selected");
    assert_eq!(classes[11], "time-cell-default");
    assert_eq!(
      classes
        .iter()
        .filter(|class| class.ends_with("-default"))
        .count(),
      8
    );
  }
}
