use almanac_core::config::PickerConfig;
use almanac_core::selection::{
  DateRange,
  DateSelection,
  SelectionMode
};
use almanac_core::time::TimeValue;
use chrono::NaiveDate;
use yew::{
  Callback,
  Html,
  Properties,
  UseStateHandle,
  function_component,
  html,
  use_state
};

use crate::components::Calendar;
use crate::config::load_picker_config;

fn preset_range() -> Option<DateSelection> {
  let from =
    NaiveDate::from_ymd_opt(2025, 5, 11)?;
  let to =
    NaiveDate::from_ymd_opt(2025, 5, 14)?;
  Some(DateSelection::Range(
    DateRange::closed(from, to)
  ))
}

fn describe(
  selection: Option<&DateSelection>
) -> String {
  selection.map_or_else(
    || "nothing selected".to_string(),
    ToString::to_string
  )
}

#[derive(Properties, PartialEq)]
struct DemoPanelProps {
  title:    &'static str,
  readout:  String,
  children: Html
}

#[function_component(DemoPanel)]
fn demo_panel(
  props: &DemoPanelProps
) -> Html {
  html! {
      <section class="demo-panel">
          <h2 class="demo-title">{ props.title }</h2>
          { props.children.clone() }
          <p class="demo-readout">{ props.readout.clone() }</p>
      </section>
  }
}

#[function_component(Demo)]
pub fn demo() -> Html {
  let config =
    use_state(load_picker_config);

  let range = use_state(preset_range);
  let single = use_state(|| None::<DateSelection>);
  let single_time =
    use_state(TimeValue::default);
  let bounded = use_state(|| None::<DateSelection>);
  let bounded_time = {
    let initial = config.time.initial;
    use_state(move || initial)
  };

  let store_selection =
    |handle: &UseStateHandle<
      Option<DateSelection>
    >| {
      let handle = handle.clone();
      Callback::from(move |next| {
        handle.set(next)
      })
    };
  let store_time =
    |handle: &UseStateHandle<TimeValue>| {
      let handle = handle.clone();
      Callback::from(move |next| {
        handle.set(next)
      })
    };

  let picker: &PickerConfig = &config;
  let week_start =
    picker.calendar.week_start;
  let show_outside_days =
    picker.calendar.show_outside_days;
  let disabled_dates =
    picker.calendar.disabled_dates;

  html! {
      <main class="demo">
          <DemoPanel
              title="Range"
              readout={describe((*range).as_ref())}
          >
              <Calendar
                  mode={SelectionMode::Range}
                  selected={*range}
                  on_select={store_selection(&range)}
                  {week_start}
                  {show_outside_days}
                  {disabled_dates}
              />
          </DemoPanel>
          <DemoPanel
              title="Single date and time"
              readout={format!("{} at {}", describe((*single).as_ref()), *single_time)}
          >
              <Calendar
                  mode={SelectionMode::Single}
                  selected={*single}
                  on_select={store_selection(&single)}
                  show_time_selector={true}
                  time_value={*single_time}
                  on_time_change={store_time(&single_time)}
                  {week_start}
                  {show_outside_days}
                  {disabled_dates}
              />
          </DemoPanel>
          <DemoPanel
              title="Bounded time with month and year picking"
              readout={format!("{} at {}", describe((*bounded).as_ref()), *bounded_time)}
          >
              <Calendar
                  mode={picker.calendar.mode}
                  selected={*bounded}
                  on_select={store_selection(&bounded)}
                  required={picker.calendar.required}
                  show_time_selector={picker.time.enabled}
                  time_value={*bounded_time}
                  on_time_change={store_time(&bounded_time)}
                  time_format={picker.time.format}
                  minute_step={u32::from(picker.time.minute_step)}
                  disabled_before={picker.time.disabled_before}
                  disabled_after={picker.time.disabled_after}
                  enable_month_year_selection={picker.month_year.enabled}
                  {week_start}
                  {show_outside_days}
                  {disabled_dates}
              />
          </DemoPanel>
      </main>
  }
}
