use almanac_core::grid::{
  DateBounds,
  DayClassNames,
  GridOptions,
  WeekStart,
  month_grid,
  weekday_labels
};
use almanac_core::month::DisplayedMonth;
use almanac_core::selection::{
  DateSelection,
  SelectionMode,
  apply_day_click
};
use chrono::{
  Datelike,
  Local,
  NaiveDate
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct DayGridProps {
  pub month:             DisplayedMonth,
  #[prop_or_default]
  pub mode:              SelectionMode,
  #[prop_or_default]
  pub selected:          Option<DateSelection>,
  pub on_select:
    Callback<Option<DateSelection>>,
  /// Requested when an outside day is clicked.
  #[prop_or_default]
  pub on_month_change:   Callback<DisplayedMonth>,
  #[prop_or(true)]
  pub show_outside_days: bool,
  #[prop_or_default]
  pub week_start:        WeekStart,
  #[prop_or_default]
  pub disabled_dates:    DateBounds,
  #[prop_or_default]
  pub required:          bool,
  #[prop_or_default]
  pub class_names:       DayClassNames,
  /// Fixed "today" for deterministic rendering; the local date otherwise.
  #[prop_or_default]
  pub today:             Option<NaiveDate>
}

#[function_component(DayGrid)]
pub fn day_grid(
  props: &DayGridProps
) -> Html {
  let options = GridOptions {
    week_start:        props.week_start,
    show_outside_days: props
      .show_outside_days,
    disabled:          props.disabled_dates
  };
  let today = props.today.unwrap_or_else(
    || Local::now().date_naive()
  );
  let weeks = month_grid(
    props.month,
    &options,
    props.selected.as_ref(),
    today
  );

  let header = weekday_labels(
    props.week_start
  )
  .into_iter()
  .map(|label| {
    html! {
        <th class="calendar-weekday" scope="col">{ label }</th>
    }
  })
  .collect::<Html>();

  let rows = weeks
    .into_iter()
    .map(|week| {
      let cells = week
        .into_iter()
        .map(|cell| {
          let class = props
            .class_names
            .class_for(&cell.roles);
          if cell.roles.hidden {
            return html! {
                <td class="calendar-cell"><span class={class}></span></td>
            };
          }

          let on_click = {
            let on_select =
              props.on_select.clone();
            let on_month_change =
              props.on_month_change.clone();
            let mode = props.mode;
            let selected = props.selected;
            let required = props.required;
            move |_: MouseEvent| {
              if !cell.is_interactive() {
                return;
              }
              let next = apply_day_click(
                mode,
                selected.as_ref(),
                cell.date,
                required
              );
              tracing::debug!(day = %cell.date, selection = ?next, "day clicked");
              on_select.emit(next);
              if cell.roles.outside {
                on_month_change.emit(
                  DisplayedMonth::from_date(
                    cell.date
                  )
                );
              }
            }
          };

          html! {
              <td class="calendar-cell">
                  <button
                      type="button"
                      class={class}
                      disabled={cell.roles.disabled}
                      aria-selected={cell.roles.selected.to_string()}
                      onclick={on_click}
                  >
                      { cell.date.day() }
                  </button>
              </td>
          }
        })
        .collect::<Html>();
      html! { <tr>{ cells }</tr> }
    })
    .collect::<Html>();

  html! {
      <table class="calendar-grid" role="grid">
          <thead><tr>{ header }</tr></thead>
          <tbody>{ rows }</tbody>
      </table>
  }
}
