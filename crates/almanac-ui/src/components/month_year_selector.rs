use almanac_core::month::{
  DisplayedMonth,
  MonthYearWindow
};
use yew::{
  Callback,
  Html,
  Properties,
  classes,
  function_component,
  html,
  use_node_ref
};

use super::scroll::use_scroll_to_selected;
use super::time_selector::cell_state_class;

#[derive(Properties, PartialEq)]
pub struct MonthYearSelectorProps {
  pub reference: DisplayedMonth,
  pub on_select: Callback<DisplayedMonth>,
  pub on_close:  Callback<()>
}

#[function_component(MonthYearSelector)]
pub fn month_year_selector(
  props: &MonthYearSelectorProps
) -> Html {
  let window =
    MonthYearWindow::new(props.reference);
  let month_column = use_node_ref();
  let year_column = use_node_ref();

  use_scroll_to_selected(
    month_column.clone(),
    Some(window.selected_month_index())
  );
  use_scroll_to_selected(
    year_column.clone(),
    window.selected_year_index()
  );

  let finish = {
    let on_select = props.on_select.clone();
    let on_close = props.on_close.clone();
    move |month: DisplayedMonth| {
      on_select.emit(month);
      on_close.emit(());
    }
  };

  let months = window
    .months()
    .into_iter()
    .enumerate()
    .map(|(index, label)| {
      let finish = finish.clone();
      let selected =
        index == window.selected_month_index();
      let month0 = index as u32;
      html! {
          <button
              type="button"
              class={classes!(
                  "month-year-cell",
                  cell_state_class("month-year-cell", selected, false)
              )}
              onclick={move |_| {
                  match window.pick_month(month0) {
                      | Ok(month) => finish(month),
                      | Err(error) => {
                          tracing::error!(%error, "month pick rejected");
                      }
                  }
              }}
          >
              { label }
          </button>
      }
    })
    .collect::<Html>();

  let years = window
    .years()
    .into_iter()
    .map(|year| {
      let finish = finish.clone();
      let selected =
        year == props.reference.year();
      html! {
          <button
              type="button"
              class={classes!(
                  "month-year-cell",
                  cell_state_class("month-year-cell", selected, false)
              )}
              onclick={move |_| finish(window.pick_year(year))}
          >
              { year }
          </button>
      }
    })
    .collect::<Html>();

  html! {
      <div class="month-year-selector">
          <div class="time-selector-header">
              <span>{ "MM" }</span>
              <span>{ "YY" }</span>
          </div>
          <div class="month-year-columns">
              <div class="month-year-column" ref={month_column}>{ months }</div>
              <div class="month-year-column" ref={year_column}>{ years }</div>
          </div>
      </div>
  }
}
