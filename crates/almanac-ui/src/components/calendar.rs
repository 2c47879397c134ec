//! The calendar shell: a day grid with a custom caption, plus either the
//! time selector or the month/year selector beside it.

use almanac_core::grid::{
  DateBounds,
  DayClassNames,
  WeekStart
};
use almanac_core::month::DisplayedMonth;
use almanac_core::selection::{
  DateSelection,
  SelectionMode
};
use almanac_core::shell::{
  GateDiagnostics,
  ShellEvent,
  ShellOptions,
  ShellState,
  SidePanel,
  TimeSelectorGate
};
use almanac_core::time::{
  HourFormat,
  MinuteStep,
  TimeValue
};
use chrono::Local;
use yew::{
  Callback,
  Html,
  KeyboardEvent,
  MouseEvent,
  Properties,
  function_component,
  html,
  use_effect_with,
  use_mut_ref,
  use_reducer_eq
};

use super::day_grid::DayGrid;
use super::month_year_selector::MonthYearSelector;
use super::shell_store::ShellStore;
use super::time_selector::TimeSelector;

#[derive(Properties, PartialEq)]
pub struct CalendarProps {
  #[prop_or_default]
  pub mode:              SelectionMode,
  #[prop_or_default]
  pub selected:          Option<DateSelection>,
  pub on_select:
    Callback<Option<DateSelection>>,

  /// Caller-controlled month. Adopted whenever it changes.
  #[prop_or_default]
  pub month:             Option<DisplayedMonth>,
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

  #[prop_or_default]
  pub show_time_selector: bool,
  #[prop_or_default]
  pub time_value:         TimeValue,
  #[prop_or_default]
  pub on_time_change:     Callback<TimeValue>,
  #[prop_or_default]
  pub time_format:        HourFormat,
  #[prop_or(u32::from(
    MinuteStep::DEFAULT.get()
  ))]
  pub minute_step:        u32,
  #[prop_or_default]
  pub disabled_before:    Option<TimeValue>,
  #[prop_or_default]
  pub disabled_after:     Option<TimeValue>,

  #[prop_or_default]
  pub enable_month_year_selection: bool
}

impl CalendarProps {
  fn shell_options(&self) -> ShellOptions {
    ShellOptions {
      mode:                 self.mode,
      show_time_selector:   self
        .show_time_selector,
      month_year_selection: self
        .enable_month_year_selection
    }
  }

  /// Explicit month, else the selection's month, else today's.
  fn initial_month(&self) -> DisplayedMonth {
    self.month.unwrap_or_else(|| {
      DisplayedMonth::from_date(
        self.selected.as_ref().map_or_else(
          || Local::now().date_naive(),
          DateSelection::anchor
        )
      )
    })
  }
}

#[derive(Properties, PartialEq)]
struct CaptionProps {
  month:       DisplayedMonth,
  month_year:  bool,
  on_event:    Callback<ShellEvent>
}

#[function_component(CalendarCaption)]
fn calendar_caption(
  props: &CaptionProps
) -> Html {
  let emit = |event: ShellEvent| {
    let on_event = props.on_event.clone();
    Callback::from(move |_: MouseEvent| {
      on_event.emit(event)
    })
  };
  let month_label =
    props.month.abbreviation();
  let year_label =
    props.month.year().to_string();

  let labels = if props.month_year {
    html! {
        <>
            <button type="button" class="caption-label caption-label-button" onclick={emit(ShellEvent::OpenMonthYear)}>{ month_label }</button>
            <button type="button" class="caption-label caption-label-button" onclick={emit(ShellEvent::OpenMonthYear)}>{ year_label }</button>
        </>
    }
  } else {
    html! {
        <>
            <span class="caption-label">{ month_label }</span>
            <span class="caption-label">{ year_label }</span>
        </>
    }
  };

  html! {
      <div class="calendar-caption">
          <button type="button" class="calendar-nav-button nav-previous" title="Previous month" onclick={emit(ShellEvent::PrevMonth)}>{ "<" }</button>
          <div class="caption-labels">{ labels }</div>
          <button type="button" class="calendar-nav-button nav-next" title="Next month" onclick={emit(ShellEvent::NextMonth)}>{ ">" }</button>
      </div>
  }
}

#[function_component(Calendar)]
pub fn calendar(
  props: &CalendarProps
) -> Html {
  let options = props.shell_options();
  let shell = use_reducer_eq(|| {
    ShellStore(ShellState::new(
      props.initial_month()
    ))
  });
  let diagnostics =
    use_mut_ref(GateDiagnostics::default);

  {
    let shell = shell.clone();
    use_effect_with(
      props.month,
      move |month| {
        if let Some(month) = *month
          && month
            != shell.0.displayed_month()
        {
          shell.dispatch((
            ShellEvent::Adopt(month),
            options
          ));
        }
        || ()
      }
    );
  }

  {
    let on_month_change =
      props.on_month_change.clone();
    let displayed =
      shell.0.displayed_month();
    use_effect_with(
      shell.0.moves(),
      move |moves| {
        if *moves > 0 {
          on_month_change.emit(displayed);
        }
        || ()
      }
    );
  }

  {
    let gate =
      TimeSelectorGate::for_options(&options);
    use_effect_with(gate, move |gate| {
      if cfg!(debug_assertions)
        && let Some(message) =
          diagnostics.borrow_mut().observe(*gate)
      {
        tracing::warn!("{message}");
      }
      || ()
    });
  }

  let on_event = {
    let dispatcher = shell.dispatcher();
    Callback::from(move |event: ShellEvent| {
      dispatcher.dispatch((event, options))
    })
  };

  let on_keydown = {
    let on_event = on_event.clone();
    let open =
      shell.0.is_month_year_open();
    Callback::from(move |event: KeyboardEvent| {
      if open && event.key() == "Escape" {
        on_event.emit(
          ShellEvent::CloseMonthYear
        );
      }
    })
  };

  let on_grid_month = {
    let on_event = on_event.clone();
    Callback::from(move |month: DisplayedMonth| {
      on_event.emit(
        ShellEvent::PickMonthYear(month)
      )
    })
  };

  let displayed =
    shell.0.displayed_month();
  let side_panel = match shell
    .0
    .side_panel(&options)
  {
    | SidePanel::MonthYear => {
      let on_select = on_grid_month.clone();
      let on_close = {
        let on_event = on_event.clone();
        Callback::from(move |()| {
          on_event.emit(
            ShellEvent::CloseMonthYear
          )
        })
      };
      html! {
          <MonthYearSelector reference={displayed} {on_select} {on_close} />
      }
    }
    | SidePanel::TimeSelector => {
      html! {
          <TimeSelector
              value={props.time_value}
              on_change={props.on_time_change.clone()}
              format={props.time_format}
              minute_step={props.minute_step}
              disabled_before={props.disabled_before}
              disabled_after={props.disabled_after}
          />
      }
    }
    | SidePanel::None => Html::default()
  };

  html! {
      <div class="calendar-shell" onkeydown={on_keydown}>
          <div class="calendar-main">
              <CalendarCaption
                  month={displayed}
                  month_year={options.month_year_selection}
                  on_event={on_event}
              />
              <DayGrid
                  month={displayed}
                  mode={props.mode}
                  selected={props.selected}
                  on_select={props.on_select.clone()}
                  on_month_change={on_grid_month}
                  show_outside_days={props.show_outside_days}
                  week_start={props.week_start}
                  disabled_dates={props.disabled_dates}
                  required={props.required}
                  class_names={props.class_names.clone()}
              />
          </div>
          { side_panel }
      </div>
  }
}
