mod calendar;
mod day_grid;
mod month_year_selector;
mod scroll;
mod shell_store;
mod time_selector;

pub use calendar::Calendar;
