use almanac_core::scroll::{
  ColumnGeometry,
  SCROLL_SETTLE_DELAY_MS
};
use gloo::timers::callback::Timeout;
use web_sys::{
  Element,
  ScrollBehavior,
  ScrollToOptions
};
use yew::{
  NodeRef,
  hook,
  use_effect_with
};

/// Smooth-scrolls `column` so row `index` sits in the middle of the
/// viewport, shortly after mount and whenever `index` changes.
#[hook]
pub fn use_scroll_to_selected(
  column: NodeRef,
  index: Option<usize>
) {
  use_effect_with(index, move |index| {
    let timeout = index.map(|index| {
      Timeout::new(
        SCROLL_SETTLE_DELAY_MS,
        move || scroll_column(&column, index)
      )
    });
    move || drop(timeout)
  });
}

fn scroll_column(
  column: &NodeRef,
  index: usize
) {
  let Some(element) =
    column.cast::<Element>()
  else {
    tracing::trace!(
      index,
      "scroll column detached"
    );
    return;
  };

  let top = ColumnGeometry::default()
    .centered_offset(index);
  let options = ScrollToOptions::new();
  options.set_top(top);
  options.set_behavior(
    ScrollBehavior::Smooth
  );
  element
    .scroll_to_with_scroll_to_options(
      &options
    );
}
