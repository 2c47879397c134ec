/// Delay before auto-scrolling a column, letting layout settle first.
pub const SCROLL_SETTLE_DELAY_MS: u32 =
  100;

/// Fixed geometry of a scrollable selector column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnGeometry {
  /// Row height plus the gap below it.
  pub cell_height:     f64,
  pub viewport_height: f64
}

impl Default for ColumnGeometry {
  fn default() -> Self {
    Self {
      cell_height:     46.0,
      viewport_height: 280.0
    }
  }
}

impl ColumnGeometry {
  /// Scroll offset that centres row `index` in the viewport, clamped at
  /// the top.
  #[must_use]
  pub fn centered_offset(
    &self,
    index: usize
  ) -> f64 {
    let offset = index as f64
      * self.cell_height
      - self.viewport_height / 2.0
      + self.cell_height / 2.0;
    offset.max(0.0)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn first_rows_clamp_to_top() {
    let geometry = ColumnGeometry::default();
    assert_eq!(geometry.centered_offset(0), 0.0);
    assert_eq!(geometry.centered_offset(2), 0.0);
    assert_eq!(
      geometry.centered_offset(10),
      10.0 * 46.0 - 140.0 + 23.0
    );
  }
}
