//! Scroll window over the visible rows of the list.
//!
//! Positions are counted in rows among the *visible* rows only; hidden rows
//! take no space.

/// A fixed-height window over a list of rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    height: usize,
    offset: usize,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(5)
    }
}

impl Viewport {
    /// Creates a viewport showing `height` rows (at least one).
    #[must_use]
    pub fn new(height: usize) -> Self {
        Self {
            height: height.max(1),
            offset: 0,
        }
    }

    /// Number of rows the window shows.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Index of the first visible row in the window.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Scrolls so the row at `position` sits on the bottom edge of the window.
    ///
    /// Rows near the top cannot be bottom-aligned and leave the window at
    /// offset zero.
    pub fn align_bottom(&mut self, position: usize) {
        self.offset = (position + 1).saturating_sub(self.height);
    }

    /// Clamps the offset after the number of rows changed.
    pub fn clamp(&mut self, total: usize) {
        self.offset = self.offset.min(total.saturating_sub(self.height));
    }

    /// Scrolls back to the top.
    pub fn reset(&mut self) {
        self.offset = 0;
    }

    /// The range of positions currently inside the window.
    #[must_use]
    pub fn window(&self, total: usize) -> std::ops::Range<usize> {
        let start = self.offset.min(total);
        start..(start + self.height).min(total)
    }

    /// Maps a line inside the window to a position, if a row is drawn there.
    #[must_use]
    pub fn position_at_line(&self, line: usize, total: usize) -> Option<usize> {
        let position = self.offset + line;
        (line < self.height && position < total).then_some(position)
    }
}
