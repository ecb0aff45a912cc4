//! Viewport windowing: which contiguous slice of a list fits on screen.

use std::ops::Range;

/// Half-open `[start, end)` slice of a list to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Window {
    pub start: usize,
    pub end: usize,
}

impl Window {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub const fn contains(&self, index: usize) -> bool {
        self.start <= index && index < self.end
    }

    pub const fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Compute the visible window of a list centred on `cursor`.
///
/// `available_rows == 0` means the viewport size is unknown, so everything is
/// shown. When not even one item fits, the cursor item is shown alone.
pub fn window(total: usize, cursor: usize, rows_per_item: usize, available_rows: usize) -> Window {
    if total == 0 {
        return Window::default();
    }
    debug_assert!(cursor < total, "cursor {cursor} out of bounds for {total} items");
    let cursor = cursor.min(total - 1);

    if available_rows == 0 {
        return Window::new(0, total);
    }

    let max_visible = available_rows / rows_per_item.max(1);
    if max_visible == 0 {
        return Window::new(cursor, cursor + 1);
    }
    if max_visible >= total {
        return Window::new(0, total);
    }

    // Centre first, then pull back inside the tail so the window stays full.
    let mut start = cursor.saturating_sub(max_visible / 2);
    let mut end = start + max_visible;
    if end > total {
        end = total;
        start = end.saturating_sub(max_visible);
    }
    Window::new(start, end)
}
