//! Rubber-band resolution for drags past the scroll bounds.

/// Scroll offset and visual displacement for one drag position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragScroll {
    /// Offset to apply, always within `[0, max_scroll]`.
    pub scroll_left: f32,
    /// Horizontal translate for the bounce. Positive past the start edge,
    /// negative past the end edge, zero in bounds.
    pub overscroll: f32,
}

/// Splits a tentative scroll offset into an in-bounds scroll plus a damped
/// overscroll translate.
///
/// `max_scroll` below zero is treated as zero.
pub fn resolve_drag_scroll(tentative: f32, max_scroll: f32, damping: f32) -> DragScroll {
    let max_scroll = max_scroll.max(0.0);
    if tentative < 0.0 {
        DragScroll {
            scroll_left: 0.0,
            overscroll: -tentative / damping,
        }
    } else if tentative > max_scroll {
        DragScroll {
            scroll_left: max_scroll,
            overscroll: -(tentative - max_scroll) / damping,
        }
    } else {
        DragScroll {
            scroll_left: tentative,
            overscroll: 0.0,
        }
    }
}

#[cfg(test)]
#[path = "tests/overscroll_tests.rs"]
mod tests;
