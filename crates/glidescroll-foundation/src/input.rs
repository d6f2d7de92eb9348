//! Input events a slider reacts to.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    /// Pointer left the container; ends a drag like `Up`.
    Leave,
}

/// Everything the host forwards to a [`DraggableSlider`](crate::DraggableSlider).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SliderEvent {
    /// Mouse event at page coordinate `page_x`.
    Pointer { kind: PointerEventKind, page_x: f32 },
    /// Click somewhere inside the container.
    Click { on_link: bool },
    /// Native drag start somewhere inside the container.
    DragStart { on_link: bool },
    /// The snap-back transition finished.
    TransitionEnd,
}

impl SliderEvent {
    pub fn down(page_x: f32) -> Self {
        Self::Pointer {
            kind: PointerEventKind::Down,
            page_x,
        }
    }

    pub fn moved(page_x: f32) -> Self {
        Self::Pointer {
            kind: PointerEventKind::Move,
            page_x,
        }
    }

    pub fn up(page_x: f32) -> Self {
        Self::Pointer {
            kind: PointerEventKind::Up,
            page_x,
        }
    }

    pub fn leave(page_x: f32) -> Self {
        Self::Pointer {
            kind: PointerEventKind::Leave,
            page_x,
        }
    }
}
