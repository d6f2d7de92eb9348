//! In-memory stand-in for a scrollable DOM element.

use glidescroll_foundation::ScrollContainer;
use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;

/// Mimics the parts of an `HTMLElement` a slider touches.
///
/// Like the browser, writes to `scroll_left` are clamped into
/// `[0, scroll_width - client_width]`. Every translate write is recorded so
/// tests can inspect the bounce history.
#[derive(Debug)]
pub struct FakeContainer {
    scroll_left: Cell<f32>,
    scroll_width: Cell<f32>,
    client_width: Cell<f32>,
    offset_left: Cell<f32>,
    classes: RefCell<BTreeSet<String>>,
    translate_history: RefCell<Vec<f32>>,
    scroll_writes: Cell<usize>,
}

impl FakeContainer {
    pub fn new(scroll_width: f32, client_width: f32) -> Self {
        Self {
            scroll_left: Cell::new(0.0),
            scroll_width: Cell::new(scroll_width),
            client_width: Cell::new(client_width),
            offset_left: Cell::new(0.0),
            classes: RefCell::new(BTreeSet::new()),
            translate_history: RefCell::new(Vec::new()),
            scroll_writes: Cell::new(0),
        }
    }

    pub fn with_scroll_left(self, value: f32) -> Self {
        self.scroll_left.set(value);
        self
    }

    pub fn with_offset_left(self, value: f32) -> Self {
        self.offset_left.set(value);
        self
    }

    /// Simulates content being added or removed.
    pub fn resize_content(&self, scroll_width: f32) {
        self.scroll_width.set(scroll_width);
        let max = self.max_scroll_left();
        if self.scroll_left.get() > max {
            self.scroll_left.set(max);
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.borrow().contains(class)
    }

    pub fn classes(&self) -> Vec<String> {
        self.classes.borrow().iter().cloned().collect()
    }

    /// Last translate written, 0.0 if none.
    pub fn translate_x(&self) -> f32 {
        self.translate_history.borrow().last().copied().unwrap_or(0.0)
    }

    pub fn translate_history(&self) -> Vec<f32> {
        self.translate_history.borrow().clone()
    }

    /// Inline style as the browser would render it.
    pub fn transform_css(&self) -> String {
        format!("translateX({}px)", self.translate_x())
    }

    pub fn scroll_writes(&self) -> usize {
        self.scroll_writes.get()
    }
}

impl ScrollContainer for FakeContainer {
    fn scroll_left(&self) -> f32 {
        self.scroll_left.get()
    }

    fn set_scroll_left(&self, value: f32) {
        self.scroll_writes.set(self.scroll_writes.get() + 1);
        self.scroll_left.set(value.clamp(0.0, self.max_scroll_left()));
    }

    fn scroll_width(&self) -> f32 {
        self.scroll_width.get()
    }

    fn client_width(&self) -> f32 {
        self.client_width.get()
    }

    fn offset_left(&self) -> f32 {
        self.offset_left.get()
    }

    fn set_class(&self, class: &str, enabled: bool) {
        let mut classes = self.classes.borrow_mut();
        if enabled {
            classes.insert(class.to_string());
        } else {
            classes.remove(class);
        }
    }

    fn set_translate_x(&self, offset: f32) {
        self.translate_history.borrow_mut().push(offset);
    }
}
