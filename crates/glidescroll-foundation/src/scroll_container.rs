//! The surface a slider drives.

/// A horizontally scrollable element.
///
/// Methods take `&self` because the backing element (a DOM node, a test
/// double) carries its own interior mutability. All lengths are logical
/// pixels.
pub trait ScrollContainer {
    /// Current horizontal scroll offset.
    fn scroll_left(&self) -> f32;

    fn set_scroll_left(&self, value: f32);

    /// Full content width.
    fn scroll_width(&self) -> f32;

    /// Visible width.
    fn client_width(&self) -> f32;

    /// Left edge of the container relative to its offset parent.
    fn offset_left(&self) -> f32;

    /// Adds (`enabled`) or removes a CSS class.
    fn set_class(&self, class: &str, enabled: bool);

    /// Visual horizontal displacement applied on top of scrolling.
    fn set_translate_x(&self, offset: f32);

    /// Largest valid scroll offset. Content narrower than the viewport
    /// yields 0 rather than a negative range.
    fn max_scroll_left(&self) -> f32 {
        (self.scroll_width() - self.client_width()).max(0.0)
    }
}

impl<C: ScrollContainer + ?Sized> ScrollContainer for std::rc::Rc<C> {
    fn scroll_left(&self) -> f32 {
        (**self).scroll_left()
    }

    fn set_scroll_left(&self, value: f32) {
        (**self).set_scroll_left(value)
    }

    fn scroll_width(&self) -> f32 {
        (**self).scroll_width()
    }

    fn client_width(&self) -> f32 {
        (**self).client_width()
    }

    fn offset_left(&self) -> f32 {
        (**self).offset_left()
    }

    fn set_class(&self, class: &str, enabled: bool) {
        (**self).set_class(class, enabled)
    }

    fn set_translate_x(&self, offset: f32) {
        (**self).set_translate_x(offset)
    }
}
