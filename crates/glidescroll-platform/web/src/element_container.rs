use glidescroll_foundation::ScrollContainer;
use web_sys::HtmlElement;

/// A DOM element driven by a slider.
#[derive(Clone, Debug)]
pub struct ElementContainer {
    element: HtmlElement,
}

impl ElementContainer {
    pub fn new(element: HtmlElement) -> Self {
        Self { element }
    }

    pub fn element(&self) -> &HtmlElement {
        &self.element
    }
}

impl ScrollContainer for ElementContainer {
    fn scroll_left(&self) -> f32 {
        self.element.scroll_left() as f32
    }

    fn set_scroll_left(&self, value: f32) {
        self.element.set_scroll_left(scroll_left_px(value));
    }

    fn scroll_width(&self) -> f32 {
        self.element.scroll_width() as f32
    }

    fn client_width(&self) -> f32 {
        self.element.client_width() as f32
    }

    fn offset_left(&self) -> f32 {
        self.element.offset_left() as f32
    }

    fn set_class(&self, class: &str, enabled: bool) {
        if let Err(err) = self
            .element
            .class_list()
            .toggle_with_force(class, enabled)
        {
            log::error!("failed to toggle class {class}: {err:?}");
        }
    }

    fn set_translate_x(&self, offset: f32) {
        if let Err(err) = self
            .element
            .style()
            .set_property("transform", &translate_x_css(offset))
        {
            log::error!("failed to set transform: {err:?}");
        }
    }
}

/// web-sys exposes `scrollLeft` as `i32`, so fractional offsets are rounded
/// here instead of by the browser.
pub(crate) fn scroll_left_px(value: f32) -> i32 {
    value.round() as i32
}

/// Inline `transform` value for a horizontal displacement.
pub fn translate_x_css(offset: f32) -> String {
    // Normalise -0.0 so a reset reads "translateX(0px)".
    let offset = if offset == 0.0 { 0.0 } else { offset };
    format!("translateX({offset}px)")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_formats_without_sign() {
        assert_eq!(translate_x_css(0.0), "translateX(0px)");
        assert_eq!(translate_x_css(-0.0), "translateX(0px)");
    }

    #[test]
    fn scroll_writes_round_to_nearest_pixel() {
        assert_eq!(scroll_left_px(430.0), 430);
        assert_eq!(scroll_left_px(12.4), 12);
        assert_eq!(scroll_left_px(12.5), 13);
        assert_eq!(scroll_left_px(-0.4), 0);
    }

    #[test]
    fn fractional_offsets_keep_precision() {
        assert_eq!(translate_x_css(20.0), "translateX(20px)");
        assert_eq!(translate_x_css(-12.5), "translateX(-12.5px)");
    }
}
