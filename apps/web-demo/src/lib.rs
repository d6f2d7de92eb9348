//! Carousel demo: makes the story strip and the large profile row draggable.

use glidescroll_foundation::SliderConfig;

#[cfg(target_arch = "wasm32")]
mod web;

/// Rows made draggable when the page mounts.
pub const CAROUSEL_SELECTORS: [&str; 2] = [".row-estados-chicas", ".profile-row-large"];

/// Slider settings for the demo rows. Both rows share the stock feel.
pub fn carousel_config() -> SliderConfig {
    SliderConfig::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carousel_rows_use_stock_settings() {
        let config = carousel_config();
        assert_eq!(config.friction, 0.95);
        assert_eq!(config.overscroll_damping, 3.0);
        assert_eq!(config.active_class, "active");
        assert_eq!(config.snapping_class, "snapping");
    }

    #[test]
    fn both_rows_are_mounted() {
        assert!(CAROUSEL_SELECTORS.contains(&".row-estados-chicas"));
        assert!(CAROUSEL_SELECTORS.contains(&".profile-row-large"));
    }
}
