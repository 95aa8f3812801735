use std::time::Duration;

use web_sys::ScrollLogicalPosition;

/// Where the target section lands after a navigation scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollAlign {
    #[default]
    Start,
    Center,
    End,
    Nearest,
}

impl From<ScrollAlign> for ScrollLogicalPosition {
    fn from(align: ScrollAlign) -> Self {
        match align {
            ScrollAlign::Start => Self::Start,
            ScrollAlign::Center => Self::Center,
            ScrollAlign::End => Self::End,
            ScrollAlign::Nearest => Self::Nearest,
        }
    }
}

/// Page behaviour settings. Server and browser settings come from
/// `[package.metadata.leptos]` instead.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    /// Active section before the first scroll sample.
    pub default_section: &'static str,
    /// Pixels added to the scroll offset to account for the fixed header.
    pub activation_margin: f64,
    /// How long the loading splash stays up after mount.
    pub splash: Duration,
    pub scroll_align: ScrollAlign,
    /// Maximum travel, in pixels, of the nearest parallax layer.
    pub parallax_depth: f64,
}

impl SiteConfig {
    pub const fn new() -> Self {
        Self {
            default_section: "home",
            activation_margin: 100.0,
            splash: Duration::from_millis(2000),
            scroll_align: ScrollAlign::Start,
            parallax_depth: 24.0,
        }
    }

    pub fn splash_ms(&self) -> f64 {
        self.splash.as_millis() as f64
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::NAV_ITEMS;

    #[test]
    fn test_default_section_is_first_nav_item() {
        let config = SiteConfig::default();
        assert_eq!(config.default_section, NAV_ITEMS[0].id);
    }

    #[test]
    fn test_scroll_align_maps_to_block_position() {
        assert_eq!(ScrollAlign::default(), ScrollAlign::Start);
        let cases = [
            (ScrollAlign::Start, ScrollLogicalPosition::Start),
            (ScrollAlign::Center, ScrollLogicalPosition::Center),
            (ScrollAlign::End, ScrollLogicalPosition::End),
            (ScrollAlign::Nearest, ScrollLogicalPosition::Nearest),
        ];
        for (align, block) in cases {
            assert_eq!(ScrollLogicalPosition::from(align), block);
        }
    }

    #[test]
    fn test_build_time_is_rfc3339() {
        assert!(chrono::DateTime::parse_from_rfc3339(env!("BUILD_TIME")).is_ok());
    }

    #[test]
    fn test_splash_ms() {
        assert_eq!(SiteConfig::new().splash_ms(), 2000.0);
    }
}
