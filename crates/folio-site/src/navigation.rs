//! Header navigation state.
//!
//! [`Navigation`] tracks what the header shows: whether the mobile menu is
//! open, the scroll-driven header classes, and which in-page link is active.
//! The page feeds it viewport, scroll, key, touch and click events and
//! renders from its state.
//!
//! The mobile menu exists only on mobile widths. It can't open on wider
//! viewports, and resizing out of the mobile range closes it.

use std::fmt;

/// Widths at or above this are desktop.
pub const DESKTOP_MIN_WIDTH: u32 = 1025;
/// Widths at or above this (and below desktop) are tablet.
pub const TABLET_MIN_WIDTH: u32 = 769;

/// Scroll offset past which the header gets the `scrolled` class.
pub const SCROLLED_THRESHOLD: f64 = 50.0;
/// Scroll offset past which scrolling down hides the header.
pub const HIDE_THRESHOLD: f64 = 200.0;
/// Minimum leftward swipe that closes the mobile menu.
pub const SWIPE_THRESHOLD: f64 = 100.0;
/// Header height assumed when the page doesn't report one.
pub const DEFAULT_HEADER_HEIGHT: f64 = 80.0;

/// Viewport class, from its width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceType {
    Mobile,
    Tablet,
    Desktop,
}

impl DeviceType {
    pub fn from_width(width: u32) -> Self {
        if width >= DESKTOP_MIN_WIDTH {
            DeviceType::Desktop
        } else if width >= TABLET_MIN_WIDTH {
            DeviceType::Tablet
        } else {
            DeviceType::Mobile
        }
    }

    pub fn is_mobile(self) -> bool {
        self == DeviceType::Mobile
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DeviceType::Mobile => "mobile",
            DeviceType::Tablet => "tablet",
            DeviceType::Desktop => "desktop",
        }
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classes on the header element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeaderState {
    /// Past [`SCROLLED_THRESHOLD`].
    pub scrolled: bool,
    /// Scrolling down past [`HIDE_THRESHOLD`].
    pub hidden: bool,
}

/// What a navigation link click does.
#[derive(Debug, Clone, PartialEq)]
pub enum LinkAction {
    /// Smooth-scroll to the section with this id.
    ScrollTo(String),
    /// Let the browser follow the link.
    Follow(String),
}

/// Navigation state for one page.
#[derive(Debug, Clone)]
pub struct Navigation {
    width: u32,
    menu_open: bool,
    header: HeaderState,
    last_scroll_y: f64,
    touch_start_x: Option<f64>,
    sections: Vec<String>,
    active_section: Option<String>,
}

impl Navigation {
    pub fn new(width: u32) -> Self {
        Self {
            width,
            menu_open: false,
            header: HeaderState::default(),
            last_scroll_y: 0.0,
            touch_start_x: None,
            sections: Vec::new(),
            active_section: None,
        }
    }

    /// Registers the ids of in-page sections that `#` links point at.
    pub fn with_sections<I, T>(mut self, sections: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.sections = sections.into_iter().map(Into::into).collect();
        self
    }

    pub fn device_type(&self) -> DeviceType {
        DeviceType::from_width(self.width)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Whether the hamburger toggle is displayed.
    pub fn shows_menu_toggle(&self) -> bool {
        self.device_type().is_mobile()
    }

    pub fn header(&self) -> HeaderState {
        self.header
    }

    pub fn active_section(&self) -> Option<&str> {
        self.active_section.as_deref()
    }

    /// Opens the menu. Does nothing outside mobile widths.
    pub fn open_menu(&mut self) -> bool {
        if !self.device_type().is_mobile() {
            return false;
        }
        if !self.menu_open {
            tracing::debug!("opened navigation menu");
        }
        self.menu_open = true;
        true
    }

    pub fn close_menu(&mut self) {
        if self.menu_open {
            tracing::debug!("closed navigation menu");
        }
        self.menu_open = false;
    }

    pub fn toggle_menu(&mut self) {
        if self.menu_open {
            self.close_menu();
        } else {
            self.open_menu();
        }
    }

    /// Applies a viewport resize.
    pub fn resize(&mut self, width: u32) {
        self.width = width;
        if !self.device_type().is_mobile() {
            self.close_menu();
        }
    }

    /// Handles a key press; Escape closes the menu. Returns whether it did.
    pub fn key_down(&mut self, key: &str) -> bool {
        if key == "Escape" && self.menu_open {
            self.close_menu();
            return true;
        }
        false
    }

    pub fn touch_start(&mut self, x: f64) {
        self.touch_start_x = Some(x);
    }

    /// Ends a touch; a long enough leftward swipe on mobile closes the menu.
    pub fn touch_end(&mut self, x: f64) -> bool {
        let Some(start) = self.touch_start_x.take() else {
            return false;
        };
        if !self.device_type().is_mobile() || !self.menu_open {
            return false;
        }
        if x - start < -SWIPE_THRESHOLD {
            self.close_menu();
            return true;
        }
        false
    }

    /// Updates the header classes for a new scroll position.
    pub fn scroll(&mut self, y: f64) -> HeaderState {
        self.header = HeaderState {
            scrolled: y > SCROLLED_THRESHOLD,
            hidden: y > self.last_scroll_y && y > HIDE_THRESHOLD,
        };
        self.last_scroll_y = y;
        self.header
    }

    /// Handles a navigation link click.
    ///
    /// `#id` links to a known section scroll there and become active. Any
    /// click closes the menu on mobile.
    pub fn click_link(&mut self, href: &str) -> LinkAction {
        let action = match href.strip_prefix('#') {
            Some(id) if self.sections.iter().any(|s| s == id) => {
                self.active_section = Some(id.to_string());
                LinkAction::ScrollTo(id.to_string())
            }
            _ => LinkAction::Follow(href.to_string()),
        };
        if self.device_type().is_mobile() {
            self.close_menu();
        }
        action
    }

    /// Marks the section scrolled into view as active.
    pub fn set_active_section(&mut self, id: &str) -> bool {
        if !self.sections.iter().any(|s| s == id) {
            return false;
        }
        self.active_section = Some(id.to_string());
        true
    }

    /// Whether the link with `href` carries the `active` class.
    pub fn is_link_active(&self, href: &str) -> bool {
        match (href.strip_prefix('#'), &self.active_section) {
            (Some(id), Some(active)) => id == active,
            _ => false,
        }
    }
}

/// Scroll position that puts a section just below the fixed header.
pub fn scroll_target(offset_top: f64, header_height: Option<f64>) -> f64 {
    offset_top - header_height.unwrap_or(DEFAULT_HEADER_HEIGHT)
}

/// Transition delay of the `index`th link as the mobile menu opens.
pub fn menu_link_delay(index: usize) -> f64 {
    index as f64 * 0.1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_type_boundaries() {
        assert_eq!(DeviceType::from_width(320), DeviceType::Mobile);
        assert_eq!(DeviceType::from_width(768), DeviceType::Mobile);
        assert_eq!(DeviceType::from_width(769), DeviceType::Tablet);
        assert_eq!(DeviceType::from_width(1024), DeviceType::Tablet);
        assert_eq!(DeviceType::from_width(1025), DeviceType::Desktop);
        assert_eq!(DeviceType::Tablet.to_string(), "tablet");
    }

    #[test]
    fn test_menu_only_opens_on_mobile() {
        let mut nav = Navigation::new(1280);
        assert!(!nav.shows_menu_toggle());
        assert!(!nav.open_menu());
        nav.toggle_menu();
        assert!(!nav.is_menu_open());

        let mut nav = Navigation::new(375);
        assert!(nav.shows_menu_toggle());
        nav.toggle_menu();
        assert!(nav.is_menu_open());
        nav.toggle_menu();
        assert!(!nav.is_menu_open());
    }

    #[test]
    fn test_resize_closes_menu() {
        let mut nav = Navigation::new(375);
        nav.open_menu();
        nav.resize(500);
        assert!(nav.is_menu_open());
        nav.resize(900);
        assert!(!nav.is_menu_open());
    }

    #[test]
    fn test_escape_closes_menu() {
        let mut nav = Navigation::new(375);
        assert!(!nav.key_down("Escape"));
        nav.open_menu();
        assert!(!nav.key_down("Enter"));
        assert!(nav.key_down("Escape"));
        assert!(!nav.is_menu_open());
    }

    #[test]
    fn test_swipe_left_closes_menu() {
        let mut nav = Navigation::new(375);
        nav.open_menu();

        nav.touch_start(300.0);
        assert!(!nav.touch_end(250.0));
        assert!(nav.is_menu_open());

        nav.touch_start(300.0);
        assert!(!nav.touch_end(400.0));

        nav.touch_start(300.0);
        assert!(nav.touch_end(150.0));
        assert!(!nav.is_menu_open());
    }

    #[test]
    fn test_touch_end_without_start() {
        let mut nav = Navigation::new(375);
        nav.open_menu();
        assert!(!nav.touch_end(0.0));
        assert!(nav.is_menu_open());
    }

    #[test]
    fn test_header_scroll_classes() {
        let mut nav = Navigation::new(1280);
        assert_eq!(nav.scroll(10.0), HeaderState::default());
        assert_eq!(
            nav.scroll(120.0),
            HeaderState {
                scrolled: true,
                hidden: false
            }
        );
        assert_eq!(
            nav.scroll(300.0),
            HeaderState {
                scrolled: true,
                hidden: true
            }
        );
        // Scrolling back up shows the header again.
        assert_eq!(
            nav.scroll(250.0),
            HeaderState {
                scrolled: true,
                hidden: false
            }
        );
    }

    #[test]
    fn test_click_section_link() {
        let mut nav = Navigation::new(375).with_sections(["about", "skills"]);
        nav.open_menu();

        assert_eq!(nav.click_link("#skills"), LinkAction::ScrollTo("skills".into()));
        assert_eq!(nav.active_section(), Some("skills"));
        assert!(nav.is_link_active("#skills"));
        assert!(!nav.is_link_active("#about"));
        assert!(!nav.is_menu_open());
    }

    #[test]
    fn test_click_other_links() {
        let mut nav = Navigation::new(1280).with_sections(["about"]);
        assert_eq!(
            nav.click_link("#missing"),
            LinkAction::Follow("#missing".into())
        );
        assert_eq!(
            nav.click_link("/pages/Projects/index.html"),
            LinkAction::Follow("/pages/Projects/index.html".into())
        );
        assert_eq!(nav.active_section(), None);
    }

    #[test]
    fn test_set_active_section() {
        let mut nav = Navigation::new(1280).with_sections(["about", "contact"]);
        assert!(nav.set_active_section("contact"));
        assert!(!nav.set_active_section("nowhere"));
        assert_eq!(nav.active_section(), Some("contact"));
    }

    #[test]
    fn test_scroll_target() {
        assert_eq!(scroll_target(500.0, None), 420.0);
        assert_eq!(scroll_target(500.0, Some(64.0)), 436.0);
        assert_eq!(menu_link_delay(0), 0.0);
        assert_eq!(menu_link_delay(2), 0.2);
    }
}
