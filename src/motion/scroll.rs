use std::rc::Rc;
use yew::Reducible;

pub const ANCHOR_GAP_PX: f64 = 16.0;
pub const DESKTOP_MIN_WIDTH: f64 = 768.0;
pub const HEADER_SCROLLED_AT: f64 = 20.0;

/// Document offset to scroll to so `element_top` (viewport-relative) lands
/// just below a header of `header_height`.
pub fn anchor_offset(element_top: f64, page_y_offset: f64, header_height: f64) -> f64 {
    element_top + page_y_offset - header_height - ANCHOR_GAP_PX
}

pub fn is_desktop(viewport_width: f64) -> bool {
    viewport_width >= DESKTOP_MIN_WIDTH
}

pub fn header_scrolled(scroll_y: f64) -> bool {
    scroll_y > HEADER_SCROLLED_AT
}

/// Background offset for a section, or `None` when the section is outside
/// the viewport and should keep its current position.
pub fn parallax_offset(
    scroll_y: f64,
    viewport_height: f64,
    section_top: f64,
    section_height: f64,
) -> Option<f64> {
    let visible = scroll_y + viewport_height > section_top && scroll_y < section_top + section_height;
    visible.then(|| -((scroll_y - section_top) / 5.0))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Anchor<'a> {
    Top,
    Id(&'a str),
    External,
}

pub fn parse_anchor(href: &str) -> Anchor<'_> {
    match href.strip_prefix('#') {
        Some("") => Anchor::Top,
        Some(id) => Anchor::Id(id),
        None => Anchor::External,
    }
}

pub fn is_in_page(href: &str) -> bool {
    parse_anchor(href) != Anchor::External
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn resized(&mut self, viewport_width: f64) {
        if is_desktop(viewport_width) {
            self.open = false;
        }
    }

    pub fn aria_expanded(&self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MenuAction {
    Toggle,
    Close,
    Resized(f64),
}

impl Reducible for MobileMenu {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        match action {
            MenuAction::Toggle => next.toggle(),
            MenuAction::Close => next.close(),
            MenuAction::Resized(width) => next.resized(width),
        }
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_offset_accounts_for_header_and_gap() {
        assert_eq!(anchor_offset(400.0, 1200.0, 80.0), 1504.0);
        assert_eq!(anchor_offset(-50.0, 300.0, 0.0), 234.0);
    }

    #[test]
    fn anchors_are_classified() {
        assert_eq!(parse_anchor("#"), Anchor::Top);
        assert_eq!(parse_anchor("#contact"), Anchor::Id("contact"));
        assert_eq!(parse_anchor("/privacy"), Anchor::External);
    }

    #[test]
    fn parallax_only_while_visible() {
        assert_eq!(parallax_offset(1000.0, 800.0, 1500.0, 600.0), Some(100.0));
        assert_eq!(parallax_offset(1600.0, 800.0, 1500.0, 600.0), Some(-20.0));
        assert_eq!(parallax_offset(0.0, 800.0, 1500.0, 600.0), None);
        assert_eq!(parallax_offset(2100.0, 800.0, 1500.0, 600.0), None);
    }

    #[test]
    fn header_style_threshold() {
        assert!(!header_scrolled(0.0));
        assert!(!header_scrolled(20.0));
        assert!(header_scrolled(21.0));
    }

    #[test]
    fn menu_closes_on_desktop_resize() {
        let mut menu = MobileMenu::default();
        menu.toggle();
        assert_eq!(menu.aria_expanded(), "true");
        menu.resized(500.0);
        assert!(menu.is_open());
        menu.resized(768.0);
        assert!(!menu.is_open());
        assert_eq!(menu.aria_expanded(), "false");
    }

    #[test]
    fn late_resize_applies_to_current_menu_state() {
        // a narrow resize that lands after the user opened the menu keeps it open
        let menu = Rc::new(MobileMenu::default());
        let menu = menu.reduce(MenuAction::Toggle);
        let menu = menu.reduce(MenuAction::Resized(500.0));
        assert!(menu.is_open());
        let menu = menu.reduce(MenuAction::Resized(1024.0));
        assert!(!menu.is_open());
    }

    #[test]
    fn unchanged_menu_keeps_its_rc() {
        let menu = Rc::new(MobileMenu::default());
        let same = menu.clone().reduce(MenuAction::Close);
        assert!(Rc::ptr_eq(&menu, &same));
    }

    #[test]
    fn hash_links_are_in_page() {
        assert!(is_in_page("#"));
        assert!(is_in_page("#contact"));
        assert!(!is_in_page("https://novastra.example/"));
        assert!(!is_in_page("/privacy"));
    }

    #[test]
    fn menu_toggle_and_close() {
        let mut menu = MobileMenu::default();
        menu.toggle();
        menu.toggle();
        assert!(!menu.is_open());
        menu.toggle();
        menu.close();
        assert!(!menu.is_open());
    }
}
