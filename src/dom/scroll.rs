use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

use super::{window, DomError};
use crate::motion::scroll::{anchor_offset, is_in_page, parse_anchor, Anchor};

pub fn smooth_scroll_to(top: f64) -> Result<(), DomError> {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window()?.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

pub fn scroll_y() -> f64 {
    web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn viewport_height() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub const SITE_HEADER_ID: &str = "site-header";

pub fn site_header() -> Option<HtmlElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(SITE_HEADER_ID)?
        .dyn_into::<HtmlElement>()
        .ok()
}

/// Scrolls to an in-page anchor below the sticky `header`. Returns `false`
/// when the link should keep its default behavior (external link or a
/// target that is not on the page).
pub fn scroll_to_anchor(href: &str, header: Option<&HtmlElement>) -> bool {
    let result = match parse_anchor(href) {
        Anchor::External => return false,
        Anchor::Top => smooth_scroll_to(0.0),
        Anchor::Id(id) => {
            let Some(target) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id(id))
            else {
                warn!("smooth scroll target not found: {}", href);
                return false;
            };
            let header_height = header.map(|h| h.offset_height() as f64).unwrap_or(0.0);
            let top = target.get_bounding_client_rect().top();
            smooth_scroll_to(anchor_offset(top, scroll_y(), header_height))
        }
    };
    if let Err(e) = result {
        warn!("smooth scroll failed: {}", e);
        return false;
    }
    true
}

pub fn clicked_href(target: Option<web_sys::EventTarget>) -> Option<String> {
    let element = target?.dyn_into::<web_sys::Element>().ok()?;
    let anchor = element.closest("a").ok()??;
    anchor.get_attribute("href")
}

/// Delegated click handler for in-page links: scrolls below the site header
/// and suppresses the default jump. Returns whether an in-page link was hit.
pub fn follow_in_page_link(e: &web_sys::MouseEvent) -> bool {
    let Some(href) = clicked_href(e.target()) else {
        return false;
    };
    if !is_in_page(&href) {
        return false;
    }
    if scroll_to_anchor(&href, site_header().as_ref()) {
        e.prevent_default();
    }
    true
}
