//! Smooth scrolling and the back-to-top button.
//!
//! Anchor links scroll smoothly to an in-page target; the back-to-top button
//! appears past a scroll threshold and requests a smooth scroll to the top.
//! Both reduce to tiny pure pieces here: target resolution and a visibility
//! flag. The actual scrolling is the host page's business.

use maud::{Markup, PreEscaped, html};

const CHEVRON_UP: &str = include_str!("../../static/icons/chevron-up.svg");

/// Resolve a smooth-scroll anchor href to its in-page target id.
///
/// Only fragment hrefs qualify; a bare `#` has no target. Whether the id
/// actually exists on the page is the caller's lookup — a missing target
/// scrolls nowhere.
pub fn anchor_target(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() { None } else { Some(id) }
}

/// Back-to-top button visibility, driven by scroll position.
#[derive(Debug, Clone)]
pub struct BackToTop {
    visible: bool,
    threshold: u32,
}

impl BackToTop {
    pub fn new(threshold: u32) -> BackToTop {
        BackToTop {
            visible: false,
            threshold,
        }
    }

    /// Track the window's vertical scroll offset. Visibility follows the
    /// threshold in both directions.
    pub fn on_scroll(&mut self, scroll_y: u32) {
        self.visible = scroll_y > self.threshold;
    }

    pub fn visible(&self) -> bool {
        self.visible
    }
}

/// Render the back-to-top button markup appended to every page.
pub fn render_back_to_top(visible: bool) -> Markup {
    html! {
        button.back-to-top.visible[visible] aria-label="Back to top" {
            (PreEscaped(CHEVRON_UP))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_with_id_resolves() {
        assert_eq!(anchor_target("#admissions"), Some("admissions"));
    }

    #[test]
    fn bare_hash_has_no_target() {
        assert_eq!(anchor_target("#"), None);
    }

    #[test]
    fn non_anchor_href_has_no_target() {
        assert_eq!(anchor_target("legacy.html"), None);
    }

    #[test]
    fn back_to_top_follows_threshold_both_ways() {
        let mut btn = BackToTop::new(400);
        btn.on_scroll(0);
        assert!(!btn.visible());
        btn.on_scroll(400);
        assert!(!btn.visible(), "threshold is exclusive");
        btn.on_scroll(401);
        assert!(btn.visible());
        btn.on_scroll(120);
        assert!(!btn.visible());
    }

    #[test]
    fn button_markup_carries_label_and_icon() {
        let html = render_back_to_top(false).into_string();
        assert!(html.contains(r#"aria-label="Back to top""#));
        assert!(html.contains("polyline"));
        assert!(!html.contains("visible"));
    }

    #[test]
    fn button_markup_visible_state() {
        let html = render_back_to_top(true).into_string();
        assert!(html.contains(r#"class="back-to-top visible""#));
    }
}
