use web_sys::{window, ScrollBehavior, ScrollToOptions};

use crate::config;

/// The bits of the page the anchor navigation needs.
pub trait ScrollHost {
    /// Document-relative top of the element with this id, if it exists.
    fn element_top(&self, id: &str) -> Option<f64>;

    fn smooth_scroll_to(&self, top: f64);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRequest {
    pub top: f64,
}

/// Scrolls so that `id` sits just below the fixed header.
/// Returns `None` without touching the page when there is no such element.
pub fn scroll_to_anchor<H: ScrollHost + ?Sized>(host: &H, id: &str) -> Option<ScrollRequest> {
    let top = host.element_top(id)? - config::HEADER_OFFSET;
    host.smooth_scroll_to(top);
    Some(ScrollRequest { top })
}

/// [`ScrollHost`] backed by the browser window.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScrollHost;

impl ScrollHost for BrowserScrollHost {
    fn element_top(&self, id: &str) -> Option<f64> {
        let window = window()?;
        let element = window.document()?.get_element_by_id(id)?;
        let page_offset = window.page_y_offset().ok()?;
        Some(element.get_bounding_client_rect().top() + page_offset)
    }

    fn smooth_scroll_to(&self, top: f64) {
        let Some(window) = window() else {
            log::warn!("no window to scroll");
            return;
        };
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// Records scroll calls instead of moving a real viewport.
    #[derive(Default)]
    pub(crate) struct FakeHost {
        pub tops: HashMap<&'static str, f64>,
        pub scrolls: RefCell<Vec<f64>>,
    }

    impl FakeHost {
        pub(crate) fn with(id: &'static str, top: f64) -> Self {
            let mut host = FakeHost::default();
            host.tops.insert(id, top);
            host
        }
    }

    impl ScrollHost for FakeHost {
        fn element_top(&self, id: &str) -> Option<f64> {
            self.tops.get(id).copied()
        }

        fn smooth_scroll_to(&self, top: f64) {
            self.scrolls.borrow_mut().push(top);
        }
    }

    #[test]
    fn scrolls_below_header() {
        let host = FakeHost::with("services", 900.0);
        let request = scroll_to_anchor(&host, "services");
        assert_eq!(request, Some(ScrollRequest { top: 820.0 }));
        assert_eq!(*host.scrolls.borrow(), vec![820.0]);
    }

    #[test]
    fn missing_target_does_nothing() {
        let host = FakeHost::with("services", 900.0);
        assert_eq!(scroll_to_anchor(&host, "nonexistent"), None);
        assert!(host.scrolls.borrow().is_empty());
    }

    #[test]
    fn target_near_top_can_go_negative() {
        // the browser clamps; we pass it through unchanged
        let host = FakeHost::with("about", 20.0);
        assert_eq!(scroll_to_anchor(&host, "about"), Some(ScrollRequest { top: -60.0 }));
    }
}
