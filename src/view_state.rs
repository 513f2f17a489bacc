use std::rc::Rc;

use yew::prelude::*;

use crate::config;
use crate::navigation::{scroll_to_anchor, ScrollHost};

/// UI flags owned by the app root. Both start out false on page load.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    pub menu_open: bool,
    pub scrolled: bool,
}

impl ViewState {
    /// Returns true if the flag changed.
    pub fn on_scroll(&mut self, current_offset: f64) -> bool {
        let scrolled = current_offset > config::SCROLL_THRESHOLD;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Returns true if the menu was open.
    pub fn close_menu(&mut self) -> bool {
        let was_open = self.menu_open;
        self.menu_open = false;
        was_open
    }

    /// Scrolls `host` to `target_id` when the page has it, and returns the
    /// action that closes the menu. The menu closes even for unknown targets.
    pub fn on_navigate<H: ScrollHost + ?Sized>(target_id: &str, host: &H) -> ViewAction {
        if let Some(request) = scroll_to_anchor(host, target_id) {
            log::debug!("scrolling to #{} at {}", target_id, request.top);
        }
        ViewAction::CloseMenu
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewAction {
    Scroll(f64),
    ToggleMenu,
    CloseMenu,
}

impl Reducible for ViewState {
    type Action = ViewAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        match action {
            ViewAction::Scroll(offset) => {
                if !next.on_scroll(offset) {
                    return self;
                }
                log::debug!("header scrolled: {}", next.scrolled);
            }
            ViewAction::ToggleMenu => {
                next.toggle_menu();
                log::debug!("menu open: {}", next.menu_open);
            }
            ViewAction::CloseMenu => {
                if !next.close_menu() {
                    return self;
                }
                log::debug!("menu closed");
            }
        }
        next.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::tests::FakeHost;

    #[test]
    fn starts_closed_and_unscrolled() {
        let state = ViewState::default();
        assert!(!state.menu_open);
        assert!(!state.scrolled);
    }

    #[test]
    fn scrolled_iff_past_threshold() {
        let mut state = ViewState::default();
        for offset in [0.0, 1.0, 49.0, 49.9, 50.0, 50.1, 51.0, 80.0, 5000.0, 30.0, 50.0] {
            state.on_scroll(offset);
            assert_eq!(state.scrolled, offset > 50.0, "offset {offset}");
        }
    }

    #[test]
    fn no_hysteresis() {
        let mut state = ViewState::default();
        state.on_scroll(51.0);
        assert!(state.scrolled);
        state.on_scroll(50.0);
        assert!(!state.scrolled);
        state.on_scroll(51.0);
        assert!(state.scrolled);
    }

    #[test]
    fn on_scroll_reports_changes_only() {
        let mut state = ViewState::default();
        assert!(!state.on_scroll(10.0));
        assert!(state.on_scroll(80.0));
        assert!(!state.on_scroll(120.0));
        assert!(state.on_scroll(0.0));
    }

    #[test]
    fn scroll_leaves_menu_alone() {
        let mut state = ViewState { menu_open: true, scrolled: false };
        state.on_scroll(200.0);
        assert!(state.menu_open);
    }

    #[test]
    fn toggle_twice_restores() {
        for start in [false, true] {
            let mut state = ViewState { menu_open: start, scrolled: false };
            state.toggle_menu();
            assert_eq!(state.menu_open, !start);
            state.toggle_menu();
            assert_eq!(state.menu_open, start);
        }
    }

    fn navigate(state: ViewState, id: &str, host: &FakeHost) -> Rc<ViewState> {
        Rc::new(state).reduce(ViewState::on_navigate(id, host))
    }

    #[test]
    fn navigate_always_closes_menu() {
        let host = FakeHost::with("services", 700.0);
        for id in ["services", "why-us", "about", "nonexistent", ""] {
            for open in [false, true] {
                let state = navigate(ViewState { menu_open: open, scrolled: true }, id, &host);
                assert!(!state.menu_open, "id {id:?} open {open}");
                assert!(state.scrolled);
            }
        }
    }

    #[test]
    fn navigate_to_missing_target_does_not_scroll() {
        let host = FakeHost::default();
        let state = navigate(ViewState { menu_open: true, scrolled: false }, "nonexistent", &host);
        assert!(host.scrolls.borrow().is_empty());
        assert!(!state.menu_open);
    }

    #[test]
    fn navigate_scrolls_with_header_offset() {
        let host = FakeHost::with("why-us", 1500.0);
        assert_eq!(ViewState::on_navigate("why-us", &host), ViewAction::CloseMenu);
        assert_eq!(*host.scrolls.borrow(), vec![1420.0]);
    }

    #[test]
    fn close_menu_from_open() {
        let state = Rc::new(ViewState { menu_open: true, scrolled: true });
        let next = state.clone().reduce(ViewAction::CloseMenu);
        assert!(!Rc::ptr_eq(&state, &next));
        assert_eq!(*next, ViewState { menu_open: false, scrolled: true });
    }

    #[test]
    fn close_menu_when_already_closed_keeps_identity() {
        let state = Rc::new(ViewState { menu_open: false, scrolled: true });
        let next = state.clone().reduce(ViewAction::CloseMenu);
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn reducer_keeps_identity_when_nothing_changes() {
        let state = Rc::new(ViewState::default());
        let next = state.clone().reduce(ViewAction::Scroll(10.0));
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn reducer_applies_scroll_and_toggle() {
        let state = Rc::new(ViewState::default());
        let state = state.reduce(ViewAction::Scroll(80.0));
        assert!(state.scrolled);
        let state = state.reduce(ViewAction::ToggleMenu);
        assert!(state.menu_open);
        let state = state.reduce(ViewAction::ToggleMenu);
        assert!(!state.menu_open);
    }
}
