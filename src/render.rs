//! Pure mapping from [`ViewState`] and the service list to what the page shows.

use crate::content::{footer_services, ServiceEntry};
use crate::icons::Icon;
use crate::view_state::ViewState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderVariant {
    /// Over the hero, before any scrolling.
    Transparent,
    /// Opaque glass style.
    Scrolled,
}

impl HeaderVariant {
    pub fn for_state(state: &ViewState) -> Self {
        if state.scrolled || state.menu_open {
            HeaderVariant::Scrolled
        } else {
            HeaderVariant::Transparent
        }
    }

    pub fn header_class(self) -> &'static str {
        match self {
            HeaderVariant::Transparent => "site-header transparent",
            HeaderVariant::Scrolled => "site-header glass-header",
        }
    }

    /// Text colour for nav links and the menu toggle.
    pub fn text_class(self) -> &'static str {
        match self {
            HeaderVariant::Transparent => "text-light",
            HeaderVariant::Scrolled => "text-dark",
        }
    }
}

/// Whether the mobile menu is in the DOM, and which transition it plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuPresence {
    Hidden,
    Open,
    /// Closed but still mounted while the exit transition runs.
    Closing,
}

impl MenuPresence {
    pub fn from_flags(menu_open: bool, still_mounted: bool) -> Self {
        match (menu_open, still_mounted) {
            (true, _) => MenuPresence::Open,
            (false, true) => MenuPresence::Closing,
            (false, false) => MenuPresence::Hidden,
        }
    }

    pub fn class(self) -> Option<&'static str> {
        match self {
            MenuPresence::Hidden => None,
            MenuPresence::Open => Some("mobile-nav"),
            MenuPresence::Closing => Some("mobile-nav closing"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceCard {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Option<Icon>,
    /// Enter transition delay in seconds.
    pub delay: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageModel {
    pub header: HeaderVariant,
    pub mobile_menu_visible: bool,
    pub cards: Vec<ServiceCard>,
    pub footer_services: Vec<&'static str>,
}

pub fn service_cards(services: &'static [ServiceEntry]) -> Vec<ServiceCard> {
    services
        .iter()
        .enumerate()
        .map(|(idx, service)| ServiceCard {
            title: service.title,
            description: service.description,
            icon: Icon::from_id(service.icon),
            delay: idx as f32 * 0.1,
        })
        .collect()
}

pub fn compose(state: &ViewState, services: &'static [ServiceEntry]) -> PageModel {
    PageModel {
        header: HeaderVariant::for_state(state),
        mobile_menu_visible: state.menu_open,
        cards: service_cards(services),
        footer_services: footer_services(services).iter().map(|s| s.title).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SERVICES;

    fn state_at(offset: f64, menu_open: bool) -> ViewState {
        let mut state = ViewState { menu_open, scrolled: false };
        state.on_scroll(offset);
        state
    }

    #[test]
    fn header_variant_truth_table() {
        let cases = [
            (false, false, HeaderVariant::Transparent),
            (true, false, HeaderVariant::Scrolled),
            (false, true, HeaderVariant::Scrolled),
            (true, true, HeaderVariant::Scrolled),
        ];
        for (scrolled, menu_open, expected) in cases {
            let state = ViewState { menu_open, scrolled };
            assert_eq!(HeaderVariant::for_state(&state), expected, "{state:?}");
        }
    }

    #[test]
    fn top_of_page_is_transparent() {
        let model = compose(&state_at(0.0, false), SERVICES);
        assert_eq!(model.header, HeaderVariant::Transparent);
        assert!(!model.mobile_menu_visible);
    }

    #[test]
    fn scrolling_past_threshold_turns_opaque() {
        let model = compose(&state_at(80.0, false), SERVICES);
        assert_eq!(model.header, HeaderVariant::Scrolled);
    }

    #[test]
    fn open_menu_overrides_scroll_position() {
        let model = compose(&state_at(0.0, true), SERVICES);
        assert_eq!(model.header, HeaderVariant::Scrolled);
        assert!(model.mobile_menu_visible);
    }

    #[test]
    fn one_card_per_service_in_order() {
        let model = compose(&ViewState::default(), SERVICES);
        assert_eq!(model.cards.len(), SERVICES.len());
        for (card, service) in model.cards.iter().zip(SERVICES) {
            assert_eq!(card.title, service.title);
            assert_eq!(card.description, service.description);
            assert!(card.icon.is_some());
        }
        assert_eq!(model.cards[0].delay, 0.0);
        assert!((model.cards[3].delay - 0.3).abs() < f32::EPSILON);
    }

    #[test]
    fn footer_is_first_five_titles() {
        let model = compose(&ViewState::default(), SERVICES);
        let expected: Vec<&str> = SERVICES.iter().take(5).map(|s| s.title).collect();
        assert_eq!(model.footer_services, expected);
    }

    #[test]
    fn unknown_icon_renders_no_icon() {
        static ODD: [ServiceEntry; 2] = [
            ServiceEntry { title: "Gas Lines", description: "", icon: "Flame" },
            ServiceEntry { title: "Drain Cleaning", description: "", icon: "Droplets" },
        ];
        let cards = service_cards(&ODD);
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].icon, None);
        assert_eq!(cards[1].icon, Some(Icon::Droplets));
    }

    #[test]
    fn menu_lingers_only_while_closing() {
        assert_eq!(MenuPresence::from_flags(true, false), MenuPresence::Open);
        assert_eq!(MenuPresence::from_flags(true, true), MenuPresence::Open);
        assert_eq!(MenuPresence::from_flags(false, true), MenuPresence::Closing);
        assert_eq!(MenuPresence::from_flags(false, false), MenuPresence::Hidden);
        assert_eq!(MenuPresence::Hidden.class(), None);
        assert_eq!(MenuPresence::Closing.class(), Some("mobile-nav closing"));
    }

    #[test]
    fn classes_follow_variant() {
        assert!(HeaderVariant::Scrolled.header_class().contains("glass-header"));
        assert!(!HeaderVariant::Transparent.header_class().contains("glass-header"));
        assert_ne!(
            HeaderVariant::Scrolled.text_class(),
            HeaderVariant::Transparent.text_class()
        );
    }
}
