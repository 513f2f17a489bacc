//! Static copy for the page. Everything here is fixed at build time.

use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceEntry {
    pub title: &'static str,
    pub description: &'static str,
    /// Key into the icon table, see [`crate::icons::Icon::from_id`].
    pub icon: &'static str,
}

/// Services in display order. The footer reuses the head of this list.
pub const SERVICES: &[ServiceEntry] = &[
    ServiceEntry {
        title: "Emergency Plumbing",
        description: "Available 24/7 for burst pipes, major leaks, and urgent repairs when you need us most.",
        icon: "AlertCircle",
    },
    ServiceEntry {
        title: "Drain Cleaning",
        description: "Professional hydro-jetting and snaking to clear even the toughest clogs and blockages.",
        icon: "Droplets",
    },
    ServiceEntry {
        title: "Leak Detection & Repair",
        description: "Advanced technology to find hidden leaks behind walls or under slabs without damage.",
        icon: "Search",
    },
    ServiceEntry {
        title: "Water Heater Services",
        description: "Installation, maintenance, and repair for both traditional tank and modern tankless systems.",
        icon: "Thermometer",
    },
    ServiceEntry {
        title: "Sewer Line Services",
        description: "Comprehensive sewer inspections, repairs, and replacements using trenchless technology.",
        icon: "Wrench",
    },
    ServiceEntry {
        title: "Fixture Installation",
        description: "Expert installation of toilets, sinks, faucets, and showers for your kitchen or bathroom.",
        icon: "Hammer",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SellingPoint {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const SELLING_POINTS: &[SellingPoint] = &[
    SellingPoint {
        icon: "Clock",
        title: "Fast Response Times",
        description: "We know plumbing emergencies can't wait. Our local team is strategically positioned to reach you quickly.",
    },
    SellingPoint {
        icon: "ThumbsUp",
        title: "Transparent Pricing",
        description: "No hidden fees or surprise charges. We provide clear, upfront estimates before any work begins.",
    },
    SellingPoint {
        icon: "Award",
        title: "Experienced Technicians",
        description: "Our plumbers are highly trained, licensed, and equipped with the latest tools to solve any issue.",
    },
    SellingPoint {
        icon: "ShieldCheck",
        title: "Satisfaction Guarantee",
        description: "We stand behind our work. If you're not happy, we'll make it right. Your peace of mind is our priority.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { value: "15+", label: "Years Experience" },
    Stat { value: "24/7", label: "Emergency Support" },
    Stat { value: "100%", label: "Satisfaction Rate" },
];

pub const SERVICE_AREAS: &[&str] = &["Durham, NC", "Chapel Hill, NC", "Raleigh, NC", "Cary, NC"];

/// Labels shown in the header navigation, in order.
pub const NAV_ITEMS: &[&str] = &["Services", "Why Us", "About"];

/// Labels shown under "Quick Links" in the footer.
pub const QUICK_LINKS: &[&str] = &["Why Us", "About"];

/// Anchor id for a navigation label: lower-cased, first space turned into a dash.
pub fn anchor_id(label: &str) -> String {
    label.to_lowercase().replacen(' ', "-", 1)
}

/// The services listed in the footer, in display order.
pub fn footer_services(services: &[ServiceEntry]) -> &[ServiceEntry] {
    &services[..services.len().min(config::FOOTER_SERVICE_COUNT)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icons::Icon;

    #[test]
    fn anchor_ids_match_sections() {
        let ids: Vec<String> = NAV_ITEMS.iter().map(|l| anchor_id(l)).collect();
        assert_eq!(ids, vec!["services", "why-us", "about"]);
    }

    #[test]
    fn anchor_id_only_replaces_first_space() {
        assert_eq!(anchor_id("Our Service Areas"), "our-service areas");
    }

    #[test]
    fn footer_lists_first_five_services() {
        let footer = footer_services(SERVICES);
        assert_eq!(footer.len(), 5);
        assert_eq!(footer, &SERVICES[..5]);
        assert_eq!(footer[0].title, "Emergency Plumbing");
        assert_eq!(footer[4].title, "Sewer Line Services");
    }

    #[test]
    fn footer_handles_short_lists() {
        assert_eq!(footer_services(&SERVICES[..2]).len(), 2);
        assert!(footer_services(&[]).is_empty());
    }

    #[test]
    fn every_static_icon_resolves() {
        for service in SERVICES {
            assert!(Icon::from_id(service.icon).is_some(), "{}", service.icon);
        }
        for point in SELLING_POINTS {
            assert!(Icon::from_id(point.icon).is_some(), "{}", point.icon);
        }
    }
}
