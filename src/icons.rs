use yew::prelude::*;

/// Line icons drawn on a 24x24 grid with a 2px round stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    AlertCircle,
    Award,
    ChevronRight,
    Clock,
    Droplets,
    Hammer,
    Menu,
    Phone,
    Search,
    ShieldCheck,
    Thermometer,
    ThumbsUp,
    Wrench,
    X,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Path(&'static str),
    Circle { cx: f32, cy: f32, r: f32 },
    Line { x1: f32, y1: f32, x2: f32, y2: f32 },
    Polyline(&'static str),
}

impl Icon {
    /// Looks up an icon by the identifier used in the content tables.
    /// Unknown identifiers have no icon.
    pub fn from_id(id: &str) -> Option<Icon> {
        let icon = match id {
            "AlertCircle" => Icon::AlertCircle,
            "Award" => Icon::Award,
            "ChevronRight" => Icon::ChevronRight,
            "Clock" => Icon::Clock,
            "Droplets" => Icon::Droplets,
            "Hammer" => Icon::Hammer,
            "Menu" => Icon::Menu,
            "Phone" => Icon::Phone,
            "Search" => Icon::Search,
            "ShieldCheck" => Icon::ShieldCheck,
            "Thermometer" => Icon::Thermometer,
            "ThumbsUp" => Icon::ThumbsUp,
            "Wrench" => Icon::Wrench,
            "X" => Icon::X,
            _ => return None,
        };
        Some(icon)
    }

    pub fn shapes(self) -> &'static [Shape] {
        use Shape::*;
        match self {
            Icon::AlertCircle => &[
                Circle { cx: 12.0, cy: 12.0, r: 10.0 },
                Line { x1: 12.0, y1: 8.0, x2: 12.0, y2: 12.0 },
                Line { x1: 12.0, y1: 16.0, x2: 12.01, y2: 16.0 },
            ],
            Icon::Award => &[
                Circle { cx: 12.0, cy: 8.0, r: 6.0 },
                Path("M15.477 12.89 17 22l-5-3-5 3 1.523-9.11"),
            ],
            Icon::ChevronRight => &[Path("m9 18 6-6-6-6")],
            Icon::Clock => &[
                Circle { cx: 12.0, cy: 12.0, r: 10.0 },
                Polyline("12 6 12 12 16 14"),
            ],
            Icon::Droplets => &[
                Path("M7 16.3c2.2 0 4-1.83 4-4.05 0-1.16-.57-2.26-1.71-3.19S7.29 6.75 7 5.3c-.29 1.45-1.14 2.84-2.29 3.76S3 11.1 3 12.25c0 2.22 1.8 4.05 4 4.05z"),
                Path("M12.56 6.6A10.97 10.97 0 0 0 14 3.02c.5 2.5 2 4.9 4 6.5s3 3.5 3 5.5a6.98 6.98 0 0 1-11.91 4.97"),
            ],
            Icon::Hammer => &[
                Path("m15 12-8.5 8.5c-.83.83-2.17.83-3 0a2.12 2.12 0 0 1 0-3L12 9"),
                Path("M17.64 15 22 10.64"),
                Path("m20.91 11.7-1.25-1.25c-.6-.6-.93-1.4-.93-2.25v-.86L16.01 4.6a5.56 5.56 0 0 0-3.94-1.64H9l.92.82A6.18 6.18 0 0 1 12 8.4v1.56l2 2h2.47l2.26 1.91"),
            ],
            Icon::Menu => &[
                Line { x1: 4.0, y1: 12.0, x2: 20.0, y2: 12.0 },
                Line { x1: 4.0, y1: 6.0, x2: 20.0, y2: 6.0 },
                Line { x1: 4.0, y1: 18.0, x2: 20.0, y2: 18.0 },
            ],
            Icon::Phone => &[Path(
                "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z",
            )],
            Icon::Search => &[
                Circle { cx: 11.0, cy: 11.0, r: 8.0 },
                Path("m21 21-4.3-4.3"),
            ],
            Icon::ShieldCheck => &[
                Path("M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10"),
                Path("m9 12 2 2 4-4"),
            ],
            Icon::Thermometer => &[Path("M14 4v10.54a4 4 0 1 1-4 0V4a2 2 0 0 1 4 0Z")],
            Icon::ThumbsUp => &[
                Path("M7 10v12"),
                Path("M15 5.88 14 10h5.83a2 2 0 0 1 1.92 2.56l-2.33 8A2 2 0 0 1 17.5 22H4a2 2 0 0 1-2-2v-8a2 2 0 0 1 2-2h2.76a2 2 0 0 0 1.79-1.11L12 2a3.13 3.13 0 0 1 3 3.88Z"),
            ],
            Icon::Wrench => &[Path(
                "M14.7 6.3a1 1 0 0 0 0 1.4l1.6 1.6a1 1 0 0 0 1.4 0l3.77-3.77a6 6 0 0 1-7.94 7.94l-6.91 6.91a2.12 2.12 0 0 1-3-3l6.91-6.91a6 6 0 0 1 7.94-7.94l-3.76 3.76z",
            )],
            Icon::X => &[Path("M18 6 6 18"), Path("m6 6 12 12")],
        }
    }
}

fn shape_html(shape: &Shape) -> Html {
    match *shape {
        Shape::Path(d) => html! { <path d={d} /> },
        Shape::Circle { cx, cy, r } => html! {
            <circle cx={cx.to_string()} cy={cy.to_string()} r={r.to_string()} />
        },
        Shape::Line { x1, y1, x2, y2 } => html! {
            <line x1={x1.to_string()} y1={y1.to_string()} x2={x2.to_string()} y2={y2.to_string()} />
        },
        Shape::Polyline(points) => html! { <polyline points={points} /> },
    }
}

#[derive(Properties, PartialEq)]
pub struct IconViewProps {
    pub icon: Icon,
    #[prop_or(24)]
    pub size: u32,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(IconView)]
pub fn icon_view(props: &IconViewProps) -> Html {
    let size = props.size.to_string();
    html! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width={size.clone()}
            height={size}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class={props.class.clone()}
            aria-hidden="true"
        >
            { for props.icon.shapes().iter().map(shape_html) }
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_icons_resolve() {
        for id in ["AlertCircle", "Droplets", "Search", "Thermometer", "Wrench", "Hammer"] {
            assert!(Icon::from_id(id).is_some(), "{id}");
        }
        assert_eq!(Icon::from_id("Wrench"), Some(Icon::Wrench));
    }

    #[test]
    fn unknown_icon_is_none() {
        assert_eq!(Icon::from_id("Faucet"), None);
        assert_eq!(Icon::from_id(""), None);
        assert_eq!(Icon::from_id("wrench"), None);
    }

    #[test]
    fn every_icon_has_shapes() {
        let all = [
            Icon::AlertCircle,
            Icon::Award,
            Icon::ChevronRight,
            Icon::Clock,
            Icon::Droplets,
            Icon::Hammer,
            Icon::Menu,
            Icon::Phone,
            Icon::Search,
            Icon::ShieldCheck,
            Icon::Thermometer,
            Icon::ThumbsUp,
            Icon::Wrench,
            Icon::X,
        ];
        for icon in all {
            assert!(!icon.shapes().is_empty(), "{icon:?}");
        }
    }
}
