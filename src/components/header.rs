use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::call_button::PhoneLink;
use crate::config;
use crate::content::{anchor_id, NAV_ITEMS};
use crate::icons::{Icon, IconView};
use crate::render::{HeaderVariant, MenuPresence};

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub variant: HeaderVariant,
    pub menu_open: bool,
    pub on_toggle: Callback<()>,
    pub on_navigate: Callback<AttrValue>,
}

fn nav_links(on_navigate: &Callback<AttrValue>, class: &'static str) -> Html {
    NAV_ITEMS
        .iter()
        .map(|label| {
            let id = AttrValue::from(anchor_id(label));
            let onclick = {
                let on_navigate = on_navigate.clone();
                let id = id.clone();
                Callback::from(move |e: MouseEvent| {
                    e.prevent_default();
                    on_navigate.emit(id.clone());
                })
            };
            html! {
                <a key={*label} href={format!("#{}", id)} class={class} {onclick}>
                    {*label}
                </a>
            }
        })
        .collect()
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let HeaderProps { variant, menu_open, on_toggle, on_navigate } = props;
    let text_class = variant.text_class();

    // Keep the menu mounted until its close transition has played.
    let menu_mounted = use_state(|| *menu_open);
    {
        let menu_mounted = menu_mounted.clone();
        use_effect_with_deps(
            move |open: &bool| {
                if *open && !*menu_mounted {
                    menu_mounted.set(true);
                }
                let exit = (!*open && *menu_mounted).then(|| {
                    let menu_mounted = menu_mounted.clone();
                    Timeout::new(config::MENU_EXIT_MS, move || menu_mounted.set(false))
                });
                move || drop(exit)
            },
            *menu_open,
        );
    }
    let presence = MenuPresence::from_flags(*menu_open, *menu_mounted);

    let toggle_menu = {
        let on_toggle = on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <header class={variant.header_class()}>
            <style>
                {r#"
                    .site-header {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        transition: all 0.3s ease;
                    }
                    .site-header.transparent {
                        background: transparent;
                        padding: 1.25rem 0;
                    }
                    .site-header.glass-header {
                        background: rgba(255, 255, 255, 0.9);
                        backdrop-filter: blur(12px);
                        box-shadow: 0 1px 8px rgba(15, 42, 68, 0.08);
                        padding: 0.75rem 0;
                    }
                    .header-inner {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .brand {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                    }
                    .brand-mark {
                        background: var(--accent);
                        color: #fff;
                        padding: 0.5rem;
                        border-radius: 0.5rem;
                        display: flex;
                    }
                    .brand-name {
                        font-weight: 700;
                        font-size: 1.25rem;
                        letter-spacing: -0.025em;
                        color: var(--accent);
                    }
                    .desktop-nav {
                        display: none;
                        align-items: center;
                        gap: 2rem;
                    }
                    .desktop-nav a {
                        font-weight: 500;
                        text-decoration: none;
                        transition: color 0.2s;
                    }
                    .desktop-nav a:hover {
                        color: var(--accent);
                    }
                    .text-light { color: #fff; }
                    .text-dark { color: var(--primary); }
                    .menu-toggle {
                        background: none;
                        border: none;
                        padding: 0.5rem;
                        cursor: pointer;
                    }
                    .mobile-nav {
                        background: #fff;
                        border-bottom: 1px solid #f3f4f6;
                        overflow: hidden;
                        animation: menuIn 0.25s ease-out;
                    }
                    .mobile-nav.closing {
                        pointer-events: none;
                        animation: menuOut 0.25s ease-in forwards;
                    }
                    .mobile-nav-links {
                        display: flex;
                        flex-direction: column;
                        padding: 1rem;
                        gap: 1rem;
                    }
                    .mobile-nav-links a {
                        color: var(--accent);
                        font-weight: 700;
                        text-decoration: none;
                        padding: 0.5rem 0;
                        border-bottom: 1px solid #f9fafb;
                    }
                    .mobile-nav-links .mobile-call {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.5rem;
                        border-bottom: none;
                    }
                    @keyframes menuIn {
                        from { opacity: 0; max-height: 0; }
                        to { opacity: 1; max-height: 24rem; }
                    }
                    @keyframes menuOut {
                        from { opacity: 1; max-height: 24rem; }
                        to { opacity: 0; max-height: 0; }
                    }
                    @media (min-width: 768px) {
                        .desktop-nav { display: flex; }
                        .menu-toggle, .mobile-nav { display: none; }
                    }
                "#}
            </style>
            <div class="header-inner">
                <div class="brand">
                    <div class="brand-mark">
                        <IconView icon={Icon::Wrench} />
                    </div>
                    <span class="brand-name">{config::BUSINESS_NAME}</span>
                </div>

                <nav class={classes!("desktop-nav", text_class)}>
                    { nav_links(on_navigate, text_class) }
                    <PhoneLink class="btn-primary btn-small" icon_size={16}>
                        {config::PHONE_DISPLAY}
                    </PhoneLink>
                </nav>

                <button class={classes!("menu-toggle", text_class)} onclick={toggle_menu} aria-label="Toggle menu">
                    <IconView icon={if *menu_open { Icon::X } else { Icon::Menu }} />
                </button>
            </div>

            if let Some(class) = presence.class() {
                <div {class}>
                    <div class="mobile-nav-links">
                        { nav_links(on_navigate, "") }
                        <PhoneLink class="mobile-call" icon_size={18}>
                            {format!("Call Now: {}", config::PHONE_DISPLAY)}
                        </PhoneLink>
                    </div>
                </div>
            }
        </header>
    }
}
