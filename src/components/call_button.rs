use yew::prelude::*;

use crate::config;
use crate::icons::{Icon, IconView};

#[derive(Properties, PartialEq)]
pub struct PhoneLinkProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(24)]
    pub icon_size: u32,
    #[prop_or_default]
    pub children: Children,
}

/// Anchor that hands off to the dialer. Every call-to-action goes through here.
#[function_component(PhoneLink)]
pub fn phone_link(props: &PhoneLinkProps) -> Html {
    html! {
        <a href={config::PHONE_URI} target="_top" class={props.class.clone()}>
            <IconView icon={Icon::Phone} size={props.icon_size} />
            { for props.children.iter() }
        </a>
    }
}

#[function_component(StickyCallButton)]
pub fn sticky_call_button() -> Html {
    html! {
        <div class="sticky-call">
            <style>
                {r#"
                    .sticky-call {
                        position: fixed;
                        bottom: 1.5rem;
                        right: 1.5rem;
                        z-index: 40;
                    }
                    .sticky-call a {
                        width: 4rem;
                        height: 4rem;
                        background: var(--accent);
                        color: #fff;
                        border-radius: 9999px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                        animation: pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
                    }
                    @keyframes pulse {
                        50% { opacity: 0.5; }
                    }
                    @media (min-width: 768px) {
                        .sticky-call { display: none; }
                    }
                "#}
            </style>
            <PhoneLink icon_size={32} />
        </div>
    }
}
