use yew::prelude::*;

use crate::components::call_button::PhoneLink;
use crate::config;

#[function_component(CallToAction)]
pub fn call_to_action() -> Html {
    html! {
        <section class="cta-banner">
            <style>
                {r#"
                    .cta-banner {
                        padding: 6rem 0;
                        overflow: hidden;
                        background: var(--accent);
                        color: #fff;
                        text-align: center;
                    }
                    .cta-banner h2 {
                        font-size: clamp(2.25rem, 5vw, 3rem);
                        font-weight: 700;
                        margin-bottom: 1.5rem;
                    }
                    .cta-banner p {
                        font-size: 1.25rem;
                        font-weight: 500;
                        opacity: 0.9;
                        max-width: 42rem;
                        margin: 0 auto 2.5rem;
                    }
                    .cta-phone {
                        background: #fff;
                        color: var(--accent);
                        font-size: 1.25rem;
                        font-weight: 700;
                        padding: 1.25rem 2.5rem;
                        border-radius: 9999px;
                        display: inline-flex;
                        align-items: center;
                        gap: 0.75rem;
                        text-decoration: none;
                        transition: background 0.2s;
                    }
                    .cta-phone:hover { background: #f3f4f6; }
                "#}
            </style>
            <div class="section-padding">
                <h2>{"Need a plumber now? We're ready to help."}</h2>
                <p>
                    {"Don't let a small leak turn into a big disaster. Our experts are standing by for all your plumbing needs."}
                </p>
                <PhoneLink class="cta-phone" icon_size={28}>
                    {config::PHONE_DISPLAY}
                </PhoneLink>
            </div>
        </section>
    }
}
