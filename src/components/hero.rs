use yew::prelude::*;

use crate::components::call_button::PhoneLink;

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section class="hero">
            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 80vh;
                        display: flex;
                        align-items: center;
                        padding: 5rem 0 8rem;
                        overflow: hidden;
                        background: var(--primary);
                        color: #fff;
                    }
                    .hero-content {
                        max-width: 48rem;
                        animation: riseIn 0.8s ease-out;
                    }
                    .hero h1 {
                        font-size: clamp(3rem, 7vw, 4.5rem);
                        font-weight: 800;
                        line-height: 1.15;
                        margin-bottom: 1.5rem;
                    }
                    .hero-subtitle {
                        font-size: clamp(1.25rem, 2.5vw, 1.5rem);
                        font-weight: 500;
                        color: rgba(255, 255, 255, 0.8);
                        max-width: 42rem;
                        margin-bottom: 2.5rem;
                    }
                    .hero-cta {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.75rem;
                        font-size: 1.125rem;
                        padding: 1rem 2rem;
                    }
                "#}
            </style>
            <div class="section-padding">
                <div class="hero-content">
                    <h1>{"Reliable Plumbing Services in Durham, NC"}</h1>
                    <p class="hero-subtitle">
                        {"Fast, affordable, and professional plumbing, available when you need it. From emergency repairs to full installations, we've got you covered."}
                    </p>
                    <PhoneLink class="btn-primary hero-cta">
                        {"Call Now"}
                    </PhoneLink>
                </div>
            </div>
        </section>
    }
}
