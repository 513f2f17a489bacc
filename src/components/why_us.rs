use yew::prelude::*;

use crate::components::reveal::{Reveal, RevealEffect};
use crate::content::SELLING_POINTS;
use crate::icons::{Icon, IconView};

#[function_component(WhyUs)]
pub fn why_us() -> Html {
    html! {
        <section id="why-us" class="why-us">
            <style>
                {r#"
                    .why-us {
                        padding: 6rem 0;
                        overflow: hidden;
                    }
                    .why-us-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 4rem;
                        align-items: center;
                    }
                    @media (min-width: 1024px) {
                        .why-us-grid { grid-template-columns: repeat(2, 1fr); }
                    }
                    .why-us h2 {
                        font-size: clamp(2.25rem, 5vw, 3rem);
                        font-weight: 700;
                        margin-bottom: 2rem;
                    }
                    .points {
                        display: flex;
                        flex-direction: column;
                        gap: 2rem;
                    }
                    .point {
                        display: flex;
                        gap: 1.5rem;
                    }
                    .point-icon {
                        flex-shrink: 0;
                        background: var(--accent);
                        color: #fff;
                        width: 3rem;
                        height: 3rem;
                        border-radius: 9999px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .point h4 {
                        font-size: 1.25rem;
                        font-weight: 700;
                        margin-bottom: 0.5rem;
                    }
                    .point p {
                        color: rgba(15, 42, 68, 0.8);
                        line-height: 1.625;
                    }
                    .expert-panel {
                        background: rgba(232, 98, 44, 0.05);
                        border: 2px dashed rgba(232, 98, 44, 0.2);
                        border-radius: 1.5rem;
                        padding: 3rem;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        text-align: center;
                        color: var(--accent);
                    }
                    .expert-panel h3 {
                        font-size: 1.875rem;
                        font-weight: 700;
                        margin: 1.5rem 0 1rem;
                        color: var(--primary);
                    }
                    .expert-panel p {
                        color: rgba(15, 42, 68, 0.7);
                        font-size: 1.125rem;
                    }
                "#}
            </style>
            <div class="section-padding why-us-grid">
                <Reveal effect={RevealEffect::Slide}>
                    <h2>{"Why Us?"}</h2>
                    <div class="points">
                        { for SELLING_POINTS.iter().map(|point| html! {
                            <div key={point.title} class="point">
                                <div class="point-icon">
                                    if let Some(icon) = Icon::from_id(point.icon) {
                                        <IconView {icon} />
                                    }
                                </div>
                                <div>
                                    <h4>{point.title}</h4>
                                    <p>{point.description}</p>
                                </div>
                            </div>
                        }) }
                    </div>
                </Reveal>
                <Reveal class="expert-panel" effect={RevealEffect::Zoom}>
                    <IconView icon={Icon::Wrench} size={80} />
                    <h3>{"Expert Service"}</h3>
                    <p>{"Durham's most trusted plumbing professionals, ready to help 24/7."}</p>
                </Reveal>
            </div>
        </section>
    }
}
