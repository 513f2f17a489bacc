use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::config;
use crate::content::STATS;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id="about" class="about">
            <style>
                {r#"
                    .about {
                        padding: 6rem 0;
                        background: #f9fafb;
                    }
                    .about-inner {
                        max-width: 56rem;
                        margin: 0 auto;
                        text-align: center;
                    }
                    .about h2 {
                        font-size: clamp(2.25rem, 5vw, 3rem);
                        font-weight: 700;
                        margin-bottom: 2rem;
                    }
                    .about-lead {
                        font-size: 1.5rem;
                        color: rgba(15, 42, 68, 0.8);
                        margin-bottom: 2.5rem;
                        line-height: 1.625;
                    }
                    .stats {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 2rem;
                    }
                    @media (min-width: 768px) {
                        .stats { grid-template-columns: repeat(3, 1fr); }
                    }
                    .stat {
                        background: #fff;
                        padding: 1.5rem;
                        border-radius: 1rem;
                        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                    }
                    .stat h4 {
                        font-size: 2.25rem;
                        font-weight: 700;
                        color: var(--accent);
                        margin-bottom: 0.5rem;
                    }
                    .stat p {
                        color: rgba(15, 42, 68, 0.6);
                        font-weight: 700;
                        text-transform: uppercase;
                        font-size: 0.75rem;
                        letter-spacing: 0.1em;
                    }
                "#}
            </style>
            <div class="section-padding">
                <Reveal class="about-inner">
                    <h2>{"Locally Rooted in Durham"}</h2>
                    <p class="about-lead">
                        {config::BUSINESS_LEGAL_NAME}
                        {" offers comprehensive solutions for all your plumbing needs. From routine maintenance to emergency repairs, our skilled professionals deliver reliable service with precision and care."}
                    </p>
                    <div class="stats">
                        { for STATS.iter().map(|stat| html! {
                            <div key={stat.label} class="stat">
                                <h4>{stat.value}</h4>
                                <p>{stat.label}</p>
                            </div>
                        }) }
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
