use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::config;
use crate::icons::{Icon, IconView};
use crate::render::ServiceCard;

#[derive(Properties, PartialEq)]
pub struct ServicesProps {
    pub cards: Vec<ServiceCard>,
}

#[function_component(Services)]
pub fn services(props: &ServicesProps) -> Html {
    html! {
        <section id="services" class="services">
            <style>
                {r#"
                    .services {
                        background: #f9fafb;
                        padding: 6rem 0;
                    }
                    .section-heading {
                        text-align: center;
                        margin-bottom: 4rem;
                    }
                    .section-heading h2 {
                        font-size: clamp(2.25rem, 5vw, 3rem);
                        font-weight: 700;
                        margin-bottom: 1rem;
                    }
                    .heading-rule {
                        width: 6rem;
                        height: 0.375rem;
                        background: var(--accent);
                        margin: 0 auto 1.5rem;
                    }
                    .section-heading p {
                        color: rgba(15, 42, 68, 0.8);
                        max-width: 42rem;
                        margin: 0 auto;
                        font-size: 1.125rem;
                    }
                    .services-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 2rem;
                    }
                    @media (min-width: 768px) {
                        .services-grid { grid-template-columns: repeat(2, 1fr); }
                    }
                    @media (min-width: 1024px) {
                        .services-grid { grid-template-columns: repeat(3, 1fr); }
                    }
                    .service-card {
                        background: #fff;
                        padding: 2rem;
                        border-radius: 1rem;
                        border: 1px solid #f3f4f6;
                        box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
                        transition: transform 0.3s, box-shadow 0.3s;
                    }
                    .service-card:hover {
                        transform: translateY(-4px);
                        box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
                    }
                    .service-icon {
                        background: rgba(15, 42, 68, 0.05);
                        color: var(--primary);
                        width: 4rem;
                        height: 4rem;
                        border-radius: 0.75rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        margin-bottom: 1.5rem;
                    }
                    .service-card h3 {
                        font-size: 1.5rem;
                        font-weight: 700;
                        margin-bottom: 1rem;
                    }
                    .service-card p {
                        color: rgba(15, 42, 68, 0.8);
                        line-height: 1.625;
                        margin-bottom: 1.5rem;
                    }
                    .card-call {
                        color: var(--accent);
                        font-weight: 700;
                        display: inline-flex;
                        align-items: center;
                        gap: 0.25rem;
                        text-decoration: none;
                        transition: gap 0.2s;
                    }
                    .card-call:hover { gap: 0.5rem; }
                "#}
            </style>
            <div class="section-padding">
                <div class="section-heading">
                    <h2>{"Our Professional Services"}</h2>
                    <div class="heading-rule"></div>
                    <p>
                        {"We offer a comprehensive range of plumbing solutions for residential and commercial properties in Durham and the surrounding areas."}
                    </p>
                </div>
                <div class="services-grid">
                    { props.cards.iter().map(|card| html! {
                        <ServiceCardView key={card.title} card={card.clone()} />
                    }).collect::<Html>() }
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct ServiceCardProps {
    pub card: ServiceCard,
}

#[function_component(ServiceCardView)]
pub fn service_card_view(props: &ServiceCardProps) -> Html {
    let card = &props.card;
    html! {
        <Reveal class="service-card" delay={card.delay}>
            <div class="service-icon">
                if let Some(icon) = card.icon {
                    <IconView {icon} size={32} />
                }
            </div>
            <h3>{card.title}</h3>
            <p>{card.description}</p>
            <a href={config::PHONE_URI} target="_top" class="card-call">
                {"Call Now"}
                <IconView icon={Icon::ChevronRight} size={18} />
            </a>
        </Reveal>
    }
}
