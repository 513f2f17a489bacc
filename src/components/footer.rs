use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::config;
use crate::content::{anchor_id, QUICK_LINKS, SERVICE_AREAS};
use crate::icons::{Icon, IconView};

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub services: Vec<&'static str>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        background: var(--primary);
                        color: #fff;
                        padding: 5rem 0 2.5rem;
                    }
                    .footer-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 3rem;
                    }
                    @media (min-width: 768px) {
                        .footer-grid { grid-template-columns: repeat(2, 1fr); }
                    }
                    @media (min-width: 1024px) {
                        .footer-grid { grid-template-columns: repeat(4, 1fr); }
                    }
                    .footer-blurb {
                        color: #9ca3af;
                        line-height: 1.625;
                        margin: 1.5rem 0;
                    }
                    .socials {
                        display: flex;
                        gap: 1rem;
                    }
                    .social {
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 9999px;
                        background: rgba(255, 255, 255, 0.1);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        cursor: pointer;
                        transition: background 0.2s;
                    }
                    .social:hover { background: var(--accent); }
                    .site-footer h4 {
                        font-weight: 700;
                        font-size: 1.125rem;
                        margin-bottom: 1.5rem;
                        padding-bottom: 0.5rem;
                        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                    }
                    .site-footer ul {
                        list-style: none;
                        padding: 0;
                        color: #9ca3af;
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }
                    .site-footer ul a {
                        color: inherit;
                        text-decoration: none;
                        transition: color 0.2s;
                    }
                    .site-footer ul a:hover { color: var(--accent); }
                    .footer-bottom {
                        max-width: 80rem;
                        margin: 5rem auto 0;
                        padding: 2rem 1rem 0;
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: space-between;
                        align-items: center;
                        gap: 1rem;
                        color: #6b7280;
                        font-size: 0.875rem;
                    }
                    .legal {
                        display: flex;
                        gap: 2rem;
                    }
                    .legal a {
                        color: inherit;
                        text-decoration: none;
                    }
                    .legal a:hover { color: #fff; }
                "#}
            </style>
            <div class="section-padding footer-grid">
                <div>
                    <div class="brand">
                        <div class="brand-mark">
                            <IconView icon={Icon::Wrench} size={20} />
                        </div>
                        <span class="brand-name">{config::BUSINESS_NAME}</span>
                    </div>
                    <p class="footer-blurb">
                        {config::BUSINESS_LEGAL_NAME}
                        {" offers comprehensive solutions for all your plumbing needs. We are committed to providing the Durham community with exceptional plumbing services."}
                    </p>
                    <div class="socials">
                        { for (0..3).map(|i| html! {
                            <div key={i} class="social">
                                <IconView icon={Icon::ThumbsUp} size={18} />
                            </div>
                        }) }
                    </div>
                </div>

                <div>
                    <h4>{"Quick Links"}</h4>
                    <ul>
                        { for QUICK_LINKS.iter().map(|label| html! {
                            <li key={*label}>
                                <a href={format!("#{}", anchor_id(label))}>{*label}</a>
                            </li>
                        }) }
                    </ul>
                </div>

                <div>
                    <h4>{"Our Services"}</h4>
                    <ul>
                        { for props.services.iter().map(|title| html! {
                            <li key={*title}>
                                <a href="#services">{*title}</a>
                            </li>
                        }) }
                    </ul>
                </div>

                <div>
                    <h4>{"Service Areas"}</h4>
                    <ul>
                        { for SERVICE_AREAS.iter().map(|area| html! {
                            <li key={*area}>{*area}</li>
                        }) }
                    </ul>
                </div>
            </div>

            <div class="footer-bottom">
                <p>{format!("© {} {}. All rights reserved.", year, config::BUSINESS_LEGAL_NAME)}</p>
                <div class="legal">
                    <a href="#">{"Privacy Policy"}</a>
                    <a href="#">{"Terms of Service"}</a>
                </div>
            </div>
        </footer>
    }
}
