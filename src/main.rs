use log::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;
use yew::prelude::*;

mod config;
mod content;
mod icons;
mod navigation;
mod render;
mod view_state;
mod components {
    pub mod about;
    pub mod call_button;
    pub mod cta;
    pub mod footer;
    pub mod header;
    pub mod hero;
    pub mod reveal;
    pub mod services;
    pub mod why_us;
}

use components::{
    about::About,
    call_button::StickyCallButton,
    cta::CallToAction,
    footer::Footer,
    header::Header,
    hero::Hero,
    services::Services,
    why_us::WhyUs,
};
use navigation::BrowserScrollHost;
use view_state::{ViewAction, ViewState};

const BASE_STYLES: &str = r#"
    :root {
        --primary: #0f2a44;
        --accent: #e8622c;
    }
    * { box-sizing: border-box; margin: 0; }
    body {
        font-family: "Inter", system-ui, -apple-system, sans-serif;
        color: var(--primary);
    }
    .page {
        min-height: 100vh;
        display: flex;
        flex-direction: column;
    }
    .section-padding {
        position: relative;
        z-index: 10;
        width: 100%;
        max-width: 80rem;
        margin: 0 auto;
        padding: 0 1rem;
    }
    .btn-primary {
        background: var(--accent);
        color: #fff;
        font-weight: 700;
        border-radius: 9999px;
        text-decoration: none;
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        transition: opacity 0.2s;
    }
    .btn-primary:hover { opacity: 0.9; }
    .btn-small {
        font-size: 0.875rem;
        padding: 0.5rem 1rem;
    }
    .reveal:not(.in-view) { opacity: 0; }
    .reveal.in-view {
        animation-duration: 0.6s;
        animation-timing-function: ease-out;
        animation-fill-mode: backwards;
    }
    .reveal-rise.in-view { animation-name: riseIn; }
    .reveal-slide.in-view { animation-name: slideIn; }
    .reveal-zoom.in-view { animation-name: zoomIn; }
    @keyframes riseIn {
        from { opacity: 0; transform: translateY(30px); }
        to { opacity: 1; transform: translateY(0); }
    }
    @keyframes slideIn {
        from { opacity: 0; transform: translateX(-50px); }
        to { opacity: 1; transform: translateX(0); }
    }
    @keyframes zoomIn {
        from { opacity: 0; transform: scale(0.9); }
        to { opacity: 1; transform: scale(1); }
    }
"#;

#[function_component]
fn App() -> Html {
    let view_state = use_reducer(ViewState::default);

    // Header style follows window scroll for as long as the app is mounted.
    {
        let dispatcher = view_state.dispatcher();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let dispatcher = dispatcher.clone();
                        move || {
                            if let Some(offset) = web_sys::window().and_then(|w| w.scroll_y().ok()) {
                                dispatcher.dispatch(ViewAction::Scroll(offset));
                            }
                        }
                    });
                    match window.add_event_listener_with_callback(
                        "scroll",
                        callback.as_ref().unchecked_ref(),
                    ) {
                        Ok(()) => info!("Scroll listener registered"),
                        Err(err) => log::warn!("Failed to register scroll listener: {:?}", err),
                    }
                    // A reload can restore a scrolled position
                    if let Ok(offset) = window.scroll_y() {
                        dispatcher.dispatch(ViewAction::Scroll(offset));
                    }
                    Box::new(move || {
                        if window
                            .remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            )
                            .is_ok()
                        {
                            info!("Scroll listener removed");
                        }
                    })
                } else {
                    log::warn!("No window, header will not react to scrolling");
                    Box::new(|| ())
                };
                destructor
            },
            (),
        );
    }

    let on_toggle = {
        let view_state = view_state.clone();
        Callback::from(move |_: ()| view_state.dispatch(ViewAction::ToggleMenu))
    };

    let on_navigate = {
        let view_state = view_state.clone();
        Callback::from(move |id: AttrValue| {
            view_state.dispatch(ViewState::on_navigate(&id, &BrowserScrollHost))
        })
    };

    let model = render::compose(&view_state, content::SERVICES);

    html! {
        <div class="page">
            <style>{BASE_STYLES}</style>
            <Header
                variant={model.header}
                menu_open={model.mobile_menu_visible}
                {on_toggle}
                {on_navigate}
            />
            <Hero />
            <Services cards={model.cards} />
            <WhyUs />
            <About />
            <CallToAction />
            <Footer services={model.footer_services} />
            <StickyCallButton />
        </div>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(err) = console_log::init_with_level(config::log_level()) {
        web_sys::console::error_1(&format!("error initializing log: {}", err).into());
    }

    info!("Starting {}", config::BUSINESS_NAME);
    yew::Renderer::<App>::new().render();
}
