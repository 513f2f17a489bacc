use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry};
use yew::prelude::*;

/// Becomes true the first time `node` enters the viewport and stays true.
#[hook]
pub fn use_in_view(node: NodeRef) -> bool {
    let in_view = use_state(|| false);

    {
        let in_view = in_view.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let observer = node.cast::<Element>().and_then(|element| {
                    let setter = in_view.setter();
                    let callback = Closure::<dyn Fn(Array, IntersectionObserver)>::new(
                        move |entries: Array, observer: IntersectionObserver| {
                            let visible = entries
                                .iter()
                                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                                .any(|entry| entry.is_intersecting());
                            if visible {
                                setter.set(true);
                                observer.disconnect();
                            }
                        },
                    );
                    match IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
                        Ok(observer) => {
                            observer.observe(&element);
                            Some((observer, callback))
                        }
                        Err(err) => {
                            log::warn!("IntersectionObserver unavailable: {:?}", err);
                            None
                        }
                    }
                });
                // Without an observer just show the content.
                if observer.is_none() {
                    in_view.set(true);
                }
                move || {
                    if let Some((observer, _callback)) = observer {
                        observer.disconnect();
                    }
                }
            },
            node,
        );
    }

    *in_view
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealEffect {
    Rise,
    Slide,
    Zoom,
}

impl RevealEffect {
    pub fn class(self) -> &'static str {
        match self {
            RevealEffect::Rise => "reveal-rise",
            RevealEffect::Slide => "reveal-slide",
            RevealEffect::Zoom => "reveal-zoom",
        }
    }
}

pub fn reveal_classes(class: &Classes, effect: RevealEffect, in_view: bool) -> Classes {
    classes!(class.clone(), "reveal", effect.class(), in_view.then_some("in-view"))
}

pub fn delay_style(delay: f32) -> Option<String> {
    (delay > 0.0).then(|| format!("animation-delay: {}s;", delay))
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(RevealEffect::Rise)]
    pub effect: RevealEffect,
    /// Seconds to wait after entering the viewport.
    #[prop_or_default]
    pub delay: f32,
    #[prop_or_default]
    pub children: Children,
}

/// Plays its enter animation once, when first scrolled into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone());

    html! {
        <div
            ref={node}
            class={reveal_classes(&props.class, props.effect, in_view)}
            style={delay_style(props.delay)}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_until_in_view() {
        let class = classes!("service-card");
        let before = reveal_classes(&class, RevealEffect::Rise, false);
        assert!(before.contains("service-card"));
        assert!(before.contains("reveal-rise"));
        assert!(!before.contains("in-view"));

        let after = reveal_classes(&class, RevealEffect::Rise, true);
        assert!(after.contains("in-view"));
    }

    #[test]
    fn effects_have_distinct_classes() {
        assert_ne!(RevealEffect::Rise.class(), RevealEffect::Slide.class());
        assert_ne!(RevealEffect::Slide.class(), RevealEffect::Zoom.class());
    }

    #[test]
    fn delay_only_when_positive() {
        assert_eq!(delay_style(0.0), None);
        assert_eq!(delay_style(0.5).as_deref(), Some("animation-delay: 0.5s;"));
    }
}
