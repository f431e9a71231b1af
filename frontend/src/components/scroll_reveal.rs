use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config::SiteConfig;
use crate::reveal::{self, Phase, Reveal, RevealController};

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

#[derive(Properties, PartialEq)]
pub struct ScrollRevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub delay_ms: u32,
    /// Falls back to the site-wide reveal threshold.
    #[prop_or_default]
    pub threshold: Option<f64>,
}

fn observer_supported(window: &web_sys::Window) -> bool {
    js_sys::Reflect::has(window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

/// Hooks `element` up to an `IntersectionObserver` driving `controller`.
/// Returns `None` when the browser can't observe it.
fn start_observing(
    element: &Element,
    controller: Rc<RefCell<RevealController>>,
    visible: UseStateHandle<bool>,
) -> Option<(IntersectionObserver, ObserverCallback)> {
    let window = web_sys::window()?;
    if !observer_supported(&window) {
        return None;
    }

    let threshold = controller.borrow().threshold();
    let callback_controller = controller.clone();
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            let outcome = callback_controller.borrow_mut().observe(entry.is_intersecting());
            if outcome == Reveal::Shown {
                observer.disconnect();
                visible.set(true);
                break;
            }
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let mut options = IntersectionObserverInit::new();
    options.threshold(&JsValue::from_f64(threshold));

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            controller.borrow_mut().attach();
            observer.observe(element);
            Some((observer, callback))
        }
        Err(e) => {
            warn!("IntersectionObserver construction failed: {:?}", e);
            None
        }
    }
}

/// Wraps a block of content and fades it in the first time it scrolls into
/// view.
#[function_component(ScrollReveal)]
pub fn scroll_reveal(props: &ScrollRevealProps) -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let node = use_node_ref();
    let visible = use_state_eq(|| false);
    let threshold = reveal::effective_threshold(props.threshold, &config);

    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with_deps(
            move |threshold| {
                let controller = Rc::new(RefCell::new(RevealController::new(*threshold)));
                // A region never hides again, so a re-run after the reveal
                // has nothing to observe.
                let already_shown = *visible;
                let subscription = if already_shown {
                    None
                } else {
                    node.cast::<Element>()
                        .and_then(|element| start_observing(&element, controller.clone(), visible.clone()))
                };

                if subscription.is_none() && !already_shown {
                    warn!("Viewport observation unavailable, showing region immediately");
                    controller.borrow_mut().fail_open();
                    visible.set(true);
                }

                move || {
                    let mut region = controller.borrow_mut();
                    if region.phase() == Phase::Observing && !region.visible() {
                        debug!("Region torn down before it was revealed");
                    }
                    region.detach();
                    if let Some((observer, _callback)) = subscription {
                        observer.disconnect();
                    }
                }
            },
            threshold,
        );
    }

    let presentation = reveal::presentation(*visible, props.delay_ms);

    html! {
        <div
            ref={node}
            class={classes!(props.class.clone(), presentation.class)}
            style={presentation.style}
        >
            { for props.children.iter() }
        </div>
    }
}
