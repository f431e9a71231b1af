use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::logo::StrataiLogo;
use crate::config::SiteConfig;
use crate::scroll::{jump_to, scrolled_past, Anchor};

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let is_scrolled = use_state_eq(|| false);

    // Listener lives exactly as long as the navbar.
    {
        let is_scrolled = is_scrolled.clone();
        let threshold = config.nav_scroll_threshold_px;
        use_event_with_window("scroll", move |_: Event| {
            let offset = web_sys::window()
                .and_then(|window| window.scroll_y().ok())
                .unwrap_or(0.0);
            is_scrolled.set(scrolled_past(offset, threshold));
        });
    }

    let book_assessment = Callback::from(|_: MouseEvent| {
        jump_to(Anchor::Assessment);
    });

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <StrataiLogo class="nav-logo" />
                <button class="btn-premium nav-cta" onclick={book_assessment}>
                    {"Book Assessment"}
                </button>
            </div>
        </nav>
    }
}
