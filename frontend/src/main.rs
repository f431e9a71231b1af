use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod content;
mod reveal;
mod scroll;
mod styles;
mod submission;
mod timer_slot;
mod components {
    pub mod lead_form;
    pub mod logo;
    pub mod navbar;
    pub mod scroll_reveal;
}
mod pages {
    pub mod landing;
}

use config::SiteConfig;
use pages::landing::Landing;
use styles::GlobalStyles;


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Landing,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Landing => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            info!("Unknown path, redirecting to Landing page");
            html! { <Redirect<Route> to={Route::Landing} /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    let site_config = SiteConfig::default();

    html! {
        <ContextProvider<SiteConfig> context={site_config}>
            <GlobalStyles />
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<SiteConfig>>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
