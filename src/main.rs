use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod anchors;
mod config;
mod content;
mod page;
mod scroll;
mod components {
    pub mod badge;
    pub mod bullets;
    pub mod feature;
    pub mod icon;
    pub mod reveal;
    pub mod scene;
    pub mod stat;
}
mod sections {
    pub mod community;
    pub mod footer;
    pub mod hero;
    pub mod insurance;
    pub mod mentor;
    pub mod nav;
    pub mod pillars;
    pub mod planner;
    pub mod play;
    pub mod sustain;
}

use page::Page;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering landing page");
            html! { <Page /> }
        }
        Route::NotFound => {
            info!("Unknown path, redirecting to landing page");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // A page without logs still renders fine
    let _ = console_log::init_with_level(config::log_level());

    info!("Starting {}", config::BRAND_NAME);
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landing_page_lives_at_root() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::NotFound.to_path(), "/404");
    }
}
