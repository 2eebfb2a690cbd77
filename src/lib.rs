use std::rc::Rc;

use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod anim;
pub mod canvas;
pub mod config;
pub mod content;
pub mod dom;
pub mod error;
pub mod particles;
pub mod scroll;
pub mod components {
    pub mod hero;
    pub mod particle_canvas;
    pub mod reveal;
}

use components::hero::{HeroVariant, LandingHero};
use config::SiteConfig;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/simple")]
    Simple,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route, site: Rc<SiteConfig>) -> Html {
    match route {
        Route::Home => {
            info!("Rendering hero with particles");
            html! { <LandingHero variant={HeroVariant::Particles} site={site} /> }
        }
        Route::Simple => {
            info!("Rendering simple hero");
            html! { <LandingHero variant={HeroVariant::Simple} site={site} /> }
        }
        Route::NotFound => {
            info!("Unknown route, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component]
pub fn App() -> Html {
    let site = use_memo(|_| SiteConfig::load(), ());

    let render = Callback::from(move |route: Route| switch(route, site.clone()));

    html! {
        <BrowserRouter>
            <main class="page">
                <Switch<Route> render={render} />
            </main>
        </BrowserRouter>
    }
}
