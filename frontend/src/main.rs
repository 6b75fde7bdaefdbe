use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod contact {
    pub mod form;
    pub mod intake;
}
mod components {
    pub mod floating_whatsapp;
    pub mod school_contact_modal;
}
mod pages {
    pub mod for_schools;
}

use pages::for_schools::ForSchools;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/for-schools")]
    ForSchools,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering For Schools page");
            html! { <ForSchools /> }
        }
        Route::ForSchools => {
            info!("Rendering For Schools page");
            html! { <ForSchools /> }
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

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
