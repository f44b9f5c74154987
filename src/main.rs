use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod capture;
mod components {
    pub mod capture_form;
    pub mod social_links;
}
mod pages {
    pub mod chrome;
    pub mod midnight;
    pub mod pearl;
}

use pages::{chrome::Chrome, midnight::Midnight, pearl::Pearl};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Midnight,
    #[at("/pearl")]
    Pearl,
    #[at("/chrome")]
    Chrome,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Midnight => {
            info!("Rendering Midnight draft");
            html! { <Midnight /> }
        }
        Route::Pearl => {
            info!("Rendering Pearl draft");
            html! { <Pearl /> }
        }
        Route::Chrome => {
            info!("Rendering Chrome draft");
            html! { <Chrome /> }
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
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
