use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod animation;
mod config;
mod frame_loop;
mod lifecycle;
mod social_proof;
mod components {
    pub mod animated_counter;
}
mod pages {
    pub mod about;
}

use config::AppConfig;
use pages::about::About;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home | Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <div class="not-found">
                    <h1>{"Page not found"}</h1>
                    <Link<Route> to={Route::About}>{"Back to RAZE"}</Link<Route>>
                </div>
            }
        }
    }
}

#[derive(Properties, PartialEq)]
struct AppProps {
    config: AppConfig,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    html! {
        <ContextProvider<AppConfig> context={props.config.clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<AppConfig>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    let config = AppConfig::from_build_env();
    info!("Starting storefront against backend {:?}", config.backend_url);
    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
