use std::{ops::Deref, rc::Rc};

use browser::{BrowserClient, BrowserNavigator, LocalStore};
use components::nav_bar::NavBar;
use gloo_console::{error, info};
use rideshare_lib::{config::ClientConfig, session::SessionManager};
use yew::prelude::*;
use yew_router::{BrowserRouter, Routable, Switch};

mod browser;
mod components;
mod pages;

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/search")]
    Search,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/dashboard")]
    Dashboard,
    #[at("/reservations")]
    Reservations,
    #[at("/my-rides")]
    MyRides,
    #[at("/profile")]
    Profile,
    #[at("/publish-ride")]
    PublishRide,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// The session manager shared with every page through a context.
#[derive(Clone)]
pub struct AppContext(Rc<SessionManager>);

impl PartialEq for AppContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for AppContext {
    type Target = SessionManager;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// The app context. `App` provides it above every page.
#[hook]
pub fn use_app() -> AppContext {
    use_context::<AppContext>().expect("AppContext is provided by App")
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <pages::home::HomePage /> },
        Route::Search => html! { <pages::search::SearchPage /> },
        Route::Login => html! { <pages::login::LoginPage /> },
        Route::Register => html! { <pages::register::RegisterPage /> },
        Route::Dashboard => html! { <pages::dashboard::DashboardPage /> },
        Route::Reservations => html! { <pages::reservations::ReservationsPage /> },
        Route::MyRides => html! { <pages::my_rides::MyRidesPage /> },
        Route::Profile => html! { <pages::profile::ProfilePage /> },
        Route::PublishRide => html! { <pages::publish_ride::PublishRidePage /> },
        Route::NotFound => {
            error!("Invalid route");
            html! {
                <div class="container py-5 text-center">
                    <h2>{"Page not found"}</h2>
                </div>
            }
        }
    }
}

struct App {
    context: AppContext,
}

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let config = ClientConfig::with_api_base(option_env!("RIDESHARE_API_BASE"));
        info!(format!("API base: {}", config.api_base));

        let manager = SessionManager::new(
            config,
            Box::new(BrowserClient),
            Box::new(LocalStore::new()),
            Box::new(BrowserNavigator),
        );

        Self {
            context: AppContext(Rc::new(manager)),
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <ContextProvider<AppContext> context={self.context.clone()}>
                <BrowserRouter>
                    <NavBar />
                    <main>
                        <Switch<Route> render={switch} />
                    </main>
                </BrowserRouter>
            </ContextProvider<AppContext>>
        }
    }
}

fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    yew::Renderer::<App>::new().render();
}
