use gloo_console::info;
use rideshare_lib::{
    navigation::Page,
    view::nav::{nav_menu, NavLink, NavMenu},
};
use yew::prelude::*;
use yew_router::hooks::use_route;

use crate::{use_app, AppContext, Route};

fn go_to(app: &AppContext, page: Page) -> Callback<MouseEvent> {
    let app = app.clone();
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        app.navigate(page.clone());
    })
}

fn nav_item(app: &AppContext, link: NavLink) -> Html {
    html! {
        <li class="nav-item">
            <a class="nav-link" href={link.page.path()} onclick={go_to(app, link.page.clone())}>
                <i class={classes!("bi", link.icon, "me-1")}></i>{ link.label }
            </a>
        </li>
    }
}

#[function_component]
pub fn NavBar() -> Html {
    let app = use_app();
    // subscribing to the route re-renders the menu after login, logout and 401s
    let _ = use_route::<Route>();

    let menu = match nav_menu(app.current_user().as_ref()) {
        NavMenu::Guest { links } => html! {
            { for links.into_iter().map(|link| nav_item(&app, link)) }
        },
        NavMenu::Member { display_name, links } => {
            let logout = {
                let app = app.clone();
                Callback::from(move |e: MouseEvent| {
                    e.prevent_default();
                    info!("Logging out");
                    app.logout();
                })
            };

            html! { <>
                { for links.into_iter().map(|link| nav_item(&app, link)) }
                <li class="nav-item">
                    <span class="navbar-text mx-2"><i class="bi bi-person-circle me-1"></i>{ display_name }</span>
                </li>
                <li class="nav-item">
                    <a class="nav-link" href="/" onclick={logout}>
                        <i class="bi bi-box-arrow-right me-1"></i>{ "Logout" }
                    </a>
                </li>
            </> }
        }
    };

    html! {
        <nav class="navbar navbar-expand-lg navbar-dark bg-primary">
            <div class="container">
                <a class="navbar-brand" href="/" onclick={go_to(&app, Page::Index)}>
                    <i class="bi bi-car-front-fill me-2"></i>{ "RideShare" }
                </a>
                <ul class="navbar-nav me-auto">
                    <li class="nav-item">
                        <a class="nav-link" href="/search" onclick={go_to(&app, Page::Search(Default::default()))}>
                            <i class="bi bi-search me-1"></i>{ "Find a ride" }
                        </a>
                    </li>
                </ul>
                <ul class="navbar-nav ms-auto">
                    { menu }
                </ul>
            </div>
        </nav>
    }
}
