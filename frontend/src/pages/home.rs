use rideshare_lib::{
    controller::search::{quick_search, SearchQuery},
    navigation::Page,
    view::Viewer,
};
use yew::prelude::*;

use super::{bind_input, today};
use crate::{use_app, AppContext};

fn link_button(app: &AppContext, page: Page, class: &'static str, label: &'static str) -> Html {
    let app = app.clone();
    let onclick = Callback::from(move |_: MouseEvent| app.navigate(page.clone()));
    html! { <button class={classes!("btn", "btn-lg", "me-2", class)} {onclick}>{ label }</button> }
}

fn guest_actions(app: &AppContext) -> Html {
    html! { <>
        { link_button(app, Page::Register, "btn-light", "Get started") }
        { link_button(app, Page::Login, "btn-outline-light", "Login") }
    </> }
}

fn rider_actions(app: &AppContext) -> Html {
    html! { <>
        { link_button(app, Page::Reservations, "btn-light", "My reservations") }
        { link_button(app, Page::Dashboard, "btn-outline-light", "Dashboard") }
    </> }
}

fn driver_actions(app: &AppContext) -> Html {
    html! { <>
        { link_button(app, Page::PublishRide, "btn-light", "Publish a ride") }
        { link_button(app, Page::MyRides, "btn-outline-light", "My rides") }
    </> }
}

#[function_component]
pub fn HomePage() -> Html {
    let app = use_app();
    let origin = use_state(String::new);
    let destination = use_state(String::new);
    let date = use_state(String::new);

    let onsubmit = {
        let app = app.clone();
        let (origin, destination, date) = (origin.clone(), destination.clone(), date.clone());
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            quick_search(&app, SearchQuery::new(&origin, &destination, &date));
        })
    };

    let actions = match app.viewer() {
        Viewer::Guest => guest_actions(&app),
        Viewer::Rider => rider_actions(&app),
        Viewer::Driver => driver_actions(&app),
    };

    html! { <>
        <section class="hero-section">
            <div class="container text-center">
                <h1 class="display-4 fw-bold">{ "Share the ride, split the cost" }</h1>
                <p class="lead mb-4">{ "Find drivers heading your way or offer the empty seats in your car." }</p>
                { actions }
            </div>
        </section>
        <section class="container py-5">
            <div class="card shadow-sm">
                <div class="card-body">
                    <h4 class="card-title mb-3"><i class="bi bi-search me-2"></i>{ "Quick search" }</h4>
                    <form class="row g-3" {onsubmit}>
                        <div class="col-md-4">
                            <input class="form-control" placeholder="From" value={(*origin).clone()} oninput={bind_input(&origin)} />
                        </div>
                        <div class="col-md-4">
                            <input class="form-control" placeholder="To" value={(*destination).clone()} oninput={bind_input(&destination)} />
                        </div>
                        <div class="col-md-2">
                            <input class="form-control" type="date" min={today()} value={(*date).clone()} oninput={bind_input(&date)} />
                        </div>
                        <div class="col-md-2 d-grid">
                            <button class="btn btn-primary" type="submit">{ "Search" }</button>
                        </div>
                    </form>
                </div>
            </div>
        </section>
    </> }
}
