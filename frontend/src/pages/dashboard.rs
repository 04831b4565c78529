use rideshare_lib::{
    controller::dashboard::{load, DASHBOARD_FAILED},
    navigation::Page,
    view::{alert::Alert, dashboard::DashboardView},
};
use gloo_console::error;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::loading;
use crate::{components::alert::AlertBox, use_app, AppContext};

fn stat(icon: &'static str, label: &'static str, value: String) -> Html {
    html! {
        <div class="col-md-4 mb-3">
            <div class="card stat-card text-center h-100">
                <div class="card-body">
                    <i class={classes!("bi", icon, "fs-1", "text-primary")}></i>
                    <div class="stat-value">{ value }</div>
                    <div class="text-muted">{ label }</div>
                </div>
            </div>
        </div>
    }
}

fn shortcut(app: &AppContext, page: Page, label: &'static str) -> Html {
    let app = app.clone();
    let onclick = Callback::from(move |_: MouseEvent| app.navigate(page.clone()));
    html! { <button class="btn btn-outline-primary me-2 mb-2" {onclick}>{ label }</button> }
}

fn render_rider(app: &AppContext, reservations: usize) -> Html {
    html! { <>
        <div class="row">
            { stat("bi-calendar-check", "Reservations", reservations.to_string()) }
        </div>
        <div class="mt-3">
            { shortcut(app, Page::Search(Default::default()), "Find a ride") }
            { shortcut(app, Page::Reservations, "My reservations") }
        </div>
    </> }
}

fn render_driver(app: &AppContext, rides: usize, reservations: usize, rating: &str) -> Html {
    html! { <>
        <div class="row">
            { stat("bi-car-front", "Rides", rides.to_string()) }
            { stat("bi-calendar-check", "Reservations", reservations.to_string()) }
            { stat("bi-star", "Rating", rating.to_owned()) }
        </div>
        <div class="mt-3">
            { shortcut(app, Page::PublishRide, "Publish a ride") }
            { shortcut(app, Page::MyRides, "My rides") }
            { shortcut(app, Page::Reservations, "My reservations") }
        </div>
    </> }
}

#[function_component]
pub fn DashboardPage() -> Html {
    let app = use_app();
    let view = use_state(|| None::<DashboardView>);
    let failed = use_state(|| false);
    let alert = use_state(|| None);

    {
        let app = app.clone();
        let (view, failed, alert) = (view.clone(), failed.clone(), alert.clone());
        use_effect_with((), move |_| {
            spawn_local(async move {
                match load(&app).await {
                    Ok(loaded) => view.set(Some(loaded)),
                    Err(err) if err.is_redirect() => {}
                    Err(err) => {
                        error!(format!("Dashboard error: {err}"));
                        failed.set(true);
                        alert.set(Some(Alert::warning(DASHBOARD_FAILED)));
                    }
                }
            });
        });
    }

    let body = match &*view {
        None if *failed => html! {},
        None => loading("Loading dashboard..."),
        Some(view @ DashboardView::Rider { reservations, .. }) => html! { <>
            <h2 class="mb-4">{ view.welcome() }</h2>
            { render_rider(&app, *reservations) }
        </> },
        Some(view @ DashboardView::Driver { rides, reservations, rating, .. }) => html! { <>
            <h2 class="mb-4">{ view.welcome() }</h2>
            { render_driver(&app, *rides, *reservations, rating) }
        </> },
    };

    html! {
        <div class="container py-4">
            <AlertBox alert={alert} />
            { body }
        </div>
    }
}
