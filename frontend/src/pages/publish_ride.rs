use rideshare_lib::{
    controller::rides::{publish, RideForm, PUBLISH_FAILED},
    user::Role,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::{bind_input, bind_textarea, follow, show_error, today};
use crate::{components::alert::AlertBox, use_app};

#[function_component]
pub fn PublishRidePage() -> Html {
    let app = use_app();
    let origin = use_state(String::new);
    let destination = use_state(String::new);
    let date = use_state(String::new);
    let time = use_state(String::new);
    let price = use_state(String::new);
    let seats = use_state(|| "1".to_owned());
    let description = use_state(String::new);
    let busy = use_state(|| false);
    let alert = use_state(|| None);

    // passengers are sent home before they see the form
    {
        let app = app.clone();
        use_effect_with((), move |_| {
            app.require_role(Role::Driver);
        });
    }

    let onsubmit = {
        let app = app.clone();
        let (busy, alert) = (busy.clone(), alert.clone());
        let fields = (
            origin.clone(),
            destination.clone(),
            date.clone(),
            time.clone(),
            price.clone(),
            seats.clone(),
            description.clone(),
        );
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let (origin, destination, date, time, price, seats, description) = &fields;
            let form = RideForm {
                origin: (**origin).clone(),
                destination: (**destination).clone(),
                date: (**date).clone(),
                time: (**time).clone(),
                price: (**price).clone(),
                available_seats: (**seats).clone(),
                description: (**description).clone(),
            };

            busy.set(true);
            let (app, busy, alert) = (app.clone(), busy.clone(), alert.clone());
            spawn_local(async move {
                match publish(&app, &form).await {
                    Ok(outcome) => follow(&app, &alert, outcome).await,
                    Err(err) => {
                        show_error(&alert, &err, PUBLISH_FAILED);
                        busy.set(false);
                    }
                }
            });
        })
    };

    html! {
        <div class="container py-4" style="max-width: 720px;">
            <h2 class="mb-4"><i class="bi bi-plus-circle me-2"></i>{ "Publish a ride" }</h2>
            <AlertBox alert={alert} />
            <form class="card card-body shadow-sm" {onsubmit}>
                <div class="row">
                    <div class="col-md-6 mb-3">
                        <label class="form-label">{ "From" }</label>
                        <input class="form-control" required=true value={(*origin).clone()} oninput={bind_input(&origin)} />
                    </div>
                    <div class="col-md-6 mb-3">
                        <label class="form-label">{ "To" }</label>
                        <input class="form-control" required=true value={(*destination).clone()} oninput={bind_input(&destination)} />
                    </div>
                </div>
                <div class="row">
                    <div class="col-md-6 mb-3">
                        <label class="form-label">{ "Date" }</label>
                        <input class="form-control" type="date" required=true min={today()} value={(*date).clone()} oninput={bind_input(&date)} />
                    </div>
                    <div class="col-md-6 mb-3">
                        <label class="form-label">{ "Time" }</label>
                        <input class="form-control" type="time" required=true value={(*time).clone()} oninput={bind_input(&time)} />
                    </div>
                </div>
                <div class="row">
                    <div class="col-md-6 mb-3">
                        <label class="form-label">{ "Price per seat" }</label>
                        <input class="form-control" type="number" min="0.01" step="0.01" required=true value={(*price).clone()} oninput={bind_input(&price)} />
                    </div>
                    <div class="col-md-6 mb-3">
                        <label class="form-label">{ "Available seats" }</label>
                        <input class="form-control" type="number" min="1" max="8" required=true value={(*seats).clone()} oninput={bind_input(&seats)} />
                    </div>
                </div>
                <div class="mb-3">
                    <label class="form-label">{ "Description" }</label>
                    <textarea class="form-control" rows="3" placeholder="Meeting point, luggage, stops..." value={(*description).clone()} oninput={bind_textarea(&description)} />
                </div>
                <button class="btn btn-primary" type="submit" disabled={*busy}>
                    { if *busy { "Publishing..." } else { "Publish ride" } }
                </button>
            </form>
        </div>
    }
}
