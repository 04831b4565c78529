use gloo_console::info;
use rideshare_lib::{
    controller::rides::{cancel_ride, edit_ride, my_rides, RideList, CANCEL_RIDE_FAILED, MY_RIDES_FAILED},
    navigation::Page,
    view::cards::CardList,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::{empty_state, loading, show_error};
use crate::{
    components::{alert::AlertBox, ride_card::RideCardView},
    use_app,
};

#[function_component]
pub fn MyRidesPage() -> Html {
    let app = use_app();
    let rides = use_state(|| None::<RideList>);
    let alert = use_state(|| None);

    {
        let app = app.clone();
        let (rides, alert) = (rides.clone(), alert.clone());
        use_effect_with((), move |_| {
            spawn_local(async move {
                match my_rides(&app).await {
                    Ok(loaded) => rides.set(Some(loaded)),
                    Err(err) => {
                        rides.set(Some(CardList::Empty));
                        show_error(&alert, &err, MY_RIDES_FAILED);
                    }
                }
            });
        });
    }

    let on_cancel = {
        let (app, rides, alert) = (app.clone(), rides.clone(), alert.clone());
        Callback::from(move |id: i64| {
            let confirmed = gloo_utils::window()
                .confirm_with_message("Are you sure you want to cancel this ride?")
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            info!(format!("Cancelling ride {id}"));
            let (app, rides, alert) = (app.clone(), rides.clone(), alert.clone());
            spawn_local(async move {
                match cancel_ride(&app, id).await {
                    Ok(refreshed) => {
                        let (shown, list) = refreshed.into_parts();
                        alert.set(Some(shown));
                        if let Some(list) = list {
                            rides.set(Some(list));
                        }
                    }
                    Err(err) => show_error(&alert, &err, CANCEL_RIDE_FAILED),
                }
            });
        })
    };

    let on_edit = {
        let alert = alert.clone();
        Callback::from(move |id: i64| alert.set(Some(edit_ride(id))))
    };

    let publish = {
        let app = app.clone();
        Callback::from(move |_: MouseEvent| app.navigate(Page::PublishRide))
    };

    let body = match &*rides {
        None => loading("Loading your rides..."),
        Some(CardList::Empty) => empty_state("bi-car-front", "No rides published yet", "Publish a ride to start sharing your trips."),
        Some(CardList::Items(cards)) => html! {
            { for cards.iter().map(|card| html! {
                <RideCardView key={card.id} card={card.clone()} on_cancel={on_cancel.clone()} on_edit={on_edit.clone()} />
            }) }
        },
    };

    html! {
        <div class="container py-4">
            <div class="d-flex justify-content-between align-items-center mb-4">
                <h2>{ "My rides" }</h2>
                <button class="btn btn-primary" onclick={publish}>
                    <i class="bi bi-plus-circle me-1"></i>{ "Publish a ride" }
                </button>
            </div>
            <AlertBox alert={alert} />
            { body }
        </div>
    }
}
