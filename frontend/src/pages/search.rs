use gloo_console::info;
use rideshare_lib::controller::{
    reservations::{self, BOOKING_FAILED},
    search::{quick_search, search, SearchQuery, SearchResults, SEARCH_FAILED},
};
use rideshare_lib::view::cards::CardList;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::hooks::use_location;

use super::{bind_input, empty_state, follow, loading, show_error};
use crate::{
    components::{alert::AlertBox, ride_card::RideCardView},
    use_app,
};

fn date_value(query: &SearchQuery) -> String {
    query.date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()
}

#[function_component]
pub fn SearchPage() -> Html {
    let app = use_app();
    let query_str = use_location().map(|l| l.query_str().to_owned()).unwrap_or_default();
    let query = SearchQuery::from_query_str(&query_str);

    let origin = use_state(|| query.origin.clone().unwrap_or_default());
    let destination = use_state(|| query.destination.clone().unwrap_or_default());
    let date = use_state(|| date_value(&query));
    let results = use_state(|| None::<SearchResults>);
    let alert = use_state(|| None);

    {
        let app = app.clone();
        let (results, alert) = (results.clone(), alert.clone());
        let (origin, destination, date) = (origin.clone(), destination.clone(), date.clone());
        use_effect_with(query, move |query| {
            let query = query.clone();
            origin.set(query.origin.clone().unwrap_or_default());
            destination.set(query.destination.clone().unwrap_or_default());
            date.set(date_value(&query));
            results.set(None);
            spawn_local(async move {
                info!(format!("Searching rides: {query:?}"));
                match search(&app, &query).await {
                    Ok(found) => results.set(Some(found)),
                    Err(err) => {
                        results.set(Some(CardList::Empty));
                        show_error(&alert, &err, SEARCH_FAILED);
                    }
                }
            });
        });
    }

    let onsubmit = {
        let app = app.clone();
        let (origin, destination, date) = (origin.clone(), destination.clone(), date.clone());
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            quick_search(&app, SearchQuery::new(&origin, &destination, &date));
        })
    };

    let on_book = {
        let (app, alert) = (app.clone(), alert.clone());
        Callback::from(move |(ride_id, seats): (i64, u32)| {
            let (app, alert) = (app.clone(), alert.clone());
            spawn_local(async move {
                match reservations::book(&app, ride_id, seats).await {
                    Ok(outcome) => follow(&app, &alert, outcome).await,
                    Err(err) => show_error(&alert, &err, BOOKING_FAILED),
                }
            });
        })
    };

    let body = match &*results {
        None => loading("Searching rides..."),
        Some(CardList::Empty) => empty_state("bi-signpost-split", "No rides found", "Try different cities or another date."),
        Some(CardList::Items(cards)) => html! {
            { for cards.iter().map(|card| html! {
                <RideCardView key={card.id} card={card.clone()} on_book={on_book.clone()} />
            }) }
        },
    };

    html! {
        <div class="container py-4">
            <h2 class="mb-4">{ "Find a ride" }</h2>
            <form class="row g-3 mb-4" {onsubmit}>
                <div class="col-md-4">
                    <input class="form-control" placeholder="From" value={(*origin).clone()} oninput={bind_input(&origin)} />
                </div>
                <div class="col-md-4">
                    <input class="form-control" placeholder="To" value={(*destination).clone()} oninput={bind_input(&destination)} />
                </div>
                <div class="col-md-2">
                    <input class="form-control" type="date" value={(*date).clone()} oninput={bind_input(&date)} />
                </div>
                <div class="col-md-2 d-grid">
                    <button class="btn btn-primary" type="submit">{ "Search" }</button>
                </div>
            </form>
            <AlertBox alert={alert} />
            { body }
        </div>
    }
}
