use gloo_console::{error, info};
use rideshare_lib::{
    controller::{
        reservations::{cancel, list, ReservationList, CANCEL_FAILED, RESERVATIONS_FAILED},
        review::{submit, ReviewForm, StarPicker, REVIEW_FAILED},
    },
    view::cards::{CardList, ReservationCard, ReviewTarget},
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::{bind_textarea, empty_state, loading, now, show_error, AlertState};
use crate::{
    components::{alert::AlertBox, stars::StarInput},
    use_app,
};

fn confirm(message: &str) -> bool {
    gloo_utils::window().confirm_with_message(message).unwrap_or(false)
}

fn reservation_card(card: &ReservationCard, on_cancel: &Callback<i64>, on_review: &Callback<ReviewTarget>) -> Html {
    let id = card.id;
    let cancel = card.can_cancel.then(|| {
        let on_cancel = on_cancel.clone();
        html! {
            <button class="btn btn-sm btn-outline-danger mt-2" onclick={move |_| on_cancel.emit(id)}>
                <i class="bi bi-x-circle me-1"></i>{ "Cancel" }
            </button>
        }
    });
    let review = card.review.clone().map(|target| {
        let on_review = on_review.clone();
        html! {
            <button class="btn btn-sm btn-outline-warning mt-2 ms-2" onclick={move |_| on_review.emit(target.clone())}>
                <i class="bi bi-star me-1"></i>{ "Review" }
            </button>
        }
    });

    html! {
        <div key={id} class={classes!("card", "reservation-card", card.css_modifier, "mb-3")}>
            <div class="card-body">
                <div class="row">
                    <div class="col-md-8">
                        <h5 class="card-title">{ card.route.clone() }</h5>
                        <p class="card-text mb-1"><i class="bi bi-calendar me-2"></i>{ card.departure.clone() }</p>
                        <p class="card-text mb-1"><i class="bi bi-person me-2"></i>{ format!("Driver: {}", card.driver_name) }</p>
                        <p class="card-text mb-1"><i class="bi bi-people me-2"></i>{ format!("Seats reserved: {}", card.seats_reserved) }</p>
                    </div>
                    <div class="col-md-4 text-end">
                        <span class={classes!("badge", card.status.color.css_class(), "mb-2")}>{ card.status.label }</span>
                        <br />
                        <span class="h5">{ card.total_price.clone() }</span>
                        <br />
                        { cancel }{ review }
                    </div>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ReviewDialogProps {
    target: ReviewTarget,
    page_alert: AlertState,
    on_close: Callback<()>,
    on_reviewed: Callback<()>,
}

/// Modal for rating the driver of a reservation's ride.
#[function_component]
fn ReviewDialog(props: &ReviewDialogProps) -> Html {
    let app = use_app();
    let picker = use_state(StarPicker::default);
    let comment = use_state(String::new);
    let alert = use_state(|| None);

    let onsubmit = {
        let (picker, comment, alert) = (picker.clone(), comment.clone(), alert.clone());
        let (page_alert, on_reviewed) = (props.page_alert.clone(), props.on_reviewed.clone());
        let ride_id = props.target.ride_id;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let form = ReviewForm {
                ride_id,
                rating: picker.selected(),
                comment: (*comment).clone(),
            };
            let (app, alert, page_alert, on_reviewed) = (app.clone(), alert.clone(), page_alert.clone(), on_reviewed.clone());
            spawn_local(async move {
                match submit(&app, &form).await {
                    Ok(done) => {
                        page_alert.set(Some(done));
                        on_reviewed.emit(());
                    }
                    Err(err) => show_error(&alert, &err, REVIEW_FAILED),
                }
            });
        })
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let target = &props.target;
    html! {
        <div class="review-backdrop">
            <div class="card shadow" style="width: 28rem;">
                <form class="card-body" {onsubmit}>
                    <h5 class="card-title">{ format!("Rate {}", target.driver_name) }</h5>
                    <p class="text-muted">{ format!("{}, {}", target.route, target.departure) }</p>
                    <AlertBox alert={alert} />
                    <StarInput picker={picker} />
                    <textarea
                        class="form-control mb-3"
                        rows="3"
                        placeholder="How was the ride?"
                        value={(*comment).clone()}
                        oninput={bind_textarea(&comment)}
                    />
                    <div class="text-end">
                        <button type="button" class="btn btn-secondary me-2" onclick={close}>{ "Close" }</button>
                        <button type="submit" class="btn btn-primary">{ "Submit review" }</button>
                    </div>
                </form>
            </div>
        </div>
    }
}

#[function_component]
pub fn ReservationsPage() -> Html {
    let app = use_app();
    let reservations = use_state(|| None::<ReservationList>);
    let reviewing = use_state(|| None::<ReviewTarget>);
    let alert = use_state(|| None);

    {
        let app = app.clone();
        let (reservations, alert) = (reservations.clone(), alert.clone());
        use_effect_with((), move |_| {
            spawn_local(async move {
                match list(&app, now()).await {
                    Ok(loaded) => reservations.set(Some(loaded)),
                    Err(err) => {
                        reservations.set(Some(CardList::Empty));
                        show_error(&alert, &err, RESERVATIONS_FAILED);
                    }
                }
            });
        });
    }

    let on_cancel = {
        let (app, reservations, alert) = (app.clone(), reservations.clone(), alert.clone());
        Callback::from(move |id: i64| {
            if !confirm("Are you sure you want to cancel this reservation?") {
                return;
            }
            info!(format!("Cancelling reservation {id}"));
            let (app, reservations, alert) = (app.clone(), reservations.clone(), alert.clone());
            spawn_local(async move {
                match cancel(&app, id, now()).await {
                    Ok(refreshed) => {
                        let (shown, list) = refreshed.into_parts();
                        alert.set(Some(shown));
                        if let Some(list) = list {
                            reservations.set(Some(list));
                        }
                    }
                    Err(err) => show_error(&alert, &err, CANCEL_FAILED),
                }
            });
        })
    };

    let on_review = {
        let reviewing = reviewing.clone();
        Callback::from(move |target: ReviewTarget| reviewing.set(Some(target)))
    };

    let on_close = {
        let reviewing = reviewing.clone();
        Callback::from(move |()| reviewing.set(None))
    };

    // The thank-you alert stays up; a failed reload only leaves the old list.
    let on_reviewed = {
        let (app, reservations, reviewing) = (app.clone(), reservations.clone(), reviewing.clone());
        Callback::from(move |()| {
            reviewing.set(None);
            let (app, reservations) = (app.clone(), reservations.clone());
            spawn_local(async move {
                match list(&app, now()).await {
                    Ok(loaded) => reservations.set(Some(loaded)),
                    Err(err) => error!(format!("Reload after review failed: {err}")),
                }
            });
        })
    };

    let body = match &*reservations {
        None => loading("Loading reservations..."),
        Some(CardList::Empty) => empty_state("bi-calendar-x", "No reservations yet", "Book a ride to see it here."),
        Some(CardList::Items(cards)) => html! {
            { for cards.iter().map(|card| reservation_card(card, &on_cancel, &on_review)) }
        },
    };

    html! {
        <div class="container py-4">
            <h2 class="mb-4">{ "My reservations" }</h2>
            <AlertBox alert={alert.clone()} />
            { body }
            if let Some(target) = (*reviewing).clone() {
                <ReviewDialog {target} page_alert={alert} {on_close} {on_reviewed} />
            }
        </div>
    }
}
