use rideshare_lib::view::cards::RideCard;
use yew::prelude::*;

use super::stars::StarRow;

#[derive(Properties, PartialEq)]
pub struct RideCardProps {
    pub card: RideCard,
    /// Shown on search results: `(ride id, seats)`.
    #[prop_or_default]
    pub on_book: Option<Callback<(i64, u32)>>,
    /// Shown on the driver's own rides.
    #[prop_or_default]
    pub on_cancel: Option<Callback<i64>>,
    #[prop_or_default]
    pub on_edit: Option<Callback<i64>>,
}

#[function_component]
pub fn RideCardView(props: &RideCardProps) -> Html {
    let card = &props.card;
    let seats = use_state(|| 1u32);

    let on_seats = {
        let seats = seats.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            seats.set(input.value().parse().unwrap_or(0));
        })
    };

    let book = props.on_book.as_ref().filter(|_| card.bookable).map(|on_book| {
        let on_book = on_book.clone();
        let id = card.id;
        let chosen = *seats;
        html! {
            <div class="input-group input-group-sm mt-2">
                <input
                    class="form-control"
                    type="number"
                    min="1"
                    max={card.available_seats.to_string()}
                    value={chosen.to_string()}
                    oninput={on_seats}
                />
                <button class="btn btn-primary" onclick={move |_| on_book.emit((id, chosen))}>
                    { "Book" }
                </button>
            </div>
        }
    });

    let id = card.id;
    let cancel = props.on_cancel.clone().filter(|_| card.active).map(|on_cancel| html! {
        <button class="btn btn-sm btn-outline-danger me-2" onclick={move |_| on_cancel.emit(id)}>
            <i class="bi bi-x-circle me-1"></i>{ "Cancel" }
        </button>
    });
    let edit = props.on_edit.clone().map(|on_edit| html! {
        <button class="btn btn-sm btn-outline-secondary" onclick={move |_| on_edit.emit(id)}>
            <i class="bi bi-pencil me-1"></i>{ "Edit" }
        </button>
    });

    html! {
        <div class="card ride-card mb-3">
            <div class="card-body">
                <div class="row">
                    <div class="col-md-8">
                        <h5 class="card-title">{ format!("{} → {}", card.origin, card.destination) }</h5>
                        <p class="card-text mb-1">
                            <i class="bi bi-calendar me-2"></i>{ card.departure.clone() }
                        </p>
                        <p class="card-text mb-1">
                            <i class="bi bi-person me-2"></i>{ card.driver_name.clone() }{ " " }
                            <StarRow stars={card.driver_stars} />
                            <small class="text-muted">{ format!(" ({})", card.driver_reviews) }</small>
                        </p>
                        if let Some(description) = &card.description {
                            <p class="card-text text-muted">{ description.clone() }</p>
                        }
                    </div>
                    <div class="col-md-4 text-end">
                        <span class={classes!("badge", card.status.color.css_class(), "mb-2")}>{ card.status.label }</span>
                        <div class="h4 text-primary">{ card.price.clone() }</div>
                        <small class="text-muted">{ card.seats.clone() }</small>
                        { book }
                        <div class="mt-2">{ cancel }{ edit }</div>
                    </div>
                </div>
            </div>
        </div>
    }
}
