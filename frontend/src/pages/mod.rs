//! One component per route. Each page reads its form state, hands it to a
//! controller and renders whatever comes back.

pub mod dashboard;
pub mod home;
pub mod login;
pub mod my_rides;
pub mod profile;
pub mod publish_ride;
pub mod register;
pub mod reservations;
pub mod search;

use chrono::{Local, NaiveDateTime};
use gloo_console::error;
use gloo_timers::future::TimeoutFuture;
use rideshare_lib::{
    controller::{ActionOutcome, REDIRECT_DELAY_MS},
    error::ClientError,
    view::alert::Alert,
};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::AppContext;

pub type AlertState = UseStateHandle<Option<Alert>>;

pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub fn today() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Shows the alert for a failed action. Redirects show nothing.
pub fn show_error(alert: &AlertState, err: &ClientError, fallback: &str) {
    error!(format!("{err}"));
    if let Some(shown) = Alert::from_error(err, fallback) {
        alert.set(Some(shown));
    }
}

/// Shows the outcome's alert, then follows its redirect after a short pause.
pub async fn follow(app: &AppContext, alert: &AlertState, outcome: ActionOutcome) {
    alert.set(Some(outcome.alert));
    if let Some(page) = outcome.redirect {
        TimeoutFuture::new(REDIRECT_DELAY_MS).await;
        app.navigate(page);
    }
}

pub fn bind_input(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        state.set(input.value());
    })
}

pub fn bind_textarea(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlTextAreaElement = e.target_unchecked_into();
        state.set(input.value());
    })
}

pub fn bind_select(state: &UseStateHandle<String>) -> Callback<Event> {
    let state = state.clone();
    Callback::from(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        state.set(select.value());
    })
}

pub fn loading(text: &'static str) -> Html {
    html! {
        <div class="text-center py-5">
            <div class="spinner-border text-primary" role="status"></div>
            <p class="mt-2 text-muted">{ text }</p>
        </div>
    }
}

pub fn empty_state(icon: &'static str, title: &'static str, hint: &'static str) -> Html {
    html! {
        <div class="text-center py-5">
            <i class={classes!("bi", icon, "display-1", "text-muted")}></i>
            <h4 class="mt-3">{ title }</h4>
            <p class="text-muted">{ hint }</p>
        </div>
    }
}
