use gloo_timers::callback::Timeout;
use rideshare_lib::view::alert::{Alert, ALERT_TIMEOUT_MS};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AlertProps {
    pub alert: UseStateHandle<Option<Alert>>,
}

/// Inline alert that clears itself after a few seconds or when closed.
#[function_component]
pub fn AlertBox(props: &AlertProps) -> Html {
    let handle = props.alert.clone();
    use_effect_with((*props.alert).clone(), move |alert| {
        let timeout = alert
            .is_some()
            .then(|| Timeout::new(ALERT_TIMEOUT_MS, move || handle.set(None)));
        move || drop(timeout)
    });

    let Some(alert) = (*props.alert).clone() else {
        return html! {};
    };

    let onclose = {
        let handle = props.alert.clone();
        Callback::from(move |_| handle.set(None))
    };

    html! {
        <div class={classes!("alert", alert.kind.css_class(), "alert-dismissible")} role="alert">
            { alert.message }
            <button type="button" class="btn-close" onclick={onclose}></button>
        </div>
    }
}
