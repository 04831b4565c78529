use rideshare_lib::{
    controller::auth::{login, LOGIN_FAILED},
    navigation::Page,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::{bind_input, follow, show_error};
use crate::{components::alert::AlertBox, use_app};

#[function_component]
pub fn LoginPage() -> Html {
    let app = use_app();
    let email = use_state(String::new);
    let password = use_state(String::new);
    let busy = use_state(|| false);
    let alert = use_state(|| None);

    let onsubmit = {
        let app = app.clone();
        let (email, password, busy, alert) = (email.clone(), password.clone(), busy.clone(), alert.clone());
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            busy.set(true);
            let (app, email, password, busy, alert) =
                (app.clone(), (*email).clone(), (*password).clone(), busy.clone(), alert.clone());
            spawn_local(async move {
                match login(&app, &email, &password).await {
                    Ok(outcome) => follow(&app, &alert, outcome).await,
                    Err(err) => {
                        show_error(&alert, &err, LOGIN_FAILED);
                        busy.set(false);
                    }
                }
            });
        })
    };

    let to_register = {
        let app = app.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            app.navigate(Page::Register);
        })
    };

    html! {
        <div class="container py-5">
            <div class="row justify-content-center">
                <div class="col-md-5">
                    <div class="card shadow">
                        <div class="card-body p-4">
                            <h2 class="text-center mb-4"><i class="bi bi-box-arrow-in-right me-2"></i>{ "Login" }</h2>
                            <AlertBox alert={alert} />
                            <form {onsubmit}>
                                <div class="mb-3">
                                    <label class="form-label">{ "Email" }</label>
                                    <input class="form-control" type="email" required=true value={(*email).clone()} oninput={bind_input(&email)} />
                                </div>
                                <div class="mb-3">
                                    <label class="form-label">{ "Password" }</label>
                                    <input class="form-control" type="password" required=true value={(*password).clone()} oninput={bind_input(&password)} />
                                </div>
                                <button class="btn btn-primary w-100" type="submit" disabled={*busy}>
                                    { if *busy { "Logging in..." } else { "Login" } }
                                </button>
                            </form>
                            <p class="text-center mt-3 mb-0">
                                { "No account yet? " }
                                <a href="/register" onclick={to_register}>{ "Register" }</a>
                            </p>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
