use rideshare_lib::{
    auth::RegistrationForm,
    controller::auth::{register, REGISTRATION_FAILED},
    user::Role,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::{bind_input, bind_select, follow, show_error};
use crate::{components::alert::AlertBox, use_app};

#[function_component]
pub fn RegisterPage() -> Html {
    let app = use_app();
    let name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let confirm_password = use_state(String::new);
    let role = use_state(|| Role::User.as_str().to_owned());
    let busy = use_state(|| false);
    let alert = use_state(|| None);

    let onsubmit = {
        let app = app.clone();
        let busy = busy.clone();
        let alert = alert.clone();
        let fields = (name.clone(), email.clone(), password.clone(), confirm_password.clone(), role.clone());
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let (name, email, password, confirm_password, role) = &fields;
            let form = RegistrationForm {
                name: (**name).clone(),
                email: (**email).clone(),
                password: (**password).clone(),
                confirm_password: (**confirm_password).clone(),
                role: Some(Role::from_form_value(role)),
            };

            busy.set(true);
            let (app, busy, alert) = (app.clone(), busy.clone(), alert.clone());
            spawn_local(async move {
                match register(&app, &form).await {
                    Ok(outcome) => follow(&app, &alert, outcome).await,
                    Err(err) => {
                        show_error(&alert, &err, REGISTRATION_FAILED);
                        busy.set(false);
                    }
                }
            });
        })
    };

    html! {
        <div class="container py-5">
            <div class="row justify-content-center">
                <div class="col-md-6">
                    <div class="card shadow">
                        <div class="card-body p-4">
                            <h2 class="text-center mb-4"><i class="bi bi-person-plus me-2"></i>{ "Register" }</h2>
                            <AlertBox alert={alert} />
                            <form {onsubmit}>
                                <div class="mb-3">
                                    <label class="form-label">{ "Name" }</label>
                                    <input class="form-control" required=true value={(*name).clone()} oninput={bind_input(&name)} />
                                </div>
                                <div class="mb-3">
                                    <label class="form-label">{ "Email" }</label>
                                    <input class="form-control" type="email" required=true value={(*email).clone()} oninput={bind_input(&email)} />
                                </div>
                                <div class="row">
                                    <div class="col-md-6 mb-3">
                                        <label class="form-label">{ "Password" }</label>
                                        <input class="form-control" type="password" required=true minlength="6" value={(*password).clone()} oninput={bind_input(&password)} />
                                    </div>
                                    <div class="col-md-6 mb-3">
                                        <label class="form-label">{ "Confirm password" }</label>
                                        <input class="form-control" type="password" required=true value={(*confirm_password).clone()} oninput={bind_input(&confirm_password)} />
                                    </div>
                                </div>
                                <div class="mb-3">
                                    <label class="form-label">{ "I want to" }</label>
                                    <select class="form-select" onchange={bind_select(&role)}>
                                        <option value={Role::User.as_str()} selected={*role == Role::User.as_str()}>{ "Find rides as a passenger" }</option>
                                        <option value={Role::Driver.as_str()} selected={*role == Role::Driver.as_str()}>{ "Offer rides as a driver" }</option>
                                    </select>
                                </div>
                                <button class="btn btn-primary w-100" type="submit" disabled={*busy}>
                                    { if *busy { "Creating account..." } else { "Register" } }
                                </button>
                            </form>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
