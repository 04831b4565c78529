use rideshare_lib::{
    controller::profile::{load, PROFILE_FAILED},
    view::profile::ProfileView,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::{loading, show_error};
use crate::{
    components::{alert::AlertBox, stars::StarRow},
    use_app,
};

#[function_component]
pub fn ProfilePage() -> Html {
    let app = use_app();
    let profile = use_state(|| None::<ProfileView>);
    let failed = use_state(|| false);
    let alert = use_state(|| None);

    {
        let (profile, failed, alert) = (profile.clone(), failed.clone(), alert.clone());
        use_effect_with((), move |_| {
            spawn_local(async move {
                match load(&app).await {
                    Ok(view) => profile.set(Some(view)),
                    Err(err) => {
                        failed.set(true);
                        show_error(&alert, &err, PROFILE_FAILED);
                    }
                }
            });
        });
    }

    let body = match &*profile {
        None if *failed => html! {},
        None => loading("Loading profile..."),
        Some(view) => html! {
            <div class="card shadow-sm">
                <div class="card-body text-center p-4">
                    <i class="bi bi-person-circle display-1 text-primary"></i>
                    <h3 class="mt-3">{ view.name.clone() }</h3>
                    <p class="text-muted mb-1">{ view.email.clone() }</p>
                    <span class="badge bg-info mb-3">{ view.role_label }</span>
                    <div>
                        <StarRow stars={view.stars} />
                        <span class="ms-2 fw-bold">{ view.rating.clone() }</span>
                        <small class="text-muted">{ format!(" ({} reviews)", view.reviews) }</small>
                    </div>
                </div>
            </div>
        },
    };

    html! {
        <div class="container py-4" style="max-width: 640px;">
            <h2 class="mb-4">{ "My profile" }</h2>
            <AlertBox alert={alert} />
            { body }
        </div>
    }
}
