use futures::join;

use super::{fetch_json, require_auth};
use crate::{
    error::ClientError,
    http::ApiRequest,
    reservation::Reservation,
    ride::Ride,
    session::SessionManager,
    view::dashboard::DashboardView,
};

pub const DASHBOARD_FAILED: &str = "Failed to load dashboard data.";

/// Loads rides and reservations side by side and renders once both are in.
pub async fn load(manager: &SessionManager) -> Result<DashboardView, ClientError> {
    require_auth(manager)?;

    let (rides, reservations) = join!(
        fetch_json::<Vec<Ride>>(manager, ApiRequest::get("/rides"), DASHBOARD_FAILED),
        fetch_json::<Vec<Reservation>>(manager, ApiRequest::get("/reservations/my-reservations"), DASHBOARD_FAILED),
    );
    let (rides, reservations) = (rides?, reservations?);

    // a 401 on either fetch has already cleared the session
    let user = manager.current_user().ok_or(ClientError::SessionExpired)?;
    Ok(DashboardView::build(&user, &rides, &reservations))
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use serde_json::json;

    use super::*;
    use crate::{http::Method, navigation::Page, test_support, user::Role};

    #[test]
    fn driver_dashboard_counts_both_lists() {
        let h = test_support::logged_in(Role::Driver);
        h.client.respond(
            Method::Get,
            "/api/rides",
            200,
            json!([test_support::ride_json(1, "2030-01-01T09:00:00"), test_support::ride_json(2, "2030-01-02T09:00:00")]),
        );
        h.client.respond(
            Method::Get,
            "/api/reservations/my-reservations",
            200,
            json!([test_support::reservation_json(1, "CONFIRMED", "2030-01-01T09:00:00")]),
        );

        let view = block_on(load(&h.manager)).unwrap();

        assert_eq!(
            view,
            DashboardView::Driver {
                welcome: "Welcome back, Ana Petrova!".into(),
                rides: 2,
                reservations: 1,
                rating: "4.5".into(),
            }
        );
    }

    #[test]
    fn nothing_renders_unless_both_succeed() {
        let h = test_support::logged_in(Role::User);
        h.client.respond(Method::Get, "/api/rides", 200, "[]");
        h.client.respond(Method::Get, "/api/reservations/my-reservations", 503, "");

        let err = block_on(load(&h.manager)).unwrap_err();

        assert_eq!(err.to_string(), DASHBOARD_FAILED);
        assert_eq!(h.client.requests().len(), 2);
    }

    #[test]
    fn expired_token_redirects() {
        let h = test_support::logged_in(Role::User);
        h.client.respond(Method::Get, "/api/rides", 401, "");
        h.client.respond(Method::Get, "/api/reservations/my-reservations", 200, "[]");

        let err = block_on(load(&h.manager)).unwrap_err();

        assert!(err.is_redirect());
        assert!(!h.manager.is_authenticated());
        assert_eq!(h.navigator.last(), Some(Page::Login));
    }
}
