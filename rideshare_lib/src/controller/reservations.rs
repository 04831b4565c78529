use chrono::NaiveDateTime;
use log::info;

use super::{fetch_json, require_auth, send_checked, ActionOutcome, Refreshed};
use crate::{
    error::{ClientError, ValidationError},
    http::ApiRequest,
    navigation::Page,
    reservation::{Reservation, ReservationCreate},
    session::SessionManager,
    view::{
        alert::Alert,
        cards::{reservation_cards, CardList, ReservationCard},
    },
};

pub const RESERVATIONS_FAILED: &str = "Failed to load reservations.";
pub const CANCEL_FAILED: &str = "Failed to cancel the reservation.";
pub const BOOKING_FAILED: &str = "Failed to book the ride.";

pub type ReservationList = CardList<ReservationCard>;

pub async fn list(manager: &SessionManager, now: NaiveDateTime) -> Result<ReservationList, ClientError> {
    require_auth(manager)?;
    let reservations: Vec<Reservation> = fetch_json(
        manager,
        ApiRequest::get("/reservations/my-reservations"),
        RESERVATIONS_FAILED,
    )
    .await?;

    Ok(reservation_cards(&reservations, now))
}

/// Cancels a reservation and reloads the list. The page asks for
/// confirmation before calling this.
pub async fn cancel(
    manager: &SessionManager,
    reservation_id: i64,
    now: NaiveDateTime,
) -> Result<Refreshed<ReservationList>, ClientError> {
    send_checked(
        manager,
        ApiRequest::put(format!("/reservations/{reservation_id}/cancel")),
        CANCEL_FAILED,
    )
    .await?;
    info!("Cancelled reservation {reservation_id}");

    Ok(Refreshed {
        alert: Alert::success("The reservation was cancelled."),
        list: list(manager, now).await,
    })
}

/// Books `seats` seats on a ride. Guests are sent to the login page first.
pub async fn book(manager: &SessionManager, ride_id: i64, seats: u32) -> Result<ActionOutcome, ClientError> {
    require_auth(manager)?;
    if seats == 0 {
        return Err(ValidationError::NotPositive("Seats").into());
    }

    let request = ApiRequest::post("/reservations").json(&ReservationCreate {
        ride_id,
        seats_reserved: seats,
        notes: None,
    })?;
    let reservation: Reservation = fetch_json(manager, request, BOOKING_FAILED).await?;

    info!("Booked reservation {} on ride {ride_id}", reservation.id);
    Ok(ActionOutcome::redirect(Alert::success("Ride booked successfully!"), Page::Index))
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use serde_json::json;

    use super::*;
    use crate::{
        http::Method,
        test_support::{self, at},
        user::Role,
    };

    const NOW: &str = "2024-06-01T00:00:00";

    #[test]
    fn guest_is_sent_to_login() {
        let h = test_support::harness();

        assert_eq!(block_on(list(&h.manager, at(NOW))).unwrap_err(), ClientError::Redirected);
        assert_eq!(h.navigator.last(), Some(Page::Login));
        assert!(h.client.requests().is_empty());
    }

    #[test]
    fn cancel_confirmed_future_reservation_and_refresh() {
        let h = test_support::logged_in(Role::User);
        let path = "/api/reservations/my-reservations";
        h.client.respond(Method::Get, path, 200, json!([test_support::reservation_json(3, "CONFIRMED", "2030-01-01T09:00:00")]));
        h.client.respond(Method::Get, path, 200, json!([test_support::reservation_json(3, "CANCELLED", "2030-01-01T09:00:00")]));
        h.client.respond(Method::Put, "/api/reservations/3/cancel", 200, "");

        let CardList::Items(before) = block_on(list(&h.manager, at(NOW))).unwrap() else {
            panic!("expected reservations");
        };
        assert!(before[0].can_cancel);

        let refreshed = block_on(cancel(&h.manager, before[0].id, at(NOW))).unwrap();

        assert_eq!(h.client.requests_to(Method::Put, "/api/reservations/3/cancel").len(), 1);
        assert_eq!(h.client.requests_to(Method::Get, path).len(), 2);
        let Ok(CardList::Items(after)) = refreshed.list else {
            panic!("expected reservations");
        };
        assert!(!after[0].can_cancel);
        assert_eq!(after[0].status.label, "Cancelled");
    }

    #[test]
    fn cancel_succeeds_even_when_reload_fails() {
        let h = test_support::logged_in(Role::User);
        h.client.respond(Method::Put, "/api/reservations/3/cancel", 200, "");
        h.client.respond(Method::Get, "/api/reservations/my-reservations", 500, "");

        let refreshed = block_on(cancel(&h.manager, 3, at(NOW))).unwrap();

        assert_eq!(refreshed.alert, Alert::success("The reservation was cancelled."));
        assert_eq!(
            refreshed.list,
            Err(ClientError::Rejected {
                status: 500,
                message: RESERVATIONS_FAILED.into(),
            })
        );
        assert_eq!(h.client.requests_to(Method::Put, "/api/reservations/3/cancel").len(), 1);

        let (alert, list) = refreshed.into_parts();
        assert_eq!(alert, Alert::warning("The reservation was cancelled. The list could not be reloaded."));
        assert_eq!(list, None);
    }

    #[test]
    fn failed_cancel_does_not_refresh() {
        let h = test_support::logged_in(Role::User);
        h.client.respond(Method::Put, "/api/reservations/3/cancel", 400, "");

        let err = block_on(cancel(&h.manager, 3, at(NOW))).unwrap_err();

        assert_eq!(err.to_string(), CANCEL_FAILED);
        assert_eq!(h.client.requests().len(), 1);
    }

    #[test]
    fn book_posts_seats() {
        let h = test_support::logged_in(Role::User);
        h.client.respond(Method::Post, "/api/reservations", 201, test_support::reservation_json(8, "CONFIRMED", "2030-01-01T09:00:00"));

        let outcome = block_on(book(&h.manager, 11, 2)).unwrap();

        assert_eq!(outcome.redirect, Some(Page::Index));
        assert_eq!(
            h.client.last_request().unwrap().body.as_deref(),
            Some(r#"{"rideId":11,"seatsReserved":2}"#)
        );
    }

    #[test]
    fn book_zero_seats_is_rejected_locally() {
        let h = test_support::logged_in(Role::User);

        let err = block_on(book(&h.manager, 11, 0)).unwrap_err();

        assert!(matches!(err, ClientError::Validation(_)));
        assert!(h.client.requests().is_empty());
    }
}
