use log::info;

use super::{fetch_json, send_checked, ActionOutcome, Refreshed};
use crate::{
    error::{ClientError, ValidationError},
    http::ApiRequest,
    navigation::Page,
    ride::{parse_local_date_time, Ride, RideCreate, RideStatus},
    session::SessionManager,
    user::Role,
    view::{
        alert::Alert,
        cards::{ride_cards, CardList, RideCard},
    },
};

pub const PUBLISH_FAILED: &str = "Failed to publish the ride. Please try again.";
pub const MY_RIDES_FAILED: &str = "Failed to load your rides.";
pub const CANCEL_RIDE_FAILED: &str = "Failed to cancel the ride.";

pub type RideList = CardList<RideCard>;

/// The publish form as typed in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RideForm {
    pub origin: String,
    pub destination: String,
    pub date: String,
    pub time: String,
    pub price: String,
    pub available_seats: String,
    pub description: String,
}

fn required(value: &str, field: &'static str) -> Result<String, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(value.to_owned())
    }
}

impl RideForm {
    pub fn validate(&self) -> Result<RideCreate, ValidationError> {
        let origin = required(&self.origin, "Origin")?;
        let destination = required(&self.destination, "Destination")?;
        let date = required(&self.date, "Date")?;
        let time = required(&self.time, "Time")?;
        let date_time = parse_local_date_time(&format!("{date}T{time}")).ok_or(ValidationError::InvalidDateTime)?;

        let price: f64 = required(&self.price, "Price")?
            .parse()
            .map_err(|_| ValidationError::InvalidNumber("Price"))?;
        if !(price.is_finite() && price > 0.0) {
            return Err(ValidationError::NotPositive("Price"));
        }

        let available_seats: u32 = required(&self.available_seats, "Available seats")?
            .parse()
            .map_err(|_| ValidationError::InvalidNumber("Available seats"))?;
        if available_seats == 0 {
            return Err(ValidationError::NotPositive("Available seats"));
        }

        Ok(RideCreate {
            origin,
            destination,
            date_time,
            price,
            available_seats,
            description: self.description.trim().to_owned(),
        })
    }
}

fn require_driver(manager: &SessionManager) -> Result<(), ClientError> {
    if manager.require_role(Role::Driver) {
        Ok(())
    } else {
        Err(ClientError::Redirected)
    }
}

/// Publishes a ride. Only drivers get this far; everyone else is sent home.
pub async fn publish(manager: &SessionManager, form: &RideForm) -> Result<ActionOutcome, ClientError> {
    require_driver(manager)?;
    let payload = form.validate()?;

    let request = ApiRequest::post("/rides").json(&payload)?;
    let ride: Ride = fetch_json(manager, request, PUBLISH_FAILED).await?;

    info!("Published ride {} ({})", ride.id, ride.route());
    Ok(ActionOutcome::redirect(Alert::success("Ride published successfully!"), Page::Index))
}

/// The logged-in driver's rides.
pub async fn my_rides(manager: &SessionManager) -> Result<RideList, ClientError> {
    require_driver(manager)?;
    let rides: Vec<Ride> = fetch_json(manager, ApiRequest::get("/rides/driver/my-rides"), MY_RIDES_FAILED).await?;
    Ok(ride_cards(&rides))
}

/// Cancels one of the driver's rides and reloads the list.
pub async fn cancel_ride(manager: &SessionManager, ride_id: i64) -> Result<Refreshed<RideList>, ClientError> {
    let request = ApiRequest::put(format!("/rides/{ride_id}/status")).query("status", RideStatus::Cancelled.as_str());
    send_checked(manager, request, CANCEL_RIDE_FAILED).await?;
    info!("Cancelled ride {ride_id}");

    Ok(Refreshed {
        alert: Alert::success("The ride was cancelled."),
        list: my_rides(manager).await,
    })
}

/// Editing is not offered yet; the button explains as much.
pub fn edit_ride(_ride_id: i64) -> Alert {
    Alert::info("Ride editing is coming soon.")
}
