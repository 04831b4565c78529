use serde::{Deserialize, Serialize};

use crate::ride::Ride;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReservationStatus {
    Confirmed,
    Cancelled,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: i64,
    pub ride: Ride,
    pub seats_reserved: u32,
    pub status: ReservationStatus,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Reservation {
    pub fn total_price(&self) -> f64 {
        self.ride.price * f64::from(self.seats_reserved)
    }
}

/// Body of `POST /api/reservations`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationCreate {
    pub ride_id: i64,
    pub seats_reserved: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
