use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

use crate::user::User;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RideStatus {
    Active,
    Completed,
    Cancelled,
}

impl RideStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            RideStatus::Active => "ACTIVE",
            RideStatus::Completed => "COMPLETED",
            RideStatus::Cancelled => "CANCELLED",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ride {
    pub id: i64,
    pub origin: String,
    pub destination: String,
    #[serde(deserialize_with = "local_date_time")]
    pub date_time: NaiveDateTime,
    pub price: f64,
    pub available_seats: u32,
    #[serde(default)]
    pub total_seats: Option<u32>,
    #[serde(default)]
    pub description: Option<String>,
    pub driver: User,
    pub status: RideStatus,
}

impl Ride {
    pub fn route(&self) -> String {
        format!("{} → {}", self.origin, self.destination)
    }
}

/// Body of `POST /api/rides`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RideCreate {
    pub origin: String,
    pub destination: String,
    pub date_time: NaiveDateTime,
    pub price: f64,
    pub available_seats: u32,
    pub description: String,
}

const DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parses an ISO local date-time, with or without seconds.
pub fn parse_local_date_time(value: &str) -> Option<NaiveDateTime> {
    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

fn local_date_time<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    parse_local_date_time(&value)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid date-time: {value}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;

    #[test]
    fn decodes_ride_with_short_date_time() {
        let mut json = test_support::ride_json(3, "2024-06-01T10:00:00");
        json["dateTime"] = "2024-06-01T10:00".into();

        let ride: Ride = serde_json::from_value(json).unwrap();
        assert_eq!(ride.date_time, parse_local_date_time("2024-06-01T10:00:00").unwrap());
        assert_eq!(ride.status, RideStatus::Active);
    }

    #[test]
    fn rejects_unknown_status() {
        let mut json = test_support::ride_json(3, "2024-06-01T10:00:00");
        json["status"] = "PAUSED".into();

        assert!(serde_json::from_value::<Ride>(json).is_err());
    }

    #[test]
    fn create_payload_uses_camel_case() {
        let payload = RideCreate {
            origin: "Sofia".into(),
            destination: "Plovdiv".into(),
            date_time: parse_local_date_time("2024-06-01T08:30").unwrap(),
            price: 15.5,
            available_seats: 3,
            description: String::new(),
        };

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["dateTime"], "2024-06-01T08:30:00");
        assert_eq!(json["availableSeats"], 3);
    }
}
