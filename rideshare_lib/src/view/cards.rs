use chrono::NaiveDateTime;

use super::{
    format::{format_date_time, format_price, seats_label, stars, Star},
    StatusBadge,
};
use crate::{
    reservation::{Reservation, ReservationStatus},
    ride::{Ride, RideStatus},
};

#[derive(Debug, Clone, PartialEq)]
pub struct RideCard {
    pub id: i64,
    pub origin: String,
    pub destination: String,
    pub departure: String,
    pub driver_name: String,
    pub driver_stars: [Star; 5],
    pub driver_reviews: u32,
    pub description: Option<String>,
    pub available_seats: u32,
    pub seats: String,
    pub price: String,
    pub status: StatusBadge,
    pub active: bool,
    /// Only active rides with free seats can be booked.
    pub bookable: bool,
}

impl From<&Ride> for RideCard {
    fn from(ride: &Ride) -> Self {
        RideCard {
            id: ride.id,
            origin: ride.origin.clone(),
            destination: ride.destination.clone(),
            departure: format_date_time(&ride.date_time),
            driver_name: ride.driver.name.clone(),
            driver_stars: stars(ride.driver.rating.unwrap_or(0.0)),
            driver_reviews: ride.driver.total_reviews.unwrap_or(0),
            description: ride.description.clone().filter(|d| !d.trim().is_empty()),
            available_seats: ride.available_seats,
            seats: seats_label(ride.available_seats),
            price: format_price(ride.price),
            status: ride.status.into(),
            active: ride.status == RideStatus::Active,
            bookable: ride.status == RideStatus::Active && ride.available_seats > 0,
        }
    }
}

/// The ride details the review dialog shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewTarget {
    pub ride_id: i64,
    pub driver_id: i64,
    pub driver_name: String,
    pub route: String,
    pub departure: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReservationCard {
    pub id: i64,
    pub route: String,
    pub departure: String,
    pub driver_name: String,
    pub seats_reserved: u32,
    pub status: StatusBadge,
    pub css_modifier: &'static str,
    pub total_price: String,
    pub can_cancel: bool,
    pub review: Option<ReviewTarget>,
}

impl ReservationCard {
    /// `now` decides whether the ride is still ahead and can be cancelled.
    pub fn build(reservation: &Reservation, now: NaiveDateTime) -> Self {
        let ride = &reservation.ride;
        let confirmed = reservation.status == ReservationStatus::Confirmed;

        let review = confirmed.then(|| ReviewTarget {
            ride_id: ride.id,
            driver_id: ride.driver.id,
            driver_name: ride.driver.name.clone(),
            route: ride.route(),
            departure: format_date_time(&ride.date_time),
        });

        ReservationCard {
            id: reservation.id,
            route: ride.route(),
            departure: format_date_time(&ride.date_time),
            driver_name: ride.driver.name.clone(),
            seats_reserved: reservation.seats_reserved,
            status: reservation.status.into(),
            css_modifier: match reservation.status {
                ReservationStatus::Confirmed => "confirmed",
                ReservationStatus::Cancelled => "cancelled",
                ReservationStatus::Completed => "completed",
            },
            total_price: format_price(reservation.total_price()),
            can_cancel: confirmed && ride.date_time > now,
            review,
        }
    }
}

/// A list that renders an "empty" state instead of zero cards.
#[derive(Debug, Clone, PartialEq)]
pub enum CardList<T> {
    Empty,
    Items(Vec<T>),
}

impl<T> CardList<T> {
    pub fn from_vec(items: Vec<T>) -> Self {
        if items.is_empty() {
            CardList::Empty
        } else {
            CardList::Items(items)
        }
    }

    pub fn len(&self) -> usize {
        match self {
            CardList::Empty => 0,
            CardList::Items(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub fn ride_cards(rides: &[Ride]) -> CardList<RideCard> {
    CardList::from_vec(rides.iter().map(RideCard::from).collect())
}

pub fn reservation_cards(reservations: &[Reservation], now: NaiveDateTime) -> CardList<ReservationCard> {
    CardList::from_vec(reservations.iter().map(|r| ReservationCard::build(r, now)).collect())
}
