//! Entity to view-model mapping. Nothing in here touches the DOM; the
//! frontend turns these structs into markup.

pub mod alert;
pub mod cards;
pub mod dashboard;
pub mod format;
pub mod nav;
pub mod profile;

use crate::{
    reservation::ReservationStatus,
    ride::RideStatus,
    user::{Role, User},
};

/// Which variant of a page to render. Chosen once per page from the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewer {
    Guest,
    Rider,
    Driver,
}

impl Viewer {
    pub fn for_user(user: Option<&User>) -> Self {
        match user.map(|u| u.role) {
            None => Viewer::Guest,
            Some(Role::User) => Viewer::Rider,
            Some(Role::Driver) => Viewer::Driver,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeColor {
    Primary,
    Secondary,
    Success,
    Danger,
    Warning,
    Info,
}

impl BadgeColor {
    pub fn css_class(self) -> &'static str {
        match self {
            BadgeColor::Primary => "bg-primary",
            BadgeColor::Secondary => "bg-secondary",
            BadgeColor::Success => "bg-success",
            BadgeColor::Danger => "bg-danger",
            BadgeColor::Warning => "bg-warning",
            BadgeColor::Info => "bg-info",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusBadge {
    pub label: &'static str,
    pub color: BadgeColor,
}

impl From<ReservationStatus> for StatusBadge {
    fn from(status: ReservationStatus) -> Self {
        let (label, color) = match status {
            ReservationStatus::Confirmed => ("Confirmed", BadgeColor::Success),
            ReservationStatus::Cancelled => ("Cancelled", BadgeColor::Danger),
            ReservationStatus::Completed => ("Completed", BadgeColor::Secondary),
        };
        StatusBadge { label, color }
    }
}

impl From<RideStatus> for StatusBadge {
    fn from(status: RideStatus) -> Self {
        let (label, color) = match status {
            RideStatus::Active => ("Active", BadgeColor::Primary),
            RideStatus::Completed => ("Completed", BadgeColor::Secondary),
            RideStatus::Cancelled => ("Cancelled", BadgeColor::Danger),
        };
        StatusBadge { label, color }
    }
}
