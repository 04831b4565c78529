use super::format::format_rating;
use crate::{
    reservation::Reservation,
    ride::Ride,
    user::{Role, User},
};

/// Dashboard stats, one variant per kind of logged-in viewer. Guests never
/// reach the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardView {
    Rider {
        welcome: String,
        reservations: usize,
    },
    Driver {
        welcome: String,
        rides: usize,
        reservations: usize,
        rating: String,
    },
}

impl DashboardView {
    pub fn build(user: &User, rides: &[Ride], reservations: &[Reservation]) -> Self {
        let welcome = format!("Welcome back, {}!", user.name);

        match user.role {
            Role::User => DashboardView::Rider {
                welcome,
                reservations: reservations.len(),
            },
            Role::Driver => DashboardView::Driver {
                welcome,
                rides: rides.len(),
                reservations: reservations.len(),
                rating: format_rating(user.rating),
            },
        }
    }

    pub fn welcome(&self) -> &str {
        match self {
            DashboardView::Rider { welcome, .. } | DashboardView::Driver { welcome, .. } => welcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;

    fn rides(n: i64) -> Vec<Ride> {
        (0..n)
            .map(|id| serde_json::from_value(test_support::ride_json(id, "2024-06-01T10:00:00")).unwrap())
            .collect()
    }

    #[test]
    fn rider_sees_only_reservations() {
        let view = DashboardView::build(&test_support::user(Role::User), &rides(3), &[]);

        assert_eq!(
            view,
            DashboardView::Rider {
                welcome: "Welcome back, Ana Petrova!".into(),
                reservations: 0
            }
        );
    }

    #[test]
    fn driver_sees_rides_and_rating() {
        let view = DashboardView::build(&test_support::user(Role::Driver), &rides(2), &[]);

        let DashboardView::Driver { rides, rating, .. } = view else {
            panic!("expected driver dashboard");
        };
        assert_eq!(rides, 2);
        assert_eq!(rating, "4.5");
    }
}
