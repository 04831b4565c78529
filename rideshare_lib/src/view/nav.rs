use super::Viewer;
use crate::{navigation::Page, user::User};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub icon: &'static str,
    pub page: Page,
}

impl NavLink {
    fn new(label: &'static str, icon: &'static str, page: Page) -> Self {
        Self { label, icon, page }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavMenu {
    Guest {
        links: Vec<NavLink>,
    },
    /// A dropdown under the user's name. The frontend appends the logout entry.
    Member {
        display_name: String,
        links: Vec<NavLink>,
    },
}

pub fn nav_menu(user: Option<&User>) -> NavMenu {
    let Some(user) = user else {
        return NavMenu::Guest {
            links: vec![
                NavLink::new("Login", "bi-box-arrow-in-right", Page::Login),
                NavLink::new("Register", "bi-person-plus", Page::Register),
            ],
        };
    };

    let mut links = vec![
        NavLink::new("Dashboard", "bi-speedometer2", Page::Dashboard),
        NavLink::new("Profile", "bi-person", Page::Profile),
        NavLink::new("My Reservations", "bi-calendar-check", Page::Reservations),
    ];

    if Viewer::for_user(Some(user)) == Viewer::Driver {
        links.push(NavLink::new("My Rides", "bi-car-front", Page::MyRides));
        links.push(NavLink::new("Publish Ride", "bi-plus-circle", Page::PublishRide));
    }

    NavMenu::Member {
        display_name: user.name.clone(),
        links,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{test_support, user::Role};

    fn pages(menu: &NavMenu) -> Vec<Page> {
        match menu {
            NavMenu::Guest { links } | NavMenu::Member { links, .. } => links.iter().map(|l| l.page.clone()).collect(),
        }
    }

    #[test]
    fn guest_menu() {
        assert_eq!(pages(&nav_menu(None)), vec![Page::Login, Page::Register]);
    }

    #[test]
    fn rider_menu_has_no_driver_links() {
        let menu = nav_menu(Some(&test_support::user(Role::User)));
        assert!(!pages(&menu).contains(&Page::PublishRide));
        assert!(matches!(menu, NavMenu::Member { display_name, .. } if display_name == "Ana Petrova"));
    }

    #[test]
    fn driver_menu_has_driver_links() {
        let menu = nav_menu(Some(&test_support::user(Role::Driver)));
        let pages = pages(&menu);
        assert!(pages.contains(&Page::MyRides));
        assert!(pages.contains(&Page::PublishRide));
    }
}
