use crate::controller::search::SearchQuery;

/// Every page of the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Index,
    Search(SearchQuery),
    Login,
    Register,
    Dashboard,
    Reservations,
    MyRides,
    Profile,
    PublishRide,
}

impl Page {
    pub fn path(&self) -> String {
        match self {
            Page::Index => "/".to_owned(),
            Page::Search(query) if query.is_empty() => "/search".to_owned(),
            Page::Search(query) => format!("/search?{}", query.to_query_string()),
            Page::Login => "/login".to_owned(),
            Page::Register => "/register".to_owned(),
            Page::Dashboard => "/dashboard".to_owned(),
            Page::Reservations => "/reservations".to_owned(),
            Page::MyRides => "/my-rides".to_owned(),
            Page::Profile => "/profile".to_owned(),
            Page::PublishRide => "/publish-ride".to_owned(),
        }
    }
}

pub trait Navigator {
    fn navigate(&self, page: Page);
}
