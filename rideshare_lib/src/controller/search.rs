use chrono::NaiveDate;
use log::debug;
use url::form_urlencoded;

use crate::{
    error::ClientError,
    http::{expect_success, ApiRequest},
    navigation::Page,
    ride::Ride,
    session::SessionManager,
    view::cards::{ride_cards, CardList, RideCard},
};

pub const SEARCH_FAILED: &str = "Failed to load search results. Please try again.";

pub type SearchResults = CardList<RideCard>;

/// Search criteria. Blank fields are absent and not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub date: Option<NaiveDate>,
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_owned())
}

impl SearchQuery {
    /// Builds a query from raw form fields; `date` is `YYYY-MM-DD` as a date
    /// input produces it.
    pub fn new(origin: &str, destination: &str, date: &str) -> Self {
        Self {
            origin: non_blank(origin),
            destination: non_blank(destination),
            date: NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok(),
        }
    }

    /// Parses a page query string such as `?origin=NYC&date=2024-06-01`.
    pub fn from_query_str(query: &str) -> Self {
        let mut origin = String::new();
        let mut destination = String::new();
        let mut date = String::new();

        for (key, value) in form_urlencoded::parse(query.trim_start_matches('?').as_bytes()) {
            match key.as_ref() {
                "origin" => origin = value.into_owned(),
                "destination" => destination = value.into_owned(),
                "date" => date = value.into_owned(),
                _ => {}
            }
        }

        Self::new(&origin, &destination, &date)
    }

    pub fn is_empty(&self) -> bool {
        self.origin.is_none() && self.destination.is_none() && self.date.is_none()
    }

    fn pairs(&self, date_suffix: &str) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(origin) = &self.origin {
            pairs.push(("origin", origin.clone()));
        }
        if let Some(destination) = &self.destination {
            pairs.push(("destination", destination.clone()));
        }
        if let Some(date) = &self.date {
            pairs.push(("date", format!("{}{date_suffix}", date.format("%Y-%m-%d"))));
        }
        pairs
    }

    /// Query string for the search page URL.
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs(""))
            .finish()
    }

    /// The `GET /rides/search` request. The backend expects the date as a
    /// local date-time at midnight.
    pub fn to_request(&self) -> ApiRequest {
        self.pairs("T00:00:00")
            .into_iter()
            .fold(ApiRequest::get("/rides/search"), |request, (key, value)| request.query(key, value))
    }
}

/// The home page form: go to the search page with the filled-in criteria.
pub fn quick_search(manager: &SessionManager, query: SearchQuery) {
    manager.navigate(Page::Search(query));
}

/// Runs a public search and maps the rides to cards.
pub async fn search(manager: &SessionManager, query: &SearchQuery) -> Result<SearchResults, ClientError> {
    let response = manager.public_request(query.to_request()).await?;
    let rides: Vec<Ride> = expect_success(response, SEARCH_FAILED)?.json()?;

    debug!("Search returned {} rides", rides.len());
    Ok(ride_cards(&rides))
}
