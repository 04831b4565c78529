//! In-memory fakes for the browser seams, shared by the unit tests.

use std::{
    cell::RefCell,
    collections::{HashMap, VecDeque},
    rc::Rc,
};

use async_trait::async_trait;
use chrono::NaiveDateTime;
use serde_json::{json, Value};

use crate::{
    config::ClientConfig,
    error::ClientError,
    http::{ApiResponse, HttpClient, HttpRequest, Method},
    navigation::{Navigator, Page},
    ride::parse_local_date_time,
    session::{Session, SessionManager},
    storage::MemoryStore,
    user::{Role, User},
};

/// Answers requests from canned responses keyed by method and path. A
/// request with no canned response fails like a dropped connection.
#[derive(Clone, Default)]
pub struct FakeClient {
    routes: Rc<RefCell<HashMap<(Method, String), VecDeque<ApiResponse>>>>,
    requests: Rc<RefCell<Vec<HttpRequest>>>,
}

impl FakeClient {
    /// Queues a response. Several responses for the same route are served in
    /// order; the last one repeats.
    pub fn respond(&self, method: Method, path: &str, status: u16, body: impl ToString) {
        self.routes
            .borrow_mut()
            .entry((method, path.to_owned()))
            .or_default()
            .push_back(ApiResponse::new(status, body.to_string()));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.borrow().last().cloned()
    }

    pub fn requests_to(&self, method: Method, path: &str) -> Vec<HttpRequest> {
        self.requests
            .borrow()
            .iter()
            .filter(|r| r.method == method && r.path() == path)
            .cloned()
            .collect()
    }
}

#[async_trait(?Send)]
impl HttpClient for FakeClient {
    async fn send(&self, request: HttpRequest) -> Result<ApiResponse, ClientError> {
        let key = (request.method, request.path().to_owned());
        self.requests.borrow_mut().push(request);

        let mut routes = self.routes.borrow_mut();
        let queue = routes
            .get_mut(&key)
            .ok_or_else(|| ClientError::Transport(format!("connection refused: {} {}", key.0.as_str(), key.1)))?;

        let response = if queue.len() > 1 { queue.pop_front() } else { queue.front().cloned() };
        response.ok_or_else(|| ClientError::Transport("no response".into()))
    }
}

#[derive(Clone, Default)]
pub struct RecordingNavigator {
    pages: Rc<RefCell<Vec<Page>>>,
}

impl RecordingNavigator {
    pub fn pages(&self) -> Vec<Page> {
        self.pages.borrow().clone()
    }

    pub fn last(&self) -> Option<Page> {
        self.pages.borrow().last().cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, page: Page) {
        self.pages.borrow_mut().push(page);
    }
}

pub struct Harness {
    pub manager: SessionManager,
    pub client: FakeClient,
    pub store: MemoryStore,
    pub navigator: RecordingNavigator,
}

pub fn harness() -> Harness {
    harness_with_store(MemoryStore::new())
}

pub fn harness_with_store(store: MemoryStore) -> Harness {
    let client = FakeClient::default();
    let navigator = RecordingNavigator::default();
    let manager = SessionManager::new(
        ClientConfig::default(),
        Box::new(client.clone()),
        Box::new(store.clone()),
        Box::new(navigator.clone()),
    );

    Harness {
        manager,
        client,
        store,
        navigator,
    }
}

pub fn logged_in(role: Role) -> Harness {
    let store = MemoryStore::new();
    Session::new("test-token".into(), user(role)).save(&store);
    harness_with_store(store)
}

pub fn at(value: &str) -> NaiveDateTime {
    parse_local_date_time(value).expect("valid test date-time")
}

pub fn user_json(role: Role) -> Value {
    json!({
        "id": 1,
        "name": "Ana Petrova",
        "email": "ana@example.com",
        "role": role.as_str(),
        "rating": 4.5,
        "totalReviews": 8
    })
}

pub fn user(role: Role) -> User {
    serde_json::from_value(user_json(role)).expect("valid test user")
}

pub fn auth_json(token: &str, role: Role) -> Value {
    json!({ "token": token, "type": "Bearer", "user": user_json(role) })
}

pub fn ride_json(id: i64, date_time: &str) -> Value {
    json!({
        "id": id,
        "origin": "NYC",
        "destination": "Boston",
        "dateTime": date_time,
        "price": 25.0,
        "availableSeats": 3,
        "totalSeats": 4,
        "description": "Leaving from Penn Station",
        "driver": {
            "id": 2,
            "name": "Ivan Georgiev",
            "email": "ivan@example.com",
            "role": "DRIVER",
            "rating": 3.5,
            "totalReviews": 4
        },
        "status": "ACTIVE",
        "createdAt": "2024-05-01T09:00:00"
    })
}

pub fn reservation_json(id: i64, status: &str, ride_date_time: &str) -> Value {
    json!({
        "id": id,
        "ride": ride_json(10 + id, ride_date_time),
        "user": user_json(Role::User),
        "seatsReserved": 2,
        "status": status,
        "notes": null,
        "createdAt": "2024-05-02T09:00:00"
    })
}
