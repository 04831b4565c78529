use async_trait::async_trait;
use gloo_console::{error, info};
use gloo_net::http::{Method as FetchMethod, RequestBuilder};
use rideshare_lib::{
    error::ClientError,
    http::{ApiResponse, HttpClient, HttpRequest, Method},
    navigation::{Navigator, Page},
    storage::SessionStore,
};
use web_sys::Storage;
use yew_router::history::{BrowserHistory, History};

/// `fetch` through gloo-net.
pub struct BrowserClient;

fn fetch_method(method: Method) -> FetchMethod {
    match method {
        Method::Get => FetchMethod::GET,
        Method::Post => FetchMethod::POST,
        Method::Put => FetchMethod::PUT,
    }
}

#[async_trait(?Send)]
impl HttpClient for BrowserClient {
    async fn send(&self, request: HttpRequest) -> Result<ApiResponse, ClientError> {
        let builder = request
            .headers
            .iter()
            .fold(RequestBuilder::new(&request.url).method(fetch_method(request.method)), |builder, (name, value)| {
                builder.header(name, value)
            });

        let prepared = match request.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| ClientError::Transport(e.to_string()))?;

        let response = prepared.send().await.map_err(|e| ClientError::Transport(e.to_string()))?;
        let status = response.status();
        let body = response.text().await.map_err(|e| ClientError::Transport(e.to_string()))?;

        Ok(ApiResponse::new(status, body))
    }
}

/// `window.localStorage`. When the browser refuses storage (private mode,
/// disabled cookies) the session simply does not survive a reload.
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    pub fn new() -> Self {
        let storage = gloo_utils::window().local_storage().ok().flatten();
        if storage.is_none() {
            error!("localStorage is unavailable, the session will not persist");
        }
        Self { storage }
    }
}

impl SessionStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            if storage.set_item(key, value).is_err() {
                error!(format!("Could not write {key} to localStorage"));
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = &self.storage {
            _ = storage.remove_item(key);
        }
    }
}

/// Client-side navigation through the history API, picked up by the router.
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, page: Page) {
        let path = page.path();
        info!(format!("Navigating to {path}"));
        BrowserHistory::new().push(path);
    }
}
