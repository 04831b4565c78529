/// Shared by every handler.
pub struct ServerState {
    pub client: reqwest::Client,
    /// Backend base URL without a trailing slash.
    pub backend: String,
}

impl ServerState {
    pub fn new(backend: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            backend: backend.trim_end_matches('/').to_owned(),
        }
    }
}
