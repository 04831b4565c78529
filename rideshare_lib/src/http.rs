use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};
use url::form_urlencoded;

use crate::{config::ClientConfig, error::ClientError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
        }
    }
}

/// A request against the REST API, relative to [`ClientConfig::api_base`].
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<String>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn query(mut self, key: &str, value: impl Into<String>) -> Self {
        self.query.push((key.to_owned(), value.into()));
        self
    }

    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self, ClientError> {
        let body = serde_json::to_string(body).map_err(|err| ClientError::Encode(err.to_string()))?;
        self.body = Some(body);
        Ok(self)
    }

    /// Turns this into a concrete HTTP request, attaching the bearer token
    /// when one is given.
    pub fn resolve(self, config: &ClientConfig, bearer: Option<&str>) -> HttpRequest {
        let mut url = config.url(&self.path);
        if !self.query.is_empty() {
            let encoded = form_urlencoded::Serializer::new(String::new())
                .extend_pairs(self.query.iter())
                .finish();
            url.push('?');
            url.push_str(&encoded);
        }

        let mut headers = vec![("Content-Type".to_owned(), "application/json".to_owned())];
        if let Some(token) = bearer {
            headers.push(("Authorization".to_owned(), format!("Bearer {token}")));
        }

        HttpRequest {
            method: self.method,
            url,
            headers,
            body: self.body,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// The URL without its query string.
    pub fn path(&self) -> &str {
        self.url.split('?').next().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ClientError> {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// The body text when the backend sent one, `fallback` otherwise.
    pub fn error_message(&self, fallback: &str) -> String {
        let text = self.body.trim();
        if text.is_empty() {
            fallback.to_owned()
        } else {
            text.to_owned()
        }
    }
}

/// Passes 2xx responses through and turns anything else into
/// [`ClientError::Rejected`].
pub fn expect_success(response: ApiResponse, fallback: &str) -> Result<ApiResponse, ClientError> {
    if response.is_success() {
        Ok(response)
    } else {
        Err(ClientError::Rejected {
            status: response.status,
            message: response.error_message(fallback),
        })
    }
}

/// The fetch seam. The browser implementation lives in the frontend; tests
/// use an in-memory one.
#[async_trait(?Send)]
pub trait HttpClient {
    async fn send(&self, request: HttpRequest) -> Result<ApiResponse, ClientError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_encodes_query_and_bearer() {
        let request = ApiRequest::put("/rides/4/status")
            .query("status", "CANCELLED")
            .resolve(&ClientConfig::default(), Some("abc"));

        assert_eq!(request.url, "/api/rides/4/status?status=CANCELLED");
        assert_eq!(request.path(), "/api/rides/4/status");
        assert_eq!(request.header("authorization"), Some("Bearer abc"));
        assert_eq!(request.header("content-type"), Some("application/json"));
    }

    #[test]
    fn resolve_without_token_has_no_authorization() {
        let request = ApiRequest::get("/rides").resolve(&ClientConfig::default(), None);

        assert_eq!(request.url, "/api/rides");
        assert_eq!(request.header("Authorization"), None);
    }

    #[test]
    fn rejected_carries_body_or_fallback() {
        let err = expect_success(ApiResponse::new(400, "Error: Not enough seats"), "Booking failed").unwrap_err();
        assert_eq!(
            err,
            ClientError::Rejected {
                status: 400,
                message: "Error: Not enough seats".into()
            }
        );

        let err = expect_success(ApiResponse::new(500, "  "), "Booking failed").unwrap_err();
        assert_eq!(err.to_string(), "Booking failed");
    }
}
