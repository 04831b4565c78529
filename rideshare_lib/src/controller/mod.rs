//! Per-page logic: turn form or query state into requests and responses into
//! view models. Pages call these and render whatever comes back.

pub mod auth;
pub mod dashboard;
pub mod profile;
pub mod reservations;
pub mod review;
pub mod rides;
pub mod search;

use log::warn;
use serde::de::DeserializeOwned;

use crate::{
    error::ClientError,
    http::{expect_success, ApiRequest},
    navigation::Page,
    session::SessionManager,
    view::alert::Alert,
};

/// Delay between a success alert and the redirect that follows it.
pub const REDIRECT_DELAY_MS: u32 = 1_500;

/// Appended to an action's alert when the list could not be reloaded after it.
pub const RELOAD_FAILED: &str = "The list could not be reloaded.";

/// A finished action: the alert to show and where to go afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutcome {
    pub alert: Alert,
    pub redirect: Option<Page>,
}

impl ActionOutcome {
    pub fn stay(alert: Alert) -> Self {
        Self { alert, redirect: None }
    }

    pub fn redirect(alert: Alert, page: Page) -> Self {
        Self {
            alert,
            redirect: Some(page),
        }
    }
}

/// An action that changed a list, with the list as reloaded afterwards.
/// The action has already succeeded, so a failed reload only affects `list`.
#[derive(Debug, Clone, PartialEq)]
pub struct Refreshed<T> {
    pub alert: Alert,
    pub list: Result<T, ClientError>,
}

impl<T> Refreshed<T> {
    /// The alert to show and the new list, if there is one. A failed reload
    /// keeps the action's message but downgrades it to a warning.
    pub fn into_parts(self) -> (Alert, Option<T>) {
        match self.list {
            Ok(list) => (self.alert, Some(list)),
            Err(err) => {
                warn!("Reload after action failed: {err}");
                (Alert::warning(format!("{} {RELOAD_FAILED}", self.alert.message)), None)
            }
        }
    }
}

pub(crate) async fn fetch_json<T: DeserializeOwned>(
    manager: &SessionManager,
    request: ApiRequest,
    fallback: &str,
) -> Result<T, ClientError> {
    let response = manager.authenticated_request(request).await?;
    expect_success(response, fallback)?.json()
}

pub(crate) async fn send_checked(
    manager: &SessionManager,
    request: ApiRequest,
    fallback: &str,
) -> Result<(), ClientError> {
    let response = manager.authenticated_request(request).await?;
    expect_success(response, fallback)?;
    Ok(())
}

pub(crate) fn require_auth(manager: &SessionManager) -> Result<(), ClientError> {
    if manager.require_auth() {
        Ok(())
    } else {
        Err(ClientError::Redirected)
    }
}
