//! The authentication session and everything that reads or changes it.
//!
//! A [`Session`] either holds both a token and the cached user or holds
//! neither. [`SessionManager`] owns the session for the lifetime of a page,
//! persists it through a [`SessionStore`] and wraps every request that needs
//! the bearer token.

use std::cell::RefCell;

use log::{debug, error, info, warn};

use crate::{
    auth::{AuthResponse, LoginRequest, RegistrationForm},
    config::ClientConfig,
    error::ClientError,
    http::{expect_success, ApiRequest, ApiResponse, HttpClient},
    navigation::{Navigator, Page},
    storage::{SessionStore, TOKEN_KEY, USER_KEY},
    user::{Role, User},
    view::Viewer,
};

const LOGIN_FAILED: &str = "Login failed";
const REGISTRATION_FAILED: &str = "Registration failed";

#[derive(Debug, Clone, PartialEq)]
pub struct Credentials {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    credentials: Option<Credentials>,
}

impl Session {
    pub fn new(token: String, user: User) -> Self {
        Self {
            credentials: Some(Credentials { token, user }),
        }
    }

    /// Restores the session persisted by [`Session::save`]. A token without a
    /// readable user (or the other way round) is discarded and both keys are
    /// cleared.
    pub fn load(store: &dyn SessionStore) -> Self {
        let token = store.get(TOKEN_KEY);
        let user = store.get(USER_KEY);

        match (token, user) {
            (None, None) => Self::default(),
            (Some(token), Some(user)) => match serde_json::from_str::<User>(&user) {
                Ok(user) if !token.is_empty() => Self::new(token, user),
                Ok(_) => {
                    warn!("Stored session has an empty token, discarding it");
                    Self::clear_store(store);
                    Self::default()
                }
                Err(err) => {
                    warn!("Stored user could not be read ({err}), discarding session");
                    Self::clear_store(store);
                    Self::default()
                }
            },
            _ => {
                warn!("Stored session is incomplete, discarding it");
                Self::clear_store(store);
                Self::default()
            }
        }
    }

    pub fn save(&self, store: &dyn SessionStore) {
        let Some(credentials) = &self.credentials else {
            Self::clear_store(store);
            return;
        };

        match serde_json::to_string(&credentials.user) {
            Ok(user) => {
                store.set(TOKEN_KEY, &credentials.token);
                store.set(USER_KEY, &user);
            }
            Err(err) => {
                error!("Failed to persist session: {err}");
                Self::clear_store(store);
            }
        }
    }

    fn clear_store(store: &dyn SessionStore) {
        store.remove(TOKEN_KEY);
        store.remove(USER_KEY);
    }

    pub fn is_authenticated(&self) -> bool {
        self.credentials.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.credentials.as_ref().map(|c| c.token.as_str())
    }

    pub fn user(&self) -> Option<&User> {
        self.credentials.as_ref().map(|c| &c.user)
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }
}

pub struct SessionManager {
    config: ClientConfig,
    client: Box<dyn HttpClient>,
    store: Box<dyn SessionStore>,
    navigator: Box<dyn Navigator>,
    session: RefCell<Session>,
}

impl SessionManager {
    /// Builds the manager and restores whatever session `store` holds.
    pub fn new(
        config: ClientConfig,
        client: Box<dyn HttpClient>,
        store: Box<dyn SessionStore>,
        navigator: Box<dyn Navigator>,
    ) -> Self {
        let session = Session::load(store.as_ref());
        if let Some(user) = session.user() {
            debug!("Restored session for {}", user.email);
        }

        Self {
            config,
            client,
            store,
            navigator,
            session: RefCell::new(session),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> Session {
        self.session.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.borrow().is_authenticated()
    }

    pub fn current_user(&self) -> Option<User> {
        self.session.borrow().user().cloned()
    }

    pub fn token(&self) -> Option<String> {
        self.session.borrow().token().map(str::to_owned)
    }

    pub fn viewer(&self) -> Viewer {
        Viewer::for_user(self.session.borrow().user())
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.session.borrow().user().is_some_and(|user| user.role == role)
    }

    /// Sends the user to the login page when nobody is logged in.
    pub fn require_auth(&self) -> bool {
        if self.is_authenticated() {
            return true;
        }

        self.navigator.navigate(Page::Login);
        false
    }

    /// Sends the user to the entry page unless they are logged in with `role`.
    pub fn require_role(&self, role: Role) -> bool {
        if self.is_authenticated() && self.has_role(role) {
            return true;
        }

        self.navigator.navigate(Page::Index);
        false
    }

    pub fn navigate(&self, page: Page) {
        self.navigator.navigate(page);
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<User, ClientError> {
        let request = ApiRequest::post("/auth/login").json(&LoginRequest {
            email: email.trim().to_owned(),
            password: password.to_owned(),
        })?;

        self.authenticate(request, LOGIN_FAILED).await
    }

    /// Registers a new account. Mismatched passwords are rejected before any
    /// request is made.
    pub async fn register(&self, form: &RegistrationForm) -> Result<User, ClientError> {
        let payload = form.validate()?;
        let request = ApiRequest::post("/auth/register").json(&payload)?;

        self.authenticate(request, REGISTRATION_FAILED).await
    }

    pub fn logout(&self) {
        self.clear();
        self.navigator.navigate(Page::Index);
    }

    /// Sends `request` with the bearer token attached. A 401 ends the session
    /// and redirects to the login page; every other status is handed back.
    pub async fn authenticated_request(&self, request: ApiRequest) -> Result<ApiResponse, ClientError> {
        let path = request.path.clone();
        let http_request = request.resolve(&self.config, self.token().as_deref());

        let response = self.client.send(http_request).await.inspect_err(|err| {
            error!("API request error on {path}: {err}");
        })?;

        if response.status == 401 {
            warn!("{path} answered 401, ending session");
            self.clear();
            self.navigator.navigate(Page::Login);
            return Err(ClientError::SessionExpired);
        }

        Ok(response)
    }

    /// Sends `request` without credentials, for public data.
    pub async fn public_request(&self, request: ApiRequest) -> Result<ApiResponse, ClientError> {
        let path = request.path.clone();
        let http_request = request.resolve(&self.config, None);

        self.client.send(http_request).await.inspect_err(|err| {
            error!("Public request error on {path}: {err}");
        })
    }

    async fn authenticate(&self, request: ApiRequest, fallback: &str) -> Result<User, ClientError> {
        let response = self.public_request(request).await?;
        let response = expect_success(response, fallback)?;
        let AuthResponse { token, user } = response.json()?;

        info!("Logged in as {}", user.email);
        self.establish(Session::new(token, user.clone()));
        Ok(user)
    }

    fn establish(&self, session: Session) {
        session.save(self.store.as_ref());
        *self.session.borrow_mut() = session;
    }

    fn clear(&self) {
        self.establish(Session::default());
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;
    use crate::{
        error::ValidationError,
        http::Method,
        storage::MemoryStore,
        test_support::{self, Harness},
    };

    fn assert_consistent(h: &Harness) {
        let session = h.manager.session();
        assert_eq!(session.token().is_some(), session.user().is_some());
        assert_eq!(h.store.get(TOKEN_KEY).is_some(), h.store.get(USER_KEY).is_some());
    }

    #[test]
    fn restores_persisted_session() {
        let store = MemoryStore::new();
        Session::new("tok".into(), test_support::user(Role::Driver)).save(&store);

        let h = test_support::harness_with_store(store);

        assert!(h.manager.is_authenticated());
        assert_eq!(h.manager.token().as_deref(), Some("tok"));
        assert!(h.manager.has_role(Role::Driver));
        assert_consistent(&h);
    }

    #[test]
    fn token_without_user_is_discarded() {
        let store = MemoryStore::new();
        store.set(TOKEN_KEY, "tok");

        let h = test_support::harness_with_store(store);

        assert!(!h.manager.is_authenticated());
        assert!(h.store.is_empty());
    }

    #[test]
    fn corrupt_user_is_discarded() {
        let store = MemoryStore::new();
        store.set(TOKEN_KEY, "tok");
        store.set(USER_KEY, "{not json");

        let h = test_support::harness_with_store(store);

        assert!(!h.manager.is_authenticated());
        assert!(h.store.is_empty());
    }

    #[test]
    fn login_populates_session_and_next_request_carries_bearer() {
        let h = test_support::harness();
        h.client.respond(Method::Post, "/api/auth/login", 200, test_support::auth_json("jwt-1", Role::User));
        h.client.respond(Method::Get, "/api/users/profile", 200, test_support::user_json(Role::User));

        let user = block_on(h.manager.login("ana@example.com", "secret")).unwrap();
        assert_eq!(user.role, Role::User);
        assert_eq!(h.manager.token().as_deref(), Some("jwt-1"));
        assert_eq!(h.store.get(TOKEN_KEY).as_deref(), Some("jwt-1"));
        assert_consistent(&h);

        let login = h.client.last_request().unwrap();
        assert_eq!(login.header("Authorization"), None);
        assert_eq!(
            login.body.as_deref(),
            Some(r#"{"email":"ana@example.com","password":"secret"}"#)
        );

        block_on(h.manager.authenticated_request(ApiRequest::get("/users/profile"))).unwrap();
        assert_eq!(
            h.client.last_request().unwrap().header("Authorization"),
            Some("Bearer jwt-1")
        );
    }

    #[test]
    fn failed_login_surfaces_backend_message_and_keeps_session() {
        let h = test_support::harness();
        h.client.respond(Method::Post, "/api/auth/login", 400, "Error: Invalid credentials");

        let err = block_on(h.manager.login("ana@example.com", "wrong")).unwrap_err();

        assert_eq!(err.to_string(), "Error: Invalid credentials");
        assert!(!h.manager.is_authenticated());
        assert!(h.store.is_empty());
    }

    #[test]
    fn unauthorized_login_is_a_rejection_not_an_expiry() {
        let h = test_support::logged_in(Role::Driver);
        h.client.respond(Method::Post, "/api/auth/login", 401, "Bad credentials");

        let err = block_on(h.manager.login("ana@example.com", "wrong")).unwrap_err();

        assert_eq!(
            err,
            ClientError::Rejected {
                status: 401,
                message: "Bad credentials".into(),
            }
        );
        assert_eq!(h.manager.token().as_deref(), Some("test-token"));
        assert!(h.manager.has_role(Role::Driver));
        assert_eq!(h.store.get(TOKEN_KEY).as_deref(), Some("test-token"));
        assert!(h.navigator.pages().is_empty());
        assert_consistent(&h);
    }

    #[test]
    fn failed_login_without_body_uses_fallback() {
        let h = test_support::harness();
        h.client.respond(Method::Post, "/api/auth/login", 500, "");

        let err = block_on(h.manager.login("ana@example.com", "wrong")).unwrap_err();
        assert_eq!(err.to_string(), "Login failed");
    }

    #[test]
    fn register_with_mismatched_passwords_makes_no_request() {
        let h = test_support::harness();
        let form = RegistrationForm {
            name: "Ana".into(),
            email: "ana@example.com".into(),
            password: "one".into(),
            confirm_password: "two".into(),
            role: Some(Role::Driver),
        };

        let err = block_on(h.manager.register(&form)).unwrap_err();

        assert_eq!(err, ClientError::Validation(ValidationError::PasswordMismatch));
        assert!(h.client.requests().is_empty());
        assert!(!h.manager.is_authenticated());
    }

    #[test]
    fn register_stores_session() {
        let h = test_support::harness();
        h.client.respond(Method::Post, "/api/auth/register", 201, test_support::auth_json("jwt-2", Role::Driver));
        let form = RegistrationForm {
            name: "Ana".into(),
            email: "ana@example.com".into(),
            password: "same".into(),
            confirm_password: "same".into(),
            role: Some(Role::Driver),
        };

        block_on(h.manager.register(&form)).unwrap();

        assert!(h.manager.has_role(Role::Driver));
        assert_consistent(&h);
        let body = h.client.last_request().unwrap().body.unwrap();
        assert!(body.contains(r#""role":"DRIVER""#));
        assert!(!body.contains("confirm"));
    }

    #[test]
    fn any_401_clears_session_and_redirects_to_login() {
        for path in ["/rides", "/reservations/my-reservations", "/users/profile"] {
            let h = test_support::logged_in(Role::User);
            h.client.respond(Method::Get, &format!("/api{path}"), 401, "");

            let err = block_on(h.manager.authenticated_request(ApiRequest::get(path))).unwrap_err();

            assert_eq!(err, ClientError::SessionExpired);
            assert!(!h.manager.is_authenticated());
            assert!(h.store.is_empty());
            assert_eq!(h.navigator.last(), Some(Page::Login));
        }
    }

    #[test]
    fn other_errors_are_left_to_the_caller() {
        let h = test_support::logged_in(Role::User);
        h.client.respond(Method::Get, "/api/rides", 500, "boom");

        let response = block_on(h.manager.authenticated_request(ApiRequest::get("/rides"))).unwrap();

        assert_eq!(response.status, 500);
        assert!(h.manager.is_authenticated());
        assert!(h.navigator.pages().is_empty());
    }

    #[test]
    fn transport_failure_propagates() {
        let h = test_support::logged_in(Role::User);

        let err = block_on(h.manager.authenticated_request(ApiRequest::get("/rides"))).unwrap_err();
        assert!(matches!(err, ClientError::Transport(_)));
        assert!(h.manager.is_authenticated());
    }

    #[test]
    fn logout_clears_everything_and_goes_home() {
        let h = test_support::logged_in(Role::Driver);

        h.manager.logout();

        assert!(!h.manager.is_authenticated());
        assert!(h.store.is_empty());
        assert_eq!(h.navigator.last(), Some(Page::Index));
    }

    #[test]
    fn require_auth_on_empty_session_redirects_without_request() {
        let h = test_support::harness();

        assert!(!h.manager.require_auth());
        assert_eq!(h.navigator.last(), Some(Page::Login));
        assert!(h.client.requests().is_empty());
    }

    #[test]
    fn require_driver_for_passenger_redirects_home() {
        let h = test_support::logged_in(Role::User);

        assert!(h.manager.require_auth());
        assert!(!h.manager.require_role(Role::Driver));
        assert_eq!(h.navigator.pages(), vec![Page::Index]);
        assert!(h.client.requests().is_empty());
    }

    #[test]
    fn require_driver_for_driver_passes() {
        let h = test_support::logged_in(Role::Driver);

        assert!(h.manager.require_role(Role::Driver));
        assert!(h.navigator.pages().is_empty());
        assert_eq!(h.manager.viewer(), Viewer::Driver);
    }
}
