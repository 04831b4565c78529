use super::{fetch_json, require_auth};
use crate::{
    error::ClientError, http::ApiRequest, session::SessionManager, user::User, view::profile::ProfileView,
};

pub const PROFILE_FAILED: &str = "Failed to load profile.";

pub async fn load(manager: &SessionManager) -> Result<ProfileView, ClientError> {
    require_auth(manager)?;
    let user: User = fetch_json(manager, ApiRequest::get("/users/profile"), PROFILE_FAILED).await?;
    Ok(ProfileView::from(&user))
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;
    use crate::{http::Method, test_support, user::Role};

    #[test]
    fn loads_profile_with_bearer() {
        let h = test_support::logged_in(Role::Driver);
        h.client.respond(Method::Get, "/api/users/profile", 200, test_support::user_json(Role::Driver));

        let view = block_on(load(&h.manager)).unwrap();

        assert_eq!(view.email, "ana@example.com");
        assert_eq!(h.client.last_request().unwrap().header("Authorization"), Some("Bearer test-token"));
    }

    #[test]
    fn undecodable_profile_is_an_error() {
        let h = test_support::logged_in(Role::User);
        h.client.respond(Method::Get, "/api/users/profile", 200, r#"{"id":1,"role":"ROOT"}"#);

        assert!(matches!(block_on(load(&h.manager)), Err(ClientError::Decode(_))));
    }
}
