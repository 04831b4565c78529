use super::ActionOutcome;
use crate::{
    auth::RegistrationForm,
    error::ClientError,
    navigation::Page,
    session::SessionManager,
    view::alert::Alert,
};

pub const LOGIN_FAILED: &str = "Login failed. Please try again.";
pub const REGISTRATION_FAILED: &str = "Registration failed. Please try again.";

pub async fn login(manager: &SessionManager, email: &str, password: &str) -> Result<ActionOutcome, ClientError> {
    manager.login(email, password).await?;
    Ok(ActionOutcome::redirect(
        Alert::success("Login successful! Redirecting..."),
        Page::Dashboard,
    ))
}

pub async fn register(manager: &SessionManager, form: &RegistrationForm) -> Result<ActionOutcome, ClientError> {
    manager.register(form).await?;
    Ok(ActionOutcome::redirect(
        Alert::success("Registration successful! Redirecting..."),
        Page::Dashboard,
    ))
}
