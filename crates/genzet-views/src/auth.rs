use genzet_core::traits::{BlogApi, SessionProvider};

use crate::error::{ViewError, ViewResult};
use crate::forms::{LoginForm, RegisterForm};
use crate::route::Route;

/// Validate, authenticate and remember the session. Returns where to go next.
pub async fn login<A: BlogApi, S: SessionProvider>(api: &A, session: &S, form: &LoginForm) -> ViewResult<Route> {
    form.validate().map_err(ViewError::Form)?;
    let response = match api.login(&form.username, &form.password).await {
        Ok(response) => response,
        Err(e) => {
            tracing::info!(username = %form.username, error = %e, "login rejected");
            return Err(ViewError::Form(LoginForm::map_error(&e)));
        }
    };
    session.store(&response.token, response.role)?;
    tracing::info!(username = %form.username, role = %response.role, "logged in");
    Ok(Route::landing(response.role))
}

/// Create the account. The new user still has to log in.
pub async fn register<A: BlogApi>(api: &A, form: &RegisterForm) -> ViewResult<Route> {
    form.validate().map_err(ViewError::Form)?;
    api.register(&form.username, &form.password, form.role)
        .await
        .map_err(|e| ViewError::Form(RegisterForm::map_error(&e)))?;
    tracing::info!(username = %form.username, role = %form.role, "registered");
    Ok(Route::Login)
}

pub fn logout<S: SessionProvider>(session: &S) -> ViewResult<Route> {
    session.clear()?;
    Ok(Route::Login)
}
