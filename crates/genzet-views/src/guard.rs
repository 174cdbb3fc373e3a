use genzet_core::traits::{BlogApi, SessionProvider};
use genzet_core::types::{Profile, Role};
use genzet_core::Error;

use crate::error::{ViewError, ViewResult};
use crate::route::Route;

/// Resolve the session's profile before a protected view opens.
///
/// - no stored token: redirect to login
/// - token rejected (401): clear the session, redirect to login
/// - role differs from `required`: redirect to the actual role's landing view
pub async fn authorize<A: BlogApi, S: SessionProvider>(api: &A, session: &S, required: Option<Role>) -> ViewResult<Profile> {
    let Some(token) = session.token() else {
        tracing::info!("no stored token, redirecting to login");
        return Err(ViewError::Redirect(Route::Login));
    };
    match api.profile(&token).await {
        Ok(profile) => match required {
            Some(role) if profile.role != role => {
                tracing::info!(required = %role, actual = %profile.role, "role mismatch");
                Err(ViewError::Redirect(Route::landing(profile.role)))
            }
            _ => Ok(profile),
        },
        Err(Error::Unauthenticated) => Err(session_expired(session)),
        Err(e) => Err(e.into()),
    }
}

/// Token for a mutation, or a login redirect when there is none.
pub fn require_token<S: SessionProvider>(session: &S) -> ViewResult<String> {
    session.token().ok_or(ViewError::Redirect(Route::Login))
}

/// Drop stored credentials after the API rejected them.
pub fn session_expired<S: SessionProvider>(session: &S) -> ViewError {
    tracing::info!("token rejected, clearing session");
    match session.clear() {
        Ok(()) => ViewError::Redirect(Route::Login),
        Err(e) => e.into(),
    }
}
