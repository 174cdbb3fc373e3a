use thiserror::Error;

use crate::forms::FormErrors;
use crate::route::Route;

/// Why a view operation did not complete.
#[derive(Debug, Error)]
pub enum ViewError {
    /// The session may not stay here; the front end should navigate.
    #[error("redirect to {0}")]
    Redirect(Route),

    /// Input rejected locally or by the API; shown on the form, no navigation.
    #[error("form rejected: {0}")]
    Form(FormErrors),

    #[error(transparent)]
    Api(#[from] genzet_core::Error),
}

pub type ViewResult<T> = std::result::Result<T, ViewError>;
