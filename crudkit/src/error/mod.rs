//! Error types and error handling
//!
//! Only conditions the controller cannot recover locally become a
//! [`CrudError`]. A missing entity or a failed validation is *not* an error:
//! both are turned into a notice plus a redirect or a re-rendered form inside
//! the controller. Everything here propagates out of the handler and is
//! expected to be converted into an HTTP response by the host framework.

use axum::response::{IntoResponse, Response};
use http::StatusCode;
use thiserror::Error;

/// Unrecoverable per-request errors raised by the CRUD core or its
/// collaborators.
#[derive(Debug, Error)]
pub enum CrudError {
    /// Controller configuration error (e.g. no entity factory configured).
    /// Fatal for the request; surfaced as a 404 like an unresolvable resource.
    #[error("configuration error: {0}")]
    Config(String),

    /// Storage collaborator failure.
    #[error("storage error: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Form collaborator failure (binding, not validation).
    #[error("form binding error: {0}")]
    Form(String),

    /// View rendering failure.
    #[error("render error: {0}")]
    Render(String),

    /// The routing collaborator does not know the requested route.
    #[error("unknown route: {0}")]
    UnknownRoute(String),
}

impl CrudError {
    /// Wrap a driver-specific error into the `Storage` variant.
    ///
    /// Used by repository implementations to surface backend errors without
    /// the core depending on any particular driver.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Box::new(err))
    }

    /// HTTP status this error maps to when surfaced by an axum host.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Config(_) => StatusCode::NOT_FOUND,
            Self::Storage(_) | Self::Form(_) | Self::Render(_) | Self::UnknownRoute(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<serde_json::Error> for CrudError {
    fn from(err: serde_json::Error) -> Self {
        Self::Render(err.to_string())
    }
}

impl IntoResponse for CrudError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::error!(error = %self, status = %status, "request failed");
        (status, self.to_string()).into_response()
    }
}
