//! Inbound request abstraction and step outcomes
//!
//! The controller is routed to by the host framework, so it never parses an
//! HTTP request itself. [`CrudRequest`] carries the three things the handlers
//! look at: the method (POST triggers add submission, PUT triggers edit
//! submission), the raw query pairs, and the submitted form payload.

use axum::response::Response;
use http::Method;

use crate::entity::CrudEntity;
use crate::forms::{FormData, FormView};

/// The slice of an inbound HTTP request the CRUD handlers consume.
#[derive(Debug, Clone, Default)]
pub struct CrudRequest {
    method: Method,
    query: Vec<(String, String)>,
    form: FormData,
}

impl CrudRequest {
    /// Create a request with the given method, no query and no payload.
    #[must_use]
    pub fn new(method: Method) -> Self {
        Self {
            method,
            query: Vec::new(),
            form: FormData::new(),
        }
    }

    /// Shorthand for a GET request.
    #[must_use]
    pub fn get() -> Self {
        Self::new(Method::GET)
    }

    /// Shorthand for a POST request with a form payload.
    #[must_use]
    pub fn post(form: FormData) -> Self {
        Self {
            method: Method::POST,
            query: Vec::new(),
            form,
        }
    }

    /// Shorthand for a PUT request with a form payload.
    #[must_use]
    pub fn put(form: FormData) -> Self {
        Self {
            method: Method::PUT,
            query: Vec::new(),
            form,
        }
    }

    /// Append one query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Request method.
    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Raw query pairs in request order.
    #[must_use]
    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    /// Submitted form payload (empty for non-submitting requests).
    #[must_use]
    pub fn form(&self) -> &FormData {
        &self.form
    }
}

/// Result of an internal add/edit step.
///
/// The dedicated actions render the form outcome under their own view; the
/// index action merges it into the listing view. A redirect (successful
/// submission, or a missing record on edit) short-circuits rendering and is
/// returned to the client untouched.
pub enum StepOutcome<E: CrudEntity> {
    /// Display (or re-display) the form for this entity.
    Form {
        /// The entity the form is bound to.
        entity: E,
        /// The form's view-model.
        form: FormView,
    },
    /// The step resolved to a terminal redirect.
    Redirect(Response),
}

impl<E: CrudEntity> StepOutcome<E> {
    /// Whether this outcome is a terminal redirect.
    #[must_use]
    pub const fn is_redirect(&self) -> bool {
        matches!(self, Self::Redirect(_))
    }
}
