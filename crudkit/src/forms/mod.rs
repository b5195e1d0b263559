//! Form collaborator contracts
//!
//! Mirrors the shape of framework form components: the controller asks the
//! binder for a form bound to an entity, feeds it the submitted payload, asks
//! whether the result is valid, and either takes the entity back for
//! persistence or hands the form's view-model to the renderer. Validation
//! rules live entirely in the binder implementation; the controller only
//! branches on [`BoundForm::is_valid`].

use std::collections::{BTreeMap, HashMap};

use http::Method;
use serde::Serialize;
use validator::ValidationErrors;

use crate::entity::CrudEntity;
use crate::error::CrudError;

/// Raw submitted form payload: field name to submitted value.
pub type FormData = HashMap<String, String>;

/// Options the controller supplies when constructing a form: where the
/// rendered form must submit to and with which HTTP method.
#[derive(Debug, Clone)]
pub struct FormOptions {
    /// Action URL the rendered form targets.
    pub action: String,
    /// HTTP method the rendered form submits with.
    pub method: Method,
}

impl FormOptions {
    /// Create form options for `action` and `method`.
    #[must_use]
    pub fn new(action: impl Into<String>, method: Method) -> Self {
        Self {
            action: action.into(),
            method,
        }
    }
}

/// Form collaborator: constructs a form of a given schema bound to an entity.
pub trait FormBinder<E: CrudEntity>: Send + Sync {
    /// Bind a form identified by `schema` to `entity`.
    ///
    /// # Errors
    ///
    /// Returns [`CrudError::Form`] when the schema is unknown or the entity
    /// cannot be bound.
    fn bind(
        &self,
        schema: &str,
        entity: E,
        options: FormOptions,
    ) -> Result<Box<dyn BoundForm<E>>, CrudError>;
}

/// A form bound to one entity for the scope of a single request.
///
/// Exists only within one request; never persisted. Only the entity is
/// persisted, and only after [`BoundForm::is_valid`] returns true.
pub trait BoundForm<E: CrudEntity>: Send {
    /// Apply the submitted payload to the form and the bound entity.
    fn submit(&mut self, data: &FormData);

    /// Whether the last submission passed validation. A form that was never
    /// submitted is not valid.
    fn is_valid(&self) -> bool;

    /// The serializable view-model for rendering. After a failed submission
    /// the view must still carry the submitted values so no input is lost.
    fn view(&self) -> FormView;

    /// Take the bound entity back out of the form.
    fn into_entity(self: Box<Self>) -> E;
}

/// Serializable form view-model handed to the rendering collaborator.
#[derive(Debug, Clone, Serialize)]
pub struct FormView {
    /// Action URL the form targets.
    pub action: String,
    /// Submit method, as an upper-case string.
    pub method: String,
    /// Current field values (initial entity values, or the submitted ones
    /// after a submission).
    pub values: BTreeMap<String, String>,
    /// Validation errors from the last submission; empty when valid or not
    /// yet submitted.
    pub errors: ValidationErrors,
}

impl FormView {
    /// Whether the view carries any validation errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}
