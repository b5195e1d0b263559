//! Entity contract consumed by the CRUD controller
//!
//! The controller is agnostic to the concrete entity shape; it only needs
//! the entity to be serializable for view rendering and to expose its
//! identifier once persisted.

use serde::Serialize;

/// A persisted record managed by a [`CrudController`](crate::controller::CrudController).
///
/// Implementors supply the identifier type and an accessor for it. An entity
/// that has not been persisted yet reports `None` from [`CrudEntity::id`].
///
/// # Examples
///
/// ```rust
/// use crudkit::entity::CrudEntity;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Widget {
///     id: Option<String>,
///     name: String,
/// }
///
/// impl CrudEntity for Widget {
///     type Id = String;
///
///     fn id(&self) -> Option<&String> {
///         self.id.as_ref()
///     }
/// }
/// ```
pub trait CrudEntity: Serialize + Send + Sync + 'static {
    /// Identifier type. `ToString` is required so identifiers can be
    /// interpolated into route parameters.
    type Id: Clone + ToString + Send + Sync + 'static;

    /// The entity's identifier, or `None` before first persistence.
    fn id(&self) -> Option<&Self::Id>;
}
