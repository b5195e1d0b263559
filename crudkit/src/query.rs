//! Query descriptor handed to the pagination collaborator
//!
//! The controller never builds SQL or touches a session; it describes what it
//! wants (which entity type, in which order) and the pagination collaborator
//! turns that into whatever its backend needs.

use crate::listing::SortOrder;

/// A description of a listing query over one entity type.
///
/// Built by the controller, passed through the query-customization hook, and
/// finally handed to a [`Paginator`](crate::repository::Paginator). Hosts can
/// extend the descriptor in the hook (for example to force an ordering), or
/// ignore it entirely and apply their own criteria keyed off the entity name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityQuery {
    entity: String,
    order: Option<(String, SortOrder)>,
}

impl EntityQuery {
    /// Create a descriptor for the named entity type with no ordering.
    #[must_use]
    pub fn new(entity: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            order: None,
        }
    }

    /// Order the results by `field` in the given direction.
    ///
    /// The last call wins; the descriptor carries at most one ordering.
    #[must_use]
    pub fn order_by(mut self, field: impl Into<String>, order: SortOrder) -> Self {
        self.order = Some((field.into(), order));
        self
    }

    /// The entity type name this query is over.
    #[must_use]
    pub fn entity(&self) -> &str {
        &self.entity
    }

    /// The requested ordering, if any.
    #[must_use]
    pub fn order(&self) -> Option<(&str, SortOrder)> {
        self.order
            .as_ref()
            .map(|(field, order)| (field.as_str(), *order))
    }
}
