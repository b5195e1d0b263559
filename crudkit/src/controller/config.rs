//! Per-controller configuration
//!
//! Replaces subclass-hook polymorphism with a configuration value: identifiers
//! for the entity type, module and form schema, the route set, and
//! function-valued hooks for query customization and pre-persist transforms.
//! A host configures one [`CrudConfig`] per entity type instead of writing a
//! controller subtype.

use crate::config::CrudSettings;
use crate::entity::CrudEntity;
use crate::query::EntityQuery;
use crate::routes::RouteSet;

/// Hook that customizes the listing query before pagination.
pub type QueryHook = Box<dyn Fn(EntityQuery) -> EntityQuery + Send + Sync>;

/// Hook that transforms an entity right before it is persisted, allowing
/// derived fields to be computed.
pub type PersistHook<E> = Box<dyn Fn(E) -> E + Send + Sync>;

/// Factory producing a new, empty entity for the add flow.
pub type EntityFactory<E> = Box<dyn Fn() -> E + Send + Sync>;

/// Configuration for one [`CrudController`](super::CrudController).
///
/// # Examples
///
/// ```rust
/// use crudkit::controller::CrudConfig;
/// use crudkit::entity::CrudEntity;
/// use crudkit::listing::SortOrder;
/// use serde::Serialize;
///
/// #[derive(Default, Serialize)]
/// struct Widget {
///     id: Option<String>,
///     name: String,
/// }
/// # impl CrudEntity for Widget {
/// #     type Id = String;
/// #     fn id(&self) -> Option<&String> { self.id.as_ref() }
/// # }
///
/// let config = CrudConfig::<Widget>::new("Widget", "Catalog", "widget")
///     .default_sort("name")
///     .factory(|| Widget::default())
///     .customize_query(|query| query.order_by("name", SortOrder::Asc));
/// ```
pub struct CrudConfig<E: CrudEntity> {
    entity: String,
    module: String,
    schema: String,
    settings: CrudSettings,
    routes: RouteSet,
    factory: Option<EntityFactory<E>>,
    customize_query: QueryHook,
    before_persist: PersistHook<E>,
}

impl<E: CrudEntity> CrudConfig<E> {
    /// Create a configuration for `entity` living in `module`, bound to the
    /// form schema `schema`. Hooks default to the identity; routes and
    /// settings to their defaults.
    #[must_use]
    pub fn new(
        entity: impl Into<String>,
        module: impl Into<String>,
        schema: impl Into<String>,
    ) -> Self {
        Self {
            entity: entity.into(),
            module: module.into(),
            schema: schema.into(),
            settings: CrudSettings::default(),
            routes: RouteSet::default(),
            factory: None,
            customize_query: Box::new(|query| query),
            before_persist: Box::new(|entity| entity),
        }
    }

    /// Use `settings` instead of the built-in defaults.
    #[must_use]
    pub fn settings(mut self, settings: CrudSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Override the default sort field (initially from the settings,
    /// `"created"` out of the box).
    #[must_use]
    pub fn default_sort(mut self, field: impl Into<String>) -> Self {
        self.settings.default_sort = field.into();
        self
    }

    /// Use `routes` for this controller.
    #[must_use]
    pub fn routes(mut self, routes: RouteSet) -> Self {
        self.routes = routes;
        self
    }

    /// Set the factory the add flow uses to instantiate a new entity.
    /// Without one, the add flow fails with a configuration error.
    #[must_use]
    pub fn factory(mut self, factory: impl Fn() -> E + Send + Sync + 'static) -> Self {
        self.factory = Some(Box::new(factory));
        self
    }

    /// Set the query-customization hook applied to every listing query.
    #[must_use]
    pub fn customize_query(
        mut self,
        hook: impl Fn(EntityQuery) -> EntityQuery + Send + Sync + 'static,
    ) -> Self {
        self.customize_query = Box::new(hook);
        self
    }

    /// Set the pre-persist transform applied before every stage+commit.
    #[must_use]
    pub fn before_persist(mut self, hook: impl Fn(E) -> E + Send + Sync + 'static) -> Self {
        self.before_persist = Box::new(hook);
        self
    }

    /// Entity type name.
    #[must_use]
    pub fn entity_name(&self) -> &str {
        &self.entity
    }

    /// Module name, used as the view-identifier prefix.
    #[must_use]
    pub fn module_name(&self) -> &str {
        &self.module
    }

    /// Form schema identifier.
    #[must_use]
    pub fn schema_name(&self) -> &str {
        &self.schema
    }

    /// Controller settings.
    #[must_use]
    pub fn crud_settings(&self) -> &CrudSettings {
        &self.settings
    }

    /// Route set.
    #[must_use]
    pub fn route_set(&self) -> &RouteSet {
        &self.routes
    }

    pub(super) fn entity_factory(&self) -> Option<&EntityFactory<E>> {
        self.factory.as_ref()
    }

    pub(super) fn query_hook(&self) -> &QueryHook {
        &self.customize_query
    }

    pub(super) fn persist_hook(&self) -> &PersistHook<E> {
        &self.before_persist
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::SortOrder;
    use serde::Serialize;

    #[derive(Default, Serialize)]
    struct Widget {
        id: Option<String>,
        name: String,
    }

    impl CrudEntity for Widget {
        type Id = String;

        fn id(&self) -> Option<&String> {
            self.id.as_ref()
        }
    }

    #[test]
    fn test_defaults() {
        let config = CrudConfig::<Widget>::new("Widget", "Catalog", "widget");
        assert_eq!(config.entity_name(), "Widget");
        assert_eq!(config.module_name(), "Catalog");
        assert_eq!(config.schema_name(), "widget");
        assert_eq!(config.crud_settings().default_sort, "created");
        assert!(config.entity_factory().is_none());
    }

    #[test]
    fn test_hooks_default_to_identity() {
        let config = CrudConfig::<Widget>::new("Widget", "Catalog", "widget");

        let query = EntityQuery::new("Widget").order_by("name", SortOrder::Asc);
        assert_eq!((config.query_hook())(query.clone()), query);

        let widget = Widget {
            id: None,
            name: "gear".into(),
        };
        let widget = (config.persist_hook())(widget);
        assert_eq!(widget.name, "gear");
    }

    #[test]
    fn test_builder_overrides() {
        let config = CrudConfig::<Widget>::new("Widget", "Catalog", "widget")
            .default_sort("name")
            .factory(Widget::default)
            .before_persist(|mut widget| {
                widget.name = widget.name.to_uppercase();
                widget
            });

        assert_eq!(config.crud_settings().default_sort, "name");
        assert!(config.entity_factory().is_some());

        let widget = (config.persist_hook())(Widget {
            id: None,
            name: "gear".into(),
        });
        assert_eq!(widget.name, "GEAR");
    }
}
