//! Generic CRUD controller
//!
//! One [`CrudController`] gives a host application the full
//! list/details/add/edit/remove flow over a single entity type. The host
//! supplies a [`CrudConfig`] (identifiers, routes, hooks) and five
//! collaborators: storage, pagination, form binding, view rendering and URL
//! resolution. Each handler runs one request to completion — no internal
//! concurrency, no background work.
//!
//! Mutating flows follow a small state machine: a non-matching-verb request
//! displays the form; a matching-verb request with valid data persists and
//! redirects; invalid data queues a danger notice and re-renders the form
//! with the submitted values preserved.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crudkit::prelude::*;
//!
//! let controller = CrudController::new(
//!     CrudConfig::<Widget>::new("Widget", "Catalog", "widget").factory(Widget::default),
//!     repository,
//!     paginator,
//!     binder,
//!     renderer,
//!     urls,
//! );
//!
//! let mut notices = Notices::new();
//! let response = controller.index(&CrudRequest::get(), None, &mut notices).await?;
//! ```

mod config;
mod request;

pub use config::{CrudConfig, EntityFactory, PersistHook, QueryHook};
pub use request::{CrudRequest, StepOutcome};

use std::sync::Arc;

use axum::response::Response;
use http::Method;

use crate::entity::CrudEntity;
use crate::error::CrudError;
use crate::forms::{FormBinder, FormOptions};
use crate::listing::{ListQuery, SortOrder};
use crate::notify::Notices;
use crate::query::EntityQuery;
use crate::render::{ViewData, ViewRenderer};
use crate::repository::{Paginator, Repository};
use crate::routes::{redirect_to, UrlResolver};

/// Request handlers for one entity type, parameterized by configuration
/// instead of subtyping.
pub struct CrudController<E: CrudEntity> {
    config: CrudConfig<E>,
    repository: Arc<dyn Repository<E>>,
    paginator: Arc<dyn Paginator<E>>,
    binder: Arc<dyn FormBinder<E>>,
    renderer: Arc<dyn ViewRenderer>,
    urls: Arc<dyn UrlResolver>,
}

impl<E: CrudEntity> CrudController<E> {
    /// Assemble a controller from its configuration and collaborators.
    #[must_use]
    pub fn new(
        config: CrudConfig<E>,
        repository: Arc<dyn Repository<E>>,
        paginator: Arc<dyn Paginator<E>>,
        binder: Arc<dyn FormBinder<E>>,
        renderer: Arc<dyn ViewRenderer>,
        urls: Arc<dyn UrlResolver>,
    ) -> Self {
        Self {
            config,
            repository,
            paginator,
            binder,
            renderer,
            urls,
        }
    }

    /// Controller configuration.
    #[must_use]
    pub fn config(&self) -> &CrudConfig<E> {
        &self.config
    }

    /// Listing action.
    ///
    /// Reads `page`, `limit`, `sort` and `order` from the request query with
    /// defaults applied, paginates the (hook-customized) entity query, and
    /// renders the index view. When `id` is given the edit flow runs inline
    /// and its form is merged into the view; otherwise the add flow is. If
    /// the inline flow resolved to a redirect (a successful submission), that
    /// redirect is returned and nothing is rendered.
    ///
    /// # Errors
    ///
    /// Propagates collaborator failures and configuration errors.
    pub async fn index(
        &self,
        request: &CrudRequest,
        id: Option<&E::Id>,
        notices: &mut Notices,
    ) -> Result<Response, CrudError> {
        let list = ListQuery::from_pairs(
            request.query_pairs(),
            self.config.crud_settings().default_limit,
        );

        let mut query = EntityQuery::new(self.config.entity_name());
        query = match &list.sort {
            Some(field) => query.order_by(field.as_str(), list.order),
            None => query.order_by(
                self.config.crud_settings().default_sort.as_str(),
                SortOrder::Desc,
            ),
        };
        let query = (self.config.query_hook())(query);

        let page = self.paginator.paginate(&query, list.page, list.limit).await?;
        tracing::debug!(
            entity = self.config.entity_name(),
            page = list.page,
            limit = list.limit,
            total = page.total,
            "listing"
        );

        let step = match id {
            Some(id) => self.edit_step(request, id, notices).await?,
            None => self.add_step(request, notices).await?,
        };
        let (entity, form) = match step {
            StepOutcome::Redirect(response) => return Ok(response),
            StepOutcome::Form { entity, form } => (entity, form),
        };

        let mut data = ViewData::new();
        data.insert_ser("entities", &page)?;
        data.insert_ser("entity", &entity)?;
        data.insert_ser("form", &form)?;
        self.renderer.render(&self.view_id("index"), &data)
    }

    /// Details action: render one entity, or notice + redirect to the index
    /// route when the record is absent.
    ///
    /// # Errors
    ///
    /// Propagates collaborator failures.
    pub async fn details(&self, id: &E::Id, notices: &mut Notices) -> Result<Response, CrudError> {
        let Some(entity) = self.repository.find_by_id(id).await? else {
            tracing::warn!(
                entity = self.config.entity_name(),
                id = %id.to_string(),
                "details on missing record"
            );
            notices.danger(self.config.crud_settings().notices.not_found.clone());
            return self.redirect(&self.config.route_set().index);
        };
        let mut data = ViewData::new();
        data.insert_ser("entity", &entity)?;
        self.renderer.render(&self.view_id("details"), &data)
    }

    /// Add action: run the add step and render its form outcome, or return
    /// its redirect after a successful submission.
    ///
    /// # Errors
    ///
    /// Returns [`CrudError::Config`] when no entity factory is configured;
    /// otherwise propagates collaborator failures.
    pub async fn add(&self, request: &CrudRequest, notices: &mut Notices) -> Result<Response, CrudError> {
        match self.add_step(request, notices).await? {
            StepOutcome::Redirect(response) => Ok(response),
            StepOutcome::Form { entity, form } => {
                let mut data = ViewData::new();
                data.insert_ser("entity", &entity)?;
                data.insert_ser("form", &form)?;
                self.renderer.render(&self.view_id("add"), &data)
            }
        }
    }

    /// Edit action: run the edit step and render its form outcome, or return
    /// its redirect (successful submission or missing record).
    ///
    /// # Errors
    ///
    /// Propagates collaborator failures.
    pub async fn edit(
        &self,
        request: &CrudRequest,
        id: &E::Id,
        notices: &mut Notices,
    ) -> Result<Response, CrudError> {
        match self.edit_step(request, id, notices).await? {
            StepOutcome::Redirect(response) => Ok(response),
            StepOutcome::Form { entity, form } => {
                let mut data = ViewData::new();
                data.insert_ser("entity", &entity)?;
                data.insert_ser("form", &form)?;
                self.renderer.render(&self.view_id("edit"), &data)
            }
        }
    }

    /// Remove action: delete the entity when present, queue the matching
    /// notice either way, and redirect to the post-delete route.
    ///
    /// Verb guarding (e.g. requiring DELETE) is the host router's concern.
    ///
    /// # Errors
    ///
    /// Propagates collaborator failures.
    pub async fn remove(&self, id: &E::Id, notices: &mut Notices) -> Result<Response, CrudError> {
        match self.repository.find_by_id(id).await? {
            None => {
                tracing::warn!(
                    entity = self.config.entity_name(),
                    id = %id.to_string(),
                    "remove on missing record"
                );
                notices.danger(self.config.crud_settings().notices.not_found.clone());
            }
            Some(entity) => {
                self.repository.delete(&entity).await?;
                tracing::debug!(
                    entity = self.config.entity_name(),
                    id = %id.to_string(),
                    "removed record"
                );
                notices.success(self.config.crud_settings().notices.success.clone());
            }
        }
        self.redirect(self.config.route_set().removed_or_index())
    }

    /// Internal add flow, also run inline by [`CrudController::index`].
    ///
    /// Instantiates a new entity, binds the insertion form targeting the add
    /// route with POST semantics, and on a POST request submits and
    /// validates: valid data is transformed, staged and committed, then the
    /// flow redirects to the post-create route; invalid data queues a danger
    /// notice and falls through to the form outcome.
    ///
    /// # Errors
    ///
    /// Returns [`CrudError::Config`] when no entity factory is configured.
    pub async fn add_step(
        &self,
        request: &CrudRequest,
        notices: &mut Notices,
    ) -> Result<StepOutcome<E>, CrudError> {
        let factory = self.config.entity_factory().ok_or_else(|| {
            CrudError::Config(format!(
                "no entity factory configured for `{}`",
                self.config.entity_name()
            ))
        })?;
        let entity = factory();

        let action = self.urls.url_for(&self.config.route_set().add, &[])?;
        let mut form = self.binder.bind(
            self.config.schema_name(),
            entity,
            FormOptions::new(action, Method::POST),
        )?;

        if request.method() == Method::POST {
            form.submit(request.form());
            if form.is_valid() {
                let entity = (self.config.persist_hook())(form.into_entity());
                self.repository.stage(&entity).await?;
                self.repository.commit().await?;
                tracing::debug!(entity = self.config.entity_name(), "created record");
                notices.success(self.config.crud_settings().notices.success.clone());
                let response = self.redirect(self.config.route_set().created_or_index())?;
                return Ok(StepOutcome::Redirect(response));
            }
            notices.danger(self.config.crud_settings().notices.failure.clone());
        }

        let view = form.view();
        Ok(StepOutcome::Form {
            entity: form.into_entity(),
            form: view,
        })
    }

    /// Internal edit flow, also run inline by [`CrudController::index`].
    ///
    /// Loads the entity (absent → danger notice + redirect to the post-update
    /// route), binds the update form targeting the edit route with PUT
    /// semantics, and on a PUT request submits and validates with the same
    /// valid/invalid transitions as the add flow.
    ///
    /// # Errors
    ///
    /// Propagates collaborator failures.
    pub async fn edit_step(
        &self,
        request: &CrudRequest,
        id: &E::Id,
        notices: &mut Notices,
    ) -> Result<StepOutcome<E>, CrudError> {
        let Some(entity) = self.repository.find_by_id(id).await? else {
            tracing::warn!(
                entity = self.config.entity_name(),
                id = %id.to_string(),
                "edit on missing record"
            );
            notices.danger(self.config.crud_settings().notices.not_found.clone());
            let response = self.redirect(self.config.route_set().updated_or_index())?;
            return Ok(StepOutcome::Redirect(response));
        };

        let id_param = id.to_string();
        let action = self
            .urls
            .url_for(&self.config.route_set().edit, &[("id", id_param.as_str())])?;
        let mut form = self.binder.bind(
            self.config.schema_name(),
            entity,
            FormOptions::new(action, Method::PUT),
        )?;

        if request.method() == Method::PUT {
            form.submit(request.form());
            if form.is_valid() {
                let entity = (self.config.persist_hook())(form.into_entity());
                self.repository.stage(&entity).await?;
                self.repository.commit().await?;
                tracing::debug!(
                    entity = self.config.entity_name(),
                    id = %id_param,
                    "updated record"
                );
                notices.success(self.config.crud_settings().notices.success.clone());
                let response = self.redirect(self.config.route_set().updated_or_index())?;
                return Ok(StepOutcome::Redirect(response));
            }
            notices.danger(self.config.crud_settings().notices.failure.clone());
        }

        let view = form.view();
        Ok(StepOutcome::Form {
            entity: form.into_entity(),
            form: view,
        })
    }

    /// View identifier for one of this controller's actions:
    /// `<module>/<entity>/<action>`.
    fn view_id(&self, action: &str) -> String {
        format!(
            "{}/{}/{action}",
            self.config.module_name(),
            self.config.entity_name()
        )
    }

    fn redirect(&self, route: &str) -> Result<Response, CrudError> {
        let url = self.urls.url_for(route, &[])?;
        Ok(redirect_to(&url))
    }
}
