//! crudkit: generic CRUD controllers for server-rendered axum applications
//!
//! One [`CrudController`](controller::CrudController), configured with an
//! entity type and a handful of identifiers and hooks, provides the complete
//! list/paginate/add/edit/details/remove flow over a single persisted entity
//! type. Persistence, form binding, pagination, view rendering and URL
//! generation stay where they belong — behind narrow collaborator traits the
//! host implements once.
//!
//! # Design Principles
//!
//! 1. **Configuration over subtyping**: one [`CrudConfig`](controller::CrudConfig)
//!    value per entity type instead of a controller subclass
//! 2. **Collaborators, not frameworks**: storage, forms, pagination,
//!    rendering and routing are traits with small contracts
//! 3. **Explicit notices**: handlers write into a per-request
//!    [`Notices`](notify::Notices) buffer instead of mutating session state
//! 4. **Recoverable by default**: missing records and failed validation
//!    become notices and redirects, never errors
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use crudkit::prelude::*;
//! use serde::Serialize;
//! use validator::{ValidationError, ValidationErrors};
//!
//! #[derive(Debug, Clone, Default, Serialize)]
//! struct Widget {
//!     id: Option<String>,
//!     name: String,
//! }
//!
//! impl CrudEntity for Widget {
//!     type Id = String;
//!
//!     fn id(&self) -> Option<&String> {
//!         self.id.as_ref()
//!     }
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> anyhow::Result<()> {
//! let repository = Arc::new(InMemoryRepository::<Widget>::new());
//! let binder = Arc::new(ClosureBinder::new(|widget: &mut Widget, data: &FormData| {
//!     match data.get("name") {
//!         Some(name) if !name.is_empty() => {
//!             widget.name = name.clone();
//!             Ok(())
//!         }
//!         _ => {
//!             let mut errors = ValidationErrors::new();
//!             errors.add("name", ValidationError::new("required"));
//!             Err(errors)
//!         }
//!     }
//! }));
//! let urls = Arc::new(StaticUrls::new()
//!     .route("index", "/widgets")
//!     .route("add", "/widgets/add")
//!     .route("edit", "/widgets/{id}/edit"));
//!
//! let controller = CrudController::new(
//!     CrudConfig::<Widget>::new("Widget", "Catalog", "widget")
//!         .factory(Widget::default),
//!     repository.clone(),
//!     repository,
//!     binder,
//!     Arc::new(JsonRenderer),
//!     urls,
//! );
//!
//! let mut notices = Notices::new();
//! let response = controller.index(&CrudRequest::get(), None, &mut notices).await?;
//! assert_eq!(response.status(), http::StatusCode::OK);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod controller;
pub mod entity;
pub mod error;
pub mod forms;
pub mod listing;
pub mod notify;
pub mod observability;
pub mod query;
pub mod render;
pub mod repository;
pub mod routes;
pub mod testing;
pub mod util;

pub mod prelude {
    //! Convenience re-exports for common types and traits
    //!
    //! # Examples
    //!
    //! ```rust
    //! use crudkit::prelude::*;
    //! ```

    // The controller and its configuration
    pub use crate::controller::{CrudConfig, CrudController, CrudRequest, StepOutcome};

    // Entity contract
    pub use crate::entity::CrudEntity;

    // Collaborator contracts
    pub use crate::forms::{BoundForm, FormBinder, FormData, FormOptions, FormView};
    pub use crate::render::{ViewData, ViewRenderer};
    pub use crate::repository::{Paginator, Repository};
    pub use crate::routes::{RouteSet, UrlResolver};

    // Listing types
    pub use crate::listing::{ListQuery, Page, SortOrder};
    pub use crate::query::EntityQuery;

    // Notices
    pub use crate::notify::{Notice, NoticeLevel, Notices};

    // Settings
    pub use crate::config::{CrudSettings, NoticeText};

    // Error type
    pub use crate::error::CrudError;

    // In-memory collaborators
    pub use crate::testing::{ClosureBinder, InMemoryRepository, JsonRenderer, StaticUrls};

    // Re-export key dependencies
    pub use axum;
    pub use validator;
}
