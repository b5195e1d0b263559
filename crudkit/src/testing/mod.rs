//! In-memory collaborator implementations
//!
//! Everything a [`CrudController`](crate::controller::CrudController) needs to
//! run end to end without a database, a form framework or a template engine:
//!
//! - [`InMemoryRepository`]: map-backed storage with an explicit staging area,
//!   doubling as the pagination collaborator
//! - [`ClosureBinder`]: a form binder driven by a host closure
//! - [`JsonRenderer`]: renders view data as a JSON response for assertions
//! - [`StaticUrls`]: pattern-based URL resolution
//!
//! These exist primarily for tests, but they are complete implementations of
//! the collaborator contracts and double as reference code for writing real
//! ones.

mod forms;
mod memory;
mod views;

pub use forms::{ApplyForm, ClosureBinder};
pub use memory::InMemoryRepository;
pub use views::{JsonRenderer, StaticUrls};
