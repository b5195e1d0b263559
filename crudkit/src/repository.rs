//! Storage and pagination collaborator contracts
//!
//! The CRUD core issues at most one stage and one commit per mutating
//! operation and expects the pair to be atomic with respect to concurrent
//! readers. Connection pooling, caching and locking are entirely the
//! implementor's concern; the core carries no timeouts or retries and lets
//! backend failures propagate as [`CrudError::Storage`].

use async_trait::async_trait;

use crate::entity::CrudEntity;
use crate::error::CrudError;
use crate::listing::Page;
use crate::query::EntityQuery;

/// Storage collaborator for a single entity type.
///
/// `stage` records a pending insert or update; `commit` makes all staged
/// changes durable. Implementations must make the `stage` + `commit` pair
/// atomic — a reader must never observe a half-persisted entity.
#[async_trait]
pub trait Repository<E: CrudEntity>: Send + Sync {
    /// Fetch one entity by identifier, or `None` when absent.
    async fn find_by_id(&self, id: &E::Id) -> Result<Option<E>, CrudError>;

    /// Record a pending insert or update of `entity`.
    async fn stage(&self, entity: &E) -> Result<(), CrudError>;

    /// Make all staged changes durable.
    async fn commit(&self) -> Result<(), CrudError>;

    /// Delete `entity`. Either the entity is fully removed or storage is
    /// left untouched; no partial mutation.
    async fn delete(&self, entity: &E) -> Result<(), CrudError>;
}

/// Query/pagination collaborator.
///
/// Given a query descriptor and a page window, returns one page of entities
/// along with the total-count metadata needed to render pagination controls.
#[async_trait]
pub trait Paginator<E: CrudEntity>: Send + Sync {
    /// Run `query` and return the 1-based `page` of at most `limit` entities.
    async fn paginate(
        &self,
        query: &EntityQuery,
        page: u64,
        limit: u64,
    ) -> Result<Page<E>, CrudError>;
}
