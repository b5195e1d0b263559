//! Map-backed storage and pagination collaborator

use std::cmp::Ordering;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;

use crate::entity::CrudEntity;
use crate::error::CrudError;
use crate::listing::{Page, SortOrder};
use crate::query::EntityQuery;
use crate::repository::{Paginator, Repository};

/// In-memory [`Repository`] and [`Paginator`].
///
/// Keeps an explicit staging area so the stage/commit discipline is
/// observable: staged entities are invisible to readers until [`commit`]
/// moves them into the record set in one step, replacing any record with the
/// same identifier. Pagination sorts on the serialized field named by the
/// query descriptor (numbers numerically, everything else lexically).
///
/// [`commit`]: Repository::commit
#[derive(Default)]
pub struct InMemoryRepository<E> {
    records: Mutex<Vec<E>>,
    staged: Mutex<Vec<E>>,
}

impl<E> InMemoryRepository<E>
where
    E: CrudEntity + Clone,
    E::Id: PartialEq,
{
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            staged: Mutex::new(Vec::new()),
        }
    }

    /// Create a store pre-populated with `records`.
    #[must_use]
    pub fn with_records(records: Vec<E>) -> Self {
        Self {
            records: Mutex::new(records),
            staged: Mutex::new(Vec::new()),
        }
    }

    /// Number of committed records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    /// Whether the store holds no committed records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    /// Number of staged, not yet committed entities.
    #[must_use]
    pub fn staged_len(&self) -> usize {
        self.staged.lock().len()
    }

    /// Whether a committed record with `id` exists.
    #[must_use]
    pub fn contains(&self, id: &E::Id) -> bool {
        self.records.lock().iter().any(|e| e.id() == Some(id))
    }

    /// Snapshot of the committed records.
    #[must_use]
    pub fn snapshot(&self) -> Vec<E> {
        self.records.lock().clone()
    }
}

#[async_trait]
impl<E> Repository<E> for InMemoryRepository<E>
where
    E: CrudEntity + Clone,
    E::Id: PartialEq,
{
    async fn find_by_id(&self, id: &E::Id) -> Result<Option<E>, CrudError> {
        Ok(self
            .records
            .lock()
            .iter()
            .find(|e| e.id() == Some(id))
            .cloned())
    }

    async fn stage(&self, entity: &E) -> Result<(), CrudError> {
        self.staged.lock().push(entity.clone());
        Ok(())
    }

    async fn commit(&self) -> Result<(), CrudError> {
        // Both locks held for the whole swap: readers see either none or all
        // of the staged changes.
        let mut staged = self.staged.lock();
        let mut records = self.records.lock();
        for entity in staged.drain(..) {
            let existing = entity
                .id()
                .and_then(|id| records.iter().position(|e| e.id() == Some(id)));
            match existing {
                Some(index) => records[index] = entity,
                None => records.push(entity),
            }
        }
        Ok(())
    }

    async fn delete(&self, entity: &E) -> Result<(), CrudError> {
        if let Some(id) = entity.id() {
            self.records.lock().retain(|e| e.id() != Some(id));
        }
        Ok(())
    }
}

#[async_trait]
impl<E> Paginator<E> for InMemoryRepository<E>
where
    E: CrudEntity + Clone,
    E::Id: PartialEq,
{
    async fn paginate(
        &self,
        query: &EntityQuery,
        page: u64,
        limit: u64,
    ) -> Result<Page<E>, CrudError> {
        let mut items = self.records.lock().clone();
        if let Some((field, order)) = query.order() {
            let mut keyed: Vec<(Value, E)> = items
                .into_iter()
                .map(|e| (field_value(&e, field), e))
                .collect();
            keyed.sort_by(|(a, _), (b, _)| compare_values(a, b));
            if order == SortOrder::Desc {
                keyed.reverse();
            }
            items = keyed.into_iter().map(|(_, e)| e).collect();
        }

        let total = items.len() as u64;
        let offset = usize::try_from((page.max(1) - 1).saturating_mul(limit))
            .map_err(|_| CrudError::Config("page window out of range".into()))?;
        let window = items
            .into_iter()
            .skip(offset)
            .take(usize::try_from(limit).unwrap_or(usize::MAX))
            .collect();
        Ok(Page::new(window, page, limit, total))
    }
}

fn field_value<E: CrudEntity>(entity: &E, field: &str) -> Value {
    serde_json::to_value(entity)
        .ok()
        .and_then(|value| value.get(field).cloned())
        .unwrap_or(Value::Null)
}

fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => lexical(a).cmp(&lexical(b)),
    }
}

fn lexical(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
