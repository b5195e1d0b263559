//! Closure-driven form binder

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::Value;
use validator::ValidationErrors;

use crate::entity::CrudEntity;
use crate::error::CrudError;
use crate::forms::{BoundForm, FormBinder, FormData, FormOptions, FormView};

/// Closure applying a submitted payload onto an entity, returning the
/// validation errors when the payload is rejected.
pub type ApplyForm<E> = Arc<dyn Fn(&mut E, &FormData) -> Result<(), ValidationErrors> + Send + Sync>;

/// A [`FormBinder`] driven by a single host closure.
///
/// The closure receives the bound entity and the submitted payload; it
/// applies the values and reports validation errors in `validator`'s error
/// shape. The form view seeds its values from the entity's serialized scalar
/// fields, so an un-submitted edit form already shows the current record.
pub struct ClosureBinder<E> {
    apply: ApplyForm<E>,
}

impl<E> ClosureBinder<E> {
    /// Create a binder from `apply`.
    pub fn new(
        apply: impl Fn(&mut E, &FormData) -> Result<(), ValidationErrors> + Send + Sync + 'static,
    ) -> Self {
        Self {
            apply: Arc::new(apply),
        }
    }
}

impl<E: CrudEntity> FormBinder<E> for ClosureBinder<E> {
    fn bind(
        &self,
        _schema: &str,
        entity: E,
        options: FormOptions,
    ) -> Result<Box<dyn BoundForm<E>>, CrudError> {
        let values = seed_values(&entity);
        Ok(Box::new(ClosureForm {
            entity,
            options,
            values,
            errors: ValidationErrors::new(),
            submitted: false,
            apply: Arc::clone(&self.apply),
        }))
    }
}

struct ClosureForm<E> {
    entity: E,
    options: FormOptions,
    values: BTreeMap<String, String>,
    errors: ValidationErrors,
    submitted: bool,
    apply: ApplyForm<E>,
}

impl<E: CrudEntity> BoundForm<E> for ClosureForm<E> {
    fn submit(&mut self, data: &FormData) {
        // Submitted values overlay the seeded ones so a re-rendered form
        // keeps exactly what the user typed.
        for (key, value) in data {
            self.values.insert(key.clone(), value.clone());
        }
        self.errors = match (self.apply)(&mut self.entity, data) {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => errors,
        };
        self.submitted = true;
    }

    fn is_valid(&self) -> bool {
        self.submitted && self.errors.is_empty()
    }

    fn view(&self) -> FormView {
        FormView {
            action: self.options.action.clone(),
            method: self.options.method.to_string(),
            values: self.values.clone(),
            errors: self.errors.clone(),
        }
    }

    fn into_entity(self: Box<Self>) -> E {
        self.entity
    }
}

fn seed_values<E: CrudEntity>(entity: &E) -> BTreeMap<String, String> {
    let mut values = BTreeMap::new();
    if let Ok(Value::Object(map)) = serde_json::to_value(entity) {
        for (key, value) in map {
            match value {
                Value::Null => {}
                Value::String(s) => {
                    values.insert(key, s);
                }
                other => {
                    values.insert(key, other.to_string());
                }
            }
        }
    }
    values
}
