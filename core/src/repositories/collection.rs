//! Ordered entity list shared by the store implementations

use serde_json::Value;
use uuid::Uuid;

use crate::domain::entities::Entity;
use crate::errors::{DomainResult, Fault};

/// An insertion-ordered list of entities with uniqueness checks.
///
/// Stores wrap a `Collection` in their own lock and decide how it is
/// persisted; the lookup and constraint logic lives here.
#[derive(Debug, Clone)]
pub struct Collection<E> {
    items: Vec<E>,
}

impl<E> Default for Collection<E> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<E: Entity> Collection<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<E>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[E] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Option<&E> {
        self.items.iter().find(|e| e.id() == id)
    }

    pub fn find_one_by(&self, field: &str, value: &Value) -> Option<&E> {
        self.items
            .iter()
            .find(|e| field_value(*e, field).as_ref() == Some(value))
    }

    /// Append an entity after checking its id and unique fields
    pub fn insert(&mut self, entity: E) -> DomainResult<()> {
        if self.get(entity.id()).is_some() {
            return Err(Fault::duplicate("id", Value::String(entity.id().to_string())));
        }
        self.ensure_unique(&entity)?;
        self.items.push(entity);
        Ok(())
    }

    /// Replace the entity with the same id; `Ok(false)` when none exists
    pub fn replace(&mut self, entity: E) -> DomainResult<bool> {
        let Some(index) = self.position(entity.id()) else {
            return Ok(false);
        };
        self.ensure_unique(&entity)?;
        self.items[index] = entity;
        Ok(true)
    }

    pub fn remove(&mut self, id: Uuid) -> bool {
        match self.position(id) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    fn position(&self, id: Uuid) -> Option<usize> {
        self.items.iter().position(|e| e.id() == id)
    }

    /// Reports the first unique field another entity already holds
    fn ensure_unique(&self, entity: &E) -> DomainResult<()> {
        for (field, value) in entity.unique_fields() {
            let taken = self
                .items
                .iter()
                .filter(|other| other.id() != entity.id())
                .flat_map(|other| other.unique_fields())
                .any(|(other_field, other_value)| other_field == field && other_value == value);
            if taken {
                return Err(Fault::duplicate(field, value));
            }
        }
        Ok(())
    }
}

fn field_value<E: Entity>(entity: &E, field: &str) -> Option<Value> {
    match serde_json::to_value(entity) {
        Ok(Value::Object(mut map)) => map.remove(field),
        _ => None,
    }
}
