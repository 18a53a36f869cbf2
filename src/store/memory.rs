use indexmap::{IndexMap, IndexSet};
use uuid::Uuid;

use crate::{GeomechGuardError, Result};

use super::record::Record;

/// CRUD access to one kind of record, with change tracking.
pub trait RecordStore<T: Record> {
    /// Insert a record and mark it modified. Assigns an id if it has none.
    fn create(&mut self, record: T) -> String;

    fn read(&self, id: &str) -> Option<&T>;

    /// Replace a record and mark it modified.
    ///
    /// # Errors
    /// Returns `NotFound` if no record has `id`.
    fn update(&mut self, id: &str, record: T) -> Result<()>;

    fn delete(&mut self, id: &str) -> Option<T>;

    /// Accept the current state as saved.
    fn mark_clean(&mut self);

    fn is_dirty(&self, id: &str) -> bool;

    /// Records created or updated since the last [`mark_clean`](Self::mark_clean).
    fn modified(&self) -> Vec<&T>;

    /// Every record in insertion order.
    fn all(&self) -> Vec<&T>;
}

/// Insertion-ordered in-memory store.
///
/// Keeps a copy of the last saved state so unsaved edits can be discarded.
#[derive(Debug, Clone)]
pub struct MemoryStore<T> {
    records: IndexMap<String, T>,
    committed: IndexMap<String, T>,
    dirty: IndexSet<String>,
    removed: Vec<String>,
}

impl<T> Default for MemoryStore<T> {
    fn default() -> Self {
        Self {
            records: IndexMap::new(),
            committed: IndexMap::new(),
            dirty: IndexSet::new(),
            removed: Vec::new(),
        }
    }
}

impl<T: Record> MemoryStore<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a clean store from saved records. Records without an id get one.
    #[must_use]
    pub fn from_saved(records: Vec<T>) -> Self {
        let mut store = Self::new();
        for mut record in records {
            let id = ensure_id(&mut record);
            store.records.insert(id, record);
        }
        store.committed = store.records.clone();
        store
    }

    /// Insert without marking the record modified, like a freshly grown grid row.
    pub fn create_phantom(&mut self, mut record: T) -> String {
        let id = ensure_id(&mut record);
        self.records.insert(id.clone(), record);
        id
    }

    /// Drop every change since the last save.
    pub fn discard(&mut self) {
        self.records = self.committed.clone();
        self.dirty.clear();
        self.removed.clear();
    }

    #[must_use]
    pub fn has_changes(&self) -> bool {
        !self.dirty.is_empty() || !self.removed.is_empty()
    }

    /// Ids deleted since the last save that had been saved before.
    #[must_use]
    pub fn removed(&self) -> &[String] {
        &self.removed
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.records.iter().map(|(id, r)| (id.as_str(), r))
    }

    /// Delete every record matching `pred`, returning the deleted ids.
    pub fn delete_where(&mut self, pred: impl Fn(&T) -> bool) -> Vec<String> {
        let ids: Vec<String> = self
            .records
            .iter()
            .filter(|(_, r)| pred(r))
            .map(|(id, _)| id.clone())
            .collect();
        for id in &ids {
            self.delete(id);
        }
        ids
    }
}

fn ensure_id<T: Record>(record: &mut T) -> String {
    if let Some(id) = record.id().filter(|id| !id.is_empty()) {
        return id.to_string();
    }
    let id = Uuid::new_v4().to_string();
    record.set_id(id.clone());
    id
}

impl<T: Record> RecordStore<T> for MemoryStore<T> {
    fn create(&mut self, record: T) -> String {
        let id = self.create_phantom(record);
        self.dirty.insert(id.clone());
        id
    }

    fn read(&self, id: &str) -> Option<&T> {
        self.records.get(id)
    }

    fn update(&mut self, id: &str, mut record: T) -> Result<()> {
        let slot = self
            .records
            .get_mut(id)
            .ok_or_else(|| GeomechGuardError::NotFound {
                kind: T::KIND,
                id: id.to_string(),
            })?;
        record.set_id(id.to_string());
        *slot = record;
        self.dirty.insert(id.to_string());
        Ok(())
    }

    fn delete(&mut self, id: &str) -> Option<T> {
        let record = self.records.shift_remove(id)?;
        self.dirty.shift_remove(id);
        if self.committed.contains_key(id) {
            self.removed.push(id.to_string());
        }
        Some(record)
    }

    fn mark_clean(&mut self) {
        self.committed = self.records.clone();
        self.dirty.clear();
        self.removed.clear();
    }

    fn is_dirty(&self, id: &str) -> bool {
        self.dirty.contains(id)
    }

    fn modified(&self) -> Vec<&T> {
        self.records
            .iter()
            .filter(|(id, _)| self.dirty.contains(id.as_str()))
            .map(|(_, r)| r)
            .collect()
    }

    fn all(&self) -> Vec<&T> {
        self.records.values().collect()
    }
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod tests;
