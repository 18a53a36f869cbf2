use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::model::{DrillHole, GeomechInterval, Project};
use crate::rules::{BatchReport, Validator};
use crate::state::{DEFAULT_LOCK_TIMEOUT_MS, SaveOutcome, SharedLockGuard, atomic_write_with_lock};
use crate::{GeomechGuardError, Result};

use super::memory::{MemoryStore, RecordStore};

const WORKSPACE_VERSION: u32 = 1;

/// On-disk shape of a workspace.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WorkspaceFile {
    #[serde(default)]
    version: u32,
    #[serde(default)]
    projects: Vec<Project>,
    #[serde(default)]
    drill_holes: Vec<DrillHole>,
    #[serde(default)]
    geomech_data: Vec<GeomechInterval>,
}

/// Projects, drill holes and their geomech records.
#[derive(Debug, Clone, Default)]
pub struct Workspace {
    pub projects: MemoryStore<Project>,
    pub drill_holes: MemoryStore<DrillHole>,
    pub intervals: MemoryStore<GeomechInterval>,
}

impl Workspace {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a workspace file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| GeomechGuardError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let _lock_guard =
            SharedLockGuard::try_acquire(&file, DEFAULT_LOCK_TIMEOUT_MS, "workspace", path);
        let data: WorkspaceFile = serde_json::from_reader(BufReader::new(&file))?;
        if data.version > WORKSPACE_VERSION {
            return Err(GeomechGuardError::Config(format!(
                "workspace version {} is newer than supported version {WORKSPACE_VERSION}",
                data.version
            )));
        }
        tracing::debug!(
            path = %path.display(),
            projects = data.projects.len(),
            holes = data.drill_holes.len(),
            records = data.geomech_data.len(),
            "workspace loaded"
        );
        Ok(Self {
            projects: MemoryStore::from_saved(data.projects),
            drill_holes: MemoryStore::from_saved(data.drill_holes),
            intervals: MemoryStore::from_saved(data.geomech_data),
        })
    }

    /// Write the workspace file, then accept pending changes as saved.
    ///
    /// Blank records are left out of the file. Pending changes stay pending
    /// unless the write succeeds.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    #[must_use = "check if save was skipped due to lock timeout"]
    pub fn save(&mut self, path: &Path) -> Result<SaveOutcome> {
        let data = WorkspaceFile {
            version: WORKSPACE_VERSION,
            projects: self.projects.all().into_iter().cloned().collect(),
            drill_holes: self.drill_holes.all().into_iter().cloned().collect(),
            geomech_data: self
                .intervals
                .all()
                .into_iter()
                .filter(|r| !r.is_blank())
                .cloned()
                .collect(),
        };
        let json = serde_json::to_string_pretty(&data)?;
        let outcome = atomic_write_with_lock(path, json.as_bytes(), "workspace")?;
        if outcome == SaveOutcome::Saved {
            self.save_without_validation();
        }
        Ok(outcome)
    }

    /// Accept all modified records as saved, valid or not. Blank records are dropped.
    ///
    /// Returns the number of geomech records persisted.
    pub fn save_without_validation(&mut self) -> usize {
        let blank = self.intervals.delete_where(GeomechInterval::is_blank);
        let persisted = self.intervals.modified().len();
        self.projects.mark_clean();
        self.drill_holes.mark_clean();
        self.intervals.mark_clean();
        tracing::debug!(persisted, dropped = blank.len(), "geomech records saved");
        persisted
    }

    pub fn discard_changes(&mut self) {
        self.projects.discard();
        self.drill_holes.discard();
        self.intervals.discard();
    }

    /// True when leaving now would lose edits.
    #[must_use]
    pub fn has_unsaved_changes(&self) -> bool {
        self.projects.has_changes() || self.drill_holes.has_changes() || self.intervals.has_changes()
    }

    /// # Errors
    /// Returns `Presence` if the project has no mine property name.
    pub fn create_project(&mut self, project: Project) -> Result<String> {
        project.validate_presence()?;
        Ok(self.projects.create(project))
    }

    /// # Errors
    /// Returns `NotFound` for an unknown project, or `Presence` for missing hole fields.
    pub fn create_drill_hole(&mut self, project_id: &str, mut hole: DrillHole) -> Result<String> {
        self.project(project_id)?;
        hole.validate_presence()?;
        hole.project_id = Some(project_id.to_string());
        Ok(self.drill_holes.create(hole))
    }

    /// # Errors
    /// Returns `NotFound` if no project has `id`.
    pub fn project(&self, id: &str) -> Result<&Project> {
        self.projects.read(id).ok_or_else(|| GeomechGuardError::NotFound {
            kind: "Project",
            id: id.to_string(),
        })
    }

    /// # Errors
    /// Returns `NotFound` if no drill hole has `id`.
    pub fn drill_hole(&self, id: &str) -> Result<&DrillHole> {
        self.drill_holes.read(id).ok_or_else(|| GeomechGuardError::NotFound {
            kind: "Drill hole",
            id: id.to_string(),
        })
    }

    /// The project owning a drill hole.
    ///
    /// # Errors
    /// Returns `NotFound` if the hole or its project is missing.
    pub fn project_for_hole(&self, hole_id: &str) -> Result<&Project> {
        let hole = self.drill_hole(hole_id)?;
        let project_id = hole.project_id.as_deref().unwrap_or_default();
        self.project(project_id)
    }

    #[must_use]
    pub fn find_project_by_name(&self, name: &str) -> Option<&Project> {
        self.projects
            .all()
            .into_iter()
            .find(|p| p.mine_property_name == name)
    }

    #[must_use]
    pub fn find_hole(&self, project_id: &str, name: &str) -> Option<&DrillHole> {
        self.drill_holes
            .all()
            .into_iter()
            .find(|h| h.project_id.as_deref() == Some(project_id) && h.name == name)
    }

    /// Find a hole by id, or by name when the name is unique.
    #[must_use]
    pub fn resolve_hole(&self, key: &str) -> Option<&DrillHole> {
        if let Some(hole) = self.drill_holes.read(key) {
            return Some(hole);
        }
        let mut matches = self.drill_holes.all().into_iter().filter(|h| h.name == key);
        let first = matches.next()?;
        matches.next().is_none().then_some(first)
    }

    /// The hole's geomech records in row order, each carrying the project context.
    ///
    /// # Errors
    /// Returns `NotFound` if the hole or its project is missing.
    pub fn working_set(&self, hole_id: &str) -> Result<Vec<GeomechInterval>> {
        let context = self.project_for_hole(hole_id)?.context();
        Ok(self
            .intervals
            .all()
            .into_iter()
            .filter(|r| r.drill_hole_id.as_deref() == Some(hole_id))
            .map(|r| {
                let mut record = r.clone();
                record.assign_context(hole_id, &context);
                record
            })
            .collect())
    }

    /// Append a row to a hole's working set.
    ///
    /// A row without a core size inherits the previous row's. A blank row is
    /// not counted as modified until it is edited.
    ///
    /// # Errors
    /// Returns `NotFound` if the hole or its project is missing.
    pub fn add_interval(&mut self, hole_id: &str, mut record: GeomechInterval) -> Result<String> {
        let context = self.project_for_hole(hole_id)?.context();
        if record.core_size.is_none() {
            record.core_size = self
                .intervals
                .all()
                .into_iter()
                .rev()
                .find(|r| r.drill_hole_id.as_deref() == Some(hole_id))
                .and_then(|r| r.core_size.clone());
        }
        record.assign_context(hole_id, &context);
        if record.is_blank() {
            Ok(self.intervals.create_phantom(record))
        } else {
            Ok(self.intervals.create(record))
        }
    }

    /// Keep one blank row at the end of the hole's working set.
    ///
    /// # Errors
    /// Returns `NotFound` if the hole or its project is missing.
    pub fn grow_working_set(&mut self, hole_id: &str) -> Result<Option<String>> {
        let ends_blank = self
            .working_set(hole_id)?
            .last()
            .is_some_and(GeomechInterval::is_blank);
        if ends_blank {
            return Ok(None);
        }
        self.add_interval(hole_id, GeomechInterval::new()).map(Some)
    }

    /// # Errors
    /// Returns `NotFound` if no geomech record has `id`.
    pub fn update_interval(&mut self, id: &str, record: GeomechInterval) -> Result<()> {
        self.intervals.update(id, record)
    }

    /// Validate a hole's working set against its project context.
    ///
    /// # Errors
    /// Returns `NotFound` if the hole or its project is missing.
    pub fn validate_hole(&self, hole_id: &str, validator: &Validator) -> Result<BatchReport> {
        let context = self.project_for_hole(hole_id)?.context();
        let records = self.working_set(hole_id)?;
        Ok(validator.validate_batch(&records, &context))
    }

    /// Delete a hole and its geomech records. Returns the number of records removed.
    ///
    /// # Errors
    /// Returns `NotFound` if no drill hole has `id`.
    pub fn delete_drill_hole(&mut self, id: &str) -> Result<usize> {
        self.drill_hole(id)?;
        self.drill_holes.delete(id);
        let removed = self
            .intervals
            .delete_where(|r| r.drill_hole_id.as_deref() == Some(id));
        tracing::debug!(hole = id, records = removed.len(), "drill hole deleted");
        Ok(removed.len())
    }

    /// Delete a project with its holes and their records.
    ///
    /// # Errors
    /// Returns `NotFound` if no project has `id`.
    pub fn delete_project(&mut self, id: &str) -> Result<()> {
        self.project(id)?;
        let holes = self
            .drill_holes
            .delete_where(|h| h.project_id.as_deref() == Some(id));
        self.intervals.delete_where(|r| {
            r.drill_hole_id
                .as_deref()
                .is_some_and(|h| holes.iter().any(|d| d == h))
        });
        self.projects.delete(id);
        Ok(())
    }

    /// Replace all geomech records of a hole.
    ///
    /// # Errors
    /// Returns `NotFound` if the hole or its project is missing.
    pub fn replace_hole_data(&mut self, hole_id: &str, records: Vec<GeomechInterval>) -> Result<usize> {
        let context = self.project_for_hole(hole_id)?.context();
        self.intervals
            .delete_where(|r| r.drill_hole_id.as_deref() == Some(hole_id));
        let count = records.len();
        for mut record in records {
            record.id = None;
            record.assign_context(hole_id, &context);
            self.intervals.create(record);
        }
        Ok(count)
    }
}

#[cfg(test)]
#[path = "workspace_tests.rs"]
mod tests;
