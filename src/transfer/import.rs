use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::ImportError;
use crate::model::{DrillHole, Project};
use crate::store::Workspace;
use crate::Result;

use super::pack::HolePack;

/// Where an imported hole ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportOutcome {
    pub project_id: String,
    pub hole_id: String,
    pub project_name: String,
    pub hole_name: String,
    pub records: usize,
    pub created_project: bool,
    pub created_hole: bool,
}

impl fmt::Display for ImportOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Drill Hole \"{}\" in project \"{}\" successfully imported.",
            self.hole_name, self.project_name
        )
    }
}

const PROJECT_IGNORED: &[&str] = &["id"];
const HOLE_IGNORED: &[&str] = &["id", "project", "projectID", "geomechData"];

fn as_object<T: Serialize>(value: &T) -> Result<Map<String, Value>> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        _ => Ok(Map::new()),
    }
}

/// Names of scalar fields whose values differ. Array fields are not compared.
fn scalar_diff(
    ours: &Map<String, Value>,
    theirs: &Map<String, Value>,
    ignored: &[&str],
) -> Vec<String> {
    ours.keys()
        .chain(theirs.keys())
        .filter(|key| !ignored.contains(&key.as_str()))
        .filter(|key| {
            let (a, b) = (ours.get(*key), theirs.get(*key));
            let is_array = a.is_some_and(Value::is_array) || b.is_some_and(Value::is_array);
            !is_array && a != b
        })
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn project_diff(ours: &Project, theirs: &Project) -> Result<(Vec<String>, bool)> {
    let fields = scalar_diff(&as_object(ours)?, &as_object(theirs)?, PROJECT_IGNORED);
    let ours_template = ours.gm_list_template.as_deref().unwrap_or_default();
    let theirs_template = theirs.gm_list_template.as_deref().unwrap_or_default();
    Ok((fields, ours_template != theirs_template))
}

fn hole_diff(ours: &DrillHole, theirs: &DrillHole) -> Result<Vec<String>> {
    Ok(scalar_diff(&as_object(ours)?, &as_object(theirs)?, HOLE_IGNORED))
}

/// Merge an exported hole into the workspace.
///
/// The project is matched by name and the hole by name within it. New ones
/// are created; a matching hole has its geomech records replaced. Ids in the
/// pack are discarded.
///
/// # Errors
/// Returns `ImportError::ProjectMismatch` or `ImportError::HoleMismatch` when
/// the existing project or hole differs from the pack, or `Presence` when the
/// pack lacks required fields.
pub fn import_pack(ws: &mut Workspace, pack: HolePack) -> Result<ImportOutcome> {
    let HolePack {
        mut hole,
        mut project,
        geomech_data,
    } = pack;
    project.id = None;
    hole.id = None;
    hole.project_id = None;

    let existing = ws
        .find_project_by_name(&project.mine_property_name)
        .cloned();

    let (project_id, created_project) = match existing {
        None => (ws.create_project(project.clone())?, true),
        Some(local) => {
            let (fields, template_differs) = project_diff(&local, &project)?;
            if !fields.is_empty() || template_differs {
                return Err(ImportError::ProjectMismatch {
                    name: local.mine_property_name,
                    fields,
                    template_differs,
                }
                .into());
            }
            (local.id.unwrap_or_default(), false)
        }
    };

    let (hole_id, created_hole) = match ws.find_hole(&project_id, &hole.name).cloned() {
        None => (ws.create_drill_hole(&project_id, hole.clone())?, true),
        Some(local) => {
            let fields = hole_diff(&local, &hole)?;
            if !fields.is_empty() {
                return Err(ImportError::HoleMismatch {
                    name: local.name,
                    fields,
                }
                .into());
            }
            tracing::info!(hole = %local.name, "overwriting geomech data");
            (local.id.unwrap_or_default(), false)
        }
    };

    let records = ws.replace_hole_data(&hole_id, geomech_data)?;
    let outcome = ImportOutcome {
        project_id,
        hole_id,
        project_name: project.mine_property_name,
        hole_name: hole.name,
        records,
        created_project,
        created_hole,
    };
    tracing::info!(
        project = %outcome.project_name,
        hole = %outcome.hole_name,
        records,
        "import successful"
    );
    Ok(outcome)
}

#[cfg(test)]
#[path = "import_tests.rs"]
mod tests;
