use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::model::{DrillHole, GeomechInterval, canonical_field_sort, public_fields};
use crate::store::{RecordStore, Workspace};
use crate::Result;

use super::pack::HolePack;

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_]").expect("Invalid regex"));

/// Exportable formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

/// Saved, non-blank records of a hole in row order.
fn hole_records(ws: &Workspace, hole_id: &str) -> Vec<GeomechInterval> {
    ws.intervals
        .all()
        .into_iter()
        .filter(|r| r.drill_hole_id.as_deref() == Some(hole_id) && !r.is_blank())
        .cloned()
        .collect()
}

/// Assemble the export pack for one hole.
///
/// # Errors
/// Returns `NotFound` if the hole or its project is missing.
pub fn build_pack(ws: &Workspace, hole_id: &str) -> Result<HolePack> {
    let hole = ws.drill_hole(hole_id)?.clone();
    let project = ws.project_for_hole(hole_id)?.clone();
    Ok(HolePack {
        hole,
        project,
        geomech_data: hole_records(ws, hole_id),
    })
}

/// # Errors
/// Returns `NotFound` if the hole or its project is missing.
pub fn export_json(ws: &Workspace, hole_id: &str) -> Result<String> {
    let pack = build_pack(ws, hole_id)?;
    tracing::info!(hole = %pack.hole.name, records = pack.geomech_data.len(), "exported hole as JSON");
    pack.to_json()
}

/// Export a hole's records as CSV using the project's column template.
///
/// # Errors
/// Returns `NotFound` if the hole or its project is missing.
pub fn export_csv(ws: &Workspace, hole_id: &str) -> Result<String> {
    let project = ws.project_for_hole(hole_id)?;
    let template = project
        .gm_list_template
        .as_deref()
        .map_or_else(public_fields, canonical_field_sort);

    let header: Vec<String> = template
        .iter()
        .map(|name| csv_cell(&project.column_header(name)))
        .collect();
    let mut lines = vec![header.join(",")];

    let records = hole_records(ws, hole_id);
    for record in &records {
        let cells = record.field_slice(&template)?;
        let row: Vec<String> = cells.iter().map(|v| csv_cell(&v.to_cell())).collect();
        lines.push(row.join(","));
    }
    tracing::info!(hole = hole_id, records = records.len(), columns = template.len(), "exported hole as CSV");
    Ok(lines.join("\n"))
}

/// Quote a cell if it contains a delimiter, quote or line break.
fn csv_cell(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// File name for an export: the hole name made filesystem-safe, an optional date suffix, and the extension.
#[must_use]
pub fn export_file_name(hole: &DrillHole, ext: &str, date: Option<NaiveDate>) -> String {
    let stem = NON_WORD.replace_all(&hole.name, "_");
    match date {
        Some(date) => format!("{stem}-{}.{ext}", date.format("%Y-%m-%d")),
        None => format!("{stem}.{ext}"),
    }
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod tests;
