use super::labels::{parse_column_template, parse_row_template};
use super::preprocessor::strip_comments;
use super::types::{Payload, RawEntry, Record};
use crate::error::{Result, TemplateError};
use tracing::{debug, info};

/// Strip annotations, parse the JSON array and validate every template.
///
/// Fails on the first bad record; nothing is returned for the rest.
pub fn load_records(text: &str) -> Result<Vec<Record>> {
    let cleaned = strip_comments(text);
    let entries: Vec<RawEntry> = serde_json::from_str(&cleaned)?;
    debug!(entries = entries.len(), "parsed materials document");

    let records = entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| to_record(index, entry))
        .collect::<Result<Vec<_>>>()?;

    info!(records = records.len(), "loaded materials");
    Ok(records)
}

/// Structural runs need `mass` on every record.
pub fn require_mass(records: &[Record]) -> Result<()> {
    match records.iter().find(|r| r.payload.mass.is_none()) {
        Some(record) => Err(TemplateError::Schema {
            index: record.source_index,
            field: "mass",
            value: String::new(),
            reason: "required in structural mode",
        }),
        None => Ok(()),
    }
}

fn to_record(index: usize, entry: RawEntry) -> Result<Record> {
    let row = parse_row_template(&entry.template.row).map_err(|reason| TemplateError::Schema {
        index,
        field: "template.row",
        value: entry.template.row.clone(),
        reason,
    })?;

    let column_raw = entry.template.column.to_template_string();
    let column = parse_column_template(&column_raw).map_err(|reason| TemplateError::Schema {
        index,
        field: "template.column",
        value: column_raw.clone(),
        reason,
    })?;

    Ok(Record {
        source_index: index,
        row_position: row.position,
        row_label: row.label.unwrap_or_default(),
        col_position: column.position,
        col_label: column.label.unwrap_or_default(),
        payload: Payload {
            color_key: entry.color_key,
            mass: entry.mass,
            strength: entry.strength,
            stiffness: entry.stiffness,
        },
    })
}
