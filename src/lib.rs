//! Render a sparse, label-grouped list of material swatches as a dense
//! HTML grid.

pub mod config;
pub mod error;
pub mod grid;
pub mod logging;
pub mod parser;
pub mod render;

use config::{Mode, RenderConfig, USAGE};
use error::{Result, TemplateError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Validate `<input> s|e` (program name already removed).
pub fn parse_args(args: &[String]) -> Result<(PathBuf, Mode)> {
    match args {
        [input, mode] => {
            let mode = mode
                .parse::<Mode>()
                .map_err(|_| TemplateError::usage(USAGE))?;
            Ok((PathBuf::from(input), mode))
        }
        _ => Err(TemplateError::usage(USAGE)),
    }
}

/// Run the whole pipeline over already-read text.
pub fn render_from_str(text: &str, config: &RenderConfig) -> Result<String> {
    let records = parser::load_records(text)?;
    if config.mode.is_structural() {
        parser::require_mass(&records)?;
    }
    let grid = grid::build_grid(&records, config.max_row_width)?;
    info!(rows = grid.rows.len(), mode = %config.mode, "assembled grid");
    Ok(render::render_document(&grid, config))
}

/// Read `input`, render it, and write the document to `output`.
///
/// The document is built completely before the single write, so a failed
/// run never leaves a partial file behind.
pub fn generate(input: &Path, output: &Path, config: &RenderConfig) -> Result<()> {
    let text = fs::read_to_string(input).map_err(|e| TemplateError::io(input, e))?;
    let html = render_from_str(&text, config)?;
    fs::write(output, &html).map_err(|e| TemplateError::io(output, e))?;
    info!(path = %output.display(), bytes = html.len(), "wrote template");
    Ok(())
}
