mod assembler;
mod cell;
mod grouper;

pub use assembler::{assemble_row, PackState, Step};
pub use cell::Cell;
pub use grouper::{group_rows, RowBucket};

use crate::error::{Result, TemplateError};
use crate::parser::Record;
use tracing::debug;

/// One assembled physical row.
#[derive(Debug, Clone)]
pub struct GridRow<'r> {
    pub position: i64,
    pub cells: Vec<Cell<'r>>,
}

/// All rows, ascending by row position.
#[derive(Debug, Clone, Default)]
pub struct Grid<'r> {
    pub rows: Vec<GridRow<'r>>,
}

/// Group and assemble every row. Any packing failure aborts the whole grid.
pub fn build_grid(records: &[Record], max_row_width: usize) -> Result<Grid<'_>> {
    let buckets = group_rows(records);
    let mut rows = Vec::with_capacity(buckets.len());

    for (position, bucket) in buckets {
        let cells = assemble_row(&bucket.records, max_row_width)
            .map_err(|source| TemplateError::Packing { row: position, source })?;

        debug!(
            row = position,
            records = bucket.records.len(),
            cells = cells.len(),
            labels = cells.iter().filter(|c| c.is_label()).count(),
            "assembled row"
        );
        rows.push(GridRow { position, cells });
    }

    Ok(Grid { rows })
}
