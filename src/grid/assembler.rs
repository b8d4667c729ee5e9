use super::cell::Cell;
use crate::error::PackingError;
use crate::parser::Record;

/// One transition of the packing state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Pad the row; the cursor stays on the same record
    Blank,
    /// Open a new label run; the cursor stays on the same record
    Label,
    /// Place the record and advance the cursor
    Data,
}

/// Packing state for a single row.
///
/// Column positions are written as if label cells did not exist, so every
/// emitted label shifts the target of later records one slot right.
#[derive(Debug, Default)]
pub struct PackState<'r> {
    output: Vec<Cell<'r>>,
    labels_emitted: usize,
    current_label: Option<&'r str>,
    cursor: usize,
}

impl<'r> PackState<'r> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn labels_emitted(&self) -> usize {
        self.labels_emitted
    }

    pub fn cells(&self) -> &[Cell<'r>] {
        &self.output
    }

    /// Physical index the record wants to land on in the current state.
    ///
    /// `None` when the shifted column does not fit in an `i64`.
    pub fn target(&self, record: &Record) -> Option<i64> {
        record.col_position.checked_add(self.labels_emitted as i64)
    }

    /// Decide the next transition for `record` without applying it.
    pub fn next_step(&self, record: &Record) -> Step {
        match self.target(record) {
            Some(target) if target <= self.output.len() as i64 => {
                if self.current_label != Some(record.row_label.as_str()) {
                    Step::Label
                } else {
                    Step::Data
                }
            }
            _ => Step::Blank,
        }
    }

    /// Apply a transition for the record under the cursor.
    pub fn apply(&mut self, step: Step, record: &'r Record) {
        match step {
            Step::Blank => self.output.push(Cell::Blank),
            Step::Label => {
                self.output.push(Cell::Label(record.row_label.as_str()));
                self.labels_emitted += 1;
                self.current_label = Some(record.row_label.as_str());
            }
            Step::Data => {
                self.output.push(Cell::Data(record));
                self.cursor += 1;
            }
        }
    }

    pub fn into_cells(self) -> Vec<Cell<'r>> {
        self.output
    }
}

/// Pack one bucket into a dense physical row.
///
/// `records` must be in non-decreasing column order. Every step either
/// grows the row or advances the cursor, and Blanks stop once the row
/// reaches the target, so the loop ends for any sorted bucket that fits
/// in `max_row_width`.
pub fn assemble_row<'r>(
    records: &[&'r Record],
    max_row_width: usize,
) -> Result<Vec<Cell<'r>>, PackingError> {
    for pair in records.windows(2) {
        if pair[1].col_position < pair[0].col_position {
            return Err(PackingError::NonMonotonic {
                previous: pair[0].col_position,
                col: pair[1].col_position,
            });
        }
    }

    let mut state = PackState::new();

    while let Some(&record) = records.get(state.cursor()) {
        let step = state.next_step(record);
        if step == Step::Blank {
            match state.target(record) {
                Some(target) if target < max_row_width as i64 => {}
                target => {
                    return Err(PackingError::RowTooWide {
                        target: target.unwrap_or(i64::MAX),
                        max: max_row_width,
                    });
                }
            }
        }
        state.apply(step, record);
    }

    Ok(state.into_cells())
}
