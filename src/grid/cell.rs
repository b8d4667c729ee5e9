use crate::parser::Record;

/// One physical slot of an assembled row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cell<'r> {
    /// Start of a run of records sharing a row label
    Label(&'r str),
    Data(&'r Record),
    Blank,
}

impl<'r> Cell<'r> {
    pub fn is_label(&self) -> bool {
        matches!(self, Cell::Label(_))
    }

    pub fn record(&self) -> Option<&'r Record> {
        match self {
            Cell::Data(record) => Some(*record),
            _ => None,
        }
    }
}
