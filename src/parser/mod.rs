mod labels;
mod loader;
mod preprocessor;
mod types;

pub use labels::{parse_column_template, parse_row_template, TemplatePosition};
pub use loader::{load_records, require_mass};
pub use preprocessor::{strip_comments, strip_line_comment};
pub use types::{Mass, Payload, RawColumn, RawEntry, RawTemplate, Record};
