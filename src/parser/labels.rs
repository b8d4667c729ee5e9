const SEPARATOR: char = '|';

/// A parsed `"<int>"` or `"<int>|<label>"` template string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplatePosition {
    pub position: i64,
    pub label: Option<String>,
}

fn parse_position(segment: &str) -> Result<i64, &'static str> {
    segment
        .trim()
        .parse::<i64>()
        .map_err(|_| "position is not an integer")
}

/// Parse `template.row`; exactly `<int>|<label>`.
pub fn parse_row_template(raw: &str) -> Result<TemplatePosition, &'static str> {
    let parts: Vec<&str> = raw.split(SEPARATOR).collect();
    match parts.as_slice() {
        [position, label] => Ok(TemplatePosition {
            position: parse_position(position)?,
            label: Some((*label).to_string()),
        }),
        _ => Err("expected exactly two '|'-separated segments"),
    }
}

/// Parse `template.column`; `<int>` or `<int>|<label>`.
pub fn parse_column_template(raw: &str) -> Result<TemplatePosition, &'static str> {
    let parts: Vec<&str> = raw.split(SEPARATOR).collect();
    match parts.as_slice() {
        [position] => Ok(TemplatePosition {
            position: parse_position(position)?,
            label: None,
        }),
        [position, label] => Ok(TemplatePosition {
            position: parse_position(position)?,
            label: Some((*label).to_string()),
        }),
        _ => Err("expected one or two '|'-separated segments"),
    }
}
