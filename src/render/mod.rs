mod html;

pub use html::{display_value, escape};

use crate::config::RenderConfig;
use crate::grid::{Cell, Grid, GridRow};
use crate::parser::Record;
use std::fmt::Write;

const TITLE: &str = "Materials Template";

/// Render the whole grid as a standalone HTML document.
pub fn render_document(grid: &Grid<'_>, config: &RenderConfig) -> String {
    let mut html = String::new();

    html.push_str("<html><head><title>");
    html.push_str(TITLE);
    html.push_str("</title>");
    html.push_str("<style>td.border_top { border-top:1pt solid black; }</style>");
    html.push_str("</head><body>");

    let _ = write!(
        html,
        "<table style='border: 1px solid black' cellpadding=0 cellspacing={}>",
        config.cell_spacing()
    );

    for row in &grid.rows {
        render_row(&mut html, row, config);
    }

    html.push_str("</table>");
    html.push_str("</body></html>");
    html
}

/// Three stacked sub-rows: swatches, column names, values.
fn render_row(html: &mut String, row: &GridRow<'_>, config: &RenderConfig) {
    html.push_str("<tr>");
    let mut previous: Option<&Cell<'_>> = None;
    for cell in &row.cells {
        let after_label = previous.is_some_and(|p| p.is_label());
        swatch_cell(html, cell, after_label, config);
        previous = Some(cell);
    }
    html.push_str("</tr>");

    html.push_str("<tr>");
    for cell in &row.cells {
        match cell {
            Cell::Data(record) => {
                let _ = write!(
                    html,
                    "<td style='font-size:{}px;'>{}</td>",
                    config.detail_font_px,
                    escape(&record.col_label)
                );
            }
            Cell::Label(_) | Cell::Blank => html.push_str("<td/>"),
        }
    }
    html.push_str("</tr>");

    html.push_str("<tr>");
    for cell in &row.cells {
        match cell {
            Cell::Data(record) => {
                let _ = write!(html, "<td style='font-size:{}px;'>", config.detail_font_px);
                if config.mode.is_structural() {
                    html.push_str(&escape(&structural_summary(record)));
                }
                html.push_str("</td>");
            }
            Cell::Label(_) | Cell::Blank => html.push_str("<td/>"),
        }
    }
    html.push_str("</tr>");
}

fn swatch_cell(html: &mut String, cell: &Cell<'_>, after_label: bool, config: &RenderConfig) {
    match cell {
        Cell::Label(text) => {
            let _ = write!(
                html,
                "<td valign='middle' align='right' style='padding-right:{}px;font-size:{}px;'>{}</td>",
                config.label_padding_px,
                config.label_font_px,
                escape(text)
            );
        }
        Cell::Data(record) => {
            let class = if after_label { " class='border_top'" } else { "" };
            let _ = write!(
                html,
                "<td bgcolor='{}'{} style='width: {}px;'>&nbsp;</td>",
                escape(&record.payload.color_key),
                class,
                config.cell_width_px
            );
        }
        Cell::Blank => {
            let _ = write!(html, "<td style='width: {}px;'>&nbsp;</td>", config.cell_width_px);
        }
    }
}

/// `mass|strength|stiffness`, mass being nominal mass times density.
pub fn structural_summary(record: &Record) -> String {
    let payload = &record.payload;
    let mass = match &payload.mass {
        Some(mass) => format!("{:.2}", mass.nominal_mass * mass.density),
        None => String::new(),
    };
    format!(
        "{}|{}|{}",
        mass,
        display_value(&payload.strength),
        display_value(&payload.stiffness)
    )
}
