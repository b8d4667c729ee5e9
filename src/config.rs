use std::fmt;
use std::str::FromStr;

/// Fixed name of the generated document.
pub const OUTPUT_FILE: &str = "materials_template.html";

pub const USAGE: &str = "Usage: materials-template <path_to_materials_json> s|e";

/// Default cap on physical cells per row. Only guards against columns so
/// large that padding them with Blanks would exhaust memory.
pub const DEFAULT_MAX_ROW_WIDTH: usize = 1 << 20;

/// Rendering mode selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// `s`: show mass, strength and stiffness under each swatch
    Structural,
    /// `e`: swatches and names only
    Esthetic,
}

impl Mode {
    pub fn is_structural(self) -> bool {
        matches!(self, Mode::Structural)
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "s" => Ok(Mode::Structural),
            "e" => Ok(Mode::Esthetic),
            other => Err(format!("unknown mode '{}', expected s or e", other)),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Structural => write!(f, "structural"),
            Mode::Esthetic => write!(f, "esthetic"),
        }
    }
}

/// Knobs for the HTML renderer and the assembler guard.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub mode: Mode,
    pub cell_width_px: u32,
    pub label_font_px: u32,
    pub detail_font_px: u32,
    pub label_padding_px: u32,
    pub max_row_width: usize,
}

impl RenderConfig {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            cell_width_px: 50,
            label_font_px: 10,
            detail_font_px: 8,
            label_padding_px: 5,
            max_row_width: DEFAULT_MAX_ROW_WIDTH,
        }
    }

    /// Table `cellspacing`: swatches touch in structural mode.
    pub fn cell_spacing(&self) -> u32 {
        if self.mode.is_structural() {
            0
        } else {
            1
        }
    }
}
