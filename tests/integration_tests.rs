use materials_template::config::{Mode, RenderConfig, OUTPUT_FILE};
use materials_template::error::TemplateError;
use materials_template::{generate, parse_args, render_from_str};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const MATERIALS: &str = r##"[
    // Row 0: two metals then a wood, sharing one physical row
    {
        "template": { "row": "0|Metals", "column": "0|Iron" },
        "color_key": "#808080",
        "mass": { "nominal_mass": 2.0, "density": 1.5 },
        "strength": 10,
        "stiffness": 20
    },
    {
        "template": { "row": "0|Metals", "column": "1|Steel" },
        "color_key": "#a0a0a0",
        "mass": { "nominal_mass": 4.0, "density": 0.5 },
        "strength": 15,
        "stiffness": 30
    },
    {
        "template": { "row": "0|Woods", "column": "3|Oak" },
        "color_key": "#a0522d",
        "mass": { "nominal_mass": 1.0, "density": 0.25 },
        "strength": 2,
        "stiffness": 4
    },
    // Row 1 declared before row -1 on purpose
    {
        "template": { "row": "1|Glass", "column": 0 },
        "color_key": "#e0ffff",
        "mass": { "nominal_mass": 3.0, "density": 1.0 },
        "strength": 1,
        "stiffness": 1
    },
    {
        "template": { "row": "-1|Stone", "column": "0|Granite" },
        "color_key": "#696969",
        "mass": { "nominal_mass": 5.0, "density": 2.0 },
        "strength": 50,
        "stiffness": 60
    }
]"##;

// Helper to write the input document into a scratch directory
fn create_input(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("materials.json");
    fs::write(&path, content).expect("Failed to write input file");
    path
}

fn render(mode: Mode) -> String {
    render_from_str(MATERIALS, &RenderConfig::new(mode)).expect("render should succeed")
}

#[cfg(test)]
mod render_tests {
    use super::*;

    #[test]
    fn test_document_frame() {
        let html = render(Mode::Esthetic);
        assert!(html.starts_with("<html><head><title>Materials Template</title>"));
        assert!(html.ends_with("</table></body></html>"));
        assert_eq!(html.matches("<table").count(), 1);
        // three sub-rows per logical row
        assert_eq!(html.matches("<tr>").count(), 9);
        assert_eq!(html.matches("</tr>").count(), 9);
    }

    #[test]
    fn test_rows_in_ascending_position() {
        let html = render(Mode::Esthetic);
        let stone = html.find(">Stone</td>").expect("Stone label");
        let metals = html.find(">Metals</td>").expect("Metals label");
        let glass = html.find(">Glass</td>").expect("Glass label");
        assert!(stone < metals && metals < glass);
    }

    #[test]
    fn test_swatch_row_packing() {
        let html = render(Mode::Esthetic);
        let expected = concat!(
            "<tr>",
            "<td valign='middle' align='right' style='padding-right:5px;font-size:10px;'>Metals</td>",
            "<td bgcolor='#808080' class='border_top' style='width: 50px;'>&nbsp;</td>",
            "<td bgcolor='#a0a0a0' style='width: 50px;'>&nbsp;</td>",
            "<td style='width: 50px;'>&nbsp;</td>",
            "<td valign='middle' align='right' style='padding-right:5px;font-size:10px;'>Woods</td>",
            "<td bgcolor='#a0522d' class='border_top' style='width: 50px;'>&nbsp;</td>",
            "</tr>"
        );
        assert!(html.contains(expected), "unexpected swatch row in {html}");
    }

    #[test]
    fn test_column_label_row() {
        let html = render(Mode::Esthetic);
        let expected = concat!(
            "<tr><td/>",
            "<td style='font-size:8px;'>Iron</td>",
            "<td style='font-size:8px;'>Steel</td>",
            "<td/><td/>",
            "<td style='font-size:8px;'>Oak</td>",
            "</tr>"
        );
        assert!(html.contains(expected));
    }

    #[test]
    fn test_structural_values() {
        let html = render(Mode::Structural);
        assert!(html.contains("cellspacing=0>"));
        assert!(html.contains("<td style='font-size:8px;'>3.00|10|20</td>"));
        assert!(html.contains("<td style='font-size:8px;'>2.00|15|30</td>"));
        assert!(html.contains("<td style='font-size:8px;'>0.25|2|4</td>"));
        assert!(html.contains("<td style='font-size:8px;'>10.00|50|60</td>"));
    }

    #[test]
    fn test_esthetic_values_empty() {
        let html = render(Mode::Esthetic);
        assert!(html.contains("cellspacing=1>"));
        assert!(!html.contains("3.00|10|20"));
        assert!(html.contains("<tr><td/><td style='font-size:8px;'></td><td style='font-size:8px;'></td>"));
    }

    #[test]
    fn test_modes_share_cell_structure() {
        let structural = render(Mode::Structural);
        let esthetic = render(Mode::Esthetic);
        assert_eq!(structural.matches("<td").count(), esthetic.matches("<td").count());
        assert_eq!(structural.matches("bgcolor=").count(), esthetic.matches("bgcolor=").count());
    }

    #[test]
    fn test_label_text_is_escaped() {
        let text = r##"[ { "template": { "row": "0|A<B>", "column": "0|x&y" }, "color_key": "red",
                         "mass": { "nominal_mass": 1, "density": 1 } } ]"##;
        let html = render_from_str(text, &RenderConfig::new(Mode::Esthetic)).expect("render");
        assert!(html.contains(">A&lt;B&gt;</td>"));
        assert!(html.contains(">x&amp;y</td>"));
    }
}

#[cfg(test)]
mod generate_tests {
    use super::*;

    #[test]
    fn test_generate_writes_document() {
        let dir = TempDir::new().expect("tempdir");
        let input = create_input(&dir, MATERIALS);
        let output = dir.path().join(OUTPUT_FILE);

        generate(&input, &output, &RenderConfig::new(Mode::Structural)).expect("generate");

        let html = fs::read_to_string(&output).expect("output should exist");
        assert_eq!(html, render(Mode::Structural));
    }

    #[test]
    fn test_generate_is_idempotent() {
        let dir = TempDir::new().expect("tempdir");
        let input = create_input(&dir, MATERIALS);
        let output = dir.path().join(OUTPUT_FILE);
        let config = RenderConfig::new(Mode::Esthetic);

        generate(&input, &output, &config).expect("first run");
        let first = fs::read(&output).expect("first output");
        generate(&input, &output, &config).expect("second run");
        let second = fs::read(&output).expect("second output");

        assert_eq!(first, second);
    }

    #[test]
    fn test_schema_error_leaves_no_output() {
        let dir = TempDir::new().expect("tempdir");
        let input = create_input(
            &dir,
            r##"[ { "template": { "row": "0", "column": "0" }, "color_key": "red",
                    "mass": { "nominal_mass": 1, "density": 1 } } ]"##,
        );
        let output = dir.path().join(OUTPUT_FILE);

        let err = generate(&input, &output, &RenderConfig::new(Mode::Structural)).unwrap_err();
        assert!(matches!(err, TemplateError::Schema { .. }));
        assert!(!output.exists());
    }

    #[test]
    fn test_packing_error_leaves_no_output() {
        let dir = TempDir::new().expect("tempdir");
        let input = create_input(
            &dir,
            r##"[ { "template": { "row": "0|A", "column": "100" }, "color_key": "red",
                    "mass": { "nominal_mass": 1, "density": 1 } } ]"##,
        );
        let output = dir.path().join(OUTPUT_FILE);
        let mut config = RenderConfig::new(Mode::Esthetic);
        config.max_row_width = 16;

        let err = generate(&input, &output, &config).unwrap_err();
        assert!(matches!(err, TemplateError::Packing { row: 0, .. }));
        assert!(!output.exists());
    }

    #[test]
    fn test_column_overflow_is_packing_error() {
        let text = r##"[
            { "template": { "row": "0|A", "column": "0" }, "color_key": "red",
              "mass": { "nominal_mass": 1, "density": 1 } },
            { "template": { "row": "0|A", "column": "9223372036854775807" }, "color_key": "red",
              "mass": { "nominal_mass": 1, "density": 1 } }
        ]"##;

        let err = render_from_str(text, &RenderConfig::new(Mode::Esthetic)).unwrap_err();
        assert!(matches!(err, TemplateError::Packing { row: 0, .. }));
    }

    #[test]
    fn test_mass_needed_only_in_structural_mode() {
        let text = r##"[ { "template": { "row": "0|A", "column": "0|Plain" }, "color_key": "red" } ]"##;

        let html = render_from_str(text, &RenderConfig::new(Mode::Esthetic))
            .expect("esthetic run ignores mass");
        assert!(html.contains(">Plain</td>"));

        let err = render_from_str(text, &RenderConfig::new(Mode::Structural)).unwrap_err();
        assert!(matches!(err, TemplateError::Schema { field: "mass", .. }));
    }

    #[test]
    fn test_missing_input_is_io_error() {
        let dir = TempDir::new().expect("tempdir");
        let input = dir.path().join("absent.json");
        let output = dir.path().join(OUTPUT_FILE);

        let err = generate(&input, &output, &RenderConfig::new(Mode::Esthetic)).unwrap_err();
        match err {
            TemplateError::Io { path, .. } => assert_eq!(path, input),
            other => panic!("unexpected error: {other}"),
        }
    }
}

#[cfg(test)]
mod args_tests {
    use super::*;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_valid_args() {
        let (path, mode) = parse_args(&args(&["m.json", "s"])).expect("valid args");
        assert_eq!(path, PathBuf::from("m.json"));
        assert_eq!(mode, Mode::Structural);

        let (_, mode) = parse_args(&args(&["m.json", "e"])).expect("valid args");
        assert_eq!(mode, Mode::Esthetic);
    }

    #[test]
    fn test_invalid_args_are_usage_errors() {
        for bad in [&[][..], &["m.json"][..], &["m.json", "x"][..], &["m.json", "s", "extra"][..]] {
            let err = parse_args(&args(bad)).unwrap_err();
            assert!(matches!(err, TemplateError::Usage(_)), "{:?} should be rejected", bad);
        }
    }
}
