//! Printable report: the finished configuration page as a standalone SVG.
//!
//! The report carries the machine information, the drawing with each callout
//! showing its value, the summary grid and a generation timestamp. The browser
//! build hands it to the print dialog; the desktop build rasterizes it.

use crate::anchors::{render_anchors, AnchorTable};
use crate::constants::{
    DRAWING_WIDTH, REPORT_DRAWING_SIZE, REPORT_HEIGHT, REPORT_MARGIN, REPORT_SUMMARY_COLUMNS,
    REPORT_WIDTH,
};
use crate::drawing::DRAWING_SVG;
use crate::summary::summarize;
use crate::types::{DimensionList, MachineInfo};
use chrono::NaiveDateTime;
use std::fmt::Write as _;

const FONT_FAMILY: &str = "Arial, sans-serif";
const TEXT_COLOR: &str = "#111111";
const MUTED_COLOR: &str = "#6b7280";
const UNSET_COLOR: &str = "#ef4444";
const BORDER_COLOR: &str = "#d1d5db";

/// Everything the report shows.
pub struct ReportInput<'a> {
    /// Dimension values
    pub dimensions: &'a DimensionList,
    /// Machine metadata
    pub machine: &'a MachineInfo,
    /// Where the callouts sit on the drawing
    pub anchors: &'a AnchorTable,
    /// Timestamp printed in the footer
    pub generated_at: NaiveDateTime,
}

/// Builds the report SVG. Returns (svg, width, height).
pub fn build_report_svg(input: &ReportInput<'_>) -> (String, u32, u32) {
    let width = REPORT_WIDTH;
    let height = REPORT_HEIGHT;
    let margin = REPORT_MARGIN;
    let inner_w = width - 2.0 * margin;

    let mut out = String::new();

    let _ = writeln!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" font-family=\"{font}\">",
        w = width,
        h = height,
        font = FONT_FAMILY
    );
    let _ = writeln!(
        out,
        "<rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" fill=\"#ffffff\" />",
        width, height
    );

    // Title
    let _ = writeln!(
        out,
        "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"24\" font-weight=\"bold\" fill=\"{}\" text-anchor=\"middle\">Feeder Configuration Report</text>",
        width / 2.0,
        margin + 28.0,
        TEXT_COLOR
    );

    // Machine information
    let machine_top = margin + 52.0;
    let machine_h = 96.0;
    section_box(&mut out, margin, machine_top, inner_w, machine_h, "Machine Information");
    let column_w = (inner_w - 32.0) / 3.0;
    let fields = [
        ("Machine no.", input.machine.machine_no_display()),
        ("Rotation", input.machine.rotation.label()),
        ("UPH", input.machine.uph_display()),
    ];
    for (i, (label, value)) in fields.iter().enumerate() {
        let x = margin + 16.0 + column_w * i as f32;
        let _ = writeln!(
            out,
            "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"13\" font-weight=\"bold\" fill=\"{}\">{}</text>",
            x,
            machine_top + 58.0,
            TEXT_COLOR,
            label
        );
        let _ = writeln!(
            out,
            "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"13\" fill=\"{}\">{}</text>",
            x,
            machine_top + 80.0,
            TEXT_COLOR,
            escape_xml(value)
        );
    }

    // Drawing with callouts
    let design_top = machine_top + machine_h + 16.0;
    let drawing_size = REPORT_DRAWING_SIZE;
    let overflow = 28.0;
    let design_h = 40.0 + overflow + drawing_size + 16.0;
    section_box(&mut out, margin, design_top, inner_w, design_h, "Feeder Design");
    let image_x = margin + (inner_w - drawing_size) / 2.0;
    let image_y = design_top + 40.0 + overflow;
    let scale = drawing_size / DRAWING_WIDTH;
    let _ = writeln!(
        out,
        "<g transform=\"translate({:.1},{:.1}) scale({:.4})\">",
        image_x, image_y, scale
    );
    out.push_str(DRAWING_SVG.trim());
    out.push('\n');
    let _ = writeln!(out, "</g>");

    for placement in render_anchors(input.dimensions, input.anchors) {
        let dim = input.dimensions.get(placement.id);
        let x = image_x + drawing_size * placement.point.x_pct / 100.0;
        let y = image_y + drawing_size * placement.point.y_pct / 100.0;
        let (text, color) = match dim.display_value() {
            Some(value) => (format!("{}: {}", dim.id, value), TEXT_COLOR),
            None => (format!("{}:", dim.id), UNSET_COLOR),
        };
        let text_w = 7.0 * text.chars().count() as f32 + 8.0;
        let _ = writeln!(
            out,
            "<rect x=\"{:.1}\" y=\"{:.1}\" width=\"{:.1}\" height=\"18\" rx=\"3\" ry=\"3\" fill=\"#ffffff\" fill-opacity=\"0.9\" stroke=\"{}\" />",
            x, y, text_w, BORDER_COLOR
        );
        let _ = writeln!(
            out,
            "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"11\" fill=\"{}\">{}</text>",
            x + 4.0,
            y + 13.0,
            color,
            escape_xml(&text)
        );
    }

    // Summary grid
    let summary_top = design_top + design_h + 16.0;
    let entries = summarize(input.dimensions);
    let columns = REPORT_SUMMARY_COLUMNS;
    let rows = entries.len().div_ceil(columns);
    let cell_gap = 8.0;
    let cell_w = (inner_w - 32.0 - cell_gap * (columns as f32 - 1.0)) / columns as f32;
    let cell_h = 52.0;
    let summary_h = 44.0 + rows as f32 * (cell_h + cell_gap) + 8.0;
    section_box(&mut out, margin, summary_top, inner_w, summary_h, "Dimensions Summary");
    for (i, entry) in entries.iter().enumerate() {
        let col = i % columns;
        let row = i / columns;
        let x = margin + 16.0 + col as f32 * (cell_w + cell_gap);
        let y = summary_top + 44.0 + row as f32 * (cell_h + cell_gap);
        let (stroke, value_color) = if entry.is_set {
            (BORDER_COLOR, TEXT_COLOR)
        } else {
            (UNSET_COLOR, UNSET_COLOR)
        };
        let _ = writeln!(
            out,
            "<rect x=\"{:.1}\" y=\"{:.1}\" width=\"{:.1}\" height=\"{:.1}\" rx=\"5\" ry=\"5\" fill=\"none\" stroke=\"{}\" data-dimension=\"{}\" />",
            x, y, cell_w, cell_h, stroke, entry.id
        );
        let _ = writeln!(
            out,
            "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"12\" font-weight=\"bold\" fill=\"{}\">{}:</text>",
            x + 8.0,
            y + 18.0,
            TEXT_COLOR,
            entry.id
        );
        let _ = writeln!(
            out,
            "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"10\" fill=\"{}\" text-anchor=\"end\">{}</text>",
            x + cell_w - 8.0,
            y + 18.0,
            MUTED_COLOR,
            escape_xml(&entry.description)
        );
        let _ = writeln!(
            out,
            "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"14\" font-weight=\"bold\" fill=\"{}\">{}</text>",
            x + 8.0,
            y + 40.0,
            value_color,
            escape_xml(&entry.display)
        );
    }

    // Footer
    let _ = writeln!(
        out,
        "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"11\" fill=\"{}\" text-anchor=\"middle\">Generated on {} at {}</text>",
        width / 2.0,
        height - margin,
        MUTED_COLOR,
        input.generated_at.format("%Y-%m-%d"),
        input.generated_at.format("%H:%M:%S")
    );

    let _ = writeln!(out, "</svg>");

    (out, width as u32, height as u32)
}

/// Bordered section with a heading, like a card on the form.
fn section_box(out: &mut String, x: f32, y: f32, w: f32, h: f32, heading: &str) {
    let _ = writeln!(
        out,
        "<rect x=\"{:.1}\" y=\"{:.1}\" width=\"{:.1}\" height=\"{:.1}\" rx=\"6\" ry=\"6\" fill=\"none\" stroke=\"{}\" stroke-width=\"1\" />",
        x, y, w, h, BORDER_COLOR
    );
    let _ = writeln!(
        out,
        "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"18\" font-weight=\"bold\" fill=\"{}\">{}</text>",
        x + 16.0,
        y + 28.0,
        TEXT_COLOR,
        escape_xml(heading)
    );
}

fn escape_xml(input: &str) -> String {
    let mut s = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => s.push_str("&amp;"),
            '<' => s.push_str("&lt;"),
            '>' => s.push_str("&gt;"),
            '"' => s.push_str("&quot;"),
            '\'' => s.push_str("&apos;"),
            _ => s.push(ch),
        }
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drawing::parse_svg;
    use crate::types::{DimensionId, Rotation};
    use chrono::NaiveDate;

    fn timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 5)
            .and_then(|d| d.and_hms_opt(14, 7, 9))
            .expect("valid timestamp")
    }

    #[test]
    fn test_empty_report_flags_everything_as_unspecified() {
        let dims = DimensionList::new();
        let machine = MachineInfo::default();
        let anchors = AnchorTable::default();
        let (svg, w, h) = build_report_svg(&ReportInput {
            dimensions: &dims,
            machine: &machine,
            anchors: &anchors,
            generated_at: timestamp(),
        });

        assert_eq!((w, h), (800, 1240));
        assert_eq!(svg.matches(">Not specified<").count(), 2);
        assert!(svg.contains(">Clockwise<"));
        assert_eq!(svg.matches(">Not set<").count(), 16);
        assert_eq!(svg.matches("data-dimension=").count(), 16);
        assert!(svg.contains("Generated on 2024-03-05 at 14:07:09"));
    }

    #[test]
    fn test_values_appear_on_callouts_and_in_summary() {
        let mut dims = DimensionList::new();
        dims.update(DimensionId::A, "10");
        let machine = MachineInfo {
            machine_no: "FM<7>".into(),
            rotation: Rotation::AntiClockwise,
            uph: "1200".into(),
        };
        let anchors = AnchorTable::default();
        let (svg, _, _) = build_report_svg(&ReportInput {
            dimensions: &dims,
            machine: &machine,
            anchors: &anchors,
            generated_at: timestamp(),
        });

        assert!(svg.contains(">A: 10 mm<"));
        assert!(svg.contains(">10 mm<"));
        assert_eq!(svg.matches(">Not set<").count(), 15);
        assert!(svg.contains(">FM&lt;7&gt;<"));
        assert!(svg.contains(">Anti-clockwise<"));
        assert!(!svg.contains("Not specified"));
    }

    #[test]
    fn test_callouts_follow_the_anchor_table() {
        let dims = DimensionList::new();
        let machine = MachineInfo::default();
        let anchors = AnchorTable::default().without(DimensionId::K);
        let (svg, _, _) = build_report_svg(&ReportInput {
            dimensions: &dims,
            machine: &machine,
            anchors: &anchors,
            generated_at: timestamp(),
        });

        // K still has its summary cell but no callout.
        assert_eq!(svg.matches(">K:<").count(), 1);
        assert_eq!(svg.matches(">J:<").count(), 2);
    }

    #[test]
    fn test_report_is_valid_svg() {
        let dims = DimensionList::new();
        let machine = MachineInfo::default();
        let anchors = AnchorTable::default();
        let (svg, _, _) = build_report_svg(&ReportInput {
            dimensions: &dims,
            machine: &machine,
            anchors: &anchors,
            generated_at: timestamp(),
        });
        let tree = parse_svg(&svg, None).expect("report should parse");
        assert_eq!(tree.size().width(), 800.0);
    }

    #[test]
    fn test_escape_xml_escapes_markup() {
        assert_eq!(escape_xml("a<b & 'c'"), "a&lt;b &amp; &apos;c&apos;");
    }
}
