use super::Row;
use crate::error::{CatcfgError, Result};
use printpdf::path::PaintMode;
use printpdf::*;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

const PRODUCT_NAME: &str = "AURORA ENTERPRISE";
const REPORT_SUBTITLE: &str = "Configuration Management Report";
const FOOTER_LEFT: &str = "Aurora Config Gen v2.4";
const FOOTER_CENTER: &str = "Page 1 of 1";
const FOOTER_RIGHT: &str = "Confidential - Internal Use Only";

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 14.0;
const TABLE_RIGHT: f32 = PAGE_WIDTH - MARGIN;
const VALUE_COL: f32 = 96.0;
const TABLE_TOP: f32 = 257.0;
const ROW_HEIGHT: f32 = 6.4;
const CELL_PAD: f32 = 2.0;
// Keeps a value on its single grid row
const VALUE_CLIP: usize = 58;

/// Presentational parameters for the document report. Never alters row
/// content.
#[derive(Debug, Clone)]
pub struct ReportMeta {
    pub generated_at: String,
}

/// Render the rows as a single-page PDF: title block, field/value grid in
/// row order, notes block, footer.
pub fn write_report(path: &Path, rows: &[Row], notes: &str, meta: &ReportMeta) -> Result<()> {
    let (doc, page, layer) = PdfDocument::new(
        REPORT_SUBTITLE,
        Mm(PAGE_WIDTH),
        Mm(PAGE_HEIGHT),
        "Report",
    );
    let layer = doc.get_page(page).get_layer(layer);
    let regular = builtin_font(&doc, BuiltinFont::Helvetica)?;
    let bold = builtin_font(&doc, BuiltinFont::HelveticaBold)?;
    let oblique = builtin_font(&doc, BuiltinFont::HelveticaOblique)?;

    // Title block
    layer.set_fill_color(Color::Rgb(Rgb::new(0.16, 0.16, 0.39, None)));
    layer.use_text(PRODUCT_NAME, 20.0, Mm(MARGIN), Mm(275.0), &bold);
    layer.set_fill_color(Color::Rgb(Rgb::new(0.39, 0.39, 0.39, None)));
    layer.use_text(REPORT_SUBTITLE, 10.0, Mm(MARGIN), Mm(268.0), &regular);
    layer.use_text(
        format!("Generated: {}", meta.generated_at),
        10.0,
        Mm(MARGIN),
        Mm(263.0),
        &regular,
    );

    let table_bottom = draw_table(&layer, rows, &regular, &bold);
    draw_notes(&layer, notes, table_bottom, &bold, &oblique);

    // Footer
    layer.set_fill_color(Color::Rgb(Rgb::new(0.6, 0.6, 0.6, None)));
    layer.use_text(FOOTER_LEFT, 8.0, Mm(MARGIN), Mm(12.0), &regular);
    layer.use_text(FOOTER_CENTER, 8.0, Mm(98.0), Mm(12.0), &regular);
    layer.use_text(FOOTER_RIGHT, 8.0, Mm(150.0), Mm(12.0), &regular);

    let file = File::create(path)?;
    doc.save(&mut BufWriter::new(file))
        .map_err(|e| CatcfgError::Document(e.to_string()))?;
    Ok(())
}

fn builtin_font(doc: &PdfDocumentReference, font: BuiltinFont) -> Result<IndirectFontRef> {
    doc.add_builtin_font(font)
        .map_err(|e| CatcfgError::Document(e.to_string()))
}

/// Draw the header band and the field/value grid. Returns the table's bottom
/// edge.
fn draw_table(
    layer: &PdfLayerReference,
    rows: &[Row],
    regular: &IndirectFontRef,
    bold: &IndirectFontRef,
) -> f32 {
    let band_bottom = |i: usize| TABLE_TOP - ROW_HEIGHT * (i as f32 + 1.0);
    let baseline = |i: usize| band_bottom(i) + 2.0;

    // Header band
    layer.set_fill_color(Color::Rgb(Rgb::new(0.24, 0.24, 0.59, None)));
    layer.add_rect(
        Rect::new(Mm(MARGIN), Mm(band_bottom(0)), Mm(TABLE_RIGHT), Mm(TABLE_TOP))
            .with_mode(PaintMode::Fill),
    );
    layer.set_fill_color(Color::Rgb(Rgb::new(1.0, 1.0, 1.0, None)));
    layer.use_text("Field", 10.0, Mm(MARGIN + CELL_PAD), Mm(baseline(0)), bold);
    layer.use_text("Value", 10.0, Mm(VALUE_COL + CELL_PAD), Mm(baseline(0)), bold);

    // Body
    layer.set_fill_color(Color::Rgb(Rgb::new(0.13, 0.13, 0.13, None)));
    for (i, row) in rows.iter().enumerate() {
        let line = i + 1;
        layer.use_text(
            clip(&row.label, VALUE_CLIP),
            9.0,
            Mm(MARGIN + CELL_PAD),
            Mm(baseline(line)),
            regular,
        );
        layer.use_text(
            clip(&row.value, VALUE_CLIP),
            9.0,
            Mm(VALUE_COL + CELL_PAD),
            Mm(baseline(line)),
            regular,
        );
    }

    // Grid
    let bottom = band_bottom(rows.len());
    layer.set_outline_color(Color::Rgb(Rgb::new(0.7, 0.7, 0.7, None)));
    layer.set_outline_thickness(0.3);
    for i in 0..=rows.len() + 1 {
        let y = TABLE_TOP - ROW_HEIGHT * i as f32;
        stroke_line(layer, (MARGIN, y), (TABLE_RIGHT, y));
    }
    for x in [MARGIN, VALUE_COL, TABLE_RIGHT] {
        stroke_line(layer, (x, bottom), (x, TABLE_TOP));
    }

    bottom
}

fn draw_notes(
    layer: &PdfLayerReference,
    notes: &str,
    table_bottom: f32,
    bold: &IndirectFontRef,
    oblique: &IndirectFontRef,
) {
    let mut y = table_bottom - 12.0;
    layer.set_fill_color(Color::Rgb(Rgb::new(0.16, 0.16, 0.39, None)));
    layer.use_text("CONFIGURATOR NOTES", 10.0, Mm(MARGIN), Mm(y), bold);
    y -= 6.0;

    if notes.is_empty() {
        layer.set_fill_color(Color::Rgb(Rgb::new(0.6, 0.6, 0.6, None)));
        layer.use_text(
            "No additional configuration notes provided for this record.",
            9.0,
            Mm(MARGIN),
            Mm(y),
            oblique,
        );
        return;
    }

    layer.set_fill_color(Color::Rgb(Rgb::new(0.13, 0.13, 0.13, None)));
    for line in wrap(notes, 100).into_iter().take(8) {
        layer.use_text(line, 9.0, Mm(MARGIN), Mm(y), oblique);
        y -= 5.0;
    }
}

fn stroke_line(layer: &PdfLayerReference, from: (f32, f32), to: (f32, f32)) {
    let line = Line {
        points: vec![
            (Point::new(Mm(from.0), Mm(from.1)), false),
            (Point::new(Mm(to.0), Mm(to.1)), false),
        ],
        is_closed: false,
    };
    layer.add_line(line);
}

fn clip(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut clipped: String = s.chars().take(max.saturating_sub(1)).collect();
    clipped.push('…');
    clipped
}

fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + word.chars().count() + 1 > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
