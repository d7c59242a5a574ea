//! PDF report rendering.
//!
//! Draws the one-page kundali report onto an A4 canvas with the
//! `printpdf` backend and spools it to a per-request temp file. All
//! section coordinates are in PDF points (origin bottom-left), converted
//! to millimeters only at the canvas boundary.

use std::io::{BufWriter, Write};

use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point, Rgb,
};
use tempfile::NamedTempFile;

use crate::models::{BirthInfo, Graha};

use super::kundali::KundaliChart;
use super::layout::{
    grid_segments, house_center, label_x_offset, label_y_offset, CHART_SIZE, CHART_X0, CHART_Y0,
};

/// Error produced while rendering or spooling the report.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("pdf generation failed: {0}")]
    Pdf(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

const PAGE_WIDTH_MM: f64 = 210.0;
const PAGE_HEIGHT_MM: f64 = 297.0;

/// Points to millimeters (1 pt = 1/72 in).
fn mm(pt: f64) -> Mm {
    Mm(pt * 25.4 / 72.0)
}

fn black() -> Color {
    Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None))
}

/// Fixed display color per graha, shared by every language.
fn graha_color(graha: Graha) -> Color {
    let (r, g, b) = match graha {
        Graha::Sun => (1.0, 0.0, 0.0),
        Graha::Moon => (0.5, 0.5, 0.5),
        Graha::Mars => (1.0, 0.65, 0.0),
        Graha::Mercury => (0.0, 0.5, 0.0),
        Graha::Jupiter => (0.0, 0.0, 1.0),
        Graha::Venus => (1.0, 0.75, 0.8),
        Graha::Saturn => (0.0, 0.0, 0.0),
        Graha::Rahu => (0.65, 0.16, 0.16),
        Graha::Ketu => (0.5, 0.0, 0.5),
    };
    Color::Rgb(Rgb::new(r, g, b, None))
}

fn draw_text(layer: &PdfLayerReference, font: &IndirectFontRef, size: f64, x: f64, y: f64, text: &str) {
    layer.use_text(text, size, mm(x), mm(y), font);
}

fn stroke_segment(layer: &PdfLayerReference, from: (f64, f64), to: (f64, f64)) {
    let line = Line {
        points: vec![
            (Point::new(mm(from.0), mm(from.1)), false),
            (Point::new(mm(to.0), mm(to.1)), false),
        ],
        is_closed: false,
        has_fill: false,
        has_stroke: true,
        is_clipping_path: false,
    };
    layer.add_shape(line);
}

fn stroke_rect(layer: &PdfLayerReference, x: f64, y: f64, w: f64, h: f64) {
    let line = Line {
        points: vec![
            (Point::new(mm(x), mm(y)), false),
            (Point::new(mm(x + w), mm(y)), false),
            (Point::new(mm(x + w), mm(y + h)), false),
            (Point::new(mm(x), mm(y + h)), false),
        ],
        is_closed: true,
        has_fill: false,
        has_stroke: true,
        is_clipping_path: false,
    };
    layer.add_shape(line);
}

/// Download filename for the report: `kundali_<name>_<date>.pdf` with
/// everything but alphanumerics, spaces, `_` and `-` replaced by `_`.
pub fn report_filename(info: &BirthInfo) -> String {
    let safe_name: String = info
        .name
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == ' ' || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!(
        "kundali_{}_{}.pdf",
        safe_name.trim(),
        info.birth.date().format("%Y-%m-%d")
    )
}

/// Render the full report and return the temp file holding it.
pub fn render_report(chart: &KundaliChart) -> Result<NamedTempFile, RenderError> {
    let info = &chart.info;

    let (doc, page, layer) = PdfDocument::new(
        "VedhVaani — Kundali Report",
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "report",
    );
    let layer = doc.get_page(page).get_layer(layer);

    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| RenderError::Pdf(e.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| RenderError::Pdf(e.to_string()))?;
    let oblique = doc
        .add_builtin_font(BuiltinFont::HelveticaOblique)
        .map_err(|e| RenderError::Pdf(e.to_string()))?;

    layer.set_fill_color(black());
    layer.set_outline_color(black());

    // Header
    draw_text(&layer, &bold, 18.0, 140.0, 800.0, "VedhVaani — Kundali Report");
    draw_text(&layer, &regular, 11.0, 50.0, 780.0, &format!("Name: {}", info.name));
    draw_text(
        &layer,
        &regular,
        11.0,
        50.0,
        766.0,
        &format!(
            "DOB: {}  TOB: {}",
            info.birth.date().format("%Y-%m-%d"),
            info.birth.time().format("%H:%M")
        ),
    );
    draw_text(
        &layer,
        &regular,
        11.0,
        50.0,
        752.0,
        &format!(
            "Location: {}, {}   Style: {}   Lang: {}",
            info.latitude,
            info.longitude,
            info.style.code(),
            info.lang.code()
        ),
    );

    // Rashifal box
    layer.set_outline_thickness(0.8);
    stroke_rect(&layer, 45.0, 720.0, 520.0, 36.0);
    draw_text(
        &layer,
        &oblique,
        10.0,
        50.0,
        730.0,
        &format!("Rashifal: {}", info.lang.rashifal()),
    );

    draw_chart_diagram(&layer, &regular, chart);

    // Graha positions table
    draw_text(&layer, &bold, 13.0, 50.0, 320.0, "Graha Positions (Longitude):");
    let mut y = 302.0;
    for position in &chart.positions {
        draw_text(
            &layer,
            &regular,
            11.0,
            60.0,
            y,
            &format!(
                "{}: {:.4}°",
                position.graha.localized_name(info.lang),
                position.longitude
            ),
        );
        y -= 14.0;
    }

    // Ascendant box
    draw_text(&layer, &bold, 12.0, 340.0, 320.0, "Ascendant (Lagna):");
    draw_text(
        &layer,
        &regular,
        11.0,
        340.0,
        302.0,
        &format!("Longitude: {:.4}°", chart.ascendant.longitude),
    );
    draw_text(
        &layer,
        &regular,
        11.0,
        340.0,
        286.0,
        &format!("Sign Index (1..12): {}", chart.ascendant.sign_index()),
    );
    draw_text(
        &layer,
        &regular,
        11.0,
        340.0,
        270.0,
        &format!("Degree in Sign: {:.3}°", chart.ascendant.degree_in_sign()),
    );

    // Dasha table
    draw_text(&layer, &bold, 13.0, 50.0, 220.0, "Dasha (Demo):");
    let mut y = 200.0;
    for period in &chart.dasha {
        draw_text(
            &layer,
            &regular,
            11.0,
            60.0,
            y,
            &format!("{}: {} → {}", period.name, period.start, period.end),
        );
        y -= 14.0;
    }

    // Compact houses listing
    draw_text(&layer, &bold, 12.0, 50.0, 140.0, "Houses (planets in each):");
    let mut y = 122.0;
    for (house, positions) in chart.house_table() {
        let listing = if positions.is_empty() {
            "-".to_string()
        } else {
            positions
                .iter()
                .map(|p| p.graha.localized_name(info.lang))
                .collect::<Vec<_>>()
                .join(", ")
        };
        draw_text(&layer, &regular, 10.0, 60.0, y, &format!("House {}: {}", house, listing));
        y -= 12.0;
    }

    // Footer
    draw_text(
        &layer,
        &oblique,
        9.0,
        50.0,
        40.0,
        "Generated by VedhVaani Kundali Engine",
    );

    let mut file = tempfile::Builder::new()
        .prefix("kundali")
        .suffix(".pdf")
        .tempfile()?;
    {
        let mut writer = BufWriter::new(file.as_file_mut());
        doc.save(&mut writer)
            .map_err(|e| RenderError::Pdf(e.to_string()))?;
        writer.flush()?;
    }
    Ok(file)
}

/// Chart frame, inner grid, and per-house stacked planet labels.
fn draw_chart_diagram(layer: &PdfLayerReference, font: &IndirectFontRef, chart: &KundaliChart) {
    let style = chart.info.style;

    layer.set_outline_thickness(1.5);
    stroke_rect(layer, CHART_X0, CHART_Y0, CHART_SIZE, CHART_SIZE);
    for (from, to) in grid_segments(style) {
        stroke_segment(layer, from, to);
    }

    let dx = label_x_offset(style);
    for (house, positions) in chart.house_table() {
        let (cx, cy) = house_center(style, house);
        for (i, position) in positions.iter().enumerate() {
            layer.set_fill_color(graha_color(position.graha));
            draw_text(
                layer,
                font,
                9.0,
                cx + dx,
                cy + label_y_offset(i),
                position.graha.localized_name(chart.info.lang),
            );
        }
    }
    layer.set_fill_color(black());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ephemeris::AstroEphemeris;
    use crate::models::{ChartStyle, HouseSystem, Language};
    use crate::services::kundali::compute_kundali;
    use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

    fn chart(style: ChartStyle) -> KundaliChart {
        let info = BirthInfo {
            name: "Asha Deshpande".to_string(),
            birth: NaiveDateTime::new(
                NaiveDate::from_ymd_opt(1992, 11, 3).unwrap(),
                NaiveTime::from_hms_opt(14, 45, 0).unwrap(),
            ),
            latitude: 18.52,
            longitude: 73.86,
            lang: Language::En,
            style,
            hsys: HouseSystem::Placidus,
        };
        compute_kundali(&AstroEphemeris, info)
    }

    #[test]
    fn test_render_north_style_produces_pdf() {
        let file = render_report(&chart(ChartStyle::North)).unwrap();
        let bytes = std::fs::read(file.path()).unwrap();
        assert!(bytes.starts_with(b"%PDF"), "missing PDF header");
        assert!(bytes.len() > 1000, "suspiciously small file: {}", bytes.len());
    }

    #[test]
    fn test_render_south_style_produces_pdf() {
        let file = render_report(&chart(ChartStyle::South)).unwrap();
        let bytes = std::fs::read(file.path()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_report_filename_sanitized() {
        let mut c = chart(ChartStyle::North);
        c.info.name = "A/B: c".to_string();
        assert_eq!(report_filename(&c.info), "kundali_A_B_ c_1992-11-03.pdf");
    }

    #[test]
    fn test_report_filename_plain() {
        let c = chart(ChartStyle::North);
        assert_eq!(report_filename(&c.info), "kundali_Asha Deshpande_1992-11-03.pdf");
    }
}
