//! PDF rendering of a finished letter.
//!
//! Layout is computed up front by [`layout_letter`] in page coordinates
//! measured from the top-left corner, then handed to printpdf, whose origin is
//! the bottom-left corner. Everything goes on a single A4 page; lines that run
//! past the bottom edge are still emitted and end up outside the visible area.

use printpdf::{BuiltinFont, Mm, PdfDocument};
use tracing::{debug, warn};

use super::metrics::{split_text_to_size, HelveticaMetrics, TextMeasure};
use crate::domain::ExportError;

/// A4 dimensions in mm
pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;

pub const MARGIN_MM: f32 = 20.0;
pub const CONTENT_WIDTH_MM: f32 = 170.0;
pub const FONT_SIZE_PT: f32 = 12.0;

/// Vertical advance per wrapped line.
pub const LINE_STEP_MM: f32 = 8.0;
/// Extra space after each line of the original text.
pub const PARAGRAPH_GAP_MM: f32 = 4.0;

const FALLBACK_FILE_STEM: &str = "cover-letter";

/// A rendered document ready to be written somewhere.
#[derive(Debug, Clone)]
pub struct ExportedDocument {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// One wrapped line at its final position, `y_mm` measured from the page top.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    pub x_mm: f32,
    pub y_mm: f32,
}

/// `"<name> - cover letter.pdf"`, with `cover-letter` standing in for a blank name.
///
/// Path separators and control characters in the name become `-`, so the
/// result is always a single path component.
///
/// # Examples
///
/// ```
/// use jobhelper::infrastructure::export_filename;
///
/// assert_eq!(export_filename("Ana"), "Ana - cover letter.pdf");
/// assert_eq!(export_filename("  "), "cover-letter - cover letter.pdf");
/// assert_eq!(export_filename("Ana/Dev"), "Ana-Dev - cover letter.pdf");
/// ```
pub fn export_filename(name: &str) -> String {
    let stem: String = name
        .trim()
        .chars()
        .map(|c| if c == '/' || c == '\\' || c.is_control() { '-' } else { c })
        .collect();
    // "." and ".." are not file names
    let stem = if stem.chars().all(|c| c == '.') {
        FALLBACK_FILE_STEM
    } else {
        stem.as_str()
    };
    format!("{stem} - cover letter.pdf")
}

pub fn layout_letter(letter: &str, measure: &dyn TextMeasure) -> Vec<PlacedLine> {
    let mut placed = Vec::new();
    let mut y = MARGIN_MM;

    for line in letter.split('\n') {
        for piece in split_text_to_size(line, CONTENT_WIDTH_MM, measure) {
            placed.push(PlacedLine {
                text: piece,
                x_mm: MARGIN_MM,
                y_mm: y,
            });
            y += LINE_STEP_MM;
        }
        y += PARAGRAPH_GAP_MM;
    }

    placed
}

/// Renders `letter` onto a single A4 page.
pub fn render_pdf(letter: &str, name: &str) -> Result<ExportedDocument, ExportError> {
    let filename = export_filename(name);
    let (doc, page, layer) = PdfDocument::new(
        filename.trim_end_matches(".pdf"),
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Layer 1",
    );
    let layer = doc.get_page(page).get_layer(layer);
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ExportError::Pdf(e.to_string()))?;

    let placed = layout_letter(letter, &HelveticaMetrics::new(FONT_SIZE_PT));
    let overflow = placed
        .iter()
        .filter(|line| line.y_mm > PAGE_HEIGHT_MM - MARGIN_MM)
        .count();
    if overflow > 0 {
        warn!(overflow, "letter does not fit on one page; trailing lines fall off the page");
    }

    for line in &placed {
        layer.use_text(
            line.text.as_str(),
            FONT_SIZE_PT,
            Mm(line.x_mm),
            Mm(PAGE_HEIGHT_MM - line.y_mm),
            &font,
        );
    }

    let bytes = doc
        .save_to_bytes()
        .map_err(|e| ExportError::Pdf(e.to_string()))?;
    debug!(lines = placed.len(), size = bytes.len(), "rendered pdf");

    Ok(ExportedDocument { filename, bytes })
}
