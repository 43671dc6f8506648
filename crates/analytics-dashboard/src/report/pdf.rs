//! printpdf-backed report canvas

use printpdf::path::PaintMode;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference,
    Rect,
};

use super::{ReportCanvas, Rgb, TextStyle, PAGE_HEIGHT, PAGE_WIDTH};
use crate::error::ReportError;
use crate::format::fold_char;

const LAYER: &str = "content";

/// A4 landscape PDF document using the builtin Helvetica faces.
pub struct PdfCanvas {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

impl PdfCanvas {
    pub fn new(title: &str) -> Result<Self, ReportError> {
        let (doc, page, layer) = PdfDocument::new(title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), LAYER);
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| ReportError::Pdf(format!("{:?}", e)))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| ReportError::Pdf(format!("{:?}", e)))?;
        let layer = doc.get_page(page).get_layer(layer);
        Ok(Self {
            doc,
            layer,
            regular,
            bold,
        })
    }

    fn set_fill(&self, color: Rgb) {
        self.layer.set_fill_color(Color::Rgb(printpdf::Rgb::new(
            f32::from(color.0) / 255.0,
            f32::from(color.1) / 255.0,
            f32::from(color.2) / 255.0,
            None,
        )));
    }
}

impl ReportCanvas for PdfCanvas {
    fn add_page(&mut self) {
        let (page, layer) = self.doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), LAYER);
        self.layer = self.doc.get_page(page).get_layer(layer);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgb) {
        if w <= 0.0 || h <= 0.0 {
            return;
        }
        self.set_fill(color);
        let rect = Rect::new(
            Mm(x),
            Mm(PAGE_HEIGHT - y - h),
            Mm(x + w),
            Mm(PAGE_HEIGHT - y),
        )
        .with_mode(PaintMode::Fill);
        self.layer.add_rect(rect);
    }

    fn text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle) {
        let text = pdf_safe(text);
        if text.trim().is_empty() {
            return;
        }
        self.set_fill(style.color);
        let font = if style.bold { &self.bold } else { &self.regular };
        self.layer
            .use_text(text, style.size, Mm(x), Mm(PAGE_HEIGHT - y), font);
    }

    fn finish(self) -> Result<Vec<u8>, ReportError> {
        self.doc
            .save_to_bytes()
            .map_err(|e| ReportError::Pdf(format!("{:?}", e)))
    }
}

/// Fold text into the ASCII range the builtin fonts render reliably.
pub fn pdf_safe(text: &str) -> String {
    text.chars()
        .map(fold_char)
        .map(|c| if c.is_ascii() { c } else { '?' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_safe_transliterates() {
        assert_eq!(pdf_safe("Categoría Ñandú"), "Categoria Nandu");
        assert_eq!(pdf_safe("1235\u{a0}US$"), "1235 US$");
        assert_eq!(pdf_safe("☃"), "?");
    }

    #[test]
    fn test_pdf_canvas_produces_document() {
        let mut canvas = PdfCanvas::new("Report").unwrap();
        canvas.fill_rect(0.0, 0.0, PAGE_WIDTH, PAGE_HEIGHT, Rgb::SKY);
        canvas.text("Analytics Pro", 20.0, 20.0, &TextStyle::new(24.0, Rgb::WHITE));
        canvas.add_page();
        let bytes = canvas.finish().unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
