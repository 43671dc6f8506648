//! Striped report tables
//!
//! Rows are laid out one at a time. When the next row would cross the bottom
//! margin the table continues on a new page with its header repeated.

use super::{fit_text, ReportCanvas, ReportWriter, Rgb, TextStyle, BOTTOM_MARGIN, PAGE_HEIGHT, PAGE_WIDTH, PT_TO_MM, TABLE_MARGIN};

const CELL_PADDING: f32 = 1.76;
const LINE_HEIGHT: f32 = 1.15;

/// A table to draw at the writer's cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSpec {
    pub head: Vec<String>,
    pub body: Vec<Vec<String>>,
    pub head_fill: Rgb,
    /// Font size in points.
    pub font_size: f32,
    /// Column widths in millimetres; empty splits the page width evenly.
    pub column_widths: Vec<f32>,
}

impl TableSpec {
    pub fn new(head: &[&str], body: Vec<Vec<String>>) -> Self {
        Self {
            head: head.iter().map(|h| h.to_string()).collect(),
            body,
            head_fill: Rgb::SKY,
            font_size: 10.0,
            column_widths: Vec::new(),
        }
    }

    pub fn head_fill(mut self, color: Rgb) -> Self {
        self.head_fill = color;
        self
    }

    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    pub fn widths(mut self, widths: &[f32]) -> Self {
        self.column_widths = widths.to_vec();
        self
    }

    fn resolved_widths(&self) -> Vec<f32> {
        if self.column_widths.len() == self.head.len() {
            return self.column_widths.clone();
        }
        let columns = self.head.len().max(1) as f32;
        let even = (PAGE_WIDTH - 2.0 * TABLE_MARGIN) / columns;
        vec![even; self.head.len()]
    }

    /// Height of one row in millimetres.
    pub fn row_height(&self) -> f32 {
        self.font_size * PT_TO_MM * LINE_HEIGHT + 2.0 * CELL_PADDING
    }
}

fn draw_row<C: ReportCanvas>(canvas: &mut C, cells: &[String], widths: &[f32], top: f32, height: f32, style: &TextStyle) {
    let baseline = top + height / 2.0 + style.size * PT_TO_MM * 0.35;
    let mut x = TABLE_MARGIN;
    for (cell, width) in cells.iter().zip(widths) {
        let text = fit_text(cell, style.size, width - 2.0 * CELL_PADDING);
        canvas.text(&text, x + CELL_PADDING, baseline, style);
        x += width;
    }
}

fn draw_header<C: ReportCanvas>(writer: &mut ReportWriter<C>, spec: &TableSpec, widths: &[f32], height: f32) {
    let total: f32 = widths.iter().sum();
    let top = writer.y();
    let style = TextStyle::new(spec.font_size, Rgb::WHITE).bold();
    let canvas = writer.canvas_mut();
    canvas.fill_rect(TABLE_MARGIN, top, total, height, spec.head_fill);
    draw_row(canvas, &spec.head, widths, top, height, &style);
    writer.set_y(top + height);
}

/// Draw `spec` starting at the cursor; the cursor ends on the table's bottom edge.
pub(super) fn draw<C: ReportCanvas>(writer: &mut ReportWriter<C>, spec: &TableSpec) {
    let widths = spec.resolved_widths();
    let total: f32 = widths.iter().sum();
    let height = spec.row_height();
    let bottom = PAGE_HEIGHT - BOTTOM_MARGIN;
    let body_style = TextStyle::new(spec.font_size, Rgb::TEXT);

    // Header plus at least one row must fit.
    if writer.y() + 2.0 * height > bottom {
        writer.new_page();
    }
    draw_header(writer, spec, &widths, height);

    for (i, row) in spec.body.iter().enumerate() {
        if writer.y() + height > bottom {
            writer.new_page();
            draw_header(writer, spec, &widths, height);
        }
        let top = writer.y();
        let canvas = writer.canvas_mut();
        if i % 2 == 1 {
            canvas.fill_rect(TABLE_MARGIN, top, total, height, Rgb::STRIPE);
        }
        draw_row(canvas, row, &widths, top, height, &body_style);
        writer.set_y(top + height);
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::*;
    use super::super::*;

    fn rows(n: usize) -> Vec<Vec<String>> {
        (0..n).map(|i| vec![format!("row {}", i), "x".to_string()]).collect()
    }

    #[test]
    fn test_short_table_fits_one_page() {
        let mut writer = ReportWriter::new(RecordingCanvas::default());
        writer.set_y(40.0);
        let spec = TableSpec::new(&["Metric", "Value"], rows(4));
        writer.table(&spec);
        assert_eq!(writer.pages(), 1);
        let expected = 40.0 + 5.0 * spec.row_height() + SECTION_GAP;
        assert!((writer.y() - expected).abs() < 1e-3);
    }

    #[test]
    fn test_long_table_repeats_header() {
        let mut writer = ReportWriter::new(RecordingCanvas::default());
        writer.set_y(40.0);
        let spec = TableSpec::new(&["Metric", "Value"], rows(60)).font_size(8.0);
        writer.table(&spec);
        let pages = writer.pages();
        assert!(pages > 1);

        let canvas = writer.canvas_mut();
        let headers = canvas.texts().iter().filter(|t| **t == "Metric").count();
        assert_eq!(headers, pages);
        assert!(canvas.texts().contains(&"row 59"));
        for op in &canvas.ops {
            if let Op::Rect { y, h, .. } = op {
                assert!(y + h <= PAGE_HEIGHT - BOTTOM_MARGIN + 1e-3);
            }
        }
    }

    #[test]
    fn test_table_near_bottom_moves_to_new_page() {
        let mut writer = ReportWriter::new(RecordingCanvas::default());
        writer.set_y(PAGE_HEIGHT - BOTTOM_MARGIN - 5.0);
        writer.table(&TableSpec::new(&["A"], rows(1)));
        assert_eq!(writer.pages(), 2);
    }

    #[test]
    fn test_explicit_widths_used_when_complete() {
        let spec = TableSpec::new(&["A", "B"], Vec::new()).widths(&[30.0, 50.0]);
        assert_eq!(spec.resolved_widths(), vec![30.0, 50.0]);
        let spec = TableSpec::new(&["A", "B"], Vec::new()).widths(&[30.0]);
        assert_eq!(spec.resolved_widths().len(), 2);
    }
}
