//! PDF report exporter
//!
//! Reports are written top to bottom through a [`ReportWriter`], which keeps
//! the page cursor and breaks pages. Drawing goes through the [`ReportCanvas`]
//! trait so the pipelines can be exercised without a PDF backend.
//!
//! All coordinates are millimetres from the top-left corner of an A4
//! landscape page.

pub mod clusters;
pub mod dashboard;
pub mod pdf;
pub mod table;

pub use clusters::{build_client_cluster_report, build_product_cluster_report};
pub use dashboard::build_dashboard_report;
pub use pdf::PdfCanvas;
pub use table::TableSpec;

use crate::charts::{hex_to_rgb, BarSeries, ChartId};
use crate::error::ReportError;
use crate::format::{truncate, NumberLocale};

// =============================================================================
// Page Geometry
// =============================================================================

pub const PAGE_WIDTH: f32 = 297.0;
pub const PAGE_HEIGHT: f32 = 210.0;
/// Left edge of headings and charts.
pub const MARGIN_X: f32 = 20.0;
/// Left and right edge of tables.
pub const TABLE_MARGIN: f32 = 14.0;
/// Tables never draw below this line.
pub const BOTTOM_MARGIN: f32 = 14.0;
/// A section starting below this line moves to a new page.
pub const PAGE_BREAK_Y: f32 = 180.0;
/// Cursor position on a fresh page.
pub const TOP_Y: f32 = 20.0;
/// Space left after a table.
pub const SECTION_GAP: f32 = 15.0;
pub const CHART_WIDTH: f32 = 257.0;
pub const CHART_HEIGHT: f32 = 80.0;
/// Cursor advance after a chart.
pub const CHART_ADVANCE: f32 = 90.0;
/// Cursor advance after a heading.
pub const HEADING_ADVANCE: f32 = 10.0;

/// Millimetres per typographic point.
pub const PT_TO_MM: f32 = 0.3528;

/// Rough Helvetica advance width, in ems.
const AVG_GLYPH_EM: f32 = 0.52;

/// Approximate rendered width of `text` at `size` points.
pub fn text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * PT_TO_MM * AVG_GLYPH_EM
}

/// Longest prefix of `text` that fits in `width` millimetres.
pub fn fit_text(text: &str, size: f32, width: f32) -> String {
    let per_char = size * PT_TO_MM * AVG_GLYPH_EM;
    if per_char <= 0.0 {
        return text.to_string();
    }
    let max = (width / per_char).floor().max(0.0) as usize;
    truncate(text, max)
}

// =============================================================================
// Colors and Text
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const SKY: Rgb = Rgb(14, 165, 233);
    pub const NAVY: Rgb = Rgb(12, 74, 110);
    pub const GRAY: Rgb = Rgb(100, 100, 100);
    pub const BLUE: Rgb = Rgb(59, 130, 246);
    pub const CYAN: Rgb = Rgb(6, 182, 212);
    pub const TEXT: Rgb = Rgb(80, 80, 80);
    pub const STRIPE: Rgb = Rgb(245, 245, 245);
    pub const GRID: Rgb = Rgb(186, 230, 253);

    pub fn from_hex(hex: &str) -> Self {
        let (r, g, b) = hex_to_rgb(hex);
        Rgb(r, g, b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Font size in points.
    pub size: f32,
    pub bold: bool,
    pub color: Rgb,
}

impl TextStyle {
    pub fn new(size: f32, color: Rgb) -> Self {
        Self {
            size,
            bold: false,
            color,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

// =============================================================================
// Canvas
// =============================================================================

/// Drawing surface of a report. A new canvas already holds its first page.
pub trait ReportCanvas {
    fn add_page(&mut self);

    /// Filled rectangle with its top-left corner at `(x, y)`.
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgb);

    /// Single line of text with its baseline at `y`.
    fn text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle);

    /// Encode the finished document.
    fn finish(self) -> Result<Vec<u8>, ReportError>
    where
        Self: Sized;
}

/// Produces the bar series currently shown by a chart.
pub trait SnapshotSource {
    fn snapshot(&self, chart: ChartId) -> Result<BarSeries, ReportError>;
}

/// Values printed on every report.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportContext {
    pub generated_at: String,
    pub locale: NumberLocale,
}

// =============================================================================
// Writer
// =============================================================================

/// Heading sizes used in report bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    Section,
    Detail,
}

/// A canvas plus the vertical cursor shared by every report step.
pub struct ReportWriter<C: ReportCanvas> {
    canvas: C,
    y: f32,
    pages: usize,
}

impl<C: ReportCanvas> ReportWriter<C> {
    pub fn new(canvas: C) -> Self {
        Self {
            canvas,
            y: TOP_Y,
            pages: 1,
        }
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn set_y(&mut self, y: f32) {
        self.y = y;
    }

    pub fn pages(&self) -> usize {
        self.pages
    }

    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }

    pub fn new_page(&mut self) {
        self.canvas.add_page();
        self.pages += 1;
        self.y = TOP_Y;
    }

    /// Start a new page once the cursor has passed the break line.
    pub fn break_if_needed(&mut self) {
        if self.y > PAGE_BREAK_Y {
            self.new_page();
        }
    }

    /// Start a new page unless `height` more millimetres fit above the bottom margin.
    pub fn ensure_room(&mut self, height: f32) {
        if self.y + height > PAGE_HEIGHT - BOTTOM_MARGIN {
            self.new_page();
        }
    }

    fn centered(&mut self, text: &str, y: f32, style: TextStyle) {
        let x = (PAGE_WIDTH - text_width(text, style.size)) / 2.0;
        self.canvas.text(text, x.max(0.0), y, &style);
    }

    /// Full-bleed cover page, followed by a fresh page for the body.
    pub fn cover(&mut self, subtitle: &str, tagline: &str, ctx: &ReportContext) {
        self.canvas
            .fill_rect(0.0, 0.0, PAGE_WIDTH, PAGE_HEIGHT, Rgb::SKY);
        self.centered("Analytics Pro", 80.0, TextStyle::new(48.0, Rgb::WHITE).bold());
        self.centered(subtitle, 100.0, TextStyle::new(24.0, Rgb::WHITE));
        let generated = format!("Generated: {}", ctx.generated_at);
        self.centered(&generated, 130.0, TextStyle::new(14.0, Rgb::WHITE));
        self.centered(tagline, 145.0, TextStyle::new(14.0, Rgb::WHITE));
        self.new_page();
    }

    /// Title block at the top of the first body page.
    pub fn title(&mut self, title: &str, ctx: &ReportContext) {
        self.canvas
            .text(title, MARGIN_X, 20.0, &TextStyle::new(24.0, Rgb::SKY));
        let generated = format!("Generated: {}", ctx.generated_at);
        self.canvas
            .text(&generated, MARGIN_X, 30.0, &TextStyle::new(10.0, Rgb::GRAY));
        self.y = 40.0;
    }

    pub fn heading(&mut self, text: &str, kind: Heading) {
        let size = match kind {
            Heading::Section => 16.0,
            Heading::Detail => 14.0,
        };
        self.canvas
            .text(text, MARGIN_X, self.y, &TextStyle::new(size, Rgb::NAVY));
        self.y += HEADING_ADVANCE;
    }

    /// Draw a table at the cursor and leave the cursor below it.
    pub fn table(&mut self, spec: &TableSpec) {
        table::draw(self, spec);
        self.y += SECTION_GAP;
    }

    /// Heading followed by a table; the heading moves with the table's header and first row.
    pub fn heading_table(&mut self, text: &str, kind: Heading, spec: &TableSpec) {
        self.ensure_room(HEADING_ADVANCE + 2.0 * spec.row_height());
        self.heading(text, kind);
        self.table(spec);
    }

    /// Draw a captured chart at the cursor, on a new page if it would cross the bottom margin.
    pub fn chart(&mut self, series: &BarSeries) {
        self.ensure_room(CHART_HEIGHT);
        draw_chart(&mut self.canvas, series, MARGIN_X, self.y, CHART_WIDTH, CHART_HEIGHT);
        self.y += CHART_ADVANCE;
    }

    /// Heading followed by a chart, kept on the same page.
    pub fn heading_chart(&mut self, text: &str, kind: Heading, series: &BarSeries) {
        self.ensure_room(HEADING_ADVANCE + CHART_HEIGHT);
        self.heading(text, kind);
        self.chart(series);
    }

    pub fn finish(self) -> Result<Vec<u8>, ReportError> {
        self.canvas.finish()
    }
}

/// Vector rendering of a bar series inside the given box.
fn draw_chart<C: ReportCanvas>(canvas: &mut C, series: &BarSeries, x: f32, y: f32, w: f32, h: f32) {
    let label = TextStyle::new(6.0, Rgb::NAVY);
    let title = TextStyle::new(8.0, Rgb::NAVY).bold();

    let plot_x = x + 12.0;
    let plot_top = y + 8.0;
    let plot_w = w - 12.0;
    let plot_h = h - 20.0;
    let baseline = plot_top + plot_h;

    canvas.text(&series.y_title, x, y + 3.0, &title);
    canvas.fill_rect(plot_x, baseline, plot_w, 0.3, Rgb::GRID);

    if series.bars.is_empty() {
        canvas.text(series.empty_message, plot_x + 4.0, plot_top + plot_h / 2.0, &label);
        return;
    }

    let slot = plot_w / series.bars.len() as f32;
    let bar_w = slot * 0.7;
    for (i, (bar, pct)) in series.bars.iter().zip(series.heights_percent()).enumerate() {
        let bar_h = plot_h * (pct as f32) / 100.0;
        let bx = plot_x + slot * i as f32 + (slot - bar_w) / 2.0;
        canvas.fill_rect(bx, baseline - bar_h, bar_w, bar_h, Rgb::from_hex(bar.color));

        let caption = fit_text(&bar.caption, label.size, slot);
        canvas.text(&caption, bx, baseline - bar_h - 1.0, &label);
        let name = fit_text(&bar.label, label.size, slot);
        canvas.text(&name, bx, baseline + 4.0, &label);
    }

    let x_title_x = plot_x + (plot_w - text_width(&series.x_title, title.size)) / 2.0;
    canvas.text(&series.x_title, x_title_x, y + h - 2.0, &title);
}

// =============================================================================
// Test Support
// =============================================================================


#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;

    #[test]
    fn test_cover_then_title_page() {
        let mut writer = ReportWriter::new(RecordingCanvas::default());
        writer.cover("Profitability Dashboard", "Tagline", &context());
        writer.title("Profitability Dashboard", &context());
        assert_eq!(writer.pages(), 2);
        assert_eq!(writer.y(), 40.0);
        let canvas = writer.canvas_mut();
        assert_eq!(canvas.texts()[0], "Analytics Pro");
        assert!(canvas.texts().contains(&"Generated: 19/10/2026 10:00:00"));
    }

    #[test]
    fn test_break_only_past_line() {
        let mut writer = ReportWriter::new(RecordingCanvas::default());
        writer.set_y(PAGE_BREAK_Y);
        writer.break_if_needed();
        assert_eq!(writer.pages(), 1);
        writer.set_y(PAGE_BREAK_Y + 0.5);
        writer.break_if_needed();
        assert_eq!(writer.pages(), 2);
        assert_eq!(writer.y(), TOP_Y);
    }

    #[test]
    fn test_chart_advances_cursor() {
        let mut writer = ReportWriter::new(RecordingCanvas::default());
        writer.set_y(50.0);
        let mut series = BarSeries::new("Category", "Revenue ($)", "none");
        series.push(&crate::charts::SKY_PALETTE, "Hogar".to_string(), 10.0, "$10".to_string());
        writer.chart(&series);
        assert_eq!(writer.y(), 50.0 + CHART_ADVANCE);
        assert!(writer.canvas_mut().texts().contains(&"Hogar"));
    }

    fn bar_series() -> BarSeries {
        let mut series = BarSeries::new("Category", "Revenue ($)", "none");
        series.push(&crate::charts::SKY_PALETTE, "Hogar".to_string(), 10.0, "$10".to_string());
        series
    }

    fn lowest_rect_edge(canvas: &RecordingCanvas) -> f32 {
        canvas
            .ops
            .iter()
            .filter_map(|op| match op {
                Op::Rect { y, h, .. } => Some(y + h),
                _ => None,
            })
            .fold(0.0, f32::max)
    }

    #[test]
    fn test_chart_low_on_page_moves_to_new_page() {
        let mut writer = ReportWriter::new(RecordingCanvas::default());
        writer.set_y(PAGE_BREAK_Y - 5.0);
        writer.chart(&bar_series());
        assert_eq!(writer.pages(), 2);
        assert_eq!(writer.y(), TOP_Y + CHART_ADVANCE);
        let canvas = writer.canvas_mut();
        assert_eq!(canvas.page_count(), 2);
        assert!(lowest_rect_edge(canvas) <= PAGE_HEIGHT - BOTTOM_MARGIN);
    }

    #[test]
    fn test_heading_stays_with_its_table() {
        let mut writer = ReportWriter::new(RecordingCanvas::default());
        writer.set_y(PAGE_HEIGHT - BOTTOM_MARGIN - HEADING_ADVANCE - 2.0);
        let spec = TableSpec::new(&["Metric", "Value"], vec![vec!["a".to_string(), "1".to_string()]]);
        writer.heading_table("General Statistics", Heading::Section, &spec);
        assert_eq!(writer.pages(), 2);

        let canvas = writer.canvas_mut();
        let page_break = canvas.ops.iter().position(|op| *op == Op::Page).unwrap();
        let heading = canvas
            .ops
            .iter()
            .position(|op| matches!(op, Op::Text { text, .. } if text == "General Statistics"))
            .unwrap();
        assert!(heading > page_break);
    }

    #[test]
    fn test_heading_stays_with_its_chart() {
        let mut writer = ReportWriter::new(RecordingCanvas::default());
        writer.set_y(150.0);
        writer.heading_chart("Revenue by Category", Heading::Section, &bar_series());
        assert_eq!(writer.pages(), 2);
        assert_eq!(writer.y(), TOP_Y + HEADING_ADVANCE + CHART_ADVANCE);
    }

    #[test]
    fn test_fit_text() {
        assert_eq!(fit_text("abcdef", 10.0, 100.0), "abcdef");
        let fitted = fit_text("a very long product description", 10.0, 10.0);
        assert!(fitted.chars().count() < 10);
    }
}
