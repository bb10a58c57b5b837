//! Minimal SVG fragment writer.
//!
//! Engines append shape primitives in draw order; SVG paints later elements
//! over earlier ones, so append order is the occlusion order. Text content is
//! XML-escaped here so engines never hand-build markup.

use std::fmt::Write as _;

/// Ordered SVG markup under construction.
#[derive(Debug, Default, Clone)]
pub struct SvgFragment {
    buf: String,
}

impl SvgFragment {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rect(&mut self, x: f64, y: f64, width: f64, height: f64, fill: &str) {
        let _ = writeln!(
            self.buf,
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{fill}"/>"#,
            fmt(x),
            fmt(y),
            fmt(width),
            fmt(height),
        );
    }

    pub fn circle(&mut self, cx: f64, cy: f64, r: f64, fill: &str) {
        let _ = writeln!(
            self.buf,
            r#"<circle cx="{}" cy="{}" r="{}" fill="{fill}"/>"#,
            fmt(cx),
            fmt(cy),
            fmt(r),
        );
    }

    pub fn circle_outline(&mut self, cx: f64, cy: f64, r: f64, stroke: &str, stroke_width: f64) {
        let _ = writeln!(
            self.buf,
            r#"<circle cx="{}" cy="{}" r="{}" fill="none" stroke="{stroke}" stroke-width="{}"/>"#,
            fmt(cx),
            fmt(cy),
            fmt(r),
            fmt(stroke_width),
        );
    }

    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke: &str, stroke_width: f64) {
        let _ = writeln!(
            self.buf,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{stroke}" stroke-width="{}"/>"#,
            fmt(x1),
            fmt(y1),
            fmt(x2),
            fmt(y2),
            fmt(stroke_width),
        );
    }

    pub fn fill_path(&mut self, d: &str, fill: &str, fill_opacity: f64) {
        let _ = writeln!(
            self.buf,
            r#"<path d="{d}" fill="{fill}" fill-opacity="{}"/>"#,
            fmt(fill_opacity),
        );
    }

    pub fn stroke_path(&mut self, d: &str, stroke: &str, stroke_width: f64) {
        let _ = writeln!(
            self.buf,
            r#"<path d="{d}" fill="none" stroke="{stroke}" stroke-width="{}"/>"#,
            fmt(stroke_width),
        );
    }

    pub fn filled_path(&mut self, d: &str, fill: &str) {
        let _ = writeln!(self.buf, r#"<path d="{d}" fill="{fill}"/>"#);
    }

    pub fn polygon(
        &mut self,
        points: &[(f64, f64)],
        fill: &str,
        fill_opacity: f64,
        stroke: &str,
        stroke_width: f64,
    ) {
        let mut list = String::new();
        for (index, (x, y)) in points.iter().enumerate() {
            if index > 0 {
                list.push(' ');
            }
            let _ = write!(list, "{},{}", fmt(*x), fmt(*y));
        }
        let _ = writeln!(
            self.buf,
            r#"<polygon points="{list}" fill="{fill}" fill-opacity="{}" stroke="{stroke}" stroke-width="{}"/>"#,
            fmt(fill_opacity),
            fmt(stroke_width),
        );
    }

    pub fn text(&mut self, x: f64, y: f64, class: &str, content: &str) {
        let _ = writeln!(
            self.buf,
            r#"<text x="{}" y="{}" class="{class}">{}</text>"#,
            fmt(x),
            fmt(y),
            escape_text(content),
        );
    }

    pub fn text_anchored(&mut self, x: f64, y: f64, class: &str, anchor: &str, content: &str) {
        let _ = writeln!(
            self.buf,
            r#"<text x="{}" y="{}" class="{class}" text-anchor="{anchor}">{}</text>"#,
            fmt(x),
            fmt(y),
            escape_text(content),
        );
    }

    /// Text rotated `angle` degrees around its own anchor point.
    pub fn text_rotated(&mut self, x: f64, y: f64, class: &str, angle: f64, content: &str) {
        let _ = writeln!(
            self.buf,
            r#"<text x="{x}" y="{y}" class="{class}" transform="rotate({a} {x} {y})">{}</text>"#,
            escape_text(content),
            x = fmt(x),
            y = fmt(y),
            a = fmt(angle),
        );
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.buf
    }
}

/// Escapes text content for embedding in SVG markup.
#[must_use]
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Fixed-width coordinate formatting: integral values print without a
/// fractional part, everything else with two decimals. Keeps documents
/// byte-identical across runs for identical input.
#[must_use]
pub fn fmt(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{}", value.round() as i64)
    } else {
        format!("{value:.2}")
    }
}

/// Value-label formatting: integers as integers, otherwise one decimal.
#[must_use]
pub fn fmt_value(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{}", value.round() as i64)
    } else {
        format!("{value:.1}")
    }
}
