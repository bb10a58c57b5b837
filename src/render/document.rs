//! Document Assembler.
//!
//! Wraps one engine fragment into a complete, self-contained SVG document:
//! XML declaration, sized root element, embedded style block, background,
//! centered title, the fragment, and the fixed footer notice.

use std::fmt::Write as _;

use crate::core::ChartOptions;
use crate::render::svg::{escape_text, fmt};

/// Fixed footer literal every produced document carries.
pub const FOOTER_NOTICE: &str = "Generated locally - No remote uploads";

/// Embedded stylesheet. Only text classes are styled; shape elements keep
/// their inline fill/stroke attributes authoritative, so no class can
/// override a per-shape color (e.g. scatter point fills).
const STYLE_BLOCK: &str = "\
.chart-title { font: bold 18px sans-serif; text-anchor: middle; fill: #333333; }
.axis-title { font: 13px sans-serif; text-anchor: middle; fill: #555555; }
.axis-label { font: 12px sans-serif; text-anchor: middle; fill: #666666; }
.value-label { font: 11px sans-serif; text-anchor: middle; fill: #333333; }
.legend-label { font: 12px sans-serif; fill: #333333; }
.placeholder { font: 14px sans-serif; text-anchor: middle; fill: #999999; }
.footer-note { font: 10px sans-serif; text-anchor: middle; fill: #bbbbbb; }";

/// Assembles the final document around a rendered fragment.
///
/// `tag` is the raw request type tag; when `options.title` is absent the
/// title defaults to the tag title-cased plus `" Chart"`.
#[must_use]
pub fn assemble_document(tag: &str, options: &ChartOptions, fragment: &str) -> String {
    let width = options.width;
    let height = options.height;
    let title = options
        .title
        .clone()
        .unwrap_or_else(|| default_title(tag));

    let mut doc = String::with_capacity(fragment.len() + 1024);
    doc.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    let _ = writeln!(
        doc,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = fmt(width),
        h = fmt(height),
    );
    let _ = writeln!(doc, "<style>\n{STYLE_BLOCK}\n</style>");
    let _ = writeln!(
        doc,
        r##"<rect x="0" y="0" width="{}" height="{}" fill="#ffffff"/>"##,
        fmt(width),
        fmt(height),
    );
    let _ = writeln!(
        doc,
        r#"<text x="{}" y="30" class="chart-title">{}</text>"#,
        fmt(width / 2.0),
        escape_text(&title),
    );
    doc.push_str(fragment);
    if !fragment.ends_with('\n') {
        doc.push('\n');
    }
    let _ = writeln!(
        doc,
        r#"<text x="{}" y="{}" class="footer-note">{FOOTER_NOTICE}</text>"#,
        fmt(width / 2.0),
        fmt(height - 8.0),
    );
    doc.push_str("</svg>\n");
    doc
}

/// Title-cases a type tag, preserving hyphens: `"dual-axes"` -> `"Dual-Axes"`.
#[must_use]
pub fn default_title(tag: &str) -> String {
    let mut out = String::with_capacity(tag.len() + 6);
    let mut at_word_start = true;
    for ch in tag.chars() {
        if at_word_start {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        at_word_start = ch == ' ' || ch == '-' || ch == '_';
    }
    out.push_str(" Chart");
    out
}
