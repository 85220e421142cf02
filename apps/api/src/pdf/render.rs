//! Notes PDF renderer: A4 pages in Helvetica with greedy word-wrap.
//!
//! Pure and synchronous: call through `spawn_blocking` from async code.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream};
use thiserror::Error;

use crate::pdf::font_metrics::HELVETICA;

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("PDF encoding failed: {0}")]
    Encode(#[from] lopdf::Error),

    #[error("PDF write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Page geometry in PDF points.
#[derive(Debug, Clone, Copy)]
pub struct PageLayout {
    pub width: i64,
    pub height: i64,
    pub margin_left: i64,
    pub top: i64,
    pub bottom: i64,
    pub max_text_width: f32,
    pub title_size: i64,
    pub body_size: i64,
    pub leading: i64,
    pub title_gap: i64,
}

/// A4 portrait with a 30pt left margin and a 540pt text column.
pub const A4_NOTES_LAYOUT: PageLayout = PageLayout {
    width: 595,
    height: 842,
    margin_left: 30,
    top: 800,
    bottom: 40,
    max_text_width: 540.0,
    title_size: 18,
    body_size: 12,
    leading: 18,
    title_gap: 30,
};

pub const DEFAULT_TITLE: &str = "Notes";

const FONT_NAME: &str = "F1";

/// Renders `notes` under `title` into PDF bytes.
pub fn render_notes_pdf(title: &str, notes: &str, layout: &PageLayout) -> Result<Vec<u8>, PdfError> {
    let pages = lay_out_pages(title, notes, layout);

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { FONT_NAME => font_id },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for operations in pages {
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
        let page_id: ObjectId = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let page_count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), layout.width.into(), layout.height.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)?;
    Ok(bytes)
}

/// Positions the title and wrapped body lines, one operation list per page.
fn lay_out_pages(title: &str, notes: &str, layout: &PageLayout) -> Vec<Vec<Operation>> {
    let body_width_em = layout.max_text_width / layout.body_size as f32;

    let mut pages = Vec::new();
    let mut current = Vec::new();
    let mut y = layout.top;

    draw_text(&mut current, &to_printable(title), layout.margin_left, y, layout.title_size);
    y -= layout.title_gap;

    for source_line in notes.lines() {
        let printable = to_printable(source_line);
        for line in HELVETICA.wrap_line(&printable, body_width_em) {
            if y < layout.bottom {
                pages.push(std::mem::take(&mut current));
                y = layout.top;
            }
            if !line.is_empty() {
                draw_text(&mut current, &line, layout.margin_left, y, layout.body_size);
            }
            y -= layout.leading;
        }
    }

    pages.push(current);
    pages
}

fn draw_text(ops: &mut Vec<Operation>, text: &str, x: i64, y: i64, size: i64) {
    ops.push(Operation::new("BT", vec![]));
    ops.push(Operation::new("Tf", vec![FONT_NAME.into(), size.into()]));
    ops.push(Operation::new("Td", vec![x.into(), y.into()]));
    ops.push(Operation::new("Tj", vec![Object::string_literal(text)]));
    ops.push(Operation::new("ET", vec![]));
}

/// Maps text onto what a base-14 font can show: common typographic marks are
/// transliterated, tabs become four spaces, anything else non-ASCII becomes '?'.
pub fn to_printable(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            ' '..='~' => out.push(c),
            '\t' => out.push_str("    "),
            '•' | '‣' | '◦' | '▪' | '–' | '—' | '−' => out.push('-'),
            '‘' | '’' => out.push('\''),
            '“' | '”' => out.push('"'),
            '…' => out.push_str("..."),
            '\u{a0}' => out.push(' '),
            c if c.is_control() => {}
            _ => out.push('?'),
        }
    }
    out
}
