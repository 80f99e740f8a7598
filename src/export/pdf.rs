//! PDF rendering with printpdf's builtin Helvetica faces.

use super::layout::{paginate, Block, PageGeometry, TextStyle, MM_PER_PT};
use crate::error::{Result, VidsumError};
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference};
use tracing::debug;

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    oblique: IndirectFontRef,
}

impl Fonts {
    fn load(doc: &PdfDocumentReference) -> Result<Self> {
        let font = |f: BuiltinFont| {
            doc.add_builtin_font(f)
                .map_err(|e| VidsumError::Export(format!("failed to load font: {}", e)))
        };
        Ok(Self {
            regular: font(BuiltinFont::Helvetica)?,
            bold: font(BuiltinFont::HelveticaBold)?,
            oblique: font(BuiltinFont::HelveticaOblique)?,
        })
    }

    fn for_style(&self, style: TextStyle) -> &IndirectFontRef {
        match style {
            TextStyle::Title | TextStyle::Heading => &self.bold,
            TextStyle::Body => &self.regular,
            TextStyle::Meta => &self.oblique,
        }
    }
}

/// Builtin fonts only cover Latin-1. Common typographic characters are mapped
/// to ASCII and anything else becomes `?`.
pub(crate) fn to_latin1(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\u{2018}' | '\u{2019}' | '\u{201A}' => out.push('\''),
            '\u{201C}' | '\u{201D}' | '\u{201E}' => out.push('"'),
            '\u{2013}' | '\u{2014}' => out.push('-'),
            '\u{2022}' => out.push('*'),
            '\u{2026}' => out.push_str("..."),
            '\u{00A0}' | '\t' => out.push(' '),
            '\n' => out.push('\n'),
            c if c.is_control() => {}
            c if (c as u32) <= 0xFF => out.push(c),
            _ => out.push('?'),
        }
    }
    out
}

fn pt_to_mm(pt: f32) -> Mm {
    Mm(pt * MM_PER_PT)
}

/// Render styled blocks into PDF bytes.
pub fn render_pdf(title: &str, blocks: &[Block], geometry: &PageGeometry) -> Result<Vec<u8>> {
    let blocks: Vec<Block> = blocks
        .iter()
        .map(|b| Block::new(b.style, to_latin1(&b.text)))
        .collect();
    let pages = paginate(&blocks, geometry);

    let width = pt_to_mm(geometry.width);
    let height = pt_to_mm(geometry.height);
    let (doc, first_page, first_layer) = PdfDocument::new(title, width, height, "Page 1");
    let fonts = Fonts::load(&doc)?;

    for (index, lines) in pages.iter().enumerate() {
        let (page, layer) = if index == 0 {
            (first_page, first_layer)
        } else {
            doc.add_page(width, height, format!("Page {}", index + 1))
        };
        let layer = doc.get_page(page).get_layer(layer);

        for line in lines {
            layer.use_text(
                line.text.as_str(),
                line.style.font_size(),
                pt_to_mm(line.x),
                pt_to_mm(line.y),
                fonts.for_style(line.style),
            );
        }
    }

    debug!("Rendered PDF with {} pages", pages.len());

    doc.save_to_bytes()
        .map_err(|e| VidsumError::Export(format!("failed to serialize PDF: {}", e)))
}
