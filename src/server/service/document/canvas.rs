use printpdf::{
    BuiltinFont, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference,
    Point,
};

use crate::server::error::document::DocumentError;

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 20.0;
const FOOTER_Y: f32 = 20.0;
const ROW_HEIGHT: f32 = 8.0;

/// Single A4 page with absolute positioned text, written top to bottom.
pub(super) struct InvoiceCanvas {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    y: f32,
}

impl InvoiceCanvas {
    pub fn new(title: &str) -> Result<Self, DocumentError> {
        let (doc, page, layer) =
            PdfDocument::new(title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
        let layer = doc.get_page(page).get_layer(layer);
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| DocumentError::Font(e.to_string()))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| DocumentError::Font(e.to_string()))?;

        Ok(Self {
            doc,
            layer,
            regular,
            bold,
            y: PAGE_HEIGHT - MARGIN,
        })
    }

    /// Organizer banner, document title and invoice number / date.
    pub fn header(&mut self, title: &str, number: &str, issued_on: &str) {
        self.layer
            .use_text("TECHFEST", 22.0, Mm(MARGIN), Mm(self.y), &self.bold);
        self.layer.use_text(
            title,
            14.0,
            Mm(PAGE_WIDTH - MARGIN - 60.0),
            Mm(self.y),
            &self.bold,
        );
        self.y -= ROW_HEIGHT;
        self.layer.use_text(
            format!("No. {}", number),
            10.0,
            Mm(PAGE_WIDTH - MARGIN - 60.0),
            Mm(self.y),
            &self.regular,
        );
        self.y -= 6.0;
        self.layer.use_text(
            format!("Date: {}", issued_on),
            10.0,
            Mm(PAGE_WIDTH - MARGIN - 60.0),
            Mm(self.y),
            &self.regular,
        );
        self.y -= 6.0;
        self.rule();
    }

    pub fn section(&mut self, title: &str) {
        self.y -= 4.0;
        self.layer
            .use_text(title, 12.0, Mm(MARGIN), Mm(self.y), &self.bold);
        self.y -= ROW_HEIGHT;
    }

    pub fn row(&mut self, label: &str, value: &str) {
        self.layer
            .use_text(label, 10.0, Mm(MARGIN), Mm(self.y), &self.bold);
        self.layer
            .use_text(value, 10.0, Mm(MARGIN + 50.0), Mm(self.y), &self.regular);
        self.y -= ROW_HEIGHT;
    }

    pub fn total(&mut self, label: &str, amount: i32) {
        self.rule();
        self.layer.use_text(
            format!("{}: INR {}", label, amount),
            13.0,
            Mm(PAGE_WIDTH - MARGIN - 70.0),
            Mm(self.y),
            &self.bold,
        );
        self.y -= ROW_HEIGHT;
    }

    pub fn rule(&mut self) {
        let line = Line {
            points: vec![
                (Point::new(Mm(MARGIN), Mm(self.y)), false),
                (Point::new(Mm(PAGE_WIDTH - MARGIN), Mm(self.y)), false),
            ],
            is_closed: false,
        };
        self.layer.set_outline_thickness(0.5);
        self.layer.add_line(line);
        self.y -= ROW_HEIGHT;
    }

    /// Fixed footer near the bottom of the page, then serialization.
    pub fn finish(self, note: &str) -> Result<Vec<u8>, DocumentError> {
        self.layer.use_text(
            note,
            8.0,
            Mm(MARGIN),
            Mm(FOOTER_Y),
            &self.regular,
        );
        self.layer.use_text(
            "This is a computer generated document and does not require a signature.",
            8.0,
            Mm(MARGIN),
            Mm(FOOTER_Y - 5.0),
            &self.regular,
        );

        self.doc
            .save_to_bytes()
            .map_err(|e| DocumentError::Render(e.to_string()))
    }
}
