use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream, StringFormat};

use crate::error::ExportError;

const PAGE_WIDTH: f32 = 595.0;
const PAGE_HEIGHT: f32 = 842.0;
const MARGIN: f32 = 48.0;

const TITLE_SIZE: f32 = 18.0;
const BODY_SIZE: f32 = 12.0;
const LINE_SPACING: f32 = 1.4;

/// Rough Helvetica advance width, in ems, used for wrapping.
const AVG_CHAR_EM: f32 = 0.52;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Font {
    Regular,
    Bold,
}

impl Font {
    fn resource(self) -> &'static str {
        match self {
            Font::Regular => "F1",
            Font::Bold => "F2",
        }
    }
}

struct Line {
    text: String,
    font: Font,
    size: f32,
    centered: bool,
}

/// Typeset rendered report text as an A4 PDF.
///
/// `# ` lines become the centred title, `## ` lines bold headings, blank
/// lines vertical space. Long lines wrap at word boundaries.
pub fn generate_pdf(rendered: &str) -> Result<Vec<u8>, ExportError> {
    let lines = layout(rendered);
    let pages = paginate(&lines);

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let regular_id = doc.add_object(font_dictionary("Helvetica"));
    let bold_id = doc.add_object(font_dictionary("Helvetica-Bold"));
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            Font::Regular.resource() => regular_id,
            Font::Bold.resource() => bold_id,
        },
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
            "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)
        .map_err(|e| ExportError::Pdf(e.to_string()))?;

    tracing::debug!(pages = page_count, bytes = bytes.len(), "generated report PDF");
    Ok(bytes)
}

fn font_dictionary(base: &str) -> lopdf::Dictionary {
    dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => base,
        "Encoding" => "WinAnsiEncoding",
    }
}

fn layout(rendered: &str) -> Vec<Line> {
    let mut lines = Vec::new();
    for raw in rendered.lines() {
        let (text, font, size, centered) = if let Some(title) = raw.strip_prefix("# ") {
            (title, Font::Bold, TITLE_SIZE, true)
        } else if let Some(heading) = raw.strip_prefix("## ") {
            (heading, Font::Bold, BODY_SIZE, false)
        } else {
            (raw, Font::Regular, BODY_SIZE, false)
        };

        let width = max_chars(size, PAGE_WIDTH - 2.0 * MARGIN);
        for chunk in wrap(text.trim_end(), width) {
            lines.push(Line {
                text: chunk,
                font,
                size,
                centered,
            });
        }
    }
    lines
}

fn max_chars(size: f32, width: f32) -> usize {
    ((width / (size * AVG_CHAR_EM)) as usize).max(1)
}

/// Greedy word wrap. Always yields at least one (possibly empty) line.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut out = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if !current.is_empty() {
                out.push(std::mem::take(&mut current));
            }
            out.push(word.drain(..width).collect());
        }
        let word: String = word.into_iter().collect();
        if word.is_empty() {
            continue;
        }

        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            out.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&word);
    }

    if !current.is_empty() || out.is_empty() {
        out.push(current);
    }
    out
}

fn paginate(lines: &[Line]) -> Vec<Vec<Operation>> {
    let mut pages = Vec::new();
    let mut ops = Vec::new();
    let mut y = PAGE_HEIGHT - MARGIN;

    for line in lines {
        let advance = line.size * LINE_SPACING;
        if y - advance < MARGIN && !ops.is_empty() {
            pages.push(std::mem::take(&mut ops));
            y = PAGE_HEIGHT - MARGIN;
        }
        y -= advance;

        if line.text.is_empty() {
            continue;
        }

        let x = if line.centered {
            let estimated = line.text.chars().count() as f32 * line.size * AVG_CHAR_EM;
            ((PAGE_WIDTH - estimated) / 2.0).max(MARGIN)
        } else {
            MARGIN
        };

        ops.extend([
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec![line.font.resource().into(), line.size.into()]),
            Operation::new("Td", vec![x.into(), y.into()]),
            Operation::new("Tj", vec![Object::String(win_ansi(&line.text), StringFormat::Literal)]),
            Operation::new("ET", vec![]),
        ]);
    }

    if !ops.is_empty() || pages.is_empty() {
        pages.push(ops);
    }
    pages
}

/// Encode for the standard fonts' WinAnsiEncoding. Unmappable
/// characters become `?`.
pub fn win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\u{20}'..='\u{7e}' | '\u{a0}'..='\u{ff}' => c as u8,
            '€' => 0x80,
            '…' => 0x85,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            'œ' => 0x9c,
            'Œ' => 0x8c,
            _ => b'?',
        })
        .collect()
}
