//! Section outline injected into a rendered resume with `lopdf`.
//!
//! `genpdf` cannot emit document outlines, so the rendered bytes are reopened and a flat
//! `/Outlines` tree with one entry per section heading is added to the catalog.

use std::collections::BTreeMap;
use std::fmt;
use std::io;

use lopdf::{Dictionary, Document, Object, ObjectId};

/// Failure while adding the section outline.
#[derive(Debug)]
pub enum OutlineError {
    /// The rendered bytes could not be reopened.
    Load(lopdf::Error),
    /// The document has no usable `/Root` catalog.
    NoCatalog(lopdf::Error),
    /// A heading was recorded on a page the document does not have.
    PageOutOfRange {
        /// Heading text of the section.
        heading: String,
        /// 1-based page number recorded for the heading.
        page: usize,
    },
    /// The updated document could not be serialized.
    Save(io::Error),
}

impl fmt::Display for OutlineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load(_) => write!(f, "rendered PDF could not be reopened"),
            Self::NoCatalog(_) => write!(f, "rendered PDF has no document catalog"),
            Self::PageOutOfRange { heading, page } => {
                write!(f, "heading {heading:?} points at page {page}, which was not rendered")
            }
            Self::Save(_) => write!(f, "outlined PDF could not be written"),
        }
    }
}

impl std::error::Error for OutlineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Load(err) | Self::NoCatalog(err) => Some(err),
            Self::Save(err) => Some(err),
            Self::PageOutOfRange { .. } => None,
        }
    }
}

struct OutlineItem<'a> {
    id: ObjectId,
    heading: &'a str,
    page: ObjectId,
}

/// Returns `pdf_bytes` with an outline entry for every heading that has a recorded page.
///
/// `headings` and `section_pages` are paired by position.  Headings without a page get no entry;
/// if none has one the input is returned as is.
pub fn apply_section_bookmarks(
    pdf_bytes: &[u8],
    headings: &[String],
    section_pages: &[Option<usize>],
) -> Result<Vec<u8>, OutlineError> {
    let mut document = Document::load_mem(pdf_bytes).map_err(OutlineError::Load)?;
    let page_ids = document.get_pages();

    let items = outline_items(&mut document, &page_ids, headings, section_pages)?;
    if items.is_empty() {
        return Ok(pdf_bytes.to_vec());
    }

    let root_id = document.new_object_id();
    for (position, item) in items.iter().enumerate() {
        let mut entry = Dictionary::new();
        entry.set("Title", Object::string_literal(item.heading));
        entry.set("Parent", Object::Reference(root_id));
        entry.set(
            "Dest",
            Object::Array(vec![Object::Reference(item.page), Object::Name(b"Fit".to_vec())]),
        );
        if let Some(previous) = position.checked_sub(1).and_then(|index| items.get(index)) {
            entry.set("Prev", Object::Reference(previous.id));
        }
        if let Some(next) = items.get(position + 1) {
            entry.set("Next", Object::Reference(next.id));
        }
        document.objects.insert(item.id, Object::Dictionary(entry));
    }

    let mut root = Dictionary::new();
    root.set("Type", Object::Name(b"Outlines".to_vec()));
    root.set("Count", Object::Integer(items.len() as i64));
    if let (Some(first), Some(last)) = (items.first(), items.last()) {
        root.set("First", Object::Reference(first.id));
        root.set("Last", Object::Reference(last.id));
    }
    document.objects.insert(root_id, Object::Dictionary(root));

    document
        .catalog_mut()
        .map_err(OutlineError::NoCatalog)?
        .set("Outlines", Object::Reference(root_id));

    let mut bytes = Vec::with_capacity(pdf_bytes.len());
    document.save_to(&mut bytes).map_err(OutlineError::Save)?;
    Ok(bytes)
}

fn outline_items<'a>(
    document: &mut Document,
    page_ids: &BTreeMap<u32, ObjectId>,
    headings: &'a [String],
    section_pages: &[Option<usize>],
) -> Result<Vec<OutlineItem<'a>>, OutlineError> {
    let mut items = Vec::new();
    for (heading, page) in headings.iter().zip(section_pages) {
        let Some(page) = *page else {
            continue;
        };
        let page_id = u32::try_from(page)
            .ok()
            .and_then(|number| page_ids.get(&number))
            .copied()
            .ok_or_else(|| OutlineError::PageOutOfRange {
                heading: heading.clone(),
                page,
            })?;
        items.push(OutlineItem {
            id: document.new_object_id(),
            heading,
            page: page_id,
        });
    }
    Ok(items)
}
