//! Document construction and rendering.
//!
//! [`ResumeBuilder`] turns a [`Resume`] block sequence into a `genpdf::Document`, lets `genpdf`
//! paginate it, and returns the PDF bytes together with the page bookkeeping gathered by the page
//! decorator.

use std::fs;
use std::path::Path;

use genpdf::elements::Paragraph;
use genpdf::error::Error;
use genpdf::style;
use genpdf::{self, Element, Margins, PageDecorator, Size};
use log::{debug, info};

use crate::elements::{self, PageTracker, SectionAnchor, VerticalSpace};
use crate::error::ResumeError;
use crate::fonts;
use crate::model::{Block, Resume, RichParagraph};
use crate::style::{self as presets, StyleRole};

/// File written when no other path is given.
pub const DEFAULT_OUTPUT_PATH: &str = "resume.pdf";

/// US Letter page size, in inches.
pub const PAGE_SIZE_INCHES: (f64, f64) = (8.5, 11.0);

/// Page margin on all four sides, in inches.
pub const PAGE_MARGIN_INCHES: f64 = 0.5;

/// Output of a successful render.
#[derive(Clone, Debug)]
pub struct RenderedPdf {
    /// The complete PDF file.
    pub bytes: Vec<u8>,
    /// Number of pages produced by the layout engine.
    pub page_count: usize,
    /// Page on which each section heading was drawn, in section order.
    pub section_pages: Vec<Option<usize>>,
}

/// Builder for the resume document, pre-configured with US Letter paper and half-inch margins.
pub struct ResumeBuilder {
    resume: Resume,
    paper_size: Size,
    margins: Margins,
}

impl Default for ResumeBuilder {
    fn default() -> Self {
        Self::new(Resume::standard())
    }
}

impl ResumeBuilder {
    /// Creates a builder for `resume` with the default page setup.
    pub fn new(resume: Resume) -> Self {
        // genpdf's `PaperSize::Letter` is rounded to whole millimetres.
        let (width, height) = PAGE_SIZE_INCHES;
        Self {
            resume,
            paper_size: Size::new(elements::inches(width), elements::inches(height)),
            margins: Margins::all(elements::inches(PAGE_MARGIN_INCHES)),
        }
    }

    fn build_document(&self, tracker: &PageTracker) -> Result<genpdf::Document, ResumeError> {
        let font_family = fonts::default_font_family().map_err(ResumeError::FontLoad)?;
        let mut document = genpdf::Document::new(font_family);
        document.set_title(self.resume.title());
        document.set_paper_size(self.paper_size);
        document.set_page_decorator(CountingPageDecorator::new(self.margins, tracker.clone()));

        for block in self.resume.blocks() {
            match block {
                Block::Paragraph(paragraph) => push_paragraph(&mut document, paragraph, tracker),
                Block::Spacer(height) => {
                    document.push(VerticalSpace::new(elements::points(*height)))
                }
            }
        }

        Ok(document)
    }

    /// Lays out the document and returns the rendered bytes.
    pub fn render(self) -> Result<RenderedPdf, ResumeError> {
        let tracker = PageTracker::new();
        let document = self.build_document(&tracker)?;

        let mut bytes = Vec::new();
        document.render(&mut bytes).map_err(ResumeError::Render)?;

        let rendered = RenderedPdf {
            bytes,
            page_count: tracker.page_count(),
            section_pages: tracker.section_pages(),
        };
        debug!(
            "rendered {} bytes on {} pages",
            rendered.bytes.len(),
            rendered.page_count
        );
        Ok(rendered)
    }

    /// Renders the document and adds an outline entry for every section heading.
    #[cfg(feature = "bookmarks")]
    pub fn render_with_bookmarks(self) -> Result<RenderedPdf, ResumeError> {
        let titles = self.resume.section_titles().to_vec();
        let mut rendered = self.render()?;
        rendered.bytes = crate::bookmarks::apply_section_bookmarks(
            &rendered.bytes,
            &titles,
            &rendered.section_pages,
        )?;
        Ok(rendered)
    }

    /// Renders the document and writes it to `path`, replacing any existing file.
    pub fn write_to(self, path: impl AsRef<Path>) -> Result<RenderedPdf, ResumeError> {
        let rendered = self.render()?;
        write_rendered(&rendered, path.as_ref())?;
        Ok(rendered)
    }

    /// Like [`ResumeBuilder::write_to`], with section bookmarks.
    #[cfg(feature = "bookmarks")]
    pub fn write_with_bookmarks_to(
        self,
        path: impl AsRef<Path>,
    ) -> Result<RenderedPdf, ResumeError> {
        let rendered = self.render_with_bookmarks()?;
        write_rendered(&rendered, path.as_ref())?;
        Ok(rendered)
    }
}

fn write_rendered(rendered: &RenderedPdf, path: &Path) -> Result<(), ResumeError> {
    fs::write(path, &rendered.bytes)?;
    info!(
        "wrote {} ({} bytes, {} pages)",
        path.display(),
        rendered.bytes.len(),
        rendered.page_count
    );
    Ok(())
}

fn push_paragraph(
    document: &mut genpdf::Document,
    paragraph: &RichParagraph,
    tracker: &PageTracker,
) {
    let spec = presets::preset(paragraph.role());

    let mut element = Paragraph::default();
    for span in paragraph.spans() {
        element.push(span);
    }
    element.set_alignment(spec.alignment.into());
    let element = element.styled(spec.text_style());

    // Padding reports its height even when the paragraph is deferred, so anchor inside it.
    if paragraph.role() == StyleRole::SectionHeading {
        document.push(SectionAnchor::new(element, tracker).padded(spec.padding()));
    } else {
        document.push(element.padded(spec.padding()));
    }
}

/// Applies the page margins and counts pages as the layout engine starts them.
struct CountingPageDecorator {
    margins: Margins,
    tracker: PageTracker,
}

impl CountingPageDecorator {
    fn new(margins: Margins, tracker: PageTracker) -> Self {
        Self { margins, tracker }
    }
}

impl PageDecorator for CountingPageDecorator {
    fn decorate_page<'a>(
        &mut self,
        _context: &genpdf::Context,
        mut area: genpdf::render::Area<'a>,
        _style: style::Style,
    ) -> Result<genpdf::render::Area<'a>, Error> {
        let page = self.tracker.start_page();
        debug!("starting page {}", page);
        area.add_margins(self.margins);
        Ok(area)
    }
}
