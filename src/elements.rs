//! Custom `genpdf` elements used by the resume layout.
//!
//! `genpdf` ships paragraphs and padding but no fixed-height spacer, and it does not report where
//! elements end up once pagination is done.  [`VerticalSpace`] fills the first gap and
//! [`SectionAnchor`] together with [`PageTracker`] fills the second.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use genpdf::error::Error;
use genpdf::style::Style;
use genpdf::{render, Element, Mm, RenderResult, Size};

const POINTS_PER_INCH: f64 = 72.0;

/// Converts typographic points into `genpdf` millimetres.
pub fn points(value: f64) -> Mm {
    Mm::from(printpdf::Mm::from(printpdf::Pt(value)))
}

/// Converts inches into `genpdf` millimetres.
pub fn inches(value: f64) -> Mm {
    points(value * POINTS_PER_INCH)
}

/// Fixed-height vertical gap between blocks.
///
/// A gap that does not fit on the current page is clipped to the remaining height and never
/// carried over to the next page.
#[derive(Clone, Copy, Debug)]
pub struct VerticalSpace {
    height: Mm,
}

impl VerticalSpace {
    /// Creates a gap of the given height.
    pub fn new(height: impl Into<Mm>) -> Self {
        Self {
            height: height.into(),
        }
    }
}

impl Element for VerticalSpace {
    fn render(
        &mut self,
        _context: &genpdf::Context,
        area: render::Area<'_>,
        _style: Style,
    ) -> Result<RenderResult, Error> {
        let available = area.size().height;
        let height = if self.height > available {
            available
        } else {
            self.height
        };

        let mut result = RenderResult::default();
        result.size = Size::new(0, height);
        Ok(result)
    }
}

/// Page bookkeeping shared between the page decorator and the section anchors.
///
/// Rendering is single-threaded, so the state is shared through `Rc` handles; cloning a tracker
/// yields another handle to the same counters.
#[derive(Clone, Debug, Default)]
pub struct PageTracker {
    current: Rc<Cell<usize>>,
    section_pages: Rc<RefCell<Vec<Option<usize>>>>,
}

impl PageTracker {
    /// Creates a tracker with no pages and no registered sections.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances to the next page and returns its 1-based number.
    pub fn start_page(&self) -> usize {
        let page = self.current.get() + 1;
        self.current.set(page);
        page
    }

    /// Number of the page currently being laid out, or zero before the first page.
    pub fn current_page(&self) -> usize {
        self.current.get()
    }

    /// Total number of pages started so far.
    pub fn page_count(&self) -> usize {
        self.current.get()
    }

    /// Reserves a slot for a new section and returns its index.
    pub fn register_section(&self) -> usize {
        let mut pages = self.section_pages.borrow_mut();
        pages.push(None);
        pages.len() - 1
    }

    /// Records the current page for `index` unless a page was already recorded.
    pub fn record(&self, index: usize) {
        let page = self.current_page();
        if let Some(slot) = self.section_pages.borrow_mut().get_mut(index) {
            slot.get_or_insert(page);
        }
    }

    /// Snapshot of the page recorded for each registered section.
    pub fn section_pages(&self) -> Vec<Option<usize>> {
        self.section_pages.borrow().clone()
    }
}

/// Wraps an element and records the page on which it is first drawn.
///
/// An attempt that draws nothing (for example because the page is full and the element is
/// deferred to the next one) does not count.
pub struct SectionAnchor<E> {
    inner: E,
    index: usize,
    tracker: PageTracker,
}

impl<E: Element> SectionAnchor<E> {
    /// Registers a new section on `tracker` and wraps `inner`.
    pub fn new(inner: E, tracker: &PageTracker) -> Self {
        Self {
            inner,
            index: tracker.register_section(),
            tracker: tracker.clone(),
        }
    }

    /// Index of the section slot this anchor writes to.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl<E: Element> Element for SectionAnchor<E> {
    fn render(
        &mut self,
        context: &genpdf::Context,
        area: render::Area<'_>,
        style: Style,
    ) -> Result<RenderResult, Error> {
        let result = self.inner.render(context, area, style)?;
        if result.size.height > Mm::default() {
            self.tracker.record(self.index);
        }
        Ok(result)
    }
}
