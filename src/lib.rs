//! Fixed two-page PDF resume rendered with `genpdf`.
//!
//! The content lives in [`content`], the paragraph presets in [`style`]. [`builder::ResumeBuilder`]
//! assembles both into a document and hands it to `genpdf` for pagination.

pub mod builder;
pub mod content;
pub mod elements;
pub mod error;
pub mod fonts;
pub mod model;
pub mod richtext;
pub mod style;

#[cfg(feature = "bookmarks")]
pub mod bookmarks;

pub use builder::{RenderedPdf, ResumeBuilder, DEFAULT_OUTPUT_PATH};
pub use error::ResumeError;
pub use model::Resume;
