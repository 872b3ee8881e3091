//! Error type returned by the resume builder.

use std::fmt;
use std::io;

#[cfg(feature = "bookmarks")]
use crate::bookmarks::OutlineError;

/// Failures reported while producing the resume.
///
/// The builder performs no recovery of its own; each variant carries the error reported by the
/// layer that failed.
#[derive(Debug)]
pub enum ResumeError {
    /// No usable font family could be loaded.
    FontLoad(genpdf::error::Error),
    /// The layout engine failed while paginating or writing the document.
    Render(genpdf::error::Error),
    /// The rendered bytes could not be written to disk.
    Io(io::Error),
    /// The outline could not be embedded into the rendered bytes.
    #[cfg(feature = "bookmarks")]
    Bookmarks(OutlineError),
}

impl fmt::Display for ResumeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FontLoad(_) => write!(f, "Failed to load a font family for the resume"),
            Self::Render(_) => write!(f, "Failed to render the resume"),
            Self::Io(_) => write!(f, "Failed to write the resume"),
            #[cfg(feature = "bookmarks")]
            Self::Bookmarks(_) => write!(f, "Failed to add section bookmarks"),
        }
    }
}

impl std::error::Error for ResumeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FontLoad(err) | Self::Render(err) => Some(err),
            Self::Io(err) => Some(err),
            #[cfg(feature = "bookmarks")]
            Self::Bookmarks(err) => Some(err),
        }
    }
}

impl From<io::Error> for ResumeError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

#[cfg(feature = "bookmarks")]
impl From<OutlineError> for ResumeError {
    fn from(err: OutlineError) -> Self {
        Self::Bookmarks(err)
    }
}
