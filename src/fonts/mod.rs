//! Font loading utilities.
//!
//! `genpdf` measures and embeds TrueType fonts, so a sans-serif family has to be found on disk.
//! Bundled Liberation Sans (metric-compatible with Helvetica) is preferred; see
//! [`font_directory_candidates`] for the search order.  When no bundled copy exists the loader
//! falls back to well-known system locations and logs a warning.

use std::env;
use std::io;
use std::path::{Path, PathBuf};

use genpdf::error::{Error, ErrorKind};
use genpdf::fonts::{FontData, FontFamily};
use log::{debug, warn};

/// Environment variable pointing at a directory with the bundled font files.
pub const FONTS_DIR_ENV: &str = "RESUME_FONTS_DIR";

/// File names making up one font family.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FamilyFiles {
    /// Family name used in log output.
    pub name: &'static str,
    pub regular: &'static str,
    pub bold: &'static str,
    pub italic: &'static str,
    pub bold_italic: &'static str,
}

impl FamilyFiles {
    fn files(&self) -> [&'static str; 4] {
        [self.regular, self.bold, self.italic, self.bold_italic]
    }
}

/// The family expected in bundled font directories.
pub const LIBERATION_SANS: FamilyFiles = FamilyFiles {
    name: "Liberation Sans",
    regular: "LiberationSans-Regular.ttf",
    bold: "LiberationSans-Bold.ttf",
    italic: "LiberationSans-Italic.ttf",
    bold_italic: "LiberationSans-BoldItalic.ttf",
};

const DEJAVU_SANS: FamilyFiles = FamilyFiles {
    name: "DejaVu Sans",
    regular: "DejaVuSans.ttf",
    bold: "DejaVuSans-Bold.ttf",
    italic: "DejaVuSans-Oblique.ttf",
    bold_italic: "DejaVuSans-BoldOblique.ttf",
};

const ARIAL: FamilyFiles = FamilyFiles {
    name: "Arial",
    regular: "arial.ttf",
    bold: "arialbd.ttf",
    italic: "ariali.ttf",
    bold_italic: "arialbi.ttf",
};

const SYSTEM_FALLBACKS: &[(&str, FamilyFiles)] = &[
    ("/usr/share/fonts/truetype/liberation", LIBERATION_SANS),
    ("/usr/share/fonts/truetype/liberation2", LIBERATION_SANS),
    ("/usr/share/fonts/liberation-sans", LIBERATION_SANS),
    ("/usr/share/fonts/liberation", LIBERATION_SANS),
    ("/usr/share/fonts/truetype/dejavu", DEJAVU_SANS),
    ("/usr/share/fonts/dejavu-sans-fonts", DEJAVU_SANS),
    ("/usr/share/fonts/dejavu", DEJAVU_SANS),
    ("/usr/share/fonts/TTF", DEJAVU_SANS),
];

/// Directory holding the fonts shipped with the crate sources.
pub fn bundled_fonts_source_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets/fonts")
}

fn env_path(var: &str) -> Option<PathBuf> {
    env::var_os(var).and_then(|value| {
        let path = PathBuf::from(value);
        if path.as_os_str().is_empty() {
            None
        } else {
            Some(path)
        }
    })
}

/// Directories searched for the bundled family, in order: `RESUME_FONTS_DIR`, `assets/fonts`
/// next to the executable, and `assets/fonts` in the crate sources.
pub fn font_directory_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(path) = env_path(FONTS_DIR_ENV) {
        candidates.push(path);
    }

    if let Ok(current_exe) = env::current_exe() {
        if let Some(bin_dir) = current_exe.parent() {
            let candidate = bin_dir.join("assets/fonts");
            if !candidates.contains(&candidate) {
                candidates.push(candidate);
            }
        }
    }

    let manifest_candidate = bundled_fonts_source_dir();
    if !candidates.contains(&manifest_candidate) {
        candidates.push(manifest_candidate);
    }

    candidates
}

fn missing_font_files(path: &Path, family: &FamilyFiles) -> Vec<PathBuf> {
    family
        .files()
        .iter()
        .map(|name| path.join(name))
        .filter(|candidate| !candidate.is_file())
        .collect()
}

fn resolve_font_directory() -> Result<PathBuf, Error> {
    let mut attempts = Vec::new();

    for candidate in font_directory_candidates() {
        let exists = candidate.is_dir();
        let missing = missing_font_files(&candidate, &LIBERATION_SANS);

        if exists && missing.is_empty() {
            return Ok(candidate);
        }

        let reason = if !exists {
            format!("directory missing at {}", candidate.display())
        } else {
            let missing_list = missing
                .iter()
                .map(|path| path.file_name().unwrap_or_default().to_string_lossy())
                .collect::<Vec<_>>()
                .join(", ");
            format!("missing files [{}]", missing_list)
        };

        attempts.push(format!("{} ({})", candidate.display(), reason));
    }

    Err(Error::new(
        format!(
            "Unable to locate bundled font directory. Checked: {}. See assets/fonts/README.md or set {}.",
            attempts.join(", "),
            FONTS_DIR_ENV
        ),
        io::Error::new(io::ErrorKind::NotFound, "bundled fonts directory not found"),
    ))
}

fn load_font(directory: &Path, file: &str, style: &str) -> Result<FontData, Error> {
    let path = directory.join(file);
    FontData::load(&path, None).map_err(|err| {
        let io_kind = if path.is_file() {
            io::ErrorKind::Other
        } else {
            io::ErrorKind::NotFound
        };
        Error::new(
            format!("Failed to load {} font at {}: {}", style, path.display(), err),
            io::Error::new(io_kind, err.to_string()),
        )
    })
}

fn load_family(directory: &Path, family: &FamilyFiles) -> Result<FontFamily<FontData>, Error> {
    Ok(FontFamily {
        regular: load_font(directory, family.regular, "regular")?,
        bold: load_font(directory, family.bold, "bold")?,
        italic: load_font(directory, family.italic, "italic")?,
        bold_italic: load_font(directory, family.bold_italic, "bold italic")?,
    })
}

fn windows_font_directory() -> Option<PathBuf> {
    #[cfg(windows)]
    {
        for var in ["WINDIR", "SystemRoot"] {
            if let Some(root) = env_path(var) {
                let candidate = root.join("Fonts");
                if candidate.is_dir() {
                    return Some(candidate);
                }
            }
        }
    }

    None
}

/// System directories probed when no bundled family is available, in order.
fn system_fallbacks() -> Vec<(PathBuf, FamilyFiles)> {
    let mut fallbacks: Vec<_> = SYSTEM_FALLBACKS
        .iter()
        .map(|(dir, family)| (PathBuf::from(dir), *family))
        .collect();
    if let Some(dir) = windows_font_directory() {
        fallbacks.push((dir, ARIAL));
    }
    fallbacks
}

fn system_fallback_family() -> Result<(FontFamily<FontData>, &'static str), Error> {
    for (directory, family) in system_fallbacks() {
        if !missing_font_files(&directory, &family).is_empty() {
            continue;
        }
        match load_family(&directory, &family) {
            Ok(fonts) => return Ok((fonts, family.name)),
            Err(err) => debug!("skipping {} in {}: {}", family.name, directory.display(), err),
        }
    }

    Err(Error::new(
        "No system font family found for fallback",
        io::Error::new(io::ErrorKind::NotFound, "system fonts not found"),
    ))
}

fn fonts_missing(err: &Error) -> bool {
    matches!(
        err.kind(),
        ErrorKind::IoError(io_err)
            if io_err.kind() == io::ErrorKind::NotFound
                || io_err.kind() == io::ErrorKind::PermissionDenied
    )
}

fn load_bundled_font_family() -> Result<FontFamily<FontData>, Error> {
    let directory = resolve_font_directory()?;
    debug!("loading {} from {}", LIBERATION_SANS.name, directory.display());
    load_family(&directory, &LIBERATION_SANS)
}

/// Returns the bundled font family if available and falls back to a system family when the
/// bundled fonts are missing.
pub fn default_font_family() -> Result<FontFamily<FontData>, Error> {
    match load_bundled_font_family() {
        Ok(family) => Ok(family),
        Err(err) if fonts_missing(&err) => match system_fallback_family() {
            Ok((fallback, name)) => {
                warn!(
                    "Bundled fonts unavailable ({}); falling back to system '{}' family.",
                    err, name
                );
                Ok(fallback)
            }
            Err(fallback_err) => {
                warn!(
                    "Bundled fonts unavailable ({}); system fallback failed: {}",
                    err, fallback_err
                );
                Err(Error::new(
                    format!(
                        "Bundled fonts unavailable and system fallback failed: {}",
                        fallback_err
                    ),
                    io::Error::new(io::ErrorKind::NotFound, "default fonts are not available"),
                ))
            }
        },
        Err(err) => Err(err),
    }
}

/// Indicates whether any usable font family (bundled or system) is present on disk.
pub fn default_fonts_available() -> bool {
    resolve_font_directory().is_ok()
        || system_fallbacks()
            .iter()
            .any(|(directory, family)| missing_font_files(directory, family).is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_directory_is_always_searched() {
        let candidates = font_directory_candidates();
        assert!(candidates.contains(&bundled_fonts_source_dir()));
    }

    #[test]
    fn missing_directory_reports_every_file() {
        let missing = missing_font_files(Path::new("/__resume_missing_fonts__"), &LIBERATION_SANS);
        assert_eq!(missing.len(), 4);
        assert!(missing[0].ends_with("LiberationSans-Regular.ttf"));
    }

    #[test]
    fn not_found_errors_trigger_fallback() {
        let err = Error::new(
            "missing",
            io::Error::new(io::ErrorKind::NotFound, "fonts not found"),
        );
        assert!(fonts_missing(&err));

        let other = Error::new("bad data", ErrorKind::InvalidData);
        assert!(!fonts_missing(&other));
    }
}
