//! Paragraph style presets.
//!
//! Every paragraph in the resume is rendered with one of seven fixed [`StyleSpec`] presets.  The
//! presets are plain constants: sizes and spacings are expressed in points, colors as RGB triples,
//! and they are only converted into `genpdf` types when a paragraph is built.

use genpdf::style::{Color, Style};
use genpdf::{Alignment, Margins};

use crate::elements::points;

/// The role a paragraph plays in the document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleRole {
    /// The name at the top of the first page.
    Title,
    /// The tagline under the title.
    Subtitle,
    /// Upper-case heading that opens a section.
    SectionHeading,
    /// Secondary heading inside a section.
    SubsectionHeading,
    /// Running text.
    Body,
    /// Indented list entry.
    Bullet,
    /// Closing note at the end of the document.
    Footer,
}

impl StyleRole {
    /// All roles in presentation order.
    pub const ALL: [StyleRole; 7] = [
        StyleRole::Title,
        StyleRole::Subtitle,
        StyleRole::SectionHeading,
        StyleRole::SubsectionHeading,
        StyleRole::Body,
        StyleRole::Bullet,
        StyleRole::Footer,
    ];
}

/// Horizontal placement of a paragraph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HorizontalAlignment {
    /// Left aligned content.
    #[default]
    Left,
    /// Center aligned content.
    Center,
}

impl From<HorizontalAlignment> for Alignment {
    fn from(alignment: HorizontalAlignment) -> Self {
        match alignment {
            HorizontalAlignment::Left => Alignment::Left,
            HorizontalAlignment::Center => Alignment::Center,
        }
    }
}

/// A named bundle of presentation attributes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StyleSpec {
    /// Preset name.
    pub name: &'static str,
    /// Font size in points.
    pub font_size: u8,
    /// Text color as an RGB triple.
    pub color: (u8, u8, u8),
    /// Whether the paragraph uses the bold face.
    pub bold: bool,
    /// Whether the paragraph uses the italic face.
    pub italic: bool,
    /// Space above the paragraph, in points.
    pub space_before: f64,
    /// Space below the paragraph, in points.
    pub space_after: f64,
    /// Left indent, in points.
    pub left_indent: f64,
    /// Multiplier applied to the font's natural line height.
    pub line_spacing: f64,
    /// Horizontal alignment.
    pub alignment: HorizontalAlignment,
}

impl StyleSpec {
    const fn base(name: &'static str, font_size: u8, color: (u8, u8, u8)) -> Self {
        Self {
            name,
            font_size,
            color,
            bold: false,
            italic: false,
            space_before: 0.0,
            space_after: 0.0,
            left_indent: 0.0,
            line_spacing: 1.0,
            alignment: HorizontalAlignment::Left,
        }
    }

    /// Text style applied to the whole paragraph.
    pub fn text_style(&self) -> Style {
        let (r, g, b) = self.color;
        let mut style = Style::new()
            .with_font_size(self.font_size)
            .with_color(Color::Rgb(r, g, b))
            .with_line_spacing(self.line_spacing);
        if self.bold {
            style.set_bold();
        }
        if self.italic {
            style.set_italic();
        }
        style
    }

    /// Padding that realises the spacing and indent around the paragraph.
    pub fn padding(&self) -> Margins {
        Margins::trbl(
            points(self.space_before),
            0,
            points(self.space_after),
            points(self.left_indent),
        )
    }
}

const fn hex(value: u32) -> (u8, u8, u8) {
    (
        ((value >> 16) & 0xff) as u8,
        ((value >> 8) & 0xff) as u8,
        (value & 0xff) as u8,
    )
}

/// Centered bold name.
pub const TITLE: StyleSpec = StyleSpec {
    bold: true,
    space_after: 6.0,
    alignment: HorizontalAlignment::Center,
    ..StyleSpec::base("title", 24, hex(0x1a1a1a))
};

/// Centered grey tagline.
pub const SUBTITLE: StyleSpec = StyleSpec {
    space_after: 12.0,
    alignment: HorizontalAlignment::Center,
    ..StyleSpec::base("subtitle", 10, hex(0x666666))
};

/// Blue section heading.
pub const SECTION_HEADING: StyleSpec = StyleSpec {
    bold: true,
    space_before: 8.0,
    space_after: 6.0,
    ..StyleSpec::base("section-heading", 14, hex(0x0066cc))
};

pub const SUBSECTION_HEADING: StyleSpec = StyleSpec {
    bold: true,
    space_before: 4.0,
    space_after: 4.0,
    ..StyleSpec::base("subsection-heading", 11, hex(0x333333))
};

/// Running text on an 11 pt leading.
pub const BODY: StyleSpec = StyleSpec {
    space_after: 4.0,
    line_spacing: 1.063,
    ..StyleSpec::base("body", 9, hex(0x333333))
};

/// Small indented list entry on a 10 pt leading.
pub const BULLET: StyleSpec = StyleSpec {
    space_after: 2.0,
    line_spacing: 1.087,
    left_indent: 12.0,
    ..StyleSpec::base("bullet", 8, hex(0x333333))
};

pub const FOOTER: StyleSpec = StyleSpec {
    italic: true,
    alignment: HorizontalAlignment::Center,
    ..StyleSpec::base("footer", 8, hex(0x666666))
};

/// Returns the preset for `role`.
pub fn preset(role: StyleRole) -> &'static StyleSpec {
    match role {
        StyleRole::Title => &TITLE,
        StyleRole::Subtitle => &SUBTITLE,
        StyleRole::SectionHeading => &SECTION_HEADING,
        StyleRole::SubsectionHeading => &SUBSECTION_HEADING,
        StyleRole::Body => &BODY,
        StyleRole::Bullet => &BULLET,
        StyleRole::Footer => &FOOTER,
    }
}
