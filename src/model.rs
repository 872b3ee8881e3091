//! The resume as an ordered sequence of blocks.
//!
//! A [`Resume`] is built once from the literal tables in [`crate::content`] and handed to the
//! builder unchanged.  Block order is visual order; nothing else links blocks together.

use log::debug;

use crate::content::{self, Section};
use crate::richtext::{self, Span};
use crate::style::StyleRole;

/// Gap between the tagline and the first section, in points (0.1 in).
const HEADER_GAP: f64 = 7.2;

/// A paragraph whose spans are rendered with the preset of its role.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RichParagraph {
    role: StyleRole,
    spans: Vec<Span>,
}

impl RichParagraph {
    /// Creates a paragraph from the provided spans.
    pub fn new(role: StyleRole, spans: impl Into<Vec<Span>>) -> Self {
        Self {
            role,
            spans: spans.into(),
        }
    }

    /// Creates a paragraph made of a single plain span.
    pub fn plain(role: StyleRole, text: impl Into<String>) -> Self {
        Self::new(role, vec![Span::new(text)])
    }

    /// Returns the style role.
    pub fn role(&self) -> StyleRole {
        self.role
    }

    /// Returns the spans that make up the paragraph.
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Returns the paragraph text without styling.
    pub fn text(&self) -> String {
        richtext::plain_text(&self.spans)
    }
}

/// Individual elements of the document, in page order.
#[derive(Clone, Debug, PartialEq)]
pub enum Block {
    /// Styled paragraph content.
    Paragraph(RichParagraph),
    /// Fixed vertical gap, in points.
    Spacer(f64),
}

impl Block {
    /// Returns the paragraph if this block is one.
    pub fn as_paragraph(&self) -> Option<&RichParagraph> {
        match self {
            Block::Paragraph(paragraph) => Some(paragraph),
            Block::Spacer(_) => None,
        }
    }
}

/// The complete document before layout.
#[derive(Clone, Debug, PartialEq)]
pub struct Resume {
    title: String,
    blocks: Vec<Block>,
    section_titles: Vec<String>,
}

impl Resume {
    /// Builds the resume from the built-in content tables.
    pub fn standard() -> Self {
        Self::from_sections(&content::sections())
    }

    /// Builds the resume with the fixed header and closing note around `sections`.
    pub fn from_sections(sections: &[Section]) -> Self {
        let mut blocks = vec![
            Block::Paragraph(RichParagraph::plain(StyleRole::Title, content::NAME)),
            Block::Paragraph(RichParagraph::plain(StyleRole::Subtitle, content::TAGLINE)),
            Block::Spacer(HEADER_GAP),
        ];
        let mut section_titles = Vec::with_capacity(sections.len());

        for section in sections {
            blocks.push(Block::Paragraph(RichParagraph::plain(
                StyleRole::SectionHeading,
                section.heading,
            )));
            blocks.extend(section.items.iter().map(|item| {
                Block::Paragraph(RichParagraph::new(section.role, item.spans(section.marker)))
            }));
            blocks.push(Block::Spacer(section.gap_after));
            section_titles.push(section.heading.to_string());
        }

        blocks.push(Block::Paragraph(RichParagraph::plain(
            StyleRole::Footer,
            content::CLOSING_NOTE,
        )));

        debug!(
            "assembled {} blocks across {} sections",
            blocks.len(),
            section_titles.len()
        );

        Self {
            title: content::NAME.to_string(),
            blocks,
            section_titles,
        }
    }

    /// Document title written to the PDF metadata.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the blocks in page order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Headings of all sections, in page order.
    pub fn section_titles(&self) -> &[String] {
        &self.section_titles
    }

    /// Plain text of every paragraph, in page order.
    pub fn texts(&self) -> Vec<String> {
        self.blocks
            .iter()
            .filter_map(Block::as_paragraph)
            .map(RichParagraph::text)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{BulletMarker, ContentItem};

    fn section_blocks<'a>(resume: &'a Resume, heading: &str) -> &'a [Block] {
        let blocks = resume.blocks();
        let start = blocks
            .iter()
            .position(|block| {
                block.as_paragraph().map_or(false, |p| {
                    p.role() == StyleRole::SectionHeading && p.text() == heading
                })
            })
            .expect("section heading present");
        let len = blocks[start..]
            .iter()
            .position(|block| matches!(block, Block::Spacer(_)))
            .expect("section gap present");
        &blocks[start..=start + len]
    }

    #[test]
    fn header_opens_and_note_closes_the_document() {
        let resume = Resume::standard();
        let texts = resume.texts();
        assert_eq!(texts.first().map(String::as_str), Some(content::NAME));
        assert_eq!(texts.get(1).map(String::as_str), Some(content::TAGLINE));
        assert_eq!(texts.last().map(String::as_str), Some(content::CLOSING_NOTE));
        assert_eq!(resume.blocks()[2], Block::Spacer(HEADER_GAP));
    }

    #[test]
    fn block_count_follows_content() {
        let sections = content::sections();
        let items: usize = sections.iter().map(|section| section.items.len()).sum();
        let resume = Resume::from_sections(&sections);
        // header (3) + heading and gap per section + items + closing note
        assert_eq!(resume.blocks().len(), 3 + 2 * sections.len() + items + 1);
    }

    #[test]
    fn every_literal_appears_in_the_text() {
        let resume = Resume::standard();
        let text = resume.texts().join("\n");
        for section in content::sections() {
            assert!(text.contains(section.heading), "missing {}", section.heading);
            for item in &section.items {
                for literal in item.literals() {
                    assert!(text.contains(literal), "missing {literal}");
                }
            }
        }
    }

    #[test]
    fn removing_an_entry_only_touches_its_section() {
        let original = Resume::standard();
        let mut sections = content::sections();
        sections[3].items.pop();
        let trimmed = Resume::from_sections(&sections);

        assert_eq!(trimmed.blocks().len(), original.blocks().len() - 1);
        for section in &sections {
            let before = section_blocks(&original, section.heading);
            let after = section_blocks(&trimmed, section.heading);
            if section.heading == sections[3].heading {
                assert_eq!(after.len(), before.len() - 1);
                assert_eq!(after[..after.len() - 1], before[..before.len() - 2]);
            } else {
                assert_eq!(after, before);
            }
        }
    }

    #[test]
    fn adding_an_entry_only_touches_its_section() {
        let original = Resume::standard();
        let mut sections = content::sections();
        sections[5].items.push(ContentItem::Line("Kanban"));
        let extended = Resume::from_sections(&sections);

        assert_eq!(extended.blocks().len(), original.blocks().len() + 1);
        assert_eq!(extended.blocks()[..3], original.blocks()[..3]);
        assert_eq!(extended.texts().last(), original.texts().last());

        let added = section_blocks(&extended, sections[5].heading);
        let expected = Block::Paragraph(RichParagraph::new(
            StyleRole::Bullet,
            ContentItem::Line("Kanban").spans(BulletMarker::Plain),
        ));
        assert_eq!(added[added.len() - 2], expected);
        assert_eq!(
            section_blocks(&extended, sections[6].heading),
            section_blocks(&original, sections[6].heading)
        );
    }

    #[test]
    fn headings_use_section_role() {
        let resume = Resume::standard();
        let headings: Vec<_> = resume
            .blocks()
            .iter()
            .filter_map(Block::as_paragraph)
            .filter(|p| p.role() == StyleRole::SectionHeading)
            .map(RichParagraph::text)
            .collect();
        assert_eq!(headings, resume.section_titles());
    }
}
