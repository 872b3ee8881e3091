use std::fs;

use resume_pdf::builder::{RenderedPdf, ResumeBuilder, DEFAULT_OUTPUT_PATH};
use resume_pdf::content;
use resume_pdf::fonts;
use resume_pdf::model::Resume;
use sha2::{Digest, Sha256};

const EXPECTED_PAGES: usize = 2;

fn render_resume() -> Option<RenderedPdf> {
    if !fonts::default_fonts_available() {
        return None;
    }

    Some(ResumeBuilder::default().render().expect("render resume"))
}

fn skip(test: &str) {
    eprintln!(
        "Skipping {test}: no usable fonts. Set RESUME_FONTS_DIR or copy assets/fonts next to the binary."
    );
}

fn scrub_pdf(bytes: &[u8]) -> Vec<u8> {
    fn scrub_segment(data: &mut [u8], tag: &[u8], terminator: u8) {
        let mut index = 0;
        while index + tag.len() < data.len() {
            if data[index..].starts_with(tag) {
                let mut cursor = index + tag.len();
                while cursor < data.len() {
                    let byte = data[cursor];
                    if byte == terminator {
                        break;
                    }
                    if terminator == b')' {
                        data[cursor] = b'0';
                    } else if !matches!(byte, b'<' | b'>' | b' ' | b'\n' | b'\r' | b'\t') {
                        data[cursor] = b'0';
                    }
                    cursor += 1;
                }
                index = cursor;
            } else {
                index += 1;
            }
        }
    }

    fn scrub_xml(data: &mut [u8], start: &[u8], end: &[u8]) {
        let mut offset = 0;
        while offset + start.len() < data.len() {
            let Some(start_pos) = data[offset..]
                .windows(start.len())
                .position(|window| window == start)
            else {
                break;
            };
            let start_index = offset + start_pos + start.len();
            let Some(end_pos) = data[start_index..]
                .windows(end.len())
                .position(|window| window == end)
            else {
                break;
            };
            for byte in &mut data[start_index..start_index + end_pos] {
                if !matches!(*byte, b'<' | b'>' | b'/' | b' ' | b'\n' | b'\r' | b'\t') {
                    *byte = b'0';
                }
            }
            offset = start_index + end_pos + end.len();
        }
    }

    let mut normalized = bytes.to_vec();
    scrub_segment(&mut normalized, b"/CreationDate(", b')');
    scrub_segment(&mut normalized, b"/ModDate(", b')');
    scrub_segment(&mut normalized, b"/ID[", b']');
    scrub_segment(&mut normalized, b"/Producer(", b')');
    for tag in [
        "xmp:CreateDate",
        "xmp:ModifyDate",
        "xmp:MetadataDate",
        "xmpMM:DocumentID",
        "xmpMM:InstanceID",
        "xmpMM:VersionID",
    ] {
        let start = format!("<{tag}>");
        let end = format!("</{tag}>");
        scrub_xml(&mut normalized, start.as_bytes(), end.as_bytes());
    }
    normalized
}

fn normalized_hash(bytes: &[u8]) -> [u8; 32] {
    let normalized = scrub_pdf(bytes);
    Sha256::digest(&normalized).into()
}

fn trimmed_tail(bytes: &[u8]) -> &[u8] {
    let end = bytes
        .iter()
        .rposition(|byte| !byte.is_ascii_whitespace())
        .map_or(0, |index| index + 1);
    &bytes[..end]
}

#[test]
fn output_is_a_pdf_file() {
    let Some(pdf) = render_resume() else {
        return skip("output_is_a_pdf_file");
    };
    assert!(pdf.bytes.starts_with(b"%PDF-"), "missing PDF header");
    assert!(
        trimmed_tail(&pdf.bytes).ends_with(b"%%EOF"),
        "missing end-of-file marker"
    );
}

#[test]
fn resume_fills_two_pages() {
    let Some(pdf) = render_resume() else {
        return skip("resume_fills_two_pages");
    };
    let parsed = lopdf::Document::load_mem(&pdf.bytes).expect("rendered bytes parse");
    assert_eq!(parsed.get_pages().len(), pdf.page_count);
    assert_eq!(pdf.page_count, EXPECTED_PAGES);
}

#[test]
fn pages_are_us_letter() {
    let Some(pdf) = render_resume() else {
        return skip("pages_are_us_letter");
    };
    let parsed = lopdf::Document::load_mem(&pdf.bytes).expect("rendered bytes parse");
    for (number, page_id) in parsed.get_pages() {
        let page = parsed.get_dictionary(page_id).expect("page dictionary");
        let media_box: Vec<f32> = page
            .get(b"MediaBox")
            .and_then(|object| object.as_array())
            .expect("page media box")
            .iter()
            .map(|value| value.as_float().expect("numeric media box entry"))
            .collect();

        assert_eq!(media_box.len(), 4, "page {number}");
        assert!(media_box[0].abs() < 0.01 && media_box[1].abs() < 0.01, "page {number}");
        assert!(
            (media_box[2] - 612.0).abs() < 0.01,
            "page {number} is {} pt wide",
            media_box[2]
        );
        assert!(
            (media_box[3] - 792.0).abs() < 0.01,
            "page {number} is {} pt tall",
            media_box[3]
        );
    }
}

#[test]
fn section_pages_follow_section_order() {
    let Some(pdf) = render_resume() else {
        return skip("section_pages_follow_section_order");
    };
    let pages: Vec<usize> = pdf
        .section_pages
        .iter()
        .map(|page| page.expect("every heading is drawn"))
        .collect();

    assert_eq!(pages.len(), content::sections().len());
    assert_eq!(pages.first(), Some(&1));
    assert_eq!(pages.last(), Some(&EXPECTED_PAGES));
    assert!(pages.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[test]
fn rendering_is_deterministic() {
    let Some(first) = render_resume() else {
        return skip("rendering_is_deterministic");
    };
    let Some(second) = render_resume() else {
        return skip("rendering_is_deterministic");
    };

    assert_eq!(first.bytes.len(), second.bytes.len(), "PDF sizes should match");
    assert_eq!(
        normalized_hash(&first.bytes),
        normalized_hash(&second.bytes),
        "PDF renders must be deterministic after metadata normalization"
    );
}

#[test]
fn writing_replaces_an_existing_file() {
    if !fonts::default_fonts_available() {
        return skip("writing_replaces_an_existing_file");
    }
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join(DEFAULT_OUTPUT_PATH);
    let stale = vec![b'x'; 8 * 1024 * 1024];
    fs::write(&path, &stale).expect("seed stale file");

    let first = ResumeBuilder::default().write_to(&path).expect("first write");
    let after_first = fs::read(&path).expect("read first output");
    assert_ne!(after_first, stale);
    assert_eq!(after_first, first.bytes);

    let second = ResumeBuilder::default().write_to(&path).expect("second write");

    let entries: Vec<_> = fs::read_dir(dir.path())
        .expect("list temp dir")
        .collect::<Result<_, _>>()
        .expect("read entries");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].file_name(), DEFAULT_OUTPUT_PATH);

    let on_disk = fs::read(&path).expect("read output");
    assert_eq!(on_disk, second.bytes);
    assert_eq!(normalized_hash(&on_disk), normalized_hash(&first.bytes));
}

#[test]
fn shorter_content_never_adds_pages() {
    if !fonts::default_fonts_available() {
        return skip("shorter_content_never_adds_pages");
    }
    let mut sections = content::sections();
    sections.truncate(2);
    let pdf = ResumeBuilder::new(Resume::from_sections(&sections))
        .render()
        .expect("render short resume");
    assert_eq!(pdf.page_count, 1);
    assert_eq!(pdf.section_pages, vec![Some(1), Some(1)]);
}

#[cfg(feature = "bookmarks")]
#[test]
fn bookmarks_add_an_outline() {
    if !fonts::default_fonts_available() {
        return skip("bookmarks_add_an_outline");
    }
    let pdf = ResumeBuilder::default()
        .render_with_bookmarks()
        .expect("render with bookmarks");
    let parsed = lopdf::Document::load_mem(&pdf.bytes).expect("bookmarked bytes parse");
    let catalog = parsed.catalog().expect("catalog present");
    assert!(catalog.get(b"Outlines").is_ok());
    assert_eq!(parsed.get_pages().len(), EXPECTED_PAGES);
}
