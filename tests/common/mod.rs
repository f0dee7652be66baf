//! Shared fixture builders for integration tests: catalog results pages,
//! minimal PDF documents, and minimal EPUB containers.

#![allow(dead_code)]

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Wrap table rows in the catalog's results-page skeleton
pub fn results_page(rows: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><title>Search Results</title></head>
<body>
  <div id="MainContent_pnlSearch">Search form lives here</div>
  <div id="MainContent_tblContentSearchResults">
    <table>{rows}</table>
  </div>
</body>
</html>"#
    )
}

/// One results row: publication link, optional format span, detail cell
pub fn catalog_row(href: &str, label: &str, format_label: Option<&str>, detail: &str) -> String {
    let span = format_label
        .map(|f| format!(r#" <span style="font-size:smaller;">{f}</span>"#))
        .unwrap_or_default();
    format!(
        r#"<tr><td><a href="{href}">{label}</a>{span}</td><td>{detail}</td></tr>"#
    )
}

/// Build a minimal but well-formed PDF with one text line per page.
///
/// Object layout: 1 = catalog, 2 = page tree, 3 = the shared Helvetica font,
/// then a page/content object pair per page. The cross-reference table is
/// computed from the serialized offsets, so the output parses without
/// recovery heuristics.
pub fn minimal_pdf(pages: &[&str]) -> Vec<u8> {
    let mut objects: Vec<(usize, String)> = vec![
        (1, "<< /Type /Catalog /Pages 2 0 R >>".to_string()),
        (
            2,
            format!(
                "<< /Type /Pages /Kids [{}] /Count {} >>",
                (0..pages.len())
                    .map(|i| format!("{} 0 R", 4 + 2 * i))
                    .collect::<Vec<_>>()
                    .join(" "),
                pages.len()
            ),
        ),
        (
            3,
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
                .to_string(),
        ),
    ];

    for (i, text) in pages.iter().enumerate() {
        let stream = format!("BT /F1 12 Tf 72 720 Td ({text}) Tj ET");
        objects.push((
            4 + 2 * i,
            format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
                 /Resources << /Font << /F1 3 0 R >> >> /Contents {} 0 R >>",
                5 + 2 * i
            ),
        ));
        objects.push((
            5 + 2 * i,
            format!("<< /Length {} >>\nstream\n{stream}\nendstream", stream.len()),
        ));
    }
    objects.sort_by_key(|(id, _)| *id);

    let mut pdf = String::from("%PDF-1.4\n");
    let mut offsets = vec![0usize; objects.len() + 1];
    for (id, body) in &objects {
        offsets[*id] = pdf.len();
        pdf.push_str(&format!("{id} 0 obj\n{body}\nendobj\n"));
    }

    let xref_offset = pdf.len();
    pdf.push_str(&format!("xref\n0 {}\n", objects.len() + 1));
    pdf.push_str("0000000000 65535 f \n");
    for id in 1..=objects.len() {
        pdf.push_str(&format!("{:010} 00000 n \n", offsets[id]));
    }
    pdf.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
        objects.len() + 1,
        xref_offset
    ));

    pdf.into_bytes()
}

/// Build a minimal EPUB container with one XHTML chapter per entry.
///
/// The `mimetype` entry is stored uncompressed and first, as the OCF
/// container format requires; chapters carry a `<style>` block so extraction
/// has markup to strip.
pub fn minimal_epub(chapters: &[&str]) -> Vec<u8> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let stored = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
    let deflated = SimpleFileOptions::default();

    zip.start_file("mimetype", stored).unwrap();
    zip.write_all(b"application/epub+zip").unwrap();

    zip.start_file("META-INF/container.xml", deflated).unwrap();
    zip.write_all(
        br#"<?xml version="1.0" encoding="UTF-8"?>
<container version="1.0" xmlns="urn:oasis:names:tc:opendocument:xmlns:container">
  <rootfiles>
    <rootfile full-path="OEBPS/content.opf" media-type="application/oebps-package+xml"/>
  </rootfiles>
</container>"#,
    )
    .unwrap();

    let manifest: String = (0..chapters.len())
        .map(|i| {
            format!(
                r#"<item id="chapter{i}" href="chapter{i}.xhtml" media-type="application/xhtml+xml"/>"#
            )
        })
        .collect();
    let spine: String = (0..chapters.len())
        .map(|i| format!(r#"<itemref idref="chapter{i}"/>"#))
        .collect();

    zip.start_file("OEBPS/content.opf", deflated).unwrap();
    zip.write_all(
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<package xmlns="http://www.idpf.org/2007/opf" xmlns:dc="http://purl.org/dc/elements/1.1/" unique-identifier="bookid" version="2.0">
  <metadata>
    <dc:identifier id="bookid">urn:uuid:armypubs-test-fixture</dc:identifier>
    <dc:title>Test Publication</dc:title>
    <dc:language>en</dc:language>
  </metadata>
  <manifest>{manifest}</manifest>
  <spine>{spine}</spine>
</package>"#
        )
        .as_bytes(),
    )
    .unwrap();

    for (i, body) in chapters.iter().enumerate() {
        zip.start_file(format!("OEBPS/chapter{i}.xhtml"), deflated)
            .unwrap();
        zip.write_all(
            format!(
                r#"<?xml version="1.0" encoding="UTF-8"?>
<html xmlns="http://www.w3.org/1999/xhtml">
<head><style>p {{ margin: 0; }}</style></head>
<body><p>{body}</p></body>
</html>"#
            )
            .as_bytes(),
        )
        .unwrap();
    }

    zip.finish().unwrap().into_inner()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_pdf_carries_magic_and_pages() {
        let pdf = minimal_pdf(&["Hello", "World"]);
        assert!(pdf.starts_with(b"%PDF"));
        assert!(pdf.windows(7).any(|w| w == b"(Hello)"));
        assert!(pdf.windows(7).any(|w| w == b"(World)"));
    }

    #[test]
    fn test_minimal_epub_carries_zip_magic_and_media_type() {
        let epub = minimal_epub(&["Chapter text"]);
        assert!(epub.starts_with(b"PK\x03\x04"));
        let prefix = &epub[..epub.len().min(1024)];
        assert!(prefix.windows(4).any(|w| w.eq_ignore_ascii_case(b"epub")));
    }
}
