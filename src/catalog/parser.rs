//! Result extractor for the catalog's HTML search page.
//!
//! The results markup carries no machine-readable schema, so every field is
//! recovered from markup adjacency: the anchor text holds the number and
//! title, a trailing `<span>` names the distribution format, and the next
//! table cell holds the date and description. Each rule below is a small pure
//! function over the parsed tree so it can be tested against fixture snippets
//! in isolation.

use std::sync::OnceLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::catalog::models::PublicationRecord;

/// Identifier of the single container element holding all search results
const RESULTS_CONTAINER_SELECTOR: &str = "div#MainContent_tblContentSearchResults";

/// `href` substrings that mark a genuine publication link, as opposed to
/// record-details navigation
const PUBLICATION_LINK_MARKERS: [&str; 2] = ["epubs", "pub/eforms"];

/// Visible label of the navigation links interleaved with the results
const DETAILS_LINK_LABEL: &str = "Record Details";

/// Separator between document number and title in the listing text
const TITLE_SEPARATOR: &str = " — ";

/// Style fragment that marks the format span next to a publication link
const FORMAT_STYLE_MARKER: &str = "font-size:smaller";

/// Format assumed when the listing names none
const DEFAULT_FILE_FORMAT: &str = "pdf";

/// Phrase in a listing description that marks a credential-gated document
pub const CAC_TEXT_MARKER: &str = "Common Access Card (CAC) to view it";

/// Canonical description substituted for credential-gated documents
pub const CAC_DESCRIPTION: &str =
    "This publication or form requires Common Access Card (CAC) to view it";

/// Parse a catalog results page into publication records.
///
/// Never fails: a page without the results container, or with unexpected
/// structure around individual entries, yields fewer (possibly zero) records
/// rather than an error. Document order of the page is preserved, since it is
/// the catalog's own ranking.
pub fn parse_search_results(html: &str, origin: &str) -> Vec<PublicationRecord> {
    let document = Html::parse_document(html);

    let container_selector =
        Selector::parse(RESULTS_CONTAINER_SELECTOR).expect("container selector is valid");
    let Some(container) = document.select(&container_selector).next() else {
        debug!("No results container found in search page");
        return Vec::new();
    };

    let anchor_selector = Selector::parse("a[href]").expect("anchor selector is valid");
    let mut records = Vec::new();

    for anchor in container.select(&anchor_selector) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        if !is_publication_link(href) {
            continue;
        }

        let listing_text = element_text(anchor);
        if listing_text.contains(DETAILS_LINK_LABEL) {
            continue;
        }
        // An anchor without visible text collapses to an empty record
        if listing_text.is_empty() {
            continue;
        }

        let (document_number, title) = split_listing_title(&listing_text);
        let document_type = document_type_of(&document_number);
        let file_format = file_format_for(anchor);
        let (date, description) = date_and_description_for(anchor);

        records.push(PublicationRecord {
            document_number,
            title,
            document_type,
            file_format,
            date,
            description,
            url: absolutize(href, origin),
        });
    }

    debug!(records = records.len(), "Parsed search results page");
    records
}

/// A publication link points at the document itself, not at its details page
fn is_publication_link(href: &str) -> bool {
    PUBLICATION_LINK_MARKERS
        .iter()
        .any(|marker| href.contains(marker))
}

/// Split listing text into document number and title on the em-dash separator.
/// Listings without a separator put everything in the number slot.
fn split_listing_title(text: &str) -> (String, String) {
    match text.split_once(TITLE_SEPARATOR) {
        Some((number, title)) => (number.to_string(), title.to_string()),
        None => (text.to_string(), String::new()),
    }
}

/// Derive the document type from the leading uppercase letters of the number
/// (e.g. "TC", "AR", "ATP"). "Unknown" when there is no such prefix.
fn document_type_of(document_number: &str) -> String {
    static TYPE_RE: OnceLock<Regex> = OnceLock::new();
    let re = TYPE_RE.get_or_init(|| Regex::new(r"^([A-Z]+)").expect("type regex is valid"));

    re.captures(document_number)
        .map(|captures| captures[1].to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

/// The distribution format lives in a small-font span right after the link.
/// Only the nearest following sibling span is inspected, so a span belonging
/// to a later result can never bleed into this record; anything else means
/// the default applies.
fn file_format_for(anchor: ElementRef<'_>) -> String {
    let span = anchor
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "span");
    match span {
        Some(span) if span.html().contains(FORMAT_STYLE_MARKER) => element_text(span),
        _ => DEFAULT_FILE_FORMAT.to_string(),
    }
}

/// Date and description sit in the cell following the link's cell: the next
/// `<td>` in the same row, or the first `<td>` of the next row when the link's
/// row has no further cell. Missing table structure yields empty fields.
fn date_and_description_for(anchor: ElementRef<'_>) -> (String, String) {
    let Some(cell) = enclosing_cell(anchor) else {
        return (String::new(), String::new());
    };
    let Some(detail_cell) = detail_cell_for(cell) else {
        return (String::new(), String::new());
    };

    let full_text = element_text(detail_cell);
    let date = extract_date(&full_text);
    let description = if full_text.contains(CAC_TEXT_MARKER) {
        CAC_DESCRIPTION.to_string()
    } else {
        full_text
    };

    (date, description)
}

fn enclosing_cell(anchor: ElementRef<'_>) -> Option<ElementRef<'_>> {
    anchor
        .ancestors()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "td")
}

fn detail_cell_for(cell: ElementRef<'_>) -> Option<ElementRef<'_>> {
    if let Some(next) = cell
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "td")
    {
        return Some(next);
    }

    let row = cell
        .ancestors()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "tr")?;
    let next_row = row
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "tr")?;
    next_row
        .descendants()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "td")
}

/// First date in the cell text, matching the catalog's "May 13, 2019" shape
fn extract_date(text: &str) -> String {
    static DATE_RE: OnceLock<Regex> = OnceLock::new();
    let re =
        DATE_RE.get_or_init(|| Regex::new(r"\w{3}\s+\d{1,2},\s+\d{4}").expect("date regex is valid"));

    re.find(text)
        .map(|found| found.as_str().to_string())
        .unwrap_or_default()
}

fn absolutize(href: &str, origin: &str) -> String {
    if href.starts_with("http") {
        href.to_string()
    } else {
        format!("{origin}{href}")
    }
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
