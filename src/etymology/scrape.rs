/*!
 * HTML extraction for the scraped sites.
 *
 * Parsed documents never leave these functions; everything returned is
 * owned text, so callers can hold results across awaits.
 */

use scraper::{ElementRef, Html, Selector};

use crate::errors::ProviderError;

/// One search hit: headword and its etymology text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub headword: String,
    pub description: String,
}

/// One table cell of a wordbook page
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableCell {
    /// Full cell text, whitespace collapsed
    pub text: String,
    /// Text of the first bold span inside the cell, if any
    pub bold: Option<String>,
}

fn selector(css: &'static str) -> Selector {
    Selector::parse(css).expect("static selector is valid")
}

fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Strip a trailing part-of-speech marker such as `(n.)` from a headword
pub fn clean_headword(raw: &str) -> String {
    let head = match raw.find('(') {
        Some(idx) => &raw[..idx],
        None => raw,
    };
    head.trim().to_string()
}

/// First descriptive paragraph of the first section of a word page
pub fn parse_word_page(html: &str) -> Result<String, ProviderError> {
    let document = Html::parse_document(html);
    let section_selector = selector("section");
    let paragraph_selector = selector("p");

    let section = document
        .select(&section_selector)
        .next()
        .ok_or_else(|| ProviderError::ParseError("word page has no section".to_string()))?;

    let paragraph = section
        .select(&paragraph_selector)
        .next()
        .ok_or_else(|| ProviderError::ParseError("word page section has no paragraph".to_string()))?;

    Ok(element_text(paragraph))
}

/// Every result section of a search page, in page order
///
/// The headword is the first heading or link of the section; the
/// description is the section's paragraphs, or its whole text when it has
/// none. Sections without a headword are skipped.
pub fn parse_search_page(html: &str) -> Vec<SearchHit> {
    let document = Html::parse_document(html);
    let section_selector = selector("section");
    let headword_selector = selector("h1, h2, h3, h4, a");
    let paragraph_selector = selector("p");

    document
        .select(&section_selector)
        .filter_map(|section| {
            let headword = section
                .select(&headword_selector)
                .map(|el| clean_headword(&element_text(el)))
                .find(|text| !text.is_empty())?;

            let paragraphs: Vec<String> = section
                .select(&paragraph_selector)
                .map(element_text)
                .filter(|text| !text.is_empty())
                .collect();

            let description = if paragraphs.is_empty() {
                element_text(section)
            } else {
                paragraphs.join(" ")
            };

            Some(SearchHit {
                headword,
                description,
            })
        })
        .collect()
}

/// Every table row of a page as its cells, in document order
pub fn parse_table_rows(html: &str) -> Vec<Vec<TableCell>> {
    let document = Html::parse_document(html);
    let row_selector = selector("tr");
    let cell_selector = selector("td, th");
    let bold_selector = selector("b, strong");

    document
        .select(&row_selector)
        .map(|row| {
            row.select(&cell_selector)
                .map(|cell| TableCell {
                    text: element_text(cell),
                    bold: cell
                        .select(&bold_selector)
                        .map(element_text)
                        .find(|text| !text.is_empty()),
                })
                .collect()
        })
        .collect()
}
