//! DOCX text extraction
//!
//! A DOCX file is a zip container; the body lives in `word/document.xml`.
//! Each `<w:p>` paragraph becomes one line built from its `<w:t>` runs.

use std::io::{Read, Seek};

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::error::ExtractError;

/// Path of the main document part inside the container
pub const DOCUMENT_PART: &str = "word/document.xml";

lazy_static! {
    static ref PARAGRAPH: Regex = Regex::new(r"(?s)<w:p\b[^>]*/>|<w:p\b[^>]*>(.*?)</w:p>").unwrap();
    static ref RUN_CONTENT: Regex =
        Regex::new(r"(?s)<w:t(?:\s[^>]*)?>(.*?)</w:t>|<w:tab\s*/>|<w:br\s*/>").unwrap();
    static ref XML_REFERENCE: Regex =
        Regex::new(r"&(?:#([0-9]{1,7})|#[xX]([0-9a-fA-F]{1,6})|([a-z]+));").unwrap();
}

/// Extract paragraph text from a DOCX container, one paragraph per line.
pub fn extract_docx_text<R: Read + Seek>(reader: R) -> Result<String, ExtractError> {
    let mut archive =
        zip::ZipArchive::new(reader).map_err(|e| ExtractError::InvalidDocx(e.to_string()))?;

    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| ExtractError::InvalidDocx(format!("{}: {}", DOCUMENT_PART, e)))?
        .read_to_string(&mut xml)?;

    Ok(document_xml_to_text(&xml))
}

/// Flatten WordprocessingML into plain text.
pub fn document_xml_to_text(xml: &str) -> String {
    PARAGRAPH
        .captures_iter(xml)
        .map(|paragraph| match paragraph.get(1) {
            Some(body) => paragraph_text(body.as_str()),
            None => String::new(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn paragraph_text(body: &str) -> String {
    let mut text = String::new();
    for run in RUN_CONTENT.captures_iter(body) {
        match run.get(1) {
            Some(content) => text.push_str(&unescape_xml(content.as_str())),
            None if run[0].starts_with("<w:tab") => text.push('\t'),
            None => text.push('\n'),
        }
    }
    text
}

/// Decode the five predefined entities and numeric character references in
/// one pass. Unknown or invalid references are left as written.
fn unescape_xml(text: &str) -> String {
    XML_REFERENCE
        .replace_all(text, |caps: &Captures| {
            let decoded = if let Some(decimal) = caps.get(1) {
                decimal.as_str().parse::<u32>().ok().and_then(char::from_u32)
            } else if let Some(hex) = caps.get(2) {
                u32::from_str_radix(hex.as_str(), 16)
                    .ok()
                    .and_then(char::from_u32)
            } else {
                match &caps[3] {
                    "lt" => Some('<'),
                    "gt" => Some('>'),
                    "quot" => Some('"'),
                    "apos" => Some('\''),
                    "amp" => Some('&'),
                    _ => None,
                }
            };
            match decoded.filter(|&c| c != '\0') {
                Some(c) => c.to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}
