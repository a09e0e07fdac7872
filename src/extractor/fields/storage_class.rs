use crate::extractor::patterns::{STORAGE_CLASS_RE, STORAGE_CLASSES};
use crate::extractor::record::ExtractError;

/// Storage class from "Lagerklasse" lines. OCR output tends to glue the
/// "TRGS 510" regulation number onto the line, so the literal "510" is
/// removed before classification.
pub fn extract(text: &str) -> Result<&'static str, ExtractError> {
    let mut matched = false;

    for m in STORAGE_CLASS_RE.find_iter(text) {
        matched = true;

        let mut line = m.as_str().replace("510", "");
        line.retain(|c| !c.is_whitespace());

        // Most specific first, so "1" cannot shadow "10-13"
        for &code in STORAGE_CLASSES.iter().rev() {
            if line.contains(code) {
                return Ok(code);
            }
        }
    }

    if matched {
        Err(ExtractError::NoValidCandidate)
    } else {
        Err(ExtractError::NotFound)
    }
}
