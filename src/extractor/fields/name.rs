use crate::extractor::patterns::NAME_RE;
use crate::extractor::record::ExtractError;

const KEYWORDS: &[&str] = &["produktidentifikator", "produktname", "handelsname"];

/// Product/trade name: a keyword line ("Handelsname", "Produktname",
/// "Produktidentifikator", bare "Name") with the value on the next line.
/// The first match whose content line survives keyword stripping wins.
pub fn extract(text: &str) -> Result<String, ExtractError> {
    let mut matched = false;

    for caps in NAME_RE.captures_iter(text) {
        matched = true;

        let mut candidate = caps[4].to_lowercase();
        // The content line may repeat a label, e.g. "Handelsname: Aceton"
        // below a "Produktidentifikator" heading
        for keyword in KEYWORDS {
            candidate = candidate.replace(keyword, "");
        }
        candidate = candidate.replace(':', "");

        let candidate = candidate.trim();
        if candidate.is_empty() {
            // Heading line; the value follows on a later, separately matched line
            continue;
        }
        return Ok(candidate.to_string());
    }

    if matched {
        Err(ExtractError::NoValidCandidate)
    } else {
        Err(ExtractError::NotFound)
    }
}
