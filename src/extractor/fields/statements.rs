use crate::extractor::dedup::dedupe;
use crate::extractor::patterns::STATEMENT_RE;
use crate::extractor::record::ExtractError;

/// Hazard and precautionary statement lists produced by one pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Statements {
    pub hazard: Vec<String>,
    pub precautionary: Vec<String>,
}

/// H/P statement codes, combination chains kept as single tokens. Both
/// lists come back deduplicated and sorted; a sheet with only one kind of
/// statement is not a failure.
pub fn extract(text: &str) -> Result<Statements, ExtractError> {
    let mut hazard = Vec::new();
    let mut precautionary = Vec::new();

    for m in STATEMENT_RE.find_iter(text) {
        let token = m.as_str().trim();
        // EUH tokens carry an H and land on the hazard side
        if token.contains('H') {
            hazard.push(token.to_string());
        } else {
            precautionary.push(token.to_string());
        }
    }

    if hazard.is_empty() && precautionary.is_empty() {
        return Err(ExtractError::NotFound);
    }

    let mut hazard = dedupe(hazard);
    let mut precautionary = dedupe(precautionary);
    hazard.sort();
    precautionary.sort();

    Ok(Statements { hazard, precautionary })
}
