use crate::extractor::patterns::SIGNAL_WORD_RE;
use crate::extractor::record::{ExtractError, SignalWord};

/// Signal word from "Signalwort"/"Signalwörter" lines. The first match
/// containing either keyword decides; "Gefahr" outranks "Achtung" only
/// inside the same matched span.
pub fn extract(text: &str) -> Result<SignalWord, ExtractError> {
    let mut matched = false;

    for m in SIGNAL_WORD_RE.find_iter(text) {
        matched = true;

        let span = m.as_str().to_lowercase();
        if span.contains("gefahr") {
            return Ok(SignalWord::Danger);
        }
        if span.contains("achtung") {
            return Ok(SignalWord::Warning);
        }
    }

    if matched {
        Err(ExtractError::NoValidCandidate)
    } else {
        Err(ExtractError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gefahr() {
        assert_eq!(extract("Signalwort\nGefahr").unwrap(), SignalWord::Danger);
    }

    #[test]
    fn achtung() {
        assert_eq!(extract("Signalwort\nAchtung").unwrap(), SignalWord::Warning);
    }

    #[test]
    fn first_match_decides() {
        let text = "Signalwort\nAchtung\n\nAbschnitt 16\nSignalwort\nGefahr";
        assert_eq!(extract(text).unwrap(), SignalWord::Warning);
    }

    #[test]
    fn gefahr_outranks_achtung_within_one_span() {
        let text = "Signalwort: Achtung, nach alter Fassung Gefahr";
        assert_eq!(extract(text).unwrap(), SignalWord::Danger);
    }

    #[test]
    fn plural_keyword_case_insensitive() {
        assert_eq!(extract("SIGNALWÖRTER\nachtung").unwrap(), SignalWord::Warning);
    }

    #[test]
    fn keyword_without_value() {
        assert_eq!(extract("Signalwort\nkeines"), Err(ExtractError::NoValidCandidate));
    }

    #[test]
    fn no_keyword() {
        assert_eq!(extract(""), Err(ExtractError::NotFound));
    }
}
