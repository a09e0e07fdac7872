use crate::extractor::patterns::WGK_RE;
use crate::extractor::record::ExtractError;

/// Water hazard class digit after "Wassergefährdungsklasse" or "WGK".
/// The last match in the document wins.
pub fn extract(text: &str) -> Result<char, ExtractError> {
    let mut digit = None;

    for caps in WGK_RE.captures_iter(text) {
        digit = caps[2].chars().next();
    }

    digit.ok_or(ExtractError::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_keyword() {
        assert_eq!(extract("WGK 2").unwrap(), '2');
    }

    #[test]
    fn long_keyword() {
        assert_eq!(extract("Wassergefährdungsklasse 3 (stark wassergefährdend)").unwrap(), '3');
    }

    #[test]
    fn last_match_wins() {
        let text = "WGK 1\nAngaben nach Anhang 2\nWGK 2";
        assert_eq!(extract(text).unwrap(), '2');
    }

    #[test]
    fn requires_whitespace_separator() {
        // "WGK: 1" does not match; the digit must follow whitespace directly
        assert_eq!(extract("WGK: 1"), Err(ExtractError::NotFound));
    }

    #[test]
    fn no_keyword() {
        assert_eq!(extract("keine Angabe"), Err(ExtractError::NotFound));
    }
}
