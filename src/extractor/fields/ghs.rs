use crate::extractor::patterns::GHS_RE;
use crate::extractor::record::ExtractError;

/// GHS pictogram codes in document order. Repetitions are kept: unlike the
/// H/P lists, this field is neither deduplicated nor sorted here.
pub fn extract(text: &str) -> Result<Vec<String>, ExtractError> {
    let codes: Vec<String> = GHS_RE
        .find_iter(text)
        .map(|m| m.as_str().trim().to_string())
        .collect();

    if codes.is_empty() {
        return Err(ExtractError::NotFound);
    }
    Ok(codes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_and_order_preserved() {
        let codes = extract("GHS07 GHS08 GHS07").unwrap();
        assert_eq!(codes, vec!["GHS07", "GHS08", "GHS07"]);
    }

    #[test]
    fn separator_and_case_preserved() {
        let codes = extract("Piktogramme: GHS-02, ghs 07").unwrap();
        assert_eq!(codes, vec!["GHS-02", "ghs 07"]);
    }

    #[test]
    fn no_codes() {
        assert_eq!(extract("Gefahrenpiktogramme: keine"), Err(ExtractError::NotFound));
    }
}
