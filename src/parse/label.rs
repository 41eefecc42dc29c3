//! Suggestion label tokenizer.
//!
//! The service returns each match as a single comma-separated line whose
//! components are positional:
//!
//! ```text
//! <postal code>, <city part>..., <province>, <region>, <country>
//! ```
//!
//! The last three components are always country, region and province (read
//! from the end), the first is the postal code, and whatever sits between is
//! the locality, which may itself contain several parts.

use crate::config::{CITY_SEPARATOR, LABEL_MIN_COMPONENTS, LABEL_SEPARATOR};
use crate::error_handling::LabelError;
use crate::models::{Record, Suggestion};

/// Positional fields of a suggestion label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionLabel {
    /// Last component
    pub country: String,
    /// Second to last component
    pub region: String,
    /// Third to last component
    pub province: String,
    /// First component
    pub postal_code: String,
    /// Remaining inner components joined with `". "`; empty when there are none.
    pub city: String,
}

impl SuggestionLabel {
    /// Splits `text` on `", "` and assigns components by position.
    ///
    /// # Errors
    ///
    /// Returns `LabelError::TooFewComponents` when there are fewer than four
    /// components.
    pub fn parse(text: &str) -> Result<Self, LabelError> {
        let components: Vec<&str> = text.split(LABEL_SEPARATOR).collect();
        let [postal_code, inner @ .., province, region, country] = components.as_slice() else {
            return Err(LabelError::TooFewComponents {
                label: text.to_string(),
                found: components.len(),
                expected: LABEL_MIN_COMPONENTS,
            });
        };

        Ok(Self {
            country: (*country).to_string(),
            region: (*region).to_string(),
            province: (*province).to_string(),
            postal_code: (*postal_code).to_string(),
            city: inner.join(CITY_SEPARATOR),
        })
    }
}

impl Record {
    /// Normalizes one suggestion into a record.
    ///
    /// # Errors
    ///
    /// Returns the tokenizer's `LabelError` for a label with too few components.
    pub fn from_suggestion(suggestion: &Suggestion) -> Result<Self, LabelError> {
        let label = SuggestionLabel::parse(&suggestion.text)?;
        Ok(Self {
            country: label.country,
            postal_code: label.postal_code,
            city: label.city,
            province: label.province,
            region: label.region,
            latitude: suggestion.latitude,
            longitude: suggestion.longitude,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_label() {
        let label =
            SuggestionLabel::parse("01001, Vitoria-Gasteiz, Araba/Álava, País Vasco, ESP").unwrap();
        assert_eq!(label.country, "ESP");
        assert_eq!(label.region, "País Vasco");
        assert_eq!(label.province, "Araba/Álava");
        assert_eq!(label.postal_code, "01001");
        assert_eq!(label.city, "Vitoria-Gasteiz");
    }

    #[test]
    fn test_parse_joins_inner_components() {
        let label = SuggestionLabel::parse(
            "07001, Palma, Illes Balears, Illes Balears, Illes Balears, ESP",
        )
        .unwrap();
        assert_eq!(label.postal_code, "07001");
        assert_eq!(label.city, "Palma. Illes Balears");
        assert_eq!(label.province, "Illes Balears");
        assert_eq!(label.region, "Illes Balears");
    }

    #[test]
    fn test_parse_minimum_components_leaves_city_empty() {
        let label = SuggestionLabel::parse("51001, Ceuta, Ceuta, ESP").unwrap();
        assert_eq!(label.postal_code, "51001");
        assert_eq!(label.city, "");
        assert_eq!(label.province, "Ceuta");
        assert_eq!(label.region, "Ceuta");
        assert_eq!(label.country, "ESP");
    }

    #[test]
    fn test_parse_rejects_short_label() {
        let err = SuggestionLabel::parse("51001, Ceuta, ESP").unwrap_err();
        assert_eq!(
            err,
            LabelError::TooFewComponents {
                label: "51001, Ceuta, ESP".to_string(),
                found: 3,
                expected: 4,
            }
        );
    }

    #[test]
    fn test_parse_rejects_empty_label() {
        assert!(SuggestionLabel::parse("").is_err());
    }

    #[test]
    fn test_comma_without_space_stays_in_component() {
        let label =
            SuggestionLabel::parse("15001, Coruña,A, A Coruña, Galicia, ESP").unwrap();
        assert_eq!(label.city, "Coruña,A");
    }

    #[test]
    fn test_record_from_suggestion() {
        let suggestion = Suggestion {
            text: "02001, Albacete, Albacete, Castilla-La Mancha, ESP".to_string(),
            latitude: 38.9982696,
            longitude: -1.8498994,
        };
        let record = Record::from_suggestion(&suggestion).unwrap();
        assert_eq!(
            record.to_row(),
            [
                "ESP",
                "02001",
                "Albacete",
                "Albacete",
                "Castilla-La Mancha",
                "38.9982696",
                "-1.8498994"
            ]
        );
    }
}
