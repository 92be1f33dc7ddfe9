use crate::error::ForecastError;

/// Longest language tag we pass through to the API ("en", "pt_br", ...).
const MAX_LANGUAGE_LEN: usize = 5;
const DEFAULT_LANGUAGE: &str = "en";

/// A validated coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Validated query options for one forecast request.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub coordinates: Coordinates,
    pub language: String,
}

impl Options {
    /// Validate raw latitude/longitude/language strings.
    ///
    /// Latitude must parse as a real number in [-90, 90], longitude in
    /// [-180, 180]. The language tag is optional, defaults to "en", and
    /// must be a non-blank IETF short code of at most 5 characters.
    pub fn new(latitude: &str, longitude: &str, language: Option<&str>) -> Result<Self, ForecastError> {
        let latitude = parse_in_range(latitude, -90.0, 90.0)
            .ok_or_else(|| ForecastError::invalid_argument("latitude", latitude))?;
        let longitude = parse_in_range(longitude, -180.0, 180.0)
            .ok_or_else(|| ForecastError::invalid_argument("longitude", longitude))?;

        let language = match language {
            None => DEFAULT_LANGUAGE.to_string(),
            Some(lang) => {
                // Validate and store the trimmed tag; the raw value only
                // survives into the error message.
                let trimmed = lang.trim();
                if trimmed.is_empty() || trimmed.chars().count() > MAX_LANGUAGE_LEN {
                    return Err(ForecastError::invalid_argument("language", lang));
                }
                trimmed.to_string()
            }
        };

        Ok(Self {
            coordinates: Coordinates { latitude, longitude },
            language,
        })
    }

    /// Build options from positional arguments: `<lat> <lon> [lang]`.
    pub fn from_args(args: &[String]) -> Result<Self, ForecastError> {
        match args {
            [lat, lon] => Self::new(lat, lon, None),
            [lat, lon, lang] => Self::new(lat, lon, Some(lang)),
            _ => Err(ForecastError::invalid_argument(
                "arguments",
                format!("expected 2 or 3 positional values, got {}", args.len()),
            )),
        }
    }
}

fn parse_in_range(text: &str, min: f64, max: f64) -> Option<f64> {
    let value: f64 = text.trim().parse().ok()?;
    (min..=max).contains(&value).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn valid_coordinates_and_language() {
        let opts = Options::new("35.1815", "136.9066", Some("de")).unwrap();
        assert_eq!(opts.coordinates.latitude, 35.1815);
        assert_eq!(opts.coordinates.longitude, 136.9066);
        assert_eq!(opts.language, "de");
    }

    #[test]
    fn language_defaults_to_en() {
        let opts = Options::new("0", "0", None).unwrap();
        assert_eq!(opts.language, "en");
    }

    #[test]
    fn boundary_coordinates_are_accepted() {
        assert!(Options::new("90", "180", None).is_ok());
        assert!(Options::new("-90", "-180", None).is_ok());
    }

    #[test]
    fn latitude_out_of_range_is_rejected() {
        for lat in ["90.0001", "-91", "120"] {
            let err = Options::new(lat, "0", None).unwrap_err();
            assert!(matches!(
                err,
                ForecastError::InvalidArgument { field: "latitude", .. }
            ));
        }
    }

    #[test]
    fn longitude_out_of_range_is_rejected() {
        for lon in ["180.5", "-181", "360"] {
            let err = Options::new("0", lon, None).unwrap_err();
            assert!(matches!(
                err,
                ForecastError::InvalidArgument { field: "longitude", .. }
            ));
        }
    }

    #[test]
    fn non_numeric_coordinates_are_rejected() {
        assert!(Options::new("north", "0", None).is_err());
        assert!(Options::new("0", "", None).is_err());
        assert!(Options::new("  ", "0", None).is_err());
    }

    #[test]
    fn language_longer_than_five_chars_is_rejected() {
        let err = Options::new("0", "0", Some("klingon")).unwrap_err();
        assert!(matches!(
            err,
            ForecastError::InvalidArgument { field: "language", .. }
        ));
    }

    #[test]
    fn blank_language_is_rejected() {
        assert!(Options::new("0", "0", Some("   ")).is_err());
    }

    #[test]
    fn language_is_trimmed_before_validation_and_storage() {
        let opts = Options::new("0", "0", Some(" de ")).unwrap();
        assert_eq!(opts.language, "de");

        // Six raw chars, but only two once trimmed.
        let opts = Options::new("0", "0", Some("  en  ")).unwrap();
        assert_eq!(opts.language, "en");
    }

    #[test]
    fn five_char_language_is_accepted() {
        let opts = Options::new("0", "0", Some("pt_br")).unwrap();
        assert_eq!(opts.language, "pt_br");
    }

    #[test]
    fn from_args_accepts_two_or_three_values() {
        let opts = Options::from_args(&args(&["51.5", "-0.12"])).unwrap();
        assert_eq!(opts.language, "en");

        let opts = Options::from_args(&args(&["51.5", "-0.12", "fr"])).unwrap();
        assert_eq!(opts.language, "fr");
    }

    #[test]
    fn from_args_rejects_any_other_count() {
        for values in [vec![], args(&["51.5"]), args(&["1", "2", "en", "extra"])] {
            let err = Options::from_args(&values).unwrap_err();
            assert!(matches!(
                err,
                ForecastError::InvalidArgument { field: "arguments", .. }
            ));
        }
    }
}
