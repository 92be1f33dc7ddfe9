use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a forecast run.
///
/// All variants are terminal: the pipeline reports the message and exits
/// without partial output.
#[derive(Debug, Error)]
pub enum ForecastError {
    /// The API key file was not found (or was blank). Checked before any
    /// network activity.
    #[error("cannot find an API key in {0:?}, so aborting")]
    ApiKeyMissing(PathBuf),

    /// A command-line value failed validation.
    #[error("an invalid {field} ({value}) was provided")]
    InvalidArgument { field: &'static str, value: String },

    /// The HTTP request could not be sent, read, or came back non-2xx.
    #[error("weather request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The weather service answered with an empty body.
    #[error("no data was received from the weather service")]
    NoData,

    /// The response body was not a forecast document.
    #[error("failed to parse the forecast response: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ForecastError {
    pub fn invalid_argument(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidArgument { field, value: value.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_names_field_and_value() {
        let err = ForecastError::invalid_argument("latitude", "91.5");
        assert_eq!(err.to_string(), "an invalid latitude (91.5) was provided");
    }

    #[test]
    fn api_key_missing_names_the_file() {
        let err = ForecastError::ApiKeyMissing(PathBuf::from("openweathermap.apikey"));
        assert!(err.to_string().contains("openweathermap.apikey"));
    }
}
