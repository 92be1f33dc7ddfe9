use reqwest::Client;
use tracing::debug;

use crate::{error::ForecastError, model::ForecastSnapshot, options::Options};

const ONECALL_URL: &str = "https://api.openweathermap.org/data/2.5/onecall";
const UNITS: &str = "metric";

/// Thin client around the One Call endpoint. One request per run, no
/// retries, no timeout tuning.
#[derive(Debug, Clone)]
pub struct ForecastClient {
    api_key: String,
    http: Client,
}

impl ForecastClient {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            http: Client::new(),
        }
    }

    /// Perform the single GET and return the raw response body.
    ///
    /// Transport failures and non-success statuses map to `Transport`;
    /// a blank body maps to `NoData`. Nothing is retried.
    pub async fn fetch(&self, options: &Options) -> Result<String, ForecastError> {
        debug!(
            lat = options.coordinates.latitude,
            lon = options.coordinates.longitude,
            lang = %options.language,
            "contacting the weather service"
        );

        let res = self
            .http
            .get(ONECALL_URL)
            .query(&[
                ("lat", options.coordinates.latitude.to_string()),
                ("lon", options.coordinates.longitude.to_string()),
                ("units", UNITS.to_string()),
                ("lang", options.language.clone()),
                ("appid", self.api_key.clone()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body = body_or_no_data(res.text().await?)?;

        debug!(bytes = body.len(), "response received");
        Ok(body)
    }
}

/// Guard against a successful response carrying nothing to parse.
fn body_or_no_data(body: String) -> Result<String, ForecastError> {
    if body.trim().is_empty() {
        return Err(ForecastError::NoData);
    }
    Ok(body)
}

/// Decode a raw body into a [`ForecastSnapshot`].
///
/// Unknown keys are ignored; an empty, `null`, or structurally wrong body
/// is a `Parse` failure.
pub fn parse_forecast(body: &str) -> Result<ForecastSnapshot, ForecastError> {
    let snapshot: ForecastSnapshot = serde_json::from_str(body)?;
    Ok(snapshot)
}
