use chrono::Local;
use clap::Parser;
use tracing::info;

use forecast_core::{
    API_KEY_FILE, ForecastClient, ForecastError, Options, load_api_key, parse_forecast,
    render_current, render_daily, render_hourly,
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "forecast", version, about = "Terminal weather forecast")]
pub struct Cli {
    /// Latitude in decimal degrees, -90 to 90.
    #[arg(allow_negative_numbers = true)]
    pub latitude: String,

    /// Longitude in decimal degrees, -180 to 180.
    #[arg(allow_negative_numbers = true)]
    pub longitude: String,

    /// Language short code for weather descriptions, e.g. "en" or "de".
    pub language: Option<String>,
}

impl Cli {
    /// Collapse the parsed arguments back into positional form so option
    /// validation has a single entry point.
    fn options(&self) -> Result<Options, ForecastError> {
        let mut args = vec![self.latitude.clone(), self.longitude.clone()];
        args.extend(self.language.clone());
        Options::from_args(&args)
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let options = self.options()?;

        // Key file is a precondition; fail before touching the network.
        let api_key = load_api_key()?;
        info!(file = API_KEY_FILE, "API key loaded");

        let client = ForecastClient::new(api_key);
        let body = client.fetch(&options).await?;
        let snapshot = parse_forecast(&body)?;
        info!("forecast parsed");

        let now = Local::now();
        print!("{}", render_current(&snapshot));
        print!("{}", render_hourly(&snapshot, &now));
        print!("{}", render_daily(&snapshot, &Local));

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_two_positional_args() {
        let cli = Cli::try_parse_from(["forecast", "35.1815", "136.9066"]).unwrap();
        assert_eq!(cli.latitude, "35.1815");
        assert_eq!(cli.longitude, "136.9066");
        assert!(cli.language.is_none());
    }

    #[test]
    fn accepts_three_positional_args() {
        let cli = Cli::try_parse_from(["forecast", "51.5", "-0.12", "de"]).unwrap();
        assert_eq!(cli.language.as_deref(), Some("de"));
    }

    #[test]
    fn rejects_too_few_or_too_many_args() {
        assert!(Cli::try_parse_from(["forecast"]).is_err());
        assert!(Cli::try_parse_from(["forecast", "51.5"]).is_err());
        assert!(Cli::try_parse_from(["forecast", "1", "2", "en", "extra"]).is_err());
    }

    #[test]
    fn parsed_args_flow_through_options_validation() {
        let cli = Cli::try_parse_from(["forecast", "35.1815", "136.9066", "de"]).unwrap();
        let options = cli.options().unwrap();
        assert_eq!(options.language, "de");
        assert_eq!(options.coordinates.latitude, 35.1815);
    }

    #[test]
    fn out_of_range_latitude_is_rejected_after_parsing() {
        let cli = Cli::try_parse_from(["forecast", "91.5", "0"]).unwrap();
        let err = cli.options().unwrap_err();
        assert!(matches!(
            err,
            ForecastError::InvalidArgument { field: "latitude", .. }
        ));
    }

    #[test]
    fn negative_coordinates_parse_as_values_not_flags() {
        let cli = Cli::try_parse_from(["forecast", "-33.86", "-151.2"]).unwrap();
        assert_eq!(cli.latitude, "-33.86");
    }
}
