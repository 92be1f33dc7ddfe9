use std::{fs, path::Path};

use crate::error::ForecastError;

/// Fixed name of the key file, looked up in the working directory.
pub const API_KEY_FILE: &str = "openweathermap.apikey";

/// Read the API key from [`API_KEY_FILE`].
///
/// This is a precondition for the whole run and is checked before any
/// network activity. A missing or blank file is `ApiKeyMissing`.
pub fn load_api_key() -> Result<String, ForecastError> {
    load_api_key_from(Path::new(API_KEY_FILE))
}

pub fn load_api_key_from(path: &Path) -> Result<String, ForecastError> {
    let missing = || ForecastError::ApiKeyMissing(path.to_path_buf());

    let contents = fs::read_to_string(path).map_err(|_| missing())?;
    let key = contents.trim();
    if key.is_empty() {
        return Err(missing());
    }

    Ok(key.to_string())
}
