//! Typed mirror of the One Call response document.
//!
//! Field names match the upstream snake_case keys exactly; unknown keys are
//! ignored on decode. All timestamps are Unix epoch seconds and are never
//! mutated, only converted to the viewer's timezone at render time.

use serde::{Deserialize, Serialize};

/// The complete parsed response for one query, immutable after decode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastSnapshot {
    pub lat: f64,
    pub lon: f64,
    pub timezone: String,
    pub timezone_offset: i32,
    pub current: CurrentConditions,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub minutely: Vec<MinuteEntry>,
    pub hourly: Vec<HourlyEntry>,
    pub daily: Vec<DailyEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alerts: Vec<Alert>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherCondition {
    pub id: u32,
    pub main: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub dt: i64,
    pub sunrise: i64,
    pub sunset: i64,
    pub temp: f64,
    pub feels_like: f64,
    pub pressure: u32,
    pub humidity: u8,
    pub dew_point: f64,
    pub uvi: f64,
    pub clouds: u8,
    /// Meters.
    pub visibility: u32,
    pub wind_speed: f64,
    pub wind_deg: u16,
    pub wind_gust: f64,
    pub weather: Vec<WeatherCondition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MinuteEntry {
    pub dt: i64,
    pub precipitation: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourlyEntry {
    pub dt: i64,
    pub temp: f64,
    pub feels_like: f64,
    pub pressure: u32,
    pub humidity: u8,
    pub dew_point: f64,
    pub uvi: f64,
    pub clouds: u8,
    /// Meters.
    pub visibility: u32,
    pub wind_speed: f64,
    pub wind_deg: u16,
    pub wind_gust: f64,
    pub weather: Vec<WeatherCondition>,
    /// Probability of precipitation, 0.0..=1.0.
    pub pop: f64,
}

/// Temperature breakdown over a forecast day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyTemps {
    pub day: f64,
    pub min: f64,
    pub max: f64,
    pub night: f64,
    pub eve: f64,
    pub morn: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyFeelsLike {
    pub day: f64,
    pub night: f64,
    pub eve: f64,
    pub morn: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyEntry {
    pub dt: i64,
    pub sunrise: i64,
    pub sunset: i64,
    pub moonrise: i64,
    pub moonset: i64,
    /// 0.0..=1.0, where 0.5 is a full moon.
    pub moon_phase: f64,
    pub temp: DailyTemps,
    pub feels_like: DailyFeelsLike,
    pub pressure: u32,
    pub humidity: u8,
    pub dew_point: f64,
    pub wind_speed: f64,
    pub wind_deg: u16,
    pub wind_gust: f64,
    pub weather: Vec<WeatherCondition>,
    pub clouds: u8,
    pub pop: f64,
    pub uvi: f64,
    /// Rain volume in mm. Absent means no precipitation was reported,
    /// which is not the same thing as 0mm.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rain: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub sender_name: String,
    pub event: String,
    pub start: i64,
    pub end: i64,
    pub description: String,
    pub tags: Vec<String>,
}
