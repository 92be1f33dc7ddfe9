//! The three terminal views: current conditions, hourly, daily.
//!
//! Every function here is pure over an already-parsed snapshot. Timestamps
//! are converted epoch → UTC instant → the given timezone for display only,
//! so callers pass `Local` and tests pass a fixed offset.

use chrono::{DateTime, Days, Duration, NaiveDateTime, NaiveTime, TimeZone, Timelike, Utc};

use crate::model::{DailyEntry, ForecastSnapshot, HourlyEntry};

mod table;

use table::{Align, Table, panel};

/// Current conditions panel: location, temperature, humidity, and one line
/// per active alert. No alerts, no alert lines.
pub fn render_current(snapshot: &ForecastSnapshot) -> String {
    let current = &snapshot.current;

    let mut lines = vec![
        format!("Weather for {} @ {}", snapshot.lat, snapshot.lon),
        format!(
            "Temperature is {:.0} degrees, feeling like {:.0}",
            current.temp, current.feels_like
        ),
        format!("Humidity is {}%", current.humidity),
    ];
    for alert in &snapshot.alerts {
        lines.push(format!("ALERT: {} ({})", alert.event, alert.sender_name));
    }

    panel("Current conditions", &lines)
}

/// Hourly table, limited to the rolling display window around `now`.
pub fn render_hourly<Tz: TimeZone>(snapshot: &ForecastSnapshot, now: &DateTime<Tz>) -> String {
    let tz = now.timezone();

    let mut table = Table::new()
        .column("Date", Align::Right)
        .column("Temp", Align::Right)
        .column("Humid", Align::Right)
        .column("Rain", Align::Right)
        .column("Wind", Align::Left)
        .column("Summary", Align::Left)
        .column("Cloud", Align::Right)
        .column("Vis.", Align::Right)
        .column("UV", Align::Left);

    for entry in hourly_window(&snapshot.hourly, now) {
        table.row(hourly_row(entry, &tz));
    }

    table.render()
}

/// Daily table: one row per forecast day.
pub fn render_daily<Tz: TimeZone>(snapshot: &ForecastSnapshot, tz: &Tz) -> String {
    let mut table = Table::new()
        .column("Date", Align::Left)
        .column("Temp", Align::Left)
        .column("Humid", Align::Right)
        .column("Rain", Align::Right)
        .column("Wind", Align::Left)
        .column("Sun", Align::Left);

    for day in &snapshot.daily {
        table.row(daily_row(day, tz));
    }

    table.render()
}

/// Select the hourly entries inside the display window: from an hour before
/// `now` through 23:00 local time on the following calendar day. Upstream
/// (chronological) order is preserved.
pub fn hourly_window<'a, Tz: TimeZone>(
    hourly: &'a [HourlyEntry],
    now: &DateTime<Tz>,
) -> Vec<&'a HourlyEntry> {
    let tz = now.timezone();
    let (earliest, latest) = display_window(now.naive_local());

    hourly
        .iter()
        .filter(|entry| {
            let local = local_time(&tz, entry.dt);
            earliest <= local && local <= latest
        })
        .collect()
}

fn display_window(now_local: NaiveDateTime) -> (NaiveDateTime, NaiveDateTime) {
    let earliest = now_local - Duration::hours(1);
    let latest = earliest
        .date()
        .checked_add_days(Days::new(1))
        .unwrap_or_else(|| earliest.date())
        .and_time(NaiveTime::from_hms_opt(23, 0, 0).unwrap_or(NaiveTime::MIN));
    (earliest, latest)
}

fn hourly_row<Tz: TimeZone>(entry: &HourlyEntry, tz: &Tz) -> Vec<String> {
    let local = local_time(tz, entry.dt);

    // Hours carry a date label only at local midnight.
    let label = if local.hour() == 0 {
        local.format("%b %-d @ %H").to_string()
    } else {
        local.format("%H").to_string()
    };

    let summary = entry
        .weather
        .iter()
        .map(|w| w.description.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    vec![
        label,
        format!("{:.0}", entry.temp),
        format!("{}%", entry.humidity),
        format!("{:.0}%", entry.pop * 100.0),
        format!("{:.0} / {:.0}", entry.wind_speed, entry.wind_gust),
        summary,
        format!("{}%", entry.clouds),
        format!("{:.0}km", f64::from(entry.visibility) / 1000.0),
        format!("{:.0}", entry.uvi),
    ]
}

fn daily_row<Tz: TimeZone>(day: &DailyEntry, tz: &Tz) -> Vec<String> {
    let mut date = local_time(tz, day.dt).format("%a %b %-d").to_string();
    if day.moon_phase == 0.5 {
        date.push_str(" 🌕");
    }

    let rain_volume = day
        .rain
        .map_or_else(|| "--".to_string(), |mm| format!("{mm:.0}mm"));

    let sunrise = local_time(tz, day.sunrise);
    let sunset = local_time(tz, day.sunset);

    vec![
        date,
        format!("{:.0} / {:.0}", day.temp.min, day.temp.max),
        format!("{}%", day.humidity),
        format!("{} @ {:.0}%", rain_volume, day.pop * 100.0),
        format!("{:.0} (up to {:.0})", day.wind_speed, day.wind_gust),
        format!(
            "{} – {} ({})",
            sunrise.format("%H:%M"),
            sunset.format("%H:%M"),
            daylight(day.sunrise, day.sunset)
        ),
    ]
}

/// Daylight duration as h:mm.
fn daylight(sunrise: i64, sunset: i64) -> String {
    let secs = (sunset - sunrise).max(0);
    format!("{}:{:02}", secs / 3600, (secs % 3600) / 60)
}

fn local_time<Tz: TimeZone>(tz: &Tz, epoch: i64) -> NaiveDateTime {
    DateTime::<Utc>::from_timestamp(epoch, 0)
        .unwrap_or_default()
        .with_timezone(tz)
        .naive_local()
}
