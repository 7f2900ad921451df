//! Weather widget presentation helpers over a normalized forecast.

use chrono::{NaiveDateTime, Timelike};
use platform_host::HourlySeries;

use crate::model::WidgetSize;

const FORECAST_OFFSETS_HOURS: [usize; 5] = [3, 6, 9, 12, 15];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Icon family for a WMO weather code.
pub enum WeatherIconKind {
    /// Clear or mainly clear.
    Sun,
    /// Cloudy, overcast, fog, or an unmapped code.
    Cloud,
    /// Drizzle, rain, or showers.
    Rain,
    /// Thunderstorm.
    Storm,
    /// Snow.
    Snow,
}

/// Returns the human-readable description for a WMO weather code.
pub fn describe(code: u16) -> &'static str {
    match code {
        0 => "Clear Sky",
        1 => "Mainly Clear",
        2 => "Partly Cloudy",
        3 => "Overcast",
        45..=48 => "Foggy",
        51..=55 => "Drizzle",
        61..=65 => "Rain",
        71..=77 => "Snow",
        80..=82 => "Showers",
        95.. => "Thunderstorm",
        _ => "Unknown",
    }
}

/// Returns the icon family for a WMO weather code.
pub fn icon_kind(code: u16) -> WeatherIconKind {
    match code {
        0 | 1 => WeatherIconKind::Sun,
        2 | 3 | 45..=48 => WeatherIconKind::Cloud,
        51..=67 | 80..=82 => WeatherIconKind::Rain,
        71..=77 => WeatherIconKind::Snow,
        95.. => WeatherIconKind::Storm,
        _ => WeatherIconKind::Cloud,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One entry of the forecast strip.
pub struct ForecastItem {
    /// Hour label such as `3pm` or `12am`.
    pub label: String,
    /// Rounded temperature in °C.
    pub temp: i64,
}

/// Formats an hour of day (0-23) as `12am`, `3pm`, ...
pub fn hour_label(hour: u32) -> String {
    let twelve = match hour % 12 {
        0 => 12,
        h => h,
    };
    let suffix = if hour >= 12 { "pm" } else { "am" };
    format!("{twelve}{suffix}")
}

/// Selects the forecast strip for a widget of `size`.
///
/// `current_hour` indexes today's first hourly sample, so offsets are taken from it directly.
/// Indices beyond the series, missing temperatures, and unparseable timestamps are skipped.
pub fn forecast_items(
    hourly: &HourlySeries,
    current_hour: u32,
    size: WidgetSize,
) -> Vec<ForecastItem> {
    let count = if size == WidgetSize::Large { 5 } else { 3 };
    let len = hourly.time.len().min(hourly.temperature_2m.len());
    FORECAST_OFFSETS_HOURS
        .iter()
        .take(count)
        .filter_map(|offset| {
            let index = current_hour as usize + offset;
            if index >= len {
                return None;
            }
            let temp = hourly.temperature_2m[index]?;
            let stamp =
                NaiveDateTime::parse_from_str(&hourly.time[index], "%Y-%m-%dT%H:%M").ok()?;
            Some(ForecastItem {
                label: hour_label(stamp.hour()),
                temp: temp.round() as i64,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn two_day_series() -> HourlySeries {
        let mut series = HourlySeries::default();
        for day in [16, 17] {
            for hour in 0..24 {
                series.time.push(format!("2026-10-{day}T{hour:02}:00"));
                series.temperature_2m.push(Some(20.0 + f64::from(hour) / 4.0));
                series.weather_code.push(Some(1));
            }
        }
        series
    }

    #[test]
    fn wmo_codes_map_to_descriptions() {
        let cases = [
            (0, "Clear Sky"),
            (1, "Mainly Clear"),
            (2, "Partly Cloudy"),
            (3, "Overcast"),
            (45, "Foggy"),
            (53, "Drizzle"),
            (63, "Rain"),
            (75, "Snow"),
            (81, "Showers"),
            (99, "Thunderstorm"),
            (66, "Unknown"),
        ];
        for (code, label) in cases {
            assert_eq!(describe(code), label, "code {code}");
        }
    }

    #[test]
    fn wmo_codes_map_to_icons() {
        assert_eq!(icon_kind(1), WeatherIconKind::Sun);
        assert_eq!(icon_kind(48), WeatherIconKind::Cloud);
        assert_eq!(icon_kind(66), WeatherIconKind::Rain);
        assert_eq!(icon_kind(81), WeatherIconKind::Rain);
        assert_eq!(icon_kind(73), WeatherIconKind::Snow);
        assert_eq!(icon_kind(96), WeatherIconKind::Storm);
        assert_eq!(icon_kind(90), WeatherIconKind::Cloud);
    }

    #[test]
    fn hour_labels_use_twelve_hour_clock() {
        assert_eq!(hour_label(0), "12am");
        assert_eq!(hour_label(9), "9am");
        assert_eq!(hour_label(12), "12pm");
        assert_eq!(hour_label(15), "3pm");
    }

    #[test]
    fn strip_length_follows_widget_size() {
        let series = two_day_series();
        let small = forecast_items(&series, 9, WidgetSize::Small);
        assert_eq!(
            small,
            vec![
                ForecastItem { label: "12pm".to_string(), temp: 23 },
                ForecastItem { label: "3pm".to_string(), temp: 24 },
                ForecastItem { label: "6pm".to_string(), temp: 25 },
            ]
        );
        assert_eq!(forecast_items(&series, 9, WidgetSize::Medium).len(), 3);
        let large = forecast_items(&series, 9, WidgetSize::Large);
        assert_eq!(large.len(), 5);
        assert_eq!(large[4].label, "12am");
    }

    #[test]
    fn offsets_past_the_series_are_skipped() {
        let series = two_day_series();
        let late = forecast_items(&series, 23, WidgetSize::Large);
        assert_eq!(
            late.iter().map(|item| item.label.as_str()).collect::<Vec<_>>(),
            vec!["2am", "5am", "8am", "11am", "2pm"]
        );

        let mut short = series.clone();
        short.time.truncate(14);
        short.temperature_2m.truncate(14);
        assert_eq!(forecast_items(&short, 9, WidgetSize::Large).len(), 1);
    }

    #[test]
    fn missing_samples_are_left_out_of_the_strip() {
        let mut series = two_day_series();
        series.temperature_2m[15] = None;
        let labels = forecast_items(&series, 9, WidgetSize::Large)
            .into_iter()
            .map(|item| item.label)
            .collect::<Vec<_>>();
        assert_eq!(labels, vec!["12pm", "6pm", "9pm", "12am"]);
    }
}
