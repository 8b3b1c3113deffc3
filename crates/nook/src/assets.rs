//! The fixed (weather mode, hour) -> asset lookup table.
//!
//! Assets are named `{base}/{mode}/{hour}.mp3` with hours 0-23 in 24-hour
//! format (0 = midnight, 12 = noon).

use dayroom_core::types::WeatherMode;

/// One asset path per hour of day, per weather mode.
#[derive(Debug, Clone)]
pub struct AssetTable {
    normal: [String; 24],
    rain: [String; 24],
}

impl AssetTable {
    /// Build the standard table rooted at `base` (e.g. `"assets/ac"`).
    pub fn new(base: &str) -> Self {
        Self {
            normal: std::array::from_fn(|h| format!("{base}/normal/{h}.mp3")),
            rain: std::array::from_fn(|h| format!("{base}/rain/{h}.mp3")),
        }
    }

    /// Resolve the asset for a weather mode and hour of day (0-23).
    pub fn resolve(&self, mode: WeatherMode, hour: u8) -> &str {
        let slot = usize::from(hour) % 24;
        match mode {
            WeatherMode::Normal => &self.normal[slot],
            WeatherMode::Rain => &self.rain[slot],
        }
    }
}

impl Default for AssetTable {
    fn default() -> Self {
        Self::new("assets/ac")
    }
}

/// 12-hour display form of an hour of day.
pub fn format_hour_display(hour: u8) -> String {
    match hour {
        0 => "12am".to_string(),
        12 => "12pm".to_string(),
        h if h < 12 => format!("{h}am"),
        h => format!("{}pm", h - 12),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_per_mode_and_hour() {
        let table = AssetTable::default();
        assert_eq!(table.resolve(WeatherMode::Rain, 9), "assets/ac/rain/9.mp3");
        assert_eq!(
            table.resolve(WeatherMode::Normal, 0),
            "assets/ac/normal/0.mp3"
        );
        assert_eq!(
            table.resolve(WeatherMode::Normal, 23),
            "assets/ac/normal/23.mp3"
        );
    }

    #[test]
    fn hour_display_formatting() {
        assert_eq!(format_hour_display(0), "12am");
        assert_eq!(format_hour_display(12), "12pm");
        assert_eq!(format_hour_display(9), "9am");
        assert_eq!(format_hour_display(21), "9pm");
        assert_eq!(format_hour_display(11), "11am");
        assert_eq!(format_hour_display(23), "11pm");
    }
}
