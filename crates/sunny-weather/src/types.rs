use serde::{Deserialize, Serialize};

/// Substring that marks a condition as sunny for icon selection.
pub const SUNNY_MARKER: &str = "Sunny";

/// Sky icon for a forecast day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkyIcon {
    Sun,
    Cloud,
}

impl SkyIcon {
    /// Pick the icon for a free-text condition.
    ///
    /// Anything containing "Sunny" (case-sensitive) gets the sun, everything
    /// else the cloud.
    pub fn for_condition(condition: &str) -> Self {
        if condition.contains(SUNNY_MARKER) {
            Self::Sun
        } else {
            Self::Cloud
        }
    }
}

/// One day's prediction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastDay {
    /// Degrees Fahrenheit
    pub temp: i32,
    pub condition: String,
    /// Day label, e.g. "Saturday"
    pub date: String,
}

impl ForecastDay {
    pub fn new(temp: i32, condition: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            temp,
            condition: condition.into(),
            date: date.into(),
        }
    }

    pub fn icon(&self) -> SkyIcon {
        SkyIcon::for_condition(&self.condition)
    }

    /// Temperature as displayed, e.g. "82°F"
    pub fn temp_label(&self) -> String {
        format!("{}°F", self.temp)
    }
}

/// A candidate weekend destination.
///
/// `name` doubles as the identity key when rendering; uniqueness is assumed,
/// not checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub country: String,
    /// Chronological, one entry per weekend day
    pub forecast: Vec<ForecastDay>,
    /// Carried with the data; nothing filters or renders on it.
    pub is_sunny: bool,
}

impl Location {
    pub fn new(
        name: impl Into<String>,
        country: impl Into<String>,
        forecast: Vec<ForecastDay>,
    ) -> Self {
        Self {
            name: name.into(),
            country: country.into(),
            forecast,
            is_sunny: true,
        }
    }
}
