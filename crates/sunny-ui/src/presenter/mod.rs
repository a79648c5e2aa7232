//! Turns the page state into a toolkit-independent view tree.
//!
//! Exactly one `Body` is produced per render, chosen from the lifecycle
//! variant and the size of the filtered result.

pub mod text;

use sunny_core::{LoadError, UiConfig, MAX_SKELETON_CARDS};
use sunny_weather::{filter_locations, ForecastDay, Location, SkyIcon};

use crate::state::LoadState;

pub use text::render_text;

pub const PAGE_TITLE: &str = "It's Always Sunny";
pub const PAGE_SUBTITLE: &str = "Find places where it's warm and sunny this weekend (70°F+)";
pub const FILTER_PLACEHOLDER: &str = "Filter locations...";
pub const REFRESH_LABEL: &str = "Refresh Forecast";
pub const CARD_FOOTER: &str = "Perfect weekend getaway destination!";
pub const EMPTY_TITLE: &str = "No locations found";
pub const EMPTY_BODY: &str =
    "Try adjusting your filter or check back later for more sunny destinations.";
pub const ERROR_TITLE: &str = "Couldn't load forecasts";
pub const RETRY_LABEL: &str = "Retry";

/// Fixed icon set used by the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Sun,
    Cloud,
    MapPin,
    Thermometer,
}

impl From<SkyIcon> for Icon {
    fn from(icon: SkyIcon) -> Self {
        match icon {
            SkyIcon::Sun => Icon::Sun,
            SkyIcon::Cloud => Icon::Cloud,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub filter: FilterField,
    pub refresh: ButtonView,
    pub body: Body,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterField {
    pub placeholder: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonView {
    pub label: &'static str,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    Skeleton(Vec<SkeletonCard>),
    Cards(Vec<LocationCard>),
    Empty(MessageCard),
    Failed(ErrorCard),
}

/// A grey block standing in for text that hasn't loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder {
    pub width_percent: u8,
    pub rows: u8,
}

impl Placeholder {
    const fn new(width_percent: u8, rows: u8) -> Self {
        Self { width_percent, rows }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkeletonCard {
    pub header: Vec<Placeholder>,
    pub content: Vec<Placeholder>,
}

impl Default for SkeletonCard {
    fn default() -> Self {
        Self {
            header: vec![Placeholder::new(50, 1), Placeholder::new(25, 1)],
            content: vec![
                Placeholder::new(100, 3),
                Placeholder::new(75, 1),
                Placeholder::new(50, 1),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationCard {
    /// Identity key, the location name
    pub key: String,
    pub icon: Icon,
    pub title: String,
    pub description: String,
    pub days: Vec<DayRow>,
    pub footer: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayRow {
    pub date: String,
    pub temp_icon: Icon,
    pub temperature: String,
    pub condition_icon: Icon,
    pub condition: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageCard {
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorCard {
    pub title: &'static str,
    pub message: &'static str,
    pub action: &'static str,
}

impl DayRow {
    fn from_day(day: &ForecastDay) -> Self {
        Self {
            date: day.date.clone(),
            temp_icon: Icon::Thermometer,
            temperature: day.temp_label(),
            condition_icon: day.icon().into(),
            condition: day.condition.clone(),
        }
    }
}

impl LocationCard {
    fn from_location(location: &Location, show_footer: bool) -> Self {
        Self {
            key: location.name.clone(),
            icon: Icon::MapPin,
            title: location.name.clone(),
            description: location.country.clone(),
            days: location.forecast.iter().map(DayRow::from_day).collect(),
            footer: show_footer.then_some(CARD_FOOTER),
        }
    }
}

fn error_card(error: &LoadError) -> ErrorCard {
    ErrorCard {
        title: ERROR_TITLE,
        message: error.user_message(),
        action: RETRY_LABEL,
    }
}

/// Select the body for the current state and filter.
pub fn render_body(state: &LoadState, filter: &str, ui: &UiConfig) -> Body {
    match state {
        LoadState::Idle | LoadState::Loading { .. } => {
            let count = ui.skeleton_cards.min(MAX_SKELETON_CARDS);
            Body::Skeleton(vec![SkeletonCard::default(); count])
        }
        LoadState::Failed(e) => Body::Failed(error_card(e)),
        LoadState::Loaded(locations) => {
            let filtered = filter_locations(locations, filter);
            if filtered.is_empty() {
                Body::Empty(MessageCard {
                    title: EMPTY_TITLE,
                    body: EMPTY_BODY,
                })
            } else {
                Body::Cards(
                    filtered
                        .into_iter()
                        .map(|loc| LocationCard::from_location(loc, ui.show_footer))
                        .collect(),
                )
            }
        }
    }
}

/// Build the whole page.
pub fn render(state: &LoadState, filter: &str, ui: &UiConfig) -> PageView {
    PageView {
        title: PAGE_TITLE,
        subtitle: PAGE_SUBTITLE,
        filter: FilterField {
            placeholder: FILTER_PLACEHOLDER,
            value: filter.to_string(),
        },
        refresh: ButtonView {
            label: REFRESH_LABEL,
            enabled: !state.is_loading(),
        },
        body: render_body(state, filter, ui),
    }
}
