//! Request lifecycle for the getaway page.
//!
//! One tagged value replaces separate "loading" and "locations" cells, so a
//! loading flag can never disagree with the data it guards.

use sunny_core::LoadError;
use sunny_weather::Location;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Not mounted yet. Presents as loading.
    #[default]
    Idle,
    /// A load or refresh is in flight. `retained` is what a refresh restores.
    Loading { retained: Vec<Location> },
    Loaded(Vec<Location>),
    Failed(LoadError),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Idle | LoadState::Loading { .. })
    }

    /// Locations currently held, including those retained across a refresh.
    pub fn locations(&self) -> &[Location] {
        match self {
            LoadState::Loaded(data) => data.as_slice(),
            LoadState::Loading { retained } => retained.as_slice(),
            LoadState::Idle | LoadState::Failed(_) => &[],
        }
    }

    pub fn error(&self) -> Option<&LoadError> {
        match self {
            LoadState::Failed(e) => Some(e),
            _ => None,
        }
    }

    /// True if a refresh can re-toggle loading without fetching.
    pub fn can_refresh(&self) -> bool {
        matches!(self, LoadState::Loaded(_))
    }

    /// State after starting a full load. Any previous data is dropped.
    pub fn begin_load(self) -> Self {
        LoadState::Loading {
            retained: Vec::new(),
        }
    }

    /// State after starting a refresh. Loaded data is retained as-is.
    pub fn begin_refresh(self) -> Self {
        match self {
            LoadState::Loaded(data) => LoadState::Loading { retained: data },
            other => other.begin_load(),
        }
    }

    /// State after a load finished.
    pub fn on_load_done(self, result: Result<Vec<Location>, LoadError>) -> Self {
        match result {
            Ok(data) => LoadState::Loaded(data),
            Err(e) => LoadState::Failed(e),
        }
    }

    /// State after a refresh delay elapsed.
    pub fn on_refresh_done(self) -> Self {
        match self {
            LoadState::Loading { retained } => LoadState::Loaded(retained),
            other => other,
        }
    }
}
