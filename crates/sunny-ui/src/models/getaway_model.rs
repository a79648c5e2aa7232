// crates/sunny-ui/src/models/getaway_model.rs

use std::sync::mpsc::{Receiver, Sender};
use std::sync::Arc;

use sunny_core::UiConfig;
use sunny_weather::{filter_locations, Location, LocationSource};
use tokio_util::sync::CancellationToken;

use crate::presenter::{self, PageView};
use crate::services::{request_load, request_refresh, LoadServiceMessage};
use crate::state::LoadState;

/// View model for the getaway page.
///
/// Lives on the UI thread. Background work is spawned onto `runtime` and
/// reported back through a channel that `poll_channel` drains.
pub struct GetawayModel {
    state: LoadState,
    filter: String,
    ui: UiConfig,
    source: Arc<dyn LocationSource>,
    runtime: tokio::runtime::Handle,
    tx: Sender<LoadServiceMessage>,
    rx: Receiver<LoadServiceMessage>,
    /// Cancelled on teardown; every request token is a child of it.
    lifetime: CancellationToken,
    pending: Option<CancellationToken>,
    generation: u64,
    mounted: bool,
}

impl GetawayModel {
    pub fn new(
        source: Arc<dyn LocationSource>,
        runtime: tokio::runtime::Handle,
        ui: UiConfig,
    ) -> Self {
        let (tx, rx) = std::sync::mpsc::channel();
        Self {
            state: LoadState::Idle,
            filter: String::new(),
            ui,
            source,
            runtime,
            tx,
            rx,
            lifetime: CancellationToken::new(),
            pending: None,
            generation: 0,
            mounted: false,
        }
    }

    /// First display. Starts the initial load; later calls do nothing.
    pub fn mount(&mut self) {
        if self.mounted || self.is_torn_down() {
            return;
        }
        self.mounted = true;
        tracing::info!("Getaway page mounted, loading from {} source", self.source.name());
        self.start_load();
    }

    /// "Refresh Forecast".
    ///
    /// From `Loaded` this re-enters loading for the source's latency and then
    /// restores the same locations. From `Failed` (or before mount) it runs a
    /// full load. While a request is in flight it is ignored.
    ///
    /// Returns false if nothing was started.
    pub fn refresh(&mut self) -> bool {
        if self.is_torn_down() {
            return false;
        }

        if matches!(self.state, LoadState::Loading { .. }) {
            tracing::info!("Refresh ignored, request #{} still pending", self.generation);
            return false;
        }

        if self.state.can_refresh() {
            let cancel = self.next_request();
            self.state = std::mem::take(&mut self.state).begin_refresh();
            tracing::info!("Refreshing forecast (request #{})", self.generation);
            request_refresh(
                &self.tx,
                &self.runtime,
                self.source.clone(),
                cancel,
                self.generation,
            );
        } else {
            self.mounted = true;
            self.start_load();
        }
        true
    }

    /// Replace the filter text. Any string is accepted.
    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
        tracing::debug!("Filter set to {:?}", self.filter);
    }

    /// Apply finished background work. Returns true if the page changed.
    pub fn poll_channel(&mut self) -> bool {
        let mut changed = false;
        while let Ok(msg) = self.rx.try_recv() {
            changed |= self.apply(msg);
        }
        changed
    }

    /// The page is going away. Pending completions become no-ops.
    pub fn teardown(&mut self) {
        if self.is_torn_down() {
            return;
        }
        tracing::debug!("Getaway page torn down");
        self.lifetime.cancel();
        self.pending = None;
    }

    pub fn is_torn_down(&self) -> bool {
        self.lifetime.is_cancelled()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn locations(&self) -> &[Location] {
        self.state.locations()
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Locations matching the current filter, in load order.
    pub fn filtered(&self) -> Vec<&Location> {
        filter_locations(self.state.locations(), &self.filter)
    }

    pub fn view(&self) -> PageView {
        presenter::render(&self.state, &self.filter, &self.ui)
    }

    fn start_load(&mut self) {
        let cancel = self.next_request();
        self.state = std::mem::take(&mut self.state).begin_load();
        request_load(
            &self.tx,
            &self.runtime,
            self.source.clone(),
            cancel,
            self.generation,
        );
    }

    /// Supersede any pending request and mint a token for the next one.
    fn next_request(&mut self) -> CancellationToken {
        if let Some(previous) = self.pending.take() {
            previous.cancel();
        }
        self.generation += 1;
        let token = self.lifetime.child_token();
        self.pending = Some(token.clone());
        token
    }

    fn apply(&mut self, msg: LoadServiceMessage) -> bool {
        if self.is_torn_down() || msg.generation() != self.generation || !self.state.is_loading() {
            tracing::debug!("Dropping stale completion for request #{}", msg.generation());
            return false;
        }
        self.pending = None;

        let state = std::mem::take(&mut self.state);
        self.state = match msg {
            LoadServiceMessage::LoadDone { result, .. } => {
                match &result {
                    Ok(locations) => tracing::info!("Loaded {} locations", locations.len()),
                    Err(e) => tracing::error!("Failed to load locations: {}", e),
                }
                state.on_load_done(result)
            }
            LoadServiceMessage::RefreshDone { .. } => {
                tracing::info!("Forecast refreshed");
                state.on_refresh_done()
            }
        };
        true
    }
}

impl Drop for GetawayModel {
    fn drop(&mut self) {
        self.lifetime.cancel();
    }
}
