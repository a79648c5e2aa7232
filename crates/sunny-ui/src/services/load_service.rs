//! Location loading backend.
//! The delay and the fetch run off the UI thread; results come back via mpsc.

use std::sync::mpsc::Sender;
use std::sync::Arc;

use sunny_core::LoadError;
use sunny_weather::{Location, LocationSource};
use tokio_util::sync::CancellationToken;

/// Messages sent from background work back to the UI thread.
///
/// `generation` identifies the request; the model drops anything that is
/// not its current one.
#[derive(Debug)]
pub enum LoadServiceMessage {
    LoadDone {
        generation: u64,
        result: Result<Vec<Location>, LoadError>,
    },
    RefreshDone { generation: u64 },
}

impl LoadServiceMessage {
    pub fn generation(&self) -> u64 {
        match self {
            LoadServiceMessage::LoadDone { generation, .. }
            | LoadServiceMessage::RefreshDone { generation } => *generation,
        }
    }
}

/// Fetch the full location set. Sends `LoadDone` unless `cancel` fires first.
pub fn request_load(
    tx: &Sender<LoadServiceMessage>,
    runtime: &tokio::runtime::Handle,
    source: Arc<dyn LocationSource>,
    cancel: CancellationToken,
    generation: u64,
) {
    let tx = tx.clone();
    runtime.spawn(async move {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::debug!("Load #{} cancelled before completion", generation);
            }
            result = source.fetch() => {
                if tx.send(LoadServiceMessage::LoadDone { generation, result }).is_err() {
                    tracing::debug!("Load #{} finished after the page went away", generation);
                }
            }
        }
    });
}

/// Hold the loading state for the source's latency without fetching.
/// Sends `RefreshDone` unless `cancel` fires first.
pub fn request_refresh(
    tx: &Sender<LoadServiceMessage>,
    runtime: &tokio::runtime::Handle,
    source: Arc<dyn LocationSource>,
    cancel: CancellationToken,
    generation: u64,
) {
    let tx = tx.clone();
    let delay = source.latency();
    runtime.spawn(async move {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::debug!("Refresh #{} cancelled before completion", generation);
            }
            _ = tokio::time::sleep(delay) => {
                if tx.send(LoadServiceMessage::RefreshDone { generation }).is_err() {
                    tracing::debug!("Refresh #{} finished after the page went away", generation);
                }
            }
        }
    });
}
