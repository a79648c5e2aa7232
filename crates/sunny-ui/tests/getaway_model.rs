//! Lifecycle tests for GetawayModel.
//!
//! Time is paused, so sleeping in the test advances the mock source's delay
//! deterministically.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use sunny_core::{LoadError, UiConfig};
use sunny_ui::{Body, GetawayModel, LoadState};
use sunny_weather::{mock_locations, Location, LocationSource, MockSource};

const DELAY: Duration = Duration::from_millis(1500);

fn mock_model() -> GetawayModel {
    GetawayModel::new(
        Arc::new(MockSource::new(DELAY)),
        tokio::runtime::Handle::current(),
        UiConfig::default(),
    )
}

fn names(model: &GetawayModel) -> Vec<String> {
    model.locations().iter().map(|l| l.name.clone()).collect()
}

/// Fails the first `failures` fetches, then serves the mock catalog.
struct FlakySource {
    failures: usize,
    calls: AtomicUsize,
}

#[async_trait]
impl LocationSource for FlakySource {
    fn name(&self) -> &str {
        "flaky"
    }

    fn latency(&self) -> Duration {
        DELAY
    }

    async fn fetch(&self) -> Result<Vec<Location>, LoadError> {
        tokio::time::sleep(DELAY).await;
        if self.calls.fetch_add(1, Ordering::SeqCst) < self.failures {
            Err(LoadError::Network("connection reset".into()))
        } else {
            Ok(mock_locations())
        }
    }
}

#[tokio::test(start_paused = true)]
async fn test_initial_state_is_loading_and_empty() {
    let mut model = mock_model();
    assert!(model.is_loading());

    model.mount();
    assert!(model.is_loading());
    assert!(model.locations().is_empty());
    assert!(matches!(model.view().body, Body::Skeleton(ref cards) if cards.len() == 6));
}

#[tokio::test(start_paused = true)]
async fn test_load_completes_after_delay() {
    let mut model = mock_model();
    model.mount();

    tokio::time::sleep(Duration::from_millis(1000)).await;
    assert!(!model.poll_channel());
    assert!(model.is_loading());

    tokio::time::sleep(Duration::from_millis(600)).await;
    assert!(model.poll_channel());
    assert!(!model.is_loading());
    assert_eq!(
        names(&model),
        ["Miami", "San Diego", "Cancun", "Barcelona", "Honolulu", "Sydney"]
    );
    assert_eq!(model.locations(), mock_locations().as_slice());
}

#[tokio::test(start_paused = true)]
async fn test_mount_is_idempotent() {
    let mut model = mock_model();
    model.mount();
    model.mount();

    tokio::time::sleep(Duration::from_millis(1600)).await;
    assert!(model.poll_channel());
    assert_eq!(model.locations().len(), 6);

    model.mount();
    assert!(!model.is_loading());
}

#[tokio::test(start_paused = true)]
async fn test_filter_while_loading_then_loaded() {
    let mut model = mock_model();
    model.mount();
    model.set_filter("USA");
    assert_eq!(model.filter(), "USA");
    assert!(matches!(model.view().body, Body::Skeleton(_)));

    tokio::time::sleep(Duration::from_millis(1600)).await;
    model.poll_channel();

    let filtered: Vec<_> = model.filtered().iter().map(|l| l.name.clone()).collect();
    assert_eq!(filtered, ["Miami", "San Diego", "Honolulu"]);
    match model.view().body {
        Body::Cards(cards) => assert_eq!(cards.len(), 3),
        other => panic!("expected cards, got {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn test_filter_is_case_insensitive() {
    let mut model = mock_model();
    model.mount();
    tokio::time::sleep(Duration::from_millis(1600)).await;
    model.poll_channel();

    model.set_filter("MIAMI");
    let filtered: Vec<_> = model.filtered().iter().map(|l| l.name.clone()).collect();
    assert_eq!(filtered, ["Miami"]);

    model.set_filter("");
    assert_eq!(model.filtered().len(), 6);
}

#[tokio::test(start_paused = true)]
async fn test_no_match_shows_empty_state() {
    let mut model = mock_model();
    model.mount();
    tokio::time::sleep(Duration::from_millis(1600)).await;
    model.poll_channel();

    model.set_filter("Antarctica");
    assert!(model.filtered().is_empty());
    assert!(matches!(model.view().body, Body::Empty(_)));
}

#[tokio::test(start_paused = true)]
async fn test_refresh_keeps_locations() {
    let mut model = mock_model();
    model.mount();
    tokio::time::sleep(Duration::from_millis(1600)).await;
    model.poll_channel();
    let before = model.locations().to_vec();

    assert!(model.refresh());
    assert!(model.is_loading());
    assert_eq!(model.locations(), before.as_slice());
    assert!(matches!(model.view().body, Body::Skeleton(_)));

    tokio::time::sleep(Duration::from_millis(1000)).await;
    assert!(!model.poll_channel());
    assert!(model.is_loading());

    tokio::time::sleep(Duration::from_millis(600)).await;
    assert!(model.poll_channel());
    assert!(!model.is_loading());
    assert_eq!(model.locations(), before.as_slice());
    assert_eq!(model.state(), &LoadState::Loaded(before));
}

#[tokio::test(start_paused = true)]
async fn test_refresh_while_loading_is_ignored() {
    let mut model = mock_model();
    model.mount();

    tokio::time::sleep(Duration::from_millis(1000)).await;
    assert!(!model.refresh());

    // The original load still lands on schedule
    tokio::time::sleep(Duration::from_millis(600)).await;
    assert!(model.poll_channel());
    assert_eq!(model.locations().len(), 6);
    assert!(!model.is_loading());
}

#[tokio::test(start_paused = true)]
async fn test_teardown_suppresses_pending_load() {
    let mut model = mock_model();
    model.mount();

    tokio::time::sleep(Duration::from_millis(500)).await;
    model.teardown();
    assert!(model.is_torn_down());

    tokio::time::sleep(Duration::from_millis(2000)).await;
    assert!(!model.poll_channel());
    assert!(model.locations().is_empty());
    assert!(model.is_loading());

    assert!(!model.refresh());
    model.mount();
    tokio::time::sleep(Duration::from_millis(2000)).await;
    assert!(!model.poll_channel());
}

#[tokio::test(start_paused = true)]
async fn test_teardown_suppresses_pending_refresh() {
    let mut model = mock_model();
    model.mount();
    tokio::time::sleep(Duration::from_millis(1600)).await;
    model.poll_channel();

    model.refresh();
    model.teardown();

    tokio::time::sleep(Duration::from_millis(2000)).await;
    assert!(!model.poll_channel());
    assert!(model.is_loading());
    assert_eq!(model.locations().len(), 6);
}

#[tokio::test(start_paused = true)]
async fn test_failure_shows_retry_and_refresh_recovers() {
    let source = Arc::new(FlakySource {
        failures: 1,
        calls: AtomicUsize::new(0),
    });
    let mut model = GetawayModel::new(
        source.clone(),
        tokio::runtime::Handle::current(),
        UiConfig::default(),
    );
    model.mount();

    tokio::time::sleep(Duration::from_millis(1600)).await;
    assert!(model.poll_channel());
    assert!(!model.is_loading());
    assert_eq!(
        model.state().error(),
        Some(&LoadError::Network("connection reset".into()))
    );
    match model.view().body {
        Body::Failed(card) => assert_eq!(card.action, "Retry"),
        other => panic!("expected error card, got {other:?}"),
    }

    assert!(model.refresh());
    assert!(model.is_loading());
    tokio::time::sleep(Duration::from_millis(1600)).await;
    assert!(model.poll_channel());
    assert_eq!(model.locations().len(), 6);
    assert_eq!(source.calls.load(Ordering::SeqCst), 2);
}
