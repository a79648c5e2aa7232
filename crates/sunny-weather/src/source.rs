use std::time::Duration;

use async_trait::async_trait;
use sunny_core::LoadError;

use crate::catalog::mock_locations;
use crate::types::Location;

/// Something that can produce the full set of getaway locations.
///
/// Each call returns a complete replacement set; callers never merge.
#[async_trait]
pub trait LocationSource: Send + Sync {
    fn name(&self) -> &str;

    /// Time a refresh should spend in the loading state.
    fn latency(&self) -> Duration;

    async fn fetch(&self) -> Result<Vec<Location>, LoadError>;
}

/// Serves the built-in catalog after a fixed delay. Never fails.
#[derive(Debug, Clone)]
pub struct MockSource {
    delay: Duration,
}

impl MockSource {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for MockSource {
    fn default() -> Self {
        Self::new(Duration::from_millis(1500))
    }
}

#[async_trait]
impl LocationSource for MockSource {
    fn name(&self) -> &str {
        "mock"
    }

    fn latency(&self) -> Duration {
        self.delay
    }

    async fn fetch(&self) -> Result<Vec<Location>, LoadError> {
        tokio::time::sleep(self.delay).await;
        let locations = mock_locations();
        tracing::debug!("Mock source produced {} locations", locations.len());
        Ok(locations)
    }
}
