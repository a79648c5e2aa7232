use std::sync::OnceLock;

// Background runtime that lives for the duration of the application
static RUNTIME: OnceLock<tokio::runtime::Runtime> = OnceLock::new();

/// Handle to the shared background runtime, creating it on first use.
///
/// Models spawn onto it and poll their channels for results. The binary
/// drives its input loop on the same runtime with `block_on`.
pub fn runtime_handle() -> std::io::Result<tokio::runtime::Handle> {
    if let Some(runtime) = RUNTIME.get() {
        return Ok(runtime.handle().clone());
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .thread_name("sunny-tokio")
        .build()?;

    if RUNTIME.set(runtime).is_err() {
        tracing::debug!("Runtime initialized concurrently, using the existing one");
    }

    RUNTIME
        .get()
        .map(|runtime| runtime.handle().clone())
        .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::Other, "runtime unavailable"))
}
