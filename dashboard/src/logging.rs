//! Browser console logging for `tracing` events

/// Routes `tracing` output (events and spans) to the browser console.
/// A second call leaves the first subscriber in place.
#[cfg(target_arch = "wasm32")]
pub fn init() {
    let _ = tracing_wasm::try_set_as_global_default();
}

// no browser console off wasm; the default no-op dispatcher stays
#[cfg(not(target_arch = "wasm32"))]
pub fn init() {}
