//! Runtime configuration for the dashboard

use shared::ClientConfig;

/// Backend base URL.
///
/// Same origin as the page by default. A `?api=<url>` query parameter on the
/// page points the widget at another backend.
#[cfg(target_arch = "wasm32")]
pub fn api_base_url() -> String {
    use web_sys::{window, UrlSearchParams};

    let location = window().map(|w| w.location());

    let from_query = location
        .as_ref()
        .and_then(|l| l.search().ok())
        .and_then(|search| UrlSearchParams::new_with_str(&search).ok())
        .and_then(|params| params.get("api"))
        .filter(|api| !api.is_empty());

    from_query
        .or_else(|| location.and_then(|l| l.origin().ok()))
        .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn api_base_url() -> String {
    "http://localhost:8000".to_string()
}

pub fn client_config() -> ClientConfig {
    ClientConfig::with_base_url(api_base_url())
}
