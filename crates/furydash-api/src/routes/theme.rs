//! Theme endpoint - Resolved brand/theme for the requesting host

use crate::AppState;
use axum::extract::Host;

/// Get the resolved brand/theme for the requesting hostname (JSON API)
///
/// No route override applies here; the resolution reflects the brand's
/// own country prefix.
pub async fn api_theme(
    state: axum::extract::State<AppState>,
    Host(hostname): Host,
) -> String {
    let host = hostname.split(':').next().unwrap_or("");
    let resolution = state.brands.resolve(host, None);
    serde_json::to_string(&resolution).unwrap_or_default()
}
