//! Dashboard page rendering - Full page endpoints
//!
//! The three country pages are thin wrappers around one shared renderer;
//! the only per-country difference is the theme resolution.

use crate::AppState;
use axum::extract::Host;
use furydash_core::Country;

/// Chile dashboard page
pub async fn page_chile(
    state: axum::extract::State<AppState>,
    Host(hostname): Host,
    headers: axum::http::HeaderMap,
) -> axum::response::Html<String> {
    shared_dashboard_page(state, hostname, headers, Country::Chile).await
}

/// Colombia dashboard page
pub async fn page_colombia(
    state: axum::extract::State<AppState>,
    Host(hostname): Host,
    headers: axum::http::HeaderMap,
) -> axum::response::Html<String> {
    shared_dashboard_page(state, hostname, headers, Country::Colombia).await
}

/// Peru dashboard page
pub async fn page_peru(
    state: axum::extract::State<AppState>,
    Host(hostname): Host,
    headers: axum::http::HeaderMap,
) -> axum::response::Html<String> {
    shared_dashboard_page(state, hostname, headers, Country::Peru).await
}

/// Shared dashboard page - Filter box, stats, and the table container
async fn shared_dashboard_page(
    state: axum::extract::State<AppState>,
    hostname: String,
    headers: axum::http::HeaderMap,
    country: Country,
) -> axum::response::Html<String> {
    // Hostname may carry a port; brands are keyed on the bare host
    let host = hostname.split(':').next().unwrap_or("").to_string();
    let resolution = state
        .brands
        .resolve(&host, Some(country.route_segment()));

    let dashboard = state.dashboard.read().await;
    let total = dashboard.transactions_count();
    let page_size = dashboard.page_size();
    drop(dashboard);

    let current_path = format!("/{}", country.route_segment());
    let title = format!("{} Transactions", country.name());

    let inner_content = format!(
        r#"<div class='flex items-center justify-between mb-4'>
            <h2 class='text-2xl font-bold'>{} <span class='text-sm font-medium text-gray-400'>{}</span></h2>
            <input type='text' name='q' placeholder='Filter by description or status...'
                hx-get='/dashboard/list' hx-target='#dashboard-content' hx-trigger='keyup changed delay:300ms'
                class='px-4 py-2 border rounded-lg w-64'>
        </div>
        <div class='grid grid-cols-2 gap-3 mb-4'>
            <div class='bg-indigo-50 p-3 rounded-lg border border-indigo-100'><p class='text-xs text-indigo-600'>Transactions</p><p class='text-xl font-bold'>{}</p></div>
            <div class='bg-purple-50 p-3 rounded-lg border border-purple-100'><p class='text-xs text-purple-600'>Per page</p><p class='text-xl font-bold'>{}</p></div>
        </div>
        <div id='dashboard-content' hx-get='/dashboard/list' hx-trigger='load' class='bg-white rounded-xl shadow-sm p-6 text-gray-900'>
            <p class='text-gray-500 text-center'>Loading...</p>
        </div>"#,
        title, resolution.country, total, page_size
    );

    axum::response::Html(crate::page_response(
        &headers,
        &title,
        &current_path,
        &resolution,
        &inner_content,
    ))
}
