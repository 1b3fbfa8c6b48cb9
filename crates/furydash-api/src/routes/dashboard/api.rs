//! Dashboard API endpoints - JSON API and HTMX partial responses
//!
//! Endpoints:
//! - api_transactions: Current transaction view (JSON)
//! - api_transaction_detail: Single transaction (JSON)
//! - htmx_dashboard_list: Transaction table (HTML fragment)

use crate::{ApiError, AppState};
use axum::extract::Query;
use furydash_core::{DashboardState, ErrorLogger, Transaction, TransactionStatus};
use furydash_utils::{escape_html, format_amount};
use std::collections::HashMap;

/// Map request query parameters onto the dashboard state transitions
///
/// `q` stores a new filter term (resetting to page 1), `nav` moves one
/// page, `page` jumps to an absolute page. Malformed or out-of-range
/// values are ignored.
fn apply_view_params(state: &mut DashboardState, params: &HashMap<String, String>) {
    if let Some(q) = params.get("q") {
        if q != state.filter_term() {
            state.set_filter(q);
        }
    }
    match params.get("nav").map(|s| s.as_str()) {
        Some("next") => state.next_page(),
        Some("prev") => state.previous_page(),
        _ => {}
    }
    if let Some(page) = params.get("page").and_then(|s| s.parse().ok()) {
        state.go_to_page(page);
    }
}

/// Get the current filtered/paginated transaction view (JSON API)
pub async fn api_transactions(
    state: axum::extract::State<AppState>,
    params: Query<HashMap<String, String>>,
) -> String {
    let mut dashboard = state.dashboard.write().await;
    apply_view_params(&mut dashboard, &params);
    serde_json::to_string(&dashboard.response()).unwrap_or_default()
}

/// Get single transaction detail (JSON API)
pub async fn api_transaction_detail(
    state: axum::extract::State<AppState>,
    path: axum::extract::Path<u64>,
) -> String {
    let dashboard = state.dashboard.read().await;
    let id = path.0;

    match dashboard.transaction(id) {
        Some(tx) => serde_json::to_string(tx).unwrap_or_default(),
        None => {
            let error = furydash_core::CoreError::TransactionNotFound { id };
            furydash_core::DefaultErrorLogger.log_error(&error, "api_transaction_detail");
            ApiError::NotFound {
                resource: format!("transaction {}", id),
            }
            .to_json()
        }
    }
}

fn status_badge(status: &TransactionStatus) -> String {
    let (bg, fg) = match status {
        TransactionStatus::Completed => ("bg-green-100", "text-green-700"),
        TransactionStatus::Pending => ("bg-amber-100", "text-amber-700"),
        TransactionStatus::Other(_) => ("bg-gray-100", "text-gray-700"),
    };
    format!(
        r#"<span class='px-2 py-0.5 rounded-full text-xs font-medium {} {}'>{}</span>"#,
        bg,
        fg,
        escape_html(&status.to_string())
    )
}

fn render_row(tx: &Transaction) -> String {
    format!(
        r#"<tr class='border-b hover:bg-gray-50'>
            <td class='px-4 py-2 text-sm text-gray-500'>{}</td>
            <td class='px-4 py-2 text-sm text-gray-500'>{}</td>
            <td class='px-4 py-2 font-medium'>{}</td>
            <td class='px-4 py-2 text-right font-medium'>{}</td>
            <td class='px-4 py-2'>{}</td>
        </tr>"#,
        tx.id,
        tx.date,
        escape_html(&tx.description),
        format_amount(tx.amount),
        status_badge(&tx.status)
    )
}

/// HTMX: Transaction table - Partial page update
///
/// Renders the filtered/paginated table plus pagination controls. Query
/// parameters are applied to the shared view state before rendering.
pub async fn htmx_dashboard_list(
    state: axum::extract::State<AppState>,
    params: Query<HashMap<String, String>>,
) -> String {
    let mut dashboard = state.dashboard.write().await;
    apply_view_params(&mut dashboard, &params);

    let total_count = dashboard.filtered_count();
    let current_page = dashboard.current_page();
    let total_pages = dashboard.total_pages();
    let encoded_q = urlencoding::encode(dashboard.filter_term()).into_owned();

    if total_count == 0 {
        return r#"<div class='text-center py-12 text-gray-500'><p>No matching transactions</p></div>"#
            .to_string();
    }

    let mut html = String::from(
        r#"<table class='w-full text-left'>
        <thead><tr class='border-b text-xs uppercase text-gray-400'>
            <th class='px-4 py-2'>Id</th>
            <th class='px-4 py-2'>Date</th>
            <th class='px-4 py-2'>Description</th>
            <th class='px-4 py-2 text-right'>Amount</th>
            <th class='px-4 py-2'>Status</th>
        </tr></thead><tbody>"#,
    );
    for tx in dashboard.paginated() {
        html.push_str(&render_row(tx));
    }
    html.push_str("</tbody></table>");

    let target = "#dashboard-content";
    html.push_str(&format!(
        r#"<div class='mt-6 flex items-center justify-between flex-wrap gap-4'>
            <span class='text-sm text-gray-500'>{} records, page {} / {}</span>
            <div class='flex items-center gap-2'>
                <button {} onclick='htmx.ajax("GET", "/dashboard/list?q={}&nav=prev", "{}")' class='px-3 py-1 border rounded hover:bg-gray-100'>Prev</button>
                <span class='text-sm text-gray-600'>Page <input type='number' id='page-jump-input' min='1' max='{}' value='{}' class='w-16 text-center border rounded px-2 py-1'></span>
                <button onclick='const p=document.getElementById("page-jump-input").value; htmx.ajax("GET", "/dashboard/list?q={}&page=" + p, "{}")' class='px-3 py-1 border rounded bg-blue-50 hover:bg-blue-100 text-blue-600'>Go</button>
                <button {} onclick='htmx.ajax("GET", "/dashboard/list?q={}&nav=next", "{}")' class='px-3 py-1 border rounded hover:bg-gray-100'>Next</button>
            </div>
        </div>"#,
        total_count,
        current_page,
        total_pages,
        if current_page == 1 { "disabled" } else { "" },
        encoded_q,
        target,
        total_pages,
        current_page,
        encoded_q,
        target,
        if current_page >= total_pages { "disabled" } else { "" },
        encoded_q,
        target
    ));

    html.push_str(r#"<style>button[disabled]{cursor:not-allowed;opacity:0.5;pointer-events:none}</style>"#);
    html
}
