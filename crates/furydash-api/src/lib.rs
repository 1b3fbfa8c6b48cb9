//! HTTP server with HTMX support
//!
//! Routes are organized into modules:
//! - routes::dashboard: country dashboard pages, transaction table partials
//! - routes::theme: resolved brand/theme JSON endpoint

pub mod error;
pub mod routes;

use axum::{response::Redirect, routing::get, Router};
use furydash_config::Config;
use furydash_core::{BrandRegistry, ClassList, DashboardState, ThemeResolution};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;

pub use error::ApiError;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub dashboard: Arc<RwLock<DashboardState>>,
    pub brands: Arc<BrandRegistry>,
    pub config: Config,
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    use routes::dashboard::{
        api_transaction_detail, api_transactions, htmx_dashboard_list, page_chile, page_colombia,
        page_peru,
    };
    use routes::theme::api_theme;

    Router::new()
        // API endpoints
        .route("/api/health", get(health_check))
        .route("/api/transactions", get(api_transactions))
        .route("/api/transactions/:id", get(api_transaction_detail))
        .route("/api/theme", get(api_theme))
        // Country pages; the bare root lands on Chile
        .route("/", get(|| async { Redirect::to("/cl") }))
        .route("/cl", get(page_chile))
        .route("/co", get(page_colombia))
        .route("/pe", get(page_peru))
        // HTMX partial route (table content)
        .route("/dashboard/list", get(htmx_dashboard_list))
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

// ==================== Template Functions ====================

/// Base HTML template
///
/// The resolved theme class arrives inside `body_class`; the small style
/// block below gives each theme class its palette.
pub fn base_html(title: &str, body_class: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{} - Furydash</title>
    <script src="https://unpkg.com/htmx.org@1.9.10"></script>
    <script src="https://cdn.tailwindcss.com"></script>
    <style>
        .htmx-indicator {{ opacity: 0; transition: opacity 0.3s; }}
        .htmx-request .htmx-indicator {{ opacity: 1; }}
        body.fury-default {{ background: #f9fafb; color: #111827; }}
        body.fury-dark {{ background: #111827; color: #f9fafb; }}
        body.fury-light {{ background: #ffffff; color: #1f2937; }}
        body.fury-flat {{ background: #f3f4f6; color: #374151; }}
    </style>
</head>
<body class="{}">
    {}
</body>
</html>"#,
        title, body_class, content
    )
}

/// Navigation header with brand logo and country tabs
pub fn nav_header(resolution: &ThemeResolution, current_path: &str) -> String {
    let mut nav = format!(
        r#"<div class='bg-white border-b shadow-sm'><div class='max-w-5xl mx-auto px-4 py-3 flex items-center gap-6'>
        <img src='/{}' alt='logo' class='h-8'>
        <span class='text-lg font-bold text-indigo-600'>Furydash</span>
        <ul class='flex gap-1'>"#,
        resolution.logo
    );

    for country in furydash_core::Country::ALL {
        let path = format!("/{}", country.route_segment());
        let is_active = current_path == path;
        let active_class = if is_active {
            "bg-indigo-50 text-indigo-600"
        } else {
            "text-gray-600 hover:bg-gray-50"
        };
        nav.push_str(&format!(
            r#"<li><a href='{}' class='px-3 py-2 rounded-lg {}'>{}</a></li>"#,
            path,
            active_class,
            country.name()
        ));
    }
    nav.push_str("</ul></div></div>");
    nav
}

/// Check if request is from HTMX (partial page update)
fn is_htmx_request(headers: &axum::http::HeaderMap) -> bool {
    headers.get("hx-request").is_some()
}

/// Wrap content for full page or HTMX partial
pub fn page_response(
    headers: &axum::http::HeaderMap,
    title: &str,
    current_path: &str,
    resolution: &ThemeResolution,
    inner_content: &str,
) -> String {
    if is_htmx_request(headers) {
        // HTMX partial - just the content area (no header for partial updates)
        format!(
            r#"<main class='max-w-5xl mx-auto p-6'>{}</main>"#,
            inner_content
        )
    } else {
        // Full page - wrap with base HTML, nav header, and the resolved theme
        let mut body_classes = ClassList::new();
        furydash_core::apply_theme(&mut body_classes, resolution.theme_class);
        base_html(
            title,
            &body_classes.as_attr(),
            &format!(
                r#"{}
    <main class='max-w-5xl mx-auto p-6'>{}</main>"#,
                nav_header(resolution, current_path),
                inner_content
            ),
        )
    }
}

/// Start the HTTP server
///
/// Creates the router, binds to the configured address, and starts
/// listening for requests.
pub async fn start_server(
    config: Config,
    dashboard: Arc<RwLock<DashboardState>>,
    brands: Arc<BrandRegistry>,
) {
    let addr = config.bind_addr();
    let state = AppState {
        dashboard,
        brands,
        config,
    };

    let router = create_router(state);

    let listener = match TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            eprintln!("[ERROR] Failed to bind {}: {}", addr, e);
            return;
        }
    };
    eprintln!("[INFO] Starting Furydash server on http://{}", addr);
    eprintln!("[INFO] Available routes:");
    eprintln!("[INFO]   - /cl /co /pe (Country dashboards)");
    eprintln!("[INFO]   - / (Redirects to /cl)");
    eprintln!("[INFO]   - /api/* (JSON API endpoints)");

    match axum::serve(listener, router).await {
        Ok(_) => eprintln!("[INFO] Server stopped gracefully"),
        Err(e) => eprintln!("[ERROR] Server error: {}", e),
    }
}
