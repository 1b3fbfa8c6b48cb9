//! Dashboard routes - Country pages, transaction table, pagination
//!
//! Features:
//! - Three country pages sharing one table renderer
//! - Filter by keyword (description, status)
//! - HTMX partial page updates
//!
//! Structure:
//! - api.rs: JSON API and HTMX endpoints
//! - page.rs: Full page rendering

pub mod api;
pub mod page;

pub use api::{api_transaction_detail, api_transactions, htmx_dashboard_list};

pub use page::{page_chile, page_colombia, page_peru};
