//! Core dashboard state and business logic
//!
//! Holds the fixed transaction set, the user-mutable view state (filter
//! term and current page), and the derivations over them. Derived views
//! are recomputed on read; the API layer decides when to invoke them.

pub mod error;
pub mod theme;
pub mod types;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

pub use error::{CoreError, CoreResult, DefaultErrorLogger, ErrorCode, ErrorLogger, ErrorSeverity};
pub use theme::{
    apply_theme, theme_for_country, BrandConfig, BrandRegistry, ClassList, ThemeResolution,
};
pub use types::{Country, ThemeClass, TransactionStatus};

/// Transaction record
///
/// Immutable once created; the full set is fixed at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique transaction identifier
    pub id: u64,
    /// Transaction date
    pub date: NaiveDate,
    /// Free-text description
    pub description: String,
    /// Currency amount
    pub amount: Decimal,
    /// Transaction status
    pub status: TransactionStatus,
}

impl Transaction {
    /// Case-insensitive substring match against description or status
    ///
    /// An empty term matches every transaction.
    pub fn matches(&self, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        let term = term.to_lowercase();
        self.description.to_lowercase().contains(&term)
            || self.status.to_string().to_lowercase().contains(&term)
    }
}

/// Response envelope for the transactions JSON API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionsResponse {
    pub transactions: Vec<Transaction>,
    pub total_count: usize,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
}

/// Dashboard view state
///
/// Owns the transaction list, the filter term, and pagination state.
/// All boundary violations are absorbed as no-ops; no operation here
/// returns an error.
#[derive(Debug, Clone)]
pub struct DashboardState {
    transactions: Vec<Transaction>,
    filter_term: String,
    page_size: usize,
    current_page: usize,
}

impl DashboardState {
    /// Create a dashboard over the built-in sample transaction set
    pub fn new(page_size: usize) -> Self {
        Self::with_transactions(sample_transactions(), page_size)
    }

    /// Create a dashboard over an explicit transaction list
    ///
    /// A page size of 0 is treated as 1.
    pub fn with_transactions(transactions: Vec<Transaction>, page_size: usize) -> Self {
        Self {
            transactions,
            filter_term: String::new(),
            page_size: page_size.max(1),
            current_page: 1,
        }
    }

    /// Current filter term
    pub fn filter_term(&self) -> &str {
        &self.filter_term
    }

    /// Records per page
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Current page (1-indexed)
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Total number of transactions, ignoring the filter
    pub fn transactions_count(&self) -> usize {
        self.transactions.len()
    }

    /// Look up a transaction by id
    pub fn transaction(&self, id: u64) -> Option<&Transaction> {
        self.transactions.iter().find(|tx| tx.id == id)
    }

    /// Store a new filter term and reset to the first page
    pub fn set_filter(&mut self, term: &str) {
        self.filter_term = term.to_string();
        self.current_page = 1;
    }

    /// Transactions matching the current filter term, in insertion order
    ///
    /// Recomputed on every read.
    pub fn filtered(&self) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|tx| tx.matches(&self.filter_term))
            .collect()
    }

    /// Number of transactions matching the current filter term
    pub fn filtered_count(&self) -> usize {
        self.transactions
            .iter()
            .filter(|tx| tx.matches(&self.filter_term))
            .count()
    }

    /// Total pages over the filtered set
    ///
    /// An empty filtered set yields 0 pages, matching the ceiling
    /// division over zero records.
    pub fn total_pages(&self) -> usize {
        (self.filtered_count() + self.page_size - 1) / self.page_size
    }

    /// The slice of the filtered set for the current page
    ///
    /// A current page beyond the last page yields an empty slice.
    pub fn paginated(&self) -> Vec<&Transaction> {
        let start = (self.current_page - 1) * self.page_size;
        self.filtered()
            .into_iter()
            .skip(start)
            .take(self.page_size)
            .collect()
    }

    /// Advance one page; no-op on the last page
    pub fn next_page(&mut self) {
        if self.current_page < self.total_pages() {
            self.current_page += 1;
        }
    }

    /// Go back one page; no-op on the first page
    pub fn previous_page(&mut self) {
        if self.current_page > 1 {
            self.current_page -= 1;
        }
    }

    /// Jump to a page; ignored unless 1 <= page <= total_pages()
    pub fn go_to_page(&mut self, page: usize) {
        if page >= 1 && page <= self.total_pages() {
            self.current_page = page;
        }
    }

    /// Snapshot of the current view for the JSON API
    pub fn response(&self) -> TransactionsResponse {
        TransactionsResponse {
            transactions: self.paginated().into_iter().cloned().collect(),
            total_count: self.filtered_count(),
            page: self.current_page,
            page_size: self.page_size,
            total_pages: self.total_pages(),
        }
    }
}

fn tx(id: u64, day: u32, description: &str, amount: Decimal, status: TransactionStatus) -> Transaction {
    Transaction {
        id,
        date: NaiveDate::from_ymd_opt(2023, 10, day).unwrap_or_default(),
        description: description.to_string(),
        amount,
        status,
    }
}

/// The fixed transaction set loaded at startup
pub fn sample_transactions() -> Vec<Transaction> {
    use TransactionStatus::{Completed, Pending};
    vec![
        tx(1, 1, "Groceries", dec!(150.50), Completed),
        tx(2, 2, "Online Purchase", dec!(55.00), Completed),
        tx(3, 3, "Utility Bill", dec!(80.75), Pending),
        tx(4, 4, "Dinner Out", dec!(120.00), Completed),
        tx(5, 5, "Gas Refill", dec!(45.20), Completed),
        tx(6, 6, "Subscription", dec!(15.00), Completed),
        tx(7, 7, "Pharmacy", dec!(30.00), Pending),
        tx(8, 8, "Book Store", dec!(25.50), Completed),
        tx(9, 9, "Transport", dec!(10.00), Completed),
        tx(10, 10, "Electricity Bill", dec!(110.00), Completed),
        tx(11, 11, "Groceries", dec!(150.50), Completed),
        tx(12, 12, "Online Purchase", dec!(55.00), Completed),
        tx(13, 13, "Utility Bill", dec!(80.75), Pending),
        tx(14, 14, "Dinner Out", dec!(120.00), Completed),
        tx(15, 15, "Gas Refill", dec!(45.20), Completed),
        tx(16, 16, "Subscription", dec!(15.00), Completed),
        tx(17, 17, "Pharmacy", dec!(30.00), Pending),
        tx(18, 18, "Book Store", dec!(25.50), Completed),
        tx(19, 19, "Transport", dec!(10.00), Completed),
        tx(20, 20, "Electricity Bill", dec!(110.00), Completed),
    ]
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    fn dashboard() -> DashboardState {
        DashboardState::new(5)
    }

    fn ids(transactions: &[&Transaction]) -> Vec<u64> {
        transactions.iter().map(|tx| tx.id).collect()
    }

    #[test]
    fn test_empty_term_first_page_in_insertion_order() {
        let state = dashboard();
        assert_eq!(state.filter_term(), "");
        assert_eq!(state.current_page(), 1);
        assert_eq!(ids(&state.paginated()), vec![1, 2, 3, 4, 5]);
        assert_eq!(state.total_pages(), 4);
    }

    #[test]
    fn test_filtered_is_subset_and_contains_term() {
        let mut state = dashboard();
        for term in ["", "bill", "PENDING", "groceries", "o"] {
            state.set_filter(term);
            let filtered = state.filtered();
            assert!(filtered.len() <= state.transactions_count());
            let needle = term.to_lowercase();
            for tx in filtered {
                assert!(
                    tx.description.to_lowercase().contains(&needle)
                        || tx.status.to_string().to_lowercase().contains(&needle),
                    "{:?} does not contain {:?}",
                    tx.description,
                    term
                );
            }
        }
    }

    #[test]
    fn test_pending_filter_scenario() {
        let mut state = dashboard();
        state.set_filter("pending");
        assert_eq!(ids(&state.filtered()), vec![3, 7, 13, 17]);
        assert_eq!(state.total_pages(), 1);
        assert_eq!(state.paginated().len(), 4);
    }

    #[test]
    fn test_paginated_never_exceeds_page_size() {
        let mut state = dashboard();
        for term in ["", "bill", "completed"] {
            state.set_filter(term);
            let pages = state.total_pages();
            for page in 1..=pages.max(1) {
                state.go_to_page(page);
                let slice = state.paginated();
                assert!(slice.len() <= state.page_size());
                if page < pages {
                    assert_eq!(slice.len(), state.page_size());
                }
            }
        }
    }

    #[test]
    fn test_go_to_page_out_of_range_is_ignored() {
        let mut state = dashboard();
        assert_eq!(state.total_pages(), 4);
        state.go_to_page(2);
        assert_eq!(state.current_page(), 2);
        state.go_to_page(99);
        assert_eq!(state.current_page(), 2);
        state.go_to_page(0);
        assert_eq!(state.current_page(), 2);
    }

    #[test]
    fn test_next_and_previous_page_bounds() {
        let mut state = dashboard();
        state.previous_page();
        assert_eq!(state.current_page(), 1);
        for _ in 0..10 {
            state.next_page();
        }
        assert_eq!(state.current_page(), 4);
        state.previous_page();
        assert_eq!(state.current_page(), 3);
    }

    #[test]
    fn test_set_filter_resets_page() {
        let mut state = dashboard();
        state.go_to_page(3);
        state.set_filter("bill");
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn test_filter_matches_description_case_insensitively() {
        let mut state = dashboard();
        state.set_filter("GROCERIES");
        assert_eq!(ids(&state.filtered()), vec![1, 11]);
    }

    #[test]
    fn test_no_match_yields_zero_pages_and_empty_slice() {
        let mut state = dashboard();
        state.set_filter("no-such-record");
        assert_eq!(state.filtered_count(), 0);
        assert_eq!(state.total_pages(), 0);
        assert!(state.paginated().is_empty());
        // page is reset by the filter change, never clamped on read
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn test_zero_page_size_treated_as_one() {
        let state = DashboardState::with_transactions(sample_transactions(), 0);
        assert_eq!(state.page_size(), 1);
        assert_eq!(state.total_pages(), 20);
        assert_eq!(state.paginated().len(), 1);
    }

    #[test]
    fn test_transaction_lookup() {
        let state = dashboard();
        let found = state.transaction(7).expect("id 7 exists");
        assert_eq!(found.description, "Pharmacy");
        assert_eq!(found.status, TransactionStatus::Pending);
        assert!(state.transaction(999).is_none());
    }

    #[test]
    fn test_response_envelope() {
        let mut state = dashboard();
        state.set_filter("pending");
        let response = state.response();
        assert_eq!(response.total_count, 4);
        assert_eq!(response.page, 1);
        assert_eq!(response.page_size, 5);
        assert_eq!(response.total_pages, 1);
        assert_eq!(response.transactions.len(), 4);
    }

    #[test]
    fn test_sample_data_shape() {
        let transactions = sample_transactions();
        assert_eq!(transactions.len(), 20);
        assert_eq!(transactions[0].date, NaiveDate::from_ymd_opt(2023, 10, 1).unwrap());
        assert_eq!(transactions[0].amount, dec!(150.50));
        let pending: Vec<u64> = transactions
            .iter()
            .filter(|tx| tx.status == TransactionStatus::Pending)
            .map(|tx| tx.id)
            .collect();
        assert_eq!(pending, vec![3, 7, 13, 17]);
    }
}
