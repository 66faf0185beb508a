//! The product list workflow
//!
//! Owns the displayed product collection and the loading flag. The flag
//! is a two-state machine: `Idle -> Loading` when a refresh starts,
//! `-> Idle` when it settles either way. A second refresh issued before
//! the first settles is not guarded against; the last result to arrive
//! wins.

use crate::api::ApiError;
use crate::state::data::Product;
use crate::ui::toast::Toast;

/// What the UI should do once a delete settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteOutcome {
    /// The notification to show.
    pub toast: Toast,
    /// Whether a follow-up refresh should run, per the list's policy.
    pub refresh: bool,
}

/// State of the product list view.
#[derive(Debug, Clone, Default)]
pub struct ProductList {
    /// The last successfully fetched collection. Replaced wholesale on
    /// every successful refresh, never patched in place.
    pub items: Vec<Product>,
    /// True while a fetch is in flight.
    pub loading: bool,
    /// Whether a successful delete triggers a refresh. Off by default:
    /// the row then stays on screen until the next refresh, which is the
    /// original behavior of this tool.
    pub refresh_after_delete: bool,
}

impl ProductList {
    pub fn new() -> Self {
        ProductList::default()
    }

    /// Same as [`new`](Self::new) but with refresh-after-delete enabled,
    /// so the visible list never shows a row the backend already dropped.
    pub fn with_refresh_after_delete() -> Self {
        ProductList {
            refresh_after_delete: true,
            ..ProductList::default()
        }
    }

    /// Mark a refresh as in flight.
    pub fn refresh_started(&mut self) {
        self.loading = true;
    }

    /// Settle a refresh. On success the whole collection is replaced; on
    /// failure it is left untouched and the generic failure toast is
    /// returned. The loading flag drops on both branches.
    pub fn refresh_finished(&mut self, result: Result<Vec<Product>, ApiError>) -> Option<Toast> {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                None
            }
            Err(_) => Some(Toast::failure()),
        }
    }

    /// Map a settled delete result to a toast and a refresh decision.
    pub fn delete_finished(&self, result: &Result<(), ApiError>) -> DeleteOutcome {
        match result {
            Ok(()) => DeleteOutcome {
                toast: Toast::success("Deleted Successfully!..."),
                refresh: self.refresh_after_delete,
            },
            Err(_) => DeleteOutcome {
                toast: Toast::failure(),
                refresh: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_products() -> Vec<Product> {
        vec![
            Product {
                id: Some("1".into()),
                title: "Chair".into(),
                price: "49.90".into(),
                category: "furniture".into(),
                ..Product::default()
            },
            Product {
                id: Some("2".into()),
                title: "Lamp".into(),
                price: "12.00".into(),
                category: "lighting".into(),
                ..Product::default()
            },
        ]
    }

    #[test]
    fn refresh_toggles_the_loading_flag() {
        let mut list = ProductList::new();
        assert!(!list.loading);

        list.refresh_started();
        assert!(list.loading);

        let toast = list.refresh_finished(Ok(sample_products()));
        assert!(!list.loading);
        assert_eq!(toast, None);
        assert_eq!(list.items.len(), 2);
    }

    #[test]
    fn failed_refresh_leaves_the_collection_untouched() {
        let mut list = ProductList::new();
        list.refresh_finished(Ok(sample_products()));

        list.refresh_started();
        let toast = list.refresh_finished(Err(ApiError));

        assert!(!list.loading);
        assert_eq!(toast, Some(Toast::failure()));
        assert_eq!(list.items, sample_products());
    }

    #[test]
    fn successful_refresh_replaces_the_whole_collection() {
        let mut list = ProductList::new();
        list.refresh_finished(Ok(sample_products()));

        let replacement = vec![Product {
            id: Some("9".into()),
            title: "Desk".into(),
            ..Product::default()
        }];
        list.refresh_finished(Ok(replacement.clone()));

        assert_eq!(list.items, replacement);
    }

    #[test]
    fn delete_outcomes_fire_exactly_one_toast() {
        let list = ProductList::new();

        let outcome = list.delete_finished(&Ok(()));
        assert_eq!(outcome.toast.message, "Deleted Successfully!...");
        assert!(!outcome.refresh);

        let outcome = list.delete_finished(&Err(ApiError));
        assert_eq!(outcome.toast, Toast::failure());
        assert!(!outcome.refresh);
    }

    #[test]
    fn delete_refresh_policy_applies_only_on_success() {
        let list = ProductList::with_refresh_after_delete();

        assert!(list.delete_finished(&Ok(())).refresh);
        assert!(!list.delete_finished(&Err(ApiError)).refresh);
    }
}
