//! The product form workflow
//!
//! Owns the editable fields of the create/edit dialog and the single
//! decision this application makes: whether a submit is a create or an
//! update. The decision keys off whether the form was *seeded* with an
//! existing product when the dialog opened, never off the candidate's id.
//! The id field of a pre-submission candidate is only ever populated by
//! copying it from the seed, so a seeded product without an id still
//! takes the update path.

use crate::api::ApiError;
use crate::state::data::Product;
use crate::ui::toast::Toast;

/// The backend call a submit resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAction {
    /// POST the candidate; the server assigns the id.
    Create(Product),
    /// PUT the candidate to its id path.
    Update(Product),
}

/// What the UI should do once a submit settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    /// The notification to show (success or the generic failure).
    pub toast: Toast,
    /// Whether the dialog should close. Only true on success; a failed
    /// submit leaves the dialog open so the user can retry by hand.
    pub close: bool,
}

/// State of one create/edit dialog session.
#[derive(Debug, Clone, Default)]
pub struct ProductForm {
    /// The product this session was opened with, if any. Immutable for
    /// the lifetime of the session; `Some` means edit mode.
    seed: Option<Product>,
    pub title: String,
    pub description: String,
    pub price: String,
    pub category: String,
}

impl ProductForm {
    /// Open a form session. With a seed the fields start from the seed's
    /// values (edit mode); without one they start empty (create mode).
    pub fn new(seed: Option<Product>) -> Self {
        match seed {
            Some(product) => ProductForm {
                title: product.title.clone(),
                description: product.description.clone(),
                price: product.price.clone(),
                category: product.category.clone(),
                seed: Some(product),
            },
            None => ProductForm::default(),
        }
    }

    /// Restart the session with a new seed. A full replacement: no field
    /// from the previous session survives.
    pub fn reinitialize(&mut self, seed: Option<Product>) {
        *self = ProductForm::new(seed);
    }

    /// Whether this session edits an existing product.
    pub fn is_edit(&self) -> bool {
        self.seed.is_some()
    }

    /// The product described by the current field values. In edit mode
    /// the seed's id is copied onto it; in create mode it has none.
    pub fn candidate(&self) -> Product {
        Product {
            id: self.seed.as_ref().and_then(|seed| seed.id.clone()),
            title: self.title.clone(),
            description: self.description.clone(),
            price: self.price.clone(),
            category: self.category.clone(),
            image: None,
        }
    }

    /// Resolve the current fields into the backend call to make.
    pub fn submit(&self) -> SubmitAction {
        let candidate = self.candidate();
        if self.is_edit() {
            SubmitAction::Update(candidate)
        } else {
            SubmitAction::Create(candidate)
        }
    }

    /// Map the settled submit result to a toast and a close decision.
    pub fn submit_finished(&self, result: &Result<Product, ApiError>) -> SubmitOutcome {
        match result {
            Ok(_) => SubmitOutcome {
                toast: Toast::success(if self.is_edit() {
                    "Updated Successfully!..."
                } else {
                    "Added Successfully!..."
                }),
                close: true,
            },
            Err(_) => SubmitOutcome {
                toast: Toast::failure(),
                close: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_product() -> Product {
        Product {
            id: Some("1".into()),
            title: "T".into(),
            description: "D".into(),
            price: "19.99".into(),
            category: "C".into(),
            image: None,
        }
    }

    #[test]
    fn empty_seed_starts_with_empty_fields() {
        let form = ProductForm::new(None);
        assert_eq!(form.title, "");
        assert_eq!(form.description, "");
        assert_eq!(form.price, "");
        assert_eq!(form.category, "");
        assert!(!form.is_edit());
    }

    #[test]
    fn seeded_form_starts_with_the_seed_values() {
        let form = ProductForm::new(Some(sample_product()));
        assert_eq!(form.title, "T");
        assert_eq!(form.description, "D");
        assert_eq!(form.price, "19.99");
        assert_eq!(form.category, "C");
        assert!(form.is_edit());
    }

    #[test]
    fn reinitialize_replaces_all_fields() {
        let mut form = ProductForm::new(Some(sample_product()));
        form.description = "edited by hand".into();

        let second = Product {
            id: Some("2".into()),
            title: "Other".into(),
            description: String::new(),
            price: "5.00".into(),
            category: "misc".into(),
            image: None,
        };
        form.reinitialize(Some(second));

        assert_eq!(form.title, "Other");
        assert_eq!(form.description, "");
        assert_eq!(form.price, "5.00");
        assert_eq!(form.category, "misc");

        form.reinitialize(None);
        assert_eq!(form.title, "");
        assert!(!form.is_edit());
    }

    #[test]
    fn unseeded_submit_creates_without_an_id() {
        let mut form = ProductForm::new(None);
        form.title = "New".into();
        form.price = "3.50".into();
        form.category = "misc".into();

        match form.submit() {
            SubmitAction::Create(candidate) => {
                assert_eq!(candidate.id, None);
                assert_eq!(candidate.title, "New");
                assert_eq!(candidate.price, "3.50");
            }
            other => panic!("expected a create, got {other:?}"),
        }
    }

    #[test]
    fn seeded_submit_updates_with_the_seed_id() {
        let mut form = ProductForm::new(Some(sample_product()));
        form.title = "Renamed".into();

        match form.submit() {
            SubmitAction::Update(candidate) => {
                assert_eq!(candidate.id.as_deref(), Some("1"));
                assert_eq!(candidate.title, "Renamed");
            }
            other => panic!("expected an update, got {other:?}"),
        }
    }

    #[test]
    fn seed_presence_decides_the_branch_not_the_id() {
        // A seed without an id still forces the update path; the client
        // then fails it with the generic error.
        let seed = Product {
            id: None,
            title: "Half-baked".into(),
            ..Product::default()
        };
        let form = ProductForm::new(Some(seed));

        match form.submit() {
            SubmitAction::Update(candidate) => assert_eq!(candidate.id, None),
            other => panic!("expected an update, got {other:?}"),
        }
    }

    #[test]
    fn successful_submit_closes_and_toasts() {
        let create_form = ProductForm::new(None);
        let outcome = create_form.submit_finished(&Ok(sample_product()));
        assert!(outcome.close);
        assert_eq!(outcome.toast.message, "Added Successfully!...");

        let edit_form = ProductForm::new(Some(sample_product()));
        let outcome = edit_form.submit_finished(&Ok(sample_product()));
        assert!(outcome.close);
        assert_eq!(outcome.toast.message, "Updated Successfully!...");
    }

    #[test]
    fn failed_submit_keeps_the_dialog_open() {
        let form = ProductForm::new(Some(sample_product()));
        let outcome = form.submit_finished(&Err(ApiError));
        assert!(!outcome.close);
        assert_eq!(outcome.toast, Toast::failure());
    }
}
