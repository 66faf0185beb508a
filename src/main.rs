use iced::{Element, Task, Theme};
use tracing_subscriber::EnvFilter;

mod api;
mod state;
mod ui;

use api::{ApiClient, ApiError};
use state::data::Product;
use state::form::{ProductForm, SubmitAction};
use state::products::ProductList;
use ui::toast::Toast;

/// Main application state
struct CatalogAdmin {
    /// The REST backend client
    api: ApiClient,
    /// The product list workflow
    list: ProductList,
    /// The open form dialog, if any. `Some` means the modal is presented.
    form: Option<ProductForm>,
    /// The toast currently on screen, if any
    toast: Option<Toast>,
    /// Bumped every time a toast is shown, so a stale dismiss timer
    /// cannot hide a newer toast
    toast_epoch: u64,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// Re-fetch the product collection
    Refresh,
    /// A fetch settled
    Refreshed(Result<Vec<Product>, ApiError>),
    /// User clicked "Add Product"
    OpenCreate,
    /// User clicked "Edit" on a row
    OpenEdit(Product),
    /// Dialog dismissed without saving
    CloseDialog,
    TitleChanged(String),
    DescriptionChanged(String),
    PriceChanged(String),
    CategoryChanged(String),
    /// User clicked "Save" in the dialog
    Submit,
    /// A create or update settled
    Submitted(Result<Product, ApiError>),
    /// User clicked "Delete" on a row
    DeleteRequested(Product),
    /// A delete settled
    Deleted(Result<(), ApiError>),
    /// A toast's dismiss timer fired
    ToastExpired(u64),
}

impl CatalogAdmin {
    /// Create the application and kick off the initial product fetch.
    fn new() -> (Self, Task<Message>) {
        let api = ApiClient::from_env();
        tracing::info!("catalog admin starting against {}", api.base());

        let mut admin = CatalogAdmin {
            api,
            list: ProductList::with_refresh_after_delete(),
            form: None,
            toast: None,
            toast_epoch: 0,
        };
        let initial_fetch = admin.refresh();

        (admin, initial_fetch)
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Refresh => self.refresh(),
            Message::Refreshed(result) => match self.list.refresh_finished(result) {
                Some(toast) => self.show_toast(toast),
                None => Task::none(),
            },

            Message::OpenCreate => {
                self.form = Some(ProductForm::new(None));
                Task::none()
            }
            Message::OpenEdit(product) => {
                self.form = Some(ProductForm::new(Some(product)));
                Task::none()
            }
            Message::CloseDialog => {
                self.form = None;
                Task::none()
            }

            Message::TitleChanged(value) => self.patch_form(|form| form.title = value),
            Message::DescriptionChanged(value) => self.patch_form(|form| form.description = value),
            Message::PriceChanged(value) => self.patch_form(|form| form.price = value),
            Message::CategoryChanged(value) => self.patch_form(|form| form.category = value),

            Message::Submit => {
                let Some(form) = &self.form else {
                    return Task::none();
                };
                let api = self.api.clone();
                match form.submit() {
                    SubmitAction::Create(candidate) => Task::perform(
                        async move { api.create(&candidate).await },
                        Message::Submitted,
                    ),
                    SubmitAction::Update(candidate) => Task::perform(
                        async move { api.update(&candidate).await },
                        Message::Submitted,
                    ),
                }
            }
            Message::Submitted(result) => {
                let Some(form) = &self.form else {
                    return Task::none();
                };
                let outcome = form.submit_finished(&result);
                if outcome.close {
                    self.form = None;
                }
                self.show_toast(outcome.toast)
            }

            Message::DeleteRequested(product) => {
                let api = self.api.clone();
                Task::perform(
                    async move {
                        let id = product.id.ok_or(ApiError)?;
                        api.delete(&id).await
                    },
                    Message::Deleted,
                )
            }
            Message::Deleted(result) => {
                let outcome = self.list.delete_finished(&result);
                let toast = self.show_toast(outcome.toast);
                if outcome.refresh {
                    Task::batch([toast, self.refresh()])
                } else {
                    toast
                }
            }

            Message::ToastExpired(epoch) => {
                if epoch == self.toast_epoch {
                    self.toast = None;
                }
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let base = ui::product_list::view(&self.list);

        let content = match &self.form {
            Some(form) => {
                ui::dialog::modal(base, ui::product_form::view(form), Message::CloseDialog)
            }
            None => base,
        };

        ui::toast::overlay(content, self.toast.as_ref())
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Start a fetch of the full product collection.
    fn refresh(&mut self) -> Task<Message> {
        self.list.refresh_started();
        let api = self.api.clone();
        Task::perform(async move { api.list().await }, Message::Refreshed)
    }

    /// Show a toast and arm its auto-dismiss timer.
    fn show_toast(&mut self, toast: Toast) -> Task<Message> {
        self.toast = Some(toast);
        self.toast_epoch += 1;

        let epoch = self.toast_epoch;
        Task::perform(tokio::time::sleep(ui::toast::DURATION), move |_| {
            Message::ToastExpired(epoch)
        })
    }

    /// Apply an edit to the open form dialog, if there is one.
    fn patch_form(&mut self, patch: impl FnOnce(&mut ProductForm)) -> Task<Message> {
        if let Some(form) = &mut self.form {
            patch(form);
        }
        Task::none()
    }
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("catalog_admin=info")),
        )
        .init();

    iced::application("Catalog Admin", CatalogAdmin::update, CatalogAdmin::view)
        .theme(CatalogAdmin::theme)
        .centered()
        .run_with(CatalogAdmin::new)
}
