//! UI building blocks
//!
//! Widget-level code lives here; the workflows in `crate::state` stay
//! free of iced types. Modules:
//! - `dialog.rs` - modal presentation chrome
//! - `toast.rs` - notification banner and its fixed lifetime
//! - `product_list.rs` - the main list view
//! - `product_form.rs` - the create/edit dialog body

pub mod dialog;
pub mod product_form;
pub mod product_list;
pub mod toast;
