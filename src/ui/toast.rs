//! Toast notifications
//!
//! A single toast is shown at a time, pinned to the bottom of the window
//! and auto-dismissed after a fixed duration. A newer toast replaces the
//! current one and restarts the clock; the application guards the dismiss
//! timer with an epoch counter so a stale timer cannot hide a newer toast.

use std::time::Duration;

use iced::widget::{container, stack, text};
use iced::{Element, Length};

/// How long every toast stays on screen.
pub const DURATION: Duration = Duration::from_millis(3000);

/// The one generic failure message, shown for any request error.
pub const FAILURE_MESSAGE: &str = "Something went wrong!...";

/// A notification banner with a fixed lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
}

impl Toast {
    /// A success toast with an operation-specific message.
    pub fn success(message: impl Into<String>) -> Self {
        Toast {
            message: message.into(),
        }
    }

    /// The generic failure toast. Network failure, server error and
    /// malformed response all surface as this one banner.
    pub fn failure() -> Self {
        Toast {
            message: FAILURE_MESSAGE.to_string(),
        }
    }
}

/// Stack the toast banner over the base view, bottom-centered.
pub fn overlay<'a, M: 'a>(base: Element<'a, M>, toast: Option<&'a Toast>) -> Element<'a, M> {
    let Some(toast) = toast else {
        return base;
    };

    let banner = container(text(&toast.message).size(16))
        .padding([10, 16])
        .style(container::rounded_box);

    let anchor = container(banner)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(iced::alignment::Horizontal::Center)
        .align_y(iced::alignment::Vertical::Bottom)
        .padding(24);

    stack![base, anchor].into()
}
