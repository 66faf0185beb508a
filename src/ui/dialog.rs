//! Modal dialog chrome
//!
//! Stacks a dimmed backdrop and a centered dialog over the base view.
//! Clicking the backdrop emits the dismiss message; the dialog body
//! itself is opaque so clicks inside it never fall through.

use iced::widget::{center, container, mouse_area, opaque, stack};
use iced::{Color, Element};

/// Present `dialog` modally over `base`.
pub fn modal<'a, M>(
    base: impl Into<Element<'a, M>>,
    dialog: impl Into<Element<'a, M>>,
    on_dismiss: M,
) -> Element<'a, M>
where
    M: Clone + 'a,
{
    let backdrop = center(opaque(dialog)).style(|_theme| container::Style {
        background: Some(
            Color {
                a: 0.8,
                ..Color::BLACK
            }
            .into(),
        ),
        ..container::Style::default()
    });

    stack![base.into(), opaque(mouse_area(backdrop).on_press(on_dismiss))].into()
}
