//! The create/edit dialog body

use iced::widget::{button, column, container, horizontal_space, row, text, text_input};
use iced::Element;

use crate::state::form::ProductForm;
use crate::Message;

/// Build the dialog body for the given form session.
pub fn view(form: &ProductForm) -> Element<'_, Message> {
    let heading = if form.is_edit() {
        "Edit Product"
    } else {
        "Add Product"
    };

    let fields = column![
        text_input("Title", &form.title)
            .on_input(Message::TitleChanged)
            .padding(10),
        text_input("Description", &form.description)
            .on_input(Message::DescriptionChanged)
            .padding(10),
        text_input("Price", &form.price)
            .on_input(Message::PriceChanged)
            .padding(10),
        text_input("Category", &form.category)
            .on_input(Message::CategoryChanged)
            .padding(10),
    ]
    .spacing(12);

    let actions = row![
        horizontal_space(),
        button("Cancel").on_press(Message::CloseDialog).padding(10),
        button("Save").on_press(Message::Submit).padding(10),
    ]
    .spacing(12);

    container(column![text(heading).size(24), fields, actions].spacing(20))
        .width(420)
        .padding(24)
        .style(container::rounded_box)
        .into()
}
