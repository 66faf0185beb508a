//! The product list view

use iced::widget::{button, column, container, horizontal_rule, row, scrollable, text, Column};
use iced::{Element, Length};

use crate::state::data::Product;
use crate::state::products::ProductList;
use crate::Message;

/// Build the main list view: heading, Add button, then either the
/// loading indicator or one row per product.
pub fn view(list: &ProductList) -> Element<'_, Message> {
    let header = row![
        text("Products").size(32).width(Length::Fill),
        button("Refresh").on_press(Message::Refresh).padding(10),
        button("Add Product").on_press(Message::OpenCreate).padding(10),
    ]
    .spacing(12);

    let body: Element<'_, Message> = if list.loading {
        text("Loading products...").size(16).into()
    } else if list.items.is_empty() {
        text("No products yet.").size(16).into()
    } else {
        let mut rows = Column::new().spacing(8);
        for product in &list.items {
            rows = rows.push(product_row(product));
            rows = rows.push(horizontal_rule(1));
        }
        scrollable(rows).height(Length::Fill).into()
    };

    container(column![header, body].spacing(20))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(24)
        .into()
}

fn product_row(product: &Product) -> Element<'_, Message> {
    row![
        text(&product.title).size(16).width(Length::FillPortion(3)),
        text(&product.category)
            .size(16)
            .width(Length::FillPortion(2)),
        text(&product.price).size(16).width(Length::FillPortion(1)),
        button("Edit")
            .on_press(Message::OpenEdit(product.clone()))
            .padding([6, 12]),
        button("Delete")
            .on_press(Message::DeleteRequested(product.clone()))
            .padding([6, 12]),
    ]
    .spacing(12)
    .align_y(iced::Alignment::Center)
    .into()
}
