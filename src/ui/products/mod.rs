// SPDX-License-Identifier: MPL-2.0
//! My Products screen: scrollable list of registered products.

use crate::catalog::Product;
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{image, Column, Container, Row, Scrollable, Text};
use iced::{alignment, Element, Length};

/// The list is read-only; it emits no messages of its own.
#[derive(Debug, Clone)]
pub enum Message {}

pub fn view<'a>(products: &'a [Product], i18n: &'a I18n) -> Element<'a, Message> {
    let mut list = Column::new().spacing(spacing::SM).padding(spacing::MD).push(
        Text::new(i18n.tr("products-title"))
            .size(typography::TITLE)
            .color(palette::GRAY_900),
    );

    if products.is_empty() {
        list = list.push(
            Text::new(i18n.tr("products-empty"))
                .size(typography::BODY)
                .color(palette::GRAY_500),
        );
    } else {
        for product in products {
            list = list.push(product_card(product, i18n));
        }
    }

    Scrollable::new(list).height(Length::Fill).into()
}

fn product_card<'a>(product: &'a Product, i18n: &'a I18n) -> Element<'a, Message> {
    let preview: Element<'_, Message> = match &product.image {
        Some(path) => image::Image::new(image::Handle::from_path(path))
            .width(Length::Fixed(56.0))
            .height(Length::Fixed(56.0))
            .into(),
        None => Text::new("🖼").size(typography::SUBTITLE).into(),
    };
    let thumbnail = Container::new(preview)
        .width(Length::Fixed(56.0))
        .height(Length::Fixed(56.0))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::card);

    let mut details = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(product.name.as_str()).size(typography::BODY))
        .push(
            Text::new(i18n.tr_with_args(
                "price-display",
                &[("amount", &product.display_price())],
            ))
            .size(typography::BODY)
            .color(palette::PRIMARY_500),
        );
    if !product.description.is_empty() {
        details = details.push(
            Text::new(product.description.as_str())
                .size(typography::CAPTION)
                .color(palette::GRAY_500),
        );
    }

    Container::new(
        Row::new()
            .spacing(spacing::MD)
            .align_y(alignment::Vertical::Center)
            .push(thumbnail)
            .push(details),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .style(styles::card)
    .into()
}
