// SPDX-License-Identifier: MPL-2.0
//! App header with the wordmark logo, shown at the top of every screen.

use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use iced::widget::{button, Container, Row, Text};
use iced::{alignment, Border, Element, Length, Theme};

/// Messages emitted by the header.
#[derive(Debug, Clone)]
pub enum Message {
    /// The logo was pressed; the app returns to the home screen.
    LogoPressed,
}

pub fn view(i18n: &I18n) -> Element<'_, Message> {
    let wordmark = Text::new(i18n.tr("app-wordmark"))
        .size(typography::SUBTITLE)
        .color(palette::PRIMARY_500);

    let logo_button = button(wordmark)
        .on_press(Message::LogoPressed)
        .padding(spacing::XXS)
        .style(logo_button_style);

    let row = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(logo_button);

    Container::new(row)
        .width(Length::Fill)
        .padding([spacing::XS, spacing::MD])
        .into()
}

fn logo_button_style(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: palette::PRIMARY_500,
        border: Border::default(),
        ..Default::default()
    }
}
