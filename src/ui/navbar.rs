// SPDX-License-Identifier: MPL-2.0
//! Bottom tab bar for app-level navigation between the four screens.

use crate::app::Screen;
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, Border, Element, Length, Theme};

/// Contextual data needed to render the tab bar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub active: Screen,
}

/// Messages emitted by the tab bar.
#[derive(Debug, Clone)]
pub enum Message {
    TabSelected(Screen),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    SwitchScreen(Screen),
}

/// Process a tab bar message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::TabSelected(screen) => Event::SwitchScreen(screen),
    }
}

/// Render the tab bar.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let tabs = [
        (Screen::Home, "tab-home", "⌂"),
        (Screen::Register, "tab-register", "＋"),
        (Screen::MyProducts, "tab-my-products", "☰"),
        (Screen::Profile, "tab-profile", "◉"),
    ];

    let mut row = Row::new().spacing(spacing::XS).width(Length::Fill);
    for (screen, label_key, glyph) in tabs {
        row = row.push(build_tab(
            ctx.i18n.tr(label_key),
            glyph,
            screen,
            ctx.active == screen,
        ));
    }

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::TAB_BAR_HEIGHT))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::tab_bar)
        .into()
}

fn build_tab<'a>(
    label: String,
    glyph: &'a str,
    screen: Screen,
    active: bool,
) -> Element<'a, Message> {
    let color = if active {
        palette::PRIMARY_500
    } else {
        palette::GRAY_500
    };

    let content = Column::new()
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(glyph).size(typography::BODY).color(color))
        .push(Text::new(label).size(typography::CAPTION).color(color));

    button(content)
        .on_press(Message::TabSelected(screen))
        .width(Length::Fill)
        .padding(spacing::XXS)
        .style(tab_button_style)
        .into()
}

fn tab_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Some(iced::Background::Color(palette::GRAY_100))
        }
        _ => None,
    };
    button::Style {
        background,
        text_color: palette::GRAY_700,
        border: Border::default(),
        ..Default::default()
    }
}
