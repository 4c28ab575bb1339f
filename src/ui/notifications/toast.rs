// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.

use super::manager::{Manager, Message};
use super::notification::{Notification, Severity};
use crate::i18n::I18n;
use crate::ui::design_tokens::{border, palette, radius, sizing, spacing, typography};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    pub fn view<'a>(notification: &'a Notification, i18n: &'a I18n) -> Element<'a, Message> {
        let severity = notification.severity();
        let accent_color = severity.color();

        let message_text = if notification.message_args().is_empty() {
            i18n.tr(notification.message_key())
        } else {
            let args: Vec<(&str, &str)> = notification
                .message_args()
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str()))
                .collect();
            i18n.tr_with_args(notification.message_key(), &args)
        };

        let glyph = Text::new(Self::severity_glyph(severity))
            .size(typography::BODY)
            .color(accent_color);

        let message_widget = Text::new(message_text)
            .size(typography::BODY)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.palette().text),
            });

        let dismiss_button = button(Text::new("✕").size(typography::CAPTION))
            .on_press(Message::Dismiss(notification.id()))
            .padding(spacing::XXS)
            .style(dismiss_button_style);

        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(glyph).padding(spacing::XXS))
            .push(
                Container::new(message_widget)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss_button);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color))
            .into()
    }

    /// Renders the toast overlay with all visible notifications, stacked in
    /// the bottom-right corner.
    pub fn view_overlay<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
        let toasts: Vec<Element<'a, Message>> = manager
            .visible()
            .map(|notification| Self::view(notification, i18n))
            .collect();

        if toasts.is_empty() {
            Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into()
        } else {
            let toast_column = Column::with_children(toasts)
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Right);

            Container::new(toast_column)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .align_y(alignment::Vertical::Bottom)
                .padding(spacing::MD)
                .into()
        }
    }

    fn severity_glyph(severity: Severity) -> &'static str {
        match severity {
            Severity::Success => "✓",
            Severity::Info => "ℹ",
            Severity::Warning => "⚠",
        }
    }
}

fn toast_container_style(_theme: &Theme, accent_color: Color) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(palette::WHITE)),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        text_color: Some(palette::GRAY_900),
        ..Default::default()
    }
}

fn dismiss_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Some(iced::Background::Color(palette::GRAY_200))
        }
        _ => None,
    };
    button::Style {
        background,
        text_color: palette::GRAY_700,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
