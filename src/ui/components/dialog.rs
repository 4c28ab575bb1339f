// SPDX-License-Identifier: MPL-2.0
//! Modal confirmation dialog, stacked over the screen content.
//!
//! Purely presentational: callers provide the resolved text and the
//! messages each button should emit.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Stack, Text};
use iced::{alignment, Element, Length};

/// One dialog choice: label plus the message it emits.
pub struct Choice<Message> {
    pub label: String,
    pub message: Message,
    pub primary: bool,
}

/// Wraps `base` with a dimmed backdrop and a centered dialog card.
pub fn overlay<'a, Message: Clone + 'a>(
    base: Element<'a, Message>,
    title: String,
    body: String,
    choices: Vec<Choice<Message>>,
) -> Element<'a, Message> {
    let mut buttons = Row::new().spacing(spacing::SM);
    for choice in choices {
        let style = if choice.primary {
            styles::primary_button
        } else {
            styles::secondary_button
        };
        buttons = buttons.push(
            button(
                Text::new(choice.label)
                    .size(typography::BODY)
                    .align_x(alignment::Horizontal::Center),
            )
            .on_press(choice.message)
            .padding([spacing::XS, spacing::MD])
            .style(style),
        );
    }

    let card = Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(Text::new(title).size(typography::SUBTITLE))
            .push(Text::new(body).size(typography::BODY))
            .push(buttons),
    )
    .padding(spacing::LG)
    .max_width(420)
    .style(styles::modal_surface);

    let backdrop = Container::new(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::modal_backdrop);

    Stack::new().push(base).push(backdrop).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum TestMessage {
        Yes,
        No,
    }

    #[test]
    fn overlay_renders_with_choices() {
        let base: Element<'_, TestMessage> = Text::new("base").into();
        let _element = overlay(
            base,
            "Title".to_string(),
            "Body".to_string(),
            vec![
                Choice {
                    label: "Yes".to_string(),
                    message: TestMessage::Yes,
                    primary: true,
                },
                Choice {
                    label: "No".to_string(),
                    message: TestMessage::No,
                    primary: false,
                },
            ],
        );
    }
}
