// SPDX-License-Identifier: MPL-2.0
//! Shared widget styles built from the design tokens.

use crate::ui::design_tokens::{border, palette, radius};
use iced::widget::{button, container};
use iced::{Background, Border, Theme};

/// Primary action button (brand blue, white text).
pub fn primary_button(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::PRIMARY_300,
        button::Status::Pressed => palette::PRIMARY_700,
        _ => palette::PRIMARY_500,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::WHITE,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Quiet secondary button (light surface, brand-colored label).
pub fn secondary_button(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette::GRAY_200,
        _ => palette::GRAY_100,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::PRIMARY_500,
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Grayed-out, non-interactive button.
pub fn disabled_button(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: Some(Background::Color(palette::GRAY_200)),
        text_color: palette::GRAY_500,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Destructive action button (sign out, discard draft).
pub fn danger_button(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::WHITE,
        _ => palette::ERROR_500,
    };
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(palette::ERROR_500),
        _ => None,
    };
    button::Style {
        background: background.map(Background::Color),
        text_color,
        border: Border {
            color: palette::ERROR_500,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Tab chip used by the chart toggle and suggested tags: filled when
/// selected, quiet otherwise.
pub fn chip_button(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let (background, text_color) = if selected {
            (palette::PRIMARY_500, palette::WHITE)
        } else {
            match status {
                button::Status::Hovered => (palette::GRAY_200, palette::GRAY_700),
                _ => (palette::GRAY_100, palette::GRAY_700),
            }
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Card container: white surface with a hairline border.
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::WHITE)),
        border: Border {
            color: palette::GRAY_200,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Modal dialog surface.
pub fn modal_surface(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::WHITE)),
        border: Border {
            color: palette::GRAY_200,
            width: border::WIDTH_MD,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}

/// Dimmed backdrop behind a modal dialog.
pub fn modal_backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(iced::Color {
            a: 0.5,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// Bottom tab bar container.
pub fn tab_bar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::WHITE)),
        border: Border {
            color: palette::GRAY_200,
            width: border::WIDTH_SM,
            ..Default::default()
        },
        ..Default::default()
    }
}
