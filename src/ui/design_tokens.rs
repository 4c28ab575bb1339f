// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens: palette, spacing, sizing, typography, radii.
//!
//! Tokens are deliberately consistent (8px spacing grid); check usages
//! across components before changing a value.

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_500: Color = Color::from_rgb(0.42, 0.45, 0.49);
    pub const GRAY_200: Color = Color::from_rgb(0.91, 0.93, 0.94);
    pub const GRAY_100: Color = Color::from_rgb(0.96, 0.97, 0.98);

    // Brand blue (#3182f5 scale)
    pub const PRIMARY_100: Color = Color::from_rgb(0.85, 0.92, 1.0);
    pub const PRIMARY_300: Color = Color::from_rgb(0.55, 0.74, 0.98);
    pub const PRIMARY_500: Color = Color::from_rgb(0.192, 0.51, 0.961);
    pub const PRIMARY_700: Color = Color::from_rgb(0.13, 0.38, 0.75);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.863, 0.208, 0.271);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

pub mod sizing {
    /// Height of the bottom tab bar.
    pub const TAB_BAR_HEIGHT: f32 = 56.0;
    /// Width of a toast notification card.
    pub const TOAST_WIDTH: f32 = 320.0;
    /// Square edge of the wizard's image drop area.
    pub const IMAGE_AREA_HEIGHT: f32 = 300.0;
    /// Dashboard chart canvas height.
    pub const CHART_HEIGHT: f32 = 220.0;
    /// Profile avatar diameter.
    pub const AVATAR_SIZE: f32 = 80.0;
}

pub mod typography {
    pub const TITLE: f32 = 28.0;
    pub const SUBTITLE: f32 = 20.0;
    pub const BODY: f32 = 16.0;
    pub const CAPTION: f32 = 13.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_follows_the_grid() {
        assert_eq!(spacing::XS * 2.0, spacing::MD);
        assert_eq!(spacing::MD * 2.0, spacing::XL);
    }

    #[test]
    fn semantic_colors_are_distinct() {
        assert_ne!(palette::ERROR_500, palette::WARNING_500);
        assert_ne!(palette::SUCCESS_500, palette::INFO_500);
        assert_ne!(palette::PRIMARY_500, palette::INFO_500);
    }
}
