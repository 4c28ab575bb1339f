// SPDX-License-Identifier: MPL-2.0
//! Profile screen: seller identity, notification and language preferences,
//! permission summary, and sign-out.

use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, toggler, Column, Container, Row, Text};
use iced::{alignment, Element, Length};
use unic_langid::LanguageIdentifier;

/// Contextual data needed to render the profile screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub push_notifications: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    PushToggled(bool),
    LanguageSelected(LanguageIdentifier),
    SignOutPressed,
}

/// Events handled by the app: preference changes are persisted to the
/// config file, sign-out is acknowledged with a notice.
#[derive(Debug, Clone)]
pub enum Event {
    PushToggled(bool),
    LanguageSelected(LanguageIdentifier),
    SignOutRequested,
}

pub fn update(message: Message) -> Event {
    match message {
        Message::PushToggled(enabled) => Event::PushToggled(enabled),
        Message::LanguageSelected(locale) => Event::LanguageSelected(locale),
        Message::SignOutPressed => Event::SignOutRequested,
    }
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;

    Column::new()
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .push(identity_card(i18n))
        .push(preferences_card(&ctx))
        .push(permissions_card(i18n))
        .push(
            button(Text::new(i18n.tr("profile-sign-out")).size(typography::BODY))
                .on_press(Message::SignOutPressed)
                .padding([spacing::XS, spacing::MD])
                .style(styles::danger_button),
        )
        .into()
}

fn identity_card(i18n: &I18n) -> Element<'_, Message> {
    let avatar = Container::new(
        Text::new("👤")
            .size(typography::TITLE)
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fixed(sizing::AVATAR_SIZE))
    .height(Length::Fixed(sizing::AVATAR_SIZE))
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .style(styles::card);

    Container::new(
        Row::new()
            .spacing(spacing::MD)
            .align_y(alignment::Vertical::Center)
            .push(avatar)
            .push(
                Column::new()
                    .spacing(spacing::XXS)
                    .push(Text::new(i18n.tr("profile-name")).size(typography::SUBTITLE))
                    .push(
                        Text::new(i18n.tr("profile-email"))
                            .size(typography::CAPTION)
                            .color(palette::GRAY_500),
                    ),
            ),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .style(styles::card)
    .into()
}

fn preferences_card<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let push_row = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(i18n.tr("profile-push-label"))
                .size(typography::BODY)
                .width(Length::Fill),
        )
        .push(
            toggler(ctx.push_notifications)
                .on_toggle(Message::PushToggled)
                .size(typography::SUBTITLE),
        );

    let mut language_row = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(i18n.tr("profile-language-label"))
                .size(typography::BODY)
                .width(Length::Fill),
        );
    for locale in &i18n.available_locales {
        let name = i18n.tr(&format!("language-name-{locale}"));
        let label = if name.starts_with("MISSING:") {
            locale.to_string()
        } else {
            name
        };
        language_row = language_row.push(
            button(Text::new(label).size(typography::CAPTION))
                .on_press(Message::LanguageSelected(locale.clone()))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::chip_button(i18n.current_locale() == locale)),
        );
    }

    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(Text::new(i18n.tr("profile-preferences-title")).size(typography::SUBTITLE))
            .push(push_row)
            .push(language_row),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .style(styles::card)
    .into()
}

fn permissions_card(i18n: &I18n) -> Element<'_, Message> {
    let mut rows = Column::new().spacing(spacing::XS);
    for key in ["profile-permission-camera", "profile-permission-photos"] {
        rows = rows.push(
            Row::new()
                .align_y(alignment::Vertical::Center)
                .push(
                    Text::new(i18n.tr(key))
                        .size(typography::BODY)
                        .width(Length::Fill),
                )
                .push(
                    Text::new(i18n.tr("profile-permission-granted"))
                        .size(typography::CAPTION)
                        .color(palette::SUCCESS_500),
                ),
        );
    }

    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(Text::new(i18n.tr("profile-permissions-title")).size(typography::SUBTITLE))
            .push(rows),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .style(styles::card)
    .into()
}
