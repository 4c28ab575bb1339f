// SPDX-License-Identifier: MPL-2.0
//! Rendering for the registration wizard. Pure projection of [`State`];
//! every transition goes through `State::update`.

use super::{Prompt, State, WizardStep};
use crate::i18n::I18n;
use crate::ui::components::dialog;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::wizard::Message;
use iced::widget::{button, image, text_input, Column, Container, Row, Scrollable, Text};
use iced::{alignment, Element, Length};

pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let step = state.step();

    let indicator = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(i18n.tr_with_args(
                "wizard-step-indicator",
                &[
                    ("current", &step.number().to_string()),
                    ("total", &WizardStep::COUNT.to_string()),
                ],
            ))
            .size(typography::CAPTION)
            .color(palette::GRAY_500),
        )
        .push(Text::new(i18n.tr(step.title_key())).size(typography::SUBTITLE));

    let body: Element<'_, Message> = match step {
        WizardStep::ImageUpload => image_step(state, i18n),
        WizardStep::ProductInfo => info_step(state, i18n),
        WizardStep::Tags => tags_step(state, i18n),
        WizardStep::Confirmation => confirm_step(state, i18n),
    };

    let content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .push(indicator)
        .push(body)
        .push(navigation(state, i18n));

    let base: Element<'_, Message> = Scrollable::new(content).height(Length::Fill).into();

    match state.prompt() {
        Some(prompt) => prompt_overlay(base, prompt, i18n),
        None => base,
    }
}

fn image_step<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let area: Element<'_, Message> = match state.draft().image() {
        Some(path) => {
            let preview = image::Image::new(image::Handle::from_path(path))
                .width(Length::Fill)
                .height(Length::Fixed(sizing::IMAGE_AREA_HEIGHT - 80.0));
            Column::new()
                .spacing(spacing::SM)
                .align_x(alignment::Horizontal::Center)
                .push(preview)
                .push(
                    button(Text::new(i18n.tr("wizard-image-clear")).size(typography::CAPTION))
                        .on_press(Message::ClearPhoto)
                        .padding([spacing::XXS, spacing::SM])
                        .style(styles::secondary_button),
                )
                .into()
        }
        None => Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .push(
                Text::new(i18n.tr("wizard-image-placeholder"))
                    .size(typography::BODY)
                    .color(palette::GRAY_500),
            )
            .push(
                Row::new()
                    .spacing(spacing::SM)
                    .push(
                        button(Text::new(i18n.tr("wizard-image-camera")).size(typography::BODY))
                            .on_press(Message::TakePhoto)
                            .padding([spacing::XS, spacing::MD])
                            .style(styles::primary_button),
                    )
                    .push(
                        button(Text::new(i18n.tr("wizard-image-gallery")).size(typography::BODY))
                            .on_press(Message::PickFromGallery)
                            .padding([spacing::XS, spacing::MD])
                            .style(styles::secondary_button),
                    ),
            )
            .into(),
    };

    Container::new(area)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::IMAGE_AREA_HEIGHT))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::card)
        .into()
}

fn info_step<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let draft = state.draft();

    let mut fields = Column::new().spacing(spacing::SM).push(labelled_field(
        i18n.tr("wizard-info-name-label"),
        text_input(&i18n.tr("wizard-info-name-placeholder"), draft.name())
            .on_input(Message::NameChanged)
            .padding(spacing::XS)
            .into(),
    ));

    // Fields reveal themselves as the previous one is filled in.
    if state.shows_price_field() {
        fields = fields.push(labelled_field(
            i18n.tr("wizard-info-price-label"),
            text_input(&i18n.tr("wizard-info-price-placeholder"), &draft.display_price())
                .on_input(Message::PriceChanged)
                .padding(spacing::XS)
                .into(),
        ));
    }
    if state.shows_quantity_field() {
        fields = fields.push(labelled_field(
            i18n.tr("wizard-info-quantity-label"),
            text_input(&i18n.tr("wizard-info-quantity-placeholder"), draft.quantity())
                .on_input(Message::QuantityChanged)
                .padding(spacing::XS)
                .into(),
        ));
    }

    fields.into()
}

fn labelled_field(label: String, input: Element<'_, Message>) -> Element<'_, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(
            Text::new(label)
                .size(typography::CAPTION)
                .color(palette::GRAY_700),
        )
        .push(input)
        .into()
}

fn tags_step<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let draft = state.draft();

    let input = text_input(&i18n.tr("wizard-tags-placeholder"), state.tag_input())
        .on_input(Message::TagInputChanged)
        .on_submit(Message::TagSubmitted)
        .padding(spacing::XS);

    let mut chips = Row::new().spacing(spacing::XS);
    for (index, tag) in draft.tags().iter().enumerate() {
        chips = chips.push(
            button(Text::new(format!("{tag} ✕")).size(typography::CAPTION))
                .on_press(Message::TagRemoved(index))
                .padding([spacing::XXS, spacing::XS])
                .style(styles::chip_button(true)),
        );
    }

    let suggest_label = if state.loading_suggestions() {
        i18n.tr("wizard-tags-suggesting")
    } else {
        i18n.tr("wizard-tags-suggest")
    };
    let mut suggest_button = button(Text::new(suggest_label).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .style(styles::secondary_button);
    if !state.loading_suggestions() {
        suggest_button = suggest_button.on_press(Message::GenerateSuggestions);
    }

    let mut suggested = Row::new().spacing(spacing::XS);
    for tag in state.suggestions() {
        suggested = suggested.push(
            button(Text::new(tag.clone()).size(typography::CAPTION))
                .on_press(Message::SuggestedToggled(tag.clone()))
                .padding([spacing::XXS, spacing::XS])
                .style(styles::chip_button(draft.has_tag(tag))),
        );
    }

    Column::new()
        .spacing(spacing::SM)
        .push(input)
        .push(chips)
        .push(suggest_button)
        .push(suggested)
        .into()
}

fn confirm_step<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let draft = state.draft();

    let image_line = draft
        .image()
        .and_then(|path| path.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| i18n.tr("wizard-confirm-no-image"));

    let summary = Column::new()
        .spacing(spacing::XS)
        .push(summary_row(i18n.tr("wizard-confirm-image"), image_line))
        .push(summary_row(
            i18n.tr("wizard-confirm-name"),
            draft.name().to_string(),
        ))
        .push(summary_row(
            i18n.tr("wizard-confirm-price"),
            i18n.tr_with_args("price-display", &[("amount", &draft.display_price())]),
        ))
        .push(summary_row(
            i18n.tr("wizard-confirm-quantity"),
            draft.quantity().to_string(),
        ))
        .push(summary_row(
            i18n.tr("wizard-confirm-tags"),
            draft.tags().join(", "),
        ));

    let action: Element<'_, Message> = if draft.is_registered() {
        Column::new()
            .spacing(spacing::SM)
            .push(
                Text::new(i18n.tr("wizard-registered-banner"))
                    .size(typography::BODY)
                    .color(palette::SUCCESS_500),
            )
            .push(
                button(Text::new(i18n.tr("wizard-return-home")).size(typography::BODY))
                    .on_press(Message::ReturnHome)
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::primary_button),
            )
            .into()
    } else {
        button(Text::new(i18n.tr("wizard-confirm-register")).size(typography::BODY))
            .on_press(Message::ConfirmRegister)
            .padding([spacing::XS, spacing::MD])
            .style(styles::primary_button)
            .into()
    };

    Column::new()
        .spacing(spacing::MD)
        .push(Container::new(summary).padding(spacing::MD).style(styles::card))
        .push(action)
        .into()
}

fn summary_row(label: String, value: String) -> Element<'static, Message> {
    Row::new()
        .spacing(spacing::SM)
        .push(
            Text::new(label)
                .size(typography::CAPTION)
                .color(palette::GRAY_500)
                .width(Length::Fixed(120.0)),
        )
        .push(Text::new(value).size(typography::BODY))
        .into()
}

fn navigation<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::SM);

    let at_confirmation = state.step() == WizardStep::Confirmation;
    let show_back = state.step() != WizardStep::ImageUpload && !state.draft().is_registered();

    if show_back {
        row = row.push(
            button(Text::new(i18n.tr("wizard-back")).size(typography::BODY))
                .on_press(Message::Regress)
                .padding([spacing::XS, spacing::MD])
                .style(styles::secondary_button),
        );
    }

    if !at_confirmation {
        let mut next = button(Text::new(i18n.tr("wizard-next")).size(typography::BODY))
            .padding([spacing::XS, spacing::MD]);
        next = if state.can_advance() {
            next.on_press(Message::Advance).style(styles::primary_button)
        } else {
            next.style(styles::disabled_button)
        };
        row = row.push(next);
    }

    row.into()
}

fn prompt_overlay<'a>(
    base: Element<'a, Message>,
    prompt: Prompt,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    match prompt {
        Prompt::ConfirmLeave { .. } => dialog::overlay(
            base,
            i18n.tr("wizard-leave-title"),
            i18n.tr("wizard-leave-body"),
            vec![
                dialog::Choice {
                    label: i18n.tr("wizard-leave-stay"),
                    message: Message::PromptContinue,
                    primary: false,
                },
                dialog::Choice {
                    label: i18n.tr("wizard-leave-discard"),
                    message: Message::PromptDiscard,
                    primary: true,
                },
            ],
        ),
        Prompt::ResumeOrRestart => dialog::overlay(
            base,
            i18n.tr("wizard-resume-title"),
            i18n.tr("wizard-resume-body"),
            vec![
                dialog::Choice {
                    label: i18n.tr("wizard-resume-continue"),
                    message: Message::PromptContinue,
                    primary: true,
                },
                dialog::Choice {
                    label: i18n.tr("wizard-resume-restart"),
                    message: Message::PromptRestart,
                    primary: false,
                },
            ],
        ),
    }
}
