// SPDX-License-Identifier: MPL-2.0

use super::*;
use std::path::PathBuf;

fn with_image(state: &mut State) {
    let event = state.update(Message::MediaAcquired(MediaOutcome::Acquired(
        PathBuf::from("/tmp/photo.jpg"),
    )));
    assert!(matches!(event, Event::None));
}

fn filled_to_tags_step() -> State {
    let mut state = State::new();
    with_image(&mut state);
    state.update(Message::Advance);
    state.update(Message::NameChanged("키보드".into()));
    state.update(Message::PriceChanged("35000".into()));
    state.update(Message::QuantityChanged("10".into()));
    state.update(Message::Advance);
    assert_eq!(state.step(), WizardStep::Tags);
    state
}

fn filled_to_confirmation() -> State {
    let mut state = filled_to_tags_step();
    state.update(Message::TagInputChanged("전자기기".into()));
    state.update(Message::TagSubmitted);
    state.update(Message::Advance);
    assert_eq!(state.step(), WizardStep::Confirmation);
    state
}

#[test]
fn starts_at_image_step_with_empty_draft() {
    let state = State::new();
    assert_eq!(state.step(), WizardStep::ImageUpload);
    assert!(!state.draft().has_unsaved_changes());
    assert!(state.prompt().is_none());
}

#[test]
fn image_step_blocks_advance_until_an_image_is_set() {
    let mut state = State::new();
    assert!(!state.can_advance());
    state.update(Message::Advance);
    assert_eq!(state.step(), WizardStep::ImageUpload);

    with_image(&mut state);
    assert!(state.can_advance());
    state.update(Message::Advance);
    assert_eq!(state.step(), WizardStep::ProductInfo);
}

#[test]
fn camera_and_gallery_requests_surface_as_events() {
    let mut state = State::new();
    assert!(matches!(
        state.update(Message::TakePhoto),
        Event::AcquireMedia(MediaRequest::Camera)
    ));
    assert!(matches!(
        state.update(Message::PickFromGallery),
        Event::AcquireMedia(MediaRequest::Gallery)
    ));
}

#[test]
fn cancelled_acquisition_leaves_the_draft_untouched() {
    let mut state = State::new();
    let event = state.update(Message::MediaAcquired(MediaOutcome::Cancelled));
    assert!(matches!(event, Event::None));
    assert!(state.draft().image().is_none());
    assert!(!state.draft().has_unsaved_changes());
}

#[test]
fn denied_acquisition_reports_the_denial() {
    let mut state = State::new();
    let event = state.update(Message::MediaAcquired(MediaOutcome::Denied));
    assert!(matches!(event, Event::MediaDenied));
    assert!(state.draft().image().is_none());
}

#[test]
fn clearing_the_photo_revokes_the_advance_guard() {
    let mut state = State::new();
    with_image(&mut state);
    assert!(state.can_advance());
    state.update(Message::ClearPhoto);
    assert!(!state.can_advance());
}

#[test]
fn info_fields_disclose_progressively() {
    let mut state = State::new();
    with_image(&mut state);
    state.update(Message::Advance);

    assert!(!state.shows_price_field());
    assert!(!state.shows_quantity_field());

    state.update(Message::NameChanged("키보드".into()));
    assert!(state.shows_price_field());
    assert!(!state.shows_quantity_field());

    state.update(Message::PriceChanged("35000".into()));
    assert!(state.shows_quantity_field());
}

#[test]
fn clearing_the_name_hides_the_later_fields_again() {
    let mut state = State::new();
    with_image(&mut state);
    state.update(Message::Advance);
    state.update(Message::NameChanged("키보드".into()));
    state.update(Message::PriceChanged("35000".into()));
    state.update(Message::NameChanged(String::new()));
    assert!(!state.shows_price_field());
    assert!(!state.shows_quantity_field());
    assert!(!state.can_advance());
}

#[test]
fn info_step_requires_name_price_and_quantity() {
    let mut state = State::new();
    with_image(&mut state);
    state.update(Message::Advance);

    state.update(Message::NameChanged("키보드".into()));
    assert!(!state.can_advance());
    state.update(Message::PriceChanged("35000".into()));
    assert!(!state.can_advance());
    state.update(Message::QuantityChanged("10".into()));
    assert!(state.can_advance());
}

#[test]
fn zero_values_still_satisfy_the_info_guard() {
    let mut state = State::new();
    with_image(&mut state);
    state.update(Message::Advance);
    state.update(Message::NameChanged("샘플".into()));
    state.update(Message::PriceChanged("0".into()));
    state.update(Message::QuantityChanged("0".into()));
    assert!(state.can_advance());
}

#[test]
fn non_digit_price_input_is_stripped() {
    let mut state = State::new();
    with_image(&mut state);
    state.update(Message::Advance);
    state.update(Message::NameChanged("키보드".into()));
    state.update(Message::PriceChanged("35,000원".into()));
    assert_eq!(state.draft().price(), "35000");
    assert_eq!(state.draft().display_price(), "35,000");
}

#[test]
fn tags_step_requires_at_least_one_tag() {
    let mut state = filled_to_tags_step();
    assert!(!state.can_advance());

    state.update(Message::TagInputChanged("전자기기".into()));
    state.update(Message::TagSubmitted);
    assert!(state.can_advance());

    state.update(Message::TagRemoved(0));
    assert!(!state.can_advance());
}

#[test]
fn submitting_a_tag_clears_the_input_only_on_success() {
    let mut state = filled_to_tags_step();
    state.update(Message::TagInputChanged("전자기기".into()));
    state.update(Message::TagSubmitted);
    assert_eq!(state.tag_input(), "");

    state.update(Message::TagInputChanged("전자기기".into()));
    state.update(Message::TagSubmitted);
    assert_eq!(state.tag_input(), "전자기기");
    assert_eq!(state.draft().tags(), ["전자기기"]);
}

#[test]
fn suggested_tag_toggle_adds_then_removes() {
    let mut state = filled_to_tags_step();
    state.update(Message::SuggestedToggled("게이밍".into()));
    assert!(state.draft().has_tag("게이밍"));
    state.update(Message::SuggestedToggled("게이밍".into()));
    assert!(!state.draft().has_tag("게이밍"));
}

#[test]
fn suggestion_request_carries_the_current_epoch_and_pool() {
    let mut state = filled_to_tags_step();
    let event = state.update(Message::GenerateSuggestions);
    match event {
        Event::Suggest { epoch, pool } => {
            assert_eq!(pool.len(), SUGGESTION_POOL.len());
            let reply = state.update(Message::SuggestionsReady {
                epoch,
                tags: vec!["무선".into(), "할인".into()],
            });
            assert!(matches!(reply, Event::None));
            assert_eq!(state.suggestions(), ["무선", "할인"]);
            assert!(!state.loading_suggestions());
        }
        other => panic!("expected suggestion request, got {other:?}"),
    }
}

#[test]
fn stale_suggestion_replies_are_dropped() {
    let mut state = filled_to_tags_step();
    let first = state.update(Message::GenerateSuggestions);
    let first_epoch = match first {
        Event::Suggest { epoch, .. } => epoch,
        other => panic!("expected suggestion request, got {other:?}"),
    };
    state.update(Message::GenerateSuggestions);

    state.update(Message::SuggestionsReady {
        epoch: first_epoch,
        tags: vec!["낡은결과".into()],
    });
    assert!(state.suggestions().is_empty());
    assert!(state.loading_suggestions());
}

#[test]
fn reset_invalidates_in_flight_suggestions() {
    let mut state = filled_to_tags_step();
    let event = state.update(Message::GenerateSuggestions);
    let epoch = match event {
        Event::Suggest { epoch, .. } => epoch,
        other => panic!("expected suggestion request, got {other:?}"),
    };

    state.intercept_leave(crate::app::Screen::Home);
    state.update(Message::PromptDiscard);

    state.update(Message::SuggestionsReady {
        epoch,
        tags: vec!["전자기기".into()],
    });
    assert!(state.suggestions().is_empty());
}

#[test]
fn regress_is_always_allowed_before_registration() {
    let mut state = filled_to_confirmation();
    state.update(Message::Regress);
    assert_eq!(state.step(), WizardStep::Tags);
    state.update(Message::Regress);
    assert_eq!(state.step(), WizardStep::ProductInfo);
    state.update(Message::Regress);
    assert_eq!(state.step(), WizardStep::ImageUpload);
    state.update(Message::Regress);
    assert_eq!(state.step(), WizardStep::ImageUpload);
}

#[test]
fn regressing_preserves_entered_data() {
    let mut state = filled_to_confirmation();
    state.update(Message::Regress);
    state.update(Message::Regress);
    assert_eq!(state.draft().name(), "키보드");
    assert_eq!(state.draft().price(), "35000");
    assert_eq!(state.draft().tags(), ["전자기기"]);
}

#[test]
fn register_settles_the_draft_and_reports_the_product() {
    let mut state = filled_to_confirmation();
    let event = state.update(Message::ConfirmRegister);
    match event {
        Event::Registered(product) => {
            assert_eq!(product.name, "키보드");
            assert_eq!(product.price, "35000");
            assert_eq!(product.description, "전자기기");
            assert!(product.image.is_some());
        }
        other => panic!("expected registration, got {other:?}"),
    }
    assert!(state.draft().is_registered());
    assert!(!state.draft().has_unsaved_changes());
}

#[test]
fn register_is_idempotent() {
    let mut state = filled_to_confirmation();
    assert!(matches!(
        state.update(Message::ConfirmRegister),
        Event::Registered(_)
    ));
    assert!(matches!(
        state.update(Message::ConfirmRegister),
        Event::None
    ));
}

#[test]
fn register_only_fires_on_the_confirmation_step() {
    let mut state = filled_to_tags_step();
    assert!(matches!(
        state.update(Message::ConfirmRegister),
        Event::None
    ));
    assert!(!state.draft().is_registered());
}

#[test]
fn regress_is_blocked_after_registration() {
    let mut state = filled_to_confirmation();
    state.update(Message::ConfirmRegister);
    state.update(Message::Regress);
    assert_eq!(state.step(), WizardStep::Confirmation);
}

#[test]
fn return_home_resets_for_the_next_session() {
    let mut state = filled_to_confirmation();
    state.update(Message::ConfirmRegister);
    let event = state.update(Message::ReturnHome);
    assert!(matches!(event, Event::Leave(crate::app::Screen::Home)));
    assert_eq!(state.step(), WizardStep::ImageUpload);
    assert!(!state.draft().has_unsaved_changes());
    assert!(!state.draft().is_registered());
}

#[test]
fn leaving_a_clean_wizard_is_not_intercepted() {
    let mut state = State::new();
    let event = state.intercept_leave(crate::app::Screen::Profile);
    assert!(matches!(event, Event::Leave(crate::app::Screen::Profile)));
    assert!(state.prompt().is_none());
}

#[test]
fn leaving_a_dirty_wizard_raises_the_confirm_prompt() {
    let mut state = State::new();
    with_image(&mut state);
    let event = state.intercept_leave(crate::app::Screen::MyProducts);
    assert!(matches!(event, Event::None));
    assert_eq!(
        state.prompt(),
        Some(Prompt::ConfirmLeave {
            target: crate::app::Screen::MyProducts
        })
    );
}

#[test]
fn prompt_continue_keeps_the_draft_and_stays() {
    let mut state = State::new();
    with_image(&mut state);
    state.intercept_leave(crate::app::Screen::Home);
    let event = state.update(Message::PromptContinue);
    assert!(matches!(event, Event::None));
    assert!(state.prompt().is_none());
    assert!(state.draft().image().is_some());
}

#[test]
fn prompt_discard_resets_and_leaves_for_the_requested_screen() {
    let mut state = State::new();
    with_image(&mut state);
    state.intercept_leave(crate::app::Screen::Profile);
    let event = state.update(Message::PromptDiscard);
    assert!(matches!(event, Event::Leave(crate::app::Screen::Profile)));
    assert!(!state.draft().has_unsaved_changes());
    assert!(state.prompt().is_none());
}

#[test]
fn leaving_after_registration_is_not_intercepted() {
    let mut state = filled_to_confirmation();
    state.update(Message::ConfirmRegister);
    let event = state.intercept_leave(crate::app::Screen::Home);
    assert!(matches!(event, Event::Leave(crate::app::Screen::Home)));
}

#[test]
fn focus_reentry_with_a_draft_offers_resume_or_restart() {
    let mut state = State::new();
    with_image(&mut state);
    state.on_focus_regained();
    assert_eq!(state.prompt(), Some(Prompt::ResumeOrRestart));
}

#[test]
fn focus_reentry_with_a_clean_wizard_is_silent() {
    let mut state = State::new();
    state.on_focus_regained();
    assert!(state.prompt().is_none());
}

#[test]
fn prompt_restart_discards_and_returns_to_step_one() {
    let mut state = filled_to_tags_step();
    state.on_focus_regained();
    let event = state.update(Message::PromptRestart);
    assert!(matches!(event, Event::None));
    assert_eq!(state.step(), WizardStep::ImageUpload);
    assert!(!state.draft().has_unsaved_changes());
}

#[test]
fn back_steps_through_the_wizard_then_asks_to_exit() {
    let mut state = filled_to_tags_step();
    state.update(Message::BackPressed);
    assert_eq!(state.step(), WizardStep::ProductInfo);
    state.update(Message::BackPressed);
    assert_eq!(state.step(), WizardStep::ImageUpload);

    let event = state.update(Message::BackPressed);
    assert!(matches!(event, Event::None));
    assert_eq!(
        state.prompt(),
        Some(Prompt::ConfirmLeave {
            target: crate::app::Screen::Home
        })
    );
}

#[test]
fn back_on_a_clean_first_step_exits_without_a_prompt() {
    let mut state = State::new();
    let event = state.update(Message::BackPressed);
    assert!(matches!(event, Event::Leave(crate::app::Screen::Home)));
}

#[test]
fn back_dismisses_an_open_prompt_first() {
    let mut state = State::new();
    with_image(&mut state);
    state.intercept_leave(crate::app::Screen::Home);
    assert!(state.prompt().is_some());
    let event = state.update(Message::BackPressed);
    assert!(matches!(event, Event::None));
    assert!(state.prompt().is_none());
    assert!(state.draft().image().is_some());
}

#[test]
fn back_after_registration_returns_home() {
    let mut state = filled_to_confirmation();
    state.update(Message::ConfirmRegister);
    let event = state.update(Message::BackPressed);
    assert!(matches!(event, Event::Leave(crate::app::Screen::Home)));
    assert_eq!(state.step(), WizardStep::ImageUpload);
}

#[test]
fn view_renders_every_step() {
    let i18n = crate::i18n::I18n::default();
    let mut state = filled_to_confirmation();
    drop(view::view(&state, &i18n));
    state.update(Message::Regress);
    drop(view::view(&state, &i18n));
    state.update(Message::Regress);
    drop(view::view(&state, &i18n));
    state.update(Message::Regress);
    drop(view::view(&state, &i18n));
}

#[test]
fn view_renders_with_an_open_prompt() {
    let i18n = crate::i18n::I18n::default();
    let mut state = State::new();
    with_image(&mut state);
    state.intercept_leave(crate::app::Screen::Home);
    let _element = view::view(&state, &i18n);
}
