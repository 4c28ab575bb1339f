// SPDX-License-Identifier: MPL-2.0
//! Four-step product registration wizard.
//!
//! The wizard is a headless state machine: `update` consumes a [`Message`],
//! mutates [`State`], and returns an [`Event`] describing any effect the app
//! must perform (media acquisition, tag suggestion, navigation). The view
//! layer in [`view`] renders whatever the state says; it never decides
//! transitions itself.
//!
//! Navigation away from an in-progress draft is intercepted: the app asks
//! the wizard before switching screens, and the wizard answers by either
//! approving the switch or raising a confirmation prompt. Once a draft is
//! registered it is settled and interception stops.

pub mod messages;
pub mod view;

#[cfg(test)]
mod tests;

pub use messages::{Event, Message};

use crate::app::Screen;
use crate::catalog::{DraftProduct, Product};
use crate::services::{MediaOutcome, MediaRequest, SUGGESTION_POOL};

/// The four wizard steps, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    ImageUpload,
    ProductInfo,
    Tags,
    Confirmation,
}

impl WizardStep {
    pub const COUNT: u8 = 4;

    /// One-based position, for the step indicator.
    pub fn number(self) -> u8 {
        match self {
            Self::ImageUpload => 1,
            Self::ProductInfo => 2,
            Self::Tags => 3,
            Self::Confirmation => 4,
        }
    }

    pub fn title_key(self) -> &'static str {
        match self {
            Self::ImageUpload => "wizard-step-image-title",
            Self::ProductInfo => "wizard-step-info-title",
            Self::Tags => "wizard-step-tags-title",
            Self::Confirmation => "wizard-step-confirm-title",
        }
    }

    fn next(self) -> Option<Self> {
        match self {
            Self::ImageUpload => Some(Self::ProductInfo),
            Self::ProductInfo => Some(Self::Tags),
            Self::Tags => Some(Self::Confirmation),
            Self::Confirmation => None,
        }
    }

    fn previous(self) -> Option<Self> {
        match self {
            Self::ImageUpload => None,
            Self::ProductInfo => Some(Self::ImageUpload),
            Self::Tags => Some(Self::ProductInfo),
            Self::Confirmation => Some(Self::Tags),
        }
    }
}

impl Default for WizardStep {
    fn default() -> Self {
        Self::ImageUpload
    }
}

/// Modal prompt currently blocking the wizard, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    /// "Discard the draft and leave?" raised by a leave attempt.
    ConfirmLeave { target: Screen },
    /// "Continue this draft or start over?" raised on focus reentry.
    ResumeOrRestart,
}

#[derive(Debug, Default)]
pub struct State {
    draft: DraftProduct,
    step: WizardStep,
    tag_input: String,
    suggestions: Vec<String>,
    loading_suggestions: bool,
    suggestion_epoch: u64,
    prompt: Option<Prompt>,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &DraftProduct {
        &self.draft
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn prompt(&self) -> Option<Prompt> {
        self.prompt
    }

    pub fn tag_input(&self) -> &str {
        &self.tag_input
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn loading_suggestions(&self) -> bool {
        self.loading_suggestions
    }

    /// Whether the current step's guard permits advancing.
    pub fn can_advance(&self) -> bool {
        match self.step {
            WizardStep::ImageUpload => self.draft.image().is_some(),
            WizardStep::ProductInfo => {
                self.draft.has_name() && self.draft.has_price() && self.draft.has_quantity()
            }
            WizardStep::Tags => !self.draft.tags().is_empty(),
            WizardStep::Confirmation => false,
        }
    }

    /// The price field only appears once a name has been entered.
    pub fn shows_price_field(&self) -> bool {
        self.draft.has_name()
    }

    /// The quantity field only appears once a price has been entered.
    pub fn shows_quantity_field(&self) -> bool {
        self.draft.has_name() && self.draft.has_price()
    }

    /// Called by the app before switching away from the wizard screen.
    /// Returns the event to act on: either an immediate approval or `None`
    /// after raising the confirmation prompt.
    pub fn intercept_leave(&mut self, target: Screen) -> Event {
        if self.draft.has_unsaved_changes() {
            self.prompt = Some(Prompt::ConfirmLeave { target });
            Event::None
        } else {
            Event::Leave(target)
        }
    }

    /// Called by the app when the wizard screen regains focus while a draft
    /// is in progress.
    pub fn on_focus_regained(&mut self) {
        if self.draft.has_unsaved_changes() {
            self.prompt = Some(Prompt::ResumeOrRestart);
        }
    }

    /// Discards the session. Bumps the suggestion epoch so an in-flight
    /// suggestion request cannot land in the next session.
    fn reset(&mut self) {
        self.draft.reset();
        self.step = WizardStep::ImageUpload;
        self.tag_input.clear();
        self.suggestions.clear();
        self.loading_suggestions = false;
        self.suggestion_epoch += 1;
        self.prompt = None;
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::TakePhoto => Event::AcquireMedia(MediaRequest::Camera),
            Message::PickFromGallery => Event::AcquireMedia(MediaRequest::Gallery),
            Message::MediaAcquired(outcome) => match outcome {
                MediaOutcome::Acquired(path) => {
                    self.draft.set_image(path);
                    Event::None
                }
                MediaOutcome::Cancelled => Event::None,
                MediaOutcome::Denied => Event::MediaDenied,
            },
            Message::ClearPhoto => {
                self.draft.clear_image();
                Event::None
            }
            Message::Advance => {
                if self.can_advance() {
                    if let Some(next) = self.step.next() {
                        self.step = next;
                    }
                }
                Event::None
            }
            Message::Regress => {
                self.regress();
                Event::None
            }
            Message::NameChanged(name) => {
                self.draft.set_name(name);
                Event::None
            }
            Message::PriceChanged(input) => {
                self.draft.set_price(&input);
                Event::None
            }
            Message::QuantityChanged(input) => {
                self.draft.set_quantity(&input);
                Event::None
            }
            Message::TagInputChanged(input) => {
                self.tag_input = input;
                Event::None
            }
            Message::TagSubmitted => {
                let input = std::mem::take(&mut self.tag_input);
                if !self.draft.add_tag(&input) {
                    self.tag_input = input;
                }
                Event::None
            }
            Message::TagRemoved(index) => {
                self.draft.remove_tag(index);
                Event::None
            }
            Message::SuggestedToggled(tag) => {
                if !self.draft.remove_tag_value(&tag) {
                    self.draft.add_tag(&tag);
                }
                Event::None
            }
            Message::GenerateSuggestions => {
                self.loading_suggestions = true;
                self.suggestion_epoch += 1;
                Event::Suggest {
                    epoch: self.suggestion_epoch,
                    pool: SUGGESTION_POOL.iter().map(ToString::to_string).collect(),
                }
            }
            Message::SuggestionsReady { epoch, tags } => {
                if epoch == self.suggestion_epoch {
                    self.suggestions = tags;
                    self.loading_suggestions = false;
                }
                Event::None
            }
            Message::ConfirmRegister => {
                if self.step != WizardStep::Confirmation || self.draft.is_registered() {
                    return Event::None;
                }
                self.draft.mark_registered();
                Event::Registered(Product {
                    name: self.draft.name().to_string(),
                    price: self.draft.price().to_string(),
                    description: self.draft.tags().join(", "),
                    image: self.draft.image().cloned(),
                })
            }
            Message::ReturnHome => {
                self.reset();
                Event::Leave(Screen::Home)
            }
            Message::BackPressed => self.back_pressed(),
            Message::PromptContinue => {
                self.prompt = None;
                Event::None
            }
            Message::PromptDiscard => {
                let target = match self.prompt {
                    Some(Prompt::ConfirmLeave { target }) => target,
                    _ => Screen::Home,
                };
                self.reset();
                Event::Leave(target)
            }
            Message::PromptRestart => {
                self.reset();
                Event::None
            }
        }
    }

    /// Regression is free of guards but unavailable once registered.
    fn regress(&mut self) {
        if self.draft.is_registered() {
            return;
        }
        if let Some(previous) = self.step.previous() {
            self.step = previous;
        }
    }

    /// Hardware back: dismiss an open prompt, step back when possible, and
    /// otherwise treat it as an exit attempt from the wizard.
    fn back_pressed(&mut self) -> Event {
        if self.prompt.is_some() {
            self.prompt = None;
            return Event::None;
        }
        if self.draft.is_registered() {
            self.reset();
            return Event::Leave(Screen::Home);
        }
        if self.step.previous().is_some() {
            self.regress();
            return Event::None;
        }
        self.intercept_leave(Screen::Home)
    }
}
