// SPDX-License-Identifier: MPL-2.0
//! Messages consumed by the wizard and events it reports back to the app.

use crate::app::Screen;
use crate::catalog::Product;
use crate::services::{MediaOutcome, MediaRequest};

/// Everything the wizard reacts to: user input, collaborator callbacks, and
/// the hardware back trigger. Navigation interception and focus reentry go
/// through `State::intercept_leave` and `State::on_focus_regained`, called
/// by the app's screen-switch handler.
#[derive(Debug, Clone)]
pub enum Message {
    /// Request a camera capture for the draft image.
    TakePhoto,
    /// Request a gallery pick for the draft image.
    PickFromGallery,
    /// A media acquisition request finished.
    MediaAcquired(MediaOutcome),
    /// Clear the current draft image so another can be chosen.
    ClearPhoto,

    /// Move to the next step; no-op while the current guard is false.
    Advance,
    /// Move to the previous step.
    Regress,

    NameChanged(String),
    PriceChanged(String),
    QuantityChanged(String),

    TagInputChanged(String),
    /// Submit the tag input field.
    TagSubmitted,
    /// Remove a tag by its position in the draft.
    TagRemoved(usize),
    /// Toggle a suggested tag: adds when absent, removes when present.
    SuggestedToggled(String),
    /// Ask the suggestion service for a fresh pool.
    GenerateSuggestions,
    /// The suggestion service answered. Stale epochs are dropped.
    SuggestionsReady { epoch: u64, tags: Vec<String> },

    /// Terminal confirmation on the last step.
    ConfirmRegister,
    /// Leave the settled wizard and reset for the next session.
    ReturnHome,

    /// Hardware/keyboard back trigger.
    BackPressed,

    /// Prompt answer: keep editing (dismisses either prompt).
    PromptContinue,
    /// Prompt answer: discard the draft and leave.
    PromptDiscard,
    /// Prompt answer: discard the draft and start over at step one.
    PromptRestart,
}

/// Effects the app performs on the wizard's behalf.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Kick off an asynchronous media acquisition.
    AcquireMedia(MediaRequest),
    /// The platform denied media access; surface a dismissible notice.
    MediaDenied,
    /// Kick off an asynchronous tag suggestion request.
    Suggest { epoch: u64, pool: Vec<String> },
    /// The draft was registered; add it to the product list.
    Registered(Product),
    /// Navigation away from the wizard is approved.
    Leave(Screen),
}
