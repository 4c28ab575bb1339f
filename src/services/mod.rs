// SPDX-License-Identifier: MPL-2.0
//! External capabilities the wizard depends on but does not implement.
//!
//! Each collaborator is a trait so the wizard stays headlessly testable:
//! production implementations talk to the platform (file dialogs, timers),
//! test doubles return canned futures.

pub mod media_source;
pub mod tag_suggester;

pub use media_source::{DialogMediaSource, FakeMediaSource, MediaOutcome, MediaRequest, MediaSource};
pub use tag_suggester::{StubTagSuggester, TagSuggester, SUGGESTION_POOL};
