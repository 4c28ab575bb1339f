// SPDX-License-Identifier: MPL-2.0
//! Localization support built on Fluent.
//!
//! Translations are embedded `.ftl` resources, one per locale. Locale
//! resolution order: CLI flag, config file, OS locale, `en-US` fallback.

pub mod fluent;

pub use fluent::I18n;
