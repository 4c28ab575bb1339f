// SPDX-License-Identifier: MPL-2.0
//! UI layer: screens, shared components, styling, and notifications.

pub mod components;
pub mod design_tokens;
pub mod home;
pub mod navbar;
pub mod notifications;
pub mod products;
pub mod profile;
pub mod styles;
pub mod wizard;
