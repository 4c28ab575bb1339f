// SPDX-License-Identifier: MPL-2.0
//! `marketstand` is a seller-side storefront app built with the Iced GUI
//! framework.
//!
//! The core is a four-step product registration wizard implemented as a
//! headless state machine, surrounded by a dashboard, a product list, and a
//! profile screen. Localization uses Fluent; preferences persist to a TOML
//! config file.

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod i18n;
pub mod services;
pub mod ui;
