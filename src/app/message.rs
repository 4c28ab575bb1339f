// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::components::header;
use crate::ui::home;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::products;
use crate::ui::profile;
use crate::ui::wizard;
use std::time::Instant;

/// Startup options parsed from the command line.
#[derive(Debug, Default)]
pub struct Flags {
    /// Locale override, e.g. `--lang ko`.
    pub lang: Option<String>,
}

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Header(header::Message),
    Navbar(navbar::Message),
    Home(home::Message),
    Wizard(wizard::Message),
    Products(products::Message),
    Profile(profile::Message),
    Notification(notifications::NotificationMessage),
    /// Periodic tick for notification auto-dismiss.
    Tick(Instant),
    /// Periodic tick rotating the home purchase feed.
    TickerTick(Instant),
}
