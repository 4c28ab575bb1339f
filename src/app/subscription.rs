// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Three sources: the Escape key acts as the hardware back trigger while
//! the wizard is focused, a fast tick drives notification auto-dismiss, and
//! a slow tick rotates the home purchase feed.

use super::{App, Message, Screen};
use crate::ui::wizard;
use iced::{keyboard, time, Subscription};
use std::time::Duration;

/// Rotation interval of the purchase feed on the home screen.
const TICKER_INTERVAL: Duration = Duration::from_secs(3);
/// Granularity of notification auto-dismiss checks.
const NOTIFICATION_TICK: Duration = Duration::from_millis(100);

pub fn subscription(app: &App) -> Subscription<Message> {
    Subscription::batch([
        back_key_subscription(app.screen()),
        ticker_subscription(app.screen()),
        notification_tick_subscription(app),
    ])
}

/// Escape plays the hardware-back role, but only while the wizard screen is
/// focused; other screens keep their default key handling.
fn back_key_subscription(screen: Screen) -> Subscription<Message> {
    if screen == Screen::Register {
        keyboard::listen().filter_map(|event| match event {
            keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::Escape),
                ..
            } => Some(Message::Wizard(wizard::Message::BackPressed)),
            _ => None,
        })
    } else {
        Subscription::none()
    }
}

fn ticker_subscription(screen: Screen) -> Subscription<Message> {
    if screen == Screen::Home {
        time::every(TICKER_INTERVAL).map(Message::TickerTick)
    } else {
        Subscription::none()
    }
}

fn notification_tick_subscription(app: &App) -> Subscription<Message> {
    if app.notifications.has_notifications() {
        time::every(NOTIFICATION_TICK).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
