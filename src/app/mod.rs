// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the four screens.
//!
//! The `App` struct wires the screens to the shared services (media source,
//! tag suggester, product repository) and translates component events into
//! side effects: async tasks, config persistence, notifications, and screen
//! switches. Navigation policy, in particular the wizard's leave
//! interception, lives here next to the update loop so the user-facing
//! behavior is easy to audit.

mod message;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::catalog::InMemoryProductRepository;
use crate::config::Config;
use crate::i18n::I18n;
use crate::services::{DialogMediaSource, MediaSource, StubTagSuggester, TagSuggester};
use crate::ui::home;
use crate::ui::notifications;
use crate::ui::wizard;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;

pub const WINDOW_DEFAULT_WIDTH: u32 = 420;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 780;
pub const MIN_WINDOW_WIDTH: u32 = 360;
pub const MIN_WINDOW_HEIGHT: u32 = 640;

/// Root Iced application state bridging screens, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    home: home::State,
    wizard: wizard::State,
    products: InMemoryProductRepository,
    config: Config,
    notifications: notifications::Manager,
    media_source: Arc<dyn MediaSource>,
    tag_suggester: Arc<dyn TagSuggester>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("wizard_step", &self.wizard.step())
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::with_services(
            Flags::default(),
            Config::default(),
            Arc::new(DialogMediaSource),
            Arc::new(StubTagSuggester::default()),
        )
    }
}

impl App {
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = crate::config::load().unwrap_or_default();
        let app = Self::with_services(
            flags,
            config,
            Arc::new(DialogMediaSource),
            Arc::new(StubTagSuggester::default()),
        );
        (app, Task::none())
    }

    /// Constructor with injectable services, used directly by tests.
    pub fn with_services(
        flags: Flags,
        config: Config,
        media_source: Arc<dyn MediaSource>,
        tag_suggester: Arc<dyn TagSuggester>,
    ) -> Self {
        let i18n = I18n::new(flags.lang, &config);
        Self {
            i18n,
            screen: Screen::Home,
            home: home::State::new(),
            wizard: wizard::State::new(),
            products: InMemoryProductRepository::with_sample_products(),
            config,
            notifications: notifications::Manager::new(),
            media_source,
            tag_suggester,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        update::handle(self, message)
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        subscription::subscription(self)
    }

    pub fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    pub fn theme(&self) -> Theme {
        Theme::Light
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires Fn for the boot closure; the RefCell lets the
    // one-shot flags move through it.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}
