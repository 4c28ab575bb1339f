// SPDX-License-Identifier: MPL-2.0
//! Update handling for the application.
//!
//! Component messages are forwarded to their owners; the events the owners
//! return are translated here into tasks, notifications, config writes, and
//! screen switches. The wizard's leave interception is enforced in
//! `switch_screen`: every navigation away from the register screen is
//! offered to the wizard first.

use super::{App, Message, Screen};
use crate::catalog::ProductRepository;
use crate::ui::components::header;
use crate::ui::home;
use crate::ui::navbar;
use crate::ui::notifications::Notification;
use crate::ui::profile;
use crate::ui::wizard;
use iced::Task;

pub fn handle(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Header(header::Message::LogoPressed) => switch_screen(app, Screen::Home),
        Message::Navbar(message) => {
            let navbar::Event::SwitchScreen(target) = navbar::update(message);
            switch_screen(app, target)
        }
        Message::Home(message) => {
            let event = app.home.update(message);
            handle_home_event(app, event)
        }
        Message::Wizard(message) => {
            let event = app.wizard.update(message);
            handle_wizard_event(app, event)
        }
        Message::Products(message) => match message {},
        Message::Profile(message) => {
            let event = profile::update(message);
            handle_profile_event(app, event)
        }
        Message::Notification(message) => {
            app.notifications.handle_message(&message);
            Task::none()
        }
        Message::Tick(_) => {
            app.notifications.tick();
            Task::none()
        }
        Message::TickerTick(_) => {
            app.home.update(home::Message::TickerAdvanced);
            Task::none()
        }
    }
}

/// Routes a navigation request through the wizard when leaving the register
/// screen, and raises the wizard's reentry prompt when returning to it.
fn switch_screen(app: &mut App, target: Screen) -> Task<Message> {
    if target == app.screen {
        return Task::none();
    }

    if app.screen == Screen::Register {
        let event = app.wizard.intercept_leave(target);
        return handle_wizard_event(app, event);
    }

    app.screen = target;
    if target == Screen::Register {
        app.wizard.on_focus_regained();
    }
    Task::none()
}

fn handle_wizard_event(app: &mut App, event: wizard::Event) -> Task<Message> {
    match event {
        wizard::Event::None => Task::none(),
        wizard::Event::AcquireMedia(request) => {
            let acquisition = app.media_source.acquire(request);
            Task::perform(acquisition, |outcome| {
                Message::Wizard(wizard::Message::MediaAcquired(outcome))
            })
        }
        wizard::Event::MediaDenied => {
            app.notifications
                .push(Notification::warning("notification-media-denied"));
            Task::none()
        }
        wizard::Event::Suggest { epoch, pool } => {
            let suggestion = app.tag_suggester.suggest(pool);
            Task::perform(suggestion, move |tags| {
                Message::Wizard(wizard::Message::SuggestionsReady { epoch, tags })
            })
        }
        wizard::Event::Registered(product) => {
            app.notifications.push(
                Notification::success("notification-product-registered")
                    .with_arg("name", product.name.clone()),
            );
            app.products.add(product);
            Task::none()
        }
        wizard::Event::Leave(target) => {
            app.screen = target;
            Task::none()
        }
    }
}

fn handle_home_event(app: &mut App, event: home::Event) -> Task<Message> {
    match event {
        home::Event::None => Task::none(),
        home::Event::AssistantRequested => {
            app.notifications
                .push(Notification::info("notification-assistant-soon"));
            Task::none()
        }
    }
}

fn handle_profile_event(app: &mut App, event: profile::Event) -> Task<Message> {
    match event {
        profile::Event::PushToggled(enabled) => {
            app.config.push_notifications = Some(enabled);
            persist_config(app);
            Task::none()
        }
        profile::Event::LanguageSelected(locale) => {
            app.config.language = Some(locale.to_string());
            app.i18n.set_locale(locale);
            persist_config(app);
            Task::none()
        }
        profile::Event::SignOutRequested => {
            app.notifications
                .push(Notification::info("notification-sign-out-soon"));
            Task::none()
        }
    }
}

fn persist_config(app: &mut App) {
    if crate::config::save(&app.config).is_err() {
        app.notifications
            .push(Notification::warning("notification-config-save-failed"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Flags;
    use crate::config::Config;
    use crate::services::{FakeMediaSource, MediaOutcome, StubTagSuggester};
    use std::fs;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex, OnceLock};
    use tempfile::tempdir;

    fn config_env_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    /// Redirects the platform config directory to a tempdir for the duration
    /// of `test`, so tests exercising `persist_config` never touch the real
    /// settings file.
    fn with_temp_config_dir<F>(test: F)
    where
        F: FnOnce(&std::path::Path),
    {
        let _guard = config_env_lock().lock().expect("failed to lock mutex");
        let temp_dir = tempdir().expect("failed to create temp dir");
        let previous = std::env::var("XDG_CONFIG_HOME").ok();
        std::env::set_var("XDG_CONFIG_HOME", temp_dir.path());

        test(temp_dir.path());

        if let Some(value) = previous {
            std::env::set_var("XDG_CONFIG_HOME", value);
        } else {
            std::env::remove_var("XDG_CONFIG_HOME");
        }
    }

    fn test_app() -> App {
        App::with_services(
            Flags::default(),
            Config::default(),
            Arc::new(FakeMediaSource::new(MediaOutcome::Acquired(
                PathBuf::from("/tmp/photo.jpg"),
            ))),
            Arc::new(StubTagSuggester::default()),
        )
    }

    fn dirty_wizard(app: &mut App) {
        app.update(Message::Navbar(navbar::Message::TabSelected(
            Screen::Register,
        )));
        app.update(Message::Wizard(wizard::Message::MediaAcquired(
            MediaOutcome::Acquired(PathBuf::from("/tmp/photo.jpg")),
        )));
    }

    #[test]
    fn tab_selection_switches_the_screen() {
        let mut app = test_app();
        app.update(Message::Navbar(navbar::Message::TabSelected(
            Screen::MyProducts,
        )));
        assert_eq!(app.screen(), Screen::MyProducts);
    }

    #[test]
    fn logo_press_returns_home() {
        let mut app = test_app();
        app.update(Message::Navbar(navbar::Message::TabSelected(
            Screen::Profile,
        )));
        app.update(Message::Header(header::Message::LogoPressed));
        assert_eq!(app.screen(), Screen::Home);
    }

    #[test]
    fn leaving_a_dirty_wizard_is_blocked_until_confirmed() {
        let mut app = test_app();
        dirty_wizard(&mut app);

        app.update(Message::Navbar(navbar::Message::TabSelected(Screen::Home)));
        assert_eq!(app.screen(), Screen::Register);

        app.update(Message::Wizard(wizard::Message::PromptDiscard));
        assert_eq!(app.screen(), Screen::Home);
    }

    #[test]
    fn staying_in_the_wizard_keeps_the_draft() {
        let mut app = test_app();
        dirty_wizard(&mut app);

        app.update(Message::Navbar(navbar::Message::TabSelected(Screen::Home)));
        app.update(Message::Wizard(wizard::Message::PromptContinue));
        assert_eq!(app.screen(), Screen::Register);
        assert!(app.wizard.draft().image().is_some());
    }

    #[test]
    fn registration_adds_the_product_and_notifies() {
        let mut app = test_app();
        dirty_wizard(&mut app);
        app.update(Message::Wizard(wizard::Message::Advance));
        app.update(Message::Wizard(wizard::Message::NameChanged("키보드".into())));
        app.update(Message::Wizard(wizard::Message::PriceChanged(
            "35000".into(),
        )));
        app.update(Message::Wizard(wizard::Message::QuantityChanged(
            "10".into(),
        )));
        app.update(Message::Wizard(wizard::Message::Advance));
        app.update(Message::Wizard(wizard::Message::TagInputChanged(
            "전자기기".into(),
        )));
        app.update(Message::Wizard(wizard::Message::TagSubmitted));
        app.update(Message::Wizard(wizard::Message::Advance));

        let before = app.products.list().len();
        app.update(Message::Wizard(wizard::Message::ConfirmRegister));
        assert_eq!(app.products.list().len(), before + 1);
        assert_eq!(app.notifications.visible_count(), 1);
    }

    #[test]
    fn media_denial_surfaces_a_warning() {
        let mut app = test_app();
        app.update(Message::Wizard(wizard::Message::MediaAcquired(
            MediaOutcome::Denied,
        )));
        assert_eq!(app.notifications.visible_count(), 1);
    }

    #[test]
    fn entering_the_wizard_clean_raises_no_prompt() {
        let mut app = test_app();
        app.update(Message::Navbar(navbar::Message::TabSelected(
            Screen::Register,
        )));
        assert_eq!(app.screen(), Screen::Register);
        assert!(app.wizard.prompt().is_none());
    }

    #[test]
    fn discarding_on_leave_resets_the_draft() {
        let mut app = test_app();
        dirty_wizard(&mut app);
        app.update(Message::Navbar(navbar::Message::TabSelected(Screen::Home)));
        app.update(Message::Wizard(wizard::Message::PromptDiscard));
        assert_eq!(app.screen(), Screen::Home);
        assert!(!app.wizard.draft().has_unsaved_changes());
    }

    #[test]
    fn language_selection_updates_locale_and_config_file() {
        with_temp_config_dir(|config_root| {
            let mut app = test_app();
            app.update(Message::Profile(profile::Message::LanguageSelected(
                "ko".parse().unwrap(),
            )));
            assert_eq!(app.i18n.current_locale().to_string(), "ko");
            assert_eq!(app.config.language.as_deref(), Some("ko"));

            let config_path = config_root.join("Marketstand").join("settings.toml");
            assert!(config_path.exists());
            let contents = fs::read_to_string(config_path).expect("config should be readable");
            assert!(contents.contains("ko"));
        });
    }

    #[test]
    fn push_toggle_persists_to_the_config_file() {
        with_temp_config_dir(|config_root| {
            let mut app = test_app();
            app.update(Message::Profile(profile::Message::PushToggled(false)));
            assert_eq!(app.config.push_notifications, Some(false));

            let config_path = config_root.join("Marketstand").join("settings.toml");
            let contents = fs::read_to_string(config_path).expect("config should be readable");
            assert!(contents.contains("push_notifications = false"));
        });
    }

    #[test]
    fn ticker_tick_advances_the_feed() {
        let mut app = test_app();
        let before = app.home.ticker_index();
        app.update(Message::TickerTick(std::time::Instant::now()));
        assert_ne!(app.home.ticker_index(), before);
    }
}
