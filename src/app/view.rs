// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Lays out the shared chrome (header, tab bar), dispatches the active
//! screen's content, and stacks the toast overlay on top.

use super::{App, Message, Screen};
use crate::catalog::ProductRepository;
use crate::ui::components::header;
use crate::ui::navbar;
use crate::ui::notifications::Toast;
use crate::ui::products;
use crate::ui::profile;
use crate::ui::wizard;
use iced::widget::{Column, Container, Stack};
use iced::{Element, Length};

pub fn view(app: &App) -> Element<'_, Message> {
    let content: Element<'_, Message> = match app.screen() {
        Screen::Home => app.home.view(&app.i18n).map(Message::Home),
        Screen::Register => wizard::view::view(&app.wizard, &app.i18n).map(Message::Wizard),
        Screen::MyProducts => products::view(app.products.list(), &app.i18n).map(Message::Products),
        Screen::Profile => profile::view(profile::ViewContext {
            i18n: &app.i18n,
            push_notifications: app.config.push_notifications.unwrap_or(true),
        })
        .map(Message::Profile),
    };

    let page = Column::new()
        .push(header::view(&app.i18n).map(Message::Header))
        .push(
            Container::new(content)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(
            navbar::view(navbar::ViewContext {
                i18n: &app.i18n,
                active: app.screen(),
            })
            .map(Message::Navbar),
        );

    Stack::new()
        .push(
            Container::new(page)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(Toast::view_overlay(&app.notifications, &app.i18n).map(Message::Notification))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::navbar::Message as NavbarMessage;

    #[test]
    fn every_screen_renders() {
        let mut app = App::default();
        for screen in [
            Screen::Home,
            Screen::Register,
            Screen::MyProducts,
            Screen::Profile,
        ] {
            app.update(Message::Navbar(NavbarMessage::TabSelected(screen)));
            let _element = view(&app);
        }
    }
}
