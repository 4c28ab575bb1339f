// SPDX-License-Identifier: MPL-2.0
//! Home dashboard: stats chart, live purchase ticker, and the assistant
//! call-to-action.

pub mod chart;

use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use chart::LineChart;
use iced::widget::{button, canvas, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Monthly sales counts shown on the sales tab.
const SALES_SERIES: [f32; 5] = [50.0, 30.0, 80.0, 65.0, 81.0];
/// Monthly search counts shown on the searches tab.
const SEARCH_SERIES: [f32; 5] = [30.0, 45.0, 28.0, 70.0, 52.0];

/// Rotating purchase feed entries, resolved through i18n.
const PURCHASE_FEED_KEYS: [&str; 5] = [
    "purchase-feed-1",
    "purchase-feed-2",
    "purchase-feed-3",
    "purchase-feed-4",
    "purchase-feed-5",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartTab {
    #[default]
    Sales,
    Searches,
}

impl ChartTab {
    fn label_key(self) -> &'static str {
        match self {
            Self::Sales => "home-chart-sales",
            Self::Searches => "home-chart-searches",
        }
    }

    fn series(self) -> Vec<f32> {
        match self {
            Self::Sales => SALES_SERIES.to_vec(),
            Self::Searches => SEARCH_SERIES.to_vec(),
        }
    }
}

#[derive(Debug, Default)]
pub struct State {
    tab: ChartTab,
    ticker_index: usize,
}

#[derive(Debug, Clone)]
pub enum Message {
    ChartTabSelected(ChartTab),
    /// Emitted by the app's ticker subscription.
    TickerAdvanced,
    AssistantPressed,
}

#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// The assistant is not wired up yet; the app surfaces a notice.
    AssistantRequested,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tab(&self) -> ChartTab {
        self.tab
    }

    pub fn ticker_index(&self) -> usize {
        self.ticker_index
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::ChartTabSelected(tab) => {
                self.tab = tab;
                Event::None
            }
            Message::TickerAdvanced => {
                self.ticker_index = (self.ticker_index + 1) % PURCHASE_FEED_KEYS.len();
                Event::None
            }
            Message::AssistantPressed => Event::AssistantRequested,
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        Column::new()
            .spacing(spacing::MD)
            .padding(spacing::MD)
            .push(
                Text::new(i18n.tr("home-title"))
                    .size(typography::TITLE)
                    .color(palette::GRAY_900),
            )
            .push(
                Text::new(i18n.tr("home-greeting"))
                    .size(typography::BODY)
                    .color(palette::GRAY_500),
            )
            .push(self.chart_card(i18n))
            .push(self.ticker_card(i18n))
            .push(assistant_card(i18n))
            .into()
    }

    fn chart_card<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let mut tabs = Row::new().spacing(spacing::XS);
        for tab in [ChartTab::Sales, ChartTab::Searches] {
            tabs = tabs.push(
                button(Text::new(i18n.tr(tab.label_key())).size(typography::CAPTION))
                    .on_press(Message::ChartTabSelected(tab))
                    .padding([spacing::XXS, spacing::SM])
                    .style(styles::chip_button(self.tab == tab)),
            );
        }

        let plot = canvas::Canvas::new(LineChart::new(self.tab.series()))
            .width(Length::Fill)
            .height(Length::Fixed(sizing::CHART_HEIGHT));

        let mut months = Row::new().spacing(spacing::XS).width(Length::Fill);
        for month in 1..=SALES_SERIES.len() {
            months = months.push(
                Text::new(i18n.tr(&format!("month-{month}")))
                    .size(typography::CAPTION)
                    .color(palette::GRAY_500)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Center),
            );
        }

        Container::new(
            Column::new()
                .spacing(spacing::SM)
                .push(tabs)
                .push(plot)
                .push(months),
        )
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::card)
        .into()
    }

    fn ticker_card<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let entry = PURCHASE_FEED_KEYS[self.ticker_index % PURCHASE_FEED_KEYS.len()];
        Container::new(
            Row::new()
                .spacing(spacing::SM)
                .align_y(alignment::Vertical::Center)
                .push(Text::new("🔔").size(typography::BODY))
                .push(Text::new(i18n.tr(entry)).size(typography::BODY)),
        )
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::card)
        .into()
    }
}

fn assistant_card(i18n: &I18n) -> Element<'_, Message> {
    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(Text::new(i18n.tr("home-assistant-title")).size(typography::SUBTITLE))
            .push(
                Text::new(i18n.tr("home-assistant-body"))
                    .size(typography::CAPTION)
                    .color(palette::GRAY_500),
            )
            .push(
                button(Text::new(i18n.tr("home-assistant-cta")).size(typography::BODY))
                    .on_press(Message::AssistantPressed)
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::primary_button),
            ),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .style(styles::card)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticker_wraps_around_the_feed() {
        let mut state = State::new();
        for _ in 0..PURCHASE_FEED_KEYS.len() {
            state.update(Message::TickerAdvanced);
        }
        assert_eq!(state.ticker_index(), 0);
    }

    #[test]
    fn chart_tab_selection_switches_the_series() {
        let mut state = State::new();
        assert_eq!(state.tab(), ChartTab::Sales);
        state.update(Message::ChartTabSelected(ChartTab::Searches));
        assert_eq!(state.tab(), ChartTab::Searches);
        assert_eq!(ChartTab::Searches.series(), SEARCH_SERIES.to_vec());
    }

    #[test]
    fn assistant_press_raises_the_event() {
        let mut state = State::new();
        assert!(matches!(
            state.update(Message::AssistantPressed),
            Event::AssistantRequested
        ));
    }

    #[test]
    fn dashboard_renders() {
        let i18n = crate::i18n::I18n::default();
        let state = State::new();
        let _element = state.view(&i18n);
    }
}
