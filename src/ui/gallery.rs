//! Gallery screen: category chips and archived observation cards.
//!
//! Pure presentation over the mock archive. The chips are labels, not
//! filters; the original product never wired filtering either.

use iced::widget::{column, container, horizontal_space, row, text};
use iced::{Alignment, Color, Element, Length};
use iced_aw::Wrap;

use crate::state::report::{Category, ObjectKind, Observation};
use crate::ui::style;
use crate::Message;

const CARD_ART: f32 = 190.0;

pub fn view<'a>(categories: &'a [Category], observations: &'a [Observation]) -> Element<'a, Message> {
    let heading = column![
        text("Celestial object gallery").size(36),
        text("Browse the celestial objects detected and classified by the system")
            .size(15)
            .color(style::MUTED),
    ]
    .spacing(8);

    let chips = Wrap::with_elements(categories.iter().map(category_chip).collect())
        .spacing(10.0)
        .line_spacing(10.0);

    let cards = Wrap::with_elements(observations.iter().map(observation_card).collect())
        .spacing(16.0)
        .line_spacing(16.0);

    let content = column![heading, chips, cards]
        .spacing(24)
        .max_width(1000)
        .padding(32);

    container(content).center_x(Length::Fill).into()
}

fn accent(kind: ObjectKind) -> Color {
    match kind {
        ObjectKind::SpiralGalaxy => style::PRIMARY,
        ObjectKind::Nebula => style::VIOLET,
        ObjectKind::Star => style::ACCENT,
        ObjectKind::Quasar => style::DANGER,
    }
}

fn category_chip(category: &Category) -> Element<'_, Message> {
    container(
        row![
            text(category.kind.plural()).size(13),
            text(category.count.to_string())
                .size(12)
                .color(accent(category.kind)),
        ]
        .spacing(8)
        .align_y(Alignment::Center),
    )
    .style(style::badge)
    .padding([6.0, 14.0])
    .into()
}

fn observation_card(observation: &Observation) -> Element<'_, Message> {
    let tint = accent(observation.kind);

    // Placeholder art: the archive has no real imagery in this build
    let art = container(
        text(observation.kind.label())
            .size(14)
            .color(style::with_alpha(tint, 0.7)),
    )
    .style(style::art_well(tint))
    .center_x(Length::Fixed(CARD_ART))
    .center_y(Length::Fixed(CARD_ART));

    let caption = column![
        row![
            container(text(observation.kind.label()).size(11))
                .style(style::badge)
                .padding([3.0, 8.0]),
            horizontal_space(),
            text(observation.captured.format("%Y-%m-%d").to_string())
                .size(11)
                .color(style::MUTED),
        ]
        .align_y(Alignment::Center),
        text(format!("Confidence: {}%", observation.confidence)).size(13),
    ]
    .spacing(8);

    container(column![art, caption].spacing(10))
        .style(style::card)
        .padding(12)
        .width(Length::Fixed(CARD_ART + 24.0))
        .into()
}
