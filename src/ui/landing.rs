//! Landing screen: product pitch, feature cards, how-it-works steps.
//!
//! Everything here is static copy; the only interactions are the two
//! calls-to-action that navigate away.

use iced::widget::{button, column, container, row, text, Column};
use iced::{Alignment, Element, Length};
use iced_aw::Wrap;

use crate::ui::style;
use crate::{Message, Screen};

const STATS: &[(&str, &str)] = &[
    ("10,000+", "Images analyzed"),
    ("50,000+", "Objects detected"),
    ("98.5%", "Accuracy"),
    ("15+", "Categories"),
];

const FEATURES: &[(&str, &str)] = &[
    (
        "Advanced artificial intelligence",
        "Deep-learning models trained on thousands of astronomical images for precise recognition.",
    ),
    (
        "Fast analysis",
        "Real-time image processing with detailed results in a few seconds.",
    ),
    (
        "Multi-object detection",
        "Stars, galaxies, nebulae, quasars and other celestial bodies identified in a single pass.",
    ),
    (
        "Complete catalog",
        "A vast collection of classified celestial objects backs every classification.",
    ),
];

const STEPS: &[(&str, &str, &str)] = &[
    (
        "1",
        "Preprocessing",
        "Images are normalized and enhanced to optimize detection quality.",
    ),
    (
        "2",
        "Detection & classification",
        "Celestial objects are identified and classified by type with a confidence score.",
    ),
    (
        "3",
        "Analysis & export",
        "Detailed reports with coordinates, properties and classifications.",
    ),
];

pub fn view() -> Element<'static, Message> {
    let content = column![hero(), features(), how_it_works()]
        .spacing(64)
        .max_width(960)
        .padding(32);

    container(content).center_x(Length::Fill).into()
}

fn hero() -> Element<'static, Message> {
    let tagline = container(
        text("Artificial intelligence & astronomy")
            .size(13)
            .color(style::MUTED),
    )
    .style(style::badge)
    .padding([6.0, 14.0]);

    let actions = row![
        button(text("Analyze your images").size(16))
            .style(style::primary_button)
            .on_press(Message::Navigate(Screen::Upload))
            .padding([12.0, 24.0]),
        button(text("Explore the gallery").size(16))
            .style(style::ghost_button)
            .on_press(Message::Navigate(Screen::Gallery))
            .padding([12.0, 24.0]),
    ]
    .spacing(12);

    let stats = Wrap::with_elements(STATS.iter().map(stat_card).collect())
        .spacing(12.0)
        .line_spacing(12.0);

    column![
        tagline,
        text("AstroVision AI").size(56).color(style::PRIMARY),
        text("Automatic analysis of astronomical images, powered by artificial intelligence")
            .size(20)
            .color(style::MUTED),
        actions,
        stats,
    ]
    .spacing(20)
    .align_x(Alignment::Center)
    .into()
}

fn stat_card((value, label): &(&'static str, &'static str)) -> Element<'static, Message> {
    container(
        column![
            text(*value).size(26).color(style::PRIMARY),
            text(*label).size(12).color(style::MUTED),
        ]
        .spacing(4)
        .align_x(Alignment::Center),
    )
    .style(style::card)
    .padding(16)
    .width(Length::Fixed(190.0))
    .into()
}

fn features() -> Element<'static, Message> {
    let cards = Wrap::with_elements(FEATURES.iter().map(feature_card).collect())
        .spacing(16.0)
        .line_spacing(16.0);

    column![
        text("Main features").size(30),
        text("The latest advances in artificial intelligence, applied to the classification of celestial objects")
            .size(15)
            .color(style::MUTED),
        cards,
    ]
    .spacing(16)
    .align_x(Alignment::Center)
    .into()
}

fn feature_card((title, description): &(&'static str, &'static str)) -> Element<'static, Message> {
    container(
        column![
            text(*title).size(17),
            text(*description).size(13).color(style::MUTED),
        ]
        .spacing(8),
    )
    .style(style::card)
    .padding(20)
    .width(Length::Fixed(430.0))
    .into()
}

fn how_it_works() -> Element<'static, Message> {
    let mut steps = row![].spacing(16);
    for (number, title, description) in STEPS {
        steps = steps.push(step_card(number, title, description));
    }

    column![
        text("How does it work?").size(30),
        text("Convolutional neural networks trained on millions of astronomical images identify and classify celestial objects automatically.")
            .size(15)
            .color(style::MUTED),
        steps,
    ]
    .spacing(16)
    .align_x(Alignment::Center)
    .into()
}

fn step_card(
    number: &'static str,
    title: &'static str,
    description: &'static str,
) -> Element<'static, Message> {
    let numeral = container(text(number).size(20).color(style::PRIMARY))
        .style(style::badge)
        .padding([8.0, 16.0]);

    container(
        Column::with_children([
            numeral.into(),
            text(title).size(16).into(),
            text(description).size(13).color(style::MUTED).into(),
        ])
        .spacing(10),
    )
    .style(style::card)
    .padding(20)
    .width(Length::Fill)
    .into()
}
