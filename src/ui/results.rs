//! Results screen: mock detection summary and detail list.

use iced::widget::{column, container, horizontal_space, progress_bar, row, text};
use iced::{Alignment, Element, Length};
use iced_aw::Wrap;

use crate::state::report::{Detection, DetectionDetail};
use crate::ui::style;
use crate::Message;

pub fn view<'a>(summary: &'a [Detection], details: &'a [DetectionDetail]) -> Element<'a, Message> {
    let heading = column![
        text("Analysis results").size(36),
        text("Celestial objects detected and classified by the AI")
            .size(15)
            .color(style::MUTED),
    ]
    .spacing(8);

    let cards = Wrap::with_elements(summary.iter().map(summary_card).collect())
        .spacing(16.0)
        .line_spacing(16.0);

    let content = column![heading, cards, detail_list(details)]
        .spacing(28)
        .max_width(1000)
        .padding(32);

    container(content).center_x(Length::Fill).into()
}

fn summary_card(detection: &Detection) -> Element<'_, Message> {
    let count = container(text(detection.count.to_string()).size(16))
        .style(style::badge)
        .padding([4.0, 12.0]);

    let confidence = column![
        row![
            text("Confidence").size(12).color(style::MUTED),
            horizontal_space(),
            text(format!("{}%", detection.confidence)).size(12),
        ],
        progress_bar(0.0..=100.0, f32::from(detection.confidence))
            .height(Length::Fixed(8.0))
            .style(style::confidence_bar),
    ]
    .spacing(6);

    container(
        column![
            row![
                text(detection.kind.label()).size(17),
                horizontal_space(),
                count,
            ]
            .align_y(Alignment::Center),
            confidence,
        ]
        .spacing(14),
    )
    .style(style::card)
    .padding(20)
    .width(Length::Fixed(230.0))
    .into()
}

fn detail_list(details: &[DetectionDetail]) -> Element<'_, Message> {
    let mut rows = column![].spacing(10);
    for detail in details {
        rows = rows.push(detail_row(detail));
    }

    container(
        column![
            text("Detection details").size(22),
            text("Each detected object with its class, confidence and sky coordinates")
                .size(13)
                .color(style::MUTED),
            rows,
        ]
        .spacing(16),
    )
    .style(style::card)
    .padding(24)
    .width(Length::Fill)
    .into()
}

fn detail_row(detail: &DetectionDetail) -> Element<'_, Message> {
    let identity = column![
        text(&detail.designation).size(14),
        text(format!("Type: {}", detail.kind.label()))
            .size(12)
            .color(style::MUTED),
    ]
    .spacing(4);

    let verdict = column![
        container(text(format!("{}% confidence", detail.confidence)).size(11))
            .style(style::badge)
            .padding([4.0, 10.0]),
        text(format!("{} | {}", detail.ra, detail.dec))
            .size(11)
            .color(style::MUTED),
    ]
    .spacing(6)
    .align_x(Alignment::End);

    container(
        row![identity, horizontal_space(), verdict].align_y(Alignment::Center),
    )
    .style(|_theme| container::Style {
        background: Some(style::SURFACE_RAISED.into()),
        border: iced::Border {
            color: style::EDGE,
            width: 1.0,
            radius: 10.0.into(),
        },
        ..container::Style::default()
    })
    .padding(14)
    .width(Length::Fill)
    .into()
}
