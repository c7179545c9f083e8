//! Upload screen: drop zone, staged-file grid, analyze action.
//!
//! This is the only screen with real state behind it. The drop zone reacts
//! to the drag indicator, the grid mirrors the selection store, and every
//! interaction maps one-to-one onto a selection operation.

use iced::widget::{button, column, container, horizontal_space, image as preview, row, text};
use iced::{Alignment, ContentFit, Element, Length};
use iced_aw::Wrap;

use crate::ingest::thumbnail::{Thumbnail, ThumbnailStrip};
use crate::state::selection::Selection;
use crate::state::staged::{self, StagedFile};
use crate::ui::style;
use crate::Message;

const CARD_ART: f32 = 150.0;

pub fn view<'a>(selection: &'a Selection, thumbnails: &'a ThumbnailStrip) -> Element<'a, Message> {
    let mut content = column![intro(), drop_zone(selection.drag_active())]
        .spacing(28)
        .max_width(860)
        .padding(32);

    if !selection.is_empty() {
        content = content.push(staged_grid(selection, thumbnails));
    }

    content = content.push(steps_row());

    container(content).center_x(Length::Fill).into()
}

fn intro() -> Element<'static, Message> {
    let tagline = container(
        text("Real-time AI analysis")
            .size(13)
            .color(style::MUTED),
    )
    .style(style::badge)
    .padding([6.0, 14.0]);

    column![
        tagline,
        text("Analyze your images").size(36),
        text("Upload your astronomical images and let the AI identify and classify celestial objects automatically")
            .size(15)
            .color(style::MUTED),
    ]
    .spacing(12)
    .align_x(Alignment::Center)
    .into()
}

fn drop_zone(drag_active: bool) -> Element<'static, Message> {
    let content = column![
        text("Drop your astronomical images here").size(20),
        text("or browse for files on disk").size(14).color(style::MUTED),
        button(text("Select images").size(15))
            .style(style::primary_button)
            .on_press(Message::PickFiles)
            .padding([10.0, 24.0]),
        text("Supported formats: JPG, PNG, FITS • Max 20 images")
            .size(12)
            .color(style::MUTED),
    ]
    .spacing(14)
    .align_x(Alignment::Center);

    container(content)
        .style(style::drop_zone(drag_active))
        .padding(48)
        .center_x(Length::Fill)
        .into()
}

fn staged_grid<'a>(
    selection: &'a Selection,
    thumbnails: &'a ThumbnailStrip,
) -> Element<'a, Message> {
    let header = row![
        text(format!("Selected images ({})", selection.len())).size(16),
        horizontal_space(),
        button(text("Clear all").size(12))
            .style(style::ghost_button)
            .on_press(Message::ClearFiles)
            .padding([6.0, 12.0]),
    ]
    .align_y(Alignment::Center);

    let cards = selection
        .files()
        .iter()
        .enumerate()
        .map(|(index, file)| file_card(index, file, thumbnails.get(index)))
        .collect();

    let analyze = button(
        container(text("Start AI analysis").size(16)).center_x(Length::Fill),
    )
    .style(style::primary_button)
    .on_press(Message::Analyze)
    .padding(14)
    .width(Length::Fill);

    column![
        header,
        Wrap::with_elements(cards).spacing(14.0).line_spacing(14.0),
        analyze,
    ]
    .spacing(16)
    .into()
}

fn file_card<'a>(
    index: usize,
    file: &'a StagedFile,
    thumbnail: Option<&'a Thumbnail>,
) -> Element<'a, Message> {
    let art: Element<'a, Message> = match thumbnail {
        Some(thumb) => preview(thumb.handle.clone())
            .width(Length::Fixed(CARD_ART))
            .height(Length::Fixed(CARD_ART))
            .content_fit(ContentFit::Cover)
            .into(),
        None => container(text("No preview").size(11).color(style::MUTED))
            .style(style::art_well(style::PRIMARY))
            .center_x(Length::Fixed(CARD_ART))
            .center_y(Length::Fixed(CARD_ART))
            .into(),
    };

    let meta = match thumbnail {
        Some(thumb) => format!(
            "{} • {}×{}",
            staged::size_label(file.size()),
            thumb.width,
            thumb.height
        ),
        None => staged::size_label(file.size()),
    };

    let caption = column![
        text(&file.name).size(12),
        row![
            text(meta).size(11).color(style::MUTED),
            horizontal_space(),
            button(text("Remove").size(11))
                .style(style::danger_button)
                .on_press(Message::RemoveFile(index))
                .padding([4.0, 8.0]),
        ]
        .align_y(Alignment::Center),
    ]
    .spacing(6);

    container(column![art, caption].spacing(8))
        .style(style::card)
        .padding(10)
        .width(Length::Fixed(CARD_ART + 20.0))
        .into()
}

fn steps_row() -> Element<'static, Message> {
    let steps = [
        ("1", "Upload your images"),
        ("2", "The AI analyzes the objects"),
        ("3", "Get your results"),
    ];

    let mut cards = row![].spacing(16);
    for (number, label) in steps {
        cards = cards.push(
            container(
                column![
                    text(number).size(26).color(style::PRIMARY),
                    text(label).size(13).color(style::MUTED),
                ]
                .spacing(6)
                .align_x(Alignment::Center),
            )
            .style(style::card)
            .padding(20)
            .center_x(Length::Fill),
        );
    }

    cards.into()
}
