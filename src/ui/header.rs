//! Persistent navigation chrome shown above every screen.

use iced::widget::{button, container, horizontal_space, row, text};
use iced::{Alignment, Element, Length};

use crate::ui::style;
use crate::{Message, Screen};

pub fn view(active: Screen) -> Element<'static, Message> {
    let brand = row![
        text("AstroVision").size(20).color(style::PRIMARY),
        text("AI").size(20).color(style::VIOLET),
    ]
    .spacing(6)
    .align_y(Alignment::Center);

    let mut nav = row![].spacing(4).align_y(Alignment::Center);
    for screen in Screen::ALL {
        nav = nav.push(
            button(text(screen.title()).size(14))
                .style(style::nav_button(screen == active))
                .on_press(Message::Navigate(screen))
                .padding([8.0, 16.0]),
        );
    }

    let status = row![
        text("●").size(10).color(style::ACCENT),
        text("System active").size(12).color(style::MUTED),
    ]
    .spacing(6)
    .align_y(Alignment::Center);

    container(
        row![brand, horizontal_space(), nav, horizontal_space(), status]
            .align_y(Alignment::Center)
            .width(Length::Fill),
    )
    .style(|_theme| container::Style {
        background: Some(style::SURFACE.into()),
        ..container::Style::default()
    })
    .padding([12.0, 24.0])
    .into()
}
