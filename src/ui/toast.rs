//! Toast presentation for drained notifications.
//!
//! Toasts float over the active screen, bottom-right, newest last. Each one
//! auto-expires on a timer in the application loop; the dismiss button is
//! for the impatient.

use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, column, container, row, text, Column};
use iced::{Alignment, Element, Length};

use crate::notify::Notification;
use crate::ui::style;
use crate::Message;

/// A notification currently on screen, with the id its timer expires.
#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

pub fn overlay(toasts: &[Toast]) -> Element<'_, Message> {
    let cards = Column::with_children(toasts.iter().map(card))
        .spacing(8)
        .width(Length::Fixed(340.0));

    container(cards)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Right)
        .align_y(Vertical::Bottom)
        .padding(16)
        .into()
}

fn card(toast: &Toast) -> Element<'_, Message> {
    let body = column![
        text(&toast.notification.title).size(14),
        text(&toast.notification.message)
            .size(12)
            .color(style::MUTED),
    ]
    .spacing(4)
    .width(Length::Fill);

    container(
        row![
            body,
            button(text("Dismiss").size(11))
                .style(style::ghost_button)
                .on_press(Message::DismissToast(toast.id))
                .padding([4.0, 8.0]),
        ]
        .spacing(12)
        .align_y(Alignment::Center),
    )
    .style(style::toast(toast.notification.kind))
    .padding(12)
    .into()
}
