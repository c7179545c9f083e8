//! Shared palette and widget styles for the cosmic dark look.
//!
//! The web mockups use a deep-navy background with blue/violet accents;
//! this is the same palette expressed through iced style functions.

use iced::theme::Palette;
use iced::widget::{button, container, progress_bar};
use iced::{Border, Color, Shadow, Theme};

use crate::notify::Kind;

pub const BACKGROUND: Color = Color {
    r: 0.04,
    g: 0.06,
    b: 0.12,
    a: 1.0,
};

pub const SURFACE: Color = Color {
    r: 0.08,
    g: 0.11,
    b: 0.19,
    a: 1.0,
};

pub const SURFACE_RAISED: Color = Color {
    r: 0.11,
    g: 0.15,
    b: 0.25,
    a: 1.0,
};

pub const EDGE: Color = Color {
    r: 0.17,
    g: 0.22,
    b: 0.34,
    a: 1.0,
};

pub const TEXT: Color = Color {
    r: 0.90,
    g: 0.91,
    b: 0.96,
    a: 1.0,
};

pub const MUTED: Color = Color {
    r: 0.55,
    g: 0.58,
    b: 0.70,
    a: 1.0,
};

pub const PRIMARY: Color = Color {
    r: 0.35,
    g: 0.55,
    b: 1.00,
    a: 1.0,
};

pub const VIOLET: Color = Color {
    r: 0.62,
    g: 0.42,
    b: 1.00,
    a: 1.0,
};

pub const ACCENT: Color = Color {
    r: 0.21,
    g: 0.82,
    b: 0.73,
    a: 1.0,
};

pub const DANGER: Color = Color {
    r: 1.00,
    g: 0.33,
    b: 0.44,
    a: 1.0,
};

pub fn theme() -> Theme {
    Theme::custom(
        "AstroVision".to_string(),
        Palette {
            background: BACKGROUND,
            text: TEXT,
            primary: PRIMARY,
            success: ACCENT,
            danger: DANGER,
        },
    )
}

pub fn with_alpha(color: Color, alpha: f32) -> Color {
    Color { a: alpha, ..color }
}

/// Standard raised card used across every screen.
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(SURFACE.into()),
        border: Border {
            color: EDGE,
            width: 1.0,
            radius: 12.0.into(),
        },
        ..container::Style::default()
    }
}

/// Pill-shaped count/confidence badge.
pub fn badge(_theme: &Theme) -> container::Style {
    container::Style {
        text_color: Some(TEXT),
        background: Some(SURFACE_RAISED.into()),
        border: Border {
            color: EDGE,
            width: 1.0,
            radius: 999.0.into(),
        },
        ..container::Style::default()
    }
}

/// The drop target. Highlights while a drag hovers the window.
pub fn drop_zone(active: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme| {
        let (edge, fill) = if active {
            (PRIMARY, with_alpha(PRIMARY, 0.08))
        } else {
            (EDGE, with_alpha(SURFACE, 0.6))
        };

        container::Style {
            background: Some(fill.into()),
            border: Border {
                color: edge,
                width: 2.0,
                radius: 12.0.into(),
            },
            ..container::Style::default()
        }
    }
}

/// Dark square behind thumbnails and gallery art.
pub fn art_well(tint: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(with_alpha(tint, 0.16).into()),
        border: Border {
            color: with_alpha(tint, 0.35),
            width: 1.0,
            radius: 10.0.into(),
        },
        ..container::Style::default()
    }
}

/// Header nav item; filled when its screen is active.
pub fn nav_button(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let background = if active {
            Some(with_alpha(PRIMARY, 0.22).into())
        } else if matches!(status, button::Status::Hovered) {
            Some(with_alpha(SURFACE_RAISED, 0.8).into())
        } else {
            None
        };

        button::Style {
            background,
            text_color: if active { TEXT } else { MUTED },
            border: Border {
                radius: 8.0.into(),
                ..Border::default()
            },
            shadow: Shadow::default(),
        }
    }
}

/// Filled call-to-action button.
pub fn primary_button(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => with_alpha(PRIMARY, 0.85),
        _ => PRIMARY,
    };

    button::Style {
        background: Some(background.into()),
        text_color: Color::WHITE,
        border: Border {
            radius: 8.0.into(),
            ..Border::default()
        },
        shadow: Shadow::default(),
    }
}

/// Outlined secondary button.
pub fn ghost_button(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Some(with_alpha(SURFACE_RAISED, 0.8).into())
        }
        _ => None,
    };

    button::Style {
        background,
        text_color: TEXT,
        border: Border {
            color: EDGE,
            width: 1.0,
            radius: 8.0.into(),
        },
        shadow: Shadow::default(),
    }
}

/// Small destructive button (remove a staged file).
pub fn danger_button(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => with_alpha(DANGER, 0.9),
        _ => with_alpha(DANGER, 0.75),
    };

    button::Style {
        background: Some(background.into()),
        text_color: Color::WHITE,
        border: Border {
            radius: 6.0.into(),
            ..Border::default()
        },
        shadow: Shadow::default(),
    }
}

/// Confidence bar on the results cards.
pub fn confidence_bar(_theme: &Theme) -> progress_bar::Style {
    progress_bar::Style {
        background: SURFACE_RAISED.into(),
        bar: PRIMARY.into(),
        border: Border {
            radius: 4.0.into(),
            ..Border::default()
        },
    }
}

/// Toast card, tinted by severity.
pub fn toast(kind: Kind) -> impl Fn(&Theme) -> container::Style {
    move |_theme| {
        let edge = match kind {
            Kind::Info => PRIMARY,
            Kind::Error => DANGER,
        };

        container::Style {
            text_color: Some(TEXT),
            background: Some(SURFACE_RAISED.into()),
            border: Border {
                color: edge,
                width: 1.0,
                radius: 10.0.into(),
            },
            ..container::Style::default()
        }
    }
}
