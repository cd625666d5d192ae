//! Theme colors and widget styles

use iced::widget::{button, container, text_input};
use iced::{Background, Border, Color, Theme};

pub const BACKGROUND: Color = Color::from_rgb(0.09, 0.09, 0.11);
pub const SURFACE: Color = Color::from_rgb(0.12, 0.12, 0.14);
pub const SURFACE_HIGHLIGHT: Color = Color::from_rgb(0.18, 0.18, 0.22);
pub const BORDER: Color = Color::from_rgb(0.25, 0.25, 0.28);
pub const PRIMARY: Color = Color::from_rgb(0.4, 0.55, 1.0);
pub const DANGER: Color = Color::from_rgb(0.9, 0.3, 0.3);
pub const SUCCESS: Color = Color::from_rgb(0.35, 0.8, 0.45);
pub const TEXT: Color = Color::from_rgb(0.95, 0.95, 0.95);
pub const TEXT_MUTED: Color = Color::from_rgb(0.55, 0.55, 0.6);
pub const TEXT_PLACEHOLDER: Color = Color::from_rgb(0.4, 0.4, 0.45);

/// Section card
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(SURFACE)),
        border: Border {
            color: BORDER,
            width: 1.0,
            radius: 12.0.into(),
        },
        ..Default::default()
    }
}

/// Row inside a card (file entries, search hits)
pub fn row_item(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(SURFACE_HIGHLIGHT)),
        border: Border::default().rounded(8),
        ..Default::default()
    }
}

pub fn window(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(BACKGROUND)),
        ..Default::default()
    }
}

pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color { a: 0.6, ..Color::BLACK })),
        ..Default::default()
    }
}

pub fn primary_button(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Disabled => Color { a: 0.5, ..PRIMARY },
        button::Status::Hovered | button::Status::Pressed => Color::from_rgb(0.33, 0.47, 0.9),
        button::Status::Active => PRIMARY,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: TEXT,
        border: Border::default().rounded(6),
        ..Default::default()
    }
}

pub fn danger_button(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, text_color) = match status {
        button::Status::Disabled => (Color::TRANSPARENT, Color { a: 0.5, ..DANGER }),
        button::Status::Hovered | button::Status::Pressed => (Color { a: 0.15, ..DANGER }, DANGER),
        button::Status::Active => (Color::TRANSPARENT, DANGER),
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: DANGER,
            width: 1.0,
            radius: 6.0.into(),
        },
        ..Default::default()
    }
}

/// Borderless button (cancel, trash icon)
pub fn quiet_button(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => DANGER,
        button::Status::Disabled => TEXT_PLACEHOLDER,
        button::Status::Active => TEXT_MUTED,
    };
    button::Style {
        background: None,
        text_color,
        border: Border::default().rounded(6),
        ..Default::default()
    }
}

pub fn input(_theme: &Theme, _status: text_input::Status) -> text_input::Style {
    text_input::Style {
        background: Background::Color(BACKGROUND),
        border: Border {
            color: BORDER,
            width: 1.0,
            radius: 6.0.into(),
        },
        icon: TEXT_MUTED,
        placeholder: TEXT_PLACEHOLDER,
        value: TEXT,
        selection: PRIMARY,
    }
}
