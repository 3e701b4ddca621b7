use iced::widget::{button, container, text};
use iced::{Background, Border, Color, Shadow, Theme};

use crate::core::models::ThemeMode;

const ACCENT_BLUE: Color = Color::from_rgb(0.145, 0.388, 0.922);
const ACCENT_BLUE_HOVER: Color = Color::from_rgb(0.114, 0.306, 0.847);
const ACCENT_BLUE_PRESSED: Color = Color::from_rgb(0.118, 0.251, 0.686);

pub fn get_theme(mode: &ThemeMode) -> Theme {
    match mode {
        ThemeMode::Dark => Theme::custom(
            "Dark".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(0.067, 0.094, 0.153),
                text: Color::from_rgb(0.95, 0.95, 0.97),
                primary: Color::from_rgb(0.376, 0.647, 0.98),
                success: Color::from_rgb(0.2, 0.9, 0.4),
                danger: Color::from_rgb(0.973, 0.443, 0.443),
                warning: Color::from_rgb(1.0, 0.7, 0.0),
            },
        ),
        ThemeMode::Light => Theme::custom(
            "Light".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(0.976, 0.98, 0.984),
                text: Color::from_rgb(0.067, 0.094, 0.153),
                primary: ACCENT_BLUE,
                success: Color::from_rgb(0.1, 0.7, 0.3),
                danger: Color::from_rgb(0.863, 0.149, 0.149),
                warning: Color::from_rgb(0.9, 0.6, 0.0),
            },
        ),
    }
}

fn solid_button(background: Color, text_color: Color) -> button::Style {
    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: background,
            width: 1.0,
            radius: 8.0.into(),
        },
        shadow: Shadow::default(),
        ..Default::default()
    }
}

pub fn primary_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active => solid_button(ACCENT_BLUE, Color::WHITE),
        button::Status::Hovered => solid_button(ACCENT_BLUE_HOVER, Color::WHITE),
        button::Status::Pressed => solid_button(ACCENT_BLUE_PRESSED, Color::WHITE),
        button::Status::Disabled => solid_button(
            Color::from_rgba(0.145, 0.388, 0.922, 0.7),
            Color::from_rgba(1.0, 1.0, 1.0, 0.8),
        ),
    }
}

pub fn secondary_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.palette();

    let background = match status {
        button::Status::Active => Color::from_rgba(0.5, 0.5, 0.5, 0.15),
        button::Status::Hovered => Color::from_rgba(0.5, 0.5, 0.5, 0.3),
        button::Status::Pressed => Color::from_rgba(0.5, 0.5, 0.5, 0.4),
        button::Status::Disabled => Color::from_rgba(0.5, 0.5, 0.5, 0.05),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette.text,
        border: Border {
            color: Color::from_rgba(0.5, 0.5, 0.5, 0.4),
            width: 1.0,
            radius: 8.0.into(),
        },
        shadow: Shadow::default(),
        ..Default::default()
    }
}

/// Text-only button used for attribution links.
pub fn link_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.palette();
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette.text,
        _ => palette.primary,
    };

    button::Style {
        background: None,
        text_color,
        ..Default::default()
    }
}

pub fn card_container_style(theme: &Theme) -> container::Style {
    let palette = theme.palette();

    container::Style {
        background: Some(Background::Color(Color {
            a: 0.04,
            ..palette.text
        })),
        text_color: Some(palette.text),
        border: Border {
            color: Color::from_rgba(0.5, 0.5, 0.5, 0.25),
            width: 1.0,
            radius: 12.0.into(),
        },
        ..Default::default()
    }
}

pub fn error_text_style(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme.palette().danger),
    }
}

pub fn muted_text_style(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(Color::from_rgba(0.5, 0.5, 0.55, 1.0)),
    }
}
