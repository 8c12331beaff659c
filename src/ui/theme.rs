/// Palettes, sizes and widget styles
use iced::theme::Palette;
use iced::widget::{button, container, text};
use iced::{color, font, Background, Border, Color, Font, Shadow, Theme, Vector};

use crate::state::config::ThemeChoice;
use crate::state::data::Platform;

pub const CONTENT_MAX_W: f32 = 1100.0;
pub const NAV_H: f32 = 64.0;
pub const PERIOD_W: f32 = 170.0;
pub const MOCKUP_COL_W: f32 = 420.0;
pub const GALLERY_H: f32 = 420.0;

pub const BOLD: Font = Font {
    weight: font::Weight::Bold,
    ..Font::DEFAULT
};

pub fn build(choice: ThemeChoice) -> Theme {
    match choice {
        ThemeChoice::Dark => Theme::custom(
            "Folio Dark".to_string(),
            Palette {
                background: color!(0x0b1120),
                text: color!(0xe2e8f0),
                primary: color!(0x7cb4ff),
                success: color!(0x4ade80),
                danger: color!(0xf87171),
            },
        ),
        ThemeChoice::Light => Theme::custom(
            "Folio Light".to_string(),
            Palette {
                background: color!(0xf8fafc),
                text: color!(0x0f172a),
                primary: color!(0x2563eb),
                success: color!(0x16a34a),
                danger: color!(0xdc2626),
            },
        ),
    }
}

pub fn muted(theme: &Theme) -> text::Style {
    let palette = theme.extended_palette();
    text::Style {
        color: Some(palette.background.base.text.scale_alpha(0.65)),
    }
}

pub fn accent(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme.palette().primary),
    }
}

fn rounded(radius: f32, color: Color) -> Border {
    Border {
        color,
        width: 1.0,
        radius: radius.into(),
    }
}

/// Outlined card used by skills, projects and the modal
pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.weak.color.scale_alpha(0.35).into()),
        border: rounded(12.0, palette.background.strong.color),
        ..container::Style::default()
    }
}

/// Frame around a mockup or gallery image
pub fn frame(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.weak.color.into()),
        border: rounded(16.0, palette.background.strong.color),
        shadow: Shadow {
            color: Color::BLACK.scale_alpha(0.4),
            offset: Vector::new(0.0, 8.0),
            blur_radius: 24.0,
        },
        ..container::Style::default()
    }
}

/// Grey technology/skill chip
pub fn chip(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        text_color: Some(palette.background.base.text.scale_alpha(0.75)),
        background: Some(palette.background.strong.color.scale_alpha(0.6).into()),
        border: rounded(999.0, Color::TRANSPARENT),
        ..container::Style::default()
    }
}

pub fn platform_badge(platform: Platform) -> impl Fn(&Theme) -> container::Style {
    move |theme| {
        let tint = match platform {
            Platform::Ios => color!(0x60a5fa),
            Platform::Android => color!(0x4ade80),
            Platform::CrossPlatform => theme.palette().primary,
            Platform::Web => color!(0xc084fc),
        };
        container::Style {
            text_color: Some(tint),
            background: Some(tint.scale_alpha(0.12).into()),
            border: rounded(999.0, Color::TRANSPARENT),
            ..container::Style::default()
        }
    }
}

/// Translucent pill used for the image counter
pub fn counter(_theme: &Theme) -> container::Style {
    container::Style {
        text_color: Some(Color::WHITE),
        background: Some(Color::BLACK.scale_alpha(0.5).into()),
        border: rounded(999.0, Color::TRANSPARENT),
        ..container::Style::default()
    }
}

pub fn nav_bar(scrolled: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme| {
        let palette = theme.extended_palette();
        if scrolled {
            container::Style {
                background: Some(palette.background.base.color.scale_alpha(0.95).into()),
                border: Border {
                    color: palette.primary.base.color.scale_alpha(0.1),
                    width: 1.0,
                    radius: 0.0.into(),
                },
                ..container::Style::default()
            }
        } else {
            container::Style::default()
        }
    }
}

pub fn indicator(active: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme| container::Style {
        background: active.then(|| Background::Color(theme.palette().primary)),
        ..container::Style::default()
    }
}

pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Color::BLACK.scale_alpha(0.5).into()),
        ..container::Style::default()
    }
}

/// Text-only button that brightens on hover
pub fn link(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette.primary.base.color,
        _ => palette.background.base.text.scale_alpha(0.7),
    };
    button::Style {
        text_color,
        background: None,
        ..button::Style::default()
    }
}

/// Round carousel arrow on top of the image
pub fn arrow(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered | button::Status::Pressed => 0.7,
        _ => 0.5,
    };
    button::Style {
        text_color: Color::WHITE,
        background: Some(Color::BLACK.scale_alpha(alpha).into()),
        border: rounded(999.0, Color::TRANSPARENT),
        ..button::Style::default()
    }
}

/// Indicator dot; the active one is wider and accent-colored
pub fn dot(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme, status| {
        let palette = theme.extended_palette();
        let fill = if active {
            palette.primary.base.color
        } else if matches!(status, button::Status::Hovered) {
            palette.background.base.text.scale_alpha(0.5)
        } else {
            palette.background.strong.color
        };
        button::Style {
            background: Some(fill.into()),
            border: rounded(999.0, Color::TRANSPARENT),
            ..button::Style::default()
        }
    }
}

/// Outlined call-to-action button
pub fn outlined(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Some(palette.primary.base.color.scale_alpha(0.1).into())
        }
        _ => None,
    };
    button::Style {
        text_color: palette.primary.base.color,
        background,
        border: rounded(8.0, palette.primary.base.color.scale_alpha(0.4)),
        ..button::Style::default()
    }
}
