// SPDX-License-Identifier: MPL-2.0
//! Button styles for the lightbox controls and gallery tiles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Semi-transparent buttons drawn over the photo (arrows, close, actions).
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::OVERLAY_PRESSED,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border {
                radius: radius::SM.into(),
                ..Border::default()
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}

/// Gallery thumbnail: no chrome, highlighted border on hover.
pub fn thumbnail(theme: &Theme, status: button::Status) -> button::Style {
    let text_color = theme.palette().text;
    let border_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::PRIMARY_400,
        _ => Color::TRANSPARENT,
    };

    button::Style {
        background: None,
        text_color,
        border: Border {
            color: border_color,
            width: 2.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::design_tokens::palette::WHITE;

    #[test]
    fn overlay_uses_hover_alpha() {
        let style = overlay(WHITE, 0.5, 0.8);
        let idle = style(&Theme::Dark, button::Status::Active);
        let hovered = style(&Theme::Dark, button::Status::Hovered);

        assert!(matches!(idle.background, Some(Background::Color(c)) if (c.a - 0.5).abs() < f32::EPSILON));
        assert!(matches!(hovered.background, Some(Background::Color(c)) if (c.a - 0.8).abs() < f32::EPSILON));
        assert_eq!(idle.text_color, WHITE);
    }

    #[test]
    fn thumbnail_border_only_on_hover() {
        let idle = thumbnail(&Theme::Light, button::Status::Active);
        let hovered = thumbnail(&Theme::Light, button::Status::Hovered);
        assert_eq!(idle.border.color, Color::TRANSPARENT);
        assert_eq!(hovered.border.color, palette::PRIMARY_400);
    }
}
