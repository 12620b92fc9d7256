// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Style for the primary action of a view.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    filled(palette::PRIMARY_500, palette::PRIMARY_400, palette::PRIMARY_600)(_theme, status)
}

/// Style for destructive confirmations (ask modals of danger severity).
pub fn danger(_theme: &Theme, status: button::Status) -> button::Style {
    filled(palette::ERROR_500, palette::ERROR_400, palette::ERROR_600)(_theme, status)
}

/// Solid button in an arbitrary accent, e.g. a severity color.
pub fn tinted(accent: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    let hover = Color {
        a: opacity::OVERLAY_HOVER,
        ..accent
    };
    filled(accent, hover, accent)
}

/// Solid button with a hover color and a darker border.
pub fn filled(
    base: Color,
    hover: Color,
    edge: Color,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(base)),
            text_color: WHITE,
            border: Border {
                color: edge,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(hover)),
            text_color: WHITE,
            border: Border {
                color: base,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(palette::GRAY_200)),
            text_color: palette::GRAY_400,
            border: Border {
                color: palette::GRAY_400,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Style for selected/active button state, e.g. the current page link.
pub fn selected(theme: &Theme, status: button::Status) -> button::Style {
    primary(theme, status)
}

/// Style for unselected/secondary button state.
/// Adapts to light/dark theme while maintaining consistency.
pub fn unselected(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = !theme.extended_palette().is_dark;

    let (bg_color, text_color, border_color) = if is_light {
        (palette::GRAY_100, palette::GRAY_900, palette::GRAY_400)
    } else {
        (palette::GRAY_700, WHITE, palette::GRAY_400)
    };

    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(bg_color)),
            text_color,
            border: Border {
                color: border_color,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => {
            let hover_bg = if is_light {
                palette::GRAY_200
            } else {
                Color::from_rgb(0.35, 0.35, 0.35)
            };
            button::Style {
                background: Some(Background::Color(hover_bg)),
                text_color,
                border: Border {
                    color: palette::PRIMARY_500,
                    width: border::WIDTH_SM,
                    radius: radius::SM.into(),
                },
                shadow: shadow::SM,
                snap: true,
            }
        }
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(bg_color)),
            text_color: palette::GRAY_400,
            border: Border {
                color: palette::GRAY_400,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Borderless close button ("×") used by toasts, inline banners and modals.
pub fn dismiss(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let tinted = |alpha: f32| {
        Some(Background::Color(Color {
            a: alpha,
            ..palette::GRAY_400
        }))
    };

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: base.text,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: tinted(if status == button::Status::Hovered {
                opacity::OVERLAY_SUBTLE
            } else {
                opacity::OVERLAY_MEDIUM
            }),
            text_color: base.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base.text
            },
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Wraps a style so the keyboard-focused control shows a focus ring.
pub fn focus_ring(
    style: impl Fn(&Theme, button::Status) -> button::Style,
    focused: bool,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let mut resolved = style(theme, status);
        if focused {
            resolved.border = Border {
                color: palette::FOCUS_RING,
                width: border::WIDTH_MD,
                radius: resolved.border.radius,
            };
        }
        resolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_brand_colors() {
        let theme = Theme::Dark;
        let style = primary(&theme, button::Status::Active);

        if let Some(Background::Color(bg)) = style.background {
            assert_eq!(bg, palette::PRIMARY_500);
        } else {
            panic!("Expected background color");
        }
    }

    #[test]
    fn danger_button_uses_error_color() {
        let style = danger(&Theme::Light, button::Status::Active);
        assert_eq!(style.background, Some(Background::Color(palette::ERROR_500)));
    }

    #[test]
    fn tinted_button_fades_on_hover() {
        let style = tinted(palette::SUCCESS_500);
        let active = style(&Theme::Dark, button::Status::Active);
        let hovered = style(&Theme::Dark, button::Status::Hovered);

        assert_eq!(active.background, Some(Background::Color(palette::SUCCESS_500)));
        match hovered.background {
            Some(Background::Color(color)) => assert!(color.a < 1.0),
            other => panic!("expected color background, got {other:?}"),
        }
    }

    #[test]
    fn dismiss_button_is_transparent_until_hovered() {
        let theme = Theme::Dark;
        assert!(dismiss(&theme, button::Status::Active).background.is_none());
        assert!(dismiss(&theme, button::Status::Hovered).background.is_some());
    }

    #[test]
    fn focus_ring_only_applies_when_focused() {
        let theme = Theme::Light;
        let ringed = focus_ring(primary, true)(&theme, button::Status::Active);
        let plain = focus_ring(primary, false)(&theme, button::Status::Active);

        assert_eq!(ringed.border.color, palette::FOCUS_RING);
        assert_eq!(plain.border.color, palette::PRIMARY_600);
    }
}
