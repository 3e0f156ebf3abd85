//! Skeleton placeholder cards shown while a page loads.

use cosmic::iced::{Border, Color, Length};
use cosmic::{Element, cosmic_theme, theme, widget};

use crate::Message;

const PULSE_PERIOD: usize = 60;

/// Shimmer alpha for the given animation frame, a triangle wave so the bars
/// fade in and out smoothly
pub fn pulse(frame: usize) -> f32 {
    let phase = (frame % PULSE_PERIOD) as f32 / PULSE_PERIOD as f32;
    let triangle = if phase < 0.5 {
        phase * 2.0
    } else {
        2.0 - phase * 2.0
    };
    0.2 + 0.3 * triangle
}

pub fn skeleton_card<'a>(
    frame: usize,
    spacing: &cosmic_theme::Spacing,
    width: usize,
) -> Element<'a, Message> {
    let alpha = pulse(frame);
    let bar = |fraction: f32| -> Element<'a, Message> {
        widget::container(widget::Space::with_height(Length::Fixed(14.0)))
            .width(Length::Fixed(width as f32 * fraction))
            .class(theme::Container::custom(move |_theme| {
                widget::container::Style {
                    icon_color: None,
                    text_color: None,
                    background: Some(Color::from_rgba(0.5, 0.5, 0.5, alpha).into()),
                    border: Border {
                        radius: 4.0.into(),
                        ..Default::default()
                    },
                    shadow: Default::default(),
                }
            }))
            .into()
    };

    widget::container(
        widget::column::with_children(vec![bar(0.6), bar(0.8), bar(0.6), bar(0.8)])
            .spacing(spacing.space_s),
    )
    .width(width as f32)
    .height(240.0)
    .padding(spacing.space_s)
    .align_y(cosmic::iced::Alignment::Center)
    .class(theme::Container::Card)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pulse_stays_within_bounds() {
        for frame in 0..(PULSE_PERIOD * 2) {
            let alpha = pulse(frame);
            assert!((0.2..=0.5).contains(&alpha), "frame {}: {}", frame, alpha);
        }
    }

    #[test]
    fn pulse_is_periodic() {
        assert_eq!(pulse(3), pulse(3 + PULSE_PERIOD));
    }
}
