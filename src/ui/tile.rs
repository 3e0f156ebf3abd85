//! Two-sided application tile.
//!
//! The front face summarizes a record and carries its action controls; the
//! back face shows the full description and timestamps. The Info/Back button
//! toggles the flip without selecting the record: buttons capture the press,
//! so it never reaches the surrounding mouse area. Pressing the card body
//! anywhere else selects the record.

use cosmic::iced::{Alignment, Border, Length};
use cosmic::{Element, cosmic_theme, theme, widget};

use crate::Message;
use crate::fl;
use crate::record::AppRecord;

const TILE_HEIGHT: f32 = 240.0;

pub fn tile_view<'a>(
    index: usize,
    record: &'a AppRecord,
    flipped: bool,
    selected: bool,
    spacing: &cosmic_theme::Spacing,
    width: usize,
) -> Element<'a, Message> {
    let face = if flipped {
        back_face(index, record, spacing)
    } else {
        front_face(index, record, selected, spacing)
    };

    let card = widget::container(face)
        .width(width as f32)
        .height(TILE_HEIGHT)
        .padding(spacing.space_s)
        .class(card_class(selected));

    widget::mouse_area(card)
        .on_press(Message::Select(index))
        .into()
}

fn front_face<'a>(
    index: usize,
    record: &'a AppRecord,
    selected: bool,
    spacing: &cosmic_theme::Spacing,
) -> Element<'a, Message> {
    let name: Element<_> = if selected {
        widget::text::title3(record.display_name()).into()
    } else {
        widget::text::title4(record.display_name()).into()
    };

    let activate: Element<_> = if record.is_active {
        widget::button::standard(fl!("deactivate"))
            .on_press(Message::SetActive(index, false))
            .into()
    } else {
        widget::button::suggested(fl!("activate"))
            .on_press(Message::SetActive(index, true))
            .into()
    };

    widget::column::with_children(vec![
        widget::row::with_children(vec![
            name,
            widget::horizontal_space().into(),
            widget::button::standard(fl!("info"))
                .on_press(Message::ToggleFlip(index))
                .into(),
        ])
        .align_y(Alignment::Center)
        .into(),
        widget::divider::horizontal::default().into(),
        widget::text::body(record.short_description())
            .height(Length::Fill)
            .into(),
        widget::row::with_children(vec![
            activate,
            widget::button::standard(fl!("edit"))
                .on_press(Message::EditApplication(index))
                .into(),
            widget::button::destructive(fl!("delete"))
                .on_press(Message::DeleteApplication(index))
                .into(),
        ])
        .spacing(spacing.space_xs)
        .into(),
    ])
    .spacing(spacing.space_xs)
    .into()
}

fn back_face<'a>(
    index: usize,
    record: &'a AppRecord,
    spacing: &cosmic_theme::Spacing,
) -> Element<'a, Message> {
    widget::column::with_children(vec![
        widget::row::with_children(vec![
            widget::text::title4(fl!("description")).into(),
            widget::horizontal_space().into(),
            widget::button::standard(fl!("back"))
                .on_press(Message::ToggleFlip(index))
                .into(),
        ])
        .align_y(Alignment::Center)
        .into(),
        widget::divider::horizontal::default().into(),
        widget::text::body(record.description.as_deref().unwrap_or_default())
            .height(Length::Fill)
            .into(),
        widget::row::with_children(vec![
            widget::text::caption(format!("{} {}", fl!("created-at"), record.created_date()))
                .into(),
            widget::horizontal_space().into(),
            widget::text::caption(format!("{} {}", fl!("updated-at"), record.updated_date()))
                .into(),
        ])
        .into(),
    ])
    .spacing(spacing.space_xs)
    .into()
}

/// Card background; the selected tile gets an accent border
fn card_class(selected: bool) -> theme::Container<'static> {
    if selected {
        theme::Container::custom(|theme| {
            let cosmic = theme.cosmic();
            let base_color = cosmic.background.component.base;
            let bg_color = cosmic::iced::Color::from_rgba(
                base_color.red,
                base_color.green,
                base_color.blue,
                base_color.alpha,
            );
            widget::container::Style {
                icon_color: Some(cosmic.on_bg_color().into()),
                text_color: Some(cosmic.on_bg_color().into()),
                background: Some(bg_color.into()),
                border: Border {
                    radius: cosmic.corner_radii.radius_s.into(),
                    width: 3.0,
                    color: cosmic.accent_color().into(),
                },
                shadow: Default::default(),
            }
        })
    } else {
        theme::Container::Card
    }
}
