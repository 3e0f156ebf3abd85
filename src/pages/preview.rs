//! Live notification preview pane.

use cosmic::iced::Length;
use cosmic::{Element, cosmic_theme, theme, widget};

use crate::Message;
use crate::fl;

/// Render the preview for a notification template. The template body is a
/// trusted string owned by the backend and is handed to the rendering
/// collaborator verbatim; no escaping or sanitization happens here.
pub fn preview<'a>(
    name: &'a str,
    description: &'a str,
    template_body: &'a str,
    spacing: &cosmic_theme::Spacing,
) -> Element<'a, Message> {
    widget::column::with_children(vec![
        widget::text::heading(name).into(),
        widget::text::body(description).into(),
        widget::container(render_template(template_body))
            .padding(spacing.space_s)
            .width(Length::Fill)
            .class(theme::Container::Card)
            .into(),
    ])
    .spacing(spacing.space_xs)
    .width(Length::Fill)
    .into()
}

/// Seam for the HTML rendering collaborator. Until one is wired in, the raw
/// body is shown as monospace text so the admin can inspect the markup.
fn render_template(template_body: &str) -> Element<'_, Message> {
    widget::text::monotext(template_body).into()
}
